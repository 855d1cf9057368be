use chrono::NaiveDate;
use chrono_tz::Tz;

use crate::clock_wall::ClockWall;
use crate::config::Config;
use crate::error::ClockError;
use crate::main_instant::MainInstant;
use crate::time_picker::{PickerOutcome, TimePicker};
use crate::zones::{now_in, ZoneDirectory};

/// Everything the main window shows, and the flows that change it.
///
/// The main instant is only ever replaced here; the wall just receives copies of it.
pub struct MainWindowState {
    pub zones: ZoneDirectory,
    pub wall: ClockWall,
    pub picker: TimePicker,
    main_zone: Tz,
    new_zone: Tz,
    main_instant: Option<MainInstant>,
}

impl MainWindowState {
    pub fn new(config: &Config) -> Result<Self, ClockError> {
        let zones = ZoneDirectory::load();
        let main_zone = match &config.main_zone {
            Some(id) => zones.resolve(id)?,
            None => zones
                .entries()
                .first()
                .map(|e| e.zone)
                .ok_or_else(|| ClockError::ZoneNotFound("any".to_string()))?,
        };
        Ok(MainWindowState {
            zones,
            wall: ClockWall::new(config.wall.columns, config.wall.clock_size),
            picker: TimePicker::default(),
            main_zone,
            new_zone: main_zone,
            main_instant: None,
        })
    }

    pub fn main_zone(&self) -> Tz {
        self.main_zone
    }

    pub fn new_zone(&self) -> Tz {
        self.new_zone
    }

    pub fn set_new_zone(&mut self, zone: Tz) {
        self.new_zone = zone;
    }

    pub fn main_instant(&self) -> Option<&MainInstant> {
        self.main_instant.as_ref()
    }

    /// `<zone name>: hh:mm:ss AM/PM`, or a placeholder before a time is chosen.
    pub fn main_label(&self) -> String {
        match &self.main_instant {
            Some(instant) => instant.label(),
            None => "Time:".to_string(),
        }
    }

    /// "Set main time": opens the picker.
    pub fn open_picker(&mut self) {
        self.picker.open();
    }

    /// Applies what the picker returned. `today` is the date the time is placed on.
    pub fn on_picker_closed(
        &mut self,
        outcome: PickerOutcome,
        today: NaiveDate,
    ) -> Result<(), ClockError> {
        match outcome {
            PickerOutcome::Cancelled => Ok(()),
            PickerOutcome::Submitted {
                hour,
                minute,
                second,
            } => self.set_main_time(today, hour, minute, second),
        }
    }

    pub fn set_main_time(
        &mut self,
        date: NaiveDate,
        hour: u32,
        minute: u32,
        second: u32,
    ) -> Result<(), ClockError> {
        let instant = MainInstant::from_local(self.main_zone, date, hour, minute, second)?;
        log::info!("Main time set to {}", instant.label());
        self.publish(instant);
        Ok(())
    }

    /// Today's date in the selected main zone.
    pub fn today(&self) -> NaiveDate {
        now_in(self.main_zone).date_naive()
    }

    /// "Change main zone": keeps the same local reading if a main time exists.
    pub fn change_main_zone(&mut self, zone: Tz) {
        self.main_zone = zone;
        if let Some(instant) = self.main_instant {
            let moved = instant.with_zone_same_local(zone);
            log::info!("Main zone changed, main time is now {}", moved.label());
            self.publish(moved);
        }
    }

    /// "Add clock" for the zone selected in the second list.
    /// Returns whether a clock was added.
    pub fn add_clock(&mut self) -> Result<bool, ClockError> {
        let Some(instant) = self.main_instant else {
            log::warn!("Tried to add a clock before choosing a main time");
            return Err(ClockError::MainTimeNotSet);
        };
        let added = self.wall.add_zone(self.new_zone.name())?;
        if added {
            self.wall.broadcast_main_instant(&instant);
        }
        Ok(added)
    }

    fn publish(&mut self, instant: MainInstant) {
        self.main_instant = Some(instant);
        self.wall.broadcast_main_instant(&instant);
    }
}
