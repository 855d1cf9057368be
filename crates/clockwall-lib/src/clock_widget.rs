use chrono_tz::Tz;

use crate::angle_clock::AngleClock;
use crate::main_instant::MainInstant;
use crate::wall_time::{format_time_12h, WallClockTime};
use crate::zones::{display_name, full_name};

/// Space kept around the clock inside its cell, for the labels and the button.
pub const CELL_MARGIN: f32 = 35.0;
/// Side of the canvas of a clock that was just added to the wall, and the largest
/// side it is fitted to.
pub const DEFAULT_CLOCK_SIZE: f32 = 200.0;
/// Below this the hands no longer fit inside the face.
pub const MIN_CLOCK_SIZE: f32 = 60.0;

/// Signals a widget sends to the wall that owns it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WidgetSignal {
    RemoveRequested,
}

/// One clock of the wall: the face, the zone name and a digital readout.
#[derive(Debug, Clone)]
pub struct ClockWidget {
    zone: Tz,
    clock: AngleClock,
    max_size: f32,
    zone_label: String,
    time_label: String,
}

impl ClockWidget {
    pub fn new(zone: Tz, size: f32) -> Self {
        ClockWidget {
            zone,
            clock: AngleClock::new(size),
            max_size: size.max(MIN_CLOCK_SIZE),
            zone_label: display_name(zone),
            time_label: String::new(),
        }
    }

    pub fn zone(&self) -> Tz {
        self.zone
    }

    pub fn clock(&self) -> &AngleClock {
        &self.clock
    }

    pub fn time(&self) -> WallClockTime {
        self.clock.time()
    }

    pub fn zone_label(&self) -> &str {
        &self.zone_label
    }

    pub fn time_label(&self) -> &str {
        &self.time_label
    }

    /// `<full zone name>: hh:mm:ss AM/PM`
    pub fn readout(&self) -> String {
        format!("{}: {}", self.zone_label, self.time_label)
    }

    pub fn on_main_instant_changed(&mut self, instant: &MainInstant) {
        let local = instant.in_zone(self.zone);
        self.clock.set_time(WallClockTime::from_datetime(&local));
        self.zone_label = full_name(&local);
        self.time_label = format_time_12h(&local);
    }

    /// Fits the face in a cell of the given size, keeping it square and never larger
    /// than the size the widget was created with. Returns whether the face changed size.
    pub fn on_resize(&mut self, width: f32, height: f32) -> bool {
        let size = (width.min(height) - CELL_MARGIN)
            .clamp(MIN_CLOCK_SIZE, self.max_size)
            .floor();
        if size == self.clock.size() {
            return false;
        }
        self.clock.resize(size);
        true
    }

    /// Signal sent when the user presses the remove button of this clock.
    pub fn remove(&self) -> WidgetSignal {
        WidgetSignal::RemoveRequested
    }
}
