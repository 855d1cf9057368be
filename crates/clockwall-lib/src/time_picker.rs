use crate::angle_clock::{AngleClock, Point, DEFAULT_CANVAS_SIZE};
use crate::wall_time::{Meridiem, WallClockTime};

/// What the picker hands back when it closes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickerOutcome {
    Submitted { hour: u32, minute: u32, second: u32 },
    Cancelled,
}

/// State of the "select a time" dialog: an editable face and an AM/PM switch.
#[derive(Debug, Clone)]
pub struct TimePicker {
    clock: AngleClock,
    meridiem: Meridiem,
    open: bool,
}

impl Default for TimePicker {
    fn default() -> Self {
        TimePicker::new(DEFAULT_CANVAS_SIZE)
    }
}

impl TimePicker {
    pub fn new(size: f32) -> Self {
        TimePicker {
            clock: AngleClock::editable(size),
            meridiem: Meridiem::Am,
            open: false,
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    pub fn clock(&self) -> &AngleClock {
        &self.clock
    }

    pub fn clock_mut(&mut self) -> &mut AngleClock {
        &mut self.clock
    }

    pub fn meridiem(&self) -> Meridiem {
        self.meridiem
    }

    pub fn is_pm(&self) -> bool {
        self.meridiem == Meridiem::Pm
    }

    pub fn set_pm(&mut self, pm: bool) {
        self.meridiem = if pm { Meridiem::Pm } else { Meridiem::Am };
    }

    pub fn toggle_meridiem(&mut self) {
        self.meridiem = self.meridiem.toggled();
    }

    pub fn set_time(&mut self, time: WallClockTime) {
        self.clock.set_time(time);
    }

    pub fn press(&mut self, pointer: Point) {
        self.clock.press(pointer);
    }

    pub fn drag(&mut self, pointer: Point) -> bool {
        self.clock.drag(pointer)
    }

    pub fn release(&mut self) {
        self.clock.release();
    }

    pub fn hour24(&self) -> u32 {
        self.meridiem.to_hour24(self.clock.time().hour)
    }

    pub fn minute(&self) -> u32 {
        self.clock.time().minute
    }

    pub fn second(&self) -> u32 {
        self.clock.time().second
    }

    /// `Time: h:mm:ss AM`
    pub fn preview(&self) -> String {
        format!("Time: {} {}", self.clock.time(), self.meridiem)
    }

    pub fn submit(&mut self) -> PickerOutcome {
        self.open = false;
        self.clock.release();
        PickerOutcome::Submitted {
            hour: self.hour24(),
            minute: self.minute(),
            second: self.second(),
        }
    }

    pub fn cancel(&mut self) -> PickerOutcome {
        self.open = false;
        self.clock.release();
        PickerOutcome::Cancelled
    }
}
