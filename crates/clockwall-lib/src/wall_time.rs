use std::fmt::Display;

use chrono::{DateTime, TimeZone, Timelike};

/// The 12-hour reading shown by an analog face.
///
/// `hour` is always in 1..=12, `minute` and `second` in 0..=59.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WallClockTime {
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
}

impl Default for WallClockTime {
    /// 1:15:00 keeps the three hands apart, which makes them easy to grab.
    fn default() -> Self {
        WallClockTime {
            hour: 1,
            minute: 15,
            second: 0,
        }
    }
}

impl WallClockTime {
    /// Builds a reading from a 24-hour hour, folding it into 1..=12.
    pub fn from_hms24(hour: u32, minute: u32, second: u32) -> Self {
        WallClockTime {
            hour: fold_hour(hour),
            minute: minute.min(59),
            second: second.min(59),
        }
    }

    pub fn from_datetime<Tz: TimeZone>(time: &DateTime<Tz>) -> Self {
        WallClockTime::from_hms24(time.hour(), time.minute(), time.second())
    }
}

impl Display for WallClockTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{:02}:{:02}", self.hour, self.minute, self.second)
    }
}

/// Folds a 24-hour hour into the 1..=12 range of a clock face (0 and 12 show as 12).
pub fn fold_hour(hour24: u32) -> u32 {
    match hour24 % 12 {
        0 => 12,
        h => h,
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Meridiem {
    #[default]
    Am,
    Pm,
}

impl Meridiem {
    pub fn toggled(self) -> Self {
        match self {
            Meridiem::Am => Meridiem::Pm,
            Meridiem::Pm => Meridiem::Am,
        }
    }

    /// Converts a 1..=12 face hour into 0..=23.
    ///
    /// 12 PM is noon and stays 12, 12 AM is midnight and becomes 0.
    pub fn to_hour24(self, hour12: u32) -> u32 {
        match self {
            Meridiem::Am if hour12 == 12 => 0,
            Meridiem::Am => hour12,
            Meridiem::Pm if hour12 + 12 < 24 => hour12 + 12,
            Meridiem::Pm => 12,
        }
    }
}

impl Display for Meridiem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Meridiem::Am => write!(f, "AM"),
            Meridiem::Pm => write!(f, "PM"),
        }
    }
}

/// `hh:mm:ss AM/PM` reading of an instant in its own zone.
pub fn format_time_12h<Tz: TimeZone>(time: &DateTime<Tz>) -> String
where
    Tz::Offset: Display,
{
    time.format("%I:%M:%S %p").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fold_hour() {
        assert_eq!(fold_hour(0), 12);
        assert_eq!(fold_hour(12), 12);
        assert_eq!(fold_hour(13), 1);
        assert_eq!(fold_hour(23), 11);
        assert_eq!(fold_hour(7), 7);
    }

    #[test]
    fn test_hour24() {
        assert_eq!(Meridiem::Pm.to_hour24(12), 12);
        assert_eq!(Meridiem::Am.to_hour24(12), 0);
        assert_eq!(Meridiem::Pm.to_hour24(3), 15);
        assert_eq!(Meridiem::Am.to_hour24(3), 3);
        assert_eq!(Meridiem::Pm.to_hour24(11), 23);
    }

    #[test]
    fn test_display() {
        let t = WallClockTime::from_hms24(0, 5, 9);
        assert_eq!(t.to_string(), "12:05:09");
        assert_eq!(Meridiem::Am.toggled().to_string(), "PM");
    }
}
