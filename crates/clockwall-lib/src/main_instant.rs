use chrono::{DateTime, LocalResult, NaiveDate, NaiveDateTime, NaiveTime, Offset, TimeDelta, TimeZone};
use chrono_tz::Tz;

use crate::error::ClockError;
use crate::wall_time::format_time_12h;
use crate::zones::full_name;

/// Places a local reading in `zone`.
///
/// An ambiguous reading (clocks going back) takes the earlier offset. A reading that
/// falls in a gap (clocks going forward) is moved later by the length of the gap.
pub fn resolve_local(zone: Tz, local: NaiveDateTime) -> DateTime<Tz> {
    match zone.from_local_datetime(&local) {
        LocalResult::Single(time) => time,
        LocalResult::Ambiguous(earliest, _) => earliest,
        LocalResult::None => {
            // Interpret the reading with the offset in force before the transition
            let before = zone
                .offset_from_utc_datetime(&(local - TimeDelta::days(1)))
                .fix();
            let utc = local - TimeDelta::seconds(before.local_minus_utc() as i64);
            zone.from_utc_datetime(&utc)
        }
    }
}

/// The instant every clock on the wall is derived from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MainInstant {
    at: DateTime<Tz>,
}

impl MainInstant {
    pub fn new(at: DateTime<Tz>) -> Self {
        MainInstant { at }
    }

    /// Combines a zone, a date and a 24-hour time into an instant.
    pub fn from_local(
        zone: Tz,
        date: NaiveDate,
        hour: u32,
        minute: u32,
        second: u32,
    ) -> Result<Self, ClockError> {
        let time = NaiveTime::from_hms_opt(hour, minute, second).ok_or(ClockError::InvalidTime {
            hour,
            minute,
            second,
        })?;
        Ok(MainInstant::new(resolve_local(zone, date.and_time(time))))
    }

    pub fn zone(&self) -> Tz {
        self.at.timezone()
    }

    pub fn datetime(&self) -> DateTime<Tz> {
        self.at
    }

    /// Same local reading in another zone. This is not a conversion: 3:00 PM stays 3:00 PM.
    pub fn with_zone_same_local(&self, zone: Tz) -> Self {
        MainInstant::new(resolve_local(zone, self.at.naive_local()))
    }

    /// Same instant seen from another zone.
    pub fn in_zone(&self, zone: Tz) -> DateTime<Tz> {
        self.at.with_timezone(&zone)
    }

    /// `<zone name>: hh:mm:ss AM/PM`
    pub fn label(&self) -> String {
        format!("{}: {}", full_name(&self.at), format_time_12h(&self.at))
    }
}
