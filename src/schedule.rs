use chrono::{DateTime, Datelike, TimeZone, Timelike};
use chrono_tz::Tz;

use crate::{config::Schedule, error::Error};

/// True on weekdays at exactly the scheduled minute, or always when forced.
///
/// The job is meant to be started every minute by an external scheduler; this
/// is what keeps all but one of those invocations a no-op.
pub fn is_target_time<T: TimeZone>(now: &DateTime<T>, schedule: Schedule, force: bool) -> bool {
    if force {
        return true;
    }
    now.weekday().number_from_monday() <= 5
        && now.hour() == schedule.hour
        && now.minute() == schedule.minute
}

pub fn parse_time_zone(name: &str) -> crate::Result<Tz> {
    name.parse::<Tz>()
        .map_err(|e| Error::Config(format!("unknown time zone {name:?}: {e}")))
}
