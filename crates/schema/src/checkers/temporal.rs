//! Time and duration checkers

use crate::foundation::{CoerceError, Value};
use chrono::{DateTime, FixedOffset, NaiveDate, NaiveTime};
use std::time::Duration;

const ZERO_DATE: NaiveDate = match NaiveDate::from_ymd_opt(1, 1, 1) {
    Some(date) => date,
    None => panic!("year 1 is within chrono's range"),
};

/// The time produced for empty text: `0001-01-01T00:00:00Z`.
#[must_use]
pub fn zero_time() -> DateTime<FixedOffset> {
    ZERO_DATE.and_time(NaiveTime::MIN).and_utc().fixed_offset()
}

crate::checker! {
    /// Accepts RFC 3339 text or an already-parsed time.
    ///
    /// Empty text yields [`zero_time`]. The offset of the input is kept.
    pub Time;
    coerce(value, path) {
        match value {
            Value::Time(t) => Ok(Value::Time(*t)),
            Value::String(s) if s.is_empty() => Ok(Value::Time(zero_time())),
            Value::String(s) => DateTime::parse_from_rfc3339(s)
                .map(Value::Time)
                .map_err(|e| CoerceError::conversion("time", e, path)),
            other => Err(CoerceError::expected("string or time value", other, path)),
        }
    }
    fn time();
}

crate::checker! {
    /// Accepts duration text (`"18h"`, `"1h 30m"`, `"300ms"`) or an
    /// already-parsed duration.
    ///
    /// Empty text yields a zero duration.
    pub TimeDuration;
    coerce(value, path) {
        match value {
            Value::Duration(d) => Ok(Value::Duration(*d)),
            Value::String(s) if s.is_empty() => Ok(Value::Duration(Duration::ZERO)),
            Value::String(s) => humantime::parse_duration(s)
                .map(Value::Duration)
                .map_err(|e| CoerceError::conversion("duration", e, path)),
            other => Err(CoerceError::expected("string or time duration", other, path)),
        }
    }
    fn time_duration();
}
