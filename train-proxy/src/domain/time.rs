//! Departure time-of-day handling.
//!
//! The upstream feed sends departures as bare `{Hours, Minutes, Seconds}`
//! triples with no date. The board always places them on "today" in UTC.
//! Fields are not range-checked: out-of-range values roll over arithmetically
//! (25:00 is 01:00 the next day, -1 minute is 23:59 the day before).

use std::fmt;

use chrono::{DateTime, NaiveDate, NaiveTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};

const SECS_PER_HOUR: i64 = 60 * 60;
const SECS_PER_MINUTE: i64 = 60;

/// A scheduled departure time of day, as sent by the train feed.
///
/// # Examples
///
/// ```
/// use train_proxy::domain::DepartureTime;
/// use chrono::{NaiveDate, Timelike};
///
/// let date = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
/// let dep = DepartureTime::new(14, 30, 0);
/// let instant = dep.on(date);
/// assert_eq!(instant.date_naive(), date);
/// assert_eq!(instant.hour(), 14);
/// assert_eq!(instant.minute(), 30);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct DepartureTime {
    #[serde(rename = "Hours")]
    pub hours: i64,
    #[serde(rename = "Minutes")]
    pub minutes: i64,
    #[serde(rename = "Seconds")]
    pub seconds: i64,
}

impl DepartureTime {
    pub fn new(hours: i64, minutes: i64, seconds: i64) -> Self {
        Self {
            hours,
            minutes,
            seconds,
        }
    }

    /// Offset from midnight in seconds, without normalising any field.
    pub fn seconds_from_midnight(&self) -> i64 {
        self.hours
            .saturating_mul(SECS_PER_HOUR)
            .saturating_add(self.minutes.saturating_mul(SECS_PER_MINUTE))
            .saturating_add(self.seconds)
    }

    /// Place this time of day on `date`, in UTC.
    ///
    /// Out-of-range fields carry into neighbouring days rather than failing.
    ///
    /// ```
    /// use train_proxy::domain::DepartureTime;
    /// use chrono::{NaiveDate, Timelike};
    ///
    /// let date = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
    /// let late = DepartureTime::new(25, 0, 0).on(date);
    /// assert_eq!(late.date_naive(), NaiveDate::from_ymd_opt(2024, 3, 16).unwrap());
    /// assert_eq!(late.hour(), 1);
    /// ```
    pub fn on(&self, date: NaiveDate) -> DateTime<Utc> {
        shift_secs(midnight(date), self.seconds_from_midnight())
    }
}

impl fmt::Display for DepartureTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}:{:02}:{:02}",
            self.hours, self.minutes, self.seconds
        )
    }
}

/// Midnight at the start of `date`, in UTC.
pub fn midnight(date: NaiveDate) -> DateTime<Utc> {
    date.and_time(NaiveTime::MIN).and_utc()
}

/// Move `base` by `secs` seconds, saturating at the representable range.
pub fn shift_secs(base: DateTime<Utc>, secs: i64) -> DateTime<Utc> {
    TimeDelta::try_seconds(secs)
        .and_then(|delta| base.checked_add_signed(delta))
        .unwrap_or(if secs < 0 {
            DateTime::<Utc>::MIN_UTC
        } else {
            DateTime::<Utc>::MAX_UTC
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn places_time_on_date() {
        let d = date(2024, 3, 15);
        let t = DepartureTime::new(9, 5, 30).on(d);

        assert_eq!(t.date_naive(), d);
        assert_eq!(t.hour(), 9);
        assert_eq!(t.minute(), 5);
        assert_eq!(t.second(), 30);
    }

    #[test]
    fn midnight_is_start_of_day() {
        let d = date(2024, 3, 15);
        assert_eq!(DepartureTime::default().on(d), midnight(d));
        assert_eq!(midnight(d).hour(), 0);
    }

    #[test]
    fn out_of_range_fields_roll_over() {
        let d = date(2024, 3, 15);

        let t = DepartureTime::new(23, 75, 0).on(d);
        assert_eq!(t.date_naive(), date(2024, 3, 16));
        assert_eq!((t.hour(), t.minute()), (0, 15));

        let t = DepartureTime::new(0, -1, 0).on(d);
        assert_eq!(t.date_naive(), date(2024, 3, 14));
        assert_eq!((t.hour(), t.minute()), (23, 59));
    }

    #[test]
    fn extreme_fields_saturate_instead_of_panicking() {
        let d = date(2024, 3, 15);

        assert_eq!(
            DepartureTime::new(i64::MAX, 0, 0).on(d),
            DateTime::<Utc>::MAX_UTC
        );
        assert_eq!(
            DepartureTime::new(i64::MIN, 0, 0).on(d),
            DateTime::<Utc>::MIN_UTC
        );
    }

    #[test]
    fn wire_names() {
        let json = r#"{"Hours":10,"Minutes":20,"Seconds":5}"#;
        let dep: DepartureTime = serde_json::from_str(json).unwrap();
        assert_eq!(dep, DepartureTime::new(10, 20, 5));
        assert_eq!(serde_json::to_string(&dep).unwrap(), json);
    }

    #[test]
    fn display_pads_fields() {
        assert_eq!(DepartureTime::new(7, 5, 0).to_string(), "07:05:00");
    }
}
