//! DateTime display utilities.

use std::fmt;

use jiff::{Timestamp, tz::TimeZone};

/// Formats a `Timestamp` as `YYYY-MM-DD HH:MM:SS TZ`.
///
/// The system time zone is used unless another one is supplied with
/// [`LocalDateTime::in_zone`].
///
/// ```rust
/// use jiff::{Timestamp, tz::TimeZone};
/// use waypoint_core::display::LocalDateTime;
///
/// let ts = Timestamp::from_second(1_640_995_200).unwrap();
/// let formatted = LocalDateTime::in_zone(&ts, TimeZone::UTC).to_string();
/// assert_eq!(formatted, "2022-01-01 00:00:00 UTC");
/// ```
pub struct LocalDateTime<'a> {
    timestamp: &'a Timestamp,
    zone: Option<TimeZone>,
}

impl<'a> LocalDateTime<'a> {
    /// Formats in the system time zone.
    pub fn new(timestamp: &'a Timestamp) -> Self {
        Self {
            timestamp,
            zone: None,
        }
    }

    pub fn in_zone(timestamp: &'a Timestamp, zone: TimeZone) -> Self {
        Self {
            timestamp,
            zone: Some(zone),
        }
    }
}

impl fmt::Display for LocalDateTime<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let zone = self.zone.clone().unwrap_or_else(TimeZone::system);
        write!(
            f,
            "{}",
            self.timestamp.to_zoned(zone).strftime("%Y-%m-%d %H:%M:%S %Z")
        )
    }
}
