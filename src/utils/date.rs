//! UTC timestamps without timezone dependencies.
//!
//! A `Timestamp` is unix seconds in UTC. Formatting converts it to a
//! proleptic Gregorian date and prints one of the fixed `TimestampFormat`s.
//!
//! # Examples
//!
//! ```ignore
//! let ts = Timestamp::from_unix(1_718_461_845);
//! assert_eq!(ts.format(TimestampFormat::Rfc3339), "2024-06-15T14:30:45Z");
//! assert_eq!(ts.format(TimestampFormat::Human), "15 Jun 2024, 14:30");
//! ```

use serde::Serialize;
use std::time::{SystemTime, UNIX_EPOCH};

const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Output format for [`Timestamp::format`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimestampFormat {
    /// `15 Jun 2024, 14:30`
    #[default]
    Human,
    /// `14:30:45`
    Time,
    /// `2024-06-15T14:30:45Z`
    Rfc3339,
    /// `Sat, 15 Jun 2024 14:30:45 GMT`
    Rfc2822,
}

/// A point in time with second precision, stored as unix seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Timestamp(i64);

/// Broken-down UTC date/time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Civil {
    year: i64,
    month: u8,
    day: u8,
    hour: u8,
    minute: u8,
    second: u8,
}

impl Timestamp {
    pub fn now() -> Self {
        let secs = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs() as i64)
            .unwrap_or(0);
        Self(secs)
    }

    pub const fn from_unix(secs: i64) -> Self {
        Self(secs)
    }

    pub const fn unix(self) -> i64 {
        self.0
    }

    pub fn format(self, format: TimestampFormat) -> String {
        let c = self.civil();
        match format {
            TimestampFormat::Human => format!(
                "{} {} {:04}, {:02}:{:02}",
                c.day,
                MONTHS[(c.month - 1) as usize],
                c.year,
                c.hour,
                c.minute
            ),
            TimestampFormat::Time => format!("{:02}:{:02}:{:02}", c.hour, c.minute, c.second),
            TimestampFormat::Rfc3339 => format!(
                "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}Z",
                c.year, c.month, c.day, c.hour, c.minute, c.second
            ),
            TimestampFormat::Rfc2822 => {
                const WEEKDAYS: [&str; 7] = ["Thu", "Fri", "Sat", "Sun", "Mon", "Tue", "Wed"];
                // 1970-01-01 was a Thursday
                let weekday = self.0.div_euclid(86_400).rem_euclid(7) as usize;
                format!(
                    "{}, {:02} {} {:04} {:02}:{:02}:{:02} GMT",
                    WEEKDAYS[weekday],
                    c.day,
                    MONTHS[(c.month - 1) as usize],
                    c.year,
                    c.hour,
                    c.minute,
                    c.second
                )
            }
        }
    }

    /// Days-to-civil conversion (proleptic Gregorian calendar).
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn civil(self) -> Civil {
        let days = self.0.div_euclid(86_400);
        let secs = self.0.rem_euclid(86_400);

        let z = days + 719_468;
        let era = z.div_euclid(146_097);
        let doe = z.rem_euclid(146_097);
        let yoe = (doe - doe / 1460 + doe / 36_524 - doe / 146_096) / 365;
        let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
        let mp = (5 * doy + 2) / 153;
        let day = (doy - (153 * mp + 2) / 5 + 1) as u8;
        let month = (if mp < 10 { mp + 3 } else { mp - 9 }) as u8;
        let year = yoe + era * 400 + i64::from(month <= 2);

        Civil {
            year,
            month,
            day,
            hour: (secs / 3600) as u8,
            minute: ((secs / 60) % 60) as u8,
            second: (secs % 60) as u8,
        }
    }
}
