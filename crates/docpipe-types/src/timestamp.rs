//! Timestamps restricted to the supported calendar window
//!
//! A [`Timestamp`] is a count of seconds since the Unix epoch plus a
//! non-negative nanosecond adjustment. Only instants between
//! 0001-01-01T00:00:00Z and 9999-12-31T23:59:59.999999999Z are representable;
//! every constructor checks the window, so a `Timestamp` value is always valid.

use chrono::{DateTime, SecondsFormat};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Seconds of 0001-01-01T00:00:00Z
pub const MIN_SECONDS: i64 = -62_135_596_800;

/// Seconds of 9999-12-31T23:59:59Z
pub const MAX_SECONDS: i64 = 253_402_300_799;

pub const MICROS_PER_SECOND: i64 = 1_000_000;
pub const MILLIS_PER_SECOND: i64 = 1_000;

const MAX_NANOS: u32 = 999_999_999;

/// Errors raised when a timestamp would leave the supported window
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TimestampError {
    /// Seconds outside `[MIN_SECONDS, MAX_SECONDS]`
    #[error("timestamp seconds {seconds} outside supported range [{min}, {max}]", min = MIN_SECONDS, max = MAX_SECONDS)]
    SecondsOutOfRange { seconds: i64 },

    /// Nanoseconds outside `[0, 999_999_999]`
    #[error("timestamp nanos {nanos} outside supported range [0, {max}]", max = MAX_NANOS)]
    NanosOutOfRange { nanos: u32 },

    /// Integer overflow while computing the instant
    #[error("integer overflow in {operation}")]
    Overflow { operation: &'static str },
}

/// A validated instant with nanosecond precision
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "RawTimestamp")]
pub struct Timestamp {
    seconds: i64,
    nanos: u32,
}

#[derive(Deserialize)]
struct RawTimestamp {
    seconds: i64,
    #[serde(default)]
    nanos: u32,
}

impl TryFrom<RawTimestamp> for Timestamp {
    type Error = TimestampError;

    fn try_from(raw: RawTimestamp) -> Result<Self, Self::Error> {
        Timestamp::new(raw.seconds, raw.nanos)
    }
}

impl Timestamp {
    /// The earliest representable instant
    pub const MIN: Timestamp = Timestamp {
        seconds: MIN_SECONDS,
        nanos: 0,
    };

    /// The latest representable instant
    pub const MAX: Timestamp = Timestamp {
        seconds: MAX_SECONDS,
        nanos: MAX_NANOS,
    };

    /// Create a timestamp, validating both components
    pub fn new(seconds: i64, nanos: u32) -> Result<Self, TimestampError> {
        if nanos > MAX_NANOS {
            return Err(TimestampError::NanosOutOfRange { nanos });
        }
        check_seconds(seconds)?;
        Ok(Self { seconds, nanos })
    }

    /// Create a timestamp from whole seconds since the epoch
    pub fn from_unix_seconds(seconds: i64) -> Result<Self, TimestampError> {
        Self::new(seconds, 0)
    }

    /// Create a timestamp from milliseconds since the epoch
    ///
    /// Uses floor division, so `-1` maps to `(-1, 999_000_000)`.
    pub fn from_unix_millis(millis: i64) -> Result<Self, TimestampError> {
        let seconds = millis.div_euclid(MILLIS_PER_SECOND);
        let rem = millis.rem_euclid(MILLIS_PER_SECOND);
        check_seconds(seconds)?;
        Ok(Self {
            seconds,
            nanos: (rem * 1_000_000) as u32,
        })
    }

    /// Create a timestamp from microseconds since the epoch
    ///
    /// Uses floor division, so `-10_000` maps to `(-1, 990_000_000)`.
    pub fn from_unix_micros(micros: i64) -> Result<Self, TimestampError> {
        let seconds = micros.div_euclid(MICROS_PER_SECOND);
        let rem = micros.rem_euclid(MICROS_PER_SECOND);
        check_seconds(seconds)?;
        Ok(Self {
            seconds,
            nanos: (rem * 1_000) as u32,
        })
    }

    /// Seconds since the epoch
    pub const fn seconds(&self) -> i64 {
        self.seconds
    }

    /// Nanosecond adjustment, always in `[0, 999_999_999]`
    pub const fn nanos(&self) -> u32 {
        self.nanos
    }

    /// Whole seconds since the epoch; nanoseconds are discarded
    pub const fn unix_seconds(&self) -> i64 {
        self.seconds
    }

    /// Whole milliseconds since the epoch, rounded toward negative infinity
    pub const fn unix_millis(&self) -> i64 {
        // Cannot overflow inside the calendar window.
        self.seconds * MILLIS_PER_SECOND + (self.nanos / 1_000_000) as i64
    }

    /// Whole microseconds since the epoch, rounded toward negative infinity
    pub const fn unix_micros(&self) -> i64 {
        self.seconds * MICROS_PER_SECOND + (self.nanos / 1_000) as i64
    }

    /// Shift the instant by a signed number of microseconds
    ///
    /// Sub-microsecond precision is preserved.
    pub fn checked_add_micros(&self, delta: i64) -> Result<Self, TimestampError> {
        let sub_micro = self.nanos % 1_000;
        let micros = self
            .unix_micros()
            .checked_add(delta)
            .ok_or(TimestampError::Overflow {
                operation: "timestamp addition",
            })?;
        let shifted = Self::from_unix_micros(micros)?;
        Ok(Self {
            seconds: shifted.seconds,
            nanos: shifted.nanos + sub_micro,
        })
    }

    /// Convert to a chrono UTC datetime
    pub fn to_datetime(&self) -> Option<DateTime<chrono::Utc>> {
        DateTime::from_timestamp(self.seconds, self.nanos)
    }
}

fn check_seconds(seconds: i64) -> Result<(), TimestampError> {
    if (MIN_SECONDS..=MAX_SECONDS).contains(&seconds) {
        Ok(())
    } else {
        Err(TimestampError::SecondsOutOfRange { seconds })
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_datetime() {
            Some(dt) => write!(f, "{}", dt.to_rfc3339_opts(SecondsFormat::AutoSi, true)),
            None => write!(f, "Timestamp({}, {})", self.seconds, self.nanos),
        }
    }
}
