//! Clock and calendar value objects
//!
//! Every other component of the engine consumes minute-of-day integers;
//! raw "HH:MM" strings are parsed exactly once, here.

use chrono::{Datelike, Days, NaiveDate, NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{HubError, HubResult};

/// Minutes since midnight, in 0..=1439 (Value Object)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MinuteOfDay(u16);

impl MinuteOfDay {
    /// Upper bound (exclusive) for a minute-of-day value
    pub const MINUTES_PER_DAY: u16 = 1440;

    /// Create a validated minute-of-day
    pub fn new(minutes: u16) -> HubResult<Self> {
        if minutes >= Self::MINUTES_PER_DAY {
            return Err(HubError::InvalidValue(format!(
                "minute-of-day out of range: {minutes}"
            )));
        }
        Ok(Self(minutes))
    }

    /// Inner value as minutes since midnight
    pub const fn get(self) -> u16 {
        self.0
    }

    /// Signed value, convenient for must-leave arithmetic
    pub const fn as_i32(self) -> i32 {
        self.0 as i32
    }
}

/// A wall-clock time of day, canonical form "HH:MM" (Value Object)
///
/// # Invariants
/// - Hour 0..=23, minute 0..=59
/// - `parse` and `Display` round-trip losslessly
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClockTime(MinuteOfDay);

impl ClockTime {
    /// Parse a `"HH:MM"` string.
    ///
    /// Malformed input (wrong shape, non-numeric, out of range) is a
    /// contract violation and fails with [`HubError::InvalidTimeFormat`];
    /// it is never coerced to a plausible default.
    pub fn parse(value: &str) -> HubResult<Self> {
        let malformed = || HubError::InvalidTimeFormat(value.to_string());

        let (hh, mm) = value.split_once(':').ok_or_else(malformed)?;
        if hh.len() != 2 || mm.len() != 2 {
            return Err(malformed());
        }
        let hours: u16 = hh.parse().map_err(|_| malformed())?;
        let minutes: u16 = mm.parse().map_err(|_| malformed())?;
        if hours > 23 || minutes > 59 {
            return Err(malformed());
        }
        Ok(Self(MinuteOfDay(hours * 60 + minutes)))
    }

    /// Build from a minute-of-day value
    pub const fn from_minute_of_day(minute: MinuteOfDay) -> Self {
        Self(minute)
    }

    /// Build from raw minutes since midnight
    pub fn from_minutes(minutes: u16) -> HubResult<Self> {
        Ok(Self(MinuteOfDay::new(minutes)?))
    }

    /// The clock time of a timestamp, discarding the date part
    pub fn from_timestamp(ts: NaiveDateTime) -> Self {
        Self(MinuteOfDay((ts.hour() * 60 + ts.minute()) as u16))
    }

    /// Minutes since midnight
    pub const fn minutes(self) -> u16 {
        self.0.get()
    }

    /// Minute-of-day value object
    pub const fn minute_of_day(self) -> MinuteOfDay {
        self.0
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.minutes() / 60, self.minutes() % 60)
    }
}

impl Serialize for ClockTime {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for ClockTime {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw).map_err(serde::de::Error::custom)
    }
}

/// A business calendar date, canonical form "YYYY-MM-DD" (Value Object)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BusinessDate(NaiveDate);

impl BusinessDate {
    /// Parse a `"YYYY-MM-DD"` string
    pub fn parse(value: &str) -> HubResult<Self> {
        NaiveDate::parse_from_str(value, "%Y-%m-%d")
            .map(Self)
            .map_err(|_| HubError::InvalidDateFormat(value.to_string()))
    }

    /// Shift by a signed number of days
    pub fn add_days(self, delta: i64) -> Self {
        let shifted = if delta >= 0 {
            self.0
                .checked_add_days(Days::new(delta as u64))
                .unwrap_or(self.0)
        } else {
            self.0
                .checked_sub_days(Days::new(delta.unsigned_abs()))
                .unwrap_or(self.0)
        };
        Self(shifted)
    }

    /// Underlying calendar date
    pub const fn date(self) -> NaiveDate {
        self.0
    }

    /// The date part of a timestamp
    pub fn from_timestamp(ts: NaiveDateTime) -> Self {
        Self(ts.date())
    }
}

impl fmt::Display for BusinessDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02}",
            self.0.year(),
            self.0.month(),
            self.0.day()
        )
    }
}
