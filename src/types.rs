use crate::error::RejectionReason;
use chrono::NaiveDate;
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use uuid::Uuid;

pub type StylistId = i64;

lazy_static! {
    static ref CLOCK_TIME: Regex = Regex::new(r"^[0-9]{2}:[0-9]{2}$").unwrap();
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stylist {
    pub id: StylistId,
    pub name: String,
}

/// Wall-clock time stored as minutes since midnight.
///
/// Parsed from and rendered as zero padded `HH:MM`, so ordering matches the
/// lexicographic ordering of the textual form. Hours run up to 99 so that
/// anything matching the pattern with a minute field of 00-59 has a value;
/// whether it lies within the business day is decided by `BusinessHours`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TimeOfDay(u16);

impl TimeOfDay {
    pub const LATEST: TimeOfDay = TimeOfDay::hm(99, 59);

    pub const fn hm(hour: u16, minute: u16) -> Self {
        Self(hour * 60 + minute)
    }

    /// Saturates at `LATEST` so every value renders as parseable `HH:MM`.
    pub fn plus_minutes(self, minutes: u16) -> Self {
        Self(self.0.saturating_add(minutes).min(Self::LATEST.0))
    }
}

/// Whether `value` has the shape of two digits, a colon and two digits.
pub fn is_clock_text(value: &str) -> bool {
    CLOCK_TIME.is_match(value)
}

impl FromStr for TimeOfDay {
    type Err = RejectionReason;

    /// Text that does not have the `HH:MM` shape is an `InvalidTimeFormat`.
    /// A minute field of 60 or more names no instant of any day, so it can
    /// never fall within business hours and is reported as `OutOfHours`.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        if !is_clock_text(value) {
            return Err(RejectionReason::InvalidTimeFormat);
        }
        let (hour, minute) = value
            .split_once(':')
            .ok_or(RejectionReason::InvalidTimeFormat)?;
        let hour: u16 = hour
            .parse()
            .map_err(|_| RejectionReason::InvalidTimeFormat)?;
        let minute: u16 = minute
            .parse()
            .map_err(|_| RejectionReason::InvalidTimeFormat)?;
        if minute > 59 {
            return Err(RejectionReason::OutOfHours);
        }
        Ok(Self::hm(hour, minute))
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.0 / 60, self.0 % 60)
    }
}

impl TryFrom<String> for TimeOfDay {
    type Error = RejectionReason;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<TimeOfDay> for String {
    fn from(value: TimeOfDay) -> Self {
        value.to_string()
    }
}

/// Half-open range `[start, end)` with `start < end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Interval {
    start: TimeOfDay,
    end: TimeOfDay,
}

impl Interval {
    pub fn new(start: TimeOfDay, end: TimeOfDay) -> Option<Self> {
        (start < end).then_some(Self { start, end })
    }

    pub fn start(&self) -> TimeOfDay {
        self.start
    }

    pub fn end(&self) -> TimeOfDay {
        self.end
    }

    /// Touching endpoints do not count as an overlap.
    pub fn overlaps(&self, other: &Interval) -> bool {
        self.start < other.end && self.end > other.start
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}

/// Bookings are partitioned by stylist and calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BookingKey {
    pub stylist_id: StylistId,
    pub date: NaiveDate,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Booking {
    pub id: Uuid,
    pub stylist_id: StylistId,
    pub date: NaiveDate,
    #[serde(flatten)]
    pub interval: Interval,
}

impl Booking {
    pub fn key(&self) -> BookingKey {
        BookingKey {
            stylist_id: self.stylist_id,
            date: self.date,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Slot {
    #[serde(flatten)]
    pub interval: Interval,
    pub occupied: bool,
}
