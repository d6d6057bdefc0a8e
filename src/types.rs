use crate::DateError;
use crate::consts::{
    CENTURY_CYCLE, DAYS_IN_MONTH, FEBRUARY, FEBRUARY_DAYS_LEAP, GREGORIAN_CYCLE, LEAP_YEAR_CYCLE,
    MAX_MONTH, MJD_EPOCH_OFFSET,
};
use crate::prelude::*;
use serde::{Deserialize, Serialize};

/// A continuous count of days and fractions of a day, beginning at noon UT
/// on January 1, 4713 BC (proleptic Julian calendar).
///
/// Day boundaries fall at noon UT, so an `x.5` value is the midnight that
/// starts a civil day. This is the sole interchange value between the
/// calendar systems supported by this crate.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Display, From, Into, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JulianDay(f64);

impl JulianDay {
    /// Wraps a raw day count.
    pub const fn new(value: f64) -> Self {
        Self(value)
    }

    /// Returns the raw day count as f64
    #[inline]
    pub const fn get(self) -> f64 {
        self.0
    }

    /// Returns the Modified Julian Day (MJD 0.0 = 1858 November 17.0).
    pub fn modified(self) -> f64 {
        self.0 - MJD_EPOCH_OFFSET
    }
}

/// A calendar date with a fractional day.
///
/// The fractional part of `day` encodes the time of day as a fraction of
/// 24 hours. The same record is used for Gregorian/Julian and Hijri dates;
/// only the conversion that produced it knows which calendar it belongs to.
///
/// Fields are not validated: this is the *output* record of the inverse
/// conversions, which must produce a value for any finite non-negative day
/// count they are handed.
#[derive(Debug, Clone, Copy, PartialEq, Display, Serialize, Deserialize)]
#[display(fmt = "{:04}-{:02}-{}", year, month, day)]
pub struct CalendarDate {
    /// Astronomical year number (1 BC is 0, 2 BC is -1, ...).
    pub year: i32,
    /// Month number, nominally `1..=12`.
    pub month: i32,
    /// Day of the month with the time of day in the fractional part.
    pub day: f64,
}

impl CalendarDate {
    /// Bundles the three components into a date record.
    pub const fn new(year: i32, month: i32, day: f64) -> Self {
        Self { year, month, day }
    }
}

/// Day of the week, numbered 0 (Sunday) through 6 (Saturday).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
pub enum Weekday {
    Sunday = 0,
    Monday = 1,
    Tuesday = 2,
    Wednesday = 3,
    Thursday = 4,
    Friday = 5,
    Saturday = 6,
}

impl Weekday {
    /// Maps a day index to a weekday, wrapping modulo 7 (0 is Sunday).
    pub const fn from_index(index: u8) -> Self {
        match index % 7 {
            0 => Self::Sunday,
            1 => Self::Monday,
            2 => Self::Tuesday,
            3 => Self::Wednesday,
            4 => Self::Thursday,
            5 => Self::Friday,
            _ => Self::Saturday,
        }
    }

    /// Returns the day index (0 for Sunday through 6 for Saturday)
    #[inline]
    pub const fn index(self) -> u8 {
        self as u8
    }
}

// Helper functions

/// Returns `true` if `year` is a leap year under the Gregorian rules.
pub const fn is_leap_year(year: i32) -> bool {
    (year % LEAP_YEAR_CYCLE == 0 && year % CENTURY_CYCLE != 0) || (year % GREGORIAN_CYCLE == 0)
}

/// Number of days in `month` of `year` under the Gregorian rules.
///
/// # Errors
/// Returns `DateError::InvalidMonth` if `month` is outside `1..=12`.
pub fn days_in_month(year: i32, month: i32) -> Result<u8, DateError> {
    if !(1..=MAX_MONTH).contains(&month) {
        return Err(DateError::InvalidMonth { month });
    }
    if month == FEBRUARY && is_leap_year(year) {
        Ok(FEBRUARY_DAYS_LEAP)
    } else {
        Ok(DAYS_IN_MONTH[month as usize])
    }
}
