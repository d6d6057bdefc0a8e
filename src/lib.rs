//! Conversions between calendar dates and the continuous day counts used
//! in astronomical computation.
//!
//! The Julian Day, a continuous count of days and fractions of a day from
//! the beginning of the year -4712 with day boundaries at noon UT, is the
//! interchange value: every supported calendar converts to and from it.
//! On top of that primitive the crate derives the Modified Julian Day, the
//! day of the week and the solar equation of time.
//!
//! The forward Gregorian conversion is calendar-aware: dates before
//! 1582-10-15 use the Julian calendar, later dates the Gregorian one, and
//! the ten days removed by the reform are rejected as
//! [`DateError::ReformGap`].
//!
//! # Examples
//!
//! Round-tripping a Gregorian date:
//!
//! ```
//! use almanac::{gregorian_date, julian_day_from_gregorian};
//!
//! let jd = julian_day_from_gregorian(2000, 1, 1.5).unwrap();
//! assert_eq!(2451545.0, jd.get());
//!
//! let date = gregorian_date(jd).unwrap();
//! assert_eq!((2000, 1, 1.5), (date.year, date.month, date.day));
//! ```
//!
//! Hijri (Islamic) calendar:
//!
//! ```
//! use almanac::{hijri_date, julian_day_from_hijri};
//!
//! let jd = julian_day_from_hijri(1421, 1, 1.0).unwrap();
//! let date = hijri_date(jd, 0).unwrap();
//! assert_eq!((1421, 1, 1.0), (date.year, date.month, date.day));
//! ```

mod consts;
mod gregorian;
mod hijri;
mod prelude;
mod solar;
mod types;

pub use consts::*;
pub use gregorian::{
    day_of_the_week, gregorian_date, julian_day_0_from_gregorian, julian_day_from_gregorian,
    modified_julian_day_from_gregorian,
};
pub use hijri::{hijri_date, julian_day_from_hijri};
pub use solar::{equation_of_time, mean_obliquity};
pub use types::{CalendarDate, JulianDay, Weekday, days_in_month, is_leap_year};

/// Error type for all fallible conversions in this crate.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum DateError {
    /// Returned when a month number is outside the valid range 1..=12.
    #[error("invalid month: {month} (must be 1..=12)")]
    InvalidMonth {
        /// The invalid month number that was provided.
        month: i32,
    },

    /// Returned when a day or day-count argument is NaN or infinite.
    #[error("non-finite input: {value}")]
    NonFinite {
        /// The offending value.
        value: f64,
    },

    /// Returned for 1582 October 5-14, the dates removed by the Gregorian
    /// calendar reform.
    #[error("no such date: 1582-10-{day} was skipped by the Gregorian reform")]
    ReformGap {
        /// The day component that falls inside the reform gap.
        day: f64,
    },

    /// Returned when a day count is negative; the inverse conversions are
    /// only defined for non-negative Julian Days.
    #[error("negative Julian Day: {jd}")]
    NegativeJulianDay {
        /// The negative day count that was provided.
        jd: f64,
    },
}

/// Shared argument validation for the forward conversions.
pub(crate) fn validate_month_day(month: i32, day: f64) -> Result<(), DateError> {
    if !(1..=consts::MAX_MONTH).contains(&month) {
        return Err(DateError::InvalidMonth { month });
    }
    if !day.is_finite() {
        return Err(DateError::NonFinite { value: day });
    }
    Ok(())
}
