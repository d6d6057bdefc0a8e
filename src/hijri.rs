//! Hijri (Islamic) calendar conversions.
//!
//! The arithmetic (tabular) Hijri calendar: years of 354 or 355 days in a
//! 30-year leap cycle of 10631 days. Sighting-based local calendars can
//! differ by a day or two; [`hijri_date`] takes a correction offset for
//! that.

use crate::consts::{HIJRI_CYCLE_DAYS, HIJRI_FORWARD_EPOCH, HIJRI_INVERSE_EPOCH};
use crate::types::{CalendarDate, JulianDay};
use crate::{DateError, validate_month_day};

/// Converts a Hijri calendar date to a Julian Day count.
///
/// # Errors
/// Returns [`DateError::InvalidMonth`] if `month` is outside `1..=12` and
/// [`DateError::NonFinite`] if `day` is NaN or infinite.
///
/// # Example
///
/// ```
/// use almanac::julian_day_from_hijri;
///
/// // 1 Muharram 1 AH.
/// let jd = julian_day_from_hijri(1, 1, 1.0).unwrap();
/// assert_eq!(1948440.0, jd.get());
/// ```
pub fn julian_day_from_hijri(year: i32, month: i32, day: f64) -> Result<JulianDay, DateError> {
    validate_month_day(month, day)?;

    let year = i64::from(year);
    let month = i64::from(month);
    let leap_days = (11 * year + 3) / 30;
    let year_days = 354 * year;
    // Months alternate 30 and 29 days.
    let month_days = 30 * month - (month - 1) / 2;

    let count = leap_days + year_days + month_days + i64::from(HIJRI_FORWARD_EPOCH);
    Ok(JulianDay::new(count as f64 + day))
}

/// Recovers a Hijri date from a Julian Day count.
///
/// `correction` is a signed day offset added to the count before the
/// conversion, compensating for local lunar-sighting adjustments. The
/// returned day is integral; the time-of-day fraction of `jd` is not
/// carried over.
///
/// # Errors
/// Returns [`DateError::NonFinite`] if `jd` is NaN or infinite, and
/// [`DateError::NegativeJulianDay`] for negative day counts.
///
/// # Example
///
/// ```
/// use almanac::{JulianDay, hijri_date};
///
/// // Noon UT on 2022 July 30, the first day of 1444 AH.
/// let date = hijri_date(JulianDay::new(2459791.0), 0).unwrap();
/// assert_eq!((1444, 1, 1.0), (date.year, date.month, date.day));
/// ```
pub fn hijri_date(jd: JulianDay, correction: i32) -> Result<CalendarDate, DateError> {
    let raw = jd.get();
    if !raw.is_finite() {
        return Err(DateError::NonFinite { value: raw });
    }
    if raw < 0.0 {
        return Err(DateError::NegativeJulianDay { jd: raw });
    }

    let count = (raw + f64::from(correction)).trunc() as i64 - HIJRI_INVERSE_EPOCH;

    // 30-year cycle extraction. The order of the truncating divisions is
    // load-bearing: reordering changes the result at cycle boundaries.
    let cycles = (count - 1) / HIJRI_CYCLE_DAYS;
    let days = count - HIJRI_CYCLE_DAYS * cycles + 354;
    let year_of_cycle = ((10_985 - days) / 5_316) * ((50 * days) / 17_719)
        + (days / 5_670) * ((43 * days) / 15_238);
    let days = days
        - ((30 - year_of_cycle) / 15) * ((17_719 * year_of_cycle) / 50)
        - (year_of_cycle / 16) * ((15_238 * year_of_cycle) / 43)
        + 29;

    let month = (24 * days) / 709;
    let day = days - (709 * month) / 24;
    let year = 30 * cycles + year_of_cycle - 30;

    Ok(CalendarDate::new(year as i32, month as i32, day as f64))
}
