//! Gregorian/Julian calendar conversions and the quantities derived from
//! them.
//!
//! The forward conversion is calendar-aware: dates before 1582-10-15 are
//! interpreted in the Julian calendar, dates on or after it in the
//! Gregorian calendar, with the reform cutover evaluated at day
//! granularity. The inverse recovers a Gregorian-regime date from any
//! non-negative day count.

use crate::consts::{
    GREGORIAN_EPOCH_JDN, REFORM_FIRST_GREGORIAN_DAY, REFORM_FIRST_SKIPPED_DAY, REFORM_MONTH,
    REFORM_YEAR,
};
use crate::types::{CalendarDate, JulianDay, Weekday};
use crate::{DateError, validate_month_day};

/// Converts a proleptic calendar date to a Julian Day.
///
/// `year` is an astronomical year number (1 BC is `0`, 2 BC is `-1`, ...)
/// and the fractional part of `day` carries the time of day. Valid for
/// positive and negative years, but not for negative Julian Days.
///
/// # Errors
/// Returns [`DateError::InvalidMonth`] if `month` is outside `1..=12`,
/// [`DateError::NonFinite`] if `day` is NaN or infinite, and
/// [`DateError::ReformGap`] for 1582 October 5-14, the days removed by the
/// Gregorian reform.
///
/// # Example
///
/// ```
/// use almanac::julian_day_from_gregorian;
///
/// let jd = julian_day_from_gregorian(2000, 1, 1.5).unwrap();
/// assert_eq!(2451545.0, jd.get());
/// ```
pub fn julian_day_from_gregorian(year: i32, month: i32, day: f64) -> Result<JulianDay, DateError> {
    validate_month_day(month, day)?;
    if year == REFORM_YEAR
        && month == REFORM_MONTH
        && (REFORM_FIRST_SKIPPED_DAY..REFORM_FIRST_GREGORIAN_DAY).contains(&day)
    {
        return Err(DateError::ReformGap { day });
    }

    // January and February count as months 13 and 14 of the preceding year.
    let (year, month) = if month <= 2 {
        (i64::from(year) - 1, i64::from(month) + 12)
    } else {
        (i64::from(year), i64::from(month))
    };

    let correction = if is_gregorian(year, month, day) {
        let centuries = year / 100;
        (2 - centuries + centuries / 4) as f64
    } else {
        // Julian-calendar dates take a flat one-day correction.
        1.0
    };

    let days = (365.25 * (year as f64 + 4716.0)).trunc()
        + (30.6001 * (month as f64 + 1.0)).trunc()
        + day
        + correction
        - 1524.5;
    Ok(JulianDay::new(days))
}

/// Calendar regime test on a date already shifted to the month-13/14 form.
fn is_gregorian(year: i64, month: i64, day: f64) -> bool {
    if year != i64::from(REFORM_YEAR) {
        return year > i64::from(REFORM_YEAR);
    }
    if month != i64::from(REFORM_MONTH) {
        return month > i64::from(REFORM_MONTH);
    }
    day >= REFORM_FIRST_GREGORIAN_DAY
}

/// Recovers the calendar date for a Julian Day.
///
/// The inverse of [`julian_day_from_gregorian`] for Gregorian-regime day
/// counts; the time of day comes back in the fractional part of
/// [`CalendarDate::day`].
///
/// # Errors
/// Returns [`DateError::NonFinite`] if `jd` is NaN or infinite, and
/// [`DateError::NegativeJulianDay`] for negative day counts.
///
/// # Example
///
/// ```
/// use almanac::{JulianDay, gregorian_date};
///
/// let date = gregorian_date(JulianDay::new(2436116.31)).unwrap();
/// assert_eq!((1957, 10), (date.year, date.month));
/// assert!((date.day - 4.81).abs() < 1e-6);
/// ```
pub fn gregorian_date(jd: JulianDay) -> Result<CalendarDate, DateError> {
    let raw = jd.get();
    if !raw.is_finite() {
        return Err(DateError::NonFinite { value: raw });
    }
    if raw < 0.0 {
        return Err(DateError::NegativeJulianDay { jd: raw });
    }

    // Half-day shift: the integral part then changes at midnight rather
    // than at the noon day boundary.
    let shifted = raw + 0.5;
    let whole = shifted.floor();
    let fraction = shifted - whole;

    let corrected = if whole < GREGORIAN_EPOCH_JDN as f64 {
        whole
    } else {
        let centuries = ((whole - 1_867_216.25) / 36_524.25).trunc();
        whole + 1.0 + centuries - (centuries / 4.0).trunc()
    };

    let b = corrected + 1524.0;
    let c = ((b - 122.1) / 365.25).trunc();
    let d = (365.25 * c).trunc();
    let e = ((b - d) / 30.6001).trunc();

    let day = b - d - (30.6001 * e).trunc() + fraction;
    let month = if e < 14.0 { e - 1.0 } else { e - 13.0 };
    let year = if month > 2.0 { c - 4716.0 } else { c - 4715.0 };

    Ok(CalendarDate::new(year as i32, month as i32, day))
}

/// Modified Julian Day for a calendar date (MJD 0.0 = 1858 November 17.0).
///
/// # Errors
/// Propagates the validation errors of [`julian_day_from_gregorian`].
pub fn modified_julian_day_from_gregorian(
    year: i32,
    month: i32,
    day: f64,
) -> Result<f64, DateError> {
    Ok(julian_day_from_gregorian(year, month, day)?.modified())
}

/// Julian Day of January 0.0 of `year` (December 31.0 of the preceding
/// year).
///
/// A short formula covers 1901..=2099; other years take the general
/// century-corrected one.
pub fn julian_day_0_from_gregorian(year: i32) -> JulianDay {
    if (1901..=2099).contains(&year) {
        return JulianDay::new(1_721_409.5 + (365.25 * f64::from(year - 1)).trunc());
    }
    let year = i64::from(year) - 1;
    let centuries = year / 100;
    JulianDay::new(
        (365.25 * year as f64).trunc() + (centuries / 4 - centuries) as f64 + 1_721_424.5,
    )
}

/// Day of the week for a calendar date.
///
/// The fractional part of `day` is discarded: every instant of a civil day
/// shares its weekday.
///
/// # Errors
/// Propagates the validation errors of [`julian_day_from_gregorian`].
///
/// # Example
///
/// ```
/// use almanac::{Weekday, day_of_the_week};
///
/// assert_eq!(Ok(Weekday::Saturday), day_of_the_week(2000, 1, 1.0));
/// ```
pub fn day_of_the_week(year: i32, month: i32, day: f64) -> Result<Weekday, DateError> {
    let jd = julian_day_from_gregorian(year, month, day.trunc())?;
    // +1.5 aligns the noon-based count so that index 0 is Sunday.
    let index = ((jd.get() + 1.5) as i64).rem_euclid(7);
    Ok(Weekday::from_index(index as u8))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_day_counts() {
        for ((y, m, d), expected) in [
            ((2000, 1, 1.5), 2_451_545.0),
            ((1999, 1, 1.0), 2_451_179.5),
            ((1987, 1, 27.0), 2_446_822.5),
            ((1600, 12, 31.0), 2_305_812.5),
            ((1858, 11, 17.0), 2_400_000.5),
            ((1957, 10, 4.81), 2_436_116.31),
        ] {
            let jd = julian_day_from_gregorian(y, m, d).unwrap();
            assert!(
                (jd.get() - expected).abs() < 1e-9,
                "{y}-{m}-{d}: {} != {expected}",
                jd.get()
            );
        }
    }

    #[test]
    fn reform_boundary_regimes() {
        // Last Julian day and first Gregorian day of the reform: the
        // corrections differ (+1 vs -10), leaving both on the same count.
        let julian_side = julian_day_from_gregorian(1582, 10, 4.0).unwrap();
        let gregorian_side = julian_day_from_gregorian(1582, 10, 15.0).unwrap();
        assert_eq!(julian_side.get(), 2_299_160.5);
        assert_eq!(gregorian_side.get(), 2_299_160.5);

        // Late September 1582 is still Julian.
        assert_eq!(
            julian_day_from_gregorian(1582, 9, 30.0).unwrap().get(),
            2_299_156.5
        );
        // January 1583 is Gregorian (month 13 of 1582 after the shift).
        assert_eq!(
            julian_day_from_gregorian(1583, 1, 1.0).unwrap().get(),
            2_299_238.5
        );
    }

    #[test]
    fn reform_gap_rejected() {
        for day in [5.0, 10.0, 14.0, 14.999] {
            assert_eq!(
                julian_day_from_gregorian(1582, 10, day),
                Err(DateError::ReformGap { day })
            );
        }
        assert!(julian_day_from_gregorian(1582, 10, 4.999).is_ok());
        assert!(julian_day_from_gregorian(1582, 10, 15.0).is_ok());
        // The gap is specific to October 1582.
        assert!(julian_day_from_gregorian(1583, 10, 10.0).is_ok());
        assert!(julian_day_from_gregorian(1582, 9, 10.0).is_ok());
    }

    #[test]
    fn invalid_arguments() {
        assert_eq!(
            julian_day_from_gregorian(2000, 0, 1.0),
            Err(DateError::InvalidMonth { month: 0 })
        );
        assert_eq!(
            julian_day_from_gregorian(2000, 13, 1.0),
            Err(DateError::InvalidMonth { month: 13 })
        );
        assert!(matches!(
            julian_day_from_gregorian(2000, 1, f64::NAN),
            Err(DateError::NonFinite { .. })
        ));
        assert!(matches!(
            julian_day_from_gregorian(2000, 1, f64::INFINITY),
            Err(DateError::NonFinite { .. })
        ));
    }

    #[test]
    fn proleptic_years() {
        // The count begins at noon on January 1, 4713 BC (Julian).
        let jd = julian_day_from_gregorian(-4712, 1, 1.5).unwrap();
        assert_eq!(jd.get(), 1.0);
    }

    #[test]
    fn inverse_known_dates() {
        let date = gregorian_date(JulianDay::new(2_436_116.31)).unwrap();
        assert_eq!((1957, 10), (date.year, date.month));
        assert!((date.day - 4.81).abs() < 1e-6);

        let date = gregorian_date(JulianDay::new(2_451_545.0)).unwrap();
        assert_eq!((2000, 1, 1.5), (date.year, date.month, date.day));

        // First day of the Gregorian regime.
        let date = gregorian_date(JulianDay::new(2_299_160.5)).unwrap();
        assert_eq!((1582, 10, 15.0), (date.year, date.month, date.day));

        // Pre-cutover counts skip the century correction.
        let date = gregorian_date(JulianDay::new(1_842_713.0)).unwrap();
        assert_eq!((333, 1, 27.5), (date.year, date.month, date.day));
    }

    #[test]
    fn inverse_rejects_bad_counts() {
        assert!(matches!(
            gregorian_date(JulianDay::new(f64::NAN)),
            Err(DateError::NonFinite { .. })
        ));
        assert_eq!(
            gregorian_date(JulianDay::new(-1.0)),
            Err(DateError::NegativeJulianDay { jd: -1.0 })
        );
    }

    #[test]
    fn fractional_round_trips() {
        for (y, m, d) in [
            (2000, 1, 1.5),
            (1999, 12, 31.75),
            (2011, 7, 16.5),
            (1843, 2, 28.25),
            (1957, 10, 4.81),
        ] {
            let jd = julian_day_from_gregorian(y, m, d).unwrap();
            let date = gregorian_date(jd).unwrap();
            assert_eq!((y, m), (date.year, date.month));
            assert!((date.day - d).abs() < 1e-6, "{y}-{m}-{d} -> {}", date.day);
        }
    }

    #[test]
    fn modified_julian_day_epoch() {
        let mjd = modified_julian_day_from_gregorian(1858, 11, 17.0).unwrap();
        assert!(mjd.abs() < 1e-9);
        let mjd = modified_julian_day_from_gregorian(2000, 1, 1.5).unwrap();
        assert_eq!(mjd, 51_544.5);
    }

    #[test]
    fn january_zero() {
        for year in [1901, 1988, 2000, 2099, 1900, 2100, 1600] {
            let jd0 = julian_day_0_from_gregorian(year);
            let dec31 = julian_day_from_gregorian(year - 1, 12, 31.0).unwrap();
            assert_eq!(jd0, dec31, "January 0.0 of {year}");
        }
        assert_eq!(julian_day_0_from_gregorian(1988).get(), 2_447_160.5);
    }

    #[test]
    fn weekday_known_dates() {
        assert_eq!(Ok(Weekday::Saturday), day_of_the_week(2000, 1, 1.0));
        assert_eq!(Ok(Weekday::Wednesday), day_of_the_week(1954, 6, 30.0));
        assert_eq!(Ok(Weekday::Wednesday), day_of_the_week(2021, 9, 8.0));
        assert_eq!(Ok(Weekday::Tuesday), day_of_the_week(2000, 2, 29.0));
    }

    #[test]
    fn weekday_ignores_time_of_day() {
        assert_eq!(Ok(Weekday::Saturday), day_of_the_week(2000, 1, 1.9));
        assert_eq!(Ok(Weekday::Saturday), day_of_the_week(2000, 1, 1.0));
    }

    #[test]
    fn weekday_propagates_errors() {
        assert_eq!(
            day_of_the_week(2000, 13, 1.0),
            Err(DateError::InvalidMonth { month: 13 })
        );
    }
}
