//! Solar quantities derived from the day count: the equation of time and
//! the mean obliquity of the ecliptic.

use crate::DateError;
use crate::consts::{DAYS_PER_JULIAN_CENTURY, J2000_EPOCH, MINUTES_PER_DEGREE};
use crate::gregorian::julian_day_from_gregorian;

/// Mean obliquity of the ecliptic at J2000.0, 23°26'21".448, in degrees.
const OBLIQUITY_AT_J2000: f64 = 23.0 + 26.0 / 60.0 + 21.448 / 3_600.0;

/// Linear obliquity drift per 10000 Julian years, 4680".93, in degrees.
const OBLIQUITY_DRIFT: f64 = 4_680.93 / 3_600.0;

/// Higher-order obliquity series coefficients, for powers 2 through 10 of
/// the 10000-year time unit.
const OBLIQUITY_SERIES: [f64; 9] = [
    -1.55, 1_999.25, -51.38, -249.67, -39.05, 7.12, 27.87, 5.79, 2.45,
];

/// Mean obliquity of the ecliptic in degrees.
///
/// `t` is measured in Julian centuries since J2000.0; the polynomial is
/// evaluated over `t / 100` (units of 10000 years).
pub fn mean_obliquity(t: f64) -> f64 {
    let u = t / 100.0;
    let mut epsilon = OBLIQUITY_AT_J2000 - OBLIQUITY_DRIFT * u;
    for (i, coefficient) in OBLIQUITY_SERIES.iter().enumerate() {
        epsilon += coefficient * u.powi(i as i32 + 2);
    }
    epsilon
}

/// Eccentricity of the Earth's orbit, for `t` in Julian centuries since
/// J2000.0.
fn eccentricity(t: f64) -> f64 {
    0.016_708_634 - 0.000_042_037 * t - 0.000_000_126_7 * t * t
}

/// Equation of time in minutes: apparent solar time minus mean solar time.
///
/// Positive values mean the true sun crosses the meridian before the mean
/// sun. The result stays within roughly ±16.5 minutes over a year.
///
/// # Errors
/// Propagates the validation errors of [`julian_day_from_gregorian`].
///
/// # Example
///
/// ```
/// use almanac::equation_of_time;
///
/// let minutes = equation_of_time(1992, 10, 13.0).unwrap();
/// assert!((minutes - 13.71).abs() < 0.01);
/// ```
pub fn equation_of_time(year: i32, month: i32, day: f64) -> Result<f64, DateError> {
    let t = (julian_day_from_gregorian(year, month, day)?.get() - J2000_EPOCH)
        / DAYS_PER_JULIAN_CENTURY;

    // Geometric mean longitude and mean anomaly of the sun, in degrees.
    let mean_longitude = 280.46645 + 36_000.76983 * t + 0.000_303_2 * t * t;
    let mean_anomaly = 357.52772 + 35_999.05034 * t - 0.000_160_3 * t * t - t.powi(3) / 300_000.0;

    let l0 = mean_longitude.rem_euclid(360.0).to_radians();
    let m = mean_anomaly.rem_euclid(360.0).to_radians();
    let e = eccentricity(t);
    let epsilon = mean_obliquity(t).to_radians();
    let y = (epsilon / 2.0).tan().powi(2);

    let radians = y * (2.0 * l0).sin() - 2.0 * e * m.sin()
        + 4.0 * e * y * m.sin() * (2.0 * l0).cos()
        - 0.5 * y * y * (4.0 * l0).sin()
        - 1.25 * e * e * (2.0 * m).sin();

    Ok(radians.to_degrees() * MINUTES_PER_DEGREE)
}
