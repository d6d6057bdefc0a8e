/// Julian Day of the epoch J2000.0 (2000 January 1.5)
pub const J2000_EPOCH: f64 = 2_451_545.0;

/// Days in a Julian century
pub const DAYS_PER_JULIAN_CENTURY: f64 = 36_525.0;

/// Offset between the Julian Day and Modified Julian Day scales.
/// MJD 0.0 corresponds to 1858 November 17.0
pub const MJD_EPOCH_OFFSET: f64 = 2_400_000.5;

/// Year of the Gregorian calendar reform
pub const REFORM_YEAR: i32 = 1582;

/// Month of the Gregorian calendar reform (October 1582)
pub const REFORM_MONTH: i32 = 10;

/// First day of October 1582 counted in the Gregorian calendar
pub const REFORM_FIRST_GREGORIAN_DAY: f64 = 15.0;

/// First of the ten October 1582 days skipped by the reform
pub const REFORM_FIRST_SKIPPED_DAY: f64 = 5.0;

/// Smallest integral Julian Day in the Gregorian regime, used by the
/// inverse conversion to pick the calendar correction
pub const GREGORIAN_EPOCH_JDN: i64 = 2_299_161;

/// Maximum valid month (December / Dhu al-Hijjah)
pub const MAX_MONTH: i32 = 12;

/// Day count anchoring 1 Muharram 1 AH to the Julian Day scale used by the
/// forward Hijri conversion (raw epoch 1948440 minus a 385-day calibration)
pub const HIJRI_FORWARD_EPOCH: i32 = 1_948_440 - 385;

/// Epoch offset subtracted before the Hijri inverse cycle extraction
pub const HIJRI_INVERSE_EPOCH: i64 = 1_937_808;

/// Days in the 30-year arithmetic Hijri leap cycle
pub const HIJRI_CYCLE_DAYS: i64 = 10_631;

/// Minutes of time per degree of apparent solar motion (24h / 360°)
pub const MINUTES_PER_DEGREE: f64 = 4.0;

/// Month number for February
pub(crate) const FEBRUARY: i32 = 2;

/// Days in February for leap years
pub(crate) const FEBRUARY_DAYS_LEAP: u8 = 29;

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: i32 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: i32 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: i32 = 400;

/// Maximum days in each month (index 0 is unused, months are 1-indexed)
/// February shows 28 days (non-leap year default)
pub(crate) const DAYS_IN_MONTH: [u8; 13] = [
    0,  // index 0 unused (months are 1-indexed)
    31, // January
    28, // February (non-leap, adjusted by is_leap_year check)
    31, // March
    30, // April
    31, // May
    30, // June
    31, // July
    31, // August
    30, // September
    31, // October
    30, // November
    31, // December
];
