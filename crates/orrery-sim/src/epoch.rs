//! Julian-day helpers and the planetary/catalog epoch offset.
//!
//! Planetary elements are referenced to J2000; the asteroid catalog carries
//! its own osculating epoch. A single scalar offset, computed once at
//! startup, bridges the two: it is added to simulation time before
//! heliocentric Kepler evaluation of planets and dwarf planets only.

/// Julian day of the J2000.0 epoch (2000-01-01 12:00 TT).
pub const J2000_JD: f64 = 2_451_545.0;

pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// Julian day number (at noon) for a Gregorian calendar date.
///
/// Fliegel-Van Flandern integer algorithm; valid for all dates of interest.
pub fn julian_day(year: i32, month: i32, day: i32) -> f64 {
    let a = (month - 14) / 12;
    let jdn = (1461 * (year + 4800 + a)) / 4 + (367 * (month - 2 - 12 * a)) / 12
        - (3 * ((year + 4900 + a) / 100)) / 4
        + day
        - 32075;
    f64::from(jdn)
}

/// Seconds bridging the planetary reference epoch and the catalog epoch.
///
/// With both epochs equal the offset is exactly zero and planetary positions
/// at `sim_time = 0` match the raw element evaluation.
pub fn epoch_offset_seconds(planetary_epoch_jd: f64, catalog_epoch_jd: f64) -> f64 {
    (catalog_epoch_jd - planetary_epoch_jd) * SECONDS_PER_DAY
}
