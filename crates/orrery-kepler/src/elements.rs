//! Classical orbital elements in catalog units (degrees and astronomical units).

/// One astronomical unit in meters.
pub const AU_M: f64 = 1.495_978_707e11;

/// Solar gravitational parameter GM in m^3/s^2.
const GM_SUN_M3_S2: f64 = 1.327_124_400_18e20;

/// Solar gravitational parameter in AU^3/s^2, the unit system positions are
/// solved in.
pub const MU_SUN_AU3_S2: f64 = GM_SUN_M3_S2 / (AU_M * AU_M * AU_M);

/// Six classical orbital elements describing a heliocentric two-body orbit.
///
/// Angles are stored in degrees and the semi-major axis in AU, matching the
/// catalog they are loaded from. Immutable once constructed; the solver
/// converts to radians internally.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OrbitalElements {
    /// Semi-major axis in AU. Must be positive for a bound orbit.
    pub semi_major_axis_au: f64,
    /// Eccentricity in [0, 1). Values >= 1 produce NaN positions.
    pub eccentricity: f64,
    /// Inclination to the ecliptic in degrees.
    pub inclination_deg: f64,
    /// Argument of perihelion in degrees.
    pub argument_of_perihelion_deg: f64,
    /// Longitude of the ascending node in degrees.
    pub longitude_of_ascending_node_deg: f64,
    /// Mean anomaly at the reference epoch in degrees.
    pub mean_anomaly_deg: f64,
}

impl OrbitalElements {
    /// Mean motion in radians per second.
    pub fn mean_motion(&self) -> f64 {
        (MU_SUN_AU3_S2 / self.semi_major_axis_au.powi(3)).sqrt()
    }

    /// Orbital period in seconds.
    pub fn period_seconds(&self) -> f64 {
        std::f64::consts::TAU / self.mean_motion()
    }
}
