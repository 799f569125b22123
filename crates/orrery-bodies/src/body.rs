//! Celestial body descriptions and the simplified satellite orbit model.

use glam::DVec3;
use orrery_kepler::OrbitalElements;

/// Kilometers per astronomical unit.
pub const KM_PER_AU: f64 = 1.495_978_707e8;

/// Converts a log10-compressed radius into displayed AU.
pub const RADIUS_SCALE_AU: f64 = 0.01;

const SECONDS_PER_DAY: f64 = 86_400.0;

/// Circular-orbit parameters for a satellite.
#[derive(Clone, Copy, Debug)]
pub struct MoonParams {
    /// Orbit radius around the parent in kilometers.
    pub semi_major_axis_km: f64,
    /// Orbital period in days. A negative period encodes retrograde motion;
    /// the sign, not a separate flag, carries direction.
    pub period_days: f64,
}

/// Heliocentric orbit class, used only to pick rendering density.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OrbitClass {
    Planet,
    DwarfPlanet,
}

/// How a body moves, resolved through a single evaluation dispatch.
#[derive(Clone, Copy, Debug)]
pub enum BodyKind {
    /// Pinned at the origin.
    Star,
    /// Full Keplerian solution around the star.
    Orbiting {
        elements: OrbitalElements,
        class: OrbitClass,
    },
    /// Circular orbit around a named parent, which must appear earlier in
    /// the body table.
    Satellite {
        parent: &'static str,
        params: MoonParams,
    },
}

/// Static configuration for one body. Not mutated at runtime.
#[derive(Clone, Copy, Debug)]
pub struct CelestialBody {
    pub name: &'static str,
    pub kind: BodyKind,
    /// Physical radius in kilometers.
    pub radius_km: f64,
    /// Linear RGB display color.
    pub color: [f32; 3],
    /// Per-body multiplier on the displayed radius. Dwarf planets and moons
    /// use values below 1.0 to reduce visual clutter.
    pub size_scale: f64,
}

impl CelestialBody {
    /// Displayed radius in AU: log-compressed so the Sun does not dwarf
    /// Mercury on screen. Not a physical size.
    pub fn display_radius_au(&self) -> f64 {
        self.size_scale * self.radius_km.log10() * RADIUS_SCALE_AU
    }
}

/// Satellite position for the circular, ecliptic-plane orbit model.
///
/// Intentionally lower fidelity than the planetary solver: no inclination,
/// no eccentricity. At this visual scale orbital-plane accuracy for moons is
/// not worth the cost.
pub fn moon_position(params: &MoonParams, parent_pos: DVec3, t_sec: f64) -> DVec3 {
    // Negative period_days flips the sign of the mean motion (retrograde).
    let mean_motion = std::f64::consts::TAU / (params.period_days * SECONDS_PER_DAY);
    let angle = mean_motion * t_sec;
    let distance_au = params.semi_major_axis_km / KM_PER_AU;
    parent_pos + distance_au * DVec3::new(angle.cos(), angle.sin(), 0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_moon_orbits_at_fixed_distance() {
        let params = MoonParams {
            semi_major_axis_km: 384_400.0,
            period_days: 27.321_661,
        };
        let parent = DVec3::new(1.0, 0.0, 0.0);
        for i in 0..16 {
            let t = f64::from(i) * 100_000.0;
            let pos = moon_position(&params, parent, t);
            let r_km = (pos - parent).length() * KM_PER_AU;
            assert!((r_km - 384_400.0).abs() < 1.0, "r={r_km} km");
        }
    }

    #[test]
    fn test_negative_period_reverses_direction() {
        let prograde = MoonParams {
            semi_major_axis_km: 354_759.0,
            period_days: 5.876_854,
        };
        let retrograde = MoonParams {
            period_days: -5.876_854,
            ..prograde
        };
        let t = 10_000.0;
        let fwd = moon_position(&prograde, DVec3::ZERO, t);
        let rev = moon_position(&retrograde, DVec3::ZERO, t);
        // Mirrored across the x axis: same x, opposite y.
        assert!((fwd.x - rev.x).abs() < 1e-12);
        assert!((fwd.y + rev.y).abs() < 1e-12);
        assert!(fwd.y.abs() > 1e-6);
    }

    #[test]
    fn test_moon_stays_in_parent_xy_plane() {
        let params = MoonParams {
            semi_major_axis_km: 421_700.0,
            period_days: 1.769_138,
        };
        let parent = DVec3::new(3.2, -4.0, 0.7);
        let pos = moon_position(&params, parent, 55_555.0);
        assert!((pos.z - parent.z).abs() < 1e-12);
    }

    #[test]
    fn test_display_radius_log_compression() {
        let sun = CelestialBody {
            name: "Sun",
            kind: BodyKind::Star,
            radius_km: 696_340.0,
            color: [1.0, 0.9, 0.55],
            size_scale: 1.0,
        };
        let mercury = CelestialBody {
            name: "Mercury",
            radius_km: 2_439.7,
            ..sun
        };
        let ratio = sun.display_radius_au() / mercury.display_radius_au();
        // Physical ratio is ~285x; log compression brings it under 2x.
        assert!(ratio > 1.0 && ratio < 2.0, "ratio {ratio}");
    }
}
