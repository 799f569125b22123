//! Kepler's equation solver and the orbital-plane to ecliptic transform.

use glam::DVec3;

use crate::elements::OrbitalElements;

/// Newton-Raphson iteration count for Kepler's equation.
///
/// Fixed with no convergence check so every body costs the same, which keeps
/// the per-frame cost of a few hundred thousand solves predictable. Thirty
/// iterations converges well past f64 precision for all catalog
/// eccentricities (e < 1, typically < 0.3).
pub const KEPLER_ITERATIONS: u32 = 30;

/// Wrap an angle into [0, 2pi).
pub fn wrap_tau(angle: f64) -> f64 {
    angle.rem_euclid(std::f64::consts::TAU)
}

/// Solve Kepler's equation `E - e*sin(E) = M` for the eccentric anomaly.
///
/// Seeded at `E = M` and run for exactly `iterations` Newton-Raphson steps.
/// Callers wanting the production behavior pass [`KEPLER_ITERATIONS`]; tests
/// may pass a different count to probe convergence.
pub fn solve_eccentric_anomaly(mean_anomaly: f64, eccentricity: f64, iterations: u32) -> f64 {
    let mut e_anom = mean_anomaly;
    for _ in 0..iterations {
        let delta = e_anom - eccentricity * e_anom.sin() - mean_anomaly;
        let derivative = 1.0 - eccentricity * e_anom.cos();
        e_anom -= delta / derivative;
    }
    e_anom
}

/// Heliocentric ecliptic position in AU for the given elements at `t_sec`
/// seconds past the elements' reference epoch.
///
/// Inputs are trusted: `e >= 1` or `a <= 0` propagate NaN rather than error,
/// matching the validated-catalog contract.
pub fn solve_position(elements: &OrbitalElements, t_sec: f64) -> DVec3 {
    let e = elements.eccentricity;
    let mean_anomaly = wrap_tau(
        elements.mean_motion() * t_sec + elements.mean_anomaly_deg.to_radians(),
    );

    let e_anom = solve_eccentric_anomaly(mean_anomaly, e, KEPLER_ITERATIONS);

    // True anomaly and radius from the eccentric anomaly.
    let true_anomaly =
        2.0 * ((1.0 + e).sqrt() * (e_anom / 2.0).sin()).atan2((1.0 - e).sqrt() * (e_anom / 2.0).cos());
    let r = elements.semi_major_axis_au * (1.0 - e * e_anom.cos());

    // Position in the orbital plane, perihelion along +x.
    let x_orb = r * true_anomaly.cos();
    let y_orb = r * true_anomaly.sin();

    // Rotate through argument of perihelion, inclination, and longitude of
    // ascending node into the ecliptic frame.
    let cos_o = elements.longitude_of_ascending_node_deg.to_radians().cos();
    let sin_o = elements.longitude_of_ascending_node_deg.to_radians().sin();
    let cos_i = elements.inclination_deg.to_radians().cos();
    let sin_i = elements.inclination_deg.to_radians().sin();
    let cos_w = elements.argument_of_perihelion_deg.to_radians().cos();
    let sin_w = elements.argument_of_perihelion_deg.to_radians().sin();

    let x = x_orb * (cos_o * cos_w - sin_o * sin_w * cos_i)
        - y_orb * (cos_o * sin_w + sin_o * cos_w * cos_i);
    let y = x_orb * (sin_o * cos_w + cos_o * sin_w * cos_i)
        - y_orb * (sin_o * sin_w - cos_o * cos_w * cos_i);
    let z = x_orb * (sin_w * sin_i) + y_orb * (cos_w * sin_i);

    DVec3::new(x, y, z)
}
