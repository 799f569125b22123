//! Precomputed orbit polylines for line-strip rendering.

use glam::Vec3;

use crate::elements::OrbitalElements;
use crate::solver::solve_position;

/// Sample one full orbit as a closed polyline with `segments` segments
/// (`segments + 1` vertices, last equal to the first up to solver noise).
///
/// Sampling is uniform in mean anomaly, so eccentric orbits get denser
/// vertices near perihelion where the body moves fastest.
pub fn orbit_path(elements: &OrbitalElements, segments: u32) -> Vec<Vec3> {
    let period = elements.period_seconds();
    let mut points = Vec::with_capacity(segments as usize + 1);
    for i in 0..=segments {
        let t = period * (f64::from(i) / f64::from(segments));
        points.push(solve_position(elements, t).as_vec3());
    }
    points
}
