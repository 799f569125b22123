//! Per-frame body-graph evaluation into a packed position buffer.

use std::collections::HashMap;

use glam::DVec3;
use orrery_kepler::solve_position;

use crate::body::{BodyKind, CelestialBody, moon_position};
use crate::table::solar_system;

/// Buffer layout: {x, y, z, scaled_radius, r, g, b} per body, in AU units.
pub const FLOATS_PER_BODY: usize = 7;

/// Walks the fixed body hierarchy each frame and produces the packed
/// position/radius/color buffer consumed by the point rasterizer.
///
/// The buffer is rebuilt fully every frame; it holds tens of entries, so
/// incremental update is not worth the complexity.
pub struct BodySystem {
    bodies: Vec<CelestialBody>,
    buffer: Vec<f32>,
    positions: HashMap<&'static str, DVec3>,
}

impl BodySystem {
    pub fn new(bodies: Vec<CelestialBody>) -> Self {
        let count = bodies.len();
        Self {
            bodies,
            buffer: Vec::with_capacity(count * FLOATS_PER_BODY),
            positions: HashMap::with_capacity(count),
        }
    }

    /// The full solar-system table.
    pub fn with_solar_system() -> Self {
        Self::new(solar_system())
    }

    pub fn bodies(&self) -> &[CelestialBody] {
        &self.bodies
    }

    pub fn body_count(&self) -> usize {
        self.bodies.len()
    }

    /// Heliocentric position of a named body as of the last `update` call.
    pub fn position(&self, name: &str) -> Option<DVec3> {
        self.positions.get(name).copied()
    }

    /// Evaluate every body at `sim_time_sec` and return the packed buffer.
    ///
    /// `epoch_offset_sec` bridges the planetary elements' epoch (J2000) and
    /// the asteroid catalog's epoch; it applies to heliocentric Kepler
    /// evaluation only. Satellites use the raw simulation time, and read
    /// their parent's position for this same frame, which table ordering
    /// guarantees is already computed.
    pub fn update(&mut self, sim_time_sec: f64, epoch_offset_sec: f64) -> &[f32] {
        self.buffer.clear();
        self.positions.clear();

        for body in &self.bodies {
            let position = match &body.kind {
                BodyKind::Star => DVec3::ZERO,
                BodyKind::Orbiting { elements, .. } => {
                    solve_position(elements, sim_time_sec + epoch_offset_sec)
                }
                BodyKind::Satellite { parent, params } => {
                    let parent_pos = self.positions.get(parent).copied().unwrap_or(DVec3::ZERO);
                    moon_position(params, parent_pos, sim_time_sec)
                }
            };
            self.positions.insert(body.name, position);

            self.buffer.push(position.x as f32);
            self.buffer.push(position.y as f32);
            self.buffer.push(position.z as f32);
            self.buffer.push(body.display_radius_au() as f32);
            self.buffer.extend_from_slice(&body.color);
        }

        &self.buffer
    }
}
