//! Per-frame orchestration: advance time, evaluate bodies, and submit the
//! draw sequence to the rasterizer backend.
//!
//! Startup uploads three vertex buffers: the concatenated orbit polylines,
//! the packed body buffer, and the packed asteroid element buffer. Per frame
//! only the small body buffer is rewritten; the asteroid field is animated
//! purely through a shader time uniform.

use bytemuck::cast_slice;
use tracing::{info, trace};

use orrery_bodies::{BodyKind, OrbitClass};
use orrery_catalog::AsteroidCatalog;
use orrery_kepler::orbit_path;
use orrery_render::{BufferHandle, Primitive, RenderBackend, UniformValue};

use crate::state::SimulationState;

/// Orbit polyline resolution for planets.
pub const PLANET_ORBIT_SEGMENTS: u32 = 240;
/// Orbit polyline resolution for dwarf planets, whose eccentric orbits need
/// denser sampling to stay smooth.
pub const DWARF_ORBIT_SEGMENTS: u32 = 480;

/// Owns the GPU-side buffer handles and the per-frame submission order.
pub struct FrameOrchestrator {
    orbit_buffer: BufferHandle,
    /// (first vertex, vertex count) of each orbit inside the shared polyline
    /// buffer, one entry per heliocentric orbiting body.
    orbit_ranges: Vec<(u32, u32)>,
    body_buffer: BufferHandle,
    body_count: u32,
    asteroid_buffer: BufferHandle,
    asteroid_count: u32,
}

impl FrameOrchestrator {
    /// Upload the startup buffers and record their handles.
    pub fn new(
        backend: &mut impl RenderBackend,
        state: &mut SimulationState,
        catalog: &AsteroidCatalog,
    ) -> Self {
        let mut orbit_floats: Vec<f32> = Vec::new();
        let mut orbit_ranges = Vec::new();
        let mut vertex_count = 0u32;
        for body in state.bodies.bodies() {
            if let BodyKind::Orbiting { elements, class } = &body.kind {
                let segments = match class {
                    OrbitClass::Planet => PLANET_ORBIT_SEGMENTS,
                    OrbitClass::DwarfPlanet => DWARF_ORBIT_SEGMENTS,
                };
                let path = orbit_path(elements, segments);
                orbit_ranges.push((vertex_count, path.len() as u32));
                vertex_count += path.len() as u32;
                for vertex in path {
                    orbit_floats.extend_from_slice(&vertex.to_array());
                }
            }
        }
        let orbit_buffer = backend.create_vertex_buffer(cast_slice(&orbit_floats));

        let initial = state
            .bodies
            .update(state.clock.sim_time_sec(), state.epoch_offset_sec)
            .to_vec();
        let body_buffer = backend.create_vertex_buffer(cast_slice(&initial));
        let body_count = state.bodies.body_count() as u32;

        let asteroid_buffer = backend.create_vertex_buffer(catalog.as_bytes());
        let asteroid_count = catalog.len() as u32;

        info!(
            orbits = orbit_ranges.len(),
            bodies = body_count,
            asteroids = asteroid_count,
            "startup buffers uploaded"
        );

        Self {
            orbit_buffer,
            orbit_ranges,
            body_buffer,
            body_count,
            asteroid_buffer,
            asteroid_count,
        }
    }

    /// Run one frame against the backend.
    ///
    /// The fixed sequence per frame: poll the viewport, advance the clock,
    /// re-evaluate the body graph into the body buffer, upload the combined
    /// view-projection, then draw orbit line strips, the body points, and
    /// one asteroid point pass per motion-blur sample.
    pub fn frame(
        &mut self,
        backend: &mut impl RenderBackend,
        state: &mut SimulationState,
        wall_clock_sec: f64,
        viewport: (u32, u32),
    ) {
        state.projection.set_viewport(viewport.0, viewport.1);

        let previous = state.clock.sim_time_sec();
        let sim_time = state.clock.advance(wall_clock_sec);
        let frame_delta = sim_time - previous;
        trace!(sim_time, frame_delta, "frame");

        let body_floats = state.bodies.update(sim_time, state.epoch_offset_sec);
        backend.write_vertex_buffer(self.body_buffer, cast_slice(body_floats));

        let view_proj = state.projection.matrix() * state.camera.view_matrix();
        backend.upload_uniform("view_proj", UniformValue::Matrix(view_proj));

        for &(first, count) in &self.orbit_ranges {
            backend.draw(Primitive::LineStrip, self.orbit_buffer, first, count);
        }

        backend.draw(Primitive::Points, self.body_buffer, 0, self.body_count);

        if self.asteroid_count > 0 {
            for sample in state.blur.samples(sim_time, frame_delta) {
                backend.upload_uniform("time", UniformValue::Float(sample.time_sec as f32));
                backend.upload_uniform("opacity", UniformValue::Float(sample.opacity));
                backend.draw(Primitive::Points, self.asteroid_buffer, 0, self.asteroid_count);
            }
        }
    }

    pub fn asteroid_count(&self) -> u32 {
        self.asteroid_count
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use orrery_config::Config;
    use orrery_render::{TraceBackend, TraceCommand};

    fn test_catalog(records: usize) -> AsteroidCatalog {
        let record: Vec<u8> = [10.0f32, 20.0, 30.0, 5.0, 0.1, 2.5]
            .iter()
            .flat_map(|v| v.to_le_bytes())
            .collect();
        let bytes: Vec<u8> = record.iter().copied().cycle().take(record.len() * records).collect();
        AsteroidCatalog::from_bytes(&bytes)
    }

    fn running_state() -> SimulationState {
        SimulationState::from_config(&Config::default())
    }

    #[test]
    fn test_startup_uploads_three_buffers() {
        let mut backend = TraceBackend::new();
        let mut state = running_state();
        let orchestrator = FrameOrchestrator::new(&mut backend, &mut state, &test_catalog(5));

        let creates: Vec<_> = backend
            .commands
            .iter()
            .filter(|c| matches!(c, TraceCommand::CreateBuffer { .. }))
            .collect();
        assert_eq!(creates.len(), 3);
        assert_eq!(orchestrator.asteroid_count(), 5);
    }

    #[test]
    fn test_orbit_ranges_cover_planets_and_dwarfs() {
        let mut backend = TraceBackend::new();
        let mut state = running_state();
        let mut orchestrator = FrameOrchestrator::new(&mut backend, &mut state, &test_catalog(1));
        backend.clear();
        orchestrator.frame(&mut backend, &mut state, 0.0, (1280, 720));

        // 8 planets and 5 dwarf planets, one line strip each.
        assert_eq!(backend.draw_count(Primitive::LineStrip), 13);
        let strip_counts: Vec<u32> = backend
            .commands
            .iter()
            .filter_map(|c| match c {
                TraceCommand::Draw {
                    primitive: Primitive::LineStrip,
                    count,
                    ..
                } => Some(*count),
                _ => None,
            })
            .collect();
        assert_eq!(strip_counts.iter().filter(|&&c| c == 241).count(), 8);
        assert_eq!(strip_counts.iter().filter(|&&c| c == 481).count(), 5);
    }

    #[test]
    fn test_frame_draws_strips_before_points() {
        let mut backend = TraceBackend::new();
        let mut state = running_state();
        let mut orchestrator = FrameOrchestrator::new(&mut backend, &mut state, &test_catalog(2));
        backend.clear();
        orchestrator.frame(&mut backend, &mut state, 0.0, (1280, 720));

        let primitives: Vec<Primitive> = backend
            .commands
            .iter()
            .filter_map(|c| match c {
                TraceCommand::Draw { primitive, .. } => Some(*primitive),
                _ => None,
            })
            .collect();
        let first_points = primitives
            .iter()
            .position(|p| *p == Primitive::Points)
            .unwrap();
        assert!(primitives[..first_points]
            .iter()
            .all(|p| *p == Primitive::LineStrip));
        assert!(primitives[first_points..]
            .iter()
            .all(|p| *p == Primitive::Points));
    }

    #[test]
    fn test_blur_draws_one_asteroid_pass_per_sample() {
        let mut backend = TraceBackend::new();
        let mut state = running_state();
        let mut orchestrator = FrameOrchestrator::new(&mut backend, &mut state, &test_catalog(4));

        // First frame seeds the clock; the second has a nonzero delta.
        orchestrator.frame(&mut backend, &mut state, 0.0, (1280, 720));
        backend.clear();
        orchestrator.frame(&mut backend, &mut state, 1.0, (1280, 720));

        let expected = 1 + state.blur.sample_count as usize;
        assert_eq!(backend.draw_count(Primitive::Points), expected);
    }

    #[test]
    fn test_disabled_blur_is_a_single_asteroid_pass() {
        let mut backend = TraceBackend::new();
        let mut config = Config::default();
        config.blur.enabled = false;
        let mut state = SimulationState::from_config(&config);
        let mut orchestrator = FrameOrchestrator::new(&mut backend, &mut state, &test_catalog(4));

        orchestrator.frame(&mut backend, &mut state, 0.0, (1280, 720));
        backend.clear();
        orchestrator.frame(&mut backend, &mut state, 1.0, (1280, 720));

        // Bodies plus exactly one asteroid draw.
        assert_eq!(backend.draw_count(Primitive::Points), 2);
        assert_eq!(
            backend.last_uniform("opacity"),
            Some(UniformValue::Float(1.0))
        );
    }

    #[test]
    fn test_paused_clock_collapses_the_trail() {
        let mut backend = TraceBackend::new();
        let mut state = running_state();
        let mut orchestrator = FrameOrchestrator::new(&mut backend, &mut state, &test_catalog(4));

        orchestrator.frame(&mut backend, &mut state, 0.0, (1280, 720));
        state.clock.toggle_pause();
        backend.clear();
        orchestrator.frame(&mut backend, &mut state, 1.0, (1280, 720));

        // Zero simulation delta means zero span; one full-opacity pass.
        assert_eq!(backend.draw_count(Primitive::Points), 2);
    }

    #[test]
    fn test_empty_catalog_skips_asteroid_draws() {
        let mut backend = TraceBackend::new();
        let mut state = running_state();
        let mut orchestrator =
            FrameOrchestrator::new(&mut backend, &mut state, &AsteroidCatalog::from_bytes(&[]));

        orchestrator.frame(&mut backend, &mut state, 0.0, (1280, 720));
        backend.clear();
        orchestrator.frame(&mut backend, &mut state, 1.0, (1280, 720));

        // Only the body pass remains.
        assert_eq!(backend.draw_count(Primitive::Points), 1);
        assert_eq!(backend.last_uniform("time"), None);
    }

    #[test]
    fn test_body_buffer_rewritten_every_frame() {
        let mut backend = TraceBackend::new();
        let mut state = running_state();
        let mut orchestrator = FrameOrchestrator::new(&mut backend, &mut state, &test_catalog(1));
        backend.clear();
        orchestrator.frame(&mut backend, &mut state, 0.0, (1280, 720));
        orchestrator.frame(&mut backend, &mut state, 1.0, (1280, 720));

        let expected_bytes = state.bodies.body_count() * orrery_bodies::FLOATS_PER_BODY * 4;
        let writes: Vec<_> = backend
            .commands
            .iter()
            .filter_map(|c| match c {
                TraceCommand::WriteBuffer { byte_len, .. } => Some(*byte_len),
                _ => None,
            })
            .collect();
        assert_eq!(writes, vec![expected_bytes, expected_bytes]);
    }

    #[test]
    fn test_resize_is_observed_within_one_frame() {
        let mut backend = TraceBackend::new();
        let mut state = running_state();
        let mut orchestrator = FrameOrchestrator::new(&mut backend, &mut state, &test_catalog(1));

        orchestrator.frame(&mut backend, &mut state, 0.0, (1280, 720));
        let wide = backend.last_uniform("view_proj");
        orchestrator.frame(&mut backend, &mut state, 1.0, (800, 800));
        let square = backend.last_uniform("view_proj");

        assert!(wide.is_some());
        assert_ne!(wide, square);
        assert!((state.projection.aspect_ratio - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_time_uniform_tracks_simulation_time() {
        let mut backend = TraceBackend::new();
        let mut config = Config::default();
        config.blur.enabled = false;
        config.catalog.epoch_jd = orrery_sim::J2000_JD;
        let mut state = SimulationState::from_config(&config);
        let mut orchestrator = FrameOrchestrator::new(&mut backend, &mut state, &test_catalog(1));

        orchestrator.frame(&mut backend, &mut state, 0.0, (1280, 720));
        orchestrator.frame(&mut backend, &mut state, 2.0, (1280, 720));

        // Two seconds at the default day-per-second scale.
        let expected = (2.0 * 86_400.0) as f32;
        assert_eq!(
            backend.last_uniform("time"),
            Some(UniformValue::Float(expected))
        );
    }
}
