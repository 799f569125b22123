//! The mutable per-session simulation state.

use orrery_bodies::BodySystem;
use orrery_camera::{CameraLimits, OrbitCamera, Projection};
use orrery_config::Config;
use orrery_sim::{J2000_JD, MotionBlurConfig, SimulationClock, epoch_offset_seconds};

/// Everything that changes frame to frame, bundled so the orchestrator and
/// the input dispatcher share one mutable root.
pub struct SimulationState {
    pub clock: SimulationClock,
    pub camera: OrbitCamera,
    pub projection: Projection,
    pub bodies: BodySystem,
    pub blur: MotionBlurConfig,
    /// Seconds bridging J2000 planetary elements and the catalog epoch,
    /// computed once at startup.
    pub epoch_offset_sec: f64,
}

impl SimulationState {
    pub fn from_config(config: &Config) -> Self {
        let camera = OrbitCamera {
            limits: CameraLimits {
                max_elevation_rad: config.camera.max_elevation_deg.to_radians(),
                min_distance_au: config.camera.min_distance_au,
                max_distance_au: config.camera.max_distance_au,
            },
            drag_sensitivity: config.camera.drag_sensitivity,
            zoom_sensitivity: config.camera.zoom_sensitivity,
            ..OrbitCamera::default()
        };

        let mut projection = Projection::default();
        projection.set_viewport(config.window.width, config.window.height);

        Self {
            clock: SimulationClock::new(config.time.initial_scale, config.time.start_paused),
            camera,
            projection,
            bodies: BodySystem::with_solar_system(),
            blur: config.blur,
            epoch_offset_sec: epoch_offset_seconds(J2000_JD, config.catalog.epoch_jd),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_reflects_config() {
        let mut config = Config::default();
        config.time.initial_scale = 3_600.0;
        config.time.start_paused = true;
        config.camera.max_elevation_deg = 45.0;
        config.window.width = 1000;
        config.window.height = 500;

        let state = SimulationState::from_config(&config);
        assert_eq!(state.clock.time_scale(), 3_600.0);
        assert!(state.clock.is_paused());
        assert!((state.camera.limits.max_elevation_rad - 45.0_f32.to_radians()).abs() < 1e-6);
        assert!((state.projection.aspect_ratio - 2.0).abs() < 1e-6);
    }

    #[test]
    fn test_matching_epochs_zero_the_offset() {
        let mut config = Config::default();
        config.catalog.epoch_jd = J2000_JD;
        let state = SimulationState::from_config(&config);
        assert_eq!(state.epoch_offset_sec, 0.0);
    }

    #[test]
    fn test_default_catalog_epoch_offset_is_positive() {
        let state = SimulationState::from_config(&Config::default());
        // The packaged catalog's epoch postdates J2000 by about 13.8 years.
        assert!(state.epoch_offset_sec > 4.0e8);
    }
}
