//! Platform-agnostic input events and their dispatch onto the state.

use tracing::debug;

use crate::state::SimulationState;

/// One user input, already translated from whatever windowing layer hosts
/// the core.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InputEvent {
    /// Pointer drag in pixels; horizontal orbits, vertical elevates.
    PointerDrag { delta_x: f32, delta_y: f32 },
    /// Wheel or pinch delta; positive zooms in.
    Zoom { delta: f32 },
    TogglePause,
    SpeedUp,
    SlowDown,
    InvertDirection,
    ResetTime,
}

/// Apply one event to the state. Continuous events route to the camera,
/// discrete ones to the clock.
pub fn apply_input(state: &mut SimulationState, event: InputEvent) {
    match event {
        InputEvent::PointerDrag { delta_x, delta_y } => {
            state.camera.rotate(delta_x, delta_y);
        }
        InputEvent::Zoom { delta } => {
            state.camera.zoom(delta);
        }
        InputEvent::TogglePause => {
            state.clock.toggle_pause();
            debug!(paused = state.clock.is_paused(), "pause toggled");
        }
        InputEvent::SpeedUp => {
            state.clock.speed_up();
            debug!(scale = state.clock.time_scale(), "speed up");
        }
        InputEvent::SlowDown => {
            state.clock.slow_down();
            debug!(scale = state.clock.time_scale(), "slow down");
        }
        InputEvent::InvertDirection => {
            state.clock.invert_direction();
            debug!(scale = state.clock.time_scale(), "direction inverted");
        }
        InputEvent::ResetTime => {
            state.clock.reset();
            debug!("simulation time reset");
        }
    }
}
