//! Application wiring: simulation state ownership, input dispatch, and the
//! per-frame orchestration of time, bodies, camera, and draw submission.

pub mod input;
pub mod orchestrator;
pub mod platform;
pub mod state;

pub use input::{InputEvent, apply_input};
pub use orchestrator::FrameOrchestrator;
pub use platform::{PlatformDirs, PlatformError};
pub use state::SimulationState;
