//! Orbit camera: spherical-coordinate state from input deltas, view and
//! projection matrix generation.

mod orbit;
mod projection;

pub use orbit::{CameraLimits, OrbitCamera};
pub use projection::Projection;
