//! The solar-system body graph: static body table, satellite motion, and the
//! per-frame evaluator that packs positions for rendering.

mod body;
mod evaluator;
mod table;

pub use body::{
    CelestialBody, BodyKind, KM_PER_AU, MoonParams, OrbitClass, RADIUS_SCALE_AU, moon_position,
};
pub use evaluator::{BodySystem, FLOATS_PER_BODY};
pub use table::solar_system;
