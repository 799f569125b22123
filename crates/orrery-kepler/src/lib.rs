//! Two-body Keplerian orbital mechanics: elements, anomaly solving, and orbit polylines.

mod elements;
mod path;
mod solver;

pub use elements::{AU_M, MU_SUN_AU3_S2, OrbitalElements};
pub use path::orbit_path;
pub use solver::{KEPLER_ITERATIONS, solve_eccentric_anomaly, solve_position, wrap_tau};
