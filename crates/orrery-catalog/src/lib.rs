//! The minor-planet catalog: packed binary element records, progress-reported
//! loading, and the fixed-width astorb text converter.

mod astorb;
mod catalog;
mod error;
mod loader;

pub use astorb::{ASTORB_LINE_LEN, ConvertStats, convert_dat_to_bin, parse_astorb_line};
pub use catalog::{AsteroidCatalog, FLOATS_PER_ASTEROID, RECORD_BYTES};
pub use error::CatalogError;
pub use loader::load_catalog;
