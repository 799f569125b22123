//! Configuration: RON persistence with CLI overrides.

mod cli;
mod config;
mod error;

pub use cli::CliArgs;
pub use config::{
    CameraConfig, CatalogConfig, Config, DebugConfig, TimeConfig, WindowConfig,
};
pub use error::ConfigError;
