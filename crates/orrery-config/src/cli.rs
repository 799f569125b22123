//! Command-line argument parsing.

use std::path::PathBuf;

use clap::Parser;

use crate::Config;

/// Orrery command-line arguments.
///
/// CLI values override settings loaded from `config.ron`.
#[derive(Parser, Debug, Default)]
#[command(name = "orrery", about = "Solar system and asteroid field viewer")]
pub struct CliArgs {
    /// Viewport width.
    #[arg(long)]
    pub width: Option<u32>,

    /// Viewport height.
    #[arg(long)]
    pub height: Option<u32>,

    /// Path to the packed binary asteroid catalog.
    #[arg(long)]
    pub catalog: Option<PathBuf>,

    /// Initial time scale in simulation seconds per wall-clock second.
    #[arg(long)]
    pub time_scale: Option<f64>,

    /// Start with the simulation paused.
    #[arg(long)]
    pub paused: bool,

    /// Disable asteroid motion blur.
    #[arg(long)]
    pub no_blur: bool,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Path to config directory (overrides default location).
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Config {
    /// Apply CLI overrides to a loaded config.
    pub fn apply_cli_overrides(&mut self, args: &CliArgs) {
        if let Some(w) = args.width {
            self.window.width = w;
        }
        if let Some(h) = args.height {
            self.window.height = h;
        }
        if let Some(ref path) = args.catalog {
            self.catalog.path = path.clone();
        }
        if let Some(scale) = args.time_scale {
            self.time.initial_scale = scale;
        }
        if args.paused {
            self.time.start_paused = true;
        }
        if args.no_blur {
            self.blur.enabled = false;
        }
        if let Some(ref level) = args.log_level {
            self.debug.log_level = level.clone();
        }
    }
}
