//! The binary entry point.
//!
//! Wires configuration, logging, and catalog loading together, then runs the
//! frame loop headlessly against the trace backend. A GPU host drives the
//! same [`FrameOrchestrator`] from its own event loop instead.

use clap::Parser;
use tracing::{error, info};

use orrery_app::{FrameOrchestrator, PlatformDirs, SimulationState};
use orrery_catalog::load_catalog;
use orrery_config::{CliArgs, Config};
use orrery_render::TraceBackend;

fn main() {
    let args = CliArgs::parse();

    // Logging is not up yet; startup failures go to stderr.
    let dirs = match &args.config {
        Some(root) => PlatformDirs::resolve_with_root(root),
        None => match PlatformDirs::resolve() {
            Ok(dirs) => dirs,
            Err(e) => {
                eprintln!("failed to resolve platform directories: {e}");
                std::process::exit(1);
            }
        },
    };
    if let Err(e) = dirs.create_dirs() {
        eprintln!("failed to create platform directories: {e}");
        std::process::exit(1);
    }

    let mut config = match Config::load_or_create(&dirs.config_dir) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("failed to load configuration: {e}");
            std::process::exit(1);
        }
    };
    config.apply_cli_overrides(&args);

    orrery_log::init_logging(Some(&dirs.log_dir), cfg!(debug_assertions), Some(&config));

    let mut last_decile = 0;
    let catalog = match load_catalog(&config.catalog.path, |loaded, total| {
        if total > 0 {
            let decile = (loaded * 10 / total) as u32;
            if decile > last_decile {
                last_decile = decile;
                info!(percent = decile * 10, "loading asteroid catalog");
            }
        }
    }) {
        Ok(catalog) => catalog,
        Err(e) => {
            error!(error = %e, "asteroid catalog load failed");
            std::process::exit(1);
        }
    };

    let mut state = SimulationState::from_config(&config);
    let mut backend = TraceBackend::new();
    let mut orchestrator = FrameOrchestrator::new(&mut backend, &mut state, &catalog);

    // Headless run on a synthetic 60 Hz timeline. The unbounded frame loop
    // belongs to the GPU host's event loop; this demo stops after a fixed
    // frame count.
    let viewport = (config.window.width, config.window.height);
    const FRAMES: u32 = 300;
    for i in 0..FRAMES {
        backend.clear();
        orchestrator.frame(&mut backend, &mut state, f64::from(i) / 60.0, viewport);
    }

    info!(
        frames = FRAMES,
        sim_days = state.clock.sim_time_sec() / orrery_sim::SECONDS_PER_DAY,
        draws_per_frame = backend.draws().count(),
        "headless run complete"
    );
}
