// Module declarations for the application's core components
pub mod boiler;        // Hargassner parameter keys and code tables
pub mod bridge;        // Read-only interface onto the boiler connection
pub mod catalog;       // Parameter catalog snapshot
pub mod config;        // Configuration management
pub mod options;       // Command line options parsing
pub mod orchestrator;  // Per-tick refresh of all sensors
pub mod prelude;       // Common imports and types
pub mod scheduler;     // Poll loop
pub mod sensor;        // Value translation and the sensors handed to the host
pub mod setup;         // Sensor setup entry point
pub mod state_writer;  // JSON lines output of display states
pub mod value_cache;   // In-memory bridge

// Get the package version from Cargo.toml
const CARGO_PKG_VERSION: &str = env!("CARGO_PKG_VERSION");

use crate::prelude::*;
use crate::scheduler::Scheduler;
use std::io::Write;
use std::sync::Arc;

/// Initializes env_logger with `level` unless RUST_LOG says otherwise.
pub fn init_logging(level: &str) {
    let result = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format(|buf, record| {
            writeln!(
                buf,
                "[{} {} {}] {}",
                chrono::Local::now().format("%Y-%m-%dT%H:%M:%S%.3f"),
                record.level(),
                record.module_path().unwrap_or(""),
                record.args()
            )
        })
        .write_style(env_logger::WriteStyle::Never)
        .try_init();

    if let Err(e) = result {
        eprintln!("logger already initialized: {}", e);
    }
}

/// Builds the bridge the sensors read from: the configured snapshot file,
/// or an empty cache when none is set.
pub fn value_cache(config: &ConfigWrapper) -> Result<Arc<ValueCache>> {
    let cache = match config.snapshot_file() {
        Some(path) => ValueCache::load_snapshot(&path)?,
        None => {
            warn!("no snapshot_file configured, every reading will stay unknown");
            ValueCache::default()
        }
    };

    Ok(Arc::new(cache))
}

/// Main application entry point
///
/// Sets up the sensors and runs the poll loop until a shutdown signal
/// arrives.
pub async fn app(
    shutdown_rx: tokio::sync::broadcast::Receiver<()>,
    config: ConfigWrapper,
) -> Result<()> {
    info!("hargassner-sensors {} starting", CARGO_PKG_VERSION);

    let cache = value_cache(&config)?;
    let sensors = setup::setup(&config, cache.clone());

    let mut scheduler = Scheduler::new(config, cache, PollOrchestrator::new(sensors))?;
    scheduler.start(shutdown_rx).await?;

    info!("Application shutdown complete");
    Ok(())
}
