use hargassner_sensors::prelude::*;
use std::time::Duration;
use tokio::sync::broadcast;

#[tokio::main]
async fn main() -> Result<()> {
    let options = Options::new();

    let config = ConfigWrapper::new(options.config_file.clone()).unwrap_or_else(|err| {
        eprintln!("Failed to load config {}: {:?}", options.config_file, err);
        std::process::exit(255);
    });

    hargassner_sensors::init_logging(&config.loglevel());
    config.config().log_summary();

    // Create a channel for shutdown signaling
    let (shutdown_tx, shutdown_rx) = broadcast::channel(1);

    // Handle Ctrl+C
    let shutdown_tx_clone = shutdown_tx.clone();
    tokio::spawn(async move {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!("Failed to listen for Ctrl+C: {}", e);
        }
        let _ = shutdown_tx_clone.send(());
    });

    if let Some(runtime) = options.runtime {
        let shutdown_tx = shutdown_tx.clone();
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_secs(runtime)).await;
            info!("Runtime limit of {}s reached", runtime);
            let _ = shutdown_tx.send(());
        });
    }

    if let Err(e) = hargassner_sensors::app(shutdown_rx, config).await {
        error!("Application error: {}", e);
        return Err(e);
    }

    Ok(())
}
