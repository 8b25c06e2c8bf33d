use crate::prelude::*;
use crate::state_writer::StateWriter;

use std::sync::Arc;
use tokio::sync::broadcast;

/// Drives the poll loop: one refresh of every sensor per scan interval.
pub struct Scheduler {
    config: ConfigWrapper,
    cache: Arc<ValueCache>,
    orchestrator: PollOrchestrator,
    state_writer: Option<StateWriter>,
}

impl Scheduler {
    pub fn new(config: ConfigWrapper, cache: Arc<ValueCache>, orchestrator: PollOrchestrator) -> Result<Self> {
        let state_writer = match config.state_file() {
            Some(path) => Some(StateWriter::new(&path)?),
            None => None,
        };

        Ok(Self {
            config,
            cache,
            orchestrator,
            state_writer,
        })
    }

    pub fn orchestrator(&self) -> &PollOrchestrator {
        &self.orchestrator
    }

    pub async fn start(&mut self, mut shutdown_rx: broadcast::Receiver<()>) -> Result<()> {
        let mut interval = tokio::time::interval(self.config.scan_interval());

        loop {
            tokio::select! {
                _ = interval.tick() => self.tick(),
                _ = shutdown_rx.recv() => {
                    info!("scheduler stopping after {} ticks", self.orchestrator.ticks());
                    break;
                }
            }
        }

        Ok(())
    }

    /// One host tick. Nothing in here is allowed to stop the loop; problems
    /// feeding the cache or writing output are logged and the sensors are
    /// refreshed from whatever the cache holds.
    pub fn tick(&mut self) {
        if let Some(path) = self.config.snapshot_file() {
            if let Err(e) = self.cache.reload_values(&path) {
                warn!("keeping previous values: {}", e);
            }
        }

        self.orchestrator.refresh_all();

        for sensor in self.orchestrator.sensors() {
            debug!(
                "{} = {} {}",
                sensor.display_name(),
                sensor.current_presentation(),
                sensor.unit().unwrap_or_default()
            );
        }

        if let Some(writer) = &self.state_writer {
            if let Err(e) = writer.write_states(&self.config.host(), self.orchestrator.sensors()) {
                error!("state file write failed: {}", e);
            }
        }
    }
}
