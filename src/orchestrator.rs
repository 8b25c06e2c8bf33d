use crate::prelude::*;

/// Owns the registered sensors and refreshes them when the host ticks.
#[derive(Debug, Default)]
pub struct PollOrchestrator {
    sensors: Vec<Sensor>,
    ticks: u64,
}

impl PollOrchestrator {
    pub fn new(sensors: Vec<Sensor>) -> Self {
        Self { sensors, ticks: 0 }
    }

    /// Recomputes every sensor from the bridge's current values.
    ///
    /// Sensors share nothing but the read-only bridge, so each one is
    /// refreshed on its own and an odd value in one never reaches another.
    /// Returns the number of sensors whose display state changed.
    pub fn refresh_all(&mut self) -> usize {
        self.ticks += 1;
        let mut changed = 0;

        for sensor in &mut self.sensors {
            let before = sensor.display_state().clone();
            if *sensor.refresh() != before {
                trace!(
                    "{}: {:?} -> {:?}",
                    sensor.display_name(),
                    before.state,
                    sensor.current_presentation()
                );
                changed += 1;
            }
        }

        debug!("tick {}: {} of {} sensors changed", self.ticks, changed, self.sensors.len());
        changed
    }

    pub fn sensors(&self) -> &[Sensor] {
        &self.sensors
    }

    pub fn sensor(&self, display_name: &str) -> Option<&Sensor> {
        self.sensors.iter().find(|s| s.display_name() == display_name)
    }

    /// Stops refreshing the named sensor. Returns it if it was registered.
    pub fn remove(&mut self, display_name: &str) -> Option<Sensor> {
        let idx = self
            .sensors
            .iter()
            .position(|s| s.display_name() == display_name)?;
        Some(self.sensors.remove(idx))
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }
}
