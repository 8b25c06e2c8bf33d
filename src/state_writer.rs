use crate::prelude::*;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;
use std::sync::{Arc, Mutex};
use std::time::{SystemTime, UNIX_EPOCH};

/// Appends one JSON line per tick with every sensor's display state.
#[derive(Debug, Clone)]
pub struct StateWriter {
    file: Arc<Mutex<std::fs::File>>,
    path: String,
    lines_written: Arc<Mutex<u64>>,
}

impl StateWriter {
    pub fn new(path: &str) -> Result<Self> {
        info!("Opening state file at {}", path);

        if let Some(parent) = Path::new(path).parent() {
            std::fs::create_dir_all(parent)?;
        }

        let file = match OpenOptions::new().create(true).append(true).open(path) {
            Ok(f) => f,
            Err(e) => {
                error!("Failed to open state file {}: {}", path, e);
                return Err(e.into());
            }
        };

        Ok(Self {
            file: Arc::new(Mutex::new(file)),
            path: path.to_string(),
            lines_written: Arc::new(Mutex::new(0)),
        })
    }

    pub fn write_states(&self, host: &str, sensors: &[Sensor]) -> Result<()> {
        let timestamp = SystemTime::now().duration_since(UNIX_EPOCH)?.as_secs();

        let mut states = serde_json::Map::new();
        for sensor in sensors {
            states.insert(
                sensor.display_name().to_string(),
                serde_json::to_value(sensor.display_state())?,
            );
        }

        let mut json_data = serde_json::Map::new();
        json_data.insert("utc_timestamp".to_string(), serde_json::Value::Number(timestamp.into()));
        json_data.insert("host".to_string(), serde_json::Value::String(host.to_string()));
        json_data.insert("states".to_string(), serde_json::Value::Object(states));

        let json_string = serde_json::to_string(&serde_json::Value::Object(json_data))?;

        let mut file = self
            .file
            .lock()
            .map_err(|_| anyhow!("Failed to lock state file"))?;
        if let Err(e) = writeln!(file, "{}", json_string).and_then(|_| file.flush()) {
            error!("Failed to write to state file {}: {}", self.path, e);
            return Err(e.into());
        }

        let mut lines_written = self
            .lines_written
            .lock()
            .map_err(|_| anyhow!("Failed to lock line counter"))?;
        *lines_written += 1;
        debug!("{} lines written to state file {}", *lines_written, self.path);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    #[test]
    fn test_write_states() -> Result<()> {
        let temp_file = NamedTempFile::new()?;
        let writer = StateWriter::new(temp_file.path().to_str().unwrap())?;

        let cache = Arc::new(ValueCache::new(vec![Parameter::new("TK", "Kesseltemperatur", Some("°C"))]));
        cache.set("TK", "70")?;
        let mut sensor = Sensor::new(
            "Hargassner boiler temperature",
            SensorKind::for_key("TK", None, Language::En),
            cache,
        );
        sensor.refresh();

        writer.write_states("192.168.1.50", &[sensor.clone()])?;
        writer.write_states("192.168.1.50", &[sensor])?;

        let contents = std::fs::read_to_string(temp_file.path())?;
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 2);

        let json: serde_json::Value = serde_json::from_str(lines[0])?;
        assert_eq!(json["host"], "192.168.1.50");
        let state = &json["states"]["Hargassner boiler temperature"];
        assert_eq!(state["state"], "70");
        assert_eq!(state["unit"], "°C");
        assert!(state["icon"].is_null());

        Ok(())
    }
}
