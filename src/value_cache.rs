use crate::prelude::*;

use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use std::sync::RwLock;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Snapshot {
    #[serde(default)]
    pub parameters: Vec<Parameter>,
    #[serde(default)]
    pub values: HashMap<String, String>,
}

impl Snapshot {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|err| anyhow!("Error reading snapshot file {}: {}", path.display(), err))?;

        serde_json::from_str(&content)
            .map_err(|err| anyhow!("Error parsing snapshot file {}: {}", path.display(), err))
    }
}

/// In-memory [`Bridge`] holding the parameter catalog and the latest raw
/// value per key.
///
/// Values are replaced wholesale or per key by whoever feeds the cache;
/// readers only ever see the last value written.
#[derive(Debug, Default)]
pub struct ValueCache {
    parameters: Vec<Parameter>,
    values: RwLock<HashMap<String, String>>,
}

impl ValueCache {
    pub fn new(parameters: Vec<Parameter>) -> Self {
        Self {
            parameters,
            values: RwLock::new(HashMap::new()),
        }
    }

    pub fn from_snapshot(snapshot: Snapshot) -> Self {
        Self {
            parameters: snapshot.parameters,
            values: RwLock::new(snapshot.values),
        }
    }

    pub fn load_snapshot<P: AsRef<Path>>(path: P) -> Result<Self> {
        let snapshot = Snapshot::from_file(&path)?;
        info!(
            "Loaded snapshot {} with {} parameters and {} values",
            path.as_ref().display(),
            snapshot.parameters.len(),
            snapshot.values.len()
        );
        Ok(Self::from_snapshot(snapshot))
    }

    /// Replaces every cached value with the ones found in the snapshot at
    /// `path`. The catalog is left untouched.
    pub fn reload_values<P: AsRef<Path>>(&self, path: P) -> Result<usize> {
        let snapshot = Snapshot::from_file(&path)?;
        let count = snapshot.values.len();
        *self.write_values()? = snapshot.values;
        debug!("value_cache reloaded {} values from {}", count, path.as_ref().display());
        Ok(count)
    }

    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        self.write_values()?.insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    pub fn clear(&self, key: &str) -> Result<()> {
        self.write_values()?.remove(key);
        Ok(())
    }

    fn write_values(&self) -> Result<std::sync::RwLockWriteGuard<'_, HashMap<String, String>>> {
        self.values
            .write()
            .map_err(|_| anyhow!("value_cache: lock poisoned"))
    }
}

impl Bridge for ValueCache {
    fn parameters(&self) -> Vec<Parameter> {
        self.parameters.clone()
    }

    fn current_value(&self, key: &str) -> Option<String> {
        // a poisoned lock means a writer panicked; report nothing rather than
        // propagate the panic into the sensors
        self.values.read().ok()?.get(key).cloned()
    }

    fn unit_of(&self, key: &str) -> Option<String> {
        self.parameters
            .iter()
            .find(|p| p.key == key)
            .and_then(|p| p.unit.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn cache() -> ValueCache {
        ValueCache::new(vec![
            Parameter::new("TK", "Kesseltemperatur", Some("°C")),
            Parameter::new("ZK", "Kesselzustand", None),
        ])
    }

    #[test]
    fn unknown_until_set() -> Result<()> {
        let cache = cache();
        assert_eq!(cache.current_value("TK"), None);

        cache.set("TK", "71.5")?;
        assert_eq!(cache.current_value("TK"), Some("71.5".to_string()));

        cache.clear("TK")?;
        assert_eq!(cache.current_value("TK"), None);

        Ok(())
    }

    #[test]
    fn unit_comes_from_catalog() {
        let cache = cache();
        assert_eq!(cache.unit_of("TK"), Some("°C".to_string()));
        assert_eq!(cache.unit_of("ZK"), None);
        assert_eq!(cache.unit_of("nope"), None);
    }

    #[test]
    fn reload_replaces_values_keeps_catalog() -> Result<()> {
        let mut file = NamedTempFile::new()?;
        write!(
            file,
            r#"{{
                "parameters": [{{"key": "TK", "description": "Kesseltemperatur", "unit": "°C"}}],
                "values": {{"TK": "65"}}
            }}"#
        )?;

        let cache = ValueCache::load_snapshot(file.path())?;
        assert_eq!(cache.parameters().len(), 1);
        assert_eq!(cache.current_value("TK"), Some("65".to_string()));

        cache.set("TRG", "120")?;

        let mut next = NamedTempFile::new()?;
        write!(next, r#"{{"values": {{"TK": "66"}}}}"#)?;
        assert_eq!(cache.reload_values(next.path())?, 1);

        assert_eq!(cache.current_value("TK"), Some("66".to_string()));
        assert_eq!(cache.current_value("TRG"), None);
        assert_eq!(cache.parameters().len(), 1);

        Ok(())
    }

    #[test]
    fn missing_snapshot_file_is_an_error() {
        assert!(ValueCache::load_snapshot("/nonexistent/snapshot.json").is_err());
    }
}
