use serde::{Deserialize, Serialize};

/// A device parameter as announced by the boiler's message format.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Parameter {
    pub key: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub unit: Option<String>,
}

impl Parameter {
    pub fn new(key: &str, description: &str, unit: Option<&str>) -> Self {
        Self {
            key: key.to_owned(),
            description: description.to_owned(),
            unit: unit.map(str::to_owned),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn unit(&self) -> Option<&str> {
        self.unit.as_deref()
    }
}

/// Read-only view onto whatever talks to the boiler and caches its last
/// known raw values.
///
/// Every method must answer from cached state; none may wait on the device.
/// Sensors hold the bridge behind an `Arc` and read it from any thread.
pub trait Bridge: Send + Sync {
    /// Parameter catalog, in the order the boiler reports them.
    fn parameters(&self) -> Vec<Parameter>;

    /// Last raw value received for `key`, or `None` if it was never seen.
    fn current_value(&self, key: &str) -> Option<String>;

    fn unit_of(&self, key: &str) -> Option<String>;
}
