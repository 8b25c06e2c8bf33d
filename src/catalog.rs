use crate::prelude::*;

/// Snapshot of the bridge's parameter list, taken once at setup.
#[derive(Clone, Debug, Default)]
pub struct ParameterCatalog {
    parameters: Vec<Parameter>,
}

impl ParameterCatalog {
    pub fn from_bridge(bridge: &dyn Bridge) -> Self {
        let mut parameters: Vec<Parameter> = Vec::new();
        for p in bridge.parameters() {
            if parameters.iter().any(|seen| seen.key == p.key) {
                warn!("catalog: ignoring duplicate parameter key {:?}", p.key);
                continue;
            }
            parameters.push(p);
        }
        debug!("catalog: {} parameters", parameters.len());

        Self { parameters }
    }

    pub fn parameters(&self) -> &[Parameter] {
        &self.parameters
    }

    pub fn get(&self, key: &str) -> Option<&Parameter> {
        self.parameters.iter().find(|p| p.key == key)
    }

    pub fn len(&self) -> usize {
        self.parameters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parameters.is_empty()
    }
}
