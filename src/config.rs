use crate::prelude::*;

use serde::Deserialize;
use serde_with::{serde_as, DurationSeconds};
use serde_yaml;
use std::sync::{Arc, Mutex};
use std::time::Duration;

// MessageFormat {{{
/// Firmware message layout of the boiler's `pm` telegram. Passed through to
/// the bridge, which owns the parameter layout for each one.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Deserialize)]
pub enum MessageFormat {
    #[serde(rename = "NANO_V14K")]
    NanoV14K,
    #[serde(rename = "NANO_V14L")]
    NanoV14L,
    #[serde(rename = "NANO_V14M")]
    NanoV14M,
    #[serde(rename = "NANO_V14N")]
    NanoV14N,
    #[serde(rename = "NANO_V14O")]
    NanoV14O,
}

impl std::fmt::Display for MessageFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::NanoV14K => "NANO_V14K",
            Self::NanoV14L => "NANO_V14L",
            Self::NanoV14M => "NANO_V14M",
            Self::NanoV14N => "NANO_V14N",
            Self::NanoV14O => "NANO_V14O",
        };
        write!(f, "{}", s)
    }
} // }}}

// ParameterSet {{{
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParameterSet {
    /// The curated list of sensors most installations care about.
    #[default]
    Standard,
    /// One sensor per parameter the bridge knows.
    Full,
} // }}}

#[serde_as]
#[derive(Clone, Debug, Deserialize)]
pub struct Config {
    pub host: String,
    #[serde(default = "Config::default_port")]
    pub port: u16,

    #[serde(rename = "msgformat")]
    pub message_format: MessageFormat,

    #[serde(default = "Config::default_name")]
    pub name: String,

    #[serde(default)]
    pub parameters: ParameterSet,

    #[serde(default)]
    pub language: Language,

    #[serde(default = "Config::default_loglevel")]
    pub loglevel: String,

    #[serde_as(as = "DurationSeconds<u64>")]
    #[serde(default = "Config::default_scan_interval")]
    pub scan_interval: Duration,

    /// JSON snapshot of parameters and raw values to serve from.
    pub snapshot_file: Option<String>,

    /// Optional path to append display states to, one JSON object per tick
    pub state_file: Option<String>,
}

pub struct ConfigWrapper {
    config: Arc<Mutex<Config>>,
}

impl Clone for ConfigWrapper {
    fn clone(&self) -> Self {
        Self {
            config: self.config.clone(),
        }
    }
}

impl ConfigWrapper {
    pub fn new(file: String) -> Result<Self> {
        let config = Config::new(file)?;
        Ok(Self::from_config(config))
    }

    pub fn from_config(config: Config) -> Self {
        Self {
            config: Arc::new(Mutex::new(config)),
        }
    }

    pub fn config(&self) -> Config {
        self.config.lock().unwrap().clone()
    }

    pub fn host(&self) -> String {
        self.config.lock().unwrap().host.clone()
    }

    pub fn port(&self) -> u16 {
        self.config.lock().unwrap().port
    }

    pub fn message_format(&self) -> MessageFormat {
        self.config.lock().unwrap().message_format
    }

    pub fn name(&self) -> String {
        self.config.lock().unwrap().name.clone()
    }

    pub fn parameters(&self) -> ParameterSet {
        self.config.lock().unwrap().parameters
    }

    pub fn language(&self) -> Language {
        self.config.lock().unwrap().language
    }

    pub fn loglevel(&self) -> String {
        self.config.lock().unwrap().loglevel.clone()
    }

    pub fn scan_interval(&self) -> Duration {
        self.config.lock().unwrap().scan_interval
    }

    pub fn snapshot_file(&self) -> Option<String> {
        self.config.lock().unwrap().snapshot_file.clone()
    }

    pub fn state_file(&self) -> Option<String> {
        self.config.lock().unwrap().state_file.clone()
    }
}

impl FromStr for Config {
    type Err = anyhow::Error;

    fn from_str(content: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }
}

impl Config {
    pub fn new(file: String) -> Result<Self> {
        info!("Reading configuration from {}", file);
        let content = std::fs::read_to_string(&file)
            .map_err(|err| anyhow!("config.rs:error reading {}: {}", file, err))?;

        Self::from_str(&content)
    }

    /// Logs the loaded configuration, once logging is set up.
    pub fn log_summary(&self) {
        info!("Configuration loaded successfully:");
        info!("  Boiler: {}:{}", self.host, self.port);
        info!("  Message format: {}", self.message_format);
        info!("  Name: {}", self.name);
        info!("  Parameters: {:?}", self.parameters);
        info!("  Language: {:?}", self.language);
        info!("  Scan interval: {}s", self.scan_interval.as_secs());
        if let Some(snapshot) = &self.snapshot_file {
            info!("  Snapshot file: {}", snapshot);
        }
        if let Some(state_file) = &self.state_file {
            info!("  State file: {}", state_file);
        }
        info!("  Log Level: {}", self.loglevel);
    }

    fn validate(&self) -> Result<()> {
        if self.host.is_empty() {
            return Err(anyhow!("config.rs:host cannot be empty"));
        }
        if self.port == 0 {
            bail!("port must be between 1 and 65535");
        }
        if self.name.trim().is_empty() {
            return Err(anyhow!("config.rs:name cannot be empty"));
        }
        if self.scan_interval.is_zero() {
            return Err(anyhow!("config.rs:scan_interval must be at least 1 second"));
        }

        Ok(())
    }

    fn default_port() -> u16 {
        23
    }

    fn default_name() -> String {
        "Hargassner".to_string()
    }

    fn default_loglevel() -> String {
        "info".to_string()
    }

    fn default_scan_interval() -> Duration {
        Duration::from_secs(5)
    }
}
