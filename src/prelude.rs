pub use anyhow::{anyhow, bail, Error, Result};
pub use log::{debug, error, info, trace, warn};

pub use std::str::FromStr;

pub use crate::{
    boiler,
    boiler::fault::ErrorCodeString,
    boiler::state::{Language, OperatingState, OperatingStateString},
    bridge::{Bridge, Parameter},
    catalog::ParameterCatalog,
    config,
    config::{Config, ConfigWrapper, MessageFormat, ParameterSet},
    options::Options,
    orchestrator::PollOrchestrator,
    sensor::{DisplayState, Sensor, SensorKind, Translate},
    value_cache::ValueCache,
};
