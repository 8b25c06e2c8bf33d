#![allow(dead_code)]

pub use hargassner_sensors::prelude::*;
pub use hargassner_sensors::boiler::{FAULT_ACTIVE_KEY, FAULT_NUMBER_KEY, OPERATING_STATE_KEY};
pub use std::sync::Arc;

pub fn common_setup() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub struct Factory();
impl Factory {
    pub fn config(parameters: ParameterSet, language: Language) -> ConfigWrapper {
        ConfigWrapper::from_config(Config {
            host: "localhost".to_owned(),
            port: 23,
            message_format: MessageFormat::NanoV14L,
            name: "Hargassner".to_owned(),
            parameters,
            language,
            loglevel: "debug".to_owned(),
            scan_interval: std::time::Duration::from_secs(1),
            snapshot_file: None,
            state_file: None,
        })
    }

    /// A catalog resembling what a NANO_V14L boiler announces.
    pub fn parameters() -> Vec<Parameter> {
        vec![
            Parameter::new(OPERATING_STATE_KEY, "Kesselzustand", None),
            Parameter::new("TK", "Kesseltemperatur", Some("°C")),
            Parameter::new("TRG", "Rauchgastemperatur", Some("°C")),
            Parameter::new("Leistung", "Leistung", Some("%")),
            Parameter::new(FAULT_ACTIVE_KEY, "Störung", None),
            Parameter::new(FAULT_NUMBER_KEY, "Störungs Nr", None),
            Parameter::new("Lagerstand", "Lagerstand", Some("kg")),
        ]
    }

    pub fn bridge(values: &[(&str, &str)]) -> Arc<ValueCache> {
        let cache = ValueCache::new(Self::parameters());
        for (key, value) in values {
            cache.set(key, value).unwrap();
        }
        Arc::new(cache)
    }

    pub fn fault_sensor(bridge: Arc<ValueCache>) -> Sensor {
        Sensor::new(
            "Hargassner operation",
            SensorKind::for_key(FAULT_ACTIVE_KEY, None, Language::En),
            bridge,
        )
    }

    pub fn state_sensor(bridge: Arc<ValueCache>, language: Language) -> Sensor {
        Sensor::new(
            "Hargassner boiler state",
            SensorKind::for_key(OPERATING_STATE_KEY, None, language),
            bridge,
        )
    }
}
