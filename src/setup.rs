use crate::prelude::*;
use crate::boiler::{FAULT_ACTIVE_KEY, OPERATING_STATE_KEY};
use crate::sensor::{BoilerState, FaultStatus, GenericValue};

use std::sync::Arc;

/// The `standard` parameter set: key, name suffix and icon of every generic
/// sensor, in the order they are registered.
pub const STANDARD_SENSORS: &[(&str, &str, Option<&str>)] = &[
    ("TK", "boiler temperature", None),
    ("TRG", "smoke gas temperature", None),
    ("Leistung", "output", Some("mdi:fire")),
    ("Taus", "outside temperature", None),
    ("TB1", "buffer temperature 0", Some("mdi:coolant-temperature")),
    ("TPo", "buffer temperature 1", Some("mdi:coolant-temperature")),
    ("TPm", "buffer temperature 2", Some("mdi:coolant-temperature")),
    ("TPu", "buffer temperature 3", Some("mdi:coolant-temperature")),
    ("TRL", "return temperature", None),
    ("Puff Füllgrad", "buffer level", Some("mdi:gauge")),
    ("Lagerstand", "pellet stock", Some("mdi:silo")),
    ("Verbrauchszähler", "pellet consumption", Some("mdi:basket-unfill")),
    ("TVL_1", "flow temperature", None),
];

/// Builds the sensors the host should register for `config`.
///
/// With [`ParameterSet::Full`] the bridge's catalog decides what exists;
/// otherwise the fixed standard list is used whether or not the bridge
/// knows those keys yet.
pub fn setup(config: &ConfigWrapper, bridge: Arc<dyn Bridge>) -> Vec<Sensor> {
    let name = config.name();
    let language = config.language();

    info!(
        "Setting up {:?} sensors for {} at {}:{} ({})",
        config.parameters(),
        name,
        config.host(),
        config.port(),
        config.message_format()
    );

    let sensors = match config.parameters() {
        ParameterSet::Full => full_set(&name, language, bridge),
        ParameterSet::Standard => standard_set(&name, language, bridge),
    };

    info!("{} sensors registered", sensors.len());
    sensors
}

fn fault_sensor(name: &str, bridge: Arc<dyn Bridge>) -> Sensor {
    Sensor::new(format!("{} operation", name), FaultStatus.into(), bridge)
}

fn state_sensor(name: &str, language: Language, bridge: Arc<dyn Bridge>) -> Sensor {
    Sensor::new(
        format!("{} boiler state", name),
        BoilerState::new(language).into(),
        bridge,
    )
}

fn standard_set(name: &str, language: Language, bridge: Arc<dyn Bridge>) -> Vec<Sensor> {
    let mut sensors = vec![
        fault_sensor(name, bridge.clone()),
        state_sensor(name, language, bridge.clone()),
    ];

    sensors.extend(STANDARD_SENSORS.iter().map(|(key, suffix, icon)| {
        Sensor::new(
            format!("{} {}", name, suffix),
            GenericValue::new(key, *icon).into(),
            bridge.clone(),
        )
    }));

    sensors
}

fn full_set(name: &str, language: Language, bridge: Arc<dyn Bridge>) -> Vec<Sensor> {
    let catalog = ParameterCatalog::from_bridge(bridge.as_ref());
    if catalog.is_empty() {
        warn!("bridge reported no parameters, no sensors to register");
    }

    catalog
        .parameters()
        .iter()
        .map(|p| match p.key() {
            FAULT_ACTIVE_KEY => fault_sensor(name, bridge.clone()),
            OPERATING_STATE_KEY => state_sensor(name, language, bridge.clone()),
            key => Sensor::new(
                format!("{} {}", name, p.description()),
                SensorKind::for_key(key, None, language),
                bridge.clone(),
            ),
        })
        .collect()
}
