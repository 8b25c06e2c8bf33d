use crate::prelude::*;
use crate::boiler::fault::NO_FAULT;
use crate::boiler::{FAULT_ACTIVE_KEY, FAULT_NUMBER_KEY, OPERATING_STATE_KEY};

use enum_dispatch::*;
use serde::Serialize;
use std::sync::Arc;

/// Presentation of a value the bridge has never received.
pub const UNKNOWN: &str = "Unknown";

pub const ICON_ALERT: &str = "mdi:alert";
pub const ICON_CHECK: &str = "mdi:check";
pub const ICON_FIRING: &str = "mdi:fireplace";
pub const ICON_NOT_FIRING: &str = "mdi:fireplace-off";

// DisplayState {{{
/// What the host shows for one sensor. Always rebuilt from scratch.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct DisplayState {
    pub state: String,
    pub icon: Option<String>,
    pub unit: Option<String>,
}

impl DisplayState {
    pub fn new(state: impl Into<String>, icon: Option<&str>, unit: Option<String>) -> Self {
        Self {
            state: state.into(),
            icon: icon.map(str::to_owned),
            unit,
        }
    }
} // }}}

#[enum_dispatch]
pub trait Translate {
    /// The parameter this sensor is driven by.
    fn key(&self) -> &str;

    fn default_icon(&self) -> Option<&str> {
        None
    }

    /// Computes the display state from what the bridge currently holds.
    /// Never fails: every raw input maps to some state.
    fn translate(&self, bridge: &dyn Bridge) -> DisplayState;
}

// GenericValue {{{
/// Passes the raw value through untouched.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct GenericValue {
    key: String,
    icon: Option<String>,
}

impl GenericValue {
    pub fn new(key: &str, icon: Option<&str>) -> Self {
        Self {
            key: key.to_owned(),
            icon: icon.map(str::to_owned),
        }
    }
}

impl Translate for GenericValue {
    fn key(&self) -> &str {
        &self.key
    }

    fn default_icon(&self) -> Option<&str> {
        self.icon.as_deref()
    }

    fn translate(&self, bridge: &dyn Bridge) -> DisplayState {
        DisplayState::new(
            bridge.current_value(&self.key).unwrap_or_else(|| UNKNOWN.to_owned()),
            self.default_icon(),
            bridge.unit_of(&self.key),
        )
    }
} // }}}

// FaultStatus {{{
/// Decodes `Störung` / `Störungs Nr` into a fault description.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct FaultStatus;

impl Translate for FaultStatus {
    fn key(&self) -> &str {
        FAULT_ACTIVE_KEY
    }

    fn default_icon(&self) -> Option<&str> {
        Some(ICON_ALERT)
    }

    fn translate(&self, bridge: &dyn Bridge) -> DisplayState {
        let unit = bridge.unit_of(FAULT_ACTIVE_KEY);

        match bridge.current_value(FAULT_ACTIVE_KEY).as_deref() {
            None => DisplayState::new(UNKNOWN, self.default_icon(), unit),
            // literal comparison; "false", "0" and "" all count as a fault
            Some(NO_FAULT) => DisplayState::new("OK", Some(ICON_CHECK), unit),
            Some(_) => {
                let error_id = bridge.current_value(FAULT_NUMBER_KEY).unwrap_or_else(|| {
                    debug!("fault active but {} has no value", FAULT_NUMBER_KEY);
                    String::new()
                });
                if ErrorCodeString::lookup(&error_id).is_none() {
                    debug!("unknown fault number {:?}", error_id);
                }
                DisplayState::new(ErrorCodeString::from_code(&error_id), Some(ICON_ALERT), unit)
            }
        }
    }
} // }}}

// BoilerState {{{
/// Decodes the combustion state code `ZK` into a localized label.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct BoilerState {
    language: Language,
}

impl BoilerState {
    pub fn new(language: Language) -> Self {
        Self { language }
    }

    pub fn language(&self) -> Language {
        self.language
    }
}

impl Translate for BoilerState {
    fn key(&self) -> &str {
        OPERATING_STATE_KEY
    }

    fn default_icon(&self) -> Option<&str> {
        Some(ICON_NOT_FIRING)
    }

    fn translate(&self, bridge: &dyn Bridge) -> DisplayState {
        let raw = bridge.current_value(OPERATING_STATE_KEY);

        let state = raw.as_deref().and_then(OperatingState::from_raw);
        if let (Some(raw), None) = (&raw, state) {
            debug!("unknown boiler state {:?}", raw);
        }
        let firing = state.is_some_and(OperatingState::is_firing);

        DisplayState::new(
            OperatingStateString::from_raw(raw.as_deref(), self.language),
            Some(if firing { ICON_FIRING } else { ICON_NOT_FIRING }),
            bridge.unit_of(OPERATING_STATE_KEY),
        )
    }
} // }}}

#[enum_dispatch(Translate)]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum SensorKind {
    Generic(GenericValue),
    FaultStatus(FaultStatus),
    OperatingState(BoilerState),
}

impl SensorKind {
    /// Picks the translator for a catalog parameter. Only the fault and
    /// combustion state keys get special treatment.
    pub fn for_key(key: &str, icon: Option<&str>, language: Language) -> Self {
        match key {
            FAULT_ACTIVE_KEY => FaultStatus.into(),
            OPERATING_STATE_KEY => BoilerState::new(language).into(),
            _ => GenericValue::new(key, icon).into(),
        }
    }
}

// Sensor {{{
/// One monitored value as handed to the host.
#[derive(Clone)]
pub struct Sensor {
    name: String,
    kind: SensorKind,
    bridge: Arc<dyn Bridge>,
    state: DisplayState,
}

impl std::fmt::Debug for Sensor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Sensor")
            .field("name", &self.name)
            .field("kind", &self.kind)
            .field("state", &self.state)
            .finish()
    }
}

impl Sensor {
    pub fn new(name: impl Into<String>, kind: SensorKind, bridge: Arc<dyn Bridge>) -> Self {
        let state = DisplayState::new(UNKNOWN, kind.default_icon(), bridge.unit_of(kind.key()));
        Self {
            name: name.into(),
            kind,
            bridge,
            state,
        }
    }

    pub fn display_name(&self) -> &str {
        &self.name
    }

    pub fn key(&self) -> &str {
        self.kind.key()
    }

    pub fn kind(&self) -> &SensorKind {
        &self.kind
    }

    pub fn current_presentation(&self) -> &str {
        &self.state.state
    }

    pub fn unit(&self) -> Option<&str> {
        self.state.unit.as_deref()
    }

    pub fn presentation_hint(&self) -> Option<&str> {
        self.state.icon.as_deref()
    }

    pub fn display_state(&self) -> &DisplayState {
        &self.state
    }

    /// Recomputes the display state from the bridge. Called once per tick.
    pub fn refresh(&mut self) -> &DisplayState {
        self.state = self.kind.translate(self.bridge.as_ref());
        &self.state
    }
} // }}}
