use num_enum::{IntoPrimitive, TryFromPrimitive};
use serde::{Deserialize, Serialize};
use std::convert::TryFrom;

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    De,
}

// {{{ OperatingState
/// Combustion state (`ZK`) as reported by the controller.
///
/// 8 and 11 are never documented; they are left out and decode as unknown.
#[derive(Clone, Copy, Debug, Eq, PartialEq, IntoPrimitive, TryFromPrimitive)]
#[repr(u8)]
pub enum OperatingState {
    Off = 1,
    PreparingStart = 2,
    BoilerStart = 3,
    MonitoringIgnition = 4,
    Ignition = 5,
    TransitionToFullFiring = 6,
    FullFiring = 7,
    WaitingForAshRemoval = 9,
    AshRemoval = 10,
    Cleaning = 12,
}

impl OperatingState {
    pub const ALL: [OperatingState; 10] = [
        Self::Off,
        Self::PreparingStart,
        Self::BoilerStart,
        Self::MonitoringIgnition,
        Self::Ignition,
        Self::TransitionToFullFiring,
        Self::FullFiring,
        Self::WaitingForAshRemoval,
        Self::AshRemoval,
        Self::Cleaning,
    ];

    /// Parses a raw `ZK` value. Only the canonical decimal form matches, so
    /// `"07"` or `" 7"` are unknown states.
    pub fn from_raw(raw: &str) -> Option<Self> {
        let code: u8 = raw.parse().ok()?;
        if code.to_string() != raw {
            return None;
        }
        Self::try_from(code).ok()
    }

    pub fn code(self) -> u8 {
        self.into()
    }

    pub fn label(self, language: Language) -> &'static str {
        use OperatingState::*;

        match language {
            Language::De => match self {
                Off => "Aus",
                PreparingStart => "Startvorbereitung",
                BoilerStart => "Kessel Start",
                MonitoringIgnition => "Zündüberwachung",
                Ignition => "Zündung",
                TransitionToFullFiring => "Übergang LB",
                FullFiring => "Leistungsbrand",
                WaitingForAshRemoval => "Warten auf EA",
                AshRemoval => "Entaschung",
                Cleaning => "Putzen",
            },
            Language::En => match self {
                Off => "Off",
                PreparingStart => "Preparing start",
                BoilerStart => "Boiler start",
                MonitoringIgnition => "Monitoring ignition",
                Ignition => "Ignition",
                TransitionToFullFiring => "Transition to FF",
                FullFiring => "Full firing",
                WaitingForAshRemoval => "Waiting for AR",
                AshRemoval => "Ash removal",
                Cleaning => "Cleaning",
            },
        }
    }

    /// True while the burner is heading into or running at full output.
    pub fn is_firing(self) -> bool {
        matches!(self, Self::TransitionToFullFiring | Self::FullFiring)
    }
} // }}}

pub struct OperatingStateString;
impl OperatingStateString {
    pub fn unknown_label(language: Language) -> &'static str {
        match language {
            Language::De => "Unbekannt",
            Language::En => "Unknown",
        }
    }

    pub fn from_raw(raw: Option<&str>, language: Language) -> String {
        match raw {
            Some(raw) => match OperatingState::from_raw(raw) {
                Some(state) => state.label(language).to_owned(),
                None => format!("{} ({})", Self::unknown_label(language), raw),
            },
            None => Self::unknown_label(language).to_owned(),
        }
    }
}
