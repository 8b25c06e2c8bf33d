//! Parameter keys and code tables for Hargassner boiler controllers.

pub mod fault;
pub mod state;

/// Set to the literal `False` while no fault is active.
pub const FAULT_ACTIVE_KEY: &str = "Störung";
/// Number of the active fault, see [`fault::ErrorCodeString`].
pub const FAULT_NUMBER_KEY: &str = "Störungs Nr";
/// Combustion state code, see [`state::OperatingState`].
pub const OPERATING_STATE_KEY: &str = "ZK";
