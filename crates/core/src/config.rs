//! Configuration system for the pipeline simulator.
//!
//! Defines the structures used to parameterize the core. Configuration is
//! supplied as JSON via [`Config::from_json`] or built in code; every field
//! has a documented default.

use serde::Deserialize;

use crate::common::SimError;

/// Default configuration constants.
pub mod defaults {
    /// Data/instruction memory size in bytes (64 KiB).
    ///
    /// Accesses at or beyond this limit raise an access fault.
    pub const MEM_SIZE: usize = 64 * 1024;

    /// Reset vector: the PC after [`crate::Core::reset`].
    pub const RESET_VECTOR: u32 = 0;
}

/// Hazard-handling strategy for the pipeline.
///
/// Both strategies produce identical architectural results; they differ only
/// in how many cycles a dependent instruction waits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HazardStrategy {
    /// Forward results from the EX/MEM and MEM/WB latches into execute.
    ///
    /// The only unavoidable stall is the one-cycle load-use bubble: a load's
    /// data exists no earlier than the end of its memory stage.
    #[default]
    #[serde(alias = "full-bypass")]
    FullBypass,

    /// No forwarding paths; decode stalls until every producer has committed.
    ///
    /// Simpler hardware, more bubbles. Useful as a correctness baseline for
    /// the bypassed variant.
    #[serde(alias = "stall-only")]
    StallOnly,
}

/// Root configuration for the simulator.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Hazard-handling strategy.
    pub hazard: HazardStrategy,
    /// Memory size in bytes.
    pub mem_size: usize,
    /// PC value after reset.
    pub reset_vector: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            hazard: HazardStrategy::default(),
            mem_size: defaults::MEM_SIZE,
            reset_vector: defaults::RESET_VECTOR,
        }
    }
}

impl Config {
    /// Parses a configuration from a JSON string.
    ///
    /// Missing fields take their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::Config`] if the JSON is malformed or a field has
    /// the wrong type.
    pub fn from_json(json: &str) -> Result<Self, SimError> {
        Ok(serde_json::from_str(json)?)
    }
}
