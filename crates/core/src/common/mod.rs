//! Common types shared across the simulator.

pub mod constants;
pub mod error;

pub use error::{SimError, Trap};
