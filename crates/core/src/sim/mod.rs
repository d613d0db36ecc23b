//! Simulation driver and program loading.

pub mod loader;
pub mod simulator;

pub use simulator::Simulator;
