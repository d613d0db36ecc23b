//! Cycle-accurate five-stage RV32I pipeline simulator library.
//!
//! This crate implements a configurable in-order pipelined processor core with:
//! 1. **Pipeline:** Five stages (fetch, decode, execute, memory, writeback) with
//!    explicit inter-stage latches sampled once per cycle.
//! 2. **Hazards:** Two selectable strategies — full forwarding with a one-cycle
//!    load-use stall, or a stall-only scheme with no forwarding paths.
//! 3. **Traps:** Machine-mode exceptions and a level-sensitive external
//!    interrupt line, serviced precisely at the commit point.
//! 4. **Debug:** A three-port introspection bus (registers, memory, CSRs) with
//!    hardware-faithful port timing.
//! 5. **Simulation:** Flat binary loader, configuration, and statistics.

/// Common types and constants (instruction fields, traps, simulation errors).
pub mod common;
/// Simulator configuration (defaults, hazard strategy selection).
pub mod config;
/// Processor core (pipeline, register file, CSRs, trap controller, debug bus).
pub mod core;
/// Instruction set (opcodes, field and immediate extraction).
pub mod isa;
/// Byte-addressable little-endian data memory.
pub mod memory;
/// Simulation driver and program loader.
pub mod sim;
/// Statistics collection and reporting.
pub mod stats;

/// Root configuration type; use `Config::default()` or deserialize from JSON.
pub use crate::config::{Config, HazardStrategy};
/// Main core type; holds architectural state, latches, and the debug bus.
pub use crate::core::Core;
/// Top-level driver; construct with `Simulator::new`.
pub use crate::sim::Simulator;
