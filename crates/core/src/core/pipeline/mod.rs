//! Pipeline machinery: latches, control signals, hazards, and stages.

pub mod hazards;
pub mod latches;
pub mod signals;
pub mod stages;
