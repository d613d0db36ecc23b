//! The five pipeline stages as free functions over the core.
//!
//! Every stage takes the cycle-start latch snapshot and produces the next
//! value of its downstream latch; `Core::tick` owns the ordering and installs
//! the results at the cycle boundary.

mod decode;
mod execute;
mod fetch;
mod memory;
mod writeback;

pub use decode::decode;
pub use execute::execute;
pub use fetch::fetch;
pub use memory::memory;
pub use writeback::writeback;
