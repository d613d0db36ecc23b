//! RV32I instruction set definitions.

pub mod decode;
pub mod opcodes;

pub use decode::{Decoded, decode};
