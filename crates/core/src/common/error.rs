//! Trap and simulation error definitions.
//!
//! Two distinct failure domains live here:
//! 1. **Traps:** Architectural exceptions and interrupts. These are not Rust
//!    errors in the usual sense — they are events the simulated machine
//!    handles itself via the trap controller.
//! 2. **Simulation errors:** Host-side failures (unreadable image files, bad
//!    configuration) surfaced to the embedding application.

use std::fmt;

use thiserror::Error;

use super::constants::CAUSE_INTERRUPT_BIT;

/// RISC-V trap types representing exceptions and interrupts.
///
/// Covers the machine-mode subset this core implements. Synchronous
/// exceptions carry the faulting address or encoding where the architecture
/// defines one.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Trap {
    /// Instruction fetch from a non-word-aligned PC. Carries the PC.
    InstructionAddressMisaligned(u32),

    /// Invalid or unimplemented instruction encoding. Carries the encoding.
    IllegalInstruction(u32),

    /// `EBREAK` executed. Carries the PC of the breakpoint.
    Breakpoint(u32),

    /// Load from a misaligned address. Carries the address.
    LoadAddressMisaligned(u32),

    /// Load from outside the memory array. Carries the address.
    LoadAccessFault(u32),

    /// Store to a misaligned address. Carries the address.
    StoreAddressMisaligned(u32),

    /// Store to outside the memory array. Carries the address.
    StoreAccessFault(u32),

    /// `ECALL` executed in machine mode.
    EnvironmentCall,

    /// Machine timer interrupt.
    MachineTimerInterrupt,

    /// Machine external interrupt (the level-sensitive pin).
    MachineExternalInterrupt,
}

impl Trap {
    /// Returns whether this trap is an asynchronous interrupt.
    pub const fn is_interrupt(&self) -> bool {
        matches!(
            self,
            Self::MachineTimerInterrupt | Self::MachineExternalInterrupt
        )
    }

    /// Returns the `mcause` value for this trap, interrupt bit included.
    pub const fn cause(&self) -> u32 {
        match self {
            Self::InstructionAddressMisaligned(_) => 0,
            Self::IllegalInstruction(_) => 2,
            Self::Breakpoint(_) => 3,
            Self::LoadAddressMisaligned(_) => 4,
            Self::LoadAccessFault(_) => 5,
            Self::StoreAddressMisaligned(_) => 6,
            Self::StoreAccessFault(_) => 7,
            Self::EnvironmentCall => 11,
            Self::MachineTimerInterrupt => CAUSE_INTERRUPT_BIT | 7,
            Self::MachineExternalInterrupt => CAUSE_INTERRUPT_BIT | 11,
        }
    }
}

impl fmt::Display for Trap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InstructionAddressMisaligned(pc) => {
                write!(f, "InstructionAddressMisaligned({pc:#x})")
            }
            Self::IllegalInstruction(inst) => write!(f, "IllegalInstruction({inst:#x})"),
            Self::Breakpoint(pc) => write!(f, "Breakpoint({pc:#x})"),
            Self::LoadAddressMisaligned(addr) => write!(f, "LoadAddressMisaligned({addr:#x})"),
            Self::LoadAccessFault(addr) => write!(f, "LoadAccessFault({addr:#x})"),
            Self::StoreAddressMisaligned(addr) => write!(f, "StoreAddressMisaligned({addr:#x})"),
            Self::StoreAccessFault(addr) => write!(f, "StoreAccessFault({addr:#x})"),
            Self::EnvironmentCall => write!(f, "EnvironmentCall"),
            Self::MachineTimerInterrupt => write!(f, "MachineTimerInterrupt"),
            Self::MachineExternalInterrupt => write!(f, "MachineExternalInterrupt"),
        }
    }
}

impl std::error::Error for Trap {}

/// Host-side simulation errors.
#[derive(Debug, Error)]
pub enum SimError {
    /// A program image file could not be read.
    #[error("could not read image '{path}': {source}")]
    ImageRead {
        /// Path of the file that failed to open.
        path: String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The program image does not fit in the configured memory.
    #[error("image is {image} bytes but memory holds only {memory} bytes")]
    ImageTooLarge {
        /// Image size in bytes.
        image: usize,
        /// Memory size in bytes.
        memory: usize,
    },

    /// The configuration could not be parsed.
    #[error("invalid configuration: {0}")]
    Config(#[from] serde_json::Error),
}
