//! Inter-stage pipeline latches.
//!
//! Each latch is a single entry with a `valid` flag: an invalid latch is a
//! bubble. `tick` samples all four latches into a [`LatchFile`] at the start
//! of the cycle; every stage reads only that snapshot and the next values are
//! installed exactly once at the cycle boundary. Forwarding therefore never
//! observes a same-cycle write.
//!
//! Pending synchronous exceptions travel as `Option<Trap>` tags alongside the
//! instruction and fire only when the instruction reaches the commit point.

use crate::common::Trap;
use crate::core::pipeline::signals::ControlSignals;

/// IF/ID latch: fetched instruction word.
#[derive(Debug, Clone, Default)]
pub struct IfId {
    /// False means bubble.
    pub valid: bool,
    /// PC of the fetched instruction.
    pub pc: u32,
    /// Raw instruction word.
    pub inst: u32,
    /// Pending exception from fetch.
    pub trap: Option<Trap>,
}

/// ID/EX latch: decoded instruction with operands read.
#[derive(Debug, Clone, Default)]
pub struct IdEx {
    /// False means bubble.
    pub valid: bool,
    /// PC of the instruction.
    pub pc: u32,
    /// Raw instruction word.
    pub inst: u32,
    /// First source register index.
    pub rs1: usize,
    /// Second source register index.
    pub rs2: usize,
    /// Destination register index.
    pub rd: usize,
    /// Sign-extended immediate.
    pub imm: i32,
    /// rs1 value read at decode.
    pub rv1: u32,
    /// rs2 value read at decode.
    pub rv2: u32,
    /// Control word.
    pub ctrl: ControlSignals,
    /// Pending exception from fetch or decode.
    pub trap: Option<Trap>,
}

/// EX/MEM latch: ALU result and store data.
#[derive(Debug, Clone, Default)]
pub struct ExMem {
    /// False means bubble.
    pub valid: bool,
    /// PC of the instruction.
    pub pc: u32,
    /// Raw instruction word.
    pub inst: u32,
    /// Destination register index.
    pub rd: usize,
    /// ALU result: computed value, memory address, link address, or the old
    /// CSR value for CSR instructions.
    pub alu: u32,
    /// rs2 value for stores (post-forwarding).
    pub store_data: u32,
    /// Pending CSR update, committed at writeback.
    pub csr_write: Option<(u32, u32)>,
    /// Control word.
    pub ctrl: ControlSignals,
    /// Pending exception.
    pub trap: Option<Trap>,
}

/// MEM/WB latch: result ready to commit.
#[derive(Debug, Clone, Default)]
pub struct MemWb {
    /// False means bubble.
    pub valid: bool,
    /// PC of the instruction.
    pub pc: u32,
    /// Raw instruction word.
    pub inst: u32,
    /// Destination register index.
    pub rd: usize,
    /// ALU result carried from execute.
    pub alu: u32,
    /// Loaded value (extension already applied).
    pub load_data: u32,
    /// Pending CSR update, committed at writeback.
    pub csr_write: Option<(u32, u32)>,
    /// Control word.
    pub ctrl: ControlSignals,
    /// Pending exception.
    pub trap: Option<Trap>,
}

impl IfId {
    /// An invalid (bubble) latch value.
    pub fn bubble() -> Self {
        Self::default()
    }
}

impl IdEx {
    /// An invalid (bubble) latch value.
    pub fn bubble() -> Self {
        Self::default()
    }
}

impl ExMem {
    /// An invalid (bubble) latch value.
    pub fn bubble() -> Self {
        Self::default()
    }

    /// The value this latch supplies to a forwarding consumer.
    ///
    /// Only meaningful when `ctrl.reg_write` is set and the instruction is
    /// not a load (load data does not exist until after the memory stage).
    pub const fn forward_value(&self) -> u32 {
        self.alu
    }
}

impl MemWb {
    /// An invalid (bubble) latch value.
    pub fn bubble() -> Self {
        Self::default()
    }

    /// The value writeback will commit to rd.
    pub const fn result(&self) -> u32 {
        if self.ctrl.mem_read {
            self.load_data
        } else {
            self.alu
        }
    }
}

/// Read-only snapshot of all four latches taken at the start of a cycle.
#[derive(Debug, Clone, Default)]
pub struct LatchFile {
    /// IF/ID as of the cycle start.
    pub if_id: IfId,
    /// ID/EX as of the cycle start.
    pub id_ex: IdEx,
    /// EX/MEM as of the cycle start.
    pub ex_mem: ExMem,
    /// MEM/WB as of the cycle start.
    pub mem_wb: MemWb,
}
