//! Global constants.
//!
//! Instruction field masks/shifts for RV32I decoding plus a handful of
//! architectural constants used across the core.

/// Bit mask for extracting the opcode field from an instruction.
pub const OPCODE_MASK: u32 = 0x7F;

/// Bit mask for extracting the destination register (rd) field.
pub const RD_MASK: u32 = 0x1F;

/// Bit position shift for the destination register (rd) field.
pub const RD_SHIFT: u32 = 7;

/// Bit mask for extracting the funct3 field.
pub const FUNCT3_MASK: u32 = 0x7;

/// Bit position shift for the funct3 field.
pub const FUNCT3_SHIFT: u32 = 12;

/// Bit mask for extracting the first source register (rs1) field.
pub const RS1_MASK: u32 = 0x1F;

/// Bit position shift for the first source register (rs1) field.
pub const RS1_SHIFT: u32 = 15;

/// Bit mask for extracting the second source register (rs2) field.
pub const RS2_MASK: u32 = 0x1F;

/// Bit position shift for the second source register (rs2) field.
pub const RS2_SHIFT: u32 = 20;

/// Bit mask for extracting the funct7 field.
pub const FUNCT7_MASK: u32 = 0x7F;

/// Bit position shift for the funct7 field.
pub const FUNCT7_SHIFT: u32 = 25;

/// Size of an instruction in bytes.
pub const INSTRUCTION_SIZE: u32 = 4;

/// Canonical NOP encoding (`addi x0, x0, 0`).
pub const NOP: u32 = 0x0000_0013;

/// Bit set in `mcause` when the trap cause is an interrupt.
pub const CAUSE_INTERRUPT_BIT: u32 = 1 << 31;
