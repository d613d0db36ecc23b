//! Instruction field and immediate extraction.
//!
//! Pure bit manipulation only: no control-signal generation and no register
//! reads happen here, so both the decode stage and the hazard unit can reuse
//! it on raw instruction words.

use crate::common::constants::{
    FUNCT3_MASK, FUNCT3_SHIFT, FUNCT7_MASK, FUNCT7_SHIFT, OPCODE_MASK, RD_MASK, RD_SHIFT, RS1_MASK,
    RS1_SHIFT, RS2_MASK, RS2_SHIFT,
};
use crate::isa::opcodes;

/// A decoded RV32I instruction: raw fields plus the format-selected immediate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decoded {
    /// Original 32-bit encoding.
    pub raw: u32,
    /// Major opcode (bits 6:0).
    pub opcode: u32,
    /// Destination register index.
    pub rd: usize,
    /// funct3 field.
    pub funct3: u32,
    /// First source register index.
    pub rs1: usize,
    /// Second source register index.
    pub rs2: usize,
    /// funct7 field.
    pub funct7: u32,
    /// Sign-extended immediate for the instruction's format.
    pub imm: i32,
}

/// Decodes an instruction word into its fields and immediate.
///
/// The immediate is selected by format: I for loads, JALR, register-immediate
/// ALU and SYSTEM; S for stores; B for branches; U for LUI/AUIPC; J for JAL.
/// Unknown opcodes decode with an I-format immediate; the decode stage flags
/// them illegal.
pub fn decode(inst: u32) -> Decoded {
    let opcode = inst & OPCODE_MASK;
    let imm = match opcode {
        opcodes::OP_STORE => imm_s(inst),
        opcodes::OP_BRANCH => imm_b(inst),
        opcodes::OP_LUI | opcodes::OP_AUIPC => imm_u(inst),
        opcodes::OP_JAL => imm_j(inst),
        _ => imm_i(inst),
    };

    Decoded {
        raw: inst,
        opcode,
        rd: ((inst >> RD_SHIFT) & RD_MASK) as usize,
        funct3: (inst >> FUNCT3_SHIFT) & FUNCT3_MASK,
        rs1: ((inst >> RS1_SHIFT) & RS1_MASK) as usize,
        rs2: ((inst >> RS2_SHIFT) & RS2_MASK) as usize,
        funct7: (inst >> FUNCT7_SHIFT) & FUNCT7_MASK,
        imm,
    }
}

/// I-format: bits 31:20, sign-extended.
fn imm_i(inst: u32) -> i32 {
    (inst as i32) >> 20
}

/// S-format: bits 31:25 and 11:7, sign-extended.
fn imm_s(inst: u32) -> i32 {
    ((inst & 0xFE00_0000) as i32 >> 20) | (((inst >> 7) & 0x1F) as i32)
}

/// B-format: bits 31, 7, 30:25, 11:8, in units of 2 bytes, sign-extended.
fn imm_b(inst: u32) -> i32 {
    ((inst & 0x8000_0000) as i32 >> 19)
        | (((inst >> 7) & 0x1) as i32) << 11
        | (((inst >> 25) & 0x3F) as i32) << 5
        | (((inst >> 8) & 0xF) as i32) << 1
}

/// U-format: bits 31:12 in place, low 12 bits zero.
fn imm_u(inst: u32) -> i32 {
    (inst & 0xFFFF_F000) as i32
}

/// J-format: bits 31, 19:12, 20, 30:21, in units of 2 bytes, sign-extended.
fn imm_j(inst: u32) -> i32 {
    ((inst & 0x8000_0000) as i32 >> 11)
        | ((inst & 0x000F_F000) as i32)
        | (((inst >> 20) & 0x1) as i32) << 11
        | (((inst >> 21) & 0x3FF) as i32) << 1
}
