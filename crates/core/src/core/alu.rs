//! Arithmetic logic unit.

use crate::core::pipeline::signals::AluOp;

/// Combinational integer ALU.
#[derive(Debug)]
pub struct Alu;

impl Alu {
    /// Computes `op` over two 32-bit operands.
    ///
    /// Shift amounts use only the low five bits of `b`, per RV32.
    pub fn execute(op: AluOp, a: u32, b: u32) -> u32 {
        match op {
            AluOp::Add => a.wrapping_add(b),
            AluOp::Sub => a.wrapping_sub(b),
            AluOp::Sll => a << (b & 0x1F),
            AluOp::Slt => u32::from((a as i32) < (b as i32)),
            AluOp::Sltu => u32::from(a < b),
            AluOp::Xor => a ^ b,
            AluOp::Srl => a >> (b & 0x1F),
            AluOp::Sra => ((a as i32) >> (b & 0x1F)) as u32,
            AluOp::Or => a | b,
            AluOp::And => a & b,
        }
    }
}
