//! Instruction decode (ID) stage.
//!
//! Extracts fields, generates the control word, and reads both source
//! registers. The register file is write-through: writeback has already
//! committed this cycle's result before decode runs, so a producer three or
//! more instructions ahead is visible here without forwarding.

use tracing::trace;

use crate::common::Trap;
use crate::core::Core;
use crate::core::pipeline::latches::{IdEx, IfId};
use crate::core::pipeline::signals::{AluOp, ControlSignals, CsrOp, MemWidth, OpASrc, OpBSrc};
use crate::isa::{self, Decoded, opcodes};

/// Decodes the fetched instruction and reads its operands.
pub fn decode(core: &Core, if_id: &IfId) -> IdEx {
    if !if_id.valid {
        return IdEx::bubble();
    }

    let d = isa::decode(if_id.inst);

    // A fetch-stage trap rides along undecoded.
    let (ctrl, trap) = if if_id.trap.is_some() {
        (ControlSignals::default(), if_id.trap.clone())
    } else {
        match control_for(&d, if_id.pc) {
            Ok(ctrl) => (ctrl, None),
            Err(t) => (ControlSignals::default(), Some(t)),
        }
    };

    trace!(pc = if_id.pc, rd = d.rd, rs1 = d.rs1, rs2 = d.rs2, "decode");

    IdEx {
        valid: true,
        pc: if_id.pc,
        inst: if_id.inst,
        rs1: d.rs1,
        rs2: d.rs2,
        rd: d.rd,
        imm: d.imm,
        rv1: core.regs.read(d.rs1),
        rv2: core.regs.read(d.rs2),
        ctrl,
        trap,
    }
}

/// Builds the control word for a decoded instruction.
fn control_for(d: &Decoded, pc: u32) -> Result<ControlSignals, Trap> {
    let mut ctrl = ControlSignals::default();

    match d.opcode {
        opcodes::OP_LUI => {
            ctrl.reg_write = true;
            ctrl.a_src = OpASrc::Zero;
        }
        opcodes::OP_AUIPC => {
            ctrl.reg_write = true;
            ctrl.a_src = OpASrc::Pc;
        }
        opcodes::OP_JAL => {
            ctrl.reg_write = true;
            ctrl.jump = true;
        }
        opcodes::OP_JALR => {
            if d.funct3 != 0 {
                return Err(Trap::IllegalInstruction(d.raw));
            }
            ctrl.reg_write = true;
            ctrl.jump = true;
            ctrl.jalr = true;
        }
        opcodes::OP_BRANCH => {
            match d.funct3 {
                opcodes::funct3::BEQ
                | opcodes::funct3::BNE
                | opcodes::funct3::BLT
                | opcodes::funct3::BGE
                | opcodes::funct3::BLTU
                | opcodes::funct3::BGEU => {}
                _ => return Err(Trap::IllegalInstruction(d.raw)),
            }
            ctrl.branch = true;
            ctrl.b_src = OpBSrc::Reg2;
        }
        opcodes::OP_LOAD => {
            ctrl.reg_write = true;
            ctrl.mem_read = true;
            (ctrl.width, ctrl.signed_load) = match d.funct3 {
                opcodes::funct3::LB => (MemWidth::Byte, true),
                opcodes::funct3::LH => (MemWidth::Half, true),
                opcodes::funct3::LW => (MemWidth::Word, false),
                opcodes::funct3::LBU => (MemWidth::Byte, false),
                opcodes::funct3::LHU => (MemWidth::Half, false),
                _ => return Err(Trap::IllegalInstruction(d.raw)),
            };
        }
        opcodes::OP_STORE => {
            ctrl.mem_write = true;
            ctrl.width = match d.funct3 {
                opcodes::funct3::SB => MemWidth::Byte,
                opcodes::funct3::SH => MemWidth::Half,
                opcodes::funct3::SW => MemWidth::Word,
                _ => return Err(Trap::IllegalInstruction(d.raw)),
            };
        }
        opcodes::OP_IMM => {
            ctrl.reg_write = true;
            // There is no SUBI; funct7 only distinguishes SRLI from SRAI.
            ctrl.alu = alu_op(d.funct3, d.funct7, false);
        }
        opcodes::OP_REG => {
            ctrl.reg_write = true;
            ctrl.b_src = OpBSrc::Reg2;
            ctrl.alu = alu_op(d.funct3, d.funct7, true);
        }
        opcodes::OP_MISC_MEM => {
            // FENCE: single hart, no caches. Retires as a no-op.
        }
        opcodes::OP_SYSTEM => match d.funct3 {
            opcodes::funct3::PRIV => match d.raw {
                opcodes::system::ECALL => return Err(Trap::EnvironmentCall),
                opcodes::system::EBREAK => return Err(Trap::Breakpoint(pc)),
                opcodes::system::MRET => ctrl.mret = true,
                _ => return Err(Trap::IllegalInstruction(d.raw)),
            },
            _ => {
                ctrl.csr_op = match d.funct3 {
                    opcodes::funct3::CSRRW => CsrOp::Rw,
                    opcodes::funct3::CSRRS => CsrOp::Rs,
                    opcodes::funct3::CSRRC => CsrOp::Rc,
                    opcodes::funct3::CSRRWI => CsrOp::Rwi,
                    opcodes::funct3::CSRRSI => CsrOp::Rsi,
                    opcodes::funct3::CSRRCI => CsrOp::Rci,
                    _ => return Err(Trap::IllegalInstruction(d.raw)),
                };
                ctrl.csr_addr = d.raw >> 20;
                ctrl.reg_write = true;
            }
        },
        _ => return Err(Trap::IllegalInstruction(d.raw)),
    }

    Ok(ctrl)
}

/// Maps funct3/funct7 to an ALU operation.
///
/// `reg_form` distinguishes R-type (where funct7 selects SUB) from I-type
/// (where only the shift encodings carry a meaningful funct7).
fn alu_op(funct3: u32, funct7: u32, reg_form: bool) -> AluOp {
    match funct3 {
        opcodes::funct3::ADD_SUB => {
            if reg_form && funct7 == opcodes::funct7::ALT {
                AluOp::Sub
            } else {
                AluOp::Add
            }
        }
        opcodes::funct3::SLL => AluOp::Sll,
        opcodes::funct3::SLT => AluOp::Slt,
        opcodes::funct3::SLTU => AluOp::Sltu,
        opcodes::funct3::XOR => AluOp::Xor,
        opcodes::funct3::SRL_SRA => {
            if funct7 & opcodes::funct7::ALT != 0 {
                AluOp::Sra
            } else {
                AluOp::Srl
            }
        }
        opcodes::funct3::OR => AluOp::Or,
        // funct3 is three bits; AND (0x7) is the only remaining value.
        _ => AluOp::And,
    }
}
