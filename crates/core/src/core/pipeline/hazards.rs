//! Data hazard detection and forwarding.
//!
//! Two strategies share this module:
//!
//! - **Full bypass** ([`forward_operands`] + [`load_use_stall`]): execute-time
//!   forwarding from the EX/MEM and MEM/WB latches, preferring the producer
//!   closest to execute. Loads cannot forward from EX/MEM — their data does
//!   not exist until after the memory stage — so a dependent instruction
//!   immediately behind a load stalls one cycle and picks the value up from
//!   MEM/WB.
//! - **Stall only** ([`raw_stall`]): no forwarding paths. Decode stalls while
//!   any producer sits in ID/EX or EX/MEM. MEM/WB is not checked: the
//!   register file is write-through (writeback commits before decode reads
//!   within the same cycle), so a producer there is already visible.
//!
//! Distance three and beyond needs no machinery in either strategy, again by
//! the write-through register file.

use tracing::trace;

use crate::core::pipeline::latches::{ExMem, IdEx, IfId, MemWb};
use crate::isa::{self, opcodes};

/// Source registers an instruction actually reads, by opcode class.
///
/// Working from the opcode rather than the raw rs1/rs2 bit fields matters:
/// LUI/AUIPC/JAL overlap those fields with immediate bits and would otherwise
/// stall on registers they never read.
fn consumer_sources(inst: u32) -> (Option<usize>, Option<usize>) {
    let d = isa::decode(inst);
    let uses_rs1 = match d.opcode {
        opcodes::OP_IMM
        | opcodes::OP_LOAD
        | opcodes::OP_STORE
        | opcodes::OP_BRANCH
        | opcodes::OP_REG
        | opcodes::OP_JALR => true,
        // Only the register-source CSR forms read rs1.
        opcodes::OP_SYSTEM => matches!(
            d.funct3,
            opcodes::funct3::CSRRW | opcodes::funct3::CSRRS | opcodes::funct3::CSRRC
        ),
        _ => false,
    };
    let uses_rs2 = matches!(
        d.opcode,
        opcodes::OP_STORE | opcodes::OP_BRANCH | opcodes::OP_REG
    );

    let src = |used: bool, reg: usize| if used && reg != 0 { Some(reg) } else { None };
    (src(uses_rs1, d.rs1), src(uses_rs2, d.rs2))
}

/// Whether a latch holds a live producer of register `reg`.
fn produces(valid: bool, trap: bool, reg_write: bool, rd: usize, reg: usize) -> bool {
    valid && !trap && reg_write && rd != 0 && rd == reg
}

/// Resolves the execute-stage operands through the bypass network.
///
/// EX/MEM wins over MEM/WB when both carry the register: it is the younger
/// producer, which also makes back-to-back writes to the same register (WAW)
/// resolve in program order for the consumer.
pub fn forward_operands(id: &IdEx, ex_mem: &ExMem, mem_wb: &MemWb) -> (u32, u32) {
    let mut a = id.rv1;
    let mut b = id.rv2;

    if produces(
        mem_wb.valid,
        mem_wb.trap.is_some(),
        mem_wb.ctrl.reg_write,
        mem_wb.rd,
        id.rs1,
    ) {
        a = mem_wb.result();
    }
    if produces(
        mem_wb.valid,
        mem_wb.trap.is_some(),
        mem_wb.ctrl.reg_write,
        mem_wb.rd,
        id.rs2,
    ) {
        b = mem_wb.result();
    }

    // Loads are excluded: their value is not in ex_mem.alu (that is the
    // address); the load-use stall guarantees the consumer never needs it.
    let ex_fwd = !ex_mem.ctrl.mem_read;
    if ex_fwd
        && produces(
            ex_mem.valid,
            ex_mem.trap.is_some(),
            ex_mem.ctrl.reg_write,
            ex_mem.rd,
            id.rs1,
        )
    {
        a = ex_mem.forward_value();
    }
    if ex_fwd
        && produces(
            ex_mem.valid,
            ex_mem.trap.is_some(),
            ex_mem.ctrl.reg_write,
            ex_mem.rd,
            id.rs2,
        )
    {
        b = ex_mem.forward_value();
    }

    if a != id.rv1 || b != id.rv2 {
        trace!(pc = id.pc, a, b, "forwarded operands");
    }
    (a, b)
}

/// Load-use stall check for the full-bypass strategy.
///
/// True when the instruction sitting in IF/ID depends on a load currently in
/// ID/EX. One bubble is enough: next cycle the load is in EX/MEM and the
/// cycle after that its data forwards from MEM/WB.
pub fn load_use_stall(if_id: &IfId, id_ex: &IdEx) -> bool {
    if !if_id.valid || !id_ex.valid || !id_ex.ctrl.mem_read || id_ex.rd == 0 {
        return false;
    }
    let (rs1, rs2) = consumer_sources(if_id.inst);
    rs1 == Some(id_ex.rd) || rs2 == Some(id_ex.rd)
}

/// RAW stall check for the stall-only strategy.
///
/// True while the instruction in IF/ID reads a register that a producer in
/// ID/EX or EX/MEM has not yet committed. A producer one ahead therefore
/// costs two bubbles, a producer two ahead costs one.
pub fn raw_stall(if_id: &IfId, id_ex: &IdEx, ex_mem: &ExMem) -> bool {
    if !if_id.valid {
        return false;
    }
    let (rs1, rs2) = consumer_sources(if_id.inst);
    let hit = |reg: Option<usize>| {
        reg.is_some_and(|r| {
            produces(
                id_ex.valid,
                id_ex.trap.is_some(),
                id_ex.ctrl.reg_write,
                id_ex.rd,
                r,
            ) || produces(
                ex_mem.valid,
                ex_mem.trap.is_some(),
                ex_mem.ctrl.reg_write,
                ex_mem.rd,
                r,
            )
        })
    };
    hit(rs1) || hit(rs2)
}
