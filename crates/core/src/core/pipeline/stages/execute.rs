//! Execute (EX) stage.
//!
//! Resolves operands through the bypass network (when enabled), runs the ALU,
//! decides branches and jumps, evaluates CSR instructions, and resolves the
//! `mret` redirect. Returns the next EX/MEM value plus an optional PC
//! redirect; the redirect is what makes taken control flow cost exactly two
//! wrong-path instructions.

use tracing::trace;

use crate::config::HazardStrategy;
use crate::core::Core;
use crate::core::alu::Alu;
use crate::core::pipeline::hazards;
use crate::core::pipeline::latches::{ExMem, LatchFile};
use crate::core::pipeline::signals::{CsrOp, OpASrc, OpBSrc};
use crate::isa::opcodes::funct3;

/// Runs the execute stage over the cycle-start snapshot.
///
/// The second return value is the redirect target: `Some` for a taken branch,
/// a jump, `mret`, or the serializing refetch after a CSR instruction.
pub fn execute(core: &Core, l: &LatchFile) -> (ExMem, Option<u32>) {
    let id = &l.id_ex;
    if !id.valid {
        return (ExMem::bubble(), None);
    }

    // Trapped instructions ride to commit without side effects.
    if id.trap.is_some() {
        return (
            ExMem {
                valid: true,
                pc: id.pc,
                inst: id.inst,
                rd: id.rd,
                alu: 0,
                store_data: 0,
                csr_write: None,
                ctrl: id.ctrl,
                trap: id.trap.clone(),
            },
            None,
        );
    }

    let (fwd_a, fwd_b) = match core.hazard {
        HazardStrategy::FullBypass => hazards::forward_operands(id, &l.ex_mem, &l.mem_wb),
        // Stall-only decode already waited for every producer to commit.
        HazardStrategy::StallOnly => (id.rv1, id.rv2),
    };

    let op_a = match id.ctrl.a_src {
        OpASrc::Reg1 => fwd_a,
        OpASrc::Pc => id.pc,
        OpASrc::Zero => 0,
    };
    let op_b = match id.ctrl.b_src {
        OpBSrc::Imm => id.imm as u32,
        OpBSrc::Reg2 => fwd_b,
    };

    let mut redirect = None;
    let mut alu = Alu::execute(id.ctrl.alu, op_a, op_b);
    let mut csr_write = None;

    if id.ctrl.branch {
        if branch_taken(id.inst, fwd_a, fwd_b) {
            let target = id.pc.wrapping_add(id.imm as u32);
            trace!(pc = id.pc, target, "branch taken");
            redirect = Some(target);
        } else {
            trace!(pc = id.pc, "branch not taken");
        }
    } else if id.ctrl.jump {
        let target = if id.ctrl.jalr {
            fwd_a.wrapping_add(id.imm as u32) & !0x1
        } else {
            id.pc.wrapping_add(id.imm as u32)
        };
        trace!(pc = id.pc, target, "jump");
        redirect = Some(target);
        alu = id.pc.wrapping_add(4);
    } else if id.ctrl.csr_op != CsrOp::None {
        let (old, pending) = csr_compute(core, id.ctrl.csr_op, id.ctrl.csr_addr, id.rs1, fwd_a);
        alu = old;
        csr_write = pending;
        // CSR instructions serialize: everything younger is refetched so it
        // observes the committed CSR state.
        redirect = Some(id.pc.wrapping_add(4));
    } else if id.ctrl.mret {
        // Redirect only; the MIE/MPIE restore commits with the instruction
        // at writeback, so a still-pending interrupt cannot re-fire until
        // the return has architecturally completed.
        let target = core.csrs.mepc;
        trace!(pc = id.pc, target, "mret");
        redirect = Some(target);
    }

    let next = ExMem {
        valid: true,
        pc: id.pc,
        inst: id.inst,
        rd: id.rd,
        alu,
        store_data: fwd_b,
        csr_write,
        ctrl: id.ctrl,
        trap: None,
    };
    (next, redirect)
}

/// Evaluates a branch condition from the forwarded operands.
fn branch_taken(inst: u32, a: u32, b: u32) -> bool {
    match (inst >> 12) & 0x7 {
        funct3::BEQ => a == b,
        funct3::BNE => a != b,
        funct3::BLT => (a as i32) < (b as i32),
        funct3::BGE => (a as i32) >= (b as i32),
        funct3::BLTU => a < b,
        // Decode rejected everything else; BGEU remains.
        _ => a >= b,
    }
}

/// Computes the CSR read result and the pending write, if any.
///
/// The old value is read here; the write commits at writeback with the rest
/// of the instruction. Set/clear forms with a zero source never write, per
/// the architecture.
fn csr_compute(
    core: &Core,
    op: CsrOp,
    addr: u32,
    rs1: usize,
    fwd_a: u32,
) -> (u32, Option<(u32, u32)>) {
    let old = core.csrs.read(addr);
    let src = match op {
        CsrOp::Rwi | CsrOp::Rsi | CsrOp::Rci => rs1 as u32,
        _ => fwd_a,
    };
    let pending = match op {
        CsrOp::Rw | CsrOp::Rwi => Some(src),
        CsrOp::Rs | CsrOp::Rsi if src != 0 => Some(old | src),
        CsrOp::Rc | CsrOp::Rci if src != 0 => Some(old & !src),
        _ => None,
    };
    (old, pending.map(|v| (addr, v)))
}
