//! Writeback (WB) stage and the commit point.
//!
//! Runs first each cycle so the register file behaves write-through: a result
//! committed here is visible to decode in the same cycle. This is also where
//! the trap controller samples. An interrupt first lets a clean instruction
//! at the commit point retire — its store already landed in the memory stage,
//! so diverting it would leave a half-done instruction behind — and then
//! vectors with `mepc` at the next unretired instruction. An exception tag
//! that rode the latches to commit fires here; the faulting instruction never
//! retires. The `mret` state restore also commits here, with the instruction.

use tracing::trace;

use crate::common::Trap;
use crate::common::constants::NOP;
use crate::core::Core;
use crate::core::pipeline::latches::LatchFile;

/// Runs the commit point over the cycle-start snapshot.
///
/// Returns `true` when a trap was taken; the caller flushes the whole
/// pipeline and skips the younger stages for this cycle.
pub fn writeback(core: &mut Core, l: &LatchFile) -> bool {
    let wb = &l.mem_wb;

    if core.irq && core.csrs.interrupts_enabled() && core.csrs.external_enabled() {
        // Interrupts win over a simultaneous exception (the excepting
        // instruction does not retire and re-raises after the handler), but
        // a clean instruction commits before the pipeline is flushed.
        let epc = if wb.valid && wb.trap.is_some() {
            wb.pc
        } else {
            if wb.valid {
                retire(core, l);
            }
            next_unretired_pc(core, l)
        };
        trace!(epc, "external interrupt taken");
        core.enter_trap(&Trap::MachineExternalInterrupt, epc);
        return true;
    }

    if !wb.valid {
        return false;
    }

    if let Some(t) = &wb.trap {
        trace!(pc = wb.pc, %t, "exception at commit");
        core.enter_trap(t, wb.pc);
        return true;
    }

    retire(core, l);
    false
}

/// Commits the MEM/WB instruction: register write, pending CSR write, the
/// `mret` state restore, and the retirement counters.
fn retire(core: &mut Core, l: &LatchFile) {
    let wb = &l.mem_wb;

    if wb.ctrl.reg_write && wb.rd != 0 {
        let val = wb.result();
        trace!(pc = wb.pc, rd = wb.rd, val, "retire");
        core.regs.write(wb.rd, val);
    } else {
        trace!(pc = wb.pc, "retire");
    }

    if let Some((addr, val)) = wb.csr_write {
        core.csrs.write(addr, val);
    }

    if wb.ctrl.mret {
        core.trap_return();
    }

    retire_stats(core, l);
}

/// Resume PC for an interrupt: the oldest instruction that did not retire
/// this cycle. An empty pipeline resumes at the fetch PC.
fn next_unretired_pc(core: &Core, l: &LatchFile) -> u32 {
    if l.ex_mem.valid {
        l.ex_mem.pc
    } else if l.id_ex.valid {
        l.id_ex.pc
    } else if l.if_id.valid {
        l.if_id.pc
    } else {
        core.pc
    }
}

/// Updates the retirement counters. NOPs retire but are not counted.
fn retire_stats(core: &mut Core, l: &LatchFile) {
    let wb = &l.mem_wb;
    if wb.inst == NOP || wb.inst == 0 {
        return;
    }
    core.stats.instructions_retired += 1;
    if wb.ctrl.mem_read {
        core.stats.inst_load += 1;
    } else if wb.ctrl.mem_write {
        core.stats.inst_store += 1;
    } else if wb.ctrl.branch || wb.ctrl.jump {
        core.stats.inst_branch += 1;
    } else if wb.ctrl.csr_op != crate::core::pipeline::signals::CsrOp::None || wb.ctrl.mret {
        core.stats.inst_system += 1;
    } else {
        core.stats.inst_alu += 1;
    }
}
