//! Trap controller.
//!
//! A four-state machine overlaid on the commit point. `Normal` is steady
//! state; `TrapEntry` and `TrapReturn` each last exactly one cycle and mark
//! the transfer in flight; `Handler` holds while software runs at `mtvec`.
//! The states exist for introspection — the architectural work happens in
//! [`Core::enter_trap`] and [`Core::trap_return`].

use tracing::trace;

use crate::common::Trap;
use crate::common::constants::CAUSE_INTERRUPT_BIT;
use crate::core::Core;
use crate::core::csr::{MSTATUS_MIE, MSTATUS_MPIE, MSTATUS_MPP};

/// Trap controller state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TrapState {
    /// No trap in progress.
    #[default]
    Normal,
    /// Trap accepted this cycle; pipeline flushed, PC at the vector.
    TrapEntry,
    /// Handler software executing.
    Handler,
    /// `mret` committed this cycle; interrupt state restored.
    TrapReturn,
}

impl Core {
    /// Advances the transitional trap states at a cycle boundary.
    pub(crate) fn step_trap_state(&mut self) {
        self.trap_state = match self.trap_state {
            TrapState::TrapEntry => TrapState::Handler,
            TrapState::TrapReturn => TrapState::Normal,
            s => s,
        };
    }

    /// Takes a trap at the commit point.
    ///
    /// Saves `epc` and the cause, stacks the interrupt enable
    /// (`MPIE` ← `MIE`, `MIE` ← 0), and vectors to `mtvec`. The caller
    /// flushes the pipeline.
    pub(crate) fn enter_trap(&mut self, cause: &Trap, epc: u32) {
        self.csrs.mepc = epc & !0x1;
        self.csrs.mcause = cause.cause();

        let mie_was = self.csrs.mstatus & MSTATUS_MIE != 0;
        let mut mstatus = MSTATUS_MPP;
        if mie_was {
            mstatus |= MSTATUS_MPIE;
        }
        self.csrs.mstatus = mstatus;

        self.pc = self.csrs.mtvec;
        self.trap_state = TrapState::TrapEntry;

        self.stats.traps_taken += 1;
        if cause.cause() & CAUSE_INTERRUPT_BIT != 0 {
            self.stats.interrupts_taken += 1;
        }
        trace!(%cause, epc, vector = self.pc, "trap entry");
    }

    /// Executes the `mret` state restore when the instruction commits.
    ///
    /// `MIE` ← `MPIE`, `MPIE` ← 1, per the privileged architecture. Runs at
    /// the commit point so a level-held interrupt line cannot re-fire while
    /// the return is still in flight.
    pub(crate) fn trap_return(&mut self) {
        let mpie_was = self.csrs.mstatus & MSTATUS_MPIE != 0;
        let mut mstatus = MSTATUS_MPP | MSTATUS_MPIE;
        if mpie_was {
            mstatus |= MSTATUS_MIE;
        }
        self.csrs.mstatus = mstatus;
        self.trap_state = TrapState::TrapReturn;
        trace!(mepc = self.csrs.mepc, "trap return");
    }
}
