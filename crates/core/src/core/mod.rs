//! The processor core: architectural state, pipeline latches, and the cycle
//! loop.
//!
//! `Core::tick` is the whole timing model. Each cycle:
//! 1. Sample all four latches into a read-only snapshot.
//! 2. Writeback/commit (register file is write-through: results land before
//!    decode reads). A trap taken here flushes everything and ends the cycle.
//! 3. Memory, then execute, both over the snapshot.
//! 4. Resolve control: a redirect from execute kills IF/ID and ID/EX (the two
//!    wrong-path instructions) and repoints PC for next cycle; otherwise a
//!    stall freezes fetch/decode and bubbles into execute; otherwise decode
//!    and fetch advance.
//! 5. Install the next latch values and latch the debug ports.
//!
//! Stages never see a same-cycle write to a latch; everything downstream of
//! the snapshot commits exactly once at the boundary.

pub mod alu;
pub mod csr;
pub mod debug;
pub mod gpr;
pub mod pipeline;
pub mod trap;

use tracing::trace;

use crate::config::{Config, HazardStrategy};
use crate::core::csr::Csrs;
use crate::core::debug::DebugBus;
use crate::core::gpr::Gpr;
use crate::core::pipeline::latches::{ExMem, IdEx, IfId, LatchFile, MemWb};
use crate::core::pipeline::{hazards, stages};
use crate::core::trap::TrapState;
use crate::memory::Memory;
use crate::stats::SimStats;

/// The pipelined core.
#[derive(Debug)]
pub struct Core {
    /// General-purpose registers.
    pub regs: Gpr,
    /// Fetch program counter.
    pub pc: u32,
    /// Machine-mode CSR bank.
    pub csrs: Csrs,
    /// Data/instruction memory.
    pub mem: Memory,

    /// IF/ID latch.
    pub if_id: IfId,
    /// ID/EX latch.
    pub id_ex: IdEx,
    /// EX/MEM latch.
    pub ex_mem: ExMem,
    /// MEM/WB latch.
    pub mem_wb: MemWb,

    /// Selected hazard-handling strategy.
    pub hazard: HazardStrategy,
    /// Trap controller state.
    pub trap_state: TrapState,
    /// Level-sensitive external interrupt line.
    pub irq: bool,
    /// Debug/introspection bus.
    pub debug: DebugBus,
    /// Performance counters.
    pub stats: SimStats,

    reset_vector: u32,
}

impl Core {
    /// Creates a core from a configuration. Memory starts zeroed.
    pub fn new(config: &Config) -> Self {
        Self {
            regs: Gpr::new(),
            pc: config.reset_vector,
            csrs: Csrs::new(),
            mem: Memory::new(config.mem_size),
            if_id: IfId::bubble(),
            id_ex: IdEx::bubble(),
            ex_mem: ExMem::bubble(),
            mem_wb: MemWb::bubble(),
            hazard: config.hazard,
            trap_state: TrapState::Normal,
            irq: false,
            debug: DebugBus::default(),
            stats: SimStats::default(),
            reset_vector: config.reset_vector,
        }
    }

    /// Synchronous reset: PC to the reset vector, latches invalidated, CSRs
    /// to reset values. Memory and registers keep their contents so a loaded
    /// program survives.
    pub fn reset(&mut self) {
        self.pc = self.reset_vector;
        self.csrs = Csrs::new();
        self.if_id = IfId::bubble();
        self.id_ex = IdEx::bubble();
        self.ex_mem = ExMem::bubble();
        self.mem_wb = MemWb::bubble();
        self.trap_state = TrapState::Normal;
    }

    /// Drives the external interrupt line. Level-sensitive: it is sampled
    /// once per cycle at the commit point and stays pending while masked.
    pub fn set_irq(&mut self, level: bool) {
        self.irq = level;
    }

    /// Advances the core by one clock cycle.
    pub fn tick(&mut self) {
        self.stats.cycles += 1;
        self.csrs.mcycle = self.csrs.mcycle.wrapping_add(1);
        self.step_trap_state();

        let prev = LatchFile {
            if_id: self.if_id.clone(),
            id_ex: self.id_ex.clone(),
            ex_mem: self.ex_mem.clone(),
            mem_wb: self.mem_wb.clone(),
        };

        if stages::writeback(self, &prev) {
            // Trap taken: everything in flight is squashed and the next
            // fetch comes from the vector.
            self.if_id = IfId::bubble();
            self.id_ex = IdEx::bubble();
            self.ex_mem = ExMem::bubble();
            self.mem_wb = MemWb::bubble();
            self.latch_debug_ports();
            return;
        }

        let next_mem_wb = stages::memory(self, &prev.ex_mem);
        let (next_ex_mem, redirect) = stages::execute(self, &prev);

        if let Some(target) = redirect {
            // Taken control flow resolved in execute: the two younger
            // instructions are wrong-path. Fetch restarts at the target next
            // cycle.
            trace!(target, "redirect");
            self.stats.flushes += 1;
            self.if_id = IfId::bubble();
            self.id_ex = IdEx::bubble();
            self.pc = target;
        } else if self.need_stall(&prev) {
            // Freeze IF/ID and PC; execute receives a bubble.
            trace!(pc = prev.if_id.pc, "stall");
            self.stats.stalls_data += 1;
            self.id_ex = IdEx::bubble();
        } else {
            self.id_ex = stages::decode(self, &prev.if_id);
            self.if_id = stages::fetch(self);
        }

        self.ex_mem = next_ex_mem;
        self.mem_wb = next_mem_wb;
        self.latch_debug_ports();
    }

    /// Stall decision for the configured hazard strategy, taken at decode
    /// over the cycle-start snapshot.
    fn need_stall(&self, l: &LatchFile) -> bool {
        match self.hazard {
            HazardStrategy::FullBypass => hazards::load_use_stall(&l.if_id, &l.id_ex),
            HazardStrategy::StallOnly => hazards::raw_stall(&l.if_id, &l.id_ex, &l.ex_mem),
        }
    }
}
