//! Simulation statistics.
//!
//! Counters for cycles, retirement mix, hazard penalties, and traps, read by
//! the embedding harness or the CLI after a run.

use std::fmt;

/// Performance counters accumulated over a run.
#[derive(Debug, Clone, Default)]
pub struct SimStats {
    /// Total clock cycles elapsed.
    pub cycles: u64,
    /// Instructions committed (NOPs excluded).
    pub instructions_retired: u64,

    /// Loads retired.
    pub inst_load: u64,
    /// Stores retired.
    pub inst_store: u64,
    /// Branches and jumps retired.
    pub inst_branch: u64,
    /// ALU instructions retired.
    pub inst_alu: u64,
    /// System (CSR, mret) instructions retired.
    pub inst_system: u64,

    /// Cycles lost to data-hazard stalls.
    pub stalls_data: u64,
    /// Pipeline flushes from taken control flow and serialization.
    pub flushes: u64,
    /// Traps taken (exceptions and interrupts).
    pub traps_taken: u64,
    /// Interrupts among the traps taken.
    pub interrupts_taken: u64,
}

impl SimStats {
    /// Cycles per retired instruction. Zero when nothing retired.
    pub fn cpi(&self) -> f64 {
        if self.instructions_retired == 0 {
            0.0
        } else {
            self.cycles as f64 / self.instructions_retired as f64
        }
    }
}

impl fmt::Display for SimStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "cycles:       {}", self.cycles)?;
        writeln!(f, "retired:      {}", self.instructions_retired)?;
        writeln!(
            f,
            "  alu {} / load {} / store {} / branch {} / system {}",
            self.inst_alu, self.inst_load, self.inst_store, self.inst_branch, self.inst_system
        )?;
        writeln!(f, "cpi:          {:.2}", self.cpi())?;
        writeln!(f, "data stalls:  {}", self.stalls_data)?;
        writeln!(f, "flushes:      {}", self.flushes)?;
        write!(
            f,
            "traps:        {} ({} interrupts)",
            self.traps_taken, self.interrupts_taken
        )
    }
}
