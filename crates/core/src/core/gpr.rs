//! General-purpose register file.

/// The 32 integer registers. Index 0 is hardwired to zero.
#[derive(Debug, Clone, Default)]
pub struct Gpr {
    regs: [u32; 32],
}

impl Gpr {
    /// Creates a register file with all registers zeroed.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads register `idx`. Register 0 always reads as zero.
    pub fn read(&self, idx: usize) -> u32 {
        if idx == 0 { 0 } else { self.regs[idx] }
    }

    /// Writes register `idx`. Writes to register 0 are discarded.
    pub fn write(&mut self, idx: usize, val: u32) {
        if idx != 0 {
            self.regs[idx] = val;
        }
    }

    /// Snapshot of the full register file, x0 included.
    pub fn dump(&self) -> [u32; 32] {
        self.regs
    }
}
