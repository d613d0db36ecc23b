//! Debug/introspection bus.
//!
//! Three read-only ports for an external harness, with hardware-faithful
//! timing:
//!
//! - **Register port** — combinational. Setting the address and reading data
//!   in the same cycle returns the live register file value.
//! - **Memory port** and **CSR port** — registered. An address presented via
//!   the setter takes effect at the next clock edge; the data register is
//!   valid exactly one cycle later and holds its value until the address
//!   changes or the underlying state is written.
//!
//! The registered ports are latched at the very end of `Core::tick`, after
//! the memory stage's store and writeback's CSR commit have landed. That
//! ordering is the arbitration rule: a debug read at a different address than
//! the pipeline touched this cycle returns the debug-requested value, never a
//! stale in-flight one. Reads never perturb core state, so re-reading without
//! an intervening core write is idempotent.
//!
//! Out-of-range addresses are undefined by contract; in this implementation
//! the memory port reads zeros and the CSR port reads unimplemented CSRs as
//! zero.

use crate::core::Core;

/// Debug bus state: one address latch per port plus the registered data.
#[derive(Debug, Clone, Default)]
pub struct DebugBus {
    reg_addr: usize,
    mem_addr: u32,
    mem_data: u32,
    csr_addr: u32,
    csr_data: u32,
}

impl Core {
    /// Presents a register index on the register port.
    pub fn debug_set_reg_addr(&mut self, idx: usize) {
        self.debug.reg_addr = idx & 0x1F;
    }

    /// Reads the register port. Combinational: valid the same cycle.
    pub fn debug_reg_data(&self) -> u32 {
        self.regs.read(self.debug.reg_addr)
    }

    /// Presents a byte address on the memory port.
    ///
    /// The data register holds the word at this address starting one cycle
    /// later.
    pub fn debug_set_mem_addr(&mut self, addr: u32) {
        self.debug.mem_addr = addr;
    }

    /// Reads the memory port data register.
    pub fn debug_mem_data(&self) -> u32 {
        self.debug.mem_data
    }

    /// Presents a CSR address on the CSR port.
    ///
    /// The data register holds that CSR's value starting one cycle later.
    pub fn debug_set_csr_addr(&mut self, addr: u32) {
        self.debug.csr_addr = addr;
    }

    /// Reads the CSR port data register.
    pub fn debug_csr_data(&self) -> u32 {
        self.debug.csr_data
    }

    /// Latches the registered ports. Called last in `tick`, after every
    /// architectural write of the cycle.
    pub(crate) fn latch_debug_ports(&mut self) {
        self.debug.mem_data = self.mem.read_word(self.debug.mem_addr);
        self.debug.csr_data = self.csrs.read(self.debug.csr_addr);
    }
}
