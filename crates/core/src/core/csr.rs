//! Machine-mode control and status registers.
//!
//! The M-only subset backing the trap controller: `mstatus`, `mie`, `mtvec`,
//! `mscratch`, `mepc`, `mcause`, and the free-running `mcycle`. Addresses are
//! the standard machine-mode CSR numbers so the debug CSR port and test
//! programs use real encodings.

/// `mstatus` CSR address.
pub const MSTATUS: u32 = 0x300;
/// `mie` CSR address.
pub const MIE: u32 = 0x304;
/// `mtvec` CSR address.
pub const MTVEC: u32 = 0x305;
/// `mscratch` CSR address.
pub const MSCRATCH: u32 = 0x340;
/// `mepc` CSR address.
pub const MEPC: u32 = 0x341;
/// `mcause` CSR address.
pub const MCAUSE: u32 = 0x342;
/// `mcycle` CSR address.
pub const MCYCLE: u32 = 0xB00;

/// `mstatus.MIE`: global machine interrupt enable.
pub const MSTATUS_MIE: u32 = 1 << 3;
/// `mstatus.MPIE`: previous interrupt enable, saved on trap entry.
pub const MSTATUS_MPIE: u32 = 1 << 7;
/// `mstatus.MPP`: previous privilege, hardwired to machine on this core.
pub const MSTATUS_MPP: u32 = 0b11 << 11;

/// `mie.MTIE`: machine timer interrupt enable.
pub const MIE_MTIE: u32 = 1 << 7;
/// `mie.MEIE`: machine external interrupt enable.
pub const MIE_MEIE: u32 = 1 << 11;

/// The CSR bank.
#[derive(Debug, Clone)]
pub struct Csrs {
    /// Machine status (interrupt enables and previous state).
    pub mstatus: u32,
    /// Machine interrupt-enable bits.
    pub mie: u32,
    /// Trap vector base address.
    pub mtvec: u32,
    /// Scratch register for trap handlers.
    pub mscratch: u32,
    /// PC of the interrupted/faulting instruction.
    pub mepc: u32,
    /// Cause of the most recent trap.
    pub mcause: u32,
    /// Free-running cycle counter.
    pub mcycle: u32,
}

impl Csrs {
    /// Creates the bank in its reset state.
    pub fn new() -> Self {
        Self {
            // MPP reads as machine from reset; MIE/MPIE clear.
            mstatus: MSTATUS_MPP,
            mie: 0,
            mtvec: 0,
            mscratch: 0,
            mepc: 0,
            mcause: 0,
            mcycle: 0,
        }
    }

    /// Reads a CSR by address. Unimplemented addresses read as zero.
    pub fn read(&self, addr: u32) -> u32 {
        match addr {
            MSTATUS => self.mstatus,
            MIE => self.mie,
            MTVEC => self.mtvec,
            MSCRATCH => self.mscratch,
            MEPC => self.mepc,
            MCAUSE => self.mcause,
            MCYCLE => self.mcycle,
            _ => 0,
        }
    }

    /// Writes a CSR by address. Unimplemented addresses are ignored.
    ///
    /// `mstatus` accepts only MIE and MPIE; MPP always reads back as machine.
    /// `mtvec` is forced to direct mode (low two bits zero).
    pub fn write(&mut self, addr: u32, val: u32) {
        match addr {
            MSTATUS => self.mstatus = (val & (MSTATUS_MIE | MSTATUS_MPIE)) | MSTATUS_MPP,
            MIE => self.mie = val,
            MTVEC => self.mtvec = val & !0x3,
            MSCRATCH => self.mscratch = val,
            MEPC => self.mepc = val & !0x1,
            MCAUSE => self.mcause = val,
            MCYCLE => self.mcycle = val,
            _ => {}
        }
    }

    /// Whether machine interrupts are globally enabled.
    pub const fn interrupts_enabled(&self) -> bool {
        self.mstatus & MSTATUS_MIE != 0
    }

    /// Whether the external interrupt is individually enabled.
    pub const fn external_enabled(&self) -> bool {
        self.mie & MIE_MEIE != 0
    }
}

impl Default for Csrs {
    fn default() -> Self {
        Self::new()
    }
}
