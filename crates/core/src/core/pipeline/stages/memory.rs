//! Memory access (MEM) stage.
//!
//! Performs loads and stores with alignment and bounds checks. A faulting
//! access is suppressed entirely — the trap tag travels to commit instead —
//! so wrong state never reaches memory. Sub-word stores write only the
//! addressed bytes of the containing word.

use tracing::trace;

use crate::common::Trap;
use crate::core::Core;
use crate::core::pipeline::latches::{ExMem, MemWb};
use crate::core::pipeline::signals::MemWidth;

/// Runs the memory stage on the cycle-start EX/MEM value.
pub fn memory(core: &mut Core, ex: &ExMem) -> MemWb {
    if !ex.valid {
        return MemWb::bubble();
    }

    let mut trap = ex.trap.clone();
    let mut load_data = 0;

    if trap.is_none() && (ex.ctrl.mem_read || ex.ctrl.mem_write) {
        let addr = ex.alu;
        trap = check_access(core, addr, ex.ctrl.width, ex.ctrl.mem_read);

        if trap.is_none() {
            if ex.ctrl.mem_read {
                load_data = load(core, addr, ex.ctrl.width, ex.ctrl.signed_load);
                trace!(pc = ex.pc, addr, data = load_data, "load");
            } else {
                store(core, addr, ex.ctrl.width, ex.store_data);
                trace!(pc = ex.pc, addr, data = ex.store_data, "store");
            }
        } else {
            trace!(pc = ex.pc, addr, ?trap, "memory access suppressed");
        }
    }

    MemWb {
        valid: true,
        pc: ex.pc,
        inst: ex.inst,
        rd: ex.rd,
        alu: ex.alu,
        load_data,
        csr_write: ex.csr_write,
        ctrl: ex.ctrl,
        trap,
    }
}

/// Alignment and bounds check; `None` means the access may proceed.
fn check_access(core: &Core, addr: u32, width: MemWidth, is_load: bool) -> Option<Trap> {
    if addr & width.align_mask() != 0 {
        return Some(if is_load {
            Trap::LoadAddressMisaligned(addr)
        } else {
            Trap::StoreAddressMisaligned(addr)
        });
    }
    if !core.mem.in_range(addr, width.bytes()) {
        return Some(if is_load {
            Trap::LoadAccessFault(addr)
        } else {
            Trap::StoreAccessFault(addr)
        });
    }
    None
}

/// Performs a load with the width's extension applied.
fn load(core: &Core, addr: u32, width: MemWidth, signed: bool) -> u32 {
    match (width, signed) {
        (MemWidth::Byte, true) => core.mem.read_byte(addr) as i8 as i32 as u32,
        (MemWidth::Byte, false) => u32::from(core.mem.read_byte(addr)),
        (MemWidth::Half, true) => core.mem.read_half(addr) as i16 as i32 as u32,
        (MemWidth::Half, false) => u32::from(core.mem.read_half(addr)),
        _ => core.mem.read_word(addr),
    }
}

/// Performs a store, truncating to the access width.
fn store(core: &mut Core, addr: u32, width: MemWidth, data: u32) {
    match width {
        MemWidth::Byte => core.mem.write_byte(addr, data as u8),
        MemWidth::Half => core.mem.write_half(addr, data as u16),
        _ => core.mem.write_word(addr, data),
    }
}
