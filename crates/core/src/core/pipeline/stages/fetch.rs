//! Instruction fetch (IF) stage.

use tracing::trace;

use crate::common::Trap;
use crate::common::constants::INSTRUCTION_SIZE;
use crate::core::Core;
use crate::core::pipeline::latches::IfId;

/// Fetches the instruction at PC and advances PC by one word.
///
/// A misaligned PC (a JALR target with bit 1 set, for instance) does not
/// abort the cycle; the bad fetch is tagged and the trap fires if and when
/// the instruction reaches commit. Fetches past the end of memory read as
/// zero, which decodes as an illegal instruction.
pub fn fetch(core: &mut Core) -> IfId {
    let pc = core.pc;

    if pc & 0x3 != 0 {
        trace!(pc, "fetch: misaligned pc");
        core.pc = pc.wrapping_add(INSTRUCTION_SIZE);
        return IfId {
            valid: true,
            pc,
            inst: 0,
            trap: Some(Trap::InstructionAddressMisaligned(pc)),
        };
    }

    let inst = core.mem.read_word(pc);
    trace!(pc, inst = format_args!("{inst:#010x}"), "fetch");
    core.pc = pc.wrapping_add(INSTRUCTION_SIZE);

    IfId {
        valid: true,
        pc,
        inst,
        trap: None,
    }
}
