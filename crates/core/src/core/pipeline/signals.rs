//! Control signals generated at decode and carried through the pipeline.

/// ALU operation selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AluOp {
    /// Addition (also address generation and the NOP datapath).
    #[default]
    Add,
    /// Subtraction.
    Sub,
    /// Shift left logical.
    Sll,
    /// Set less than, signed.
    Slt,
    /// Set less than, unsigned.
    Sltu,
    /// Exclusive or.
    Xor,
    /// Shift right logical.
    Srl,
    /// Shift right arithmetic.
    Sra,
    /// Inclusive or.
    Or,
    /// And.
    And,
}

/// Memory access width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MemWidth {
    /// No memory access.
    #[default]
    None,
    /// 8-bit access.
    Byte,
    /// 16-bit access.
    Half,
    /// 32-bit access.
    Word,
}

impl MemWidth {
    /// Access size in bytes (zero for [`MemWidth::None`]).
    pub const fn bytes(self) -> u32 {
        match self {
            Self::None => 0,
            Self::Byte => 1,
            Self::Half => 2,
            Self::Word => 4,
        }
    }

    /// Address bits that must be clear for an aligned access.
    pub const fn align_mask(self) -> u32 {
        match self {
            Self::None | Self::Byte => 0,
            Self::Half => 1,
            Self::Word => 3,
        }
    }
}

/// First ALU operand source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OpASrc {
    /// rs1 (after forwarding, if enabled).
    #[default]
    Reg1,
    /// The instruction's PC (AUIPC).
    Pc,
    /// Constant zero (LUI).
    Zero,
}

/// Second ALU operand source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OpBSrc {
    /// The decoded immediate.
    #[default]
    Imm,
    /// rs2 (after forwarding, if enabled).
    Reg2,
}

/// CSR operation kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CsrOp {
    /// Not a CSR instruction.
    #[default]
    None,
    /// CSRRW: swap.
    Rw,
    /// CSRRS: set bits.
    Rs,
    /// CSRRC: clear bits.
    Rc,
    /// CSRRWI: swap, zero-extended rs1 field as source.
    Rwi,
    /// CSRRSI: set bits, immediate source.
    Rsi,
    /// CSRRCI: clear bits, immediate source.
    Rci,
}

/// Per-instruction control word, produced once at decode.
#[derive(Debug, Clone, Copy, Default)]
pub struct ControlSignals {
    /// Writeback writes rd.
    pub reg_write: bool,
    /// Memory stage performs a load.
    pub mem_read: bool,
    /// Memory stage performs a store.
    pub mem_write: bool,
    /// Conditional branch, resolved in execute.
    pub branch: bool,
    /// Unconditional jump (JAL/JALR), resolved in execute.
    pub jump: bool,
    /// Jump target is rs1-relative (JALR) rather than PC-relative.
    pub jalr: bool,
    /// Memory access width.
    pub width: MemWidth,
    /// Loads sign-extend (LB/LH) rather than zero-extend.
    pub signed_load: bool,
    /// ALU operation.
    pub alu: AluOp,
    /// First operand source.
    pub a_src: OpASrc,
    /// Second operand source.
    pub b_src: OpBSrc,
    /// CSR operation kind.
    pub csr_op: CsrOp,
    /// CSR address (bits 31:20 of the encoding).
    pub csr_addr: u32,
    /// Instruction is `MRET`.
    pub mret: bool,
}
