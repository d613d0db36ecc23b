//! RV32I opcode and function-field constants.

/// `LUI` — load upper immediate (U-type).
pub const OP_LUI: u32 = 0x37;
/// `AUIPC` — add upper immediate to PC (U-type).
pub const OP_AUIPC: u32 = 0x17;
/// `JAL` — jump and link (J-type).
pub const OP_JAL: u32 = 0x6F;
/// `JALR` — jump and link register (I-type).
pub const OP_JALR: u32 = 0x67;
/// Conditional branches (B-type).
pub const OP_BRANCH: u32 = 0x63;
/// Loads (I-type).
pub const OP_LOAD: u32 = 0x03;
/// Stores (S-type).
pub const OP_STORE: u32 = 0x23;
/// Register-immediate ALU operations (I-type).
pub const OP_IMM: u32 = 0x13;
/// Register-register ALU operations (R-type).
pub const OP_REG: u32 = 0x33;
/// `FENCE` and friends.
pub const OP_MISC_MEM: u32 = 0x0F;
/// `ECALL`/`EBREAK`/`MRET` and CSR instructions.
pub const OP_SYSTEM: u32 = 0x73;

/// funct3 values, grouped by opcode.
pub mod funct3 {
    /// ADD/SUB (R-type) and ADDI.
    pub const ADD_SUB: u32 = 0x0;
    /// Shift left logical.
    pub const SLL: u32 = 0x1;
    /// Set less than (signed).
    pub const SLT: u32 = 0x2;
    /// Set less than (unsigned).
    pub const SLTU: u32 = 0x3;
    /// Exclusive or.
    pub const XOR: u32 = 0x4;
    /// Shift right logical/arithmetic, selected by funct7.
    pub const SRL_SRA: u32 = 0x5;
    /// Inclusive or.
    pub const OR: u32 = 0x6;
    /// And.
    pub const AND: u32 = 0x7;

    /// Branch if equal.
    pub const BEQ: u32 = 0x0;
    /// Branch if not equal.
    pub const BNE: u32 = 0x1;
    /// Branch if less than (signed).
    pub const BLT: u32 = 0x4;
    /// Branch if greater or equal (signed).
    pub const BGE: u32 = 0x5;
    /// Branch if less than (unsigned).
    pub const BLTU: u32 = 0x6;
    /// Branch if greater or equal (unsigned).
    pub const BGEU: u32 = 0x7;

    /// Load byte (sign-extended).
    pub const LB: u32 = 0x0;
    /// Load halfword (sign-extended).
    pub const LH: u32 = 0x1;
    /// Load word.
    pub const LW: u32 = 0x2;
    /// Load byte (zero-extended).
    pub const LBU: u32 = 0x4;
    /// Load halfword (zero-extended).
    pub const LHU: u32 = 0x5;

    /// Store byte.
    pub const SB: u32 = 0x0;
    /// Store halfword.
    pub const SH: u32 = 0x1;
    /// Store word.
    pub const SW: u32 = 0x2;

    /// ECALL/EBREAK/MRET (funct3 = 0 under OP_SYSTEM).
    pub const PRIV: u32 = 0x0;
    /// CSR read/write.
    pub const CSRRW: u32 = 0x1;
    /// CSR read and set bits.
    pub const CSRRS: u32 = 0x2;
    /// CSR read and clear bits.
    pub const CSRRC: u32 = 0x3;
    /// CSR read/write, immediate source.
    pub const CSRRWI: u32 = 0x5;
    /// CSR read and set bits, immediate source.
    pub const CSRRSI: u32 = 0x6;
    /// CSR read and clear bits, immediate source.
    pub const CSRRCI: u32 = 0x7;
}

/// funct7 values.
pub mod funct7 {
    /// Base encoding (ADD, SRL, and every non-alternate operation).
    pub const BASE: u32 = 0x00;
    /// Alternate encoding (SUB, SRA).
    pub const ALT: u32 = 0x20;
}

/// Full 32-bit encodings for the privileged instructions.
pub mod system {
    /// `ECALL` encoding.
    pub const ECALL: u32 = 0x0000_0073;
    /// `EBREAK` encoding.
    pub const EBREAK: u32 = 0x0010_0073;
    /// `MRET` encoding.
    pub const MRET: u32 = 0x3020_0073;
}
