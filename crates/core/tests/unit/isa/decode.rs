//! Decoder tests: field and immediate extraction for every format.

use pipesim_core::isa::{decode, opcodes};
use pretty_assertions::assert_eq;

use crate::common::builder::InstructionBuilder;

#[test]
fn r_type_fields() {
    // add x5, x6, x7
    let inst = InstructionBuilder::new().add(5, 6, 7).build();
    let d = decode(inst);
    assert_eq!(d.opcode, opcodes::OP_REG);
    assert_eq!(d.rd, 5);
    assert_eq!(d.rs1, 6);
    assert_eq!(d.rs2, 7);
    assert_eq!(d.funct3, 0);
    assert_eq!(d.funct7, 0);
}

#[test]
fn i_type_positive_immediate() {
    let inst = InstructionBuilder::new().addi(1, 2, 2047).build();
    let d = decode(inst);
    assert_eq!(d.imm, 2047);
    assert_eq!(d.rd, 1);
    assert_eq!(d.rs1, 2);
}

#[test]
fn i_type_negative_immediate() {
    let inst = InstructionBuilder::new().addi(1, 2, -2048).build();
    assert_eq!(decode(inst).imm, -2048);
}

#[test]
fn s_type_immediate_reassembles() {
    let inst = InstructionBuilder::new().sw(3, 4, -12).build();
    let d = decode(inst);
    assert_eq!(d.opcode, opcodes::OP_STORE);
    assert_eq!(d.rs1, 3);
    assert_eq!(d.rs2, 4);
    assert_eq!(d.imm, -12);
}

#[test]
fn b_type_immediate_is_even_and_signed() {
    let fwd = InstructionBuilder::new().beq(1, 2, 24).build();
    assert_eq!(decode(fwd).imm, 24);

    let back = InstructionBuilder::new().bne(1, 2, -52).build();
    assert_eq!(decode(back).imm, -52);
}

#[test]
fn u_type_immediate_keeps_low_bits_zero() {
    let inst = InstructionBuilder::new().lui(7, 0x12345).build();
    let d = decode(inst);
    assert_eq!(d.imm as u32, 0x12345 << 12);
    assert_eq!(d.rd, 7);
}

#[test]
fn j_type_immediate_backward() {
    let inst = InstructionBuilder::new().jal(0, -20).build();
    let d = decode(inst);
    assert_eq!(d.opcode, opcodes::OP_JAL);
    assert_eq!(d.imm, -20);
}

#[test]
fn j_type_immediate_forward_large() {
    let inst = InstructionBuilder::new().jal(1, 0x0F_F000).build();
    assert_eq!(decode(inst).imm, 0x0F_F000);
}

#[test]
fn csr_address_rides_in_the_i_immediate() {
    let inst = InstructionBuilder::new().csrrw(1, 0x305, 2).build();
    let d = decode(inst);
    assert_eq!(d.raw >> 20, 0x305);
    assert_eq!(d.funct3, opcodes::funct3::CSRRW);
}

#[test]
fn canonical_nop_decodes_as_addi() {
    let d = decode(0x0000_0013);
    assert_eq!(d.opcode, opcodes::OP_IMM);
    assert_eq!(d.rd, 0);
    assert_eq!(d.rs1, 0);
    assert_eq!(d.imm, 0);
}
