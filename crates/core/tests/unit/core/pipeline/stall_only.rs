//! RAW stall tests for the stall-only strategy.

use pipesim_core::config::HazardStrategy;
use pipesim_core::core::pipeline::hazards::raw_stall;
use pipesim_core::core::pipeline::latches::{ExMem, IdEx, IfId};
use pipesim_core::core::pipeline::signals::ControlSignals;

use crate::common::builder::InstructionBuilder;
use crate::common::harness::TestContext;

fn waiting(inst: u32) -> IfId {
    IfId {
        valid: true,
        inst,
        ..Default::default()
    }
}

fn id_ex_producer(rd: usize) -> IdEx {
    IdEx {
        valid: true,
        rd,
        ctrl: ControlSignals {
            reg_write: true,
            ..Default::default()
        },
        ..Default::default()
    }
}

fn ex_mem_producer(rd: usize) -> ExMem {
    ExMem {
        valid: true,
        rd,
        ctrl: ControlSignals {
            reg_write: true,
            ..Default::default()
        },
        ..Default::default()
    }
}

#[test]
fn stalls_on_id_ex_producer() {
    let add = InstructionBuilder::new().add(3, 5, 1).build();
    assert!(raw_stall(&waiting(add), &id_ex_producer(5), &ExMem::bubble()));
}

#[test]
fn stalls_on_ex_mem_producer() {
    let add = InstructionBuilder::new().add(3, 1, 5).build();
    assert!(raw_stall(&waiting(add), &IdEx::bubble(), &ex_mem_producer(5)));
}

#[test]
fn mem_wb_producers_are_not_checked() {
    // A producer at the commit point has already written the register file
    // by the time decode reads (write-through), so only ID/EX and EX/MEM
    // can hold an uncommitted value.
    let add = InstructionBuilder::new().add(3, 5, 1).build();
    assert!(!raw_stall(&waiting(add), &IdEx::bubble(), &ExMem::bubble()));
}

#[test]
fn independent_instruction_flows() {
    let add = InstructionBuilder::new().add(3, 1, 2).build();
    assert!(!raw_stall(
        &waiting(add),
        &id_ex_producer(5),
        &ex_mem_producer(6)
    ));
}

#[test]
fn raw_distance_one_costs_two_bubbles() {
    let mut ctx = TestContext::new(HazardStrategy::StallOnly).load_program(&[
        InstructionBuilder::new().addi(1, 0, 5).build(),
        InstructionBuilder::new().add(2, 1, 1).build(),
        InstructionBuilder::new().nop().build(),
        InstructionBuilder::new().nop().build(),
    ]);
    ctx.run(20);
    assert_eq!(ctx.get_reg(2), 10);
    assert_eq!(ctx.core().stats.stalls_data, 2);
}

#[test]
fn raw_distance_two_costs_one_bubble() {
    let mut ctx = TestContext::new(HazardStrategy::StallOnly).load_program(&[
        InstructionBuilder::new().addi(1, 0, 5).build(),
        InstructionBuilder::new().addi(9, 0, 1).build(),
        InstructionBuilder::new().add(2, 1, 1).build(),
        InstructionBuilder::new().nop().build(),
    ]);
    ctx.run(20);
    assert_eq!(ctx.get_reg(2), 10);
    assert_eq!(ctx.core().stats.stalls_data, 1);
}

#[test]
fn raw_distance_three_flows_freely() {
    let mut ctx = TestContext::new(HazardStrategy::StallOnly).load_program(&[
        InstructionBuilder::new().addi(1, 0, 5).build(),
        InstructionBuilder::new().addi(9, 0, 1).build(),
        InstructionBuilder::new().addi(10, 0, 2).build(),
        InstructionBuilder::new().add(2, 1, 1).build(),
        InstructionBuilder::new().nop().build(),
    ]);
    ctx.run(20);
    assert_eq!(ctx.get_reg(2), 10);
    assert_eq!(
        ctx.core().stats.stalls_data,
        0,
        "the write-through register file covers distance three"
    );
}
