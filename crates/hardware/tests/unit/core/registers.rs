//! # Register Policy Tests
//!
//! By default an out-of-range register index skips the instruction's effect and
//! execution continues. With strict register checking the machine faults instead.

use mhfvm_core::common::Fault;
use mhfvm_core::config::Config;
use mhfvm_core::isa::Instruction;
use mhfvm_core::{MachineState, RunOutcome};
use rstest::rstest;

use crate::common::harness::{TestContext, capture_logs};

fn strict() -> Config {
    let mut config = Config::default();
    config.execution.strict_registers = true;
    config
}

#[rstest]
#[case(Instruction::LoadImm { reg: 8, val: 1 })]
#[case(Instruction::LoadImm { reg: 255, val: 1 })]
#[case(Instruction::Add { reg1: 8, reg2: 0 })]
#[case(Instruction::Add { reg1: 0, reg2: 8 })]
#[case(Instruction::Store { reg: 8, addr: 0xFF00 })]
fn test_invalid_register_skipped_by_default(#[case] inst: Instruction) {
    let mut ctx = TestContext::new().load_program(&[
        Instruction::LoadImm { reg: 0, val: 5 },
        inst,
        Instruction::LoadImm { reg: 1, val: 6 },
        Instruction::Halt,
    ]);
    assert_eq!(ctx.run(), RunOutcome::Halted);
    assert_eq!(ctx.regs(), [5, 6, 0, 0, 0, 0, 0, 0]);
    assert!(ctx.output.bytes().is_empty());
    assert_eq!(ctx.mem(0xFF00), 0);
    assert_eq!(ctx.machine.stats.skipped_effects, 1);
}

/// Repeated skips are counted, not reported at `warn`.
#[test]
fn test_skipped_effects_are_silent_at_warn() {
    let program = [
        Instruction::LoadImm { reg: 9, val: 1 },
        Instruction::LoadImm { reg: 9, val: 1 },
        Instruction::LoadImm { reg: 9, val: 1 },
        Instruction::Halt,
    ];

    let ((outcome, skipped), warnings) = capture_logs(tracing::Level::WARN, || {
        let mut ctx = TestContext::new().load_program(&program);
        (ctx.run(), ctx.machine.stats.skipped_effects)
    });
    assert_eq!(outcome, RunOutcome::Halted);
    assert_eq!(skipped, 3);
    assert_eq!(warnings, "");

    let (_, debug) = capture_logs(tracing::Level::DEBUG, || {
        let _ = TestContext::new().load_program(&program).run();
    });
    assert_eq!(debug.matches("effect skipped").count(), 3, "{debug}");
}

#[rstest]
#[case(Instruction::LoadImm { reg: 8, val: 1 }, 8)]
#[case(Instruction::Add { reg1: 0, reg2: 9 }, 9)]
#[case(Instruction::Store { reg: 200, addr: 0x10 }, 200)]
fn test_invalid_register_faults_when_strict(#[case] inst: Instruction, #[case] reg: u8) {
    let mut ctx = TestContext::with_config(&strict()).load_program(&[
        Instruction::LoadImm { reg: 0, val: 5 },
        inst,
        Instruction::LoadImm { reg: 1, val: 6 },
        Instruction::Halt,
    ]);
    let fault = Fault::InvalidRegister { reg, addr: 3 };
    assert_eq!(ctx.run(), RunOutcome::Faulted(fault));
    assert_eq!(ctx.machine.state(), MachineState::Faulted(fault));
    assert_eq!(ctx.regs(), [5, 0, 0, 0, 0, 0, 0, 0]);
    assert_eq!(ctx.machine.pc(), 4);
}

#[test]
fn test_strict_mode_accepts_valid_program() {
    let mut ctx = TestContext::with_config(&strict()).load_program(&[
        Instruction::LoadImm { reg: 7, val: 1 },
        Instruction::Add { reg1: 7, reg2: 7 },
        Instruction::Halt,
    ]);
    assert!(ctx.machine.strict_registers());
    assert_eq!(ctx.run(), RunOutcome::Halted);
    assert_eq!(ctx.reg(7), 2);
}
