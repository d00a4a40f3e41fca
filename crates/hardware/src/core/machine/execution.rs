//! Main Execution Loop.
//!
//! This module implements the fetch-decode-execute cycle of the MHF CPU. It performs:
//! 1. **Fetch/Decode:** One complete instruction is decoded before anything executes, so
//!    truncated instructions fault without partial effects.
//! 2. **Execute:** Register arithmetic modulo 256, stores, and the `HALT` transition.
//! 3. **Run Control:** Unbounded runs or runs capped by a step budget.
//! 4. **Observability:** Optional per-instruction trace logging and fault reporting.

use super::{Machine, MachineState, RunOutcome, StepResult};
use crate::common::error::Fault;
use crate::isa::decode::decode;
use crate::isa::disasm::disassemble;
use crate::isa::instruction::Instruction;
use crate::soc::OutputSink;

impl Machine {
    /// Executes one instruction.
    ///
    /// A `Ready` machine enters `Running` first. A machine in a terminal state is left
    /// untouched and reports that state again.
    pub fn step(&mut self, sink: &mut dyn OutputSink) -> StepResult {
        match self.state {
            MachineState::Ready => {
                self.state = MachineState::Running;
                self.stats.start_timer();
            }
            MachineState::Running => {}
            MachineState::Halted => return StepResult::Halted,
            MachineState::Faulted(fault) => return StepResult::Faulted(fault),
        }

        let addr = self.pc;
        let inst = match decode(self.memory.as_slice(), addr) {
            Ok(inst) => inst,
            Err(fault) => return self.fault(fault),
        };

        if self.trace {
            tracing::trace!("{addr:#06x}: {}", disassemble(&inst));
        }

        if let Some(reg) = inst.invalid_register() {
            if self.strict_registers {
                return self.fault(Fault::InvalidRegister { reg, addr });
            }
            tracing::debug!(
                "{} at {addr:#06x} names invalid register r{reg}; effect skipped",
                disassemble(&inst)
            );
            self.stats.skipped_effects += 1;
            self.retire(addr, &inst);
            return StepResult::Continue;
        }

        self.retire(addr, &inst);
        match inst {
            Instruction::Nop => {}
            Instruction::Halt => {
                self.state = MachineState::Halted;
                tracing::debug!(steps = self.stats.steps, "halted at {addr:#06x}");
                return StepResult::Halted;
            }
            Instruction::LoadImm { reg, val } => {
                let _ = self.regs.write(reg, val);
            }
            Instruction::Add { reg1, reg2 } => {
                if let (Some(a), Some(b)) = (self.regs.read(reg1), self.regs.read(reg2)) {
                    let _ = self.regs.write(reg1, a.wrapping_add(b));
                }
            }
            Instruction::Store { reg, addr: target } => {
                if let Some(val) = self.regs.read(reg) {
                    self.store(u32::from(target), val, sink);
                }
            }
        }
        StepResult::Continue
    }

    /// Runs until the machine halts or faults, or until `budget` instructions retire.
    ///
    /// `None` runs without a limit. When the budget runs out the machine stays
    /// `Running`; calling `run` again resumes it.
    pub fn run(&mut self, sink: &mut dyn OutputSink, budget: Option<u64>) -> RunOutcome {
        tracing::debug!(pc = self.pc, budget, "run started");
        let mut steps = 0u64;
        loop {
            if budget.is_some_and(|limit| steps >= limit) {
                tracing::debug!(steps, "step budget exhausted at {:#06x}", self.pc);
                return RunOutcome::BudgetExhausted { steps, pc: self.pc };
            }
            match self.step(sink) {
                StepResult::Continue => steps += 1,
                StepResult::Halted => return RunOutcome::Halted,
                StepResult::Faulted(fault) => return RunOutcome::Faulted(fault),
            }
        }
    }

    /// Advances the program counter past `inst` and counts it.
    fn retire(&mut self, addr: u32, inst: &Instruction) {
        self.pc = addr + inst.encoded_len();
        self.stats.record(inst);
    }

    /// Enters the `Faulted` state.
    ///
    /// For every fault except an out-of-bounds fetch the opcode byte has been consumed,
    /// so the program counter is left one byte past it.
    fn fault(&mut self, fault: Fault) -> StepResult {
        if !matches!(fault, Fault::PcOutOfBounds { .. }) {
            self.pc = fault.addr() + 1;
        }
        tracing::debug!("fault: {fault}");
        self.state = MachineState::Faulted(fault);
        StepResult::Faulted(fault)
    }
}
