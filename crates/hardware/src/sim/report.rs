//! Final machine state report.

use std::fmt;

use crate::common::constants::NUM_REGS;
use crate::core::{Machine, MachineState};

/// Read-only snapshot of a machine after execution stops.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StateReport {
    /// Register values `r0`-`r7`.
    pub registers: [u8; NUM_REGS],
    /// Program counter.
    pub pc: u32,
    /// Execution state.
    pub state: MachineState,
}

impl StateReport {
    /// Captures the registers, PC and state of `machine`.
    pub const fn capture(machine: &Machine) -> Self {
        Self {
            registers: machine.regs.values(),
            pc: machine.pc(),
            state: machine.state(),
        }
    }
}

impl fmt::Display for StateReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Execution finished.")?;
        for (i, val) in self.registers.iter().enumerate() {
            writeln!(f, "r{i} = {val}")?;
        }
        Ok(())
    }
}
