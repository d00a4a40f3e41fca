//! Execution state machine.
//!
//! ```text
//!  Ready ──run/step──▶ Running ──HALT──▶ Halted
//!                         │
//!                         └──fault────▶ Faulted
//! ```
//!
//! `Halted` and `Faulted` are terminal: stepping a machine in either state has no
//! effect and reports the same state again.

use std::fmt;

use crate::common::error::Fault;

/// Lifecycle state of a [`Machine`](super::Machine).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MachineState {
    /// Loaded (or freshly constructed) and not yet started.
    Ready,
    /// Executing instructions.
    Running,
    /// Stopped by a `HALT` instruction.
    Halted,
    /// Stopped by an execution fault.
    Faulted(Fault),
}

impl MachineState {
    /// Returns `true` for `Halted` and `Faulted`.
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Halted | Self::Faulted(_))
    }
}

impl fmt::Display for MachineState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ready => write!(f, "ready"),
            Self::Running => write!(f, "running"),
            Self::Halted => write!(f, "halted"),
            Self::Faulted(fault) => write!(f, "faulted ({fault})"),
        }
    }
}

/// Result of executing a single instruction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepResult {
    /// The instruction retired and the machine is still running.
    Continue,
    /// The machine is halted.
    Halted,
    /// The machine is faulted.
    Faulted(Fault),
}

/// Why a call to [`Machine::run`](super::Machine::run) returned.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RunOutcome {
    /// A `HALT` instruction stopped the machine.
    Halted,
    /// An execution fault stopped the machine.
    Faulted(Fault),
    /// The step budget ran out; the machine is still running and can be resumed.
    BudgetExhausted {
        /// Instructions retired during this run.
        steps: u64,
        /// Address of the next instruction.
        pc: u32,
    },
}

impl fmt::Display for RunOutcome {
    /// Formats the diagnostic line printed when execution stops.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Halted => write!(f, "[HALT] CPU halted."),
            Self::Faulted(fault) => write!(f, "[ERROR] {fault}"),
            Self::BudgetExhausted { steps, pc } => {
                write!(f, "[STOP] step budget exhausted after {steps} steps at {pc:#06X}")
            }
        }
    }
}
