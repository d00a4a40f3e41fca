//! Core processor implementation.
//!
//! This module contains the MHF machine: its state, the execution state machine and
//! the fetch-decode-execute loop.

/// Machine state and execution.
pub mod machine;

pub use self::machine::{Machine, MachineState, RunOutcome, StepResult};
