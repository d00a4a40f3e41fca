//! Machine Definition and Initialization.
//!
//! This module defines the `Machine` structure, the complete state of one MHF CPU
//! instance. It coordinates the following:
//! 1. **State Management:** Registers, program counter and the execution state machine.
//! 2. **Memory:** The flat address space and the memory-mapped output port.
//! 3. **Policy:** Register strictness and instruction tracing taken from [`Config`].
//!
//! A machine is an ordinary owned value; any number of isolated instances can exist
//! side by side.

/// Fetch-decode-execute loop.
pub mod execution;

/// Store path and memory-mapped output.
pub mod memory;

/// Execution state machine types.
pub mod state;

use crate::common::RegisterFile;
use crate::config::Config;
use crate::soc::Memory;
use crate::stats::SimStats;

pub use state::{MachineState, RunOutcome, StepResult};

/// One MHF CPU with its registers and memory.
#[derive(Debug)]
pub struct Machine {
    /// General-purpose registers `r0`-`r7`.
    pub regs: RegisterFile,
    /// Flat address space.
    pub memory: Memory,
    /// Execution statistics.
    pub stats: SimStats,

    pc: u32,
    state: MachineState,
    output_port: u32,
    strict_registers: bool,
    trace: bool,
}

impl Default for Machine {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}

impl Machine {
    /// Creates an empty machine in the `Ready` state.
    ///
    /// Memory size, output port and execution policy come from `config`, which is
    /// expected to have passed [`Config::validate`].
    pub fn new(config: &Config) -> Self {
        Self {
            regs: RegisterFile::new(),
            memory: Memory::new(config.memory.size),
            stats: SimStats::default(),
            pc: 0,
            state: MachineState::Ready,
            output_port: config.memory.output_port,
            strict_registers: config.execution.strict_registers,
            trace: config.execution.trace_instructions,
        }
    }

    /// Returns the program counter.
    pub const fn pc(&self) -> u32 {
        self.pc
    }

    /// Sets the program counter.
    ///
    /// Used by loaders to install the entry point.
    pub const fn set_pc(&mut self, pc: u32) {
        self.pc = pc;
    }

    /// Returns the execution state.
    pub const fn state(&self) -> MachineState {
        self.state
    }

    /// Returns the address of the memory-mapped output port.
    pub const fn output_port(&self) -> u32 {
        self.output_port
    }

    /// Returns `true` if out-of-range register indices fault.
    pub const fn strict_registers(&self) -> bool {
        self.strict_registers
    }

    /// Enables or disables per-instruction trace logging.
    pub const fn set_trace(&mut self, trace: bool) {
        self.trace = trace;
    }

    /// Returns the machine to its freshly constructed state.
    ///
    /// Clears registers and memory, zeroes the program counter, restarts the
    /// statistics and re-enters `Ready`. Configuration is kept.
    pub fn reset(&mut self) {
        self.regs.reset();
        self.memory.clear();
        self.stats = SimStats::default();
        self.pc = 0;
        self.state = MachineState::Ready;
    }
}
