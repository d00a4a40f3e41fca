//! MHF virtual machine library.
//!
//! This crate implements the MHF CPU, a byte-level machine with eight 8-bit registers
//! and a flat memory, together with its program image format:
//! 1. **Core:** The execution state machine and the fetch-decode-execute loop.
//! 2. **ISA:** Opcodes, the closed instruction set, decoding and disassembly.
//! 3. **SoC:** Flat memory and the memory-mapped output port sinks.
//! 4. **Simulation:** Image header codec, loader, simulator, and final state report.
//! 5. **Support:** Configuration, errors, and execution statistics.
//!
//! # Example
//!
//! ```
//! use mhfvm_core::isa::Instruction;
//! use mhfvm_core::sim::ProgramImage;
//! use mhfvm_core::soc::devices::CaptureSink;
//! use mhfvm_core::{Config, RunOutcome, Simulator};
//!
//! let image = ProgramImage::from_program(
//!     0,
//!     &[
//!         Instruction::LoadImm { reg: 0, val: b'A' },
//!         Instruction::Store { reg: 0, addr: 0xFF00 },
//!         Instruction::Halt,
//!     ],
//! );
//!
//! let mut sim = Simulator::with_sink(&Config::default(), Box::new(CaptureSink::new()));
//! let entry = sim.load_bytes(&image.to_bytes()).unwrap();
//! assert_eq!(entry, 0);
//! assert_eq!(sim.run(), RunOutcome::Halted);
//! assert_eq!(sim.report().registers[0], 65);
//! ```

/// Common types and constants (registers, errors, layout constants).
pub mod common;
/// Machine configuration (memory layout and execution policy).
pub mod config;
/// CPU core (machine state, execution loop, run control).
pub mod core;
/// Instruction set (opcodes, instructions, decode, disassembly).
pub mod isa;
/// Image header, loader, simulator and report.
pub mod sim;
/// Memory and output devices.
pub mod soc;
/// Execution statistics collection and reporting.
pub mod stats;

/// Root configuration type; use `Config::default()` or load it from JSON.
pub use crate::config::Config;
/// A single MHF CPU with its registers and memory.
pub use crate::core::{Machine, MachineState, RunOutcome, StepResult};
/// Load and execution errors.
pub use crate::common::{Fault, LoadError};
/// Top-level simulator; construct with `Simulator::new` or `Simulator::with_sink`.
pub use crate::sim::Simulator;
