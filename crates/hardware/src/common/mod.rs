//! Common types and constants used throughout the MHF virtual machine.
//!
//! This module provides the building blocks shared by every other component. It includes:
//! 1. **Constants:** Memory size, output port, register count and image header layout.
//! 2. **Error Handling:** Load errors, execution faults and configuration errors.
//! 3. **Register Management:** The eight-entry general-purpose register file.

/// Machine-wide constants.
pub mod constants;

/// Error and fault definitions.
pub mod error;

/// Register file implementation.
pub mod reg;

pub use constants::{HEADER_SIZE, MEMORY_SIZE, NUM_REGS, OUTPUT_PORT};
pub use error::{ConfigError, Fault, LoadError};
pub use reg::RegisterFile;
