//! Load Errors and Execution Faults.
//!
//! This module defines the error handling for the virtual machine. It provides:
//! 1. **Load Errors:** Fatal conditions detected before execution (I/O, header, signature).
//! 2. **Faults:** Terminal execution-time conditions that stop a running machine.
//! 3. **Configuration Errors:** Problems reading or validating a [`Config`](crate::config::Config).

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading an MHF image, before any instruction executes.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The image file could not be opened or read.
    #[error("could not read '{}': {source}", .path.display())]
    Io {
        /// Path that was being read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// Fewer bytes than a full header were supplied.
    #[error("file too small for header ({len} bytes, need 28)")]
    MalformedHeader {
        /// Number of bytes actually available.
        len: usize,
    },

    /// The signature does not start with `MHF`.
    #[error("invalid signature b\"{}\"", .signature.escape_ascii())]
    InvalidSignature {
        /// The four raw signature bytes found in the header.
        signature: [u8; 4],
    },
}

/// Terminal execution-time faults.
///
/// A fault moves the machine into the `Faulted` state. Faults are reported, not
/// propagated as panics; the final register state remains inspectable.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum Fault {
    /// The program counter left the address space.
    #[error("PC out of bounds: {pc:#06X}")]
    PcOutOfBounds {
        /// Program counter at the time of the fetch.
        pc: u32,
    },

    /// An instruction's operand bytes run past the end of memory.
    #[error("instruction {opcode:#04X} at {addr:#06X} extends beyond memory")]
    TruncatedInstruction {
        /// Opcode of the truncated instruction.
        opcode: u8,
        /// Address the opcode was fetched from.
        addr: u32,
    },

    /// The fetched byte is not a known opcode.
    #[error("unknown opcode {opcode:#04X} at {addr:#06X}")]
    UnknownOpcode {
        /// The unrecognized opcode byte.
        opcode: u8,
        /// Address the opcode was fetched from.
        addr: u32,
    },

    /// An instruction named a register outside `r0`-`r7`.
    ///
    /// Only raised when strict register checking is enabled.
    #[error("invalid register r{reg} in instruction at {addr:#06X}")]
    InvalidRegister {
        /// The out-of-range register index.
        reg: u8,
        /// Address of the offending instruction.
        addr: u32,
    },
}

impl Fault {
    /// Returns the address associated with the fault.
    pub const fn addr(&self) -> u32 {
        match *self {
            Self::PcOutOfBounds { pc } => pc,
            Self::TruncatedInstruction { addr, .. }
            | Self::UnknownOpcode { addr, .. }
            | Self::InvalidRegister { addr, .. } => addr,
        }
    }
}

/// Errors raised while reading or validating a configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("could not read config '{}': {source}", .path.display())]
    Io {
        /// Path of the configuration file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// The configuration text is not valid JSON for [`Config`](crate::config::Config).
    #[error("invalid config: {0}")]
    Parse(#[from] serde_json::Error),

    /// The requested memory size is zero or larger than the supported maximum.
    #[error("memory size {size} out of range (1..={max})")]
    InvalidMemorySize {
        /// Requested size in bytes.
        size: usize,
        /// Largest accepted size in bytes.
        max: usize,
    },

    /// The output port does not fall inside the configured memory.
    #[error("output port {port:#06X} outside memory of {size} bytes")]
    OutputPortOutOfRange {
        /// Configured port address.
        port: u32,
        /// Configured memory size.
        size: usize,
    },
}
