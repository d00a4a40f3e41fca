//! Machine Memory and Devices.
//!
//! This module organizes the storage and I/O side of the MHF machine: the flat
//! memory buffer and the output devices reachable through the memory-mapped port.

/// Memory-mapped output devices.
pub mod devices;

/// Flat byte-addressable memory.
pub mod memory;

pub use devices::OutputSink;
pub use memory::Memory;
