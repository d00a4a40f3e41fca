//! Global Machine Constants.
//!
//! This module defines the fixed parameters of the MHF CPU and its image format. It includes:
//! 1. **Memory Constants:** Default address space size and the memory-mapped output port.
//! 2. **Register Constants:** Number and width of the general-purpose registers.
//! 3. **Image Constants:** Header size and magic signature of MHF program images.

/// Default size of the flat address space in bytes (64 KiB).
pub const MEMORY_SIZE: usize = 0x1_0000;

/// Largest memory size a configuration may request (16 MiB).
pub const MAX_MEMORY_SIZE: usize = 16 * 1024 * 1024;

/// Address of the memory-mapped output port; stores here also emit a character.
pub const OUTPUT_PORT: u32 = 0xFF00;

/// Number of general-purpose registers (`r0`-`r7`).
pub const NUM_REGS: usize = 8;

/// Size of the fixed MHF image header in bytes.
pub const HEADER_SIZE: usize = 28;

/// Magic prefix every MHF signature must start with.
pub const MAGIC: &[u8; 3] = b"MHF";

/// Full four-byte signature written by the image builder.
pub const SIGNATURE: [u8; 4] = *b"MHFB";

/// Image format version written by the image builder.
pub const FORMAT_VERSION: u16 = 1;
