//! MHF Image Header.
//!
//! Every MHF image starts with a fixed 28-byte little-endian header:
//!
//! ```text
//! offset 0:  4 bytes  signature      ("MHF" + one free byte)
//! offset 4:  2 bytes  version
//! offset 6:  2 bytes  flags
//! offset 8:  4 bytes  head_offset    (memory address the body is copied to)
//! offset 12: 4 bytes  code_offset    (entry point)
//! offset 16: 4 bytes  data_offset    (reserved)
//! offset 20: 4 bytes  symbol_offset  (reserved)
//! offset 24: 4 bytes  file_size      (total length, header included)
//! ```
//!
//! Parsing is purely structural; the signature is checked by the loader.

use crate::common::constants::{FORMAT_VERSION, HEADER_SIZE, MAGIC, SIGNATURE};
use crate::common::error::LoadError;

/// Parsed MHF image header.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ProgramHeader {
    /// Raw signature; valid images start with `MHF`.
    pub signature: [u8; 4],
    /// Format version.
    pub version: u16,
    /// Format flags (currently unused).
    pub flags: u16,
    /// Memory address the body is copied to.
    pub head_offset: u32,
    /// Address where execution begins.
    pub code_offset: u32,
    /// Data segment location (reserved).
    pub data_offset: u32,
    /// Symbol table location (reserved).
    pub symbol_offset: u32,
    /// Total file length including the header.
    pub file_size: u32,
}

impl ProgramHeader {
    /// Decodes the header from the first 28 bytes of `bytes`.
    ///
    /// Extra bytes are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::MalformedHeader`] when fewer than 28 bytes are supplied.
    pub fn parse(bytes: &[u8]) -> Result<Self, LoadError> {
        let h: &[u8; HEADER_SIZE] = bytes
            .first_chunk()
            .ok_or(LoadError::MalformedHeader { len: bytes.len() })?;

        let u16_at = |at: usize| u16::from_le_bytes([h[at], h[at + 1]]);
        let u32_at = |at: usize| u32::from_le_bytes([h[at], h[at + 1], h[at + 2], h[at + 3]]);

        Ok(Self {
            signature: [h[0], h[1], h[2], h[3]],
            version: u16_at(4),
            flags: u16_at(6),
            head_offset: u32_at(8),
            code_offset: u32_at(12),
            data_offset: u32_at(16),
            symbol_offset: u32_at(20),
            file_size: u32_at(24),
        })
    }

    /// Encodes the header into its 28-byte on-disk form.
    pub fn to_bytes(&self) -> [u8; HEADER_SIZE] {
        let mut out = [0u8; HEADER_SIZE];
        out[0..4].copy_from_slice(&self.signature);
        out[4..6].copy_from_slice(&self.version.to_le_bytes());
        out[6..8].copy_from_slice(&self.flags.to_le_bytes());
        out[8..12].copy_from_slice(&self.head_offset.to_le_bytes());
        out[12..16].copy_from_slice(&self.code_offset.to_le_bytes());
        out[16..20].copy_from_slice(&self.data_offset.to_le_bytes());
        out[20..24].copy_from_slice(&self.symbol_offset.to_le_bytes());
        out[24..28].copy_from_slice(&self.file_size.to_le_bytes());
        out
    }

    /// Returns `true` if the signature starts with `MHF`.
    pub fn has_valid_signature(&self) -> bool {
        self.signature.starts_with(MAGIC)
    }

    /// Returns the body length announced by `file_size` (zero when `file_size <= 28`).
    pub const fn body_len(&self) -> usize {
        (self.file_size as usize).saturating_sub(HEADER_SIZE)
    }

    /// Builds a header for a body of `body_len` bytes.
    ///
    /// Uses the default signature and version; reserved offsets and flags are zero.
    pub fn for_body(head_offset: u32, code_offset: u32, body_len: usize) -> Self {
        let file_size = u32::try_from(HEADER_SIZE + body_len).unwrap_or(u32::MAX);
        Self {
            signature: SIGNATURE,
            version: FORMAT_VERSION,
            flags: 0,
            head_offset,
            code_offset,
            data_offset: 0,
            symbol_offset: 0,
            file_size,
        }
    }
}
