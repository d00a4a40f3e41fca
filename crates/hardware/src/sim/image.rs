//! Program image builder.
//!
//! Assembles a header and body into the MHF byte layout accepted by the loader.

use std::fs;
use std::path::Path;

use crate::common::constants::HEADER_SIZE;
use crate::isa::instruction::{Instruction, assemble};
use crate::sim::header::ProgramHeader;

/// An MHF image: header followed by its body.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProgramImage {
    /// Image header.
    pub header: ProgramHeader,
    /// Bytes copied to memory at `header.head_offset`.
    pub body: Vec<u8>,
}

impl ProgramImage {
    /// Creates an image whose header matches `body`.
    pub fn new(head_offset: u32, code_offset: u32, body: Vec<u8>) -> Self {
        let header = ProgramHeader::for_body(head_offset, code_offset, body.len());
        Self { header, body }
    }

    /// Creates an image from a program placed and entered at `origin`.
    pub fn from_program(origin: u32, program: &[Instruction]) -> Self {
        Self::new(origin, origin, assemble(program))
    }

    /// Serializes the header followed by the body.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(HEADER_SIZE + self.body.len());
        out.extend_from_slice(&self.header.to_bytes());
        out.extend_from_slice(&self.body);
        out
    }

    /// Writes the serialized image to `path`.
    ///
    /// # Errors
    ///
    /// Returns any I/O error from writing the file.
    pub fn write_to(&self, path: impl AsRef<Path>) -> std::io::Result<()> {
        fs::write(path, self.to_bytes())
    }
}
