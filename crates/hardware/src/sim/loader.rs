//! Image Loader and Machine Initialization.
//!
//! This module installs MHF images into a [`Machine`]. It performs:
//! 1. **Validation:** Parses the 28-byte header and checks the `MHF` signature before
//!    the machine is touched, so a rejected image leaves the old state intact.
//! 2. **Body placement:** Resets the machine and copies the body to `head_offset`,
//!    silently clipping whatever does not fit in memory.
//! 3. **Entry point:** Sets the program counter to `code_offset`.

use std::fs;
use std::path::Path;

use crate::common::constants::HEADER_SIZE;
use crate::common::error::LoadError;
use crate::core::Machine;
use crate::sim::header::ProgramHeader;

/// Result of installing an image.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LoadedImage {
    /// Header of the installed image.
    pub header: ProgramHeader,
    /// Body bytes present in the image.
    pub body_len: usize,
    /// Body bytes that landed in memory.
    pub copied: usize,
}

impl LoadedImage {
    /// Address where execution begins.
    pub const fn entry(&self) -> u32 {
        self.header.code_offset
    }

    /// One past the last memory address written by the loader.
    pub const fn end(&self) -> u32 {
        self.header.head_offset.saturating_add(self.copied as u32)
    }
}

/// Reads an image file from disk into a byte vector.
///
/// # Errors
///
/// Returns [`LoadError::Io`] if the file cannot be read.
pub fn read_image(path: impl AsRef<Path>) -> Result<Vec<u8>, LoadError> {
    let path = path.as_ref();
    fs::read(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Validates `bytes` as an MHF image and installs it into `machine`.
///
/// The body is the range `[28, min(file_size, bytes.len()))`. Bytes that would land at
/// or beyond the end of memory are dropped without error; the drop is only logged
/// at debug level.
///
/// # Errors
///
/// Returns [`LoadError::MalformedHeader`] for inputs shorter than the header and
/// [`LoadError::InvalidSignature`] when the signature does not start with `MHF`. The
/// machine is not modified in either case.
pub fn install(machine: &mut Machine, bytes: &[u8]) -> Result<LoadedImage, LoadError> {
    let header = ProgramHeader::parse(bytes)?;
    if !header.has_valid_signature() {
        return Err(LoadError::InvalidSignature {
            signature: header.signature,
        });
    }

    let body_end = (HEADER_SIZE + header.body_len()).min(bytes.len());
    let body = bytes.get(HEADER_SIZE..body_end).unwrap_or_default();

    machine.reset();
    let copied = machine.memory.load_clipped(header.head_offset, body);
    if copied < body.len() {
        tracing::debug!(
            dropped = body.len() - copied,
            "image body of {} bytes at {:#06x} clipped to {copied} bytes by {}-byte memory",
            body.len(),
            header.head_offset,
            machine.memory.len()
        );
    }
    machine.set_pc(header.code_offset);

    tracing::debug!(
        version = header.version,
        head = header.head_offset,
        entry = header.code_offset,
        copied,
        "image installed"
    );

    Ok(LoadedImage {
        header,
        body_len: body.len(),
        copied,
    })
}

/// Loads an in-memory image and returns its entry point.
///
/// # Errors
///
/// See [`install`].
pub fn load_bytes(machine: &mut Machine, bytes: &[u8]) -> Result<u32, LoadError> {
    install(machine, bytes).map(|image| image.entry())
}

/// Loads an image file and returns its entry point.
///
/// # Errors
///
/// Returns [`LoadError::Io`] if the file cannot be read, otherwise see [`install`].
pub fn load_file(machine: &mut Machine, path: impl AsRef<Path>) -> Result<u32, LoadError> {
    let bytes = read_image(path)?;
    load_bytes(machine, &bytes)
}
