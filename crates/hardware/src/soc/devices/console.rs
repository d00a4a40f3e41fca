//! Output sink implementations.
//!
//! Port bytes are interpreted as Latin-1 characters, so each byte maps to the Unicode
//! code point of the same value. [`ConsoleSink`] writes them UTF-8 encoded to any `Write` stream,
//! [`CaptureSink`] keeps the raw bytes for inspection, and [`NullSink`] drops them.

use std::io::{self, Write};

use super::OutputSink;

/// Writes port output as characters to a byte stream (stdout by default).
#[derive(Debug)]
pub struct ConsoleSink<W: Write = io::Stdout> {
    out: W,
}

impl ConsoleSink {
    /// Creates a sink writing to standard output.
    pub fn stdout() -> Self {
        Self { out: io::stdout() }
    }
}

impl<W: Write> ConsoleSink<W> {
    /// Creates a sink writing to `out`.
    pub const fn new(out: W) -> Self {
        Self { out }
    }

    /// Consumes the sink and returns the underlying stream.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> OutputSink for ConsoleSink<W> {
    fn emit(&mut self, byte: u8) -> io::Result<()> {
        let mut buf = [0u8; 4];
        let encoded = char::from(byte).encode_utf8(&mut buf);
        self.out.write_all(encoded.as_bytes())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }
}

/// Collects port output in memory.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CaptureSink {
    bytes: Vec<u8>,
}

impl CaptureSink {
    /// Creates an empty capture.
    pub const fn new() -> Self {
        Self { bytes: Vec::new() }
    }

    /// Returns the raw bytes emitted so far.
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Returns the emitted bytes as text, one character per byte.
    pub fn text(&self) -> String {
        self.bytes.iter().copied().map(char::from).collect()
    }

    /// Discards everything captured so far.
    pub fn clear(&mut self) {
        self.bytes.clear();
    }
}

impl OutputSink for CaptureSink {
    fn emit(&mut self, byte: u8) -> io::Result<()> {
        self.bytes.push(byte);
        Ok(())
    }
}

/// Discards port output.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl OutputSink for NullSink {
    fn emit(&mut self, _byte: u8) -> io::Result<()> {
        Ok(())
    }
}
