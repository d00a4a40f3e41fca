//! Memory-Mapped Output Devices.
//!
//! The MHF CPU has a single memory-mapped port: every store to the output port
//! address is also handed to an [`OutputSink`]. The sink is injected into the
//! execution engine, so the same program can print to a terminal, be captured by a
//! test, or be discarded.

/// Console, capture and null sink implementations.
pub mod console;

use std::io;

pub use console::{CaptureSink, ConsoleSink, NullSink};

/// Receiver of bytes written to the memory-mapped output port.
pub trait OutputSink {
    /// Emits one byte written to the output port.
    ///
    /// # Errors
    ///
    /// Returns the I/O error of the underlying stream, if any. The execution engine
    /// logs such errors and keeps running.
    fn emit(&mut self, byte: u8) -> io::Result<()>;

    /// Flushes buffered output.
    ///
    /// # Errors
    ///
    /// Returns the I/O error of the underlying stream, if any.
    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<S: OutputSink + ?Sized> OutputSink for &mut S {
    fn emit(&mut self, byte: u8) -> io::Result<()> {
        (**self).emit(byte)
    }

    fn flush(&mut self) -> io::Result<()> {
        (**self).flush()
    }
}

impl<S: OutputSink + ?Sized> OutputSink for Box<S> {
    fn emit(&mut self, byte: u8) -> io::Result<()> {
        (**self).emit(byte)
    }

    fn flush(&mut self) -> io::Result<()> {
        (**self).flush()
    }
}
