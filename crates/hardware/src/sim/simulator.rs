//! Simulator: owns the machine and its output sink side-by-side.
//!
//! The machine never holds the sink itself; the simulator lends it to
//! [`Machine::run`] for the duration of each run.

use std::fmt;
use std::path::Path;

use crate::common::error::LoadError;
use crate::config::Config;
use crate::core::{Machine, RunOutcome};
use crate::isa::disasm;
use crate::sim::loader::{self, LoadedImage};
use crate::sim::report::StateReport;
use crate::soc::OutputSink;
use crate::soc::devices::ConsoleSink;

/// Top-level simulator: one machine, its output sink and the run policy.
pub struct Simulator {
    /// Machine state (registers, memory, stats).
    pub machine: Machine,
    sink: Box<dyn OutputSink>,
    max_steps: Option<u64>,
    image: Option<LoadedImage>,
}

impl fmt::Debug for Simulator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Simulator")
            .field("machine", &self.machine)
            .field("max_steps", &self.max_steps)
            .field("image", &self.image)
            .finish_non_exhaustive()
    }
}

impl Simulator {
    /// Creates a simulator printing port output to stdout.
    pub fn new(config: &Config) -> Self {
        Self::with_sink(config, Box::new(ConsoleSink::stdout()))
    }

    /// Creates a simulator with a custom output sink.
    pub fn with_sink(config: &Config, sink: Box<dyn OutputSink>) -> Self {
        Self {
            machine: Machine::new(config),
            sink,
            max_steps: config.execution.max_steps,
            image: None,
        }
    }

    /// Loads an image file and returns its entry point.
    ///
    /// # Errors
    ///
    /// Returns a [`LoadError`] if the file cannot be read or is not a valid image.
    pub fn load_file(&mut self, path: impl AsRef<Path>) -> Result<u32, LoadError> {
        let bytes = loader::read_image(path)?;
        self.load_bytes(&bytes)
    }

    /// Loads an in-memory image and returns its entry point.
    ///
    /// # Errors
    ///
    /// Returns a [`LoadError`] if `bytes` is not a valid image.
    pub fn load_bytes(&mut self, bytes: &[u8]) -> Result<u32, LoadError> {
        let image = loader::install(&mut self.machine, bytes)?;
        self.image = Some(image);
        Ok(image.entry())
    }

    /// Returns the most recently loaded image, if any.
    pub const fn image(&self) -> Option<&LoadedImage> {
        self.image.as_ref()
    }

    /// Runs the machine under the configured step budget and flushes the sink.
    pub fn run(&mut self) -> RunOutcome {
        let outcome = self.machine.run(&mut self.sink, self.max_steps);
        if let Err(e) = self.sink.flush() {
            tracing::warn!(error = %e, "failed to flush output");
        }
        outcome
    }

    /// Snapshots the machine state.
    pub const fn report(&self) -> StateReport {
        StateReport::capture(&self.machine)
    }

    /// Lists the loaded body from the entry point to the end of the copied bytes.
    pub fn disassemble(&self) -> Vec<String> {
        let Some(image) = self.image else {
            return Vec::new();
        };
        disasm::listing(self.machine.memory.as_slice(), image.entry(), image.end())
    }
}
