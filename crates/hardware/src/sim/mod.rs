//! Program images, loading and the top-level simulator.
//!
//! Provides the MHF header codec, an image builder, the loader that installs images
//! into a machine, the final state report, and the [`Simulator`] that ties them
//! together for the CLI.

/// 28-byte image header.
pub mod header;
/// Image builder.
pub mod image;
/// Image loader.
pub mod loader;
/// Final state report.
pub mod report;
/// Simulator owning a machine and its output sink.
pub mod simulator;

pub use header::ProgramHeader;
pub use image::ProgramImage;
pub use loader::{LoadedImage, load_bytes, load_file};
pub use report::StateReport;
pub use simulator::Simulator;
