//! # Image Loading Tests
//!
//! This module contains unit tests for installing MHF images into a machine, from
//! byte slices and from files on disk, including signature checks and clipping.

use std::io::Write;

use mhfvm_core::common::LoadError;
use mhfvm_core::config::Config;
use mhfvm_core::isa::Instruction;
use mhfvm_core::sim::loader;
use mhfvm_core::{Machine, MachineState};
use tempfile::NamedTempFile;

use crate::common::builder::ImageBuilder;
use crate::common::harness::{capture_logs, init_tracing};

/// Helper function to create a temporary image file for testing.
fn create_temp_image(data: &[u8]) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(data).unwrap();
    file.flush().unwrap();
    file
}

fn machine() -> Machine {
    init_tracing();
    Machine::new(&Config::default())
}

#[test]
fn test_load_bytes_places_body_and_sets_pc() {
    let mut m = machine();
    let image = ImageBuilder::new()
        .head_offset(0x0100)
        .code_offset(0x0102)
        .body(&[0xDE, 0xAD, 0x01])
        .build();

    let entry = loader::load_bytes(&mut m, &image).unwrap();
    assert_eq!(entry, 0x0102);
    assert_eq!(m.pc(), 0x0102);
    assert_eq!(&m.memory.as_slice()[0x00FF..0x0104], &[0, 0xDE, 0xAD, 0x01, 0]);
    assert_eq!(m.state(), MachineState::Ready);
}

#[test]
fn test_load_file() {
    let image = ImageBuilder::new()
        .program(&[Instruction::LoadImm { reg: 0, val: 1 }, Instruction::Halt])
        .build();
    let file = create_temp_image(&image);

    let mut m = machine();
    let entry = loader::load_file(&mut m, file.path()).unwrap();
    assert_eq!(entry, 0);
    assert_eq!(&m.memory.as_slice()[..4], &[0x10, 0x00, 0x01, 0x01]);
}

#[test]
fn test_load_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let mut m = machine();
    let err = loader::load_file(&mut m, dir.path().join("nope.mhfb")).unwrap_err();
    assert!(matches!(err, LoadError::Io { .. }));
}

#[test]
fn test_read_image_returns_raw_bytes() {
    let file = create_temp_image(&[1, 2, 3]);
    assert_eq!(loader::read_image(file.path()).unwrap(), vec![1, 2, 3]);
}

#[test]
fn test_short_file_is_malformed() {
    let file = create_temp_image(b"MHFB\x01\x00");
    let mut m = machine();
    let err = loader::load_file(&mut m, file.path()).unwrap_err();
    assert!(matches!(err, LoadError::MalformedHeader { len: 6 }));
}

#[test]
fn test_empty_input_is_malformed() {
    let mut m = machine();
    assert!(matches!(
        loader::load_bytes(&mut m, &[]),
        Err(LoadError::MalformedHeader { len: 0 })
    ));
}

#[test]
fn test_bad_signature_rejected_before_mutation() {
    let mut m = machine();
    let good = ImageBuilder::new()
        .program(&[Instruction::LoadImm { reg: 0, val: 9 }, Instruction::Halt])
        .build();
    let _ = loader::load_bytes(&mut m, &good).unwrap();
    let _ = m.regs.write(3, 3);
    let memory_before = m.memory.clone();

    let bad = ImageBuilder::new()
        .signature(*b"XHFB")
        .origin(0x10)
        .body(&[0xFF; 4])
        .build();
    let err = loader::load_bytes(&mut m, &bad).unwrap_err();

    assert!(matches!(
        err,
        LoadError::InvalidSignature { signature } if signature == *b"XHFB"
    ));
    assert_eq!(m.memory, memory_before);
    assert_eq!(m.regs.read(3), Some(3));
    assert_eq!(m.pc(), 0);
}

#[test]
fn test_body_clipped_at_capacity() {
    let mut m = machine();
    let image = ImageBuilder::new()
        .head_offset(0xFFFC)
        .body(&[1, 2, 3, 4, 5, 6, 7, 8])
        .build();

    let entry = loader::load_bytes(&mut m, &image).unwrap();
    assert_eq!(entry, 0);
    assert_eq!(&m.memory.as_slice()[0xFFFC..], &[1, 2, 3, 4]);
    assert_eq!(m.memory.len(), 0x1_0000);
}

/// Clipping is not an error and must stay below the default `warn` filter.
#[test]
fn test_clipping_logs_only_at_debug() {
    let image = ImageBuilder::new()
        .head_offset(0xFFFC)
        .body(&[1, 2, 3, 4, 5, 6, 7, 8])
        .build();

    let (copied, warnings) = capture_logs(tracing::Level::WARN, || {
        let mut m = Machine::new(&Config::default());
        loader::install(&mut m, &image).unwrap().copied
    });
    assert_eq!(copied, 4);
    assert_eq!(warnings, "");

    let (_, debug) = capture_logs(tracing::Level::DEBUG, || {
        let mut m = Machine::new(&Config::default());
        let _ = loader::install(&mut m, &image).unwrap();
    });
    assert!(debug.contains("clipped to 4 bytes"), "{debug}");
    assert!(debug.contains("dropped=4"), "{debug}");
}

#[test]
fn test_install_reports_copied_bytes() {
    let mut m = machine();
    let image = ImageBuilder::new()
        .head_offset(0xFFFE)
        .body(&[1, 2, 3])
        .build();
    let loaded = loader::install(&mut m, &image).unwrap();
    assert_eq!(loaded.body_len, 3);
    assert_eq!(loaded.copied, 2);
    assert_eq!(loaded.end(), 0x1_0000);
}

#[test]
fn test_head_offset_past_capacity_copies_nothing() {
    let mut m = machine();
    let image = ImageBuilder::new()
        .head_offset(0x2_0000)
        .body(&[1, 2, 3])
        .build();

    let loaded = loader::install(&mut m, &image).unwrap();
    assert_eq!(loaded.copied, 0);
    assert!(m.memory.as_slice().iter().all(|&b| b == 0));
}

#[test]
fn test_file_shorter_than_file_size_yields_short_body() {
    let mut m = machine();
    let image = ImageBuilder::new().file_size(28 + 100).body(&[7, 8]).build();

    let loaded = loader::install(&mut m, &image).unwrap();
    assert_eq!(loaded.body_len, 2);
    assert_eq!(&m.memory.as_slice()[..3], &[7, 8, 0]);
}

#[test]
fn test_file_size_limits_body() {
    let mut m = machine();
    let image = ImageBuilder::new().file_size(28 + 2).body(&[7, 8, 9, 10]).build();

    let loaded = loader::install(&mut m, &image).unwrap();
    assert_eq!(loaded.body_len, 2);
    assert_eq!(&m.memory.as_slice()[..3], &[7, 8, 0]);
}

#[test]
fn test_file_size_not_above_header_means_no_body() {
    for size in [0, 10, 28] {
        let mut m = machine();
        let image = ImageBuilder::new().file_size(size).body(&[7, 8]).build();
        let loaded = loader::install(&mut m, &image).unwrap();
        assert_eq!(loaded.body_len, 0);
        assert_eq!(m.memory.read_u8(0), Some(0));
    }
}

#[test]
fn test_loading_resets_previous_run() {
    let mut m = machine();
    let _ = m.memory.write_u8(0x500, 0xEE);
    let _ = m.regs.write(2, 2);

    let image = ImageBuilder::new().program(&[Instruction::Halt]).build();
    let _ = loader::load_bytes(&mut m, &image).unwrap();

    assert_eq!(m.memory.read_u8(0x500), Some(0));
    assert_eq!(m.regs.values(), [0; 8]);
}
