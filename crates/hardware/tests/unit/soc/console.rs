//! # Output Sink Tests
//!
//! Verifies how the console, capture and null sinks handle port bytes.

use mhfvm_core::soc::OutputSink;
use mhfvm_core::soc::devices::{CaptureSink, ConsoleSink, NullSink};

#[test]
fn test_console_sink_writes_ascii() {
    let mut sink = ConsoleSink::new(Vec::new());
    for &b in b"Hi!" {
        sink.emit(b).unwrap();
    }
    sink.flush().unwrap();
    assert_eq!(sink.into_inner(), b"Hi!".to_vec());
}

#[test]
fn test_console_sink_encodes_high_bytes_as_latin1() {
    let mut sink = ConsoleSink::new(Vec::new());
    sink.emit(0xE9).unwrap();
    assert_eq!(String::from_utf8(sink.into_inner()).unwrap(), "é");
}

#[test]
fn test_capture_sink_records_bytes() {
    let mut sink = CaptureSink::new();
    sink.emit(b'A').unwrap();
    sink.emit(0xFF).unwrap();
    assert_eq!(sink.bytes(), &[b'A', 0xFF]);
    assert_eq!(sink.text(), "A\u{FF}");

    sink.clear();
    assert!(sink.bytes().is_empty());
}

/// Emits `bytes` through any sink taken by value.
fn emit_all<S: OutputSink>(mut sink: S, bytes: &[u8]) {
    for &b in bytes {
        sink.emit(b).unwrap();
    }
    sink.flush().unwrap();
}

#[test]
fn test_sink_through_reference_and_box() {
    let mut capture = CaptureSink::new();
    emit_all(&mut capture, b"xy");
    assert_eq!(capture.text(), "xy");

    let boxed: Box<dyn OutputSink> = Box::new(NullSink);
    emit_all(boxed, b"ignored");
}
