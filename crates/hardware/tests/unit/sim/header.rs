//! # Header Tests
//!
//! Verifies the structural decode of the 28-byte MHF header and its re-encoding.

use mhfvm_core::common::LoadError;
use mhfvm_core::sim::ProgramHeader;
use proptest::prelude::*;

/// A header with every field set to a distinct value.
const SAMPLE: [u8; 28] = [
    b'M', b'H', b'F', b'B', // signature
    0x01, 0x00, // version
    0x34, 0x12, // flags
    0x00, 0x01, 0x00, 0x00, // head_offset
    0x04, 0x01, 0x00, 0x00, // code_offset
    0xAA, 0xBB, 0xCC, 0xDD, // data_offset
    0x11, 0x22, 0x33, 0x44, // symbol_offset
    0x30, 0x00, 0x00, 0x00, // file_size
];

#[test]
fn test_parse_fields_little_endian() {
    let header = ProgramHeader::parse(&SAMPLE).unwrap();
    assert_eq!(header.signature, *b"MHFB");
    assert_eq!(header.version, 1);
    assert_eq!(header.flags, 0x1234);
    assert_eq!(header.head_offset, 0x0100);
    assert_eq!(header.code_offset, 0x0104);
    assert_eq!(header.data_offset, 0xDDCC_BBAA);
    assert_eq!(header.symbol_offset, 0x4433_2211);
    assert_eq!(header.file_size, 0x30);
    assert_eq!(header.body_len(), 0x30 - 28);
    assert!(header.has_valid_signature());
}

#[test]
fn test_round_trip_sample() {
    let header = ProgramHeader::parse(&SAMPLE).unwrap();
    assert_eq!(header.to_bytes(), SAMPLE);
}

#[test]
fn test_parse_ignores_trailing_bytes() {
    let mut bytes = SAMPLE.to_vec();
    bytes.extend_from_slice(&[0xFF; 10]);
    assert_eq!(
        ProgramHeader::parse(&bytes).unwrap(),
        ProgramHeader::parse(&SAMPLE).unwrap()
    );
}

#[test]
fn test_short_input_is_malformed() {
    for len in [0, 1, 27] {
        assert!(matches!(
            ProgramHeader::parse(&SAMPLE[..len]),
            Err(LoadError::MalformedHeader { len: l }) if l == len
        ));
    }
}

#[test]
fn test_parse_does_not_validate_signature() {
    let mut bytes = SAMPLE;
    bytes[..4].copy_from_slice(b"ELF\x7f");
    let header = ProgramHeader::parse(&bytes).unwrap();
    assert!(!header.has_valid_signature());
}

#[test]
fn test_signature_fourth_byte_is_free() {
    for last in [0x00, b'B', 0xFF] {
        let mut header = ProgramHeader::for_body(0, 0, 0);
        header.signature = [b'M', b'H', b'F', last];
        assert!(header.has_valid_signature());
    }
    let mut header = ProgramHeader::for_body(0, 0, 0);
    header.signature = *b"MHX!";
    assert!(!header.has_valid_signature());
}

#[test]
fn test_body_len_of_short_file_size() {
    let mut header = ProgramHeader::for_body(0, 0, 0);
    for size in [0, 10, 28] {
        header.file_size = size;
        assert_eq!(header.body_len(), 0);
    }
}

#[test]
fn test_for_body() {
    let header = ProgramHeader::for_body(0x10, 0x12, 5);
    assert_eq!(header.signature, *b"MHFB");
    assert_eq!(header.version, 1);
    assert_eq!(header.flags, 0);
    assert_eq!(header.head_offset, 0x10);
    assert_eq!(header.code_offset, 0x12);
    assert_eq!(header.data_offset, 0);
    assert_eq!(header.symbol_offset, 0);
    assert_eq!(header.file_size, 33);
}

proptest! {
    /// Parsing any 28 bytes and re-serializing yields the same bytes.
    #[test]
    fn prop_header_round_trip(bytes in prop::array::uniform28(any::<u8>())) {
        let header = ProgramHeader::parse(&bytes).unwrap();
        prop_assert_eq!(header.to_bytes(), bytes);
    }
}
