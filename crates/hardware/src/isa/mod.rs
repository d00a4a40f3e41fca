//! Instruction Set Architecture (ISA) Definitions.
//!
//! Contains the opcode table, the closed instruction set, the decoder and the
//! disassembler of the MHF CPU.
//!
//! | Opcode | Mnemonic        | Operands      |
//! |--------|-----------------|---------------|
//! | `0x00` | `NOP`           | none          |
//! | `0x01` | `HALT`          | none          |
//! | `0x10` | `LOAD reg, imm` | reg, imm      |
//! | `0x11` | `STORE reg, addr` | reg, lo, hi |
//! | `0x20` | `ADD reg1, reg2`  | reg1, reg2  |

/// Instruction decoding from raw memory.
pub mod decode;

/// Instruction disassembler for tracing and listings.
pub mod disasm;

/// Instruction variants and their encodings.
pub mod instruction;

/// Opcode byte values.
pub mod opcodes;

pub use decode::decode;
pub use instruction::Instruction;
