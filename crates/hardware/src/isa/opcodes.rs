//! MHF opcode byte values.
//!
//! Every instruction starts with one of these bytes, followed by its operands.

/// No operation.
pub const OP_NOP: u8 = 0x00;

/// Stop the machine.
pub const OP_HALT: u8 = 0x01;

/// Load an immediate into a register: `reg, imm`.
pub const OP_LOAD: u8 = 0x10;

/// Store a register to memory: `reg, addr_lo, addr_hi`.
pub const OP_STORE: u8 = 0x11;

/// Add two registers with 8-bit wraparound: `reg1, reg2`.
pub const OP_ADD: u8 = 0x20;
