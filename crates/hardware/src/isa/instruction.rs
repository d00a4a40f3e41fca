//! Instruction representation and encoding.
//!
//! Instructions are a closed set of variants decoded once per fetch. Each variant knows
//! its opcode, its encoded length and how to serialize itself, so the decoder, the
//! disassembler and the image builder all share one definition of the instruction set.
//!
//! Adding an opcode means adding a variant here, an arm in [`decode`](crate::isa::decode::decode)
//! and an arm in the execution engine; exhaustive matching flags every place that needs it.

use crate::common::reg::RegisterFile;
use crate::isa::opcodes;

/// A decoded MHF instruction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Instruction {
    /// `NOP`: no effect.
    Nop,
    /// `HALT`: stop the machine.
    Halt,
    /// `LOAD reg, imm`: `regs[reg] = val`.
    LoadImm {
        /// Destination register index.
        reg: u8,
        /// Immediate value.
        val: u8,
    },
    /// `ADD reg1, reg2`: `regs[reg1] = regs[reg1] + regs[reg2]` modulo 256.
    Add {
        /// Destination and first source register index.
        reg1: u8,
        /// Second source register index.
        reg2: u8,
    },
    /// `STORE reg, addr`: `memory[addr] = regs[reg]`.
    Store {
        /// Source register index.
        reg: u8,
        /// Target address (`hi << 8 | lo` in the encoding).
        addr: u16,
    },
}

impl Instruction {
    /// Returns the opcode byte of this instruction.
    pub const fn opcode(&self) -> u8 {
        match self {
            Self::Nop => opcodes::OP_NOP,
            Self::Halt => opcodes::OP_HALT,
            Self::LoadImm { .. } => opcodes::OP_LOAD,
            Self::Add { .. } => opcodes::OP_ADD,
            Self::Store { .. } => opcodes::OP_STORE,
        }
    }

    /// Returns the encoded length in bytes, opcode included.
    pub const fn encoded_len(&self) -> u32 {
        match operand_count(self.opcode()) {
            Some(n) => 1 + n,
            None => 1,
        }
    }

    /// Returns the first register operand outside `r0`-`r7`, if any.
    pub const fn invalid_register(&self) -> Option<u8> {
        match *self {
            Self::Nop | Self::Halt => None,
            Self::LoadImm { reg, .. } | Self::Store { reg, .. } => invalid(reg),
            Self::Add { reg1, reg2 } => match invalid(reg1) {
                Some(reg) => Some(reg),
                None => invalid(reg2),
            },
        }
    }

    /// Appends the encoding of this instruction to `out`.
    pub fn encode_into(&self, out: &mut Vec<u8>) {
        out.push(self.opcode());
        match *self {
            Self::Nop | Self::Halt => {}
            Self::LoadImm { reg, val } => out.extend_from_slice(&[reg, val]),
            Self::Add { reg1, reg2 } => out.extend_from_slice(&[reg1, reg2]),
            Self::Store { reg, addr } => {
                let [lo, hi] = addr.to_le_bytes();
                out.extend_from_slice(&[reg, lo, hi]);
            }
        }
    }

    /// Returns the encoding of this instruction.
    pub fn encode(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.encoded_len() as usize);
        self.encode_into(&mut out);
        out
    }
}

/// Returns `Some(reg)` when `reg` does not name a register.
const fn invalid(reg: u8) -> Option<u8> {
    if RegisterFile::is_valid(reg) {
        None
    } else {
        Some(reg)
    }
}

/// Returns the number of operand bytes following `opcode`, or `None` for unknown opcodes.
pub const fn operand_count(opcode: u8) -> Option<u32> {
    match opcode {
        opcodes::OP_NOP | opcodes::OP_HALT => Some(0),
        opcodes::OP_LOAD | opcodes::OP_ADD => Some(2),
        opcodes::OP_STORE => Some(3),
        _ => None,
    }
}

/// Encodes a sequence of instructions into one contiguous byte vector.
pub fn assemble(program: &[Instruction]) -> Vec<u8> {
    let mut out = Vec::with_capacity(program.iter().map(|i| i.encoded_len() as usize).sum());
    for inst in program {
        inst.encode_into(&mut out);
    }
    out
}
