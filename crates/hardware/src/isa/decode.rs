//! MHF Instruction Decoder.
//!
//! This module turns the bytes at a program counter into a structured [`Instruction`].
//! Decoding is side-effect free: it reads the opcode and every operand byte before
//! anything is executed, so an instruction cut off by the end of memory is reported as
//! a fault before it can partially run.

use crate::common::error::Fault;
use crate::isa::instruction::{Instruction, operand_count};
use crate::isa::opcodes;

/// Decodes the instruction at `addr` in `mem`.
///
/// `mem` is the whole address space; `addr` is the address of the opcode byte.
///
/// # Errors
///
/// * [`Fault::PcOutOfBounds`] if `addr` is not inside `mem`.
/// * [`Fault::UnknownOpcode`] if the byte at `addr` is not an MHF opcode.
/// * [`Fault::TruncatedInstruction`] if any operand byte lies past the end of `mem`.
pub fn decode(mem: &[u8], addr: u32) -> Result<Instruction, Fault> {
    let base = addr as usize;
    let opcode = *mem.get(base).ok_or(Fault::PcOutOfBounds { pc: addr })?;
    let count = operand_count(opcode).ok_or(Fault::UnknownOpcode { opcode, addr })? as usize;

    let operands = mem
        .get(base + 1..base + 1 + count)
        .ok_or(Fault::TruncatedInstruction { opcode, addr })?;

    let inst = match (opcode, operands) {
        (opcodes::OP_NOP, []) => Instruction::Nop,
        (opcodes::OP_HALT, []) => Instruction::Halt,
        (opcodes::OP_LOAD, &[reg, val]) => Instruction::LoadImm { reg, val },
        (opcodes::OP_ADD, &[reg1, reg2]) => Instruction::Add { reg1, reg2 },
        (opcodes::OP_STORE, &[reg, lo, hi]) => Instruction::Store {
            reg,
            addr: u16::from_le_bytes([lo, hi]),
        },
        _ => return Err(Fault::UnknownOpcode { opcode, addr }),
    };
    Ok(inst)
}

/// Decodes consecutive instructions from `start` up to (not including) `end`.
///
/// Decoding stops at the first fault, which is returned as the last element. Used by
/// the disassembler to list a code region.
pub fn decode_range(mem: &[u8], start: u32, end: u32) -> Vec<(u32, Result<Instruction, Fault>)> {
    let mut out = Vec::new();
    let mut addr = start;
    while addr < end {
        let decoded = decode(mem, addr);
        match decoded {
            Ok(inst) => {
                out.push((addr, decoded));
                addr = addr.saturating_add(inst.encoded_len());
            }
            Err(_) => {
                out.push((addr, decoded));
                break;
            }
        }
    }
    out
}
