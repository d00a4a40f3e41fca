//! Instruction Disassembler for the MHF CPU.
//!
//! Converts decoded instructions into human-readable mnemonics for trace logging,
//! the CLI `--disassemble` listing, and test diagnostics.
//!
//! # Usage
//!
//! ```
//! use mhfvm_core::isa::disasm::disassemble;
//! use mhfvm_core::isa::instruction::Instruction;
//!
//! let text = disassemble(&Instruction::Store { reg: 0, addr: 0xFF00 });
//! assert_eq!(text, "store r0, 0xff00");
//! ```

use std::fmt::Write;

use crate::isa::decode::decode_range;
use crate::isa::instruction::Instruction;

/// Width of the raw-bytes column in a listing (four bytes, space separated).
const BYTES_COLUMN: usize = 12;

/// Disassembles one instruction into a mnemonic such as `"add r0, r1"`.
pub fn disassemble(inst: &Instruction) -> String {
    match *inst {
        Instruction::Nop => "nop".to_owned(),
        Instruction::Halt => "halt".to_owned(),
        Instruction::LoadImm { reg, val } => format!("load r{reg}, {val}"),
        Instruction::Add { reg1, reg2 } => format!("add r{reg1}, r{reg2}"),
        Instruction::Store { reg, addr } => format!("store r{reg}, {addr:#06x}"),
    }
}

/// Produces an address-annotated listing of the code in `mem[start..end]`.
///
/// Each line has the form `0x0000:  10 00 05     load r0, 5`. The listing stops at
/// the first byte that does not decode; that line carries the fault description.
pub fn listing(mem: &[u8], start: u32, end: u32) -> Vec<String> {
    decode_range(mem, start, end)
        .into_iter()
        .map(|(addr, decoded)| {
            let mut line = format!("{addr:#06x}:  ");
            match decoded {
                Ok(inst) => {
                    let from = addr as usize;
                    let raw = mem
                        .get(from..from + inst.encoded_len() as usize)
                        .unwrap_or_default();
                    let mut bytes = String::new();
                    for b in raw {
                        let _ = write!(bytes, "{b:02x} ");
                    }
                    let _ = write!(line, "{bytes:<BYTES_COLUMN$} {}", disassemble(&inst));
                }
                Err(fault) => {
                    let _ = write!(line, "{:<BYTES_COLUMN$} ; {fault}", "??");
                }
            }
            line
        })
        .collect()
}
