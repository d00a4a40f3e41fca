//! General-Purpose Register File.
//!
//! This module provides the `RegisterFile` struct holding the eight 8-bit registers
//! of the MHF CPU. It provides:
//! 1. **Storage:** Eight zero-initialized `u8` registers, `r0`-`r7`.
//! 2. **Checked Access:** Reads and writes validate the index and never touch state
//!    for an out-of-range register.
//! 3. **Observability:** A snapshot of all register values in index order.

use crate::common::constants::NUM_REGS;

/// The MHF general-purpose register file.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegisterFile {
    regs: [u8; NUM_REGS],
}

impl RegisterFile {
    /// Creates a new register file with all registers initialized to zero.
    pub const fn new() -> Self {
        Self {
            regs: [0; NUM_REGS],
        }
    }

    /// Returns `true` if `idx` names a register.
    #[inline]
    pub const fn is_valid(idx: u8) -> bool {
        (idx as usize) < NUM_REGS
    }

    /// Reads a register.
    ///
    /// Returns `None` for an index outside `0..8`.
    #[inline]
    pub fn read(&self, idx: u8) -> Option<u8> {
        self.regs.get(idx as usize).copied()
    }

    /// Writes a register.
    ///
    /// Returns `false` and leaves every register untouched when `idx` is out of range.
    #[inline]
    pub fn write(&mut self, idx: u8, val: u8) -> bool {
        match self.regs.get_mut(idx as usize) {
            Some(slot) => {
                *slot = val;
                true
            }
            None => false,
        }
    }

    /// Returns all register values in index order.
    pub const fn values(&self) -> [u8; NUM_REGS] {
        self.regs
    }

    /// Clears every register to zero.
    pub fn reset(&mut self) {
        self.regs = [0; NUM_REGS];
    }
}
