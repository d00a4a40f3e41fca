//! Flat Machine Memory.
//!
//! This module implements the single addressable memory of the MHF CPU. It provides:
//! 1. **Buffer:** A fixed-capacity, zero-initialized byte buffer owned by one machine.
//! 2. **Checked Access:** Byte reads and writes that report out-of-range addresses
//!    instead of panicking.
//! 3. **Image Loading:** Bulk copies that clip at the end of the buffer.

use std::fmt;

/// Flat, fixed-capacity byte-addressable memory.
#[derive(Clone, PartialEq, Eq)]
pub struct Memory {
    data: Box<[u8]>,
}

impl Memory {
    /// Creates zeroed memory of `size` bytes.
    pub fn new(size: usize) -> Self {
        Self {
            data: vec![0u8; size].into_boxed_slice(),
        }
    }

    /// Returns the capacity in bytes.
    pub const fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` for zero-sized memory.
    pub const fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns `true` if `addr` is a valid address.
    #[inline]
    pub const fn contains(&self, addr: u32) -> bool {
        (addr as usize) < self.data.len()
    }

    /// Reads a byte, or `None` when `addr` is out of range.
    #[inline]
    pub fn read_u8(&self, addr: u32) -> Option<u8> {
        self.data.get(addr as usize).copied()
    }

    /// Writes a byte.
    ///
    /// Returns `false` and leaves memory unchanged when `addr` is out of range.
    #[inline]
    pub fn write_u8(&mut self, addr: u32, val: u8) -> bool {
        match self.data.get_mut(addr as usize) {
            Some(cell) => {
                *cell = val;
                true
            }
            None => false,
        }
    }

    /// Returns the whole address space as a slice.
    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }

    /// Copies `bytes` to memory starting at `offset`, clipped at the end of memory.
    ///
    /// Bytes that would land past the last address are dropped. Returns the number of
    /// bytes actually copied; an `offset` at or past the end copies nothing.
    pub fn load_clipped(&mut self, offset: u32, bytes: &[u8]) -> usize {
        let start = offset as usize;
        let Some(dest) = self.data.get_mut(start..) else {
            return 0;
        };
        let count = bytes.len().min(dest.len());
        dest[..count].copy_from_slice(&bytes[..count]);
        count
    }

    /// Zeroes every byte.
    pub fn clear(&mut self) {
        self.data.fill(0);
    }
}

impl fmt::Debug for Memory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Memory")
            .field("len", &self.data.len())
            .finish_non_exhaustive()
    }
}
