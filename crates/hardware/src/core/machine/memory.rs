//! Store Path and Memory-Mapped Output.
//!
//! Stores write the flat memory and, when they target the output port, also hand the
//! stored byte to the injected [`OutputSink`]. An address outside memory skips the
//! write without faulting.

use super::Machine;
use crate::soc::OutputSink;

impl Machine {
    /// Stores `val` at `addr`, emitting it when `addr` is the output port.
    pub(crate) fn store(&mut self, addr: u32, val: u8, sink: &mut dyn OutputSink) {
        if !self.memory.write_u8(addr, val) {
            tracing::debug!(
                "store to {addr:#06x} outside memory of {} bytes skipped",
                self.memory.len()
            );
        }

        if addr == self.output_port {
            self.stats.port_writes += 1;
            if let Err(e) = sink.emit(val) {
                tracing::warn!(error = %e, byte = val, "output port write failed");
            }
        }
    }
}
