//! Execution statistics collection and reporting.
//!
//! This module tracks per-machine counters. It provides:
//! 1. **Steps:** Instructions retired and host wall-clock time.
//! 2. **Instruction mix:** Counts by instruction kind (NOP, HALT, LOAD, ADD, STORE).
//! 3. **I/O:** Bytes emitted through the output port.
//! 4. **Anomalies:** Instructions whose effect was skipped due to invalid registers.

use std::time::Instant;

use crate::isa::Instruction;

/// Execution statistics of one machine.
#[derive(Clone, Debug, Default)]
pub struct SimStats {
    start_time: Option<Instant>,
    /// Number of instructions retired.
    pub steps: u64,

    /// Count of NOP instructions retired.
    pub inst_nop: u64,
    /// Count of HALT instructions retired.
    pub inst_halt: u64,
    /// Count of LOAD instructions retired.
    pub inst_load: u64,
    /// Count of ADD instructions retired.
    pub inst_add: u64,
    /// Count of STORE instructions retired.
    pub inst_store: u64,

    /// Bytes emitted through the memory-mapped output port.
    pub port_writes: u64,
    /// Instructions retired without effect because they named an invalid register.
    pub skipped_effects: u64,
}

impl SimStats {
    /// Records one retired instruction.
    pub const fn record(&mut self, inst: &Instruction) {
        self.steps += 1;
        match inst {
            Instruction::Nop => self.inst_nop += 1,
            Instruction::Halt => self.inst_halt += 1,
            Instruction::LoadImm { .. } => self.inst_load += 1,
            Instruction::Add { .. } => self.inst_add += 1,
            Instruction::Store { .. } => self.inst_store += 1,
        }
    }

    /// Starts the wall-clock timer if it is not already running.
    pub fn start_timer(&mut self) {
        if self.start_time.is_none() {
            self.start_time = Some(Instant::now());
        }
    }

    /// Returns `true` once the first instruction has been dispatched.
    pub const fn is_started(&self) -> bool {
        self.start_time.is_some()
    }

    /// Returns the host time elapsed since execution started, in seconds.
    ///
    /// Zero until the machine runs, so loading is never counted.
    pub fn host_seconds(&self) -> f64 {
        self.start_time
            .map_or(0.0, |start| start.elapsed().as_secs_f64())
    }

    /// Prints a summary to stderr.
    pub fn print(&self) {
        let pct = |n: u64| {
            if self.steps == 0 {
                0.0
            } else {
                (n as f64 / self.steps as f64) * 100.0
            }
        };

        eprintln!("\n==========================================================");
        eprintln!("MHF VM EXECUTION STATISTICS");
        eprintln!("==========================================================");
        eprintln!("host_seconds             {:.4} s", self.host_seconds());
        eprintln!("sim_insts                {}", self.steps);
        eprintln!("----------------------------------------------------------");
        eprintln!("INSTRUCTION MIX");
        eprintln!("  op.nop                 {} ({:.2}%)", self.inst_nop, pct(self.inst_nop));
        eprintln!("  op.halt                {} ({:.2}%)", self.inst_halt, pct(self.inst_halt));
        eprintln!("  op.load                {} ({:.2}%)", self.inst_load, pct(self.inst_load));
        eprintln!("  op.add                 {} ({:.2}%)", self.inst_add, pct(self.inst_add));
        eprintln!("  op.store               {} ({:.2}%)", self.inst_store, pct(self.inst_store));
        eprintln!("----------------------------------------------------------");
        eprintln!("  io.port_writes         {}", self.port_writes);
        eprintln!("  skipped_effects        {}", self.skipped_effects);
        eprintln!("==========================================================");
    }
}
