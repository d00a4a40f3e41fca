//! MHF virtual machine CLI.
//!
//! This binary loads one MHF program image and runs it. It performs:
//! 1. **Setup:** Builds the machine configuration from defaults, an optional JSON file
//!    and command-line overrides, and installs the stderr log subscriber.
//! 2. **Run:** Loads the image, executes it with port output on stdout, prints the
//!    stop diagnostic and the register dump.
//! 3. **Inspection:** Optionally lists the loaded code instead of running it, or
//!    prints execution statistics afterwards.

use std::path::PathBuf;
use std::process;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use mhfvm_core::config::Config;
use mhfvm_core::{RunOutcome, Simulator};

#[derive(Parser, Debug)]
#[command(
    name = "mhfvm",
    author,
    version,
    about = "MHF virtual machine",
    long_about = "Load an MHF program image (.mhfb) and run it.\n\nBytes stored to the output port appear on stdout; the final register state is printed when the CPU halts or faults.\n\nExamples:\n  mhfvm hello.mhfb\n  mhfvm --max-steps 10000 --stats loop.mhfb\n  mhfvm --disassemble hello.mhfb"
)]
struct Cli {
    /// Program image to run.
    program: PathBuf,

    /// JSON configuration file.
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Stop after this many instructions (overrides the configuration).
    #[arg(long, value_name = "N")]
    max_steps: Option<u64>,

    /// Fault on out-of-range register indices instead of skipping the effect.
    #[arg(long)]
    strict_registers: bool,

    /// Log every executed instruction to stderr.
    #[arg(long)]
    trace: bool,

    /// Print a listing of the loaded code starting at the entry point instead of running it.
    #[arg(long)]
    disassemble: bool,

    /// Print execution statistics to stderr after the register dump.
    #[arg(long)]
    stats: bool,
}

fn main() {
    let cli = Cli::try_parse().unwrap_or_else(|e| {
        let code = i32::from(e.use_stderr());
        let _ = e.print();
        process::exit(code);
    });

    init_logging(cli.trace);

    let config = build_config(&cli);
    let mut sim = Simulator::new(&config);

    if let Err(e) = sim.load_file(&cli.program) {
        eprintln!("Error loading program: {e}");
        process::exit(1);
    }

    if cli.disassemble {
        for line in sim.disassemble() {
            println!("{line}");
        }
        return;
    }

    let outcome = sim.run();
    if outcome == RunOutcome::Halted {
        println!();
    }
    println!("{outcome}");
    print!("{}", sim.report());

    if cli.stats {
        sim.machine.stats.print();
    }
}

/// Installs the stderr log subscriber.
///
/// `RUST_LOG` is honored; without it only warnings are shown. `--trace` forces
/// trace level so per-instruction logs are visible.
fn init_logging(trace: bool) {
    let filter = if trace {
        EnvFilter::new("trace")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Builds the configuration: defaults, then the config file, then flags.
///
/// Exits the process with an error message if the config file is unusable.
fn build_config(cli: &Cli) -> Config {
    let mut config = match &cli.config {
        Some(path) => Config::from_file(path).unwrap_or_else(|e| {
            eprintln!("Error loading configuration: {e}");
            process::exit(1);
        }),
        None => Config::default(),
    };

    if cli.max_steps.is_some() {
        config.execution.max_steps = cli.max_steps;
    }
    if cli.strict_registers {
        config.execution.strict_registers = true;
    }
    if cli.trace {
        config.execution.trace_instructions = true;
    }
    config
}
