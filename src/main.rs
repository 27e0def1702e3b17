use std::{io, path::PathBuf, process::ExitCode};

use clap::{Parser, ValueEnum};
use i8080::{devices::StreamIO, load_image, FaultPolicy, State, I8080};
use log::error;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OnUnimplemented {
    Abort,
    Skip,
}
impl From<OnUnimplemented> for FaultPolicy {
    fn from(value: OnUnimplemented) -> Self {
        match value {
            OnUnimplemented::Abort => FaultPolicy::Abort,
            OnUnimplemented::Skip => FaultPolicy::Skip,
        }
    }
}

/// Runs a raw 8080 program image loaded at 0x0000 until it halts.
/// The memory-mapped input and output registers are wired to stdin and stdout.
#[derive(Parser, Debug)]
#[command(name = "i8080", version)]
struct Args {
    /// Path to the program image
    image: PathBuf,

    /// What to do when an opcode has no implementation
    #[arg(long, value_enum, default_value_t = OnUnimplemented::Abort)]
    on_unimplemented: OnUnimplemented,

    /// Give up after this many instructions
    #[arg(long)]
    max_steps: Option<u64>,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let args = Args::parse();

    let mut mem = match load_image(&args.image) {
        Ok(mem) => mem,
        Err(e) => {
            error!("{e}");
            return ExitCode::FAILURE;
        }
    };

    let io = StreamIO::new(io::stdin().lock(), io::stdout().lock());
    let mut cpu = I8080::new(&mut mem, io);
    let policy = args.on_unimplemented.into();

    let result = match args.max_steps {
        Some(max_steps) => cpu.run_for_steps(max_steps, policy).map(|_| ()),
        None => cpu.run_with(policy),
    };
    if let Err(e) = result {
        error!("{e}");
        return ExitCode::FAILURE;
    }

    if cpu.state() != State::Halted {
        error!(
            "no halt within {} steps, stopped at {:#06x}",
            args.max_steps.unwrap_or_default(),
            cpu.pc()
        );
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
