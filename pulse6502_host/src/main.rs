use std::io;
use std::path::PathBuf;
use std::sync::atomic::Ordering;
use std::time::Duration;

use ansi_term::Colour;
use anyhow::anyhow;
use clap::Parser;
use log::LevelFilter;

use pulse6502_host::{
    parse_address_range, parse_program, read_program_file, AppResult, Clock, StopReason, System,
    SystemConfiguration,
};

/// Pulse driven 6502 like processor simulator
/// The program is flashed at address 0 and executed one clock pulse at a
/// time until it breaks.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct CommandLineArguments {
    /// Program as hexadecimal bytes ("A9 01 00")
    #[arg(short, long, conflicts_with = "filepath")]
    program: Option<String>,

    /// File holding the program as hexadecimal text
    #[arg(short, long)]
    filepath: Option<PathBuf>,

    /// Milliseconds between two clock pulses
    #[arg(short, long, default_value_t = 0)]
    interval_ms: u64,

    /// Stop the clock after this many pulses
    #[arg(short, long)]
    max_pulses: Option<u64>,

    /// Text queued in the interrupt input buffer at startup
    #[arg(long)]
    input: Option<String>,

    /// Memory range dumped at shutdown in debug mode (START:END)
    #[arg(long, value_parser = parse_address_range)]
    dump_memory: Option<(u16, u16)>,

    /// Print the pipeline trace at halt
    #[arg(short, long)]
    debug: bool,
}

impl CommandLineArguments {
    fn read_program(&self) -> AppResult<Vec<u8>> {
        match (&self.program, &self.filepath) {
            (Some(text), _) => parse_program(text),
            (None, Some(path)) => read_program_file(path),
            (None, None) => Err(anyhow!("either --program or --filepath is required")),
        }
    }
}

fn main() -> AppResult<()> {
    let parameters = CommandLineArguments::parse();
    let default_level = if parameters.debug {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    env_logger::Builder::new()
        .filter_level(default_level)
        .parse_default_env()
        .init();

    let program = parameters.read_program()?;
    let configuration = SystemConfiguration {
        debug: parameters.debug,
        memory_dump: parameters.dump_memory,
    };
    let mut system = System::startup(configuration, &program, io::stdout())?;
    if let Some(input) = &parameters.input {
        system.host_mut().queue_input(input.as_bytes());
    }

    let clock = Clock::new(
        Duration::from_millis(parameters.interval_ms),
        parameters.max_pulses,
    );
    let interrupted = clock.interrupt_handle();
    ctrlc::set_handler(move || {
        interrupted.store(true, Ordering::SeqCst);
    })?;

    println!("{}", Colour::Blue.bold().paint("Output: "));
    let summary = clock.run(&mut system);
    println!();

    match summary.reason {
        StopReason::Shutdown => println!(
            "{}",
            Colour::Green.paint(format!("System halted after {} pulses.", summary.pulses))
        ),
        StopReason::PulseLimit => println!(
            "{}",
            Colour::Yellow.paint(format!("Pulse limit reached ({} pulses).", summary.pulses))
        ),
        StopReason::Interrupted => println!(
            "{}",
            Colour::Red.paint(format!(
                "Execution interrupted by CTRL+C after {} pulses!",
                summary.pulses
            ))
        ),
    }

    if let Some(report) = system.shutdown()? {
        println!("{}", Colour::Fixed(240).paint(report));
    }

    Ok(())
}
