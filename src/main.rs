use ballclock::{ClockError, SimulationConfig, SimulationEngine};
use clap::error::ErrorKind;
use clap::Parser;
use log::{debug, error};
use std::process;
use std::time::Instant;

const USAGE: &str = "clock <int between 27 and 127> <int (optional, invokes mode 2)>

Clock is a simulation of a ball clock.  It works in one of two modes:
1 - Cycle Days.
Cycle Days expects one integer parameter between 27 and 127.
The simulation runs until the main queue of balls rotates around
to match the original order. This mode reports the number of days
the cycle would take, and the program execution time.
2 - Clock State.
Clock State expects two integer parameters. The first parameter,
like mode 1, is expected to be in the range of 27 to 127.
The second parameter is the number of \"minutes\" for the simulation
to run, and then report the state of each of the queues.";

/// Ball clock simulator
#[derive(Parser, Debug)]
#[command(name = "clock")]
struct Cli {
    /// Number of balls in the clock
    #[arg(value_parser = clap::value_parser!(u8).range(27..=127))]
    ball_count: u8,

    /// Minutes to run before reporting every queue
    #[arg(value_parser = clap::value_parser!(u64))]
    minutes: Option<u64>,

    /// Print a human-readable clock summary to stderr when done
    #[arg(long)]
    status: bool,
}

fn usage(code: i32) -> ! {
    println!("{USAGE}");
    process::exit(code);
}

fn run(cli: &Cli, start: Instant) -> Result<(), ClockError> {
    let mut engine = SimulationEngine::new(usize::from(cli.ball_count), SimulationConfig::new())?;

    match cli.minutes {
        Some(minutes) => {
            let snapshot = engine.run_for_minutes(minutes)?;
            println!("{}", snapshot.to_json()?);
        }
        None => {
            let report = engine.run_cycle()?;
            println!("{report}");
            let elapsed = start.elapsed();
            println!(
                "Completed in {} milliseconds ({:.3} seconds)",
                elapsed.as_millis(),
                elapsed.as_secs_f64()
            );
        }
    }

    if cli.status {
        eprint!("{}", engine.status());
    }
    Ok(())
}

fn main() {
    let start = Instant::now();

    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Warn)
        .format_timestamp(None)
        .init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            debug!("argument error: {err}");
            match err.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => usage(0),
                _ => usage(1),
            }
        }
    };

    if let Err(err) = run(&cli, start) {
        error!("{err}");
        eprintln!("clock: {err}");
        process::exit(if err.is_invalid_argument() { 1 } else { 2 });
    }
}
