use ballclock::core::execution::survey::survey;
use ballclock::{
    ClockError, ConcurrencyMode, CycleReport, SimulationConfig, SurveyMethod, MAX_BALLS, MIN_BALLS,
};
use clap::Parser;
use log::error;
use std::process;
use std::time::Instant;

/// Report the cycle length of every ball clock in a range
#[derive(Parser, Debug)]
#[command(name = "cycle_survey")]
struct Cli {
    /// Smallest ball count to survey
    #[arg(
        long,
        default_value_t = MIN_BALLS as u8,
        value_parser = clap::value_parser!(u8).range(27..=127)
    )]
    from: u8,

    /// Largest ball count to survey
    #[arg(
        long,
        default_value_t = MAX_BALLS as u8,
        value_parser = clap::value_parser!(u8).range(27..=127)
    )]
    to: u8,

    /// Evaluate clocks on a Rayon thread pool
    #[arg(long)]
    parallel: bool,

    /// Thread pool size for --parallel
    #[arg(long, requires = "parallel")]
    threads: Option<usize>,

    /// Step every clock minute by minute instead of deriving the cycle from one half day
    #[arg(long)]
    simulate: bool,

    /// Minute ceiling for --simulate
    #[arg(long)]
    max_steps: Option<u64>,

    /// Print the reports as a JSON array
    #[arg(long)]
    json: bool,
}

impl Cli {
    fn config(&self) -> SimulationConfig {
        let mut config = SimulationConfig::new();
        if self.parallel {
            config = config.with_concurrency(ConcurrencyMode::Rayon);
        }
        if let Some(threads) = self.threads {
            config = config.with_thread_pool_size(threads);
        }
        if let Some(max_steps) = self.max_steps {
            config = config.with_max_steps(max_steps);
        }
        config
    }

    fn method(&self) -> SurveyMethod {
        if self.simulate {
            SurveyMethod::Simulate
        } else {
            SurveyMethod::Permutation
        }
    }
}

fn print_reports(reports: &[CycleReport], json: bool) -> Result<(), ClockError> {
    if json {
        println!("{}", serde_json::to_string_pretty(reports)?);
    } else {
        for report in reports {
            println!("{report}");
        }
    }
    Ok(())
}

fn main() {
    let start = Instant::now();

    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Warn)
        .format_timestamp(None)
        .init();

    let cli = Cli::parse();
    let range = usize::from(cli.from)..=usize::from(cli.to);

    let result = survey(range, &cli.config(), cli.method())
        .and_then(|reports| print_reports(&reports, cli.json));
    if let Err(err) = result {
        error!("{err}");
        eprintln!("cycle_survey: {err}");
        process::exit(2);
    }

    let elapsed = start.elapsed();
    println!(
        "Completed in {} milliseconds ({:.3} seconds)",
        elapsed.as_millis(),
        elapsed.as_secs_f64()
    );
}
