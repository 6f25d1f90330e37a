mod checks;
mod perf;
mod report;
mod timer;

use std::{process, str::FromStr};

use clap::{App, Arg};
use log::{error, info};
use scoped_threadpool::Pool;

use half16::hardware;

use crate::{report::CheckFailure, timer::Timer};

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// What to run, as picked on the command line.
#[derive(Debug, Copy, Clone)]
struct Config {
    sweep_floats: bool,
    threads: u32,
    perf_count: Option<usize>,
    use_hardware: bool,
    require_hardware: bool,
}

fn main() {
    let args = App::new("halfcheck")
        .version(VERSION)
        .about("Verifies the half16 float <-> half conversions against each other, the half crate, and the CPU")
        .arg(
            Arg::with_name("floats")
                .long("floats")
                .help("Also encode all 2^32 float bit patterns with every encoder.  Takes a while."),
        )
        .arg(
            Arg::with_name("threads")
                .short("t")
                .long("threads")
                .value_name("N")
                .help(
                    "Number of threads to sweep the floats with.  Defaults to the number of \
                     logical cores on the system.",
                )
                .takes_value(true)
                .validator(|s| match u32::from_str(&s) {
                    Ok(n) if n > 0 => Ok(()),
                    _ => Err("must be a positive integer".to_string()),
                }),
        )
        .arg(
            Arg::with_name("perf")
                .short("p")
                .long("perf")
                .value_name("N")
                .help("Time each conversion path over N random values.")
                .takes_value(true)
                .validator(|s| match usize::from_str(&s) {
                    Ok(n) if n > 0 => Ok(()),
                    _ => Err("must be a positive integer".to_string()),
                }),
        )
        .arg(
            Arg::with_name("no_hardware")
                .long("no-hardware")
                .help("Skip the cross-checks against the CPU's half conversion.")
                .conflicts_with("require_hardware"),
        )
        .arg(
            Arg::with_name("require_hardware")
                .long("require-hardware")
                .help("Fail if the CPU can't do half conversion, instead of skipping those checks."),
        )
        .get_matches();

    env_logger::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config {
        sweep_floats: args.is_present("floats"),
        threads: args
            .value_of("threads")
            .and_then(|s| u32::from_str(s).ok())
            .unwrap_or(num_cpus::get() as u32),
        perf_count: args.value_of("perf").and_then(|s| usize::from_str(s).ok()),
        use_hardware: !args.is_present("no_hardware"),
        require_hardware: args.is_present("require_hardware"),
    };

    if let Err(e) = run(&config) {
        error!("{}", e);
        process::exit(1);
    }
}

fn run(config: &Config) -> Result<(), CheckFailure> {
    let use_hardware = config.use_hardware && hardware::available();
    if config.use_hardware && !use_hardware {
        if config.require_hardware {
            return Err(CheckFailure::HardwareUnavailable);
        }
        info!("No hardware half conversion on this CPU, skipping those checks.");
    }

    let mut t = Timer::new();
    let mut reports = Vec::new();

    reports.push(checks::subnormal_cross_check());
    reports.push(checks::half_round_trip());
    #[cfg(feature = "decode_table")]
    reports.push(checks::decode_paths());
    reports.push(checks::reference_decode());
    if use_hardware {
        reports.push(checks::hardware_decode());
        reports.push(checks::hardware_encode());
    }
    info!("Half checks done in {:.3}s", t.tick());

    if config.sweep_floats {
        info!("Sweeping all floats with {} threads...", config.threads);
        let mut pool = Pool::new(config.threads);
        reports.extend(checks::float_sweep(&mut pool, use_hardware));
        info!("Float sweep done in {:.3}s", t.tick());
    }

    println!();
    for report in reports.iter() {
        println!("{}", report);
    }

    if let Some(count) = config.perf_count {
        println!();
        perf::run(count, use_hardware);
    }

    info!("Done in {:.3}s", t.total());

    match CheckFailure::from_reports(&reports) {
        Some(failure) => Err(failure),
        None => Ok(()),
    }
}
