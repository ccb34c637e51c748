//! qsort -- test and measure timing for the Quicksort algorithm.

// Enforce explicit error handling - no panicking in production code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

use std::env;
use std::ffi::OsString;
use std::io::{self, BufWriter, Write};
use std::process::ExitCode;

use clap::error::ErrorKind;
use clap::{Command, CommandFactory, Parser};
use tracing::{debug, warn};

use qsort::{Error, Measurement, PivotPolicy, Result, SortConfig};

const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    "\nCopyright ",
    env!("CARGO_PKG_AUTHORS"),
    "\nLicense: Apache License, Version 2.0, available at",
    "\n  http://www.apache.org/licenses/LICENSE-2.0",
    "\nThis program comes with ABSOLUTELY NO WARRANTY.",
);

/// Sort an array of random integers and report the result and the sort time
#[derive(Parser, Debug)]
#[command(name = "qsort", version, long_version = LONG_VERSION, about, long_about = None)]
struct Cli {
    /// Number of random integers to sort
    #[arg(short, long, value_name = "COUNT")]
    count: Option<usize>,

    /// Print out the sorted array
    #[arg(short, long)]
    print: bool,

    /// Print the sort time in nanoseconds
    #[arg(short, long)]
    timing: bool,

    /// Pivot selection policy
    #[arg(long, value_enum, default_value_t = PivotPolicy::MedianOfThree)]
    pivot: PivotPolicy,

    /// Seed of the random source [default: process id]
    #[arg(long, value_name = "SEED")]
    seed: Option<u64>,
}

fn main() -> ExitCode {
    // Log to stderr so stdout only carries the sorted values and the timing.
    let _ = tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .try_init();

    let args = strip_unknown_options(&mut Cli::command(), env::args_os().collect());

    let cli = match Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            return match err.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ExitCode::SUCCESS,
                _ => ExitCode::FAILURE,
            };
        }
    };

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(Error::MissingCount) => {
            eprintln!("{}", Error::MissingCount);
            eprintln!("{}", Cli::command().render_help());
            ExitCode::FAILURE
        }
        Err(err) => {
            debug!(error = ?err, "run failed");
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let count = match cli.count {
        Some(count) if count > 0 => count,
        _ => return Err(Error::MissingCount),
    };

    let mut config = SortConfig::new(cli.pivot);
    if let Some(seed) = cli.seed {
        config = config.with_seed(seed);
    }

    let measurement = Measurement::run(count, &config)?;

    let mut out = BufWriter::new(io::stdout().lock());
    if cli.print {
        writeln!(out, "{}", measurement.braced())?;
    }
    if cli.timing {
        writeln!(out, "{}", measurement.elapsed_nanos())?;
    }
    out.flush()?;

    Ok(())
}

/// Drops options `cmd` does not define, warning about each one, so they are skipped instead of
/// failing the run. Values of known options are kept even when they look like options.
fn strip_unknown_options(cmd: &mut Command, args: Vec<OsString>) -> Vec<OsString> {
    // Registers the generated --help and --version arguments.
    cmd.build();

    let mut kept = Vec::with_capacity(args.len());
    let mut args = args.into_iter();
    kept.extend(args.next());

    while let Some(arg) = args.next() {
        let Some(token) = arg.to_str() else {
            kept.push(arg);
            continue;
        };

        if token == "--" {
            kept.push(arg);
            kept.extend(args);
            break;
        }

        if let Some(long) = token.strip_prefix("--") {
            let (name, inline_value) = match long.split_once('=') {
                Some((name, _)) => (name, true),
                None => (long, false),
            };

            match cmd.get_arguments().find(|a| a.get_long() == Some(name)) {
                Some(known) => {
                    let value_pending = known.get_action().takes_values() && !inline_value;
                    kept.push(arg);
                    if value_pending {
                        kept.extend(args.next());
                    }
                }
                None => warn!("ignoring unrecognized option '{token}'"),
            }
        } else if let Some(shorts) = token.strip_prefix('-').filter(|s| !s.is_empty()) {
            let mut cluster = String::from("-");
            let mut value_pending = false;

            for (i, c) in shorts.char_indices() {
                match cmd.get_arguments().find(|a| a.get_short() == Some(c)) {
                    Some(known) if known.get_action().takes_values() => {
                        // The rest of the cluster is the value.
                        cluster.push_str(&shorts[i..]);
                        value_pending = i + c.len_utf8() == shorts.len();
                        break;
                    }
                    Some(_) => cluster.push(c),
                    None => warn!("ignoring unrecognized option '-{c}'"),
                }
            }

            if cluster.len() > 1 {
                kept.push(cluster.into());
            }
            if value_pending {
                kept.extend(args.next());
            }
        } else {
            kept.push(arg);
        }
    }

    kept
}
