//! # Main — CLI Entry Point
//!
//! Thin shell around [`rieselhunt::is_prime`]: parse `h` and `n`, configure
//! logging, run the test, print a single line to stdout.
//!
//! Logging is entirely a shell concern — the engine only emits `tracing`
//! events. `-t LEVEL` routes them to stderr, `-f LEVEL` to a daily-rolling
//! file under `./logs/`; level 0 disables a sink.
//!
//! Exit codes: 0 for a completed test (including precondition verdicts about
//! the input), 1 for command-line errors, nonzero panic for unparseable
//! integers, 2 for internal engine faults.

use clap::error::ErrorKind;
use clap::Parser;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::Layer;

use rieselhunt::{is_prime, RieselNumber};

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

#[derive(Parser)]
#[command(
    name = "rieselhunt",
    about = "Test the primality of numbers of the form h*2^n - 1"
)]
struct Cli {
    /// Multiplier h of the candidate h*2^n - 1
    h: String,

    /// Exponent n of the candidate h*2^n - 1
    n: String,

    /// Level of logs written to stderr {0 = none; 1 = warning; 2 = info; 3 = debug}
    #[arg(short = 't', value_name = "LEVEL", default_value_t = 0,
          value_parser = clap::value_parser!(u8).range(0..=3))]
    terminal_level: u8,

    /// Level of logs written to rolling files under ./logs {0 = none; 1 = warning; 2 = info; 3 = debug}
    #[arg(short = 'f', value_name = "LEVEL", default_value_t = 0,
          value_parser = clap::value_parser!(u8).range(0..=3))]
    file_level: u8,
}

fn level_filter(level: u8) -> LevelFilter {
    match level {
        0 => LevelFilter::OFF,
        1 => LevelFilter::WARN,
        2 => LevelFilter::INFO,
        _ => LevelFilter::DEBUG,
    }
}

/// Install the stderr and rolling-file log sinks. The returned guard must
/// stay alive so the file writer flushes on exit.
fn init_logging(terminal_level: u8, file_level: u8) -> Option<tracing_appender::non_blocking::WorkerGuard> {
    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_filter(level_filter(terminal_level));

    let (file_layer, guard) = if file_level > 0 {
        let appender = tracing_appender::rolling::daily("./logs", "logFile.log");
        let (writer, guard) = tracing_appender::non_blocking(appender);
        let layer = tracing_subscriber::fmt::layer()
            .with_writer(writer)
            .with_ansi(false)
            .with_target(false)
            .with_filter(level_filter(file_level));
        (Some(layer), Some(guard))
    } else {
        (None, None)
    };

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(file_layer)
        .init();

    guard
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            // Help and version requests are not errors.
            let code = match err.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
                _ => 1,
            };
            let _ = err.print();
            std::process::exit(code);
        }
    };

    let _file_guard = init_logging(cli.terminal_level, cli.file_level);

    // A non-numeric h or n is an internal fault, not a usage error.
    let h: u64 = cli
        .h
        .parse()
        .unwrap_or_else(|e| panic!("could not parse h = {:?}: {e}", cli.h));
    let n: u64 = cli
        .n
        .parse()
        .unwrap_or_else(|e| panic!("could not parse n = {:?}: {e}", cli.n));

    let r = match RieselNumber::new(h, n) {
        Ok(r) => r,
        Err(err) => {
            // The input fell outside the Riesel form; that verdict is the
            // single line of output.
            println!("{err}");
            return;
        }
    };

    match is_prime(&r) {
        Ok(result) => println!("{result}"),
        Err(err) => {
            println!("{err}");
            std::process::exit(2);
        }
    }
}
