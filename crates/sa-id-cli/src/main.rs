//! `sa-id` command-line binary.

use std::io::Write;
use std::process::ExitCode;

use clap::Parser;
use sa_id_cli::cli::{default_delimiter, Cli, Command};
use sa_id_cli::{exit_status, run_batch, run_check};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    let result = match &cli.command {
        Command::Check(args) => run_check(args, &mut out),
        Command::Batch(args) => run_batch(args, default_delimiter(), &mut out),
    }
    .and_then(|all_valid| {
        out.flush()?;
        Ok(all_valid)
    });

    if let Err(e) = &result {
        eprintln!("error: {}", e);
    }
    ExitCode::from(exit_status(&result))
}

/// Logs go to stderr. `-v` flags take precedence over `RUST_LOG`.
fn init_tracing(verbose: u8) {
    let filter = match verbose {
        0 => tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| "warn".into()),
        1 => "info".into(),
        2 => "debug".into(),
        _ => "trace".into(),
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}
