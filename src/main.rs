//! Launcher for the one-shot process information endpoint.
//!
//! Activates the engine with exactly one selector, drains the endpoint
//! until a zero-byte read, relays every chunk verbatim to stdout, then
//! deactivates. Log output goes to stderr so stdout carries nothing but
//! the report text.

use std::io::{self, Write};
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use proc_info::config::page_size;
use proc_info::InfoFile;
use tracing_subscriber::EnvFilter;

/// Report one process's identity, lineage, ownership, scheduling state and
/// memory footprint.
#[derive(Parser, Debug)]
#[command(name = "proc-info", version, about)]
struct Cli {
    /// PID of the process to report on.
    #[arg(long)]
    pid: Option<u32>,

    /// Name of the process to report on (exact, case-sensitive).
    #[arg(long)]
    name: Option<String>,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .with_target(false)
        .init();

    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::from(1)
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    // Selector exclusivity is the engine's contract, not clap's: activation
    // refuses both-set and neither-set itself.
    let file = InfoFile::new(cli.pid, cli.name).context("failed to activate")?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut buf = vec![0u8; page_size()];
    let mut handle = file.open();
    loop {
        let n = handle
            .read(&mut buf)
            .context("read from the endpoint failed")?;
        if n == 0 {
            break;
        }
        out.write_all(&buf[..n]).context("failed to relay report")?;
    }
    out.flush().context("failed to flush stdout")?;
    Ok(())
}
