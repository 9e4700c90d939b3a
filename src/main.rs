//! One-shot responder (default binary).
//!
//! Reads a full think request from stdin, writes one placement response line
//! to stdout and always exits with status 0. Logs never go to stdout.

use std::fs::OpenOptions;
use std::io::{self, Read, Write};
use std::str::FromStr;
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing::level_filters::LevelFilter;
use tracing::{warn, Level};

use puyo_ai::adapter::{Responder, ResponderConfig};

fn main() {
    let config = ResponderConfig::from_env();
    init_logging(&config);

    if let Err(e) = run(Responder::new(config)) {
        tracing::error!("{:#}", e);
    }
}

fn run(responder: Responder) -> Result<()> {
    let mut input = Vec::new();
    if let Err(e) = io::stdin().lock().read_to_end(&mut input) {
        // Answer with whatever was read; a truncated request degrades like any other.
        warn!("failed to read stdin: {}", e);
    }

    let line = responder.handle(&input);

    let mut out = io::stdout().lock();
    writeln!(out, "{}", line).context("write response")?;
    out.flush().context("flush stdout")?;
    Ok(())
}

fn init_logging(config: &ResponderConfig) {
    let level = Level::from_str(&config.log_level).unwrap_or(Level::WARN);
    let builder = tracing_subscriber::fmt()
        .with_max_level(LevelFilter::from_level(level))
        .with_target(false)
        .with_ansi(false);

    let file = config.log_path.as_deref().and_then(|path| {
        OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|e| eprintln!("[puyo-ai] cannot open log file {}: {}", path, e))
            .ok()
    });

    // A second init (e.g. under a test harness) is not an error worth failing on.
    let _ = match file {
        Some(f) => builder.with_writer(Mutex::new(f)).try_init(),
        None => builder.with_writer(io::stderr).try_init(),
    };
}
