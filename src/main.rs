use anyhow::{Context, Result};
use clap::Parser;
use moveable::logging;
use moveable::replay::{self, Script};
use std::io::{self, Write};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Replay a scripted drag and print its callbacks",
    long_about = None
)]
struct Args {
    /// JSON script describing the element, options and steps
    script: PathBuf,

    /// Write tracing output to stderr (filter with RUST_LOG)
    #[arg(long, default_value_t = false)]
    log: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    if args.log {
        logging::init();
    }

    let json = std::fs::read_to_string(&args.script)
        .with_context(|| format!("Failed to read script {}", args.script.display()))?;
    let script = Script::from_json(&json)
        .with_context(|| format!("Invalid script {}", args.script.display()))?;

    let records = replay::run(&script);

    // One JSON object per line
    let mut out = io::stdout().lock();
    for record in &records {
        let line = serde_json::to_string(record).context("Failed to encode record")?;
        writeln!(out, "{line}").context("Failed to write output")?;
    }
    Ok(())
}
