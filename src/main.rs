use anyhow::{Context, Result};
use clap::Parser;
use lcovtrim::{cli::Cli, filter};
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use tracing_subscriber::EnvFilter;

/// Initialize tracing subscriber for debug output (RUST_LOG driven)
fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let args = Cli::parse();

    init_tracing();

    let source = File::open(&args.input)
        .with_context(|| format!("cannot open trace file {}", args.input.display()))?;
    let destination = File::create(&args.output)
        .with_context(|| format!("cannot create output file {}", args.output.display()))?;

    tracing::debug!(
        input = %args.input.display(),
        output = %args.output.display(),
        "filtering LCOV trace"
    );

    let mut reader = BufReader::new(source);
    let mut writer = BufWriter::new(destination);
    filter::filter(&mut reader, &mut writer)?;
    writer
        .flush()
        .with_context(|| format!("cannot write output file {}", args.output.display()))?;

    Ok(())
}
