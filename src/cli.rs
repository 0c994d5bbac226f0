//! CLI argument parsing for lcovtrim

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "lcovtrim")]
#[command(version)]
#[command(about = "Strip compiler-toolchain records from an LCOV trace file", long_about = None)]
pub struct Cli {
    /// Filtered trace file to write
    #[arg(value_name = "OUTPUT")]
    pub output: PathBuf,

    /// LCOV trace file to read
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,
}
