//! it8grid - profcheck report to IT8.7/2 workbook
//!
//! Reads the verbose output of ArgyllCMS `profcheck` and lays the per-patch
//! dE values out the way the patches sit on an IT8.7/2 chart.

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::prelude::*;

mod convert;

#[derive(Parser, Debug)]
#[command(name = "it8grid")]
#[command(author, version, about = "Converts an ArgyllCMS profcheck report to an IT8.7/2 xlsx grid")]
#[command(long_about = "
Converts the output of `profcheck -v` for an IT8.7/2 target into an xlsx
workbook with two sheets:

  IT8.7-2   dE per patch in chart layout, filled with the reference color
            and colored by severity
  Grades    patches grouped by severity band

Examples:
  it8grid display.txt                       # writes display.xlsx
  it8grid display.txt out/report.xlsx
  it8grid display.txt --nopatchfill --nocolorgrade
  it8grid display.txt --grades strict.yaml
")]
pub struct Cli {
    /// profcheck report file
    pub input: PathBuf,

    /// Output workbook (default: INPUT with .xlsx extension)
    pub output: Option<PathBuf>,

    /// Don't fill cells with the patch reference color
    #[arg(long)]
    pub nopatchfill: bool,

    /// Disable severity colors for dE values
    #[arg(long)]
    pub nocolorgrade: bool,

    /// YAML file with custom severity bands
    #[arg(long, value_name = "FILE")]
    pub grades: Option<PathBuf>,

    /// Verbose logging (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

fn init_logging(verbose: u8) {
    let fallback = match verbose {
        0 => "it8grid=warn",
        1 => "it8grid=info",
        2 => "it8grid=debug",
        _ => "it8grid=trace",
    };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| fallback.into()))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .without_time(),
        )
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let output = convert::run(&cli)?;
    println!("Done. xlsx file saved as {}", output.display());
    Ok(())
}
