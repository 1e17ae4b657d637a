//! CLI argument parsing for rtlstat

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// Output format for the feature table
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// CSV for spreadsheet analysis (default)
    Csv,
    /// JSON for machine parsing
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "rtlstat")]
#[command(version)]
#[command(about = "Batch Yosys statistics extraction for RTL feature datasets", long_about = None)]
pub struct Cli {
    /// Explicit RTL files to process (bypasses the rtl<N>.v naming scheme)
    pub files: Vec<PathBuf>,

    /// Base directory for the rtl<N>.v naming scheme
    #[arg(
        short = 'd',
        long = "rtl-dir",
        value_name = "DIR",
        default_value = "rtl_codes"
    )]
    pub rtl_dir: PathBuf,

    /// How many rtl<N>.v files to enumerate
    #[arg(short = 'n', long = "count", value_name = "N", default_value = "10")]
    pub count: u32,

    /// Process every .v file under --rtl-dir instead of the numbered scheme
    #[arg(long = "scan", conflicts_with = "files")]
    pub scan: bool,

    /// Output file path (default: yosys_features.csv or .json per --format)
    #[arg(short = 'o', long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Output format (csv or json)
    #[arg(long = "format", value_enum, default_value = "csv")]
    pub format: OutputFormat,

    /// Yosys executable to invoke
    #[arg(long = "yosys", value_name = "PROG", default_value = "yosys")]
    pub yosys: String,

    /// Kill a Yosys run after this many seconds (unbounded if omitted)
    #[arg(long = "timeout", value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Enable trace-level diagnostics on stderr
    #[arg(long = "debug")]
    pub debug: bool,
}

impl Cli {
    /// Output path, defaulting per the selected format
    pub fn output_path(&self) -> PathBuf {
        self.output.clone().unwrap_or_else(|| match self.format {
            OutputFormat::Csv => PathBuf::from("yosys_features.csv"),
            OutputFormat::Json => PathBuf::from("yosys_features.json"),
        })
    }
}
