use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use rtlstat::{
    cli::{Cli, OutputFormat},
    csv_output::CsvTable,
    json_output, pipeline, rtl,
    synth::SynthConfig,
};
use tracing_subscriber::EnvFilter;

/// Initialize tracing subscriber for debug output
fn init_tracing(debug: bool) {
    if debug {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::from_default_env().add_directive(tracing::Level::TRACE.into()),
            )
            .with_writer(std::io::stderr)
            .init();
    }
}

/// Resolve the input list from the CLI selection: explicit files, a
/// directory scan, or the rtl<N>.v naming scheme.
fn resolve_inputs(args: &Cli) -> Result<Vec<PathBuf>> {
    if !args.files.is_empty() {
        return Ok(args.files.clone());
    }
    if args.scan {
        return rtl::scan_dir(&args.rtl_dir);
    }
    Ok(rtl::numbered_files(&args.rtl_dir, args.count))
}

fn main() -> Result<()> {
    let args = Cli::parse();

    init_tracing(args.debug);

    let files = resolve_inputs(&args)?;
    if files.is_empty() {
        anyhow::bail!("Nothing to process: no RTL files selected");
    }

    let config = pipeline::PipelineConfig {
        synth: SynthConfig {
            program: args.yosys.clone(),
            timeout: args.timeout.map(Duration::from_secs),
        },
    };

    let run = pipeline::run(&files, &config);

    let output_path = args.output_path();
    let rendered = match args.format {
        OutputFormat::Csv => CsvTable::from_records(run.records).to_csv(),
        OutputFormat::Json => json_output::render(&run.records)?,
    };
    std::fs::write(&output_path, rendered)
        .with_context(|| format!("Failed to write output file: {}", output_path.display()))?;

    println!("All features extracted and saved to {}", output_path.display());
    Ok(())
}
