//! Sequential batch pipeline: invoke, extract, aggregate
//!
//! Each file is fully processed before the next; a failed invocation is
//! reported and skipped without aborting the run.

use std::path::PathBuf;

use crate::extractor::{FeatureExtractor, FeatureRecord};
use crate::synth::{self, SynthConfig};

/// Pipeline configuration
#[derive(Debug, Clone, Default)]
pub struct PipelineConfig {
    /// Synthesis tool invocation settings
    pub synth: SynthConfig,
}

/// Outcome of a pipeline run
#[derive(Debug)]
pub struct PipelineRun {
    /// One record per successfully processed file, in input order
    pub records: Vec<FeatureRecord>,
    /// Number of files whose invocation failed and were skipped
    pub failed: usize,
}

/// Process each file in order: run the synthesis tool, extract statistics
/// from its report, and collect one record per success.
///
/// Prints `Processed: <file>` per success and an error line per failure;
/// failed files produce no record.
pub fn run(files: &[PathBuf], config: &PipelineConfig) -> PipelineRun {
    let extractor = FeatureExtractor::new();
    let mut records = Vec::new();
    let mut failed = 0;

    for file in files {
        let label = file.display().to_string();
        match synth::run_stat(file, &config.synth) {
            Ok(report) => {
                records.push(extractor.extract_record(&label, &report));
                println!("Processed: {label}");
            }
            Err(err) => {
                eprintln!("Error processing {label}: {err}");
                failed += 1;
            }
        }
    }

    tracing::debug!(processed = records.len(), failed, "pipeline finished");
    PipelineRun { records, failed }
}
