//! Feature extraction from Yosys `stat` report text
//!
//! Table-driven line matcher: one compiled pattern per statistic field,
//! applied to every line of the report.

use regex::Regex;

/// The statistic fields reported by the Yosys `stat` command, in report order.
pub const STAT_FIELDS: [&str; 8] = [
    "Number of wires",
    "Number of wire bits",
    "Number of public wires",
    "Number of public wire bits",
    "Number of memories",
    "Number of memory bits",
    "Number of processes",
    "Number of cells",
];

/// Per-field statistic values, indexed like [`STAT_FIELDS`].
pub type StatValues = [Option<u64>; STAT_FIELDS.len()];

/// Extracted statistics for a single RTL file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeatureRecord {
    /// Source file this record was extracted from
    pub file_name: String,
    /// Statistic values, indexed like [`STAT_FIELDS`]
    pub values: StatValues,
}

impl FeatureRecord {
    /// Look up a statistic by its field name
    pub fn get(&self, field: &str) -> Option<u64> {
        STAT_FIELDS
            .iter()
            .position(|name| *name == field)
            .and_then(|idx| self.values[idx])
    }
}

/// Matches statistic lines of the form `<field name>:   <digits>`
#[derive(Debug)]
pub struct FeatureExtractor {
    /// One pattern per entry in [`STAT_FIELDS`]
    patterns: Vec<Regex>,
}

impl FeatureExtractor {
    /// Compile the field-name pattern table
    pub fn new() -> Self {
        let patterns = STAT_FIELDS
            .iter()
            // Field names are escaped so a future name with metacharacters
            // still matches as literal text.
            .map(|name| {
                Regex::new(&format!(r"{}:\s+(\d+)", regex::escape(name)))
                    .expect("field pattern compiles")
            })
            .collect();
        Self { patterns }
    }

    /// Extract all statistic fields from report text.
    ///
    /// Every line is tested against every field pattern. A later matching
    /// line overwrites an earlier value for the same field (last match
    /// wins). Fields that never match stay `None`. Never fails, even for
    /// empty input.
    pub fn extract(&self, report: &str) -> StatValues {
        let mut values: StatValues = Default::default();

        for line in report.lines() {
            for (idx, pattern) in self.patterns.iter().enumerate() {
                if let Some(caps) = pattern.captures(line) {
                    if let Ok(value) = caps[1].parse::<u64>() {
                        values[idx] = Some(value);
                    }
                }
            }
        }

        values
    }

    /// Extract a full record, tagging it with the source file name
    pub fn extract_record(&self, file_name: &str, report: &str) -> FeatureRecord {
        FeatureRecord {
            file_name: file_name.to_string(),
            values: self.extract(report),
        }
    }
}

impl Default for FeatureExtractor {
    fn default() -> Self {
        Self::new()
    }
}
