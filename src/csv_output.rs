//! CSV output format for feature tables

use crate::extractor::{FeatureRecord, STAT_FIELDS};

/// CSV table of per-file feature records
#[derive(Debug, Default)]
pub struct CsvTable {
    records: Vec<FeatureRecord>,
}

impl CsvTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Create a table from an ordered sequence of records
    pub fn from_records(records: Vec<FeatureRecord>) -> Self {
        Self { records }
    }

    /// Append a record to the table
    pub fn add_record(&mut self, record: FeatureRecord) {
        self.records.push(record);
    }

    /// Generate the header row: the statistic fields, then the file name
    fn header() -> String {
        let mut headers: Vec<&str> = STAT_FIELDS.to_vec();
        headers.push("File Name");
        headers.join(",")
    }

    /// Escape CSV field (handle commas, quotes, newlines)
    fn escape_field(field: &str) -> String {
        // If field contains comma, quote, or newline, wrap in quotes and escape quotes
        if field.contains(',') || field.contains('"') || field.contains('\n') {
            format!("\"{}\"", field.replace('"', "\"\""))
        } else {
            field.to_string()
        }
    }

    /// Format one record as a CSV row; absent statistics render as empty cells
    fn format_record(record: &FeatureRecord) -> String {
        let mut fields: Vec<String> = record
            .values
            .iter()
            .map(|value| value.map(|v| v.to_string()).unwrap_or_default())
            .collect();
        fields.push(Self::escape_field(&record.file_name));
        fields.join(",")
    }

    /// Generate CSV output as string
    pub fn to_csv(&self) -> String {
        let mut output = String::new();

        output.push_str(&Self::header());
        output.push('\n');

        for record in &self.records {
            output.push_str(&Self::format_record(record));
            output.push('\n');
        }

        output
    }
}
