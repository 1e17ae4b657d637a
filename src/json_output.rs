//! JSON output format for feature tables

use serde::{Deserialize, Serialize};

use crate::extractor::FeatureRecord;

/// A single feature record as serialized to JSON.
///
/// Keys carry the human-readable column names so the JSON and CSV outputs
/// describe the same table; absent statistics serialize as explicit nulls.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRecord {
    #[serde(rename = "Number of wires")]
    pub wires: Option<u64>,
    #[serde(rename = "Number of wire bits")]
    pub wire_bits: Option<u64>,
    #[serde(rename = "Number of public wires")]
    pub public_wires: Option<u64>,
    #[serde(rename = "Number of public wire bits")]
    pub public_wire_bits: Option<u64>,
    #[serde(rename = "Number of memories")]
    pub memories: Option<u64>,
    #[serde(rename = "Number of memory bits")]
    pub memory_bits: Option<u64>,
    #[serde(rename = "Number of processes")]
    pub processes: Option<u64>,
    #[serde(rename = "Number of cells")]
    pub cells: Option<u64>,
    #[serde(rename = "File Name")]
    pub file_name: String,
}

impl From<&FeatureRecord> for JsonRecord {
    fn from(record: &FeatureRecord) -> Self {
        let [wires, wire_bits, public_wires, public_wire_bits, memories, memory_bits, processes, cells] =
            record.values;
        Self {
            wires,
            wire_bits,
            public_wires,
            public_wire_bits,
            memories,
            memory_bits,
            processes,
            cells,
            file_name: record.file_name.clone(),
        }
    }
}

/// Render an ordered sequence of records as a pretty-printed JSON array
pub fn render(records: &[FeatureRecord]) -> serde_json::Result<String> {
    let rows: Vec<JsonRecord> = records.iter().map(JsonRecord::from).collect();
    serde_json::to_string_pretty(&rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extractor::FeatureExtractor;

    #[test]
    fn test_json_record_keys_and_nulls() {
        let record = FeatureExtractor::new().extract_record(
            "rtl_codes/rtl1.v",
            "Number of wires:      12\nNumber of cells:      34\n",
        );
        let json = render(std::slice::from_ref(&record)).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();

        let row = &parsed[0];
        assert_eq!(row["Number of wires"], 12);
        assert_eq!(row["Number of cells"], 34);
        assert!(row["Number of memories"].is_null());
        assert_eq!(row["File Name"], "rtl_codes/rtl1.v");
    }

    #[test]
    fn test_json_empty_table_is_empty_array() {
        let json = render(&[]).unwrap();
        assert_eq!(json, "[]");
    }

    #[test]
    fn test_json_row_order_matches_input() {
        let extractor = FeatureExtractor::new();
        let records = vec![
            extractor.extract_record("rtl1.v", ""),
            extractor.extract_record("rtl2.v", ""),
        ];
        let parsed: serde_json::Value =
            serde_json::from_str(&render(&records).unwrap()).unwrap();
        assert_eq!(parsed[0]["File Name"], "rtl1.v");
        assert_eq!(parsed[1]["File Name"], "rtl2.v");
    }

    #[test]
    fn test_json_round_trip() {
        let record = FeatureExtractor::new().extract_record("rtl1.v", "Number of cells:  4\n");
        let json = render(std::slice::from_ref(&record)).unwrap();
        let rows: Vec<JsonRecord> = serde_json::from_str(&json).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].cells, Some(4));
        assert_eq!(rows[0].wires, None);
    }
}
