//! rtlstat - batch Yosys statistics extraction for RTL feature datasets
//!
//! This library provides the building blocks of the rtlstat pipeline:
//! input enumeration, Yosys invocation with captured output, table-driven
//! extraction of design statistics from report text, and CSV/JSON table
//! serialization.

pub mod cli;
pub mod csv_output;
pub mod extractor;
pub mod json_output;
pub mod pipeline;
pub mod rtl;
pub mod synth;
