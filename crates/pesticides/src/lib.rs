//! # pesticides
//!
//! Fixed insecticide product table and its flat-file export.
//!
//! This crate provides:
//! - Typed product records (rate, re-entry and pre-harvest intervals, efficacy)
//! - The compile-time product table
//! - CSV, TSV and NDJSON exporters
//! - Encoding-aware file output

pub mod catalog;
pub mod error;
pub mod export;
pub mod prelude;

pub use catalog::{COLUMNS, EffectRating, Efficacy, PESTICIDES, PreHarvestInterval, Product};
pub use error::{Error, Result};
pub use export::{
    CsvExporter, ExportFormat, JsonExporter, OutputFormat, RECORD_TERMINATOR, TsvExporter,
    encode_text, export_catalog, resolve_encoding, write_export,
};
