//! Export of the product table to flat files.
//!
//! - **CSV**: comma-separated with header (default)
//! - **TSV**: tab-separated with header
//! - **JSON**: one object per line, no header
//!
//! Every line, header included, ends with `\n`. No row-index column is
//! written.

mod csv;
mod format;
mod json;
mod tsv;
mod writer;

use std::path::Path;

use encoding_rs::Encoding;
use strum::{Display, EnumIter, EnumString, IntoStaticStr};

use crate::catalog::PESTICIDES;
use crate::error::Result;

pub use self::csv::CsvExporter;
pub use format::{ExportFormat, RECORD_TERMINATOR};
pub use json::JsonExporter;
pub use tsv::TsvExporter;
pub use writer::{encode_text, resolve_encoding, write_export};

/// Output format selector
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, EnumString, EnumIter, IntoStaticStr, Display,
)]
#[strum(serialize_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Csv,
    Tsv,
    Json,
}

impl OutputFormat {
    pub fn exporter(&self) -> Box<dyn ExportFormat> {
        match self {
            Self::Csv => Box::new(CsvExporter),
            Self::Tsv => Box::new(TsvExporter),
            Self::Json => Box::new(JsonExporter),
        }
    }

    /// Conventional file extension for the format
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Tsv => "tsv",
            Self::Json => "jsonl",
        }
    }
}

/// Write the fixed product table to `path`
pub fn export_catalog(
    path: &Path,
    format: OutputFormat,
    encoding: &'static Encoding,
) -> Result<usize> {
    write_export(path, format.exporter().as_ref(), &PESTICIDES, encoding)
}
