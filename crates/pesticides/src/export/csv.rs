//! CSV export format implementation

use csv::{QuoteStyle, Terminator, Writer, WriterBuilder};

use crate::catalog::{COLUMNS, Product};
use crate::error::{Error, Result};

use super::format::{ExportFormat, RECORD_TERMINATOR};

/// CSV (Comma-Separated Values) exporter
#[derive(Debug, Clone, Copy, Default)]
pub struct CsvExporter;

impl ExportFormat for CsvExporter {
    fn header(&self) -> Result<Option<String>> {
        format_delimited_header(b',').map(Some)
    }

    fn format_row(&self, product: &Product) -> Result<String> {
        format_delimited_row(b',', product)
    }
}

/// Quotes only where needed: fields holding the delimiter, a quote or a
/// line break. Embedded quotes are doubled.
fn line_writer(delimiter: u8) -> Writer<Vec<u8>> {
    WriterBuilder::new()
        .delimiter(delimiter)
        .has_headers(false)
        .quote_style(QuoteStyle::Necessary)
        .terminator(Terminator::Any(RECORD_TERMINATOR as u8))
        .from_writer(Vec::new())
}

fn finish_line(writer: Writer<Vec<u8>>) -> Result<String> {
    let bytes = writer
        .into_inner()
        .map_err(|e| Error::Csv(e.into_error().into()))?;
    let mut line =
        String::from_utf8(bytes).map_err(|e| Error::EncodingError(e.to_string()))?;
    if line.ends_with(RECORD_TERMINATOR) {
        line.pop();
    }
    Ok(line)
}

/// Generate the header line for a delimited format
pub(crate) fn format_delimited_header(delimiter: u8) -> Result<String> {
    let mut writer = line_writer(delimiter);
    writer.write_record(COLUMNS)?;
    finish_line(writer)
}

/// Generate one data line for a delimited format
pub(crate) fn format_delimited_row(delimiter: u8, product: &Product) -> Result<String> {
    let mut writer = line_writer(delimiter);
    writer.serialize(product)?;
    finish_line(writer)
}
