//! ExportFormat trait definition

use crate::catalog::Product;
use crate::error::Result;

/// Line terminator used after every line, header included
pub const RECORD_TERMINATOR: char = '\n';

/// Trait for export format implementations
///
/// Provides a common interface for different export formats (CSV, TSV, JSON)
pub trait ExportFormat {
    /// Returns the header line for the format (None for formats without headers)
    fn header(&self) -> Result<Option<String>>;

    /// Format a single product, without the line terminator
    fn format_row(&self, product: &Product) -> Result<String>;

    /// Format the header followed by every product, one per line
    fn format_rows(&self, products: &[Product]) -> Result<String> {
        let mut output = String::new();
        if let Some(header) = self.header()? {
            output.push_str(&header);
            output.push(RECORD_TERMINATOR);
        }
        for product in products {
            output.push_str(&self.format_row(product)?);
            output.push(RECORD_TERMINATOR);
        }
        Ok(output)
    }
}
