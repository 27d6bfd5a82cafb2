//! TSV export format implementation

use crate::catalog::Product;
use crate::error::Result;

use super::csv::{format_delimited_header, format_delimited_row};
use super::format::ExportFormat;

/// TSV (Tab-Separated Values) exporter
#[derive(Debug, Clone, Copy, Default)]
pub struct TsvExporter;

impl ExportFormat for TsvExporter {
    fn header(&self) -> Result<Option<String>> {
        format_delimited_header(b'\t').map(Some)
    }

    fn format_row(&self, product: &Product) -> Result<String> {
        format_delimited_row(b'\t', product)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{COLUMNS, PESTICIDES};

    #[test]
    fn test_tsv_header() {
        let header = TsvExporter.header().unwrap().unwrap();
        assert_eq!(header, COLUMNS.join("\t"));
    }

    #[test]
    fn test_tsv_row_does_not_quote_commas() {
        let row = TsvExporter.format_row(&PESTICIDES[0]).unwrap();
        assert_eq!(
            row,
            "Actara\tthiamethoxam\tNYS, LI\t100-938\t4A\t3.5\t12\t5\tExcellent\tExcellent"
        );
    }
}
