//! JSON export format implementation

use crate::catalog::Product;
use crate::error::Result;

use super::format::ExportFormat;

/// JSON exporter (one object per line, NDJSON format)
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonExporter;

impl ExportFormat for JsonExporter {
    fn header(&self) -> Result<Option<String>> {
        Ok(None) // NDJSON doesn't need a header
    }

    fn format_row(&self, product: &Product) -> Result<String> {
        Ok(serde_json::to_string(product)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{PESTICIDES, PreHarvestInterval};
    use serde_json::Value as JsonValue;

    #[test]
    fn test_json_row_keys_and_types() {
        let row = JsonExporter.format_row(&PESTICIDES[0]).unwrap();
        let value: JsonValue = serde_json::from_str(&row).unwrap();
        assert_eq!(value["Product"], "Actara");
        assert_eq!(value["Use Restrictions"], "NYS, LI");
        assert_eq!(value["Rate/A"], 3.5);
        assert_eq!(value["REI (hours)"], 12);
        assert_eq!(value["PHI (days)"], 5);
    }

    #[test]
    fn test_json_rows_round_trip() {
        let content = JsonExporter.format_rows(&PESTICIDES).unwrap();
        let parsed: Vec<Product> = content
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect();
        assert_eq!(parsed.as_slice(), PESTICIDES.as_slice());
        assert_eq!(parsed[13].phi, PreHarvestInterval::UNTIL_DRY);
    }
}
