//! Export command: write the product table to disk.

use anyhow::Result;
use pesticides::prelude::*;
use tracing::info;

use crate::cli::Args;

/// Write the product table as described by the parsed arguments
pub fn run(args: &Args) -> Result<usize> {
    let encoding = resolve_encoding(&args.encoding)?;
    let format = OutputFormat::from(args.format);

    info!(
        "Exporting product table as {} ({})",
        format,
        encoding.name()
    );

    let output = args.output_path();
    let count = export_catalog(&output, format, encoding).map_err(|e| {
        let hint = if e.is_not_found() {
            ": parent directory does not exist"
        } else {
            ""
        };
        anyhow::Error::new(e).context(format!("Failed to export to {}{}", output.display(), hint))
    })?;

    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::ExportFormat;
    use tempfile::TempDir;

    fn make_args(output: std::path::PathBuf, encoding: &str) -> Args {
        Args {
            output: Some(output),
            format: ExportFormat::Csv,
            encoding: encoding.to_string(),
        }
    }

    #[test]
    fn test_run_writes_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("pesticides.csv");

        let count = run(&make_args(path.clone(), "utf-8")).unwrap();
        assert_eq!(count, 20);

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("Actara,thiamethoxam,\"NYS, LI\",100-938,4A,3.5,12,5"));
    }

    #[test]
    fn test_run_reports_missing_directory() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("missing").join("pesticides.csv");

        let err = run(&make_args(path, "utf-8")).unwrap_err();
        let message = format!("{:#}", err);
        assert!(message.contains("Failed to export"), "{}", message);
        assert!(message.contains("parent directory does not exist"), "{}", message);
    }

    #[test]
    fn test_run_rejects_unknown_encoding() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("pesticides.csv");

        assert!(run(&make_args(path.clone(), "not-an-encoding")).is_err());
        assert!(!path.exists());
    }
}
