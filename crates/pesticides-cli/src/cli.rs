use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use pesticides::OutputFormat;

#[derive(Parser, Debug)]
#[command(name = "pesticides")]
#[command(about = "Write the insecticide product table to a delimited file")]
#[command(version)]
pub struct Args {
    /// Destination file (created or overwritten) [default: pesticides.<format>]
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = ExportFormat::Csv)]
    pub format: ExportFormat,

    /// Character encoding label for the output file
    #[arg(short, long, default_value = "utf-8")]
    pub encoding: String,
}

/// Base name of the output file when `--output` is not given
const DEFAULT_STEM: &str = "pesticides";

impl Args {
    /// Destination path, falling back to `pesticides.<extension>`
    pub fn output_path(&self) -> PathBuf {
        self.output.clone().unwrap_or_else(|| {
            PathBuf::from(DEFAULT_STEM).with_extension(OutputFormat::from(self.format).extension())
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Tsv,
    Json,
}

impl From<ExportFormat> for OutputFormat {
    fn from(value: ExportFormat) -> Self {
        match value {
            ExportFormat::Csv => OutputFormat::Csv,
            ExportFormat::Tsv => OutputFormat::Tsv,
            ExportFormat::Json => OutputFormat::Json,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_without_arguments() {
        let args = Args::try_parse_from(["pesticides"]).unwrap();
        assert_eq!(args.output, None);
        assert_eq!(args.output_path(), PathBuf::from("pesticides.csv"));
        assert_eq!(args.format, ExportFormat::Csv);
        assert_eq!(args.encoding, "utf-8");
    }

    #[test]
    fn test_explicit_arguments() {
        let args = Args::try_parse_from([
            "pesticides",
            "-o",
            "out/table.tsv",
            "--format",
            "tsv",
            "--encoding",
            "windows-1252",
        ])
        .unwrap();
        assert_eq!(args.output_path(), PathBuf::from("out/table.tsv"));
        assert_eq!(OutputFormat::from(args.format), OutputFormat::Tsv);
        assert_eq!(args.encoding, "windows-1252");
    }

    #[test]
    fn test_default_output_follows_format() {
        let args = Args::try_parse_from(["pesticides", "--format", "json"]).unwrap();
        assert_eq!(args.output_path(), PathBuf::from("pesticides.jsonl"));

        let args = Args::try_parse_from(["pesticides", "-f", "tsv"]).unwrap();
        assert_eq!(args.output_path(), PathBuf::from("pesticides.tsv"));
    }

    #[test]
    fn test_unknown_format_rejected() {
        assert!(Args::try_parse_from(["pesticides", "--format", "xlsx"]).is_err());
    }
}
