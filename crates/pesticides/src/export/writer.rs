//! File output: encode the rendered text, then write it in one pass.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use encoding_rs::{Encoding, EncoderResult, UTF_8};
use tracing::{debug, info};

use crate::catalog::Product;
use crate::error::{Error, Result};

use super::format::ExportFormat;

/// Resolve a WHATWG encoding label (e.g. "utf-8", "windows-1252", "shift_jis")
pub fn resolve_encoding(label: &str) -> Result<&'static Encoding> {
    Encoding::for_label(label.trim().as_bytes())
        .map(Encoding::output_encoding)
        .ok_or_else(|| Error::UnknownEncoding(label.to_string()))
}

/// Encode text without replacement characters.
///
/// Fails on the first character the target encoding cannot represent.
pub fn encode_text(text: &str, encoding: &'static Encoding) -> Result<Vec<u8>> {
    if encoding == UTF_8 {
        return Ok(text.as_bytes().to_vec());
    }

    let mut encoder = encoding.new_encoder();
    let capacity = encoder
        .max_buffer_length_from_utf8_without_replacement(text.len())
        .unwrap_or(text.len());
    let mut output = Vec::with_capacity(capacity);
    let mut remaining = text;

    loop {
        let (result, read) =
            encoder.encode_from_utf8_to_vec_without_replacement(remaining, &mut output, true);
        remaining = &remaining[read..];

        match result {
            EncoderResult::InputEmpty => return Ok(output),
            EncoderResult::OutputFull => output.reserve(remaining.len().max(16)),
            EncoderResult::Unmappable(c) => {
                let consumed = text.len() - remaining.len();
                let line = text[..consumed].matches('\n').count() + 1;
                return Err(Error::EncodingError(format!(
                    "character {:?} (U+{:04X}) on line {} cannot be represented in {}",
                    c,
                    c as u32,
                    line,
                    encoding.name()
                )));
            }
        }
    }
}

/// Render products with the given exporter and write them to `path`.
///
/// The file is created or truncated. Encoding happens before the file is
/// opened, so an encoding failure leaves the destination untouched.
/// Returns the number of products written.
pub fn write_export<E: ExportFormat + ?Sized>(
    path: &Path,
    exporter: &E,
    products: &[Product],
    encoding: &'static Encoding,
) -> Result<usize> {
    let content = exporter.format_rows(products)?;
    debug!(
        "Rendered {} products ({} bytes of text)",
        products.len(),
        content.len()
    );

    let bytes = encode_text(&content, encoding)?;
    debug!("Encoded output as {} ({} bytes)", encoding.name(), bytes.len());

    let file = File::create(path).map_err(|e| Error::write(path, e))?;
    let mut writer = BufWriter::new(file);
    writer
        .write_all(&bytes)
        .map_err(|e| Error::write(path, e))?;
    writer.flush().map_err(|e| Error::write(path, e))?;

    info!("Wrote {} products to {}", products.len(), path.display());
    Ok(products.len())
}
