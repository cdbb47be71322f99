use flate2::read::MultiGzDecoder;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use tracing::trace;

use crate::errors::{ScanError, ScanResult};

/// Suffix-based format detection; content sniffing is deliberately not done.
pub const GZIP_SUFFIX: &str = ".gz";

const BUFFER_CAPACITY: usize = 65536;

/// Returns the logical text content of `path`.
///
/// Ordinary files are read as UTF-8. Files carrying the gzip suffix are
/// decompressed, decoded, parsed as JSON and re-serialized with 4-space
/// indentation; a gzip payload that is not valid JSON is an extraction
/// failure, not raw text. Callers treat every error here as "no content for
/// this path" and move on.
pub fn extract(path: &Path) -> ScanResult<String> {
    if path.to_string_lossy().ends_with(GZIP_SUFFIX) {
        extract_gzip(path)
    } else {
        read_text(path)
    }
}

fn read_text(path: &Path) -> ScanResult<String> {
    trace!("reading {}", path.display());
    let bytes = std::fs::read(path).map_err(|e| map_io_error(path, e))?;
    String::from_utf8(bytes).map_err(|e| ScanError::encoding_error(path, e))
}

fn extract_gzip(path: &Path) -> ScanResult<String> {
    trace!("decompressing {}", path.display());
    let file = File::open(path).map_err(|e| map_io_error(path, e))?;
    let mut decoder = MultiGzDecoder::new(BufReader::with_capacity(BUFFER_CAPACITY, file));

    let mut bytes = Vec::new();
    decoder
        .read_to_end(&mut bytes)
        .map_err(|e| ScanError::extraction_failed(path, format!("gzip: {e}")))?;

    let text = String::from_utf8(bytes).map_err(|e| ScanError::encoding_error(path, e))?;
    prettify_json(path, &text)
}

/// Re-serializes a JSON payload with stable 4-space indentation.
fn prettify_json(path: &Path, text: &str) -> ScanResult<String> {
    let value: serde_json::Value = serde_json::from_str(text)
        .map_err(|e| ScanError::extraction_failed(path, format!("payload is not valid JSON: {e}")))?;

    let mut out = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut out, formatter);
    value.serialize(&mut serializer)?;

    String::from_utf8(out).map_err(|e| ScanError::encoding_error(path, e))
}

fn map_io_error(path: &Path, e: std::io::Error) -> ScanError {
    match e.kind() {
        std::io::ErrorKind::NotFound => ScanError::file_not_found(path),
        std::io::ErrorKind::PermissionDenied => ScanError::permission_denied(path),
        _ => ScanError::IoError(e),
    }
}
