use std::path::PathBuf;
use thiserror::Error;

/// Result type for scan operations
pub type ScanResult<T> = Result<T, ScanError>;

/// Errors that can occur during scan operations.
///
/// Only `ConfigError` is treated as fatal by callers; the per-file and
/// per-match variants are converted to skips inside the scan engine so one
/// unreadable or undecodable file never aborts the broader scan.
#[derive(Error, Debug)]
pub enum ScanError {
    #[error("Configuration error: {0}")]
    ConfigError(String),
    #[error("File not found: {0}")]
    FileNotFound(PathBuf),
    #[error("Permission denied: {0}")]
    PermissionDenied(PathBuf),
    #[error("Invalid pattern: {0}")]
    InvalidPattern(String),
    #[error("Extraction failed for {path}: {reason}")]
    ExtractionFailed { path: PathBuf, reason: String },
    #[error("Invalid UTF-8 in file {path}: {source}")]
    EncodingError {
        path: PathBuf,
        source: std::string::FromUtf8Error,
    },
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

impl ScanError {
    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::ConfigError(msg.into())
    }

    pub fn file_not_found(path: impl Into<PathBuf>) -> Self {
        Self::FileNotFound(path.into())
    }

    pub fn permission_denied(path: impl Into<PathBuf>) -> Self {
        Self::PermissionDenied(path.into())
    }

    pub fn invalid_pattern(pattern: impl Into<String>) -> Self {
        Self::InvalidPattern(pattern.into())
    }

    pub fn extraction_failed(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::ExtractionFailed {
            path: path.into(),
            reason: reason.into(),
        }
    }

    pub fn encoding_error(path: impl Into<PathBuf>, source: std::string::FromUtf8Error) -> Self {
        Self::EncodingError {
            path: path.into(),
            source,
        }
    }

    /// Whether this error aborts the run or only the current path.
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::ConfigError(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_error_creation() {
        let path = Path::new("test.txt");
        let err = ScanError::file_not_found(path);
        assert!(matches!(err, ScanError::FileNotFound(_)));

        let err = ScanError::permission_denied(path);
        assert!(matches!(err, ScanError::PermissionDenied(_)));

        let err = ScanError::invalid_pattern("(unclosed");
        assert!(matches!(err, ScanError::InvalidPattern(_)));

        let err = ScanError::extraction_failed(path, "payload is not valid JSON");
        assert!(matches!(err, ScanError::ExtractionFailed { .. }));
    }

    #[test]
    fn test_error_messages() {
        let err = ScanError::config_error("regex pattern is empty");
        assert_eq!(err.to_string(), "Configuration error: regex pattern is empty");

        let err = ScanError::invalid_pattern("(unclosed");
        assert_eq!(err.to_string(), "Invalid pattern: (unclosed");

        let err = ScanError::file_not_found("missing.log");
        assert_eq!(err.to_string(), "File not found: missing.log");

        let err = ScanError::extraction_failed("data.gz", "gzip: unexpected EOF");
        assert_eq!(
            err.to_string(),
            "Extraction failed for data.gz: gzip: unexpected EOF"
        );
    }

    #[test]
    fn test_fatality() {
        assert!(ScanError::config_error("bad flags").is_fatal());
        assert!(!ScanError::invalid_pattern("(").is_fatal());
        assert!(!ScanError::extraction_failed("a.gz", "gzip").is_fatal());
    }
}
