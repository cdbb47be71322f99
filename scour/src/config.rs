use config::{Config as ConfigBuilder, File};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::errors::{ScanError, ScanResult};

/// Default number of scan workers when neither the CLI nor a config file
/// specifies one.
pub const DEFAULT_WORKER_COUNT: usize = 10;

/// What each discovered path is matched against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScanMode {
    /// Extract file contents (decompressing `.gz` payloads) and match those.
    Contents,
    /// Match the path string itself; nothing is read from disk.
    Names,
}

impl ScanMode {
    /// Builds a mode from the two CLI booleans, rejecting both-set and
    /// neither-set up front instead of deep in the scan.
    pub fn from_flags(contents: bool, names: bool) -> ScanResult<Self> {
        match (contents, names) {
            (true, false) => Ok(Self::Contents),
            (false, true) => Ok(Self::Names),
            (true, true) => Err(ScanError::config_error(
                "--contents and --names cannot both be set",
            )),
            (false, false) => Err(ScanError::config_error(
                "must provide either --contents or --names",
            )),
        }
    }
}

/// The user's pattern specification: a raw regex or a contains-literal
/// shorthand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PatternSpec {
    Regex(String),
    Contains(String),
}

impl PatternSpec {
    /// Builds a spec from the two optional CLI flags. Exactly one must be
    /// present; anything else is a fatal configuration error.
    pub fn from_flags(regex: Option<String>, contains: Option<String>) -> ScanResult<Self> {
        match (regex, contains) {
            (Some(_), Some(_)) => Err(ScanError::config_error(
                "specifying a regex pattern and a contains flag is not allowed",
            )),
            (None, None) => Err(ScanError::config_error("regex pattern is empty")),
            (Some(r), None) => Ok(Self::Regex(r)),
            (None, Some(c)) => Ok(Self::Contains(c)),
        }
    }

    /// The effective regular expression for this spec.
    ///
    /// Contains-literals are escaped before wrapping, so metacharacters in
    /// the literal match themselves rather than leaking regex syntax.
    pub fn effective_pattern(&self) -> String {
        match self {
            Self::Regex(r) => r.clone(),
            Self::Contains(c) => format!(".*{}.*", regex::escape(c)),
        }
    }
}

/// A validated scan request, constructed once at process start and immutable
/// thereafter. Debug and error-suppression travel here rather than in any
/// ambient state.
#[derive(Debug, Clone)]
pub struct ScanConfig {
    /// File or directory the scan starts from
    pub root_path: PathBuf,
    /// Whether paths are matched by content or by name
    pub mode: ScanMode,
    /// Descend into subdirectories, or list one level only
    pub recursive: bool,
    /// Number of scan workers; 1 runs the scan in the calling thread
    pub worker_count: usize,
    /// The pattern to match
    pub pattern: PatternSpec,
    /// Verbose tracing requested
    pub debug: bool,
    /// Suppress non-fatal error reporting
    pub suppress_errors: bool,
}

impl ScanConfig {
    pub fn validate(&self) -> ScanResult<()> {
        if self.worker_count < 1 {
            return Err(ScanError::config_error("worker count must be at least 1"));
        }
        Ok(())
    }
}

/// Optional YAML configuration file, merged underneath CLI flags.
///
/// Locations in order of precedence:
/// 1. Custom config file specified via `--config`
/// 2. Local `.scour.yaml` in the current directory
/// 3. Global `$HOME/.config/scour/config.yaml`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConfigFile {
    #[serde(default)]
    pub regex: Option<String>,
    #[serde(default)]
    pub contains: Option<String>,
    #[serde(default)]
    pub workers: Option<usize>,
    #[serde(default)]
    pub recursive: Option<bool>,
    #[serde(default)]
    pub debug: Option<bool>,
    #[serde(default)]
    pub suppress_errors: Option<bool>,
}

impl ConfigFile {
    /// Loads configuration from the default locations plus an optional
    /// explicit path. Missing files are skipped, not errors.
    pub fn load(config_path: Option<&Path>) -> ScanResult<Self> {
        let mut builder = ConfigBuilder::builder();

        let config_files = [
            dirs::config_dir().map(|p| p.join("scour/config.yaml")),
            Some(PathBuf::from(".scour.yaml")),
            config_path.map(PathBuf::from),
        ];

        for path in config_files.iter().flatten() {
            if path.exists() {
                builder = builder.add_source(File::from(path.as_path()));
            }
        }

        builder
            .build()
            .and_then(|c| c.try_deserialize())
            .map_err(|e| ScanError::config_error(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_from_flags() {
        assert_eq!(ScanMode::from_flags(true, false).unwrap(), ScanMode::Contents);
        assert_eq!(ScanMode::from_flags(false, true).unwrap(), ScanMode::Names);
        assert!(ScanMode::from_flags(true, true).is_err());
        assert!(ScanMode::from_flags(false, false).is_err());
    }

    #[test]
    fn test_pattern_spec_mutual_exclusivity() {
        let err = PatternSpec::from_flags(Some(".*".into()), Some("x".into())).unwrap_err();
        assert!(matches!(err, ScanError::ConfigError(_)));

        let err = PatternSpec::from_flags(None, None).unwrap_err();
        assert!(matches!(err, ScanError::ConfigError(_)));

        let spec = PatternSpec::from_flags(Some("err.*".into()), None).unwrap();
        assert_eq!(spec, PatternSpec::Regex("err.*".into()));
    }

    #[test]
    fn test_contains_is_escaped() {
        let spec = PatternSpec::from_flags(None, Some("a.b".into())).unwrap();
        assert_eq!(spec.effective_pattern(), r".*a\.b.*");
    }

    #[test]
    fn test_regex_passes_through() {
        let spec = PatternSpec::Regex(r"\berror\b".into());
        assert_eq!(spec.effective_pattern(), r"\berror\b");
    }

    #[test]
    fn test_worker_count_validation() {
        let config = ScanConfig {
            root_path: PathBuf::from("."),
            mode: ScanMode::Names,
            recursive: false,
            worker_count: 0,
            pattern: PatternSpec::Contains("x".into()),
            debug: false,
            suppress_errors: false,
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_file_defaults_when_nothing_present() {
        // No config files exist in a scratch directory; all fields default.
        let loaded = ConfigFile::default();
        assert!(loaded.regex.is_none());
        assert!(loaded.workers.is_none());
    }
}
