use dashmap::DashMap;
use once_cell::sync::Lazy;
use regex::Regex;
use std::sync::Arc;

use crate::config::PatternSpec;
use crate::errors::{ScanError, ScanResult};

/// Process-wide cache of compiled patterns. A `None` entry records a pattern
/// that failed to compile, so the failure is looked up rather than recompiled
/// on every path.
static PATTERN_CACHE: Lazy<DashMap<String, Option<Arc<Regex>>>> = Lazy::new(DashMap::new);

/// Applies one effective pattern to text or path strings.
///
/// Construction never fails: a malformed pattern is carried as a sentinel and
/// every subsequent match attempt reports `ScanError::InvalidPattern` instead
/// of panicking, so a bad pattern degrades the scan rather than aborting it.
#[derive(Debug, Clone)]
pub struct PatternMatcher {
    pattern: String,
    compiled: Option<Arc<Regex>>,
}

impl PatternMatcher {
    pub fn new(spec: &PatternSpec) -> Self {
        Self::from_pattern(spec.effective_pattern())
    }

    pub fn from_pattern(pattern: String) -> Self {
        let compiled = if let Some(entry) = PATTERN_CACHE.get(&pattern) {
            entry.clone()
        } else {
            let compiled = Regex::new(&pattern).ok().map(Arc::new);
            PATTERN_CACHE.insert(pattern.clone(), compiled.clone());
            compiled
        };

        Self { pattern, compiled }
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Finds all non-overlapping matches in `text`, in order.
    ///
    /// A valid pattern that matches nothing yields `Ok` with an empty vec;
    /// only a malformed pattern yields an error.
    pub fn find_matches(&self, text: &str) -> ScanResult<Vec<String>> {
        let regex = self
            .compiled
            .as_ref()
            .ok_or_else(|| ScanError::invalid_pattern(&self.pattern))?;

        Ok(regex
            .find_iter(text)
            .map(|m| m.as_str().to_string())
            .collect())
    }
}
