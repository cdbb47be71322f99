use std::path::PathBuf;

/// All matches found for a single path.
///
/// In Contents mode the matches are substrings of the extracted content; in
/// Names mode they are substrings of the path itself. An empty match list
/// means the path was scanned and matched nothing, which is distinct from a
/// path skipped by an extraction or pattern failure (those never produce a
/// `PathMatches` at all).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathMatches {
    pub path: PathBuf,
    pub matches: Vec<String>,
}

/// The complete, ordered result of one scan.
///
/// Results are accumulated in path-list order regardless of how many workers
/// produced them.
#[derive(Debug, Clone, Default)]
pub struct ScanSummary {
    /// Per-path results, in scan order
    pub file_results: Vec<PathMatches>,
    /// Paths that were actually scanned (skipped paths excluded)
    pub files_scanned: usize,
    /// Paths with at least one match
    pub files_with_matches: usize,
    /// Total number of individual matches
    pub total_matches: usize,
}

impl ScanSummary {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn add_path_result(&mut self, result: PathMatches) {
        self.files_scanned += 1;
        if !result.matches.is_empty() {
            self.files_with_matches += 1;
            self.total_matches += result.matches.len();
        }
        self.file_results.push(result);
    }

    pub fn merge(&mut self, other: ScanSummary) {
        self.files_scanned += other.files_scanned;
        self.files_with_matches += other.files_with_matches;
        self.total_matches += other.total_matches;
        self.file_results.extend(other.file_results);
    }
}
