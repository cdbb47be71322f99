use std::path::{Path, PathBuf};
use std::sync::mpsc;
use std::thread;
use std::time::Duration;
use tracing::{debug, info, warn};

use super::extractor;
use super::matcher::PatternMatcher;
use crate::config::{ScanConfig, ScanMode};
use crate::errors::ScanResult;
use crate::partition::PartitionPlan;
use crate::results::{PathMatches, ScanSummary};
use crate::walker;

/// Delay between successive worker launches. A throttle against bursty
/// thread/file-handle creation, not a correctness requirement.
const LAUNCH_STAGGER: Duration = Duration::from_millis(25);

/// Scans a directory tree according to `config`.
///
/// With `worker_count <= 1` the whole path list is processed in the calling
/// thread; otherwise the list is partitioned and dispatched to one worker per
/// chunk. Either way the summary lists results in path-discovery order, and
/// per-path failures (unreadable files, undecodable payloads, a malformed
/// pattern) are logged and skipped rather than aborting the scan.
pub fn scan(config: &ScanConfig) -> ScanResult<ScanSummary> {
    config.validate()?;

    let matcher = PatternMatcher::new(&config.pattern);
    info!("starting scan with pattern: {}", matcher.pattern());

    let paths = walker::walk(&config.root_path, config.recursive)?;

    let summary = if config.worker_count <= 1 {
        scan_sequential(&paths, &matcher, config.mode)
    } else {
        let plan = PartitionPlan::new(paths.len(), config.worker_count);
        run_pool(&paths, &plan, &matcher, config.mode)
    };

    info!(
        "scan complete: {} matches in {} of {} files",
        summary.total_matches, summary.files_with_matches, summary.files_scanned
    );
    Ok(summary)
}

/// Scans a single file and returns its matches.
///
/// Unlike the directory scan, extraction and pattern failures surface to the
/// caller here; with only one path there is nothing to continue past.
pub fn scan_file(config: &ScanConfig) -> ScanResult<PathMatches> {
    let matcher = PatternMatcher::new(&config.pattern);
    let content = extractor::extract(&config.root_path)?;
    let matches = matcher.find_matches(&content)?;
    Ok(PathMatches {
        path: config.root_path.clone(),
        matches,
    })
}

fn scan_sequential(paths: &[PathBuf], matcher: &PatternMatcher, mode: ScanMode) -> ScanSummary {
    let mut summary = ScanSummary::new();
    for path in paths {
        if let Some(result) = scan_path(path, matcher, mode) {
            summary.add_path_result(result);
        }
    }
    summary
}

/// Dispatches one worker per chunk and collects their results.
///
/// Workers never print; each sends its results back labeled with the chunk
/// index and within-chunk position, and the dispatcher reorders them into
/// path-list order after the join. Workers share nothing mutable: a chunk is
/// owned read-only by exactly one worker, and the matcher is immutable once
/// built.
fn run_pool(
    paths: &[PathBuf],
    plan: &PartitionPlan,
    matcher: &PatternMatcher,
    mode: ScanMode,
) -> ScanSummary {
    let chunks = plan.chunks(paths);
    let (tx, rx) = mpsc::channel::<(usize, usize, PathMatches)>();

    thread::scope(|scope| {
        for (chunk_index, chunk) in chunks.iter().enumerate() {
            if chunk.is_empty() {
                continue;
            }
            debug!("chunk {} holds {} paths", chunk_index, chunk.len());

            let tx = tx.clone();
            scope.spawn(move || {
                for (position, path) in chunk.iter().enumerate() {
                    if let Some(result) = scan_path(path, matcher, mode) {
                        if tx.send((chunk_index, position, result)).is_err() {
                            return;
                        }
                    }
                }
            });

            thread::sleep(LAUNCH_STAGGER);
        }
        drop(tx);

        // Receiving drains until every worker has dropped its sender, which
        // doubles as the join-all point for result delivery; the scope then
        // joins the threads themselves.
        let mut labeled: Vec<(usize, usize, PathMatches)> = rx.into_iter().collect();
        labeled.sort_by_key(|entry| (entry.0, entry.1));

        let mut summary = ScanSummary::new();
        for (_, _, result) in labeled {
            summary.add_path_result(result);
        }
        summary
    })
}

/// Evaluates one path, returning `None` when the path is skipped.
///
/// Skips cover extraction failures in Contents mode and a malformed pattern
/// in either mode; a scanned path that simply matches nothing still returns
/// a (empty) result so it is counted as scanned.
fn scan_path(path: &Path, matcher: &PatternMatcher, mode: ScanMode) -> Option<PathMatches> {
    let text = match mode {
        ScanMode::Contents => match extractor::extract(path) {
            Ok(content) => content,
            Err(e) => {
                warn!("skipping {}: {}", path.display(), e);
                return None;
            }
        },
        ScanMode::Names => path.to_string_lossy().into_owned(),
    };

    match matcher.find_matches(&text) {
        Ok(matches) => Some(PathMatches {
            path: path.to_path_buf(),
            matches,
        }),
        Err(e) => {
            warn!("skipping {}: {}", path.display(), e);
            None
        }
    }
}
