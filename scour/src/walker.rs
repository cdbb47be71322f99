use ignore::WalkBuilder;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::errors::{ScanError, ScanResult};

/// Enumerates candidate paths under `root`.
///
/// Non-recursive walks are a shallow directory listing: immediate entries
/// only, with subdirectories emitted as paths but never descended into.
/// Recursive walks emit every regular file at any depth and never emit
/// directories. Order is filesystem order, deterministic within a run but
/// otherwise unspecified.
pub fn walk(root: &Path, recursive: bool) -> ScanResult<Vec<PathBuf>> {
    if !root.exists() {
        return Err(ScanError::file_not_found(root));
    }

    let paths = if recursive {
        walk_recursive(root)
    } else {
        list_shallow(root)?
    };

    debug!("discovered {} candidate paths under {}", paths.len(), root.display());
    Ok(paths)
}

fn list_shallow(root: &Path) -> ScanResult<Vec<PathBuf>> {
    let mut paths = Vec::new();
    for entry in std::fs::read_dir(root)? {
        let entry = entry?;
        debug!("candidate: {}", entry.path().display());
        paths.push(entry.path());
    }
    Ok(paths)
}

fn walk_recursive(root: &Path) -> Vec<PathBuf> {
    // Triage wants everything: hidden files and ignore files are not
    // filtering signals here, unlike a source-code search.
    WalkBuilder::new(root)
        .hidden(false)
        .ignore(false)
        .git_ignore(false)
        .git_global(false)
        .git_exclude(false)
        .build()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_some_and(|ft| ft.is_file()))
        .map(|entry| entry.into_path())
        .collect()
}
