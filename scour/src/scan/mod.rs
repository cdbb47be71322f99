//! The scan engine: pattern matching, content extraction, and the
//! chunk-per-worker dispatch loop.
//!
//! Workers are plain OS threads with disjoint chunk ownership and no shared
//! mutable state; the only synchronization is the result channel back to the
//! dispatcher and the final join-all. See [`engine::scan`] for the entry
//! point.

pub mod engine;
pub mod extractor;
pub mod matcher;

pub use engine::{scan, scan_file};
pub use matcher::PatternMatcher;
