pub mod config;
pub mod errors;
pub mod partition;
pub mod results;
pub mod scan;
pub mod walker;

pub use config::{ConfigFile, PatternSpec, ScanConfig, ScanMode, DEFAULT_WORKER_COUNT};
pub use errors::{ScanError, ScanResult};
pub use partition::PartitionPlan;
pub use results::{PathMatches, ScanSummary};
pub use scan::{scan, scan_file, PatternMatcher};
