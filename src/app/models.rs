use crate::app::scanner::ScanWarning;
use std::path::PathBuf;

/// Represents the final configuration after resolving paths against the
/// working root.
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub directories: Vec<PathBuf>,
    pub output_file: PathBuf,
    pub include_extensions: Vec<String>,
    pub exclude_dirs: Vec<String>,
    pub exclude_files: Vec<String>,
}

/// Result of a single scan run.
#[derive(Debug, Default)]
pub struct ScanOutcome {
    /// Files that passed every filter, in deterministic traversal order.
    pub files: Vec<PathBuf>,
    /// Recoverable problems encountered along the way, for the caller to
    /// display.
    pub warnings: Vec<ScanWarning>,
}
