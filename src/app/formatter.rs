use pathdiff::diff_paths;
use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};

pub struct SnapshotWriter;

impl SnapshotWriter {
    /// Renders the scan result into the snapshot document: one `##` header
    /// per file followed by its contents in a fenced block. Files that stop
    /// being readable between scan and render are skipped with a warning.
    pub fn render(files: &[PathBuf], base: &Path) -> String {
        let mut blocks = Vec::new();

        for path in files {
            let content = match fs::read_to_string(path) {
                Ok(content) => content,
                Err(err) => {
                    log::warn!("Skipping unreadable file {}: {}", path.display(), err);
                    continue;
                }
            };

            let mut block = format!(
                "## {}\n\n```{}\n{}",
                display_path(path, base),
                fence_info(path),
                content
            );
            if !content.ends_with('\n') {
                block.push('\n');
            }
            block.push_str("```");
            blocks.push(block);
        }

        let mut out = String::from("# Code Snapshot\n\n");
        out.push_str(&blocks.join("\n\n"));
        out.push('\n');
        out
    }
}

/// Path as shown in headers and listings: relative to the working root where
/// possible, with forward slashes.
pub fn display_path(path: &Path, base: &Path) -> String {
    let relative = diff_paths(path, base).unwrap_or_else(|| path.to_path_buf());
    relative.to_string_lossy().replace('\\', "/")
}

fn fence_info(path: &Path) -> &str {
    path.extension().and_then(OsStr::to_str).unwrap_or("")
}
