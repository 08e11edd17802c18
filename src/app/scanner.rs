use crate::app::models::{ResolvedConfig, ScanOutcome};
use globset::{Glob, GlobSet, GlobSetBuilder};
use ignore::WalkBuilder;
use std::collections::HashSet;
use std::ffi::{OsStr, OsString};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Fatal problems detected before traversal starts.
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("invalid exclude pattern {pattern:?}")]
    Pattern {
        pattern: String,
        #[source]
        source: globset::Error,
    },
    #[error(transparent)]
    Glob(#[from] globset::Error),
}

/// Recoverable problems; the scan continues past each of these.
#[derive(Debug, Error)]
pub enum ScanWarning {
    #[error("configured directory {} does not exist, skipping", .0.display())]
    MissingRoot(PathBuf),
    #[error("configured path {} is not a directory, skipping", .0.display())]
    NotADirectory(PathBuf),
    #[error("cannot read configured directory {}: {}", .path.display(), .source)]
    RootUnreadable { path: PathBuf, source: io::Error },
    #[error("skipping unreadable entry: {0}")]
    Walk(#[from] ignore::Error),
    #[error("cannot resolve {}: {}", .path.display(), .source)]
    Unresolvable { path: PathBuf, source: io::Error },
}

/// Walks the configured roots and applies the include/exclude rules.
pub struct Scanner {
    roots: Vec<PathBuf>,
    include_extensions: HashSet<String>,
    exclude_dirs: HashSet<OsString>,
    exclude_files: GlobSet,
}

impl Scanner {
    pub fn new(config: &ResolvedConfig) -> Result<Self, ScanError> {
        Ok(Self {
            roots: config.directories.clone(),
            include_extensions: config.include_extensions.iter().cloned().collect(),
            exclude_dirs: config.exclude_dirs.iter().map(OsString::from).collect(),
            exclude_files: build_globset(&config.exclude_files)?,
        })
    }

    /// Scans every root in configured order. Root-level problems downgrade to
    /// warnings uniformly, so one bad root never aborts the others.
    pub fn scan(&self) -> ScanOutcome {
        let mut outcome = ScanOutcome::default();
        // Canonical paths of emitted files, so overlapping roots cannot
        // produce duplicates.
        let mut seen = HashSet::new();

        for root in &self.roots {
            self.scan_root(root, &mut seen, &mut outcome);
        }

        outcome
    }

    fn scan_root(&self, root: &Path, seen: &mut HashSet<PathBuf>, outcome: &mut ScanOutcome) {
        match fs::metadata(root) {
            Err(source) if source.kind() == io::ErrorKind::NotFound => {
                outcome
                    .warnings
                    .push(ScanWarning::MissingRoot(root.to_path_buf()));
                return;
            }
            Err(source) => {
                outcome.warnings.push(ScanWarning::RootUnreadable {
                    path: root.to_path_buf(),
                    source,
                });
                return;
            }
            Ok(meta) if !meta.is_dir() => {
                outcome
                    .warnings
                    .push(ScanWarning::NotADirectory(root.to_path_buf()));
                return;
            }
            Ok(_) => {}
        }

        // Sequential sorted walk: entries within a directory by name,
        // depth-first into subdirectories in that same order. Standard
        // filters are off; the configuration is the whole filtering contract.
        let exclude_dirs = self.exclude_dirs.clone();
        let walker = WalkBuilder::new(root)
            .standard_filters(false)
            .follow_links(false)
            .sort_by_file_name(|a: &OsStr, b: &OsStr| a.cmp(b))
            .filter_entry(move |entry| {
                let is_dir = entry.file_type().map_or(false, |ft| ft.is_dir());
                // Pruned before descent: nothing beneath an excluded
                // directory is yielded, whatever its extension.
                !(is_dir && exclude_dirs.contains(entry.file_name()))
            })
            .build();

        for result in walker {
            let entry = match result {
                Ok(entry) => entry,
                Err(err) => {
                    outcome.warnings.push(ScanWarning::from(err));
                    continue;
                }
            };

            // Symlinks are not followed; sockets, devices and the like are
            // skipped silently.
            if !entry.file_type().map_or(false, |ft| ft.is_file()) {
                continue;
            }
            if self.exclude_files.is_match(Path::new(entry.file_name())) {
                continue;
            }
            if !self.matches_extension(entry.file_name()) {
                continue;
            }

            match entry.path().canonicalize() {
                Ok(real) => {
                    if !seen.insert(real) {
                        continue;
                    }
                }
                Err(source) => {
                    outcome.warnings.push(ScanWarning::Unresolvable {
                        path: entry.path().to_path_buf(),
                        source,
                    });
                    continue;
                }
            }

            outcome.files.push(entry.into_path());
        }
    }

    fn matches_extension(&self, name: &OsStr) -> bool {
        name.to_str()
            .and_then(file_extension)
            .map_or(false, |ext| self.include_extensions.contains(ext))
    }
}

/// Extension of a file name, with its dot. The match is exact and
/// case-sensitive. A dot in first position does not start an extension, so
/// dotfiles like `.gitignore` have none.
fn file_extension(name: &str) -> Option<&str> {
    match name.rfind('.') {
        Some(idx) if idx > 0 => Some(&name[idx..]),
        _ => None,
    }
}

fn build_globset(patterns: &[String]) -> Result<GlobSet, ScanError> {
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        let glob = Glob::new(pattern).map_err(|source| ScanError::Pattern {
            pattern: pattern.clone(),
            source,
        })?;
        builder.add(glob);
    }
    Ok(builder.build()?)
}

#[cfg(test)]
mod tests {
    use super::file_extension;

    #[test]
    fn extension_starts_at_the_last_dot() {
        assert_eq!(file_extension("test.py"), Some(".py"));
        assert_eq!(file_extension("archive.tar.gz"), Some(".gz"));
    }

    #[test]
    fn names_without_a_real_extension_have_none() {
        assert_eq!(file_extension("Makefile"), None);
        assert_eq!(file_extension(".gitignore"), None);
        assert_eq!(file_extension(".py"), None);
    }
}
