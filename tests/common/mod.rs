#![allow(dead_code)]

use code_snapshot::ResolvedConfig;
use serde_json::json;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// The sample source tree the suite scans:
/// `src/{test.py, test2.py, test.txt}` plus an excluded `__pycache__`.
pub fn sample_tree() -> TempDir {
    let dir = TempDir::new().expect("create temp dir");
    populate_sample_tree(dir.path());
    dir
}

pub fn populate_sample_tree(root: &Path) {
    let src = root.join("src");
    fs::create_dir_all(&src).unwrap();
    fs::write(src.join("test.py"), "print('test')\n").unwrap();
    fs::write(src.join("test2.py"), "print('test2')\n").unwrap();
    fs::write(src.join("test.txt"), "not included\n").unwrap();

    let cache = src.join("__pycache__");
    fs::create_dir_all(&cache).unwrap();
    fs::write(cache.join("cache.py"), "print('cache')\n").unwrap();
}

/// A resolved configuration matching the sample document, rooted at `root`.
pub fn py_config(root: &Path) -> ResolvedConfig {
    ResolvedConfig {
        directories: vec![root.join("src")],
        output_file: root.join("snapshot.md"),
        include_extensions: vec![".py".to_string()],
        exclude_dirs: vec!["__pycache__".to_string()],
        exclude_files: Vec::new(),
    }
}

/// Writes the sample `.codesnapshot.json` into `root` and returns its path.
pub fn write_sample_config(root: &Path) -> PathBuf {
    write_config(
        root,
        json!({
            "directories": ["src"],
            "output_file": "snapshot.md",
            "include_extensions": [".py"],
            "exclude_dirs": ["__pycache__"],
            "exclude_files": []
        }),
    )
}

pub fn write_config(root: &Path, value: serde_json::Value) -> PathBuf {
    let path = root.join(".codesnapshot.json");
    fs::write(&path, value.to_string()).unwrap();
    path
}
