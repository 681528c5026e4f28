//! Shared helpers for unit tests.

use std::path::PathBuf;
use tempfile::TempDir;

/// Create a temporary directory for test files
pub fn create_test_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp directory")
}

/// Create a file with content in a test directory
pub fn create_test_file(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, content).expect("Failed to write test file");
    path
}
