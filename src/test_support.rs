use crate::manifest::Manifest;
use std::path::PathBuf;
use tempfile::TempDir;

/// Build an owned argument vector from string literals.
pub(crate) fn argv(tokens: &[&str]) -> Vec<String> {
    tokens.iter().map(|t| t.to_string()).collect()
}

/// Write `yaml` as a manifest file inside a fresh temporary directory.
///
/// The directory is deleted when the returned guard is dropped.
pub(crate) fn write_manifest(yaml: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join(crate::manifest::DEFAULT_MANIFEST_FILE);
    std::fs::write(&path, yaml).unwrap();
    (temp_dir, path)
}

/// Parse and validate a manifest from an inline YAML snippet.
pub(crate) fn manifest(yaml: &str) -> Manifest {
    Manifest::from_yaml(yaml).unwrap()
}
