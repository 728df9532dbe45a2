//! Scratch checking directory plus manifest file for end-to-end runs.

use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

pub struct Fixture {
    root: TempDir,
}

impl Fixture {
    pub fn new() -> Self {
        let root = tempfile::tempdir().unwrap();
        fs::create_dir(root.path().join("data")).unwrap();
        Self { root }
    }

    /// Checking directory the manifest paths are resolved against.
    pub fn data_dir(&self) -> PathBuf {
        self.root.path().join("data")
    }

    /// Manifest location (outside the checking directory).
    pub fn manifest_path(&self) -> PathBuf {
        self.root.path().join("check.sum")
    }

    pub fn file(&self, rel: &str, content: &[u8]) -> PathBuf {
        let path = self.data_dir().join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, content).unwrap();
        path
    }

    pub fn remove(&self, rel: &str) {
        fs::remove_file(self.data_dir().join(rel)).unwrap();
    }

    pub fn manifest(&self, content: &[u8]) {
        fs::write(self.manifest_path(), content).unwrap();
    }
}
