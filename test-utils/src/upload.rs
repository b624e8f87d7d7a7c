//! Scratch upload directories for tests that write files.

use std::path::{Path, PathBuf};

use crate::factory::helpers::next_id;

/// Upload directory under the system temp dir, removed when dropped.
///
/// The directory itself is not created; code under test is expected to create it on
/// first write.
pub struct TempUploadDir {
    path: PathBuf,
}

impl TempUploadDir {
    pub fn new() -> Self {
        let path = std::env::temp_dir().join(format!(
            "imageboard-test-{}-{}",
            std::process::id(),
            next_id()
        ));

        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for TempUploadDir {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for TempUploadDir {
    fn drop(&mut self) {
        if self.path.is_dir() {
            let _ = std::fs::remove_dir_all(&self.path);
        } else {
            let _ = std::fs::remove_file(&self.path);
        }
    }
}
