//! Upload storage for image board attachments.
//!
//! Files are written under the configured upload directory using a server-generated key,
//! and the same directory is served back under `/storage`. The client filename only
//! contributes its extension, so it can never escape the directory or overwrite another
//! upload.

use rand::Rng;
use std::{
    path::{Path, PathBuf},
    sync::Arc,
};

use crate::server::{error::storage::StorageError, model::imageboard::UploadedFile};

/// Hex characters used for the random part of a storage key.
const KEY_CHARSET: &[u8] = b"0123456789abcdef";
const KEY_LENGTH: usize = 32;
const MAX_EXTENSION_LENGTH: usize = 8;

/// Writes uploaded files into the upload directory.
///
/// Cheap to clone; the root path is shared.
#[derive(Clone, Debug)]
pub struct UploadStorage {
    root: Arc<PathBuf>,
}

impl UploadStorage {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: Arc::new(root.into()),
        }
    }

    /// Directory files are written to and served from.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Saves an uploaded file under a freshly generated key.
    ///
    /// Creates the upload directory first if it does not exist yet.
    ///
    /// # Returns
    /// - `Ok(String)` - Storage key the file was written under
    /// - `Err(StorageError::EmptyFileName)` - The upload carried no filename
    /// - `Err(StorageError::Io)` - Creating the directory or writing the file failed
    pub async fn save(&self, file: &UploadedFile) -> Result<String, StorageError> {
        if file.file_name.is_empty() {
            return Err(StorageError::EmptyFileName);
        }

        tokio::fs::create_dir_all(self.root.as_path()).await?;

        let key = storage_key(&file.file_name);
        tokio::fs::write(self.root.join(&key), &file.data).await?;

        tracing::debug!("Stored upload '{}' as {}", file.file_name, key);

        Ok(key)
    }
}

/// Generates a storage key for a file with the given original name.
///
/// The key is 32 random lowercase hex characters, followed by the original extension
/// when it is 1 to 8 ASCII alphanumerics (lowercased).
pub fn storage_key(original: &str) -> String {
    let mut rng = rand::rng();

    let mut key: String = (0..KEY_LENGTH)
        .map(|_| {
            let idx = rng.random_range(0..KEY_CHARSET.len());
            KEY_CHARSET[idx] as char
        })
        .collect();

    if let Some(ext) = extension(original) {
        key.push('.');
        key.push_str(&ext);
    }

    key
}

/// Extracts a safe, lowercased extension from a client filename.
fn extension(original: &str) -> Option<String> {
    // Browsers on Windows may send the full client path.
    let name = original.rsplit(['/', '\\']).next().unwrap_or(original);
    let (stem, ext) = name.rsplit_once('.')?;

    if stem.is_empty()
        || ext.is_empty()
        || ext.len() > MAX_EXTENSION_LENGTH
        || !ext.chars().all(|c| c.is_ascii_alphanumeric())
    {
        return None;
    }

    Some(ext.to_ascii_lowercase())
}
