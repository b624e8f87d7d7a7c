use thiserror::Error;

/// Failures while writing an uploaded file to the upload directory.
///
/// These never reach the client: the write endpoint logs them and answers `rt: "FAIL"`.
#[derive(Error, Debug)]
pub enum StorageError {
    /// The upload carried no original filename.
    #[error("Uploaded file has no filename")]
    EmptyFileName,

    /// Creating the upload directory or writing the file failed.
    #[error("Failed to write upload: {0}")]
    Io(#[from] std::io::Error),
}
