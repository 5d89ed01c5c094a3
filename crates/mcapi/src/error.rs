//! Result and Error types for the mcapi module

use std::path::PathBuf;

/// Type alias for `Result<T, mcapi::Error>`
pub type Result<T> = core::result::Result<T, Error>;

#[derive(thiserror::Error, Debug)]
/// The error type for `pfmc-mcapi`
pub enum Error {
    /// Underlying file I/O error
    #[error("failure in file I/O")]
    Io(#[from] std::io::Error),

    /// Journal could not be read or written as JSON
    #[error("failed to (de)serialise journal")]
    Json(#[from] serde_json::Error),

    /// No process with this id in the experiment
    #[error("no process with id \"{0}\"")]
    ProcessNotFound(String),

    /// No sample with this id in the experiment
    #[error("no sample with id \"{0}\"")]
    SampleNotFound(String),

    /// Local file to upload does not exist
    #[error("file not found \"{}\"", .0.display())]
    FileNotFound(PathBuf),
}
