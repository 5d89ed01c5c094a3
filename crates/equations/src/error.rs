//! Result and Error types for the equations module

/// Type alias for `Result<T, equations::Error>`
pub type Result<T> = core::result::Result<T, Error>;

#[derive(thiserror::Error, Debug)]
/// The error type for `pfmc-equations`
///
/// Malformed comments or statements are never an error, they are skipped
/// while scanning. Only failing to read the file itself is fatal.
pub enum Error {
    /// Underlying file I/O error
    #[error("failure in file I/O")]
    Io(#[from] std::io::Error),

    /// Failure to serialise to a JSON string
    #[error("failed serde JSON operation")]
    Json(#[from] serde_json::Error),
}
