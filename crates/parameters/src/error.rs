//! Result and Error types for the parameters module

/// Type alias for `Result<T, parameters::Error>`
pub type Result<T> = core::result::Result<T, Error>;

#[derive(thiserror::Error, Debug)]
/// The error type for `pfmc-parameters`
pub enum Error {
    /// Underlying file I/O error
    #[error("failure in file I/O")]
    Io(#[from] std::io::Error),

    /// A known entry has a value that does not fit its type
    #[error("failed to read \"{key}\" = \"{value}\" as {expected}")]
    InvalidValue {
        key: String,
        value: String,
        expected: &'static str,
    },
}
