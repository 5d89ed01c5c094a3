//! Result and Error types for the workflow module

/// Type alias for `Result<T, workflow::Error>`
pub type Result<T> = core::result::Result<T, Error>;

#[derive(thiserror::Error, Debug)]
/// The error type for `pfmc-workflow`
pub enum Error {
    /// Underlying file I/O error
    #[error("failure in file I/O")]
    Io(#[from] std::io::Error),

    /// Failed to read `equations.h`
    #[error(transparent)]
    Equations(#[from] pfmc_equations::Error),

    /// Failed to read `parameters.in`
    #[error(transparent)]
    Parameters(#[from] pfmc_parameters::Error),

    /// A client call failed
    #[error(transparent)]
    Client(#[from] pfmc_mcapi::Error),

    /// Templates file is not valid JSON
    #[error("failed to read templates")]
    Json(#[from] serde_json::Error),

    /// Command name without a template
    #[error("no template for command \"{0}\"")]
    UnknownTemplate(String),

    /// Missing, zero or negative `--num-cores`
    #[error("number of simulation cores must be given and > 0, found {0}")]
    InvalidCoreCount(i64),
}
