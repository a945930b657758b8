//! Line data loading error types.

/// Errors that can occur when loading line data.
///
/// All of these are fatal at startup: the server refuses to start rather
/// than serve routes over a partial or empty network.
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Reading the local data file failed
    #[error("failed to read line data: {0}")]
    Io(#[from] std::io::Error),

    /// Remote endpoint returned an error status
    #[error("line data API error {status}: {message}")]
    Api { status: u16, message: String },

    /// The data did not have the expected shape
    #[error("malformed line data: {message}")]
    Malformed { message: String },

    /// The data parsed but contained no lines
    #[error("line data contains no lines")]
    Empty,
}
