#![forbid(unsafe_code)]

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("transport: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server answered with an error status. `retryable` is the
    /// server's own hint: transient store failures can be resent as-is,
    /// everything else cannot.
    #[error("server rejected request ({status}): {message}")]
    Rejected {
        status: u16,
        message: String,
        retryable: bool,
    },

    #[error("malformed server response: {0}")]
    Malformed(String),
}
