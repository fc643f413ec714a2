/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 21/10/25
******************************************************************************/

use reqwest::StatusCode;
use thiserror::Error;

/// Main error type for the library
///
/// The PDD API reports most logical failures inside a 2xx JSON body (for
/// example `{"success": "error", ...}`), so those never surface here —
/// callers inspect the returned body themselves. `AppError` covers the
/// cases where no usable body could be produced at all.
#[derive(Debug, Error)]
pub enum AppError {
    /// Transport-level failure: DNS resolution, connection refused, timeout
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The server answered with a non-2xx status and a body that is not JSON
    ///
    /// A non-2xx status with a decodable JSON body is not an error: the body
    /// is returned as-is, since the API encodes failure details in it.
    #[error("unexpected HTTP status {status}: {body}")]
    Http {
        /// HTTP status code of the response
        status: StatusCode,
        /// Raw response body, kept for diagnostics
        body: String,
    },

    /// The response body could not be parsed as JSON
    #[error("failed to decode response body: {0}")]
    Decode(#[from] serde_json::Error),

    /// A paginated listing did not terminate within the page cap
    #[error("pagination did not terminate after {0} pages")]
    Protocol(u32),

    /// A caller-supplied argument is outside the supported range
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}
