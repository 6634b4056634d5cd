//! Error types for the content API client.
//!
//! None of these reach page rendering: the adapter in [`crate::cms`] logs
//! them and degrades the affected source to an empty result.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CmsError {
    /// A network or transport error, including timeouts and body decoding.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The API answered with a non-success status.
    #[error("HTTP {status} for {path}")]
    Status { status: u16, path: String },

    /// The request URL could not be built from the configured base.
    #[error("Invalid URL: {0}")]
    Url(String),
}
