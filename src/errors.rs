/*!
 * Error types for the signflow library.
 *
 * The text-to-sign pipeline itself never fails: unresolved words, dead
 * translation services and broken catalog rows all end up as data in the
 * result. These types cover the edges around it (provider I/O, catalog
 * files, configuration), using the thiserror crate.
 */

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur when talking to a translation provider
#[derive(Error, Debug)]
pub enum ProviderError {
    /// Error when making an API request fails
    #[error("API request failed: {0}")]
    RequestFailed(String),

    /// Error when parsing an API response fails
    #[error("Failed to parse API response: {0}")]
    ParseError(String),

    /// Error returned by the API itself
    #[error("API responded with error: {status_code} - {message}")]
    ApiError {
        /// HTTP status code
        status_code: u16,
        /// Error message from the API
        message: String,
    },

    /// Error establishing or maintaining a connection
    #[error("Connection error: {0}")]
    ConnectionError(String),

    /// The provider did not answer within the configured time
    #[error("Translation timed out after {0} ms")]
    Timeout(u64),

    /// The caller abandoned the request
    #[error("Translation request cancelled")]
    Cancelled,

    /// Error with authentication
    #[error("Authentication error: {0}")]
    AuthenticationError(String),
}

/// Errors raised while reading static catalog sources
#[derive(Error, Debug)]
pub enum CatalogError {
    /// The catalog file or directory could not be read
    #[error("Catalog I/O error at {path:?}: {message}")]
    Io {
        path: PathBuf,
        message: String,
    },

    /// A catalog record is not valid JSON or has the wrong shape
    #[error("Failed to parse catalog record {path:?}: {message}")]
    Parse {
        path: PathBuf,
        message: String,
    },

    /// The video naming convention is missing a required part
    #[error("Invalid video naming settings: {0}")]
    InvalidNaming(String),
}
