//! Error types for the YellowChanger client library.

use thiserror::Error;

use crate::rest::Side;
use crate::serde_helpers::null_as_default;

/// The main error type for all YellowChanger client operations.
#[derive(Error, Debug)]
pub enum YellowChangerError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Http(reqwest::Error),

    /// HTTP request with middleware failed
    #[error("HTTP request failed: {0}")]
    HttpMiddleware(reqwest_middleware::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Request signing failed
    #[error("Authentication error: {0}")]
    Auth(String),

    /// YellowChanger API returned an error status
    #[error("YellowChanger API error: {0}")]
    Api(ApiError),

    /// Request timeout
    #[error("Request timed out")]
    Timeout,

    /// The caller cancelled the request
    #[error("Request cancelled")]
    Cancelled,

    /// No destination matched the requested currency and network
    #[error("currency not found: {currency} on {network} ({side})")]
    CurrencyNotFound {
        /// Currency code that was looked up
        currency: String,
        /// Network that was looked up
        network: String,
        /// Which destination list was searched
        side: Side,
    },

    /// The network identifier has no known address pattern
    #[error("invalid network: {0}")]
    InvalidNetwork(String),

    /// The address does not match the pattern of its network
    #[error("invalid address {address} for network {network}")]
    InvalidAddress {
        /// The rejected address
        address: String,
        /// The network it was checked against
        network: String,
    },
}

impl YellowChangerError {
    /// Whether this is a network-level failure (connection, DNS, timeout, cancellation).
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            Self::Http(_) | Self::HttpMiddleware(_) | Self::Timeout | Self::Cancelled
        )
    }

    /// Whether the API answered with an error status.
    pub fn is_api(&self) -> bool {
        matches!(self, Self::Api(_))
    }

    /// The API error, if this is one.
    pub fn api_error(&self) -> Option<&ApiError> {
        match self {
            Self::Api(err) => Some(err),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for YellowChangerError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout
        } else {
            Self::Http(err)
        }
    }
}

impl From<reqwest_middleware::Error> for YellowChangerError {
    fn from(err: reqwest_middleware::Error) -> Self {
        match err {
            reqwest_middleware::Error::Reqwest(inner) => inner.into(),
            other => Self::HttpMiddleware(other),
        }
    }
}

/// Error body returned by the YellowChanger API for HTTP statuses >= 400.
///
/// Missing or null fields decode as zero and empty, so a partial body still
/// surfaces as an API error with whatever the server did send.
#[derive(Debug, Clone, PartialEq, Eq, Default, serde::Deserialize)]
pub struct ApiError {
    /// Status code reported by the API.
    #[serde(deserialize_with = "null_as_default::deserialize", default)]
    pub status_code: i64,
    /// Human-readable error message.
    #[serde(deserialize_with = "null_as_default::deserialize", default)]
    pub message: String,
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.status_code, self.message)
    }
}

impl ApiError {
    /// Create a new API error from code and message.
    pub fn new(status_code: i64, message: impl Into<String>) -> Self {
        Self {
            status_code,
            message: message.into(),
        }
    }

    /// Check if this is a 4xx error.
    pub fn is_client_error(&self) -> bool {
        (400..500).contains(&self.status_code)
    }

    /// Check if this is a 5xx error.
    pub fn is_server_error(&self) -> bool {
        self.status_code >= 500
    }

    /// Check if the keys or signature were rejected.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self.status_code, 401 | 403)
    }

    /// Check if the requested resource (e.g. a trade) does not exist.
    pub fn is_not_found(&self) -> bool {
        self.status_code == 404
    }

    /// Check if this is a rate limit error.
    pub fn is_rate_limited(&self) -> bool {
        self.status_code == 429
    }
}
