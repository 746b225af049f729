use serde::Deserialize;
use thiserror::Error;

/// Result type alias for iLert operations
pub type Result<T> = std::result::Result<T, IlertError>;

/// Errors that can occur when talking to the iLert API
#[derive(Debug, Error)]
pub enum IlertError {
    /// Failed to build HTTP client
    #[error("Failed to build HTTP client: {0}")]
    BuildHttpClient(#[source] reqwest::Error),

    /// The configured endpoint cannot be used as a request base
    #[error("invalid endpoint: {0}")]
    InvalidEndpoint(String),

    /// A required input field was not set; no request was sent
    #[error("{0} is required")]
    MissingField(&'static str),

    /// Environment configuration is missing or inconsistent
    #[error("configuration error: {0}")]
    Config(String),

    /// HTTP request failed before a response was received
    #[error("HTTP request failed: {0}")]
    Request(#[source] reqwest_middleware::Error),

    /// Reading the response body failed
    #[error("Failed to read response body: {0}")]
    ReadBody(#[source] reqwest::Error),

    /// The response body does not match the expected shape
    #[error("Failed to deserialize response: {0}")]
    Deserialize(#[source] serde_json::Error),

    /// The API answered with an unexpected status code
    #[error("{}", describe_api_error(.status, .code, .message))]
    Api {
        /// HTTP status code
        status: u16,
        /// Machine readable error code from the error body
        code: Option<String>,
        /// Human readable message from the error body
        message: Option<String>,
    },
}

impl IlertError {
    /// HTTP status of an [`IlertError::Api`] error
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Check if the API reported that the resource does not exist
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }

    /// Build an [`IlertError::Api`] from a status code and the raw response body.
    ///
    /// The body is only used when it parses as `{status, code, message}` and
    /// carries a non-empty message.
    pub(crate) fn from_response_body(status: u16, body: &str) -> Self {
        match serde_json::from_str::<GenericApiError>(body) {
            Ok(GenericApiError {
                code,
                message: Some(message),
            }) if !message.is_empty() => Self::Api {
                status,
                code,
                message: Some(message),
            },
            _ => Self::Api {
                status,
                code: None,
                message: None,
            },
        }
    }
}

/// Error body returned by the API on failures
#[derive(Debug, Deserialize)]
struct GenericApiError {
    code: Option<String>,
    message: Option<String>,
}

fn describe_api_error(status: &u16, code: &Option<String>, message: &Option<String>) -> String {
    match message {
        Some(message) => format!("{}: {}", code.as_deref().unwrap_or_default(), message),
        None => format!("wrong status code {status}"),
    }
}

/// Unwrap a required input field or fail with [`IlertError::MissingField`]
pub(crate) fn required<T>(value: Option<T>, field: &'static str) -> Result<T> {
    value.ok_or(IlertError::MissingField(field))
}
