use thiserror::Error;

/// Error returned by every builder and dispatcher in the client.
///
/// The first three variants are raised while a request is being built, before
/// any network activity. The rest come from the HTTP layer and are passed
/// through untouched.
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Required parameter {field} was null or undefined when calling {operation}.")]
    RequiredParameter {
        operation: &'static str,
        field: &'static str,
    },

    #[error("Hex error: {0}")]
    InvalidHex(#[from] hex::FromHexError),

    #[error("Invalid header: {0}")]
    InvalidHeader(String),

    #[error("URL error: {0}")]
    Url(#[from] url::ParseError),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Request failed with status code {status}: {body}")]
    Status { status: u16, body: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl ClientError {
    /// Whether the error was raised before the request left the process.
    pub fn is_client_side(&self) -> bool {
        matches!(
            self,
            Self::RequiredParameter { .. } | Self::InvalidHex(_) | Self::InvalidHeader(_)
        )
    }

    /// HTTP status of a non-2xx response, if that is what this error is.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

impl From<reqwest::header::InvalidHeaderValue> for ClientError {
    fn from(err: reqwest::header::InvalidHeaderValue) -> Self {
        ClientError::InvalidHeader(format!("Invalid header value: {err}"))
    }
}

impl From<reqwest::header::InvalidHeaderName> for ClientError {
    fn from(err: reqwest::header::InvalidHeaderName) -> Self {
        ClientError::InvalidHeader(format!("Invalid header name: {err}"))
    }
}

impl From<toml::de::Error> for ClientError {
    fn from(err: toml::de::Error) -> Self {
        ClientError::Config(format!("Failed to parse config file: {err}"))
    }
}

impl From<std::io::Error> for ClientError {
    fn from(err: std::io::Error) -> Self {
        ClientError::Config(err.to_string())
    }
}

pub type ApiResult<T> = Result<T, ClientError>;
