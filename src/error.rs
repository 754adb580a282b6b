use thiserror::Error;

/// How a transport-level failure happened. Kept apart from HTTP status
/// failures so callers can pick a retry policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportFailureKind {
    Timeout,
    Connect,
    Other,
}

impl std::fmt::Display for TransportFailureKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            TransportFailureKind::Timeout => "timeout",
            TransportFailureKind::Connect => "connection failure",
            TransportFailureKind::Other => "transport failure",
        };
        f.write_str(label)
    }
}

/// Outcome of a failed endpoint call.
///
/// Every variant is terminal for the call that produced it. The client never
/// retries or substitutes defaults; see [`ApiError::is_retryable`] for the
/// kinds a caller may want to try again.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Malformed request for endpoint '{endpoint}': {message}")]
    MalformedRequest { endpoint: String, message: String },

    #[error("Not authenticated for endpoint '{endpoint}'{}", status_suffix(.status))]
    Unauthenticated {
        endpoint: String,
        status: Option<u16>,
        body: Option<String>,
    },

    #[error("API request not found (404): {url}")]
    NotFound { url: String, body: String },

    #[error("API client error ({status}): {url}")]
    ClientError {
        status: u16,
        url: String,
        body: String,
    },

    #[error("API server error ({status}): {url}")]
    ServerError {
        status: u16,
        url: String,
        body: String,
    },

    #[error("Network {kind} while requesting {url}: {message}")]
    Transport {
        kind: TransportFailureKind,
        url: String,
        message: String,
    },

    #[error("API returned malformed response: {message} (URL: {url})")]
    MalformedResponse {
        url: String,
        message: String,
        body_preview: String,
    },

    #[error("Request was canceled")]
    Canceled,
}

fn status_suffix(status: &Option<u16>) -> String {
    status.map(|s| format!(" ({s})")).unwrap_or_default()
}

impl ApiError {
    /// Create a malformed request error
    pub fn malformed_request(endpoint: impl Into<String>, message: impl Into<String>) -> Self {
        Self::MalformedRequest {
            endpoint: endpoint.into(),
            message: message.into(),
        }
    }

    /// Credentials were required but not supplied; no request was sent.
    pub fn missing_credentials(endpoint: impl Into<String>) -> Self {
        Self::Unauthenticated {
            endpoint: endpoint.into(),
            status: None,
            body: None,
        }
    }

    /// The server rejected the supplied credentials.
    pub fn rejected_credentials(endpoint: impl Into<String>, body: impl Into<String>) -> Self {
        Self::Unauthenticated {
            endpoint: endpoint.into(),
            status: Some(401),
            body: Some(body.into()),
        }
    }

    /// Create a not found error
    pub fn not_found(url: impl Into<String>, body: impl Into<String>) -> Self {
        Self::NotFound {
            url: url.into(),
            body: body.into(),
        }
    }

    /// Create a client error (4xx status codes except 401 and 404)
    pub fn client_error(status: u16, url: impl Into<String>, body: impl Into<String>) -> Self {
        Self::ClientError {
            status,
            url: url.into(),
            body: body.into(),
        }
    }

    /// Create a server error (5xx status codes)
    pub fn server_error(status: u16, url: impl Into<String>, body: impl Into<String>) -> Self {
        Self::ServerError {
            status,
            url: url.into(),
            body: body.into(),
        }
    }

    /// Create a transport error
    pub fn transport(
        kind: TransportFailureKind,
        url: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self::Transport {
            kind,
            url: url.into(),
            message: message.into(),
        }
    }

    /// Create a malformed response error, keeping a short preview of the body
    pub fn malformed_response(
        url: impl Into<String>,
        message: impl Into<String>,
        body: &str,
    ) -> Self {
        Self::MalformedResponse {
            url: url.into(),
            message: message.into(),
            body_preview: body
                .chars()
                .take(crate::constants::BODY_PREVIEW_CHARS)
                .collect(),
        }
    }

    /// HTTP status carried by the error, if the server answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Unauthenticated { status, .. } => *status,
            ApiError::NotFound { .. } => Some(404),
            ApiError::ClientError { status, .. } | ApiError::ServerError { status, .. } => {
                Some(*status)
            }
            _ => None,
        }
    }

    /// Raw response body for status errors.
    pub fn body(&self) -> Option<&str> {
        match self {
            ApiError::Unauthenticated { body, .. } => body.as_deref(),
            ApiError::NotFound { body, .. }
            | ApiError::ClientError { body, .. }
            | ApiError::ServerError { body, .. } => Some(body),
            _ => None,
        }
    }

    /// Check if a caller-side retry could succeed (server errors, network issues)
    pub fn is_retryable(&self) -> bool {
        matches!(self, ApiError::ServerError { .. } | ApiError::Transport { .. })
    }

    /// Check if error indicates the resource does not exist
    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::NotFound { .. })
    }

    /// Check if the caller has to (re-)authenticate
    pub fn is_unauthenticated(&self) -> bool {
        matches!(self, ApiError::Unauthenticated { .. })
    }
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error("Failed to build HTTP client: {0}")]
    HttpClient(#[from] reqwest::Error),

    #[error("Failed to encode output: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Log setup error: {0}")]
    LogSetup(String),
}

impl AppError {
    /// Create a configuration error with context
    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a log setup error with context
    pub fn log_setup_error(msg: impl Into<String>) -> Self {
        Self::LogSetup(msg.into())
    }
}
