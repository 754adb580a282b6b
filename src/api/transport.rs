//! The HTTP exchange seam.
//!
//! The client never talks to the network directly: it hands a fully built
//! [`HttpRequest`] to a [`Transport`] and classifies whatever comes back.
//! Timeouts, connection pooling and cookie handling are the transport's
//! business.

use async_trait::async_trait;
use std::fmt;
use thiserror::Error;
use url::Url;

use crate::config::Config;

use super::http_client::create_http_client_with_timeout;

/// Opaque session token supplied by the caller.
///
/// The client never inspects it; only a transport reads it, to attach it to
/// the outgoing request.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials(String);

impl Credentials {
    pub fn new(token: impl Into<String>) -> Self {
        Credentials(token.into())
    }

    /// Raw token, for transports.
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credentials(<redacted>)")
    }
}

#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: http::Method,
    pub url: Url,
    pub body: Option<serde_json::Value>,
    pub credentials: Option<Credentials>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct HttpResponse {
    pub status: http::StatusCode,
    pub body: String,
}

impl HttpResponse {
    pub fn new(status: http::StatusCode, body: impl Into<String>) -> Self {
        HttpResponse {
            status,
            body: body.into(),
        }
    }
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TransportError {
    #[error("request timed out: {0}")]
    Timeout(String),
    #[error("connection failed: {0}")]
    Connect(String),
    #[error("request canceled")]
    Canceled,
    #[error("{0}")]
    Other(String),
}

/// Performs exactly one HTTP exchange per call.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError>;
}

/// Production transport backed by a pooled `reqwest` client. Credentials
/// are sent as a session cookie.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
    cookie_name: String,
}

impl ReqwestTransport {
    pub fn new(client: reqwest::Client, cookie_name: impl Into<String>) -> Self {
        ReqwestTransport {
            client,
            cookie_name: cookie_name.into(),
        }
    }

    pub fn from_config(config: &Config) -> Result<Self, reqwest::Error> {
        let client = create_http_client_with_timeout(config.http_timeout_seconds)?;
        Ok(Self::new(client, config.session_cookie_name.clone()))
    }
}

fn classify_reqwest_error(e: reqwest::Error) -> TransportError {
    if e.is_timeout() {
        TransportError::Timeout(e.to_string())
    } else if e.is_connect() {
        TransportError::Connect(e.to_string())
    } else {
        TransportError::Other(e.to_string())
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        let mut builder = self.client.request(request.method, request.url);

        if let Some(credentials) = &request.credentials {
            builder = builder.header(
                reqwest::header::COOKIE,
                format!("{}={}", self.cookie_name, credentials.expose()),
            );
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder.send().await.map_err(classify_reqwest_error)?;
        let status = response.status();
        let body = response.text().await.map_err(classify_reqwest_error)?;

        Ok(HttpResponse { status, body })
    }
}
