//! Endpoint descriptors: static definitions of one API call

use std::fmt;
use std::marker::PhantomData;

/// HTTP method of an endpoint. Only the methods the catalog needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
}

impl HttpMethod {
    pub fn as_http(self) -> http::Method {
        match self {
            HttpMethod::Get => http::Method::GET,
            HttpMethod::Post => http::Method::POST,
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_http().as_str())
    }
}

/// Which server an endpoint lives on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Host {
    /// The main web API (`www.geoguessr.com`)
    Web,
    /// The real-time game server (`game-server.geoguessr.com`)
    GameServer,
}

/// Static description of one API call.
///
/// The type parameter is the shape the response body decodes into, so the
/// descriptor alone determines the return type of
/// [`ApiClient::invoke`](super::ApiClient::invoke).
///
/// Path templates use `{name}` placeholders that are filled from
/// [`RequestParams`](super::RequestParams) path parameters.
pub struct Endpoint<R> {
    pub name: &'static str,
    pub method: HttpMethod,
    pub host: Host,
    pub path: &'static str,
    pub requires_credentials: bool,
    /// Query parameter the pagination cursor is sent in, for feed endpoints.
    pub cursor_param: Option<&'static str>,
    /// Query parameters sent on every call, before caller-supplied ones.
    pub fixed_query: &'static [(&'static str, &'static str)],
    response: PhantomData<fn() -> R>,
}

impl<R> Endpoint<R> {
    const fn new(name: &'static str, method: HttpMethod, host: Host, path: &'static str) -> Self {
        Endpoint {
            name,
            method,
            host,
            path,
            requires_credentials: false,
            cursor_param: None,
            fixed_query: &[],
            response: PhantomData,
        }
    }

    pub const fn get(name: &'static str, host: Host, path: &'static str) -> Self {
        Self::new(name, HttpMethod::Get, host, path)
    }

    pub const fn post(name: &'static str, host: Host, path: &'static str) -> Self {
        Self::new(name, HttpMethod::Post, host, path)
    }

    /// Marks the endpoint as needing session credentials.
    pub const fn authenticated(self) -> Self {
        Endpoint {
            requires_credentials: true,
            ..self
        }
    }

    /// Marks the endpoint as a feed whose pages are chained through `cursor_param`.
    pub const fn paginated(self, cursor_param: &'static str) -> Self {
        Endpoint {
            cursor_param: Some(cursor_param),
            ..self
        }
    }

    pub const fn with_query(self, fixed_query: &'static [(&'static str, &'static str)]) -> Self {
        Endpoint {
            fixed_query,
            ..self
        }
    }

    /// Names of the `{placeholders}` in the path template, in order.
    pub fn placeholders(&self) -> Vec<&'static str> {
        let mut names = Vec::new();
        let mut rest = self.path;
        while let Some(start) = rest.find('{') {
            let after = &rest[start + 1..];
            match after.find('}') {
                Some(end) => {
                    names.push(&after[..end]);
                    rest = &after[end + 1..];
                }
                None => break,
            }
        }
        names
    }

    /// Untyped summary, for listing the catalog.
    pub fn info(&self) -> EndpointInfo {
        EndpointInfo {
            name: self.name,
            method: self.method,
            host: self.host,
            path: self.path,
            requires_credentials: self.requires_credentials,
            paginated: self.cursor_param.is_some(),
        }
    }
}

impl<R> Clone for Endpoint<R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R> Copy for Endpoint<R> {}

impl<R> fmt::Debug for Endpoint<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Endpoint")
            .field("name", &self.name)
            .field("method", &self.method)
            .field("host", &self.host)
            .field("path", &self.path)
            .field("requires_credentials", &self.requires_credentials)
            .field("cursor_param", &self.cursor_param)
            .field("fixed_query", &self.fixed_query)
            .finish()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct EndpointInfo {
    pub name: &'static str,
    #[serde(serialize_with = "serialize_display")]
    pub method: HttpMethod,
    #[serde(serialize_with = "serialize_host")]
    pub host: Host,
    pub path: &'static str,
    pub requires_credentials: bool,
    pub paginated: bool,
}

fn serialize_display<S: serde::Serializer>(method: &HttpMethod, s: S) -> Result<S::Ok, S::Error> {
    s.collect_str(method)
}

fn serialize_host<S: serde::Serializer>(host: &Host, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_str(match host {
        Host::Web => "web",
        Host::GameServer => "game-server",
    })
}
