use serde::de::DeserializeOwned;
use std::future::Future;
use tracing::{debug, info, instrument};

use crate::config::Config;
use crate::error::ApiError;

use super::endpoint::{Endpoint, Host};
use super::fetch_utils::{check_status, decode_body, transport_failure};
use super::request::RequestParams;
use super::transport::{Credentials, HttpRequest, ReqwestTransport, Transport};
use super::urls::build_endpoint_url;

/// Typed client for the GeoGuessr web API.
///
/// Holds only immutable configuration and a transport, so a shared
/// reference can be used from any number of tasks at once.
///
/// ```rust,no_run
/// use geoguessr_api::api::{ApiClient, Credentials, RequestParams, catalog};
/// use geoguessr_api::{AppError, Config};
///
/// # async fn run() -> Result<(), AppError> {
/// let client = ApiClient::from_config(&Config::default())?;
/// let credentials = Credentials::new("<_ncfa cookie>");
/// let profile = client
///     .invoke(&catalog::PROFILE, &RequestParams::new(), Some(&credentials))
///     .await?;
/// println!("{}", profile.user.nick);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ApiClient<T = ReqwestTransport> {
    transport: T,
    api_base_url: String,
    game_server_url: String,
}

impl ApiClient<ReqwestTransport> {
    /// Builds a client with the reqwest transport and the configured base URLs.
    pub fn from_config(config: &Config) -> Result<Self, reqwest::Error> {
        Ok(Self::new(
            ReqwestTransport::from_config(config)?,
            config.api_base_url.clone(),
            config.game_server_url.clone(),
        ))
    }
}

impl<T: Transport> ApiClient<T> {
    pub fn new(
        transport: T,
        api_base_url: impl Into<String>,
        game_server_url: impl Into<String>,
    ) -> Self {
        ApiClient {
            transport,
            api_base_url: api_base_url.into(),
            game_server_url: game_server_url.into(),
        }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Base URL of the web API, also the site root for page links.
    pub fn api_base_url(&self) -> &str {
        &self.api_base_url
    }

    fn base_url(&self, host: Host) -> &str {
        match host {
            Host::Web => &self.api_base_url,
            Host::GameServer => &self.game_server_url,
        }
    }

    /// Calls one endpoint and decodes its response.
    ///
    /// Exactly one transport call is made, or none when the request can be
    /// rejected locally (missing credentials, bad path parameters). Errors
    /// are never retried.
    pub async fn invoke<R: DeserializeOwned>(
        &self,
        endpoint: &Endpoint<R>,
        params: &RequestParams,
        credentials: Option<&Credentials>,
    ) -> Result<R, ApiError> {
        self.invoke_page(endpoint, params, credentials, None).await
    }

    /// Like [`invoke`](Self::invoke), but gives up as soon as `cancel`
    /// completes. The in-flight exchange is dropped and the result is
    /// `Err(ApiError::Canceled)`.
    pub async fn invoke_cancellable<R, C>(
        &self,
        endpoint: &Endpoint<R>,
        params: &RequestParams,
        credentials: Option<&Credentials>,
        cancel: C,
    ) -> Result<R, ApiError>
    where
        R: DeserializeOwned,
        C: Future<Output = ()>,
    {
        tokio::select! {
            biased;
            _ = cancel => {
                info!("Request to endpoint '{}' canceled by caller", endpoint.name);
                Err(ApiError::Canceled)
            }
            result = self.invoke(endpoint, params, credentials) => result,
        }
    }

    #[instrument(skip(self, endpoint, params, credentials), fields(endpoint = endpoint.name))]
    pub(crate) async fn invoke_page<R: DeserializeOwned>(
        &self,
        endpoint: &Endpoint<R>,
        params: &RequestParams,
        credentials: Option<&Credentials>,
        cursor: Option<&str>,
    ) -> Result<R, ApiError> {
        if endpoint.requires_credentials && credentials.is_none() {
            debug!("No credentials supplied, not sending request");
            return Err(ApiError::missing_credentials(endpoint.name));
        }

        let url = build_endpoint_url(self.base_url(endpoint.host), endpoint, params, cursor)?;
        let url_text = url.to_string();
        info!("{} {}", endpoint.method, url_text);

        let request = HttpRequest {
            method: endpoint.method.as_http(),
            url,
            body: params.body().cloned(),
            credentials: credentials.cloned(),
        };

        let response = self
            .transport
            .send(request)
            .await
            .map_err(|e| transport_failure(&url_text, e))?;

        let body = check_status(endpoint.name, &url_text, response)?;
        decode_body(&url_text, &body)
    }
}
