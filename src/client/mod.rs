//! Blocking calls to the training backend and the hub.
//!
//! Every call is a single round trip: no retries, no caching. The client owns
//! a private current-thread runtime and drives each request to completion
//! before returning.

pub mod credentials;
mod hub;
mod pricing;

use std::time::Duration;

use log::{debug, info};
use reqwest::{header::AUTHORIZATION, RequestBuilder};
use serde::de::DeserializeOwned;
use tokio::runtime::{Builder, Runtime};

pub use credentials::get_user_token;
pub use hub::{Identity, Org, HUB_TOKEN_PREFIX};

pub use crate::tasks::get_task;
use crate::{
    config::Config,
    error::{Error, Result},
};

/// Per-request overrides for [`ApiClient::get_with`] and [`ApiClient::post_with`].
#[derive(Debug, Clone)]
pub struct RequestOptions {
    /// Base URL to use instead of the configured backend.
    pub domain: Option<String>,
    /// Scheme word placed before the token in the `Authorization` header.
    pub token_prefix: String,
    pub suppress_logs: bool,
    pub timeout: Option<Duration>,
    /// Query pairs, form-encoded onto the URL.
    pub query: Vec<(&'static str, String)>,
}

impl Default for RequestOptions {
    fn default() -> Self {
        Self {
            domain: None,
            token_prefix: "Bearer".to_string(),
            suppress_logs: false,
            timeout: None,
            query: Vec::new(),
        }
    }
}

/// A fully read 2xx response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    status: u16,
    body: String,
}

impl ApiResponse {
    pub fn status(&self) -> u16 {
        self.status
    }

    pub fn text(&self) -> &str {
        &self.body
    }

    /// Decodes the body as JSON.
    ///
    /// # Errors
    /// `UpstreamShape` if the body does not decode into `T`.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T> {
        Ok(serde_json::from_str(&self.body)?)
    }
}

/// Builds the `Authorization` header value.
pub fn auth_header(token: &str, prefix: &str) -> String {
    format!("{prefix} {token}")
}

/// Authenticated client for the training backend.
pub struct ApiClient {
    runtime: Runtime,
    http: reqwest::Client,
    config: Config,
}

impl ApiClient {
    /// Creates a new `ApiClient`.
    ///
    /// # Errors
    /// `Io` if the runtime cannot be started, `Transport` if the HTTP client
    /// cannot be built.
    pub fn new(config: Config) -> Result<Self> {
        let runtime = Builder::new_current_thread().enable_all().build()?;
        let http = reqwest::Client::builder()
            .build()
            .map_err(Error::Transport)?;

        Ok(Self {
            runtime,
            http,
            config,
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// `GET {backend}{path}` with a bearer token.
    pub fn get(&self, path: &str, token: &str) -> Result<ApiResponse> {
        self.get_with(path, token, &RequestOptions::default())
    }

    /// `GET {domain}{path}`.
    ///
    /// # Errors
    /// `Unreachable` if no connection could be made, `HttpStatus` on a non-2xx
    /// answer, `Transport` for any other failure.
    pub fn get_with(
        &self,
        path: &str,
        token: &str,
        options: &RequestOptions,
    ) -> Result<ApiResponse> {
        let url = self.url(path, options);
        if !options.suppress_logs {
            info!("Sending GET request to {url}");
        }

        let request = self
            .http
            .get(&url)
            .header(AUTHORIZATION, auth_header(token, &options.token_prefix));
        self.execute(request, url, options)
    }

    /// `POST {backend}{path}` with an optional JSON body.
    pub fn post(
        &self,
        path: &str,
        token: &str,
        payload: Option<&serde_json::Value>,
    ) -> Result<ApiResponse> {
        self.post_with(path, token, payload, &RequestOptions::default())
    }

    /// `POST {domain}{path}`. Errors as in [`ApiClient::get_with`].
    pub fn post_with(
        &self,
        path: &str,
        token: &str,
        payload: Option<&serde_json::Value>,
        options: &RequestOptions,
    ) -> Result<ApiResponse> {
        let url = self.url(path, options);
        if !options.suppress_logs {
            info!("Sending POST request to {url}");
        }

        let mut request = self
            .http
            .post(&url)
            .header(AUTHORIZATION, auth_header(token, &options.token_prefix));
        if let Some(payload) = payload {
            request = request.json(payload);
        }
        self.execute(request, url, options)
    }

    fn url(&self, path: &str, options: &RequestOptions) -> String {
        let domain = options
            .domain
            .as_deref()
            .unwrap_or(self.config.backend_api());
        format!("{domain}{path}")
    }

    fn execute(
        &self,
        mut request: RequestBuilder,
        url: String,
        options: &RequestOptions,
    ) -> Result<ApiResponse> {
        if !options.query.is_empty() {
            request = request.query(&options.query);
        }
        if let Some(timeout) = options.timeout {
            request = request.timeout(timeout);
        }

        self.runtime.block_on(async move {
            let response = request.send().await.map_err(|e| {
                if e.is_connect() {
                    Error::Unreachable {
                        url: url.clone(),
                        source: e,
                    }
                } else {
                    Error::Transport(e)
                }
            })?;

            let status = response.status();
            let body = response.text().await.map_err(Error::Transport)?;
            debug!("{url} answered {status}");

            if !status.is_success() {
                return Err(Error::HttpStatus {
                    status: status.as_u16(),
                    url,
                    body,
                });
            }

            Ok(ApiResponse {
                status: status.as_u16(),
                body,
            })
        })
    }
}
