//! HTTP client configuration and request plumbing.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` builds one [`HttpClient`] from [`HttpConfig::from_build_env`] and
//! provides it through context. Every request goes through the client so the
//! base URL, credential mode and default headers are applied uniformly, and
//! every response passes through `interceptor::intercept`.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): requests fail with [`ApiError::Unavailable`].

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "http_test.rs"]
mod http_test;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::state::store::SharedSessionStore;

/// API base URL used when no override was compiled in.
pub const FALLBACK_API_URL: &str = "https://hospital-management-system-ye7s.onrender.com";

pub const UNAUTHORIZED: u16 = 401;

pub const CONTENT_TYPE: &str = "Content-Type";
pub const JSON_CONTENT_TYPE: &str = "application/json";

/// Failure of an API call.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(String),
    #[error("server responded {status}")]
    Status { status: u16, body: String },
    #[error("invalid response body: {0}")]
    Decode(String),
    #[error("not available on server")]
    Unavailable,
    #[error("unsupported request: {0}")]
    Unsupported(String),
}

impl ApiError {
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Status { status: UNAUTHORIZED, .. })
    }

    /// The backend reports failures as `{"error": "..."}`; return that text.
    pub fn server_message(&self) -> Option<String> {
        let Self::Status { body, .. } = self else {
            return None;
        };
        let value: serde_json::Value = serde_json::from_str(body).ok()?;
        value.get("error")?.as_str().map(str::to_owned)
    }

    /// Message suitable for showing to the user.
    pub fn user_message(&self) -> String {
        self.server_message().unwrap_or_else(|| self.to_string())
    }
}

/// Request defaults applied to every outgoing call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpConfig {
    pub base_url: String,
    /// Send cookies on cross-origin requests.
    pub with_credentials: bool,
    pub default_headers: Vec<(String, String)>,
}

impl HttpConfig {
    /// Build config from the `HOSPITAL_API_URL` value captured at compile time.
    pub fn from_build_env() -> Self {
        Self::new(option_env!("HOSPITAL_API_URL"))
    }

    /// Build config with an optional base URL override. An empty override
    /// falls back to [`FALLBACK_API_URL`].
    pub fn new(base_url_override: Option<&str>) -> Self {
        let base_url = base_url_override
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .unwrap_or(FALLBACK_API_URL)
            .trim_end_matches('/')
            .to_owned();
        Self {
            base_url,
            with_credentials: true,
            default_headers: vec![(CONTENT_TYPE.to_owned(), JSON_CONTENT_TYPE.to_owned())],
        }
    }

    /// Resolve `path` against the base URL. Absolute URLs pass through.
    pub fn url(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            return path.to_owned();
        }
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self::from_build_env()
    }
}

/// Configured API client shared through Leptos context.
#[derive(Clone)]
pub struct HttpClient {
    config: HttpConfig,
    store: SharedSessionStore,
}

impl HttpClient {
    pub fn new(config: HttpConfig, store: SharedSessionStore) -> Self {
        Self { config, store }
    }

    pub fn config(&self) -> &HttpConfig {
        &self.config
    }

    pub fn session_store(&self) -> &SharedSessionStore {
        &self.store
    }

    /// `GET path` and decode the JSON response.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure, non-2xx status, or an
    /// undecodable body.
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let request = self.prepare(gloo_net::http::Request::get(&self.config.url(path)));
            let resp = self.dispatch(request.send().await).await?;
            resp.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = path;
            Err(ApiError::Unavailable)
        }
    }

    /// `POST path` with a JSON body and decode the JSON response.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on encode or transport failure, non-2xx status,
    /// or an undecodable body.
    pub async fn post_json<B: Serialize, T: DeserializeOwned>(&self, path: &str, body: &B) -> Result<T, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let request = self
                .prepare(gloo_net::http::Request::post(&self.config.url(path)))
                .json(body)
                .map_err(|e| ApiError::Transport(e.to_string()))?;
            let resp = self.dispatch(request.send().await).await?;
            resp.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (path, body);
            Err(ApiError::Unavailable)
        }
    }

    /// `POST path` without a body, ignoring the response body.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure or non-2xx status.
    pub async fn post_empty(&self, path: &str) -> Result<(), ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let request = self.prepare(gloo_net::http::Request::post(&self.config.url(path)));
            self.dispatch(request.send().await).await?;
            Ok(())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = path;
            Err(ApiError::Unavailable)
        }
    }

    #[cfg(feature = "hydrate")]
    fn prepare(&self, mut builder: gloo_net::http::RequestBuilder) -> gloo_net::http::RequestBuilder {
        if self.config.with_credentials {
            builder = builder.credentials(web_sys::RequestCredentials::Include);
        }
        for (name, value) in &self.config.default_headers {
            builder = builder.header(name, value);
        }
        builder
    }

    #[cfg(feature = "hydrate")]
    async fn dispatch(
        &self,
        sent: Result<gloo_net::http::Response, gloo_net::Error>,
    ) -> Result<gloo_net::http::Response, ApiError> {
        let resp = sent.map_err(|e| ApiError::Transport(e.to_string()))?;
        let status = resp.status();
        let body = if resp.ok() { String::new() } else { resp.text().await.unwrap_or_default() };
        super::interceptor::intercept(status, &body, self.store.as_ref(), crate::util::navigate::go)?;
        Ok(resp)
    }
}
