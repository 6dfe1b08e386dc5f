use std::time::Duration;

use reqwest::header::{ACCEPT, HeaderMap, HeaderName, HeaderValue, USER_AGENT};
use serde::de::DeserializeOwned;
use url::Url;

use crate::{
    error::{Result, SourceError},
    source::Source,
};

/// Timeout applied to every upstream request unless configured otherwise
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Client identifier sent when none is configured
pub const DEFAULT_USER_AGENT: &str = concat!("mcp-brasil/", env!("CARGO_PKG_VERSION"));

/// Single-GET executor shared by the adapters
///
/// Holds a configured `reqwest` handle and nothing per call, so one instance
/// can serve any number of concurrent requests.
#[derive(Clone)]
pub struct SourceClient {
    http: reqwest::Client,
    timeout: Duration,
    source: Source,
}

impl SourceClient {
    pub fn builder(source: Source) -> SourceClientBuilder {
        SourceClientBuilder {
            source,
            timeout: DEFAULT_TIMEOUT,
            user_agent: DEFAULT_USER_AGENT.to_owned(),
            headers: HeaderMap::new(),
        }
    }

    /// Issue one GET and return the body of a successful response
    ///
    /// A non-success status becomes [`SourceError::Upstream`] carrying the
    /// status code and the body text verbatim.
    pub async fn get(&self, url: Url) -> Result<Vec<u8>> {
        tracing::debug!(source = %self.source, url = %redact(&url), "upstream request");

        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        let status = response.status();
        let body = response.bytes().await.map_err(|e| self.transport_error(e))?;

        if !status.is_success() {
            let body = String::from_utf8_lossy(&body).into_owned();
            tracing::warn!(source = %self.source, status = status.as_u16(), "upstream returned an error status");
            return Err(SourceError::Upstream {
                status: status.as_u16(),
                body,
            });
        }

        tracing::debug!(source = %self.source, bytes = body.len(), "upstream response received");

        Ok(body.to_vec())
    }

    /// Issue one GET and decode a successful body as `T`
    pub async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T> {
        let body = self.get(url).await?;
        decode(&body)
    }

    /// Source this client is tagged with
    pub const fn source(&self) -> Source {
        self.source
    }

    /// Configured request timeout
    pub const fn timeout(&self) -> Duration {
        self.timeout
    }

    fn transport_error(&self, error: reqwest::Error) -> SourceError {
        tracing::warn!(source = %self.source, "upstream request failed: {error}");
        SourceError::from_reqwest(error, self.timeout)
    }
}

impl std::fmt::Debug for SourceClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SourceClient")
            .field("source", &self.source)
            .field("timeout", &self.timeout)
            .finish_non_exhaustive()
    }
}

/// Decode a JSON body, reporting mismatches as [`SourceError::Decode`]
pub fn decode<T: DeserializeOwned>(body: &[u8]) -> Result<T> {
    serde_json::from_slice(body).map_err(SourceError::Decode)
}

/// Builder for [`SourceClient`]
pub struct SourceClientBuilder {
    source: Source,
    timeout: Duration,
    user_agent: String,
    headers: HeaderMap,
}

impl SourceClientBuilder {
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    #[must_use]
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Add a credential header, marked sensitive so it never shows up in logs
    pub fn secret_header(mut self, name: &'static str, value: &str) -> Result<Self> {
        let mut value = HeaderValue::from_str(value)
            .map_err(|e| SourceError::Config(format!("value for header '{name}' is not valid: {e}")))?;
        value.set_sensitive(true);

        self.headers.insert(HeaderName::from_static(name), value);
        Ok(self)
    }

    pub fn build(self) -> Result<SourceClient> {
        let mut headers = self.headers;
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(
            USER_AGENT,
            HeaderValue::from_str(&self.user_agent)
                .map_err(|e| SourceError::Config(format!("invalid user agent: {e}")))?,
        );

        let http = reqwest::Client::builder()
            .timeout(self.timeout)
            .default_headers(headers)
            .build()
            .map_err(SourceError::Transport)?;

        Ok(SourceClient {
            http,
            timeout: self.timeout,
            source: self.source,
        })
    }
}

/// Length of a CPF once punctuation is stripped
const CPF_DIGITS: usize = 11;

/// URL for logging: query string dropped, CPF path segments masked
fn redact(url: &Url) -> String {
    let full = url.as_str();
    let without_query = &full[..full.find('?').unwrap_or(full.len())];

    without_query
        .split('/')
        .map(|segment| {
            if segment.len() == CPF_DIGITS && segment.bytes().all(|b| b.is_ascii_digit()) {
                "***"
            } else {
                segment
            }
        })
        .collect::<Vec<_>>()
        .join("/")
}
