//! HTTP introspection client.
//!
//! Sends [`INTROSPECTION_QUERY`] to a GraphQL endpoint and decodes the answer
//! into a [`Schema`]. Supports custom headers, timeouts and retry with
//! exponential backoff.

use crate::load::schema_from_value;
use crate::{IntrospectionError, Result, Schema, INTROSPECTION_QUERY};
use std::collections::HashMap;
use std::time::Duration;

/// Default timeout for introspection requests (30 seconds).
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Default connection timeout (10 seconds).
const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

/// A configurable client for fetching a schema by introspection.
///
/// ```no_run
/// use gqlmodel_schema::IntrospectionClient;
/// use std::time::Duration;
///
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let client = IntrospectionClient::new()
///     .with_header("Authorization", "Bearer my-token")
///     .with_timeout(Duration::from_secs(60))
///     .with_retries(3);
/// let schema = client.fetch_schema("http://localhost:8081/udp/content").await?;
/// println!("{} types", schema.types.len());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct IntrospectionClient {
    headers: HashMap<String, String>,
    timeout: Duration,
    connect_timeout: Duration,
    retries: u32,
}

impl Default for IntrospectionClient {
    fn default() -> Self {
        Self::new()
    }
}

impl IntrospectionClient {
    /// Creates a client with a 30 second timeout, no retries and no headers.
    #[must_use]
    pub fn new() -> Self {
        Self {
            headers: HashMap::new(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            connect_timeout: Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS),
            retries: 0,
        }
    }

    /// Adds an HTTP header sent with every request.
    #[must_use]
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    /// Adds multiple HTTP headers from an iterator.
    #[must_use]
    pub fn with_headers<I, K, V>(mut self, headers: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        for (name, value) in headers {
            self.headers.insert(name.into(), value.into());
        }
        self
    }

    /// Sets the request timeout (connection plus transfer).
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Sets the connection timeout.
    #[must_use]
    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    /// Sets the number of retries after the first attempt fails.
    ///
    /// Delays double from one second: 1s, 2s, 4s, ...
    #[must_use]
    pub fn with_retries(mut self, retries: u32) -> Self {
        self.retries = retries;
        self
    }

    /// Introspects `url` and returns the decoded schema.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails after all retries, the server
    /// answers with an error status, or the body is not an introspection
    /// result.
    #[tracing::instrument(skip(self))]
    pub async fn fetch_schema(&self, url: &str) -> Result<Schema> {
        let mut last_error = None;

        for attempt in 0..=self.retries {
            if attempt > 0 {
                let delay = Duration::from_secs(1 << (attempt - 1).min(6));
                tracing::info!(
                    attempt,
                    delay_secs = delay.as_secs(),
                    "Retrying after delay"
                );
                tokio::time::sleep(delay).await;
            }

            match self.fetch_once(url).await {
                Ok(schema) => return Ok(schema),
                Err(e) => {
                    tracing::warn!(attempt, error = %e, "Request failed");
                    let retryable = Self::is_retryable(&e);
                    last_error = Some(e);
                    if !retryable {
                        break;
                    }
                }
            }
        }

        Err(last_error
            .unwrap_or_else(|| IntrospectionError::Network("No attempts made".to_string())))
    }

    async fn fetch_once(&self, url: &str) -> Result<Schema> {
        let client = reqwest::Client::builder()
            .timeout(self.timeout)
            .connect_timeout(self.connect_timeout)
            .build()
            .map_err(|e| {
                IntrospectionError::Network(format!("Failed to create HTTP client: {e}"))
            })?;

        let body = serde_json::json!({ "query": INTROSPECTION_QUERY });

        tracing::info!("Sending introspection query");
        let mut request = client.post(url).header("Content-Type", "application/json");
        for (name, value) in &self.headers {
            request = request.header(name, value);
        }

        let response = request
            .json(&body)
            .send()
            .await
            .map_err(|e| IntrospectionError::Network(e.to_string()))?;

        let status = response.status();
        tracing::debug!(status = status.as_u16(), "Received response");

        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            tracing::error!(status = status.as_u16(), body = %error_body, "HTTP error response");
            return Err(IntrospectionError::Http(status.as_u16(), error_body));
        }

        let json: serde_json::Value = response.json().await.map_err(|e| {
            tracing::error!(error = %e, "Failed to parse introspection response");
            IntrospectionError::Parse(e.to_string())
        })?;

        let schema = schema_from_value(json)?;
        tracing::info!(types = schema.types.len(), "Introspection successful");
        Ok(schema)
    }

    /// Network errors and 5xx responses are worth retrying; nothing else is.
    fn is_retryable(error: &IntrospectionError) -> bool {
        match error {
            IntrospectionError::Network(_) => true,
            IntrospectionError::Http(status, _) => *status >= 500,
            IntrospectionError::Parse(_)
            | IntrospectionError::Invalid(_)
            | IntrospectionError::Io(_) => false,
        }
    }
}
