//! Loader builder and endpoint configuration.

use crate::error::LoadError;
use crate::loader::SchemaLoader;
use reqwest::Url;
use std::time::Duration;

/// Default endpoint (US region).
pub const US_ENDPOINT: &str = "https://us.api.mondoo.com/query";

/// EU region endpoint.
pub const EU_ENDPOINT: &str = "https://eu.api.mondoo.com/query";

/// Default user agent sent with the introspection request.
pub const DEFAULT_USER_AGENT: &str = concat!("gqlbind/", env!("CARGO_PKG_VERSION"));

/// Builder for configuring and creating a [`SchemaLoader`].
#[derive(Debug, Clone)]
pub struct LoaderBuilder {
    endpoint: String,
    api_token: Option<String>,
    no_auth: bool,
    user_agent: String,
    timeout: Duration,
}

impl Default for LoaderBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl LoaderBuilder {
    /// Creates a new builder targeting the US endpoint.
    #[must_use]
    pub fn new() -> Self {
        Self {
            endpoint: US_ENDPOINT.to_string(),
            api_token: None,
            no_auth: false,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout: Duration::from_secs(30),
        }
    }

    /// Sets an explicit endpoint URL.
    #[must_use]
    pub fn endpoint(mut self, url: impl Into<String>) -> Self {
        self.endpoint = url.into();
        self
    }

    /// Targets the US region endpoint.
    #[must_use]
    pub fn use_us_region(self) -> Self {
        self.endpoint(US_ENDPOINT)
    }

    /// Targets the EU region endpoint.
    #[must_use]
    pub fn use_eu_region(self) -> Self {
        self.endpoint(EU_ENDPOINT)
    }

    /// Sets the API token sent as a bearer credential.
    #[must_use]
    pub fn api_token(mut self, token: impl Into<String>) -> Self {
        self.api_token = Some(token.into());
        self
    }

    /// Sends the request without any credential.
    #[must_use]
    pub fn without_authentication(mut self) -> Self {
        self.no_auth = true;
        self
    }

    /// Sets the user agent.
    #[must_use]
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = agent.into();
        self
    }

    /// Sets the request timeout.
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Returns the configured endpoint.
    #[must_use]
    pub fn endpoint_url(&self) -> &str {
        &self.endpoint
    }

    /// Validates the configuration and builds the loader.
    ///
    /// # Errors
    /// Returns `LoadError` if the authentication settings conflict or are
    /// missing, if the endpoint is not a valid URL, or if the HTTP client
    /// cannot be created.
    pub fn build(self) -> Result<SchemaLoader, LoadError> {
        let token = match (self.no_auth, self.api_token) {
            (true, Some(_)) => {
                return Err(LoadError::auth(
                    "an API token was set together with without_authentication",
                ));
            }
            (true, None) => None,
            (false, Some(token)) if token.is_empty() => {
                return Err(LoadError::auth("empty API token"));
            }
            (false, Some(token)) => Some(token),
            (false, None) => return Err(LoadError::auth("no authentication configured")),
        };

        let endpoint = Url::parse(&self.endpoint).map_err(|e| LoadError::InvalidEndpoint {
            endpoint: self.endpoint.clone(),
            reason: e.to_string(),
        })?;
        let host = endpoint
            .host_str()
            .ok_or_else(|| LoadError::InvalidEndpoint {
                endpoint: self.endpoint.clone(),
                reason: "missing host".to_string(),
            })?;
        let origin = format!("https://{host}");

        let http = reqwest::Client::builder()
            .user_agent(self.user_agent)
            .timeout(self.timeout)
            .build()?;

        tracing::debug!(
            endpoint = %endpoint,
            authenticated = token.is_some(),
            "schema loader configured"
        );

        Ok(SchemaLoader::new(http, endpoint, origin, token))
    }
}
