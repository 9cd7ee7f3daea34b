//! Schema loader issuing the introspection request.

use crate::error::LoadError;
use crate::query::request_body;
use gqlbind_schema::Schema;
use reqwest::Url;
use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE, ORIGIN};

const JSON_CONTENT_TYPE: &str = "application/json";

/// Fetches a schema from a GraphQL endpoint by introspection.
///
/// Created through [`LoaderBuilder`](crate::LoaderBuilder).
#[derive(Debug, Clone)]
pub struct SchemaLoader {
    http: reqwest::Client,
    endpoint: Url,
    origin: String,
    token: Option<String>,
}

impl SchemaLoader {
    pub(crate) fn new(
        http: reqwest::Client,
        endpoint: Url,
        origin: String,
        token: Option<String>,
    ) -> Self {
        Self {
            http,
            endpoint,
            origin,
            token,
        }
    }

    /// Returns the endpoint the loader posts to.
    #[must_use]
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Returns the `Origin` header value.
    #[must_use]
    pub fn origin(&self) -> &str {
        &self.origin
    }

    /// Returns true if requests carry a bearer token.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    /// Posts the introspection query and returns the raw response body.
    ///
    /// # Errors
    /// Returns `LoadError` on transport failure or a non-200 status.
    pub async fn fetch_raw(&self) -> Result<String, LoadError> {
        tracing::info!("Fetching schema from {}", self.endpoint);

        let mut request = self
            .http
            .post(self.endpoint.clone())
            .header(CONTENT_TYPE, JSON_CONTENT_TYPE)
            .header(ACCEPT, JSON_CONTENT_TYPE)
            .header(ORIGIN, &self.origin)
            .json(&request_body());
        if let Some(token) = &self.token {
            request = request.header(AUTHORIZATION, format!("bearer {token}"));
        }

        let response = request.send().await?;
        let status = response.status();
        let body = response.text().await?;

        if status != reqwest::StatusCode::OK {
            tracing::error!("Introspection failed with status {}", status);
            return Err(LoadError::Status { status, body });
        }

        tracing::debug!(bytes = body.len(), "introspection response received");
        Ok(body)
    }

    /// Posts the introspection query and parses the response into a schema.
    ///
    /// # Errors
    /// Returns `LoadError` on transport failure, a non-200 status, or an
    /// undecodable response.
    pub async fn load(&self) -> Result<Schema, LoadError> {
        let body = self.fetch_raw().await?;
        Ok(gqlbind_schema::parse_introspection(&body)?)
    }
}
