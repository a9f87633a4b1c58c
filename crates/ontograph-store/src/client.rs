//! AllegroGraph connection management and shared store client.

use std::collections::HashMap;
use std::time::Duration;

use reqwest::header::{ACCEPT, CONTENT_TYPE};
use serde::Deserialize;

/// Errors from store operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("AllegroGraph connection error: {0}")]
    Connection(String),

    #[error("store rejected query (HTTP {status}): {message}")]
    Query { status: u16, message: String },

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Storage error: {0}")]
    Storage(#[from] std::io::Error),

    #[error("invalid upload filename: {0}")]
    InvalidFilename(String),
}

/// Configuration for connecting to AllegroGraph.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    pub base_url: String,
    /// Catalog holding the repository; `None` for the root catalog.
    pub catalog: Option<String>,
    pub repository: String,
    pub user: String,
    pub password: String,
    pub timeout_secs: u64,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:10035".to_string(),
            catalog: None,
            repository: "ontograph".to_string(),
            user: "test".to_string(),
            password: "ontograph-dev".to_string(),
            timeout_secs: 30,
        }
    }
}

impl StoreConfig {
    /// Root URL of the repository, which doubles as its SPARQL query
    /// endpoint. Updates go to `{repository_url}/statements`.
    pub fn repository_url(&self) -> String {
        let base = self.base_url.trim_end_matches('/');
        match &self.catalog {
            Some(catalog) => format!(
                "{base}/catalogs/{catalog}/repositories/{}",
                self.repository
            ),
            None => format!("{base}/repositories/{}", self.repository),
        }
    }
}

/// Thread-safe AllegroGraph client.
///
/// This is the single point of access for all triple-store operations.
/// Every operation is one scoped request/response round trip; nothing is
/// held across calls. Clone is cheap (the connection pool is shared).
#[derive(Clone, Debug)]
pub struct StoreClient {
    http: reqwest::Client,
    repo_url: String,
    user: String,
    password: String,
}

impl StoreClient {
    /// Connect to AllegroGraph and verify the repository is reachable.
    pub async fn connect(config: &StoreConfig) -> Result<Self, StoreError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| StoreError::Connection(e.to_string()))?;

        let client = Self {
            http,
            repo_url: config.repository_url(),
            user: config.user.clone(),
            password: config.password.clone(),
        };

        let response = client
            .http
            .get(format!("{}/size", client.repo_url))
            .basic_auth(&client.user, Some(&client.password))
            .send()
            .await
            .map_err(|e| StoreError::Connection(e.to_string()))?;

        if !response.status().is_success() {
            return Err(StoreError::Connection(format!(
                "repository check returned HTTP {}",
                response.status()
            )));
        }

        let size = response.text().await.unwrap_or_default();
        tracing::info!(
            repository = %client.repo_url,
            size = %size.trim(),
            "Connected to AllegroGraph"
        );
        Ok(client)
    }

    /// Repository URL this client talks to.
    pub fn repository_url(&self) -> &str {
        &self.repo_url
    }

    /// Execute a SELECT query and return the raw result set.
    pub async fn select_raw(&self, query: &str) -> Result<SelectResults, StoreError> {
        let response = self
            .http
            .post(&self.repo_url)
            .basic_auth(&self.user, Some(&self.password))
            .header(CONTENT_TYPE, "application/sparql-query")
            .header(ACCEPT, "application/sparql-results+json")
            .body(query.to_owned())
            .send()
            .await
            .map_err(|e| StoreError::Connection(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(StoreError::Query {
                status: status.as_u16(),
                message,
            });
        }

        response
            .json::<SelectResults>()
            .await
            .map_err(|e| StoreError::Serialization(e.to_string()))
    }

    /// POST an update or an RDF document to the statements endpoint.
    ///
    /// Returns the store's verdict: `Ok(true)` when the store accepted
    /// the payload, `Ok(false)` when it rejected it (4xx). Store-side
    /// faults (5xx) and transport failures are errors.
    pub async fn post_statements(
        &self,
        body: Vec<u8>,
        content_type: &'static str,
    ) -> Result<bool, StoreError> {
        let response = self
            .http
            .post(format!("{}/statements", self.repo_url))
            .basic_auth(&self.user, Some(&self.password))
            .header(CONTENT_TYPE, content_type)
            .body(body)
            .send()
            .await
            .map_err(|e| StoreError::Connection(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            return Ok(true);
        }

        let message = response.text().await.unwrap_or_default();
        if status.is_client_error() {
            tracing::warn!(
                status = status.as_u16(),
                message = %message,
                "Store rejected update"
            );
            return Ok(false);
        }

        Err(StoreError::Query {
            status: status.as_u16(),
            message,
        })
    }

    /// Execute a SPARQL UPDATE against the repository.
    pub async fn update_raw(&self, update: &str) -> Result<bool, StoreError> {
        self.post_statements(update.as_bytes().to_vec(), "application/sparql-update")
            .await
    }
}

/// SPARQL JSON results wire format for SELECT responses.
#[derive(Debug, Deserialize)]
pub struct SelectResults {
    pub results: ResultSet,
}

#[derive(Debug, Deserialize)]
pub struct ResultSet {
    pub bindings: Vec<HashMap<String, RdfValue>>,
}

/// One bound RDF term within a result row.
#[derive(Debug, Deserialize)]
pub struct RdfValue {
    pub value: String,
}
