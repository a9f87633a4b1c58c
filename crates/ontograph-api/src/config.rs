//! Configuration for the ontograph-api server.

use serde::Deserialize;

/// Top-level API configuration.
///
/// Loaded from `ontograph.toml` `[api]` section or `ONTOGRAPH_API__`
/// environment variables.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    /// Socket address the HTTP server binds.
    #[serde(default = "default_listen_addr")]
    pub listen_addr: String,

    /// Directory where uploaded ontology documents are kept.
    #[serde(default = "default_storage_dir")]
    pub storage_dir: String,

    /// Namespace joined onto plain identifiers when minting IRIs.
    #[serde(default = "default_namespace")]
    pub namespace: String,

    /// Whether to serve permissive CORS headers.
    #[serde(default = "default_true")]
    pub cors_enabled: bool,
}

fn default_listen_addr() -> String {
    "0.0.0.0:8888".to_string()
}

fn default_storage_dir() -> String {
    "./ontologies".to_string()
}

fn default_namespace() -> String {
    "http://ontograph.dev/ontology#".to_string()
}

fn default_true() -> bool {
    true
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            listen_addr: default_listen_addr(),
            storage_dir: default_storage_dir(),
            namespace: default_namespace(),
            cors_enabled: default_true(),
        }
    }
}
