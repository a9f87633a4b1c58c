//! Shared application state.

use ontograph_core::{Term, TermError};
use ontograph_store::{OntologyVault, StoreClient};

use crate::config::ApiConfig;

/// State shared across all handlers.
///
/// Constructed once in `main`, wrapped in `Arc`, and injected with axum's
/// `State` extractor. There is no process-wide store handle; tests build
/// their own state against a mock store.
pub struct AppState {
    pub store: StoreClient,
    pub vault: OntologyVault,
    pub config: ApiConfig,
}

impl AppState {
    pub fn new(store: StoreClient, vault: OntologyVault, config: ApiConfig) -> Self {
        Self {
            store,
            vault,
            config,
        }
    }

    /// Mint an IRI term from a plain identifier.
    pub fn mint_iri(&self, name: &str) -> Result<Term, TermError> {
        mint_iri(&self.config.namespace, name)
    }
}

/// Identifiers are trimmed and joined onto the configured namespace;
/// anything that already looks absolute passes through unchanged.
pub fn mint_iri(namespace: &str, name: &str) -> Result<Term, TermError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(TermError::Empty);
    }
    if name.contains("://") {
        Term::iri(name)
    } else {
        Term::iri(format!("{namespace}{name}"))
    }
}
