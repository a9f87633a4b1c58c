//! ontograph-api: REST façade over the AllegroGraph triple-store.
//!
//! Translates HTTP requests into triple-pattern queries and updates
//! through `ontograph-store`, and serves the ontology upload path. All
//! handlers are request-scoped: state is shared via `Arc`, and every
//! store interaction is one scoped round trip.

pub mod config;
pub mod error;
pub mod routes;
pub mod state;

pub use config::ApiConfig;
pub use error::{ApiError, Result};
pub use state::AppState;
