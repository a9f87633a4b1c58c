//! ontograph-store: AllegroGraph client for the Ontograph service.
//!
//! This crate is the single point of access to the triple-store. All reads
//! and writes flow through `StoreClient`, which renders validated terms
//! into SPARQL text and performs one scoped HTTP round trip per operation
//! against the repository's SPARQL endpoint.

pub mod client;
pub mod mutations;
pub mod queries;
pub mod upload;

pub use client::{StoreClient, StoreConfig, StoreError};
pub use upload::{OntologyVault, RdfFormat};
