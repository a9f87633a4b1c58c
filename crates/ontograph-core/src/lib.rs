//! ontograph-core: shared triple model, vocabulary, and error types for Ontograph.
//!
//! This crate provides the foundational types used across all Ontograph
//! components:
//! - Triple terms with validation and SPARQL rendering
//! - Fully-bound triples (writes) and triple patterns (reads)
//! - Bindings produced by read queries
//! - The fixed RDF/RDFS/OWL vocabulary handlers are allowed to use

pub mod error;
pub mod types;
pub mod vocab;

pub use error::TermError;
pub use types::{Binding, Term, Triple, TriplePattern};
