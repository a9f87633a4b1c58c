//! Read operations and the SPARQL SELECT builder.

use std::collections::HashMap;

use ontograph_core::{vocab, Binding, Term, TriplePattern};

use crate::client::{RdfValue, StoreClient, StoreError};

impl StoreClient {
    /// Read all triples matching the pattern, in store-delivered order.
    ///
    /// Returns an empty list when nothing matches. Positions bound in the
    /// pattern resolve to the pattern's own term value; unbound positions
    /// resolve from the result row.
    pub async fn read_triples(
        &self,
        pattern: &TriplePattern,
    ) -> Result<Vec<Binding>, StoreError> {
        let query = select_query(pattern);
        let result = self.select_raw(&query).await?;

        let mut bindings = Vec::with_capacity(result.results.bindings.len());
        for row in &result.results.bindings {
            bindings.push(Binding {
                subject: resolve(row, "s", pattern.subject.as_ref()),
                relation: resolve(row, "r", pattern.relation.as_ref()),
                object: resolve(row, "o", pattern.object.as_ref()),
            });
        }
        Ok(bindings)
    }
}

/// Build the SELECT for a pattern. Bound positions are substituted with
/// their rendered term; unbound positions stay variables.
pub(crate) fn select_query(pattern: &TriplePattern) -> String {
    format!(
        "{}SELECT ?s ?r ?o WHERE {{ {} {} {} }}",
        vocab::sparql_prefixes(),
        term_or_var(pattern.subject.as_ref(), "?s"),
        term_or_var(pattern.relation.as_ref(), "?r"),
        term_or_var(pattern.object.as_ref(), "?o"),
    )
}

fn term_or_var(term: Option<&Term>, var: &str) -> String {
    match term {
        Some(t) => t.to_string(),
        None => var.to_owned(),
    }
}

fn resolve(row: &HashMap<String, RdfValue>, var: &str, term: Option<&Term>) -> String {
    match term {
        Some(t) => t.value().to_owned(),
        None => row.get(var).map(|v| v.value.clone()).unwrap_or_default(),
    }
}
