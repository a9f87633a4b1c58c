//! Write operations: INSERT DATA and DELETE DATA updates.
//!
//! Updates are attempt-once; there are no retries and no transactions
//! spanning calls. The store's verdict comes back as a boolean. Inserting
//! a duplicate triple and deleting an absent one are store-level no-op
//! successes, not errors.

use ontograph_core::{vocab, Triple};

use crate::client::{StoreClient, StoreError};

impl StoreClient {
    /// Insert exactly one fully-bound triple.
    pub async fn insert_triple(&self, triple: &Triple) -> Result<bool, StoreError> {
        tracing::debug!(
            subject = %triple.subject,
            relation = %triple.relation,
            object = %triple.object,
            "Inserting triple"
        );
        self.update_raw(&insert_data(triple)).await
    }

    /// Delete exactly one fully-bound triple.
    pub async fn delete_triple(&self, triple: &Triple) -> Result<bool, StoreError> {
        tracing::debug!(
            subject = %triple.subject,
            relation = %triple.relation,
            object = %triple.object,
            "Deleting triple"
        );
        self.update_raw(&delete_data(triple)).await
    }
}

fn insert_data(triple: &Triple) -> String {
    format!(
        "{}INSERT DATA {{ {} {} {} . }}",
        vocab::sparql_prefixes(),
        triple.subject,
        triple.relation,
        triple.object,
    )
}

fn delete_data(triple: &Triple) -> String {
    format!(
        "{}DELETE DATA {{ {} {} {} . }}",
        vocab::sparql_prefixes(),
        triple.subject,
        triple.relation,
        triple.object,
    )
}
