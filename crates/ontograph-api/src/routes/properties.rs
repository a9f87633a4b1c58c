//! Object-property and data-property endpoints.

use std::sync::Arc;

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Deserialize;

use ontograph_core::{vocab, Term, Triple, TriplePattern};

use super::{created_or_rejected, deleted_or_rejected};
use crate::error::Result;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ObjectPropertyParams {
    pub object_property: String,
}

#[derive(Debug, Deserialize)]
pub struct DataPropertyParams {
    pub data_property: String,
}

#[derive(Debug, Deserialize)]
pub struct ConnectDataPropertyParams {
    pub subject: String,
    pub data_property: String,
    pub object_class: String,
}

/// List all object properties.
///
/// GET /object_property/
pub async fn list_object_properties(State(state): State<Arc<AppState>>) -> Result<Response> {
    list_typed_subjects(&state, vocab::owl_object_property()).await
}

/// List all data properties.
///
/// GET /data_property/
pub async fn list_data_properties(State(state): State<Arc<AppState>>) -> Result<Response> {
    list_typed_subjects(&state, vocab::owl_datatype_property()).await
}

/// Create an object property.
///
/// POST /object_property/create/
pub async fn create_object_property(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ObjectPropertyParams>,
) -> Result<Response> {
    let triple = Triple::new(
        state.mint_iri(&params.object_property)?,
        vocab::rdf_type(),
        vocab::owl_object_property(),
    );
    Ok(created_or_rejected(state.store.insert_triple(&triple).await?))
}

/// Create a data property.
///
/// POST /data_property/create/
pub async fn create_data_property(
    State(state): State<Arc<AppState>>,
    Query(params): Query<DataPropertyParams>,
) -> Result<Response> {
    let triple = Triple::new(
        state.mint_iri(&params.data_property)?,
        vocab::rdf_type(),
        vocab::owl_datatype_property(),
    );
    Ok(created_or_rejected(state.store.insert_triple(&triple).await?))
}

/// Attach a data property to a class.
///
/// POST /data_property/connect/
pub async fn connect_data_property(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ConnectDataPropertyParams>,
) -> Result<Response> {
    let triple = Triple::new(
        state.mint_iri(&params.subject)?,
        state.mint_iri(&params.data_property)?,
        state.mint_iri(&params.object_class)?,
    );
    Ok(created_or_rejected(state.store.insert_triple(&triple).await?))
}

/// Delete an object property.
///
/// DELETE /object_property/delete/
pub async fn delete_object_property(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ObjectPropertyParams>,
) -> Result<Response> {
    let triple = Triple::new(
        state.mint_iri(&params.object_property)?,
        vocab::rdf_type(),
        vocab::owl_object_property(),
    );
    Ok(deleted_or_rejected(state.store.delete_triple(&triple).await?))
}

/// Delete a data property typing triple. The store verdict is not
/// inspected; the endpoint reports 204 regardless.
///
/// DELETE /data_property/delete/
pub async fn delete_data_property(
    State(state): State<Arc<AppState>>,
    Query(params): Query<DataPropertyParams>,
) -> Result<Response> {
    let triple = Triple::new(
        state.mint_iri(&params.data_property)?,
        vocab::rdf_type(),
        vocab::owl_datatype_property(),
    );
    state.store.delete_triple(&triple).await?;
    Ok(StatusCode::NO_CONTENT.into_response())
}

async fn list_typed_subjects(state: &AppState, class: Term) -> Result<Response> {
    let pattern = TriplePattern {
        relation: Some(vocab::rdf_type()),
        object: Some(class),
        ..Default::default()
    };

    let subjects: Vec<String> = state
        .store
        .read_triples(&pattern)
        .await?
        .into_iter()
        .map(|b| b.subject)
        .collect();

    Ok(Json(subjects).into_response())
}
