//! Named-individual endpoints.

use std::sync::Arc;

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Deserialize;
use serde_json::json;

use ontograph_core::{vocab, Triple};

use crate::error::Result;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct CreateInstanceParams {
    pub instance_name: String,
    pub instance_type: String,
}

#[derive(Debug, Deserialize)]
pub struct RenameInstanceParams {
    pub instance_name: String,
    pub new_name: String,
}

/// Create a named individual and attach its type.
///
/// POST /instance/create/
///
/// The individual typing triple decides acceptance; the verdict of the
/// follow-up type attachment is not inspected.
pub async fn create_instance(
    State(state): State<Arc<AppState>>,
    Query(params): Query<CreateInstanceParams>,
) -> Result<Response> {
    let individual = state.mint_iri(&params.instance_name)?;
    let class = state.mint_iri(&params.instance_type)?;

    let typing = Triple::new(
        individual.clone(),
        vocab::rdf_type(),
        vocab::owl_named_individual(),
    );
    if !state.store.insert_triple(&typing).await? {
        return Ok((StatusCode::BAD_REQUEST, Json(json!({}))).into_response());
    }

    let attachment = Triple::new(individual, vocab::rdf_type(), class);
    state.store.insert_triple(&attachment).await?;

    Ok((StatusCode::CREATED, Json(json!({}))).into_response())
}

/// Rename a named individual: delete the old typing triple, insert the
/// new one. The store verdicts are not inspected.
///
/// POST /instance/rename
pub async fn rename_instance(
    State(state): State<Arc<AppState>>,
    Query(params): Query<RenameInstanceParams>,
) -> Result<Response> {
    let old = Triple::new(
        state.mint_iri(&params.instance_name)?,
        vocab::rdf_type(),
        vocab::owl_named_individual(),
    );
    let new = Triple::new(
        state.mint_iri(&params.new_name)?,
        vocab::rdf_type(),
        vocab::owl_named_individual(),
    );

    state.store.delete_triple(&old).await?;
    state.store.insert_triple(&new).await?;

    Ok((StatusCode::OK, Json(json!({}))).into_response())
}
