//! Class and subclass endpoints.

use std::sync::Arc;

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::json;

use ontograph_core::{vocab, Triple, TriplePattern};

use super::{created_or_rejected, deleted_or_rejected};
use crate::error::Result;
use crate::state::AppState;

/// Response body for the class listing.
#[derive(Serialize)]
pub struct ClassList {
    pub data: Vec<String>,
}

/// One subclass-to-parent pair.
#[derive(Serialize)]
pub struct SubclassPair {
    pub subclass: String,
    pub parent: String,
}

#[derive(Debug, Deserialize)]
pub struct CreateClassParams {
    pub classname: String,
}

#[derive(Debug, Deserialize)]
pub struct DeleteClassParams {
    pub subject_class: String,
}

#[derive(Debug, Deserialize)]
pub struct RenameClassParams {
    pub classname: String,
    pub new_name: String,
}

#[derive(Debug, Deserialize)]
pub struct CreateSubclassParams {
    pub classname: String,
    pub parent: String,
}

#[derive(Debug, Deserialize)]
pub struct DeleteSubclassParams {
    pub subclass_name: String,
    pub parent: String,
}

/// List all OWL classes.
///
/// GET /class/
pub async fn list_classes(State(state): State<Arc<AppState>>) -> Result<Response> {
    let pattern = TriplePattern {
        relation: Some(vocab::rdf_type()),
        object: Some(vocab::owl_class()),
        ..Default::default()
    };

    let data = state
        .store
        .read_triples(&pattern)
        .await?
        .into_iter()
        .map(|b| b.subject)
        .collect();

    Ok(Json(ClassList { data }).into_response())
}

/// Create a class.
///
/// POST /classes/create/
pub async fn create_class(
    State(state): State<Arc<AppState>>,
    Query(params): Query<CreateClassParams>,
) -> Result<Response> {
    let class = state.mint_iri(&params.classname)?;
    let triple = Triple::new(class, vocab::rdf_type(), vocab::owl_class());
    Ok(created_or_rejected(state.store.insert_triple(&triple).await?))
}

/// Delete a class.
///
/// DELETE /class/delete
pub async fn delete_class(
    State(state): State<Arc<AppState>>,
    Query(params): Query<DeleteClassParams>,
) -> Result<Response> {
    let class = state.mint_iri(&params.subject_class)?;
    let triple = Triple::new(class, vocab::rdf_type(), vocab::owl_class());
    Ok(deleted_or_rejected(state.store.delete_triple(&triple).await?))
}

/// Rename a class: delete the old typing triple, insert the new one.
/// The store verdicts are not inspected.
///
/// POST /class/rename/
pub async fn rename_class(
    State(state): State<Arc<AppState>>,
    Query(params): Query<RenameClassParams>,
) -> Result<Response> {
    let old = Triple::new(
        state.mint_iri(&params.classname)?,
        vocab::rdf_type(),
        vocab::owl_class(),
    );
    let new = Triple::new(
        state.mint_iri(&params.new_name)?,
        vocab::rdf_type(),
        vocab::owl_class(),
    );

    state.store.delete_triple(&old).await?;
    state.store.insert_triple(&new).await?;

    Ok((StatusCode::OK, Json(json!({}))).into_response())
}

/// List subclass-to-parent pairs.
///
/// GET /subclasses/
pub async fn list_subclasses(State(state): State<Arc<AppState>>) -> Result<Response> {
    let pattern = TriplePattern {
        relation: Some(vocab::rdfs_sub_class_of()),
        ..Default::default()
    };

    let pairs: Vec<SubclassPair> = state
        .store
        .read_triples(&pattern)
        .await?
        .into_iter()
        .map(|b| SubclassPair {
            subclass: b.subject,
            parent: b.object,
        })
        .collect();

    Ok(Json(pairs).into_response())
}

/// Create a subclass relation.
///
/// POST /subclass/create/
pub async fn create_subclass(
    State(state): State<Arc<AppState>>,
    Query(params): Query<CreateSubclassParams>,
) -> Result<Response> {
    let triple = Triple::new(
        state.mint_iri(&params.classname)?,
        vocab::rdfs_sub_class_of(),
        state.mint_iri(&params.parent)?,
    );
    Ok(created_or_rejected(state.store.insert_triple(&triple).await?))
}

/// Delete a subclass relation.
///
/// DELETE /subclasses/delete
pub async fn delete_subclass(
    State(state): State<Arc<AppState>>,
    Query(params): Query<DeleteSubclassParams>,
) -> Result<Response> {
    let triple = Triple::new(
        state.mint_iri(&params.subclass_name)?,
        vocab::rdfs_sub_class_of(),
        state.mint_iri(&params.parent)?,
    );
    Ok(deleted_or_rejected(state.store.delete_triple(&triple).await?))
}
