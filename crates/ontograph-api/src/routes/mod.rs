//! HTTP route handlers and router configuration.

mod classes;
mod instances;
mod properties;
mod upload;

use std::sync::Arc;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{delete, get, post};
use axum::{Json, Router};
use serde_json::json;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Build the application router.
pub fn build_router(state: Arc<AppState>) -> Router {
    let cors_enabled = state.config.cors_enabled;

    let mut router = Router::new()
        // Health check
        .route("/health", get(health))
        // Ontology document upload
        .route("/file/upload/", post(upload::upload_file))
        // Classes
        .route("/class/", get(classes::list_classes))
        .route("/classes/create/", post(classes::create_class))
        .route("/class/delete", delete(classes::delete_class))
        .route("/class/rename/", post(classes::rename_class))
        // Subclass relations
        .route("/subclasses/", get(classes::list_subclasses))
        .route("/subclass/create/", post(classes::create_subclass))
        .route("/subclasses/delete", delete(classes::delete_subclass))
        // Object properties
        .route("/object_property/", get(properties::list_object_properties))
        .route(
            "/object_property/create/",
            post(properties::create_object_property),
        )
        .route(
            "/object_property/delete/",
            delete(properties::delete_object_property),
        )
        // Data properties
        .route("/data_property/", get(properties::list_data_properties))
        .route(
            "/data_property/create/",
            post(properties::create_data_property),
        )
        .route(
            "/data_property/connect/",
            post(properties::connect_data_property),
        )
        .route(
            "/data_property/delete/",
            delete(properties::delete_data_property),
        )
        // Named individuals
        .route("/instance/create/", post(instances::create_instance))
        .route("/instance/rename", post(instances::rename_instance))
        .with_state(state)
        .layer(TraceLayer::new_for_http());

    if cors_enabled {
        router = router.layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        );
    }

    router
}

/// Liveness probe.
async fn health() -> Json<serde_json::Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// 201 with an empty body when the store applied the update, 400 with an
/// empty body when it rejected it.
pub(crate) fn created_or_rejected(applied: bool) -> Response {
    if applied {
        (StatusCode::CREATED, Json(json!({}))).into_response()
    } else {
        (StatusCode::BAD_REQUEST, Json(json!({}))).into_response()
    }
}

/// 204 when the store applied the delete, 400 with an empty body when it
/// rejected it.
pub(crate) fn deleted_or_rejected(applied: bool) -> Response {
    if applied {
        StatusCode::NO_CONTENT.into_response()
    } else {
        (StatusCode::BAD_REQUEST, Json(json!({}))).into_response()
    }
}
