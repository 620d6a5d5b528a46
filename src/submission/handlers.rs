use super::types::{CheckExistsResponse, SubmitResponse};
use super::validate::validate_submission;
use crate::catalog::category::{CATEGORY_ALL, CATEGORY_NEW};
use crate::catalog::store::CatalogStore;
use crate::catalog::types::NewResource;

use axum::extract::Query;
use axum::http::StatusCode;
use axum::{Extension, Json};
use serde::Deserialize;
use std::sync::Arc;

#[derive(Deserialize)]
pub struct CheckParams {
    pub url: String,
}

pub async fn handle_submit_resource(
    Extension(store): Extension<Arc<CatalogStore>>,
    Json(submission): Json<NewResource>,
) -> (StatusCode, Json<SubmitResponse>) {
    let validation = validate_submission(&submission);
    if !validation.valid {
        return (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(SubmitResponse {
                valid: false,
                message: validation.message,
                id: None,
            }),
        );
    }

    match store.append_new_resource(submission).await {
        Ok(resource) => (
            StatusCode::CREATED,
            Json(SubmitResponse {
                valid: true,
                message: None,
                id: Some(resource.id),
            }),
        ),
        Err(e) => {
            tracing::error!("Error saving new resource: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(SubmitResponse {
                    valid: false,
                    message: Some("Failed to save resource".to_string()),
                    id: None,
                }),
            )
        }
    }
}

/// Answers whether `url` is already present in the catalog, counting both the
/// published `all` dataset and submissions still pending moderation.
pub async fn handle_check_resource_exists(
    Query(params): Query<CheckParams>,
    Extension(store): Extension<Arc<CatalogStore>>,
) -> Json<CheckExistsResponse> {
    let published = store.load(CATEGORY_ALL).await;
    let pending = store.load(CATEGORY_NEW).await;

    let exists = published
        .iter()
        .chain(pending.iter())
        .any(|resource| resource.url == params.url);

    Json(CheckExistsResponse { exists })
}
