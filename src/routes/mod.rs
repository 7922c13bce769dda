// Route exports
pub mod interactions;
pub mod recommendations;

use std::sync::Arc;

use actix_web::{web, HttpResponse};

use crate::core::{Ranker, TfIdfSimilarity};
use crate::models::ErrorResponse;
use crate::services::{InteractionRecorder, ProfileStore, StoreError};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<ProfileStore>,
    pub ranker: Arc<Ranker<TfIdfSimilarity>>,
    pub recorder: Arc<InteractionRecorder>,
    /// Upper bound on the candidate corpus fetched per ranking request
    pub candidate_limit: usize,
    /// Cap applied to client-requested result limits
    pub max_limit: usize,
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            .configure(recommendations::configure)
            .configure(interactions::configure),
    );
}

/// Map store failures onto distinct HTTP error shapes.
///
/// NotFound and InvalidInput stay distinguishable from backend outages so
/// clients can tell "nothing to show" from "bad request" from "retry
/// later".
pub(crate) fn store_error_response(err: StoreError, context: &str) -> HttpResponse {
    match err {
        StoreError::NotFound(message) => HttpResponse::NotFound().json(ErrorResponse {
            error: "not_found".to_string(),
            message,
            status_code: 404,
        }),
        StoreError::InvalidInput(message) => HttpResponse::BadRequest().json(ErrorResponse {
            error: "invalid_input".to_string(),
            message,
            status_code: 400,
        }),
        other => {
            tracing::error!("{}: {}", context, other);
            HttpResponse::ServiceUnavailable().json(ErrorResponse {
                error: "store_unavailable".to_string(),
                message: other.to_string(),
                status_code: 503,
            })
        }
    }
}
