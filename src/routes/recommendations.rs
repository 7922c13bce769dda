use std::collections::HashMap;

use actix_web::{web, HttpResponse, Responder};
use validator::Validate;

use crate::core::score_percent;
use crate::models::{
    ErrorResponse, HealthResponse, Profile, RecommendationsRequest, RecommendationsResponse,
    RecommendedProfile,
};
use crate::routes::{store_error_response, AppState};
use crate::services::StoreError;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check))
        .route("/recommendations/find", web::post().to(find_recommendations));
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    let store_healthy = state.store.health_check().await.unwrap_or(false);

    let status = if store_healthy { "healthy" } else { "degraded" };

    HttpResponse::Ok().json(HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Find recommendations endpoint
///
/// POST /api/v1/recommendations/find
///
/// Request body:
/// ```json
/// {
///   "userId": "string",
///   "limit": 20
/// }
/// ```
async fn find_recommendations(
    state: web::Data<AppState>,
    req: web::Json<RecommendationsRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for find_recommendations request: {:?}", errors);
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "validation_failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    let user_id = &req.user_id;
    let limit = (req.limit as usize).min(state.max_limit);

    tracing::info!("Finding recommendations for user: {}, limit: {}", user_id, limit);

    let target = match state.store.fetch_profile(user_id).await {
        Ok(profile) => profile,
        Err(StoreError::NotFound(_)) => {
            // Unknown target ranks against nothing: empty list, not an error
            tracing::debug!("No profile for {}, returning empty result", user_id);
            return HttpResponse::Ok().json(RecommendationsResponse {
                results: vec![],
                total_candidates: 0,
            });
        }
        Err(e) => return store_error_response(e, "Failed to fetch target profile"),
    };

    let candidates = match state
        .store
        .fetch_eligible_candidates(user_id, state.candidate_limit)
        .await
    {
        Ok(candidates) => candidates,
        Err(e) => return store_error_response(e, "Failed to fetch candidates"),
    };

    tracing::debug!("Found {} candidates for {}", candidates.len(), user_id);

    let outcome = state.ranker.rank(&target, &candidates, limit);

    // Hydrate display fields from the candidate batch already in memory
    let by_id: HashMap<&str, &Profile> =
        candidates.iter().map(|p| (p.id.as_str(), p)).collect();

    let results: Vec<RecommendedProfile> = outcome
        .ranked
        .iter()
        .filter_map(|entry| {
            by_id.get(entry.profile_id.as_str()).map(|profile| RecommendedProfile {
                user_id: profile.id.clone(),
                display_name: profile.display_name.clone(),
                age: profile.age,
                photos: profile.photos.clone(),
                match_score: score_percent(entry.score),
            })
        })
        .collect();

    tracing::info!(
        "Returning {} recommendations for user {} (from {} candidates)",
        results.len(),
        user_id,
        outcome.total_candidates
    );

    HttpResponse::Ok().json(RecommendationsResponse {
        results,
        total_candidates: outcome.total_candidates,
    })
}
