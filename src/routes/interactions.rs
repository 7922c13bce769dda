use actix_web::{web, HttpResponse, Responder};
use validator::Validate;

use crate::models::{ActionKind, ErrorResponse, InteractionRequest, InteractionResponse};
use crate::routes::{store_error_response, AppState};

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/interactions/record", web::post().to(record_interaction));
}

/// Record interaction endpoint
///
/// POST /api/v1/interactions/record
///
/// Request body:
/// ```json
/// {
///   "actorId": "string",
///   "targetId": "string",
///   "action": "LIKE|SUPERLIKE|PASS"
/// }
/// ```
async fn record_interaction(
    state: web::Data<AppState>,
    req: web::Json<InteractionRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "validation_failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    let action = match ActionKind::parse(&req.action) {
        Some(action) => action,
        None => {
            return HttpResponse::BadRequest().json(ErrorResponse {
                error: "invalid_action".to_string(),
                message: "Action must be one of: LIKE, SUPERLIKE, PASS".to_string(),
                status_code: 400,
            });
        }
    };

    match state.recorder.record(&req.actor_id, &req.target_id, action).await {
        Ok(recorded) => {
            tracing::debug!(
                "Recorded interaction {} -> {} ({:?}), ratings now {}/{}",
                req.actor_id,
                req.target_id,
                action,
                recorded.change.gainer_rating,
                recorded.change.loser_rating
            );

            HttpResponse::Ok().json(InteractionResponse {
                success: true,
                interaction_id: recorded.interaction.id,
            })
        }
        Err(e) => store_error_response(e, "Failed to record interaction"),
    }
}
