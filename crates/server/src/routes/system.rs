use actix_web::{get, web, HttpResponse};

use crate::state::AppState;
use crate::types::HealthReply;

/// Service health and configuration summary
#[get("/health")]
pub async fn health(
    state: web::Data<std::sync::Arc<AppState>>,
) -> actix_web::Result<HttpResponse> {
    Ok(HttpResponse::Ok().json(HealthReply {
        status: "ok",
        model: state.config.gemini_model.clone(),
        credential_configured: state.config.has_credential(),
        started_at: state.started_at,
    }))
}
