//! Health check endpoint.

use actix_web::{HttpResponse, web};
use serde::Serialize;

use crate::middleware::error::AppResult;
use crate::state::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub posts: usize,
    pub timestamp: String,
}

/// GET /api/health
pub async fn health_check(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let posts = state.controller.posts().await?.len();

    Ok(HttpResponse::Ok().json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        posts,
        timestamp: chrono::Utc::now().to_rfc3339(),
    }))
}
