//! JSON API handlers. Same transitions as the HTML page.

use actix_web::{HttpResponse, web};

use postcraft_core::domain::{PostId, TextKind, View};
use postcraft_shared::ApiResponse;
use postcraft_shared::dto::{CopyRequest, EventForm, ViewRequest};

use super::convert;
use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;
use crate::views::COPY_SUCCEEDED;

/// GET /api/workspace
pub async fn workspace(state: web::Data<AppState>) -> HttpResponse {
    let workspace = state.controller.snapshot().await;
    HttpResponse::Ok().json(ApiResponse::ok(convert::workspace_response(&workspace)))
}

/// PUT /api/workspace/draft
pub async fn update_draft(
    state: web::Data<AppState>,
    body: web::Json<EventForm>,
) -> AppResult<HttpResponse> {
    let draft = convert::description(body.into_inner())?;
    let workspace = state.controller.edit(draft).await;
    Ok(HttpResponse::Ok().json(ApiResponse::ok(convert::workspace_response(&workspace))))
}

/// POST /api/workspace/generate
pub async fn generate(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let workspace = state.controller.generate().await?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok(convert::workspace_response(&workspace))))
}

/// POST /api/workspace/save
pub async fn save(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let post = state.controller.save().await?;
    Ok(HttpResponse::Created().json(ApiResponse::ok(convert::post_response(&post))))
}

/// POST /api/workspace/view - selects `view`, or toggles on an empty body.
///
/// A non-empty body must be a JSON `ViewRequest`; anything else is rejected
/// before the workspace is touched.
pub async fn switch_view(state: web::Data<AppState>, body: web::Bytes) -> AppResult<HttpResponse> {
    let requested = if body.iter().all(u8::is_ascii_whitespace) {
        None
    } else {
        let request: ViewRequest = serde_json::from_slice(&body)
            .map_err(|e| AppError::Validation(format!("不正なリクエストです: {e}")))?;
        request.view
    };

    let workspace = match requested {
        Some(view) => state.controller.show(view.parse::<View>()?).await,
        None => state.controller.toggle_view().await,
    };
    Ok(HttpResponse::Ok().json(ApiResponse::ok(convert::workspace_response(&workspace))))
}

/// GET /api/posts
pub async fn list_posts(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let posts: Vec<_> = state
        .controller
        .posts()
        .await?
        .iter()
        .map(convert::post_response)
        .collect();
    Ok(HttpResponse::Ok().json(ApiResponse::ok(posts)))
}

/// POST /api/posts/{id}/copy
pub async fn copy(
    state: web::Data<AppState>,
    path: web::Path<String>,
    body: web::Json<CopyRequest>,
) -> AppResult<HttpResponse> {
    let kind: TextKind = body.kind.parse()?;
    let id = PostId::from(path.into_inner());

    state.controller.copy(&id, kind).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok_with_message(kind.as_str(), COPY_SUCCEEDED)))
}
