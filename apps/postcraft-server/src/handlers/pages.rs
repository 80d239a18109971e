//! HTML page handlers. Forms post here and get the re-rendered page back.

use actix_web::http::StatusCode;
use actix_web::http::header::{self, ContentType};
use actix_web::{HttpResponse, web};

use postcraft_core::domain::{PostId, TextKind, View};
use postcraft_shared::dto::EventForm;

use super::convert;
use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;
use crate::views::{self, COPY_FAILED, COPY_SUCCEEDED, Notice, POST_NOT_FOUND};

/// GET /
pub async fn index(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    render(&state, None, StatusCode::OK).await
}

/// POST /generate
pub async fn generate(
    state: web::Data<AppState>,
    form: web::Form<EventForm>,
) -> AppResult<HttpResponse> {
    let result = match apply_form(&state, form.into_inner()).await {
        Ok(()) => state.controller.generate().await.map(drop),
        Err(e) => Err(e),
    };

    match result {
        Ok(()) => render(&state, None, StatusCode::OK).await,
        Err(AppError::Validation(message)) => {
            render(&state, Some(Notice::error(message)), StatusCode::UNPROCESSABLE_ENTITY).await
        }
        Err(e) => Err(e),
    }
}

/// POST /save
pub async fn save(
    state: web::Data<AppState>,
    form: web::Form<EventForm>,
) -> AppResult<HttpResponse> {
    let result = match apply_form(&state, form.into_inner()).await {
        Ok(()) => state.controller.save().await.map(drop),
        Err(e) => Err(e),
    };

    match result {
        Ok(()) => Ok(back_to_page()),
        Err(AppError::Validation(message)) => {
            render(&state, Some(Notice::error(message)), StatusCode::UNPROCESSABLE_ENTITY).await
        }
        Err(e) => Err(e),
    }
}

/// POST /view/{view}
pub async fn switch_view(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let view: View = path.into_inner().parse()?;
    state.controller.show(view).await;
    Ok(back_to_page())
}

/// POST /posts/{id}/copy/{kind}
pub async fn copy(
    state: web::Data<AppState>,
    path: web::Path<(String, String)>,
) -> AppResult<HttpResponse> {
    let (id, kind) = path.into_inner();
    let result = match kind.parse::<TextKind>() {
        Ok(kind) => state.controller.copy(&PostId::from(id), kind).await,
        Err(e) => Err(e.into()),
    };

    let (notice, status) = match result {
        Ok(()) => (Notice::success(COPY_SUCCEEDED), StatusCode::OK),
        Err(AppError::Clipboard(_)) => (Notice::error(COPY_FAILED), StatusCode::BAD_GATEWAY),
        Err(AppError::NotFound(_)) => (Notice::error(POST_NOT_FOUND), StatusCode::NOT_FOUND),
        Err(AppError::Validation(message)) => {
            (Notice::error(message), StatusCode::UNPROCESSABLE_ENTITY)
        }
        Err(e) => return Err(e),
    };
    render(&state, Some(notice), status).await
}

/// Replace the draft with the submitted fields.
async fn apply_form(state: &AppState, form: EventForm) -> AppResult<()> {
    let draft = convert::description(form)?;
    state.controller.edit(draft).await;
    Ok(())
}

async fn render(
    state: &AppState,
    notice: Option<Notice>,
    status: StatusCode,
) -> AppResult<HttpResponse> {
    let workspace = state.controller.snapshot().await;
    let posts = state.controller.posts().await?;

    Ok(HttpResponse::build(status)
        .content_type(ContentType::html())
        .body(views::page(&workspace, &posts, notice.as_ref())))
}

fn back_to_page() -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, "/"))
        .finish()
}
