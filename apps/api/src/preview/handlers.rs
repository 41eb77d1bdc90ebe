use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::fields::{FieldSpec, FORM_FIELDS};
use crate::models::form::FormState;
use crate::preview::progress::progress_report;
use crate::preview::renderer::render;
use crate::preview::session::{FieldChange, RenderedPreview, SessionSnapshot};
use crate::state::AppState;

#[derive(Serialize)]
pub struct FieldListResponse {
    pub fields: &'static [FieldSpec],
}

/// GET /api/v1/fields
pub async fn handle_list_fields() -> Json<FieldListResponse> {
    Json(FieldListResponse {
        fields: FORM_FIELDS,
    })
}

/// POST /api/v1/preview
///
/// Stateless render: the page posts the whole form state on each input event
/// and swaps the returned fragment into the preview container.
pub async fn handle_render_preview(
    State(state): State<AppState>,
    Json(form): Json<FormState>,
) -> Json<RenderedPreview> {
    Json(RenderedPreview {
        html: render(&form),
        progress: progress_report(&form, state.config.progress_steps),
    })
}

#[derive(Serialize)]
pub struct SessionCreatedResponse {
    pub session_id: Uuid,
    pub preview: RenderedPreview,
}

/// POST /api/v1/sessions
pub async fn handle_create_session(
    State(state): State<AppState>,
) -> Result<(StatusCode, Json<SessionCreatedResponse>), AppError> {
    let (session_id, preview) = state
        .sessions
        .create(state.config.progress_steps, state.config.max_sessions)
        .await?;
    info!("Created preview session {session_id}");
    Ok((
        StatusCode::CREATED,
        Json(SessionCreatedResponse {
            session_id,
            preview,
        }),
    ))
}

/// POST /api/v1/sessions/:id/events
pub async fn handle_session_event(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(change): Json<FieldChange>,
) -> Result<Json<RenderedPreview>, AppError> {
    let rendered = state.sessions.apply(id, &change).await?;
    Ok(Json(rendered))
}

/// GET /api/v1/sessions/:id
pub async fn handle_get_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SessionSnapshot>, AppError> {
    Ok(Json(state.sessions.snapshot(id).await?))
}

/// DELETE /api/v1/sessions/:id
pub async fn handle_delete_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    state.sessions.remove(id).await?;
    info!("Dropped preview session {id}");
    Ok(StatusCode::NO_CONTENT)
}
