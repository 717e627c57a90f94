//! Axum route handlers for rendering and exporting posts.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::blocks::ContentBlock;
use crate::errors::AppError;
use crate::export::{ExportPayload, WebhookError};
use crate::render::{render_blocks, LayoutMode};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct RenderRequest {
    pub blocks: Vec<ContentBlock>,
    #[serde(default)]
    pub mode: LayoutMode,
}

#[derive(Debug, Serialize)]
pub struct RenderResponse {
    pub html: String,
    pub mode: LayoutMode,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportRequest {
    pub blocks: Vec<ContentBlock>,
    #[serde(default)]
    pub mode: LayoutMode,
    pub title: String,
    #[serde(default)]
    pub meta_description: String,
    #[serde(default)]
    pub keyword: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportResponse {
    pub export_id: Uuid,
    pub slug: String,
    pub bytes: usize,
}

/// POST /api/v1/posts/render
///
/// Renders the editor's current block list. Called again after every
/// visibility toggle or layout switch; nothing is cached.
pub async fn handle_render(Json(request): Json<RenderRequest>) -> Result<Json<RenderResponse>, AppError> {
    let html = render_blocks(&request.blocks, request.mode);
    Ok(Json(RenderResponse {
        html,
        mode: request.mode,
    }))
}

/// POST /api/v1/posts/export
///
/// Renders the blocks and pushes the result to the publishing webhook.
pub async fn handle_export(
    State(state): State<AppState>,
    Json(request): Json<ExportRequest>,
) -> Result<Json<ExportResponse>, AppError> {
    if request.title.trim().is_empty() {
        return Err(AppError::Validation("title cannot be empty".to_string()));
    }
    if !state.webhook.is_configured() {
        return Err(WebhookError::NotConfigured.into());
    }

    let html = render_blocks(&request.blocks, request.mode);
    let payload = ExportPayload::new(
        request.title,
        html,
        request.meta_description,
        request.keyword,
        request.mode,
    );
    info!(
        "Exporting {:?} as {} ({} blocks)",
        payload.slug,
        request.mode.as_str(),
        request.blocks.len()
    );

    state.webhook.push(&payload).await?;

    Ok(Json(ExportResponse {
        export_id: payload.export_id,
        slug: payload.slug,
        bytes: payload.content.len(),
    }))
}
