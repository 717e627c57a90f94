//! Axum route handlers for the Generation API.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::audit::{run_audit, AuditReport};
use crate::blocks::{build_blocks, ContentBlock, GeneratedPostData};
use crate::errors::AppError;
use crate::generation::generator::{generate_post, BlogConfig, GeneratedPost};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

/// A post the client already holds, plus the keyword it was written for.
#[derive(Debug, Deserialize)]
pub struct PostRequest {
    pub post: GeneratedPostData,
    pub keyword: String,
}

#[derive(Debug, Serialize)]
pub struct BlocksResponse {
    pub blocks: Vec<ContentBlock>,
}

#[derive(Debug, Serialize)]
pub struct AuditResponse {
    pub audit: AuditReport,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/posts/generate
///
/// Full pipeline: model call → normalise → blocks → audit.
pub async fn handle_generate(
    State(state): State<AppState>,
    Json(config): Json<BlogConfig>,
) -> Result<Json<GeneratedPost>, AppError> {
    let generated = generate_post(state.generator.as_ref(), &config).await?;
    Ok(Json(generated))
}

/// POST /api/v1/posts/blocks
///
/// Rebuilds the default block sequence for a post. Deterministic; no model call.
pub async fn handle_build_blocks(
    Json(request): Json<PostRequest>,
) -> Result<Json<BlocksResponse>, AppError> {
    Ok(Json(BlocksResponse {
        blocks: build_blocks(&request.post, &request.keyword),
    }))
}

/// POST /api/v1/posts/audit
///
/// Re-runs the audit, e.g. after the user edits the post.
pub async fn handle_audit(Json(request): Json<PostRequest>) -> Result<Json<AuditResponse>, AppError> {
    if request.keyword.trim().is_empty() {
        return Err(AppError::Validation("keyword cannot be empty".to_string()));
    }
    Ok(Json(AuditResponse {
        audit: run_audit(&request.post, &request.keyword),
    }))
}
