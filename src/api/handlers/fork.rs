use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::api::{
    dto::{ForkMessageRequest, MessageResponse, UpdateDraftRequest, parse_role},
    error::ApiError,
};
use crate::domain::MessageRole;
use crate::services::ForkService;

pub async fn fork_message(
    State(service): State<Arc<ForkService>>,
    Path((session_id, message_id)): Path<(Uuid, i64)>,
    Json(payload): Json<ForkMessageRequest>,
) -> Result<(StatusCode, Json<MessageResponse>), ApiError> {
    let role = match payload.role.as_deref() {
        Some(role) => parse_role(role).map_err(ApiError::BadRequest)?,
        None => MessageRole::User,
    };

    let forked = service
        .fork_message(session_id, message_id, role, payload.content)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Parent message {} not found", message_id)))?;

    // A fresh fork is always a leaf.
    Ok((StatusCode::CREATED, Json(MessageResponse::new(forked, 0))))
}

pub async fn update_draft(
    State(service): State<Arc<ForkService>>,
    Path((session_id, message_id)): Path<(Uuid, i64)>,
    Json(payload): Json<UpdateDraftRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    let updated = service
        .update_draft(session_id, message_id, payload.content)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Message {} not found", message_id)))?;

    let tree = service.message_tree(session_id).await?;

    Ok(Json(MessageResponse::in_tree(updated, &tree)))
}
