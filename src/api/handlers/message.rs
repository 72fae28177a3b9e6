use axum::{
    Json,
    extract::{Path, State},
};
use std::sync::Arc;
use uuid::Uuid;

use crate::api::{
    dto::{ChildrenResponse, MessageResponse, to_responses},
    error::ApiError,
};
use crate::services::ForkService;

pub async fn get_siblings(
    State(service): State<Arc<ForkService>>,
    Path((session_id, message_id)): Path<(Uuid, i64)>,
) -> Result<Json<Vec<MessageResponse>>, ApiError> {
    let siblings = service.siblings(session_id, message_id).await?;
    let tree = service.message_tree(session_id).await?;

    Ok(Json(to_responses(siblings, &tree)))
}

pub async fn get_descendants(
    State(service): State<Arc<ForkService>>,
    Path((session_id, message_id)): Path<(Uuid, i64)>,
) -> Result<Json<Vec<MessageResponse>>, ApiError> {
    let descendants = service.descendants(session_id, message_id).await?;
    let tree = service.message_tree(session_id).await?;

    Ok(Json(to_responses(descendants, &tree)))
}

pub async fn get_children_count(
    State(service): State<Arc<ForkService>>,
    Path((session_id, message_id)): Path<(Uuid, i64)>,
) -> Result<Json<ChildrenResponse>, ApiError> {
    let child_count = service.children_count(session_id, message_id).await?;

    Ok(Json(ChildrenResponse {
        message_id,
        child_count,
    }))
}
