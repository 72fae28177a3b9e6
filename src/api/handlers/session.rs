use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::api::{
    dto::{
        CreateSessionRequest, LeafQuery, MessageResponse, ReplaceTreeRequest, SessionResponse,
        SetCurrentLeafRequest, SetViewRequest, TreeResponse, to_responses,
    },
    error::ApiError,
};
use crate::services::SessionService;

pub async fn create_session(
    State(service): State<Arc<SessionService>>,
    Json(payload): Json<CreateSessionRequest>,
) -> Result<(StatusCode, Json<SessionResponse>), ApiError> {
    let session = service.create_session(payload.into_seed()).await?;

    Ok((StatusCode::CREATED, Json(session.into())))
}

pub async fn list_sessions(State(service): State<Arc<SessionService>>) -> Json<Vec<Uuid>> {
    Json(service.list_sessions().await)
}

pub async fn get_session(
    State(service): State<Arc<SessionService>>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<SessionResponse>, ApiError> {
    let session = service.get_session(session_id).await?;

    Ok(Json(session.into()))
}

pub async fn delete_session(
    State(service): State<Arc<SessionService>>,
    Path(session_id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    service.delete_session(session_id).await?;

    Ok(StatusCode::NO_CONTENT)
}

pub async fn get_tree(
    State(service): State<Arc<SessionService>>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<TreeResponse>, ApiError> {
    let tree = service.get_message_tree(session_id).await?;
    let total_messages = tree.len();

    Ok(Json(TreeResponse {
        session_id,
        messages: to_responses(tree.clone(), &tree),
        total_messages,
    }))
}

pub async fn replace_tree(
    State(service): State<Arc<SessionService>>,
    Path(session_id): Path<Uuid>,
    Json(payload): Json<ReplaceTreeRequest>,
) -> Result<StatusCode, ApiError> {
    service
        .update_message_tree(session_id, payload.message_tree)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

pub async fn set_current_leaf(
    State(service): State<Arc<SessionService>>,
    Path(session_id): Path<Uuid>,
    Json(payload): Json<SetCurrentLeafRequest>,
) -> Result<Json<SessionResponse>, ApiError> {
    service
        .set_current_leaf(session_id, payload.leaf_id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Message {} not found", payload.leaf_id)))?;

    let session = service.get_session(session_id).await?;
    Ok(Json(session.into()))
}

pub async fn set_view(
    State(service): State<Arc<SessionService>>,
    Path(session_id): Path<Uuid>,
    Json(payload): Json<SetViewRequest>,
) -> Result<Json<SessionResponse>, ApiError> {
    service.set_current_view(session_id, payload.view).await?;

    let session = service.get_session(session_id).await?;
    Ok(Json(session.into()))
}

pub async fn get_message_path(
    State(service): State<Arc<SessionService>>,
    Path(session_id): Path<Uuid>,
    Query(query): Query<LeafQuery>,
) -> Result<Json<Vec<MessageResponse>>, ApiError> {
    let path = service.get_message_path(session_id, query.leaf_id).await?;
    let tree = service.get_message_tree(session_id).await?;

    Ok(Json(to_responses(path, &tree)))
}
