use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::api::{
    dto::{MessageResponse, SectionSummary, to_responses},
    error::ApiError,
};
use crate::domain::ScrollyTellData;
use crate::services::SessionService;

pub async fn get_scrolly_data(
    State(service): State<Arc<SessionService>>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<ScrollyTellData>, ApiError> {
    let data = service.get_scrolly_data(session_id).await?;

    Ok(Json(data))
}

pub async fn replace_scrolly_data(
    State(service): State<Arc<SessionService>>,
    Path(session_id): Path<Uuid>,
    Json(payload): Json<ScrollyTellData>,
) -> Result<StatusCode, ApiError> {
    service.update_scrolly_data(session_id, payload).await?;

    Ok(StatusCode::NO_CONTENT)
}

pub async fn get_section_summaries(
    State(service): State<Arc<SessionService>>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<Vec<SectionSummary>>, ApiError> {
    let data = service.get_scrolly_data(session_id).await?;

    let summaries = data
        .scrolly_tell_sections
        .iter()
        .enumerate()
        .map(|(index, section)| SectionSummary {
            index,
            section_type: section.data.to_type_string().to_string(),
            title: section.data.title().map(str::to_string),
            message_count: section.message_count(),
        })
        .collect();

    Ok(Json(summaries))
}

pub async fn get_section_messages(
    State(service): State<Arc<SessionService>>,
    Path((session_id, index)): Path<(Uuid, usize)>,
) -> Result<Json<Vec<MessageResponse>>, ApiError> {
    let messages = service
        .section_messages(session_id, index)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Section {} not found", index)))?;
    let tree = service.get_message_tree(session_id).await?;

    Ok(Json(to_responses(messages, &tree)))
}
