use axum::{
    Json,
    extract::{Path, Query, State},
};
use std::sync::Arc;
use uuid::Uuid;

use crate::api::{dto::LeafQuery, error::ApiError};
use crate::services::{LayoutService, TreeSnapshot};

pub async fn get_layout(
    State(service): State<Arc<LayoutService>>,
    Path(session_id): Path<Uuid>,
    Query(query): Query<LeafQuery>,
) -> Result<Json<TreeSnapshot>, ApiError> {
    let snapshot = service.snapshot(session_id, query.leaf_id).await?;

    Ok(Json(snapshot))
}
