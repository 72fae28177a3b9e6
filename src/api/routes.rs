use axum::{
    Router,
    routing::{get, post, put},
};
use std::sync::Arc;

use crate::services::{ForkService, LayoutService, SessionService};

use super::handlers;

#[derive(Clone)]
pub struct AppState {
    pub session_service: Arc<SessionService>,
    pub fork_service: Arc<ForkService>,
    pub layout_service: Arc<LayoutService>,
}

pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health_check))
        // Sessions
        .route(
            "/api/v1/sessions",
            post(handlers::create_session)
                .with_state(state.session_service.clone())
                .get(handlers::list_sessions)
                .with_state(state.session_service.clone()),
        )
        .route(
            "/api/v1/sessions/{session_id}",
            get(handlers::get_session)
                .with_state(state.session_service.clone())
                .delete(handlers::delete_session)
                .with_state(state.session_service.clone()),
        )
        .route(
            "/api/v1/sessions/{session_id}/tree",
            get(handlers::get_tree)
                .with_state(state.session_service.clone())
                .put(handlers::replace_tree)
                .with_state(state.session_service.clone()),
        )
        .route(
            "/api/v1/sessions/{session_id}/current-leaf",
            put(handlers::set_current_leaf).with_state(state.session_service.clone()),
        )
        .route(
            "/api/v1/sessions/{session_id}/view",
            put(handlers::set_view).with_state(state.session_service.clone()),
        )
        .route(
            "/api/v1/sessions/{session_id}/path",
            get(handlers::get_message_path).with_state(state.session_service.clone()),
        )
        // Layout
        .route(
            "/api/v1/sessions/{session_id}/layout",
            get(handlers::get_layout).with_state(state.layout_service.clone()),
        )
        // Forking and tree queries
        .route(
            "/api/v1/sessions/{session_id}/messages/{message_id}/fork",
            post(handlers::fork_message).with_state(state.fork_service.clone()),
        )
        .route(
            "/api/v1/sessions/{session_id}/messages/{message_id}/content",
            put(handlers::update_draft).with_state(state.fork_service.clone()),
        )
        .route(
            "/api/v1/sessions/{session_id}/messages/{message_id}/siblings",
            get(handlers::get_siblings).with_state(state.fork_service.clone()),
        )
        .route(
            "/api/v1/sessions/{session_id}/messages/{message_id}/descendants",
            get(handlers::get_descendants).with_state(state.fork_service.clone()),
        )
        .route(
            "/api/v1/sessions/{session_id}/messages/{message_id}/children",
            get(handlers::get_children_count).with_state(state.fork_service.clone()),
        )
        // Scrollytell
        .route(
            "/api/v1/sessions/{session_id}/scrollytell",
            get(handlers::get_scrolly_data)
                .with_state(state.session_service.clone())
                .put(handlers::replace_scrolly_data)
                .with_state(state.session_service.clone()),
        )
        .route(
            "/api/v1/sessions/{session_id}/scrollytell/sections",
            get(handlers::get_section_summaries).with_state(state.session_service.clone()),
        )
        .route(
            "/api/v1/sessions/{session_id}/scrollytell/sections/{index}/messages",
            get(handlers::get_section_messages).with_state(state.session_service.clone()),
        )
}

async fn health_check() -> axum::Json<crate::api::dto::HealthResponse> {
    axum::Json(crate::api::dto::HealthResponse {
        status: "ok".to_string(),
        timestamp: chrono::Utc::now(),
    })
}
