use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::{
    MessageContainer, MessageRole, MessageTree, ScrollySession, ScrollyTellData, SessionSeed,
    ViewType,
};
use crate::utils::{count_children, message_id_display};

// Request DTOs
#[derive(Debug, Default, Deserialize)]
pub struct CreateSessionRequest {
    pub message_tree: Option<MessageTree>,
    pub current_chat_leaf_id: Option<i64>,
    pub scrolly_tell_data: Option<ScrollyTellData>,
}

impl CreateSessionRequest {
    /// Explicit seed, or `None` to fall back to the server default
    pub fn into_seed(self) -> Option<SessionSeed> {
        let message_tree = self.message_tree?;
        let current_chat_leaf_id = self
            .current_chat_leaf_id
            .or_else(|| message_tree.last().map(|m| m.id))
            .unwrap_or_default();

        Some(SessionSeed {
            message_tree,
            current_chat_leaf_id,
            scrolly_tell_data: self.scrolly_tell_data.unwrap_or_default(),
        })
    }
}

#[derive(Debug, Deserialize)]
pub struct ReplaceTreeRequest {
    pub message_tree: MessageTree,
}

#[derive(Debug, Deserialize)]
pub struct SetCurrentLeafRequest {
    pub leaf_id: i64,
}

#[derive(Debug, Deserialize)]
pub struct SetViewRequest {
    pub view: ViewType,
}

#[derive(Debug, Default, Deserialize)]
pub struct ForkMessageRequest {
    pub role: Option<String>,
    #[serde(default)]
    pub content: String,
}

#[derive(Debug, Deserialize)]
pub struct UpdateDraftRequest {
    pub content: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct LeafQuery {
    pub leaf_id: Option<i64>,
}

// Response DTOs
#[derive(Debug, Serialize, Deserialize)]
pub struct SessionResponse {
    pub session_id: Uuid,
    pub current_chat_leaf_id: i64,
    pub current_view: ViewType,
    pub total_messages: usize,
    pub draft_messages: usize,
    pub section_count: usize,
    pub created_at: DateTime<Utc>,
}

impl From<ScrollySession> for SessionResponse {
    fn from(session: ScrollySession) -> Self {
        SessionResponse {
            session_id: session.id,
            current_chat_leaf_id: session.current_chat_leaf_id,
            current_view: session.current_view,
            total_messages: session.message_tree.len(),
            draft_messages: session.message_tree.iter().filter(|m| m.is_draft()).count(),
            section_count: session.scrolly_tell_data.scrolly_tell_sections.len(),
            created_at: session.created_at,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub id: i64,
    pub display_id: String,
    pub parent_message_id: Option<i64>,
    pub role: MessageRole,
    pub content: String,
    pub is_draft: bool,
    pub child_count: usize,
}

impl MessageResponse {
    pub fn new(container: MessageContainer, child_count: usize) -> Self {
        MessageResponse {
            id: container.id,
            display_id: message_id_display(container.id),
            parent_message_id: container.parent_message_id,
            is_draft: container.is_draft(),
            role: container.message.role,
            content: container.message.content,
            child_count,
        }
    }

    /// Response with the child count taken from `tree`
    pub fn in_tree(container: MessageContainer, tree: &[MessageContainer]) -> Self {
        let child_count = count_children(container.id, tree);
        Self::new(container, child_count)
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TreeResponse {
    pub session_id: Uuid,
    pub messages: Vec<MessageResponse>,
    pub total_messages: usize,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ChildrenResponse {
    pub message_id: i64,
    pub child_count: usize,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SectionSummary {
    pub index: usize,
    pub section_type: String,
    pub title: Option<String>,
    pub message_count: usize,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
}

// Helper to parse role from string
pub fn parse_role(role_str: &str) -> Result<MessageRole, String> {
    MessageRole::parse(role_str).ok_or_else(|| format!("Invalid role: {}", role_str))
}

pub fn to_responses(
    containers: Vec<MessageContainer>,
    tree: &[MessageContainer],
) -> Vec<MessageResponse> {
    containers
        .into_iter()
        .map(|container| MessageResponse::in_tree(container, tree))
        .collect()
}
