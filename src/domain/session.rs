use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::message::MessageTree;
use super::scrolly::ScrollyTellData;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ViewType {
    #[default]
    Scrollytell,
    Chat,
    Tree,
}

impl ViewType {
    pub fn as_str(&self) -> &str {
        match self {
            ViewType::Scrollytell => "scrollytell",
            ViewType::Chat => "chat",
            ViewType::Tree => "tree",
        }
    }
}

/// Everything a viewer needs to start a session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionSeed {
    pub message_tree: MessageTree,
    pub current_chat_leaf_id: i64,
    #[serde(default)]
    pub scrolly_tell_data: ScrollyTellData,
}

/// One independent conversation-tree workspace.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScrollySession {
    pub id: Uuid,
    pub current_chat_leaf_id: i64,
    pub message_tree: MessageTree,
    pub scrolly_tell_data: ScrollyTellData,
    pub current_view: ViewType,
    pub created_at: DateTime<Utc>,
}

impl ScrollySession {
    pub fn new(seed: SessionSeed) -> Self {
        ScrollySession {
            id: Uuid::new_v4(),
            current_chat_leaf_id: seed.current_chat_leaf_id,
            message_tree: seed.message_tree,
            scrolly_tell_data: seed.scrolly_tell_data,
            current_view: ViewType::default(),
            created_at: Utc::now(),
        }
    }

    pub fn contains(&self, message_id: i64) -> bool {
        self.message_tree.iter().any(|m| m.id == message_id)
    }
}
