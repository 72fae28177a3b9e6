use serde::{Deserialize, Serialize};

use crate::utils::is_temporary_id;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    System,
    #[default]
    User,
    Assistant,
}

impl MessageRole {
    pub fn as_str(&self) -> &str {
        match self {
            MessageRole::System => "system",
            MessageRole::User => "user",
            MessageRole::Assistant => "assistant",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "system" => Some(MessageRole::System),
            "user" => Some(MessageRole::User),
            "assistant" => Some(MessageRole::Assistant),
            _ => None,
        }
    }
}

impl std::fmt::Display for MessageRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single role/content pair as exchanged with the model backend.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Message {
    pub role: MessageRole,
    pub content: String,
}

impl Message {
    pub fn new(role: MessageRole, content: impl Into<String>) -> Self {
        Message {
            role,
            content: content.into(),
        }
    }
}

/// One node of the conversation tree.
///
/// Positive ids are assigned by the backend. Negative ids are client-local
/// drafts created by forking and are only unique within a session.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MessageContainer {
    pub id: i64,
    pub parent_message_id: Option<i64>,
    pub message: Message,
}

impl MessageContainer {
    pub fn new(id: i64, parent_message_id: Option<i64>, message: Message) -> Self {
        MessageContainer {
            id,
            parent_message_id,
            message,
        }
    }

    /// Parent id with the legacy `0` sentinel folded into `None`.
    pub fn parent_id(&self) -> Option<i64> {
        self.parent_message_id.filter(|&id| id != 0)
    }

    pub fn is_draft(&self) -> bool {
        is_temporary_id(self.id)
    }
}

/// Flat, parent-referencing collection of containers. Order is insertion order
/// and decides which child continues its parent's column in the layout.
pub type MessageTree = Vec<MessageContainer>;
