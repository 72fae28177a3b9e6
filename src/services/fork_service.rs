use uuid::Uuid;

use crate::config::AppConfig;
use crate::db::StoreError;
use crate::domain::{MessageContainer, MessageRole, MessageTree};
use crate::repositories::SessionRepository;
use crate::utils::{
    count_children, create_forked_message, find_siblings, get_descendants, is_temporary_id,
    validate_tree_size,
};

pub struct ForkService {
    session_repo: SessionRepository,
    app_config: AppConfig,
}

impl ForkService {
    pub fn new(session_repo: SessionRepository, app_config: AppConfig) -> Self {
        Self {
            session_repo,
            app_config,
        }
    }

    /// Branch a new draft off `parent_message_id` and make it the current leaf.
    ///
    /// Returns `None`, leaving the tree untouched, when the parent is missing.
    pub async fn fork_message(
        &self,
        session_id: Uuid,
        parent_message_id: i64,
        role: MessageRole,
        content: String,
    ) -> Result<Option<MessageContainer>, StoreError> {
        let max_tree_size = self.app_config.max_tree_size;

        let forked = self
            .session_repo
            .update_session(session_id, |session| {
                let Some(parent) = session
                    .message_tree
                    .iter()
                    .find(|m| m.id == parent_message_id)
                else {
                    tracing::warn!(
                        "Cannot fork: parent message {} not found in session {}",
                        parent_message_id,
                        session_id
                    );
                    return Ok(None);
                };

                validate_tree_size(session.message_tree.len() + 1, max_tree_size)
                    .map_err(StoreError::InvalidData)?;

                let mut forked = create_forked_message(parent, &session.message_tree, role);
                if !content.is_empty() {
                    forked.message.content = content;
                }

                session.message_tree.push(forked.clone());
                session.current_chat_leaf_id = forked.id;

                Ok(Some(forked))
            })
            .await?;

        if let Some(ref forked) = forked {
            tracing::info!(
                "Created fork from message {} with temporary ID {}",
                parent_message_id,
                forked.id
            );
        }

        Ok(forked)
    }

    /// Replace the content of a draft. Persisted messages are read-only.
    pub async fn update_draft(
        &self,
        session_id: Uuid,
        message_id: i64,
        content: String,
    ) -> Result<Option<MessageContainer>, StoreError> {
        self.session_repo
            .update_session(session_id, |session| {
                let Some(container) = session
                    .message_tree
                    .iter_mut()
                    .find(|m| m.id == message_id)
                else {
                    return Ok(None);
                };

                if !is_temporary_id(container.id) {
                    return Err(StoreError::InvalidData(format!(
                        "Message {} is persisted and cannot be edited",
                        message_id
                    )));
                }

                container.message.content = content;
                Ok(Some(container.clone()))
            })
            .await
    }

    pub async fn message_tree(&self, session_id: Uuid) -> Result<MessageTree, StoreError> {
        Ok(self.session_repo.get_session(session_id).await?.message_tree)
    }

    pub async fn siblings(
        &self,
        session_id: Uuid,
        message_id: i64,
    ) -> Result<Vec<MessageContainer>, StoreError> {
        let session = self.session_repo.get_session(session_id).await?;
        Ok(find_siblings(message_id, &session.message_tree))
    }

    pub async fn descendants(
        &self,
        session_id: Uuid,
        message_id: i64,
    ) -> Result<Vec<MessageContainer>, StoreError> {
        let session = self.session_repo.get_session(session_id).await?;
        Ok(get_descendants(message_id, &session.message_tree))
    }

    pub async fn children_count(
        &self,
        session_id: Uuid,
        message_id: i64,
    ) -> Result<usize, StoreError> {
        let session = self.session_repo.get_session(session_id).await?;
        Ok(count_children(message_id, &session.message_tree))
    }
}
