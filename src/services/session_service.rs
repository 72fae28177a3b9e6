use uuid::Uuid;

use crate::config::AppConfig;
use crate::db::StoreError;
use crate::domain::{
    MessageContainer, MessageTree, ScrollySession, ScrollyTellData, SessionSeed, ViewType,
};
use crate::repositories::SessionRepository;
use crate::utils::{get_message_path, validate_tree, validate_tree_size};

pub struct SessionService {
    session_repo: SessionRepository,
    app_config: AppConfig,
    default_seed: SessionSeed,
}

impl SessionService {
    pub fn new(
        session_repo: SessionRepository,
        app_config: AppConfig,
        default_seed: SessionSeed,
    ) -> Self {
        Self {
            session_repo,
            app_config,
            default_seed,
        }
    }

    fn check_tree(&self, tree: &[MessageContainer]) -> Result<(), StoreError> {
        validate_tree(tree).map_err(StoreError::InvalidData)?;
        validate_tree_size(tree.len(), self.app_config.max_tree_size)
            .map_err(StoreError::InvalidData)
    }

    /// Create a session from `seed`, or from the configured default seed
    pub async fn create_session(
        &self,
        seed: Option<SessionSeed>,
    ) -> Result<ScrollySession, StoreError> {
        let seed = seed.unwrap_or_else(|| self.default_seed.clone());
        self.check_tree(&seed.message_tree)?;

        let leaf = seed.current_chat_leaf_id;
        if !seed.message_tree.is_empty() && !seed.message_tree.iter().any(|m| m.id == leaf) {
            return Err(StoreError::InvalidData(format!(
                "Current leaf {} is not in the message tree",
                leaf
            )));
        }

        let session = ScrollySession::new(seed);
        self.session_repo.insert_session(session.clone()).await?;

        tracing::info!(
            "Created session {} with {} messages",
            session.id,
            session.message_tree.len()
        );

        Ok(session)
    }

    pub async fn get_session(&self, session_id: Uuid) -> Result<ScrollySession, StoreError> {
        self.session_repo.get_session(session_id).await
    }

    pub async fn list_sessions(&self) -> Vec<Uuid> {
        self.session_repo.list_session_ids().await
    }

    pub async fn delete_session(&self, session_id: Uuid) -> Result<(), StoreError> {
        self.session_repo.delete_session(session_id).await?;
        tracing::info!("Deleted session {}", session_id);
        Ok(())
    }

    pub async fn get_message_tree(&self, session_id: Uuid) -> Result<MessageTree, StoreError> {
        Ok(self.session_repo.get_session(session_id).await?.message_tree)
    }

    /// Replace the whole tree after checking it is a well-formed forest.
    ///
    /// The current leaf is kept when it survives the replace, otherwise it
    /// moves to the last container (0 for an empty tree). Returns the leaf.
    pub async fn update_message_tree(
        &self,
        session_id: Uuid,
        tree: MessageTree,
    ) -> Result<i64, StoreError> {
        self.check_tree(&tree)?;

        let len = tree.len();
        let leaf = self
            .session_repo
            .update_session(session_id, move |session| {
                let leaf = session.current_chat_leaf_id;
                if !tree.iter().any(|m| m.id == leaf) {
                    session.current_chat_leaf_id = tree.last().map(|m| m.id).unwrap_or_default();
                    tracing::debug!(
                        "Current leaf {} dropped by tree replace, moved to {}",
                        leaf,
                        session.current_chat_leaf_id
                    );
                }
                session.message_tree = tree;
                Ok(session.current_chat_leaf_id)
            })
            .await?;

        tracing::debug!("Replaced tree of session {} ({} messages)", session_id, len);
        Ok(leaf)
    }

    /// Move the current leaf. `None` when the message is not in the tree.
    pub async fn set_current_leaf(
        &self,
        session_id: Uuid,
        leaf_id: i64,
    ) -> Result<Option<i64>, StoreError> {
        self.session_repo
            .update_session(session_id, |session| {
                if !session.contains(leaf_id) {
                    return Ok(None);
                }
                session.current_chat_leaf_id = leaf_id;
                Ok(Some(leaf_id))
            })
            .await
    }

    pub async fn set_current_view(
        &self,
        session_id: Uuid,
        view: ViewType,
    ) -> Result<(), StoreError> {
        self.session_repo
            .update_session(session_id, |session| {
                session.current_view = view;
                Ok(())
            })
            .await
    }

    pub async fn get_scrolly_data(&self, session_id: Uuid) -> Result<ScrollyTellData, StoreError> {
        Ok(self
            .session_repo
            .get_session(session_id)
            .await?
            .scrolly_tell_data)
    }

    pub async fn update_scrolly_data(
        &self,
        session_id: Uuid,
        data: ScrollyTellData,
    ) -> Result<(), StoreError> {
        self.session_repo
            .update_session(session_id, move |session| {
                session.scrolly_tell_data = data;
                Ok(())
            })
            .await
    }

    /// Linear transcript from the root to `leaf_id` (the current leaf if unset)
    pub async fn get_message_path(
        &self,
        session_id: Uuid,
        leaf_id: Option<i64>,
    ) -> Result<Vec<MessageContainer>, StoreError> {
        let session = self.session_repo.get_session(session_id).await?;
        let leaf = leaf_id.unwrap_or(session.current_chat_leaf_id);
        Ok(get_message_path(leaf, &session.message_tree))
    }

    /// Messages referenced by a section, skipping ids missing from the tree.
    /// `None` when the section index is out of range.
    pub async fn section_messages(
        &self,
        session_id: Uuid,
        index: usize,
    ) -> Result<Option<Vec<MessageContainer>>, StoreError> {
        let session = self.session_repo.get_session(session_id).await?;

        let Some(section) = session.scrolly_tell_data.scrolly_tell_sections.get(index) else {
            return Ok(None);
        };

        let messages = section
            .message_ids
            .iter()
            .flatten()
            .filter_map(|id| session.message_tree.iter().find(|m| m.id == *id))
            .cloned()
            .collect();

        Ok(Some(messages))
    }
}
