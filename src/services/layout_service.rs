use serde::Serialize;
use uuid::Uuid;

use crate::db::StoreError;
use crate::repositories::SessionRepository;
use crate::utils::{
    BoundingBox, Connection, LayoutConfig, TreeLayout, calculate_bounding_box,
    calculate_connections, calculate_tree_layout, get_path_to_node,
};

/// Everything the tree view draws for one session, recomputed on every call.
#[derive(Debug, Clone, Serialize)]
pub struct TreeSnapshot {
    pub current_leaf_id: i64,
    pub nodes: TreeLayout,
    pub bounding_box: BoundingBox,
    pub active_path: Vec<i64>,
    pub connections: Vec<Connection>,
}

pub struct LayoutService {
    session_repo: SessionRepository,
    layout_config: LayoutConfig,
}

impl LayoutService {
    pub fn new(session_repo: SessionRepository, layout_config: LayoutConfig) -> Self {
        Self {
            session_repo,
            layout_config,
        }
    }

    /// Lay out the session tree with the active path ending at `leaf_id`, or at
    /// the current leaf when unset
    pub async fn snapshot(
        &self,
        session_id: Uuid,
        leaf_id: Option<i64>,
    ) -> Result<TreeSnapshot, StoreError> {
        let session = self.session_repo.get_session(session_id).await?;
        let leaf = leaf_id.unwrap_or(session.current_chat_leaf_id);

        let nodes = calculate_tree_layout(&session.message_tree, &self.layout_config);
        let bounding_box = calculate_bounding_box(&nodes, &self.layout_config);
        let active_path = get_path_to_node(&nodes, leaf);
        let connections = calculate_connections(&nodes, leaf);

        tracing::debug!(
            "Laid out session {}: {} nodes, {} connections, {}x{}",
            session_id,
            nodes.len(),
            connections.len(),
            bounding_box.width,
            bounding_box.height
        );

        Ok(TreeSnapshot {
            current_leaf_id: leaf,
            nodes,
            bounding_box,
            active_path,
            connections,
        })
    }
}
