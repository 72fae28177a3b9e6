use std::collections::HashMap;
use std::sync::Arc;

use thiserror::Error;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::ScrollySession;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Not found")]
    NotFound,

    #[error("Invalid data: {0}")]
    InvalidData(String),

    #[error("Seed error: {0}")]
    Seed(String),
}

/// Process-local session storage shared by all repositories.
#[derive(Clone, Default)]
pub struct MemoryStore {
    sessions: Arc<RwLock<HashMap<Uuid, ScrollySession>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        tracing::info!("Initializing in-memory session store");
        Self::default()
    }

    pub fn sessions(&self) -> &RwLock<HashMap<Uuid, ScrollySession>> {
        &self.sessions
    }

    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }
}
