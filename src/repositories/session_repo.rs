use uuid::Uuid;

use crate::db::{MemoryStore, StoreError};
use crate::domain::ScrollySession;

#[derive(Clone)]
pub struct SessionRepository {
    store: MemoryStore,
}

impl SessionRepository {
    pub fn new(store: MemoryStore) -> Self {
        Self { store }
    }

    /// Insert a session, replacing any previous one with the same id
    pub async fn insert_session(&self, session: ScrollySession) -> Result<(), StoreError> {
        self.store
            .sessions()
            .write()
            .await
            .insert(session.id, session);
        Ok(())
    }

    /// Snapshot of a session
    pub async fn get_session(&self, session_id: Uuid) -> Result<ScrollySession, StoreError> {
        self.store
            .sessions()
            .read()
            .await
            .get(&session_id)
            .cloned()
            .ok_or(StoreError::NotFound)
    }

    pub async fn delete_session(&self, session_id: Uuid) -> Result<(), StoreError> {
        self.store
            .sessions()
            .write()
            .await
            .remove(&session_id)
            .map(|_| ())
            .ok_or(StoreError::NotFound)
    }

    /// Run `f` against the session under the write lock, so a read-modify-write
    /// is applied as one unit.
    pub async fn update_session<F, R>(&self, session_id: Uuid, f: F) -> Result<R, StoreError>
    where
        F: FnOnce(&mut ScrollySession) -> Result<R, StoreError>,
    {
        let mut sessions = self.store.sessions().write().await;
        let session = sessions.get_mut(&session_id).ok_or(StoreError::NotFound)?;
        f(session)
    }

    pub async fn list_session_ids(&self) -> Vec<Uuid> {
        self.store.sessions().read().await.keys().copied().collect()
    }
}
