//! Session stores.

use std::{
    collections::HashMap,
    time::{Duration, Instant},
};

use async_trait::async_trait;
use mockall::automock;
use tokio::sync::RwLock;
use tracing::debug;

use crate::domain::sessions::{
    errors::SessionStoreError,
    models::{SessionData, SessionId},
};

/// Default idle lifetime of a session.
pub const DEFAULT_SESSION_TTL: Duration = Duration::from_secs(60 * 60 * 24);

#[automock]
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Read the whole session. Unknown and expired sessions read as empty.
    async fn load(&self, session: SessionId) -> Result<SessionData, SessionStoreError>;

    /// Replace the whole session with `data`.
    async fn save(&self, session: SessionId, data: SessionData) -> Result<(), SessionStoreError>;

    /// Forget the session entirely.
    async fn destroy(&self, session: SessionId) -> Result<(), SessionStoreError>;
}

#[derive(Debug)]
struct Entry {
    data: SessionData,
    touched_at: Instant,
}

/// In-process session store with a sliding idle timeout.
#[derive(Debug)]
pub struct MemorySessionStore {
    sessions: RwLock<HashMap<SessionId, Entry>>,
    ttl: Duration,
}

impl MemorySessionStore {
    #[must_use]
    pub fn new(ttl: Duration) -> Self {
        Self {
            sessions: RwLock::new(HashMap::new()),
            ttl,
        }
    }

    fn is_live(&self, entry: &Entry, now: Instant) -> bool {
        now.duration_since(entry.touched_at) < self.ttl
    }

    /// Drop every expired session. Returns how many were removed.
    pub async fn purge_expired(&self) -> usize {
        let now = Instant::now();
        let mut sessions = self.sessions.write().await;
        let before = sessions.len();

        sessions.retain(|_, entry| self.is_live(entry, now));

        let purged = before - sessions.len();

        if purged > 0 {
            debug!(purged, "expired sessions purged");
        }

        purged
    }

    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.sessions.read().await.is_empty()
    }
}

impl Default for MemorySessionStore {
    fn default() -> Self {
        Self::new(DEFAULT_SESSION_TTL)
    }
}

#[async_trait]
impl SessionStore for MemorySessionStore {
    async fn load(&self, session: SessionId) -> Result<SessionData, SessionStoreError> {
        let mut sessions = self.sessions.write().await;
        let now = Instant::now();

        match sessions.get_mut(&session) {
            Some(entry) if self.is_live(entry, now) => {
                entry.touched_at = now;

                Ok(entry.data.clone())
            }
            Some(_) => {
                sessions.remove(&session);

                Ok(SessionData::default())
            }
            None => Ok(SessionData::default()),
        }
    }

    async fn save(&self, session: SessionId, data: SessionData) -> Result<(), SessionStoreError> {
        self.sessions.write().await.insert(
            session,
            Entry {
                data,
                touched_at: Instant::now(),
            },
        );

        Ok(())
    }

    async fn destroy(&self, session: SessionId) -> Result<(), SessionStoreError> {
        self.sessions.write().await.remove(&session);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::domain::accounts::models::UserId;

    use super::*;

    fn data_for(user: i64) -> Result<SessionData, SessionStoreError> {
        let mut data = SessionData::default();

        data.set_user(UserId::from_i64(user))?;

        Ok(data)
    }

    #[tokio::test]
    async fn unknown_session_loads_empty() -> TestResult {
        let store = MemorySessionStore::default();

        assert!(store.load(SessionId::generate()).await?.is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn save_replaces_whole_session() -> TestResult {
        let store = MemorySessionStore::default();
        let session = SessionId::generate();

        store.save(session, data_for(1)?).await?;
        store.save(session, SessionData::default()).await?;

        assert!(store.load(session).await?.is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn sessions_are_isolated() -> TestResult {
        let store = MemorySessionStore::default();
        let a = SessionId::generate();
        let b = SessionId::generate();

        store.save(a, data_for(1)?).await?;
        store.save(b, data_for(2)?).await?;

        assert_eq!(store.load(a).await?.user()?, Some(UserId::from_i64(1)));
        assert_eq!(store.load(b).await?.user()?, Some(UserId::from_i64(2)));

        Ok(())
    }

    #[tokio::test]
    async fn destroy_forgets_session() -> TestResult {
        let store = MemorySessionStore::default();
        let session = SessionId::generate();

        store.save(session, data_for(1)?).await?;
        store.destroy(session).await?;

        assert!(store.load(session).await?.is_empty());
        assert!(store.is_empty().await);

        Ok(())
    }

    #[tokio::test]
    async fn expired_session_loads_empty_and_is_dropped() -> TestResult {
        let store = MemorySessionStore::new(Duration::ZERO);
        let session = SessionId::generate();

        store.save(session, data_for(1)?).await?;

        assert!(store.load(session).await?.is_empty());
        assert_eq!(store.len().await, 0);

        Ok(())
    }

    #[tokio::test]
    async fn purge_expired_removes_only_stale_sessions() -> TestResult {
        let store = MemorySessionStore::new(Duration::ZERO);

        store.save(SessionId::generate(), data_for(1)?).await?;
        store.save(SessionId::generate(), data_for(2)?).await?;

        assert_eq!(store.purge_expired().await, 2);
        assert!(store.is_empty().await);

        Ok(())
    }
}
