//! Expired session cleanup.

use std::{sync::Weak, time::Duration};

use tokio::time::{self, Instant, MissedTickBehavior};
use tracing::debug;

use foodwheels_app::domain::sessions::MemorySessionStore;

/// How often idle sessions are swept out of memory.
pub(crate) const SWEEP_INTERVAL: Duration = Duration::from_secs(5 * 60);

/// Purge expired sessions every `every` until the store is dropped.
pub(crate) async fn sweep(sessions: Weak<MemorySessionStore>, every: Duration) {
    let mut ticker = time::interval_at(Instant::now() + every, every);

    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        ticker.tick().await;

        let Some(store) = sessions.upgrade() else {
            break;
        };

        store.purge_expired().await;
    }

    debug!("session store dropped, sweeper stopped");
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use foodwheels_app::domain::sessions::{
        SessionStore,
        models::{SessionData, SessionId},
    };
    use testresult::TestResult;

    use super::*;

    #[tokio::test]
    async fn sweeps_expired_sessions_and_stops_with_the_store() -> TestResult {
        let store = Arc::new(MemorySessionStore::new(Duration::ZERO));

        let mut data = SessionData::default();
        data.insert("cart", &1)?;
        store.save(SessionId::generate(), data).await?;

        let sweeper = tokio::spawn(sweep(Arc::downgrade(&store), Duration::from_millis(5)));

        time::sleep(Duration::from_millis(50)).await;

        assert!(store.is_empty().await);

        drop(store);

        time::timeout(Duration::from_secs(1), sweeper).await??;

        Ok(())
    }
}
