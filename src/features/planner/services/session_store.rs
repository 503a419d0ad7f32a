use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

use tokio::sync::{Mutex, OwnedMutexGuard, RwLock};
use uuid::Uuid;

use crate::features::planner::models::ViewState;

struct SessionEntry {
    state: Arc<Mutex<ViewState>>,
    last_seen: Instant,
}

/// In-memory planner sessions keyed by session id.
///
/// Nothing is persisted; idle sessions are evicted when new ones arrive.
/// Each session has its own lock so interactions on one session run one at a
/// time while different sessions proceed in parallel.
pub struct SessionStore {
    sessions: RwLock<HashMap<Uuid, SessionEntry>>,
    idle_ttl: Duration,
}

impl SessionStore {
    pub fn new(idle_ttl: Duration) -> Self {
        Self {
            sessions: RwLock::new(HashMap::new()),
            idle_ttl,
        }
    }

    /// Lock the session for one interaction, starting it if unknown.
    ///
    /// The returned guard is the session state; writes through it are what
    /// the next interaction sees.
    pub async fn checkout(&self, id: Uuid) -> OwnedMutexGuard<ViewState> {
        let state = {
            let mut sessions = self.sessions.write().await;

            if !sessions.contains_key(&id) {
                self.evict_idle(&mut sessions);
                tracing::debug!(
                    "Starting planner session {} ({} already active)",
                    id,
                    sessions.len()
                );
            }

            let entry = sessions.entry(id).or_insert_with(|| SessionEntry {
                state: Arc::new(Mutex::new(ViewState::default())),
                last_seen: Instant::now(),
            });
            entry.last_seen = Instant::now();
            Arc::clone(&entry.state)
        };

        state.lock_owned().await
    }

    /// Drop idle sessions that no interaction is holding
    fn evict_idle(&self, sessions: &mut HashMap<Uuid, SessionEntry>) {
        let before = sessions.len();
        let ttl = self.idle_ttl;
        sessions.retain(|_, entry| {
            entry.last_seen.elapsed() < ttl || Arc::strong_count(&entry.state) > 1
        });
        let evicted = before - sessions.len();
        if evicted > 0 {
            tracing::debug!("Evicted {} idle planner sessions", evicted);
        }
    }

    #[cfg(test)]
    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }
}
