use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::Mutex;
use tokio::time::{sleep, Duration};
use tracing::debug;

use bc_core::{ports::CooldownTimerPort, SessionId};

type ElapsedCallback = Arc<dyn Fn(SessionId) + Send + Sync>;

/// Tokio backed cooldown timer.
///
/// Each session has at most one pending timer; starting again replaces it.
/// On expiry the callback receives the session id.
pub struct CooldownTimer {
    timers: Arc<Mutex<HashMap<SessionId, tokio::task::AbortHandle>>>,
    on_elapsed: ElapsedCallback,
}

impl CooldownTimer {
    pub fn new(on_elapsed: impl Fn(SessionId) + Send + Sync + 'static) -> Self {
        Self {
            timers: Arc::new(Mutex::new(HashMap::new())),
            on_elapsed: Arc::new(on_elapsed),
        }
    }
}

#[async_trait::async_trait]
impl CooldownTimerPort for CooldownTimer {
    async fn start(&self, session_id: &SessionId, after: Duration) -> anyhow::Result<()> {
        let timers = Arc::clone(&self.timers);
        let on_elapsed = Arc::clone(&self.on_elapsed);
        let session_id_clone = session_id.clone();

        let mut timers_guard = self.timers.lock().await;
        if let Some(existing) = timers_guard.remove(session_id) {
            existing.abort();
        }

        let handle = tokio::spawn(async move {
            sleep(after).await;
            timers.lock().await.remove(&session_id_clone);
            debug!(session_id = %session_id_clone, "cooldown elapsed");
            on_elapsed(session_id_clone);
        });

        timers_guard.insert(session_id.clone(), handle.abort_handle());
        debug!(session_id = %session_id, after_ms = after.as_millis() as u64, "cooldown started");
        Ok(())
    }

    async fn cancel(&self, session_id: &SessionId) -> anyhow::Result<()> {
        let mut timers_guard = self.timers.lock().await;
        if let Some(handle) = timers_guard.remove(session_id) {
            handle.abort();
            debug!(session_id = %session_id, "cooldown cancelled");
        }
        Ok(())
    }
}
