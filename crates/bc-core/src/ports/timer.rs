use std::time::Duration;

use crate::ids::SessionId;

/// One-shot cooldown timer.
///
/// Implementations deliver `CooldownElapsed` for `session_id` back to the
/// session owner after `after` has passed.
#[async_trait::async_trait]
pub trait CooldownTimerPort: Send + Sync {
    async fn start(&self, session_id: &SessionId, after: Duration) -> anyhow::Result<()>;

    /// Forget the pending timer of `session_id`, if any.
    async fn cancel(&self, session_id: &SessionId) -> anyhow::Result<()>;
}
