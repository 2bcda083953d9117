use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use bc_core::{DecodedSymbol, SessionId};

use super::ScanSessionCoordinator;

/// Commands accepted by the session runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCommand {
    Activate,
    Decoded(DecodedSymbol),
    Dismiss,
    CooldownElapsed { session_id: SessionId },
    Shutdown,
}

/// Single-owner loop in front of a [`ScanSessionCoordinator`].
pub struct ScanSessionRuntime {
    coordinator: Arc<ScanSessionCoordinator>,
    commands: mpsc::Receiver<SessionCommand>,
}

/// Cloneable sender side of a [`ScanSessionRuntime`].
#[derive(Debug, Clone)]
pub struct SessionHandle {
    tx: mpsc::Sender<SessionCommand>,
}

/// Create the command channel of a session runtime.
///
/// The handle exists before the coordinator so adapters that post back into
/// the runtime (the cooldown timer) can be built first.
pub fn session_channel(capacity: usize) -> (SessionHandle, mpsc::Receiver<SessionCommand>) {
    let (tx, rx) = mpsc::channel(capacity);
    (SessionHandle { tx }, rx)
}

impl ScanSessionRuntime {
    pub fn new(
        coordinator: Arc<ScanSessionCoordinator>,
        commands: mpsc::Receiver<SessionCommand>,
    ) -> Self {
        Self {
            coordinator,
            commands,
        }
    }

    /// Process commands until `Shutdown` or until every handle is dropped.
    pub async fn run(mut self) {
        info!("scan session runtime started");
        while let Some(command) = self.commands.recv().await {
            debug!(?command, "scan session command");
            match command {
                SessionCommand::Activate => {
                    self.coordinator.activate().await;
                }
                SessionCommand::Decoded(symbol) => {
                    self.coordinator.on_decoded(symbol).await;
                }
                SessionCommand::Dismiss => {
                    self.coordinator.dismiss().await;
                }
                SessionCommand::CooldownElapsed { session_id } => {
                    self.coordinator.cooldown_elapsed(session_id).await;
                }
                SessionCommand::Shutdown => break,
            }
        }
        info!("scan session runtime stopped");
    }
}

impl SessionHandle {
    pub async fn send(&self, command: SessionCommand) -> anyhow::Result<()> {
        self.tx
            .send(command)
            .await
            .map_err(|_| anyhow::anyhow!("scan session runtime is gone"))
    }

    /// Non-blocking send for detector callbacks.
    ///
    /// Commands that do not fit into the queue are dropped and logged.
    pub fn post(&self, command: SessionCommand) {
        if let Err(err) = self.tx.try_send(command) {
            warn!(error = %err, "scan session command dropped");
        }
    }

    /// Send from synchronous callers without ever dropping the command.
    ///
    /// When the queue is full the send is finished by a spawned task, so it
    /// is safe to call from inside the runtime loop itself.
    pub fn deliver(&self, command: SessionCommand) {
        let command = match self.tx.try_send(command) {
            Ok(()) => return,
            Err(mpsc::error::TrySendError::Closed(command)) => {
                warn!(?command, "scan session runtime is gone, command dropped");
                return;
            }
            Err(mpsc::error::TrySendError::Full(command)) => command,
        };

        let tx = self.tx.clone();
        match tokio::runtime::Handle::try_current() {
            Ok(runtime) => {
                debug!(?command, "scan session queue full, delivering in background");
                runtime.spawn(async move {
                    if let Err(err) = tx.send(command).await {
                        warn!(command = ?err.0, "scan session runtime is gone, command dropped");
                    }
                });
            }
            Err(_) => warn!(?command, "no tokio runtime, scan session command dropped"),
        }
    }

    /// Callback to hand to a live detector. Bursts beyond the queue are dropped.
    pub fn detector_callback(&self) -> impl Fn(DecodedSymbol) + Send + Sync + 'static {
        let handle = self.clone();
        move |symbol| handle.post(SessionCommand::Decoded(symbol))
    }

    /// Callback to hand to the cooldown timer.
    pub fn cooldown_callback(&self) -> impl Fn(SessionId) + Send + Sync + 'static {
        let handle = self.clone();
        move |session_id| handle.deliver(SessionCommand::CooldownElapsed { session_id })
    }

    /// Callback to hand to a scanner UI that reports its own dismissal.
    pub fn dismiss_callback(&self) -> impl Fn() + Send + Sync + 'static {
        let handle = self.clone();
        move || handle.deliver(SessionCommand::Dismiss)
    }
}
