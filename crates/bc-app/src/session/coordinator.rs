use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Mutex;
use tracing::{debug, error, info, info_span, warn, Instrument};

use bc_core::ports::{CooldownTimerPort, HapticFeedbackPort, ScannerUiPort};
use bc_core::{
    DecodedSymbol, ScanKind, ScanSessionAction, ScanSessionEvent, ScanSessionState,
    ScanSessionStateMachine, SessionId,
};

use crate::history::HistoryStore;
use crate::usecases::IntakeScan;

/// Owns the scanner session state and executes transition side effects.
pub struct ScanSessionCoordinator {
    state: Mutex<ScanSessionState>,
    intake: Arc<IntakeScan>,
    history: Arc<HistoryStore>,
    haptics: Arc<dyn HapticFeedbackPort>,
    scanner_ui: Arc<dyn ScannerUiPort>,
    timer: Arc<dyn CooldownTimerPort>,
    cooldown: Duration,
}

impl ScanSessionCoordinator {
    pub fn new(
        intake: Arc<IntakeScan>,
        history: Arc<HistoryStore>,
        haptics: Arc<dyn HapticFeedbackPort>,
        scanner_ui: Arc<dyn ScannerUiPort>,
        timer: Arc<dyn CooldownTimerPort>,
        cooldown: Duration,
    ) -> Self {
        Self {
            state: Mutex::new(ScanSessionState::Idle),
            intake,
            history,
            haptics,
            scanner_ui,
            timer,
            cooldown,
        }
    }

    pub async fn state(&self) -> ScanSessionState {
        self.state.lock().await.clone()
    }

    /// Present the scanner with a fresh session id.
    pub async fn activate(&self) -> SessionId {
        let session_id = SessionId::new();
        self.dispatch(ScanSessionEvent::Activate {
            session_id: session_id.clone(),
        })
        .await;
        session_id
    }

    /// Detector entry point.
    pub async fn on_decoded(&self, symbol: DecodedSymbol) -> ScanSessionState {
        self.dispatch(ScanSessionEvent::Decoded {
            payload: symbol.payload,
            symbology: symbol.symbology,
        })
        .await
    }

    pub async fn dismiss(&self) -> ScanSessionState {
        self.dispatch(ScanSessionEvent::Dismiss).await
    }

    pub async fn cooldown_elapsed(&self, session_id: SessionId) -> ScanSessionState {
        self.dispatch(ScanSessionEvent::CooldownElapsed { session_id })
            .await
    }

    async fn dispatch(&self, event: ScanSessionEvent) -> ScanSessionState {
        // Held across the whole dispatch so concurrent events cannot both
        // observe `Armed` and run intake twice.
        let mut state = self.state.lock().await;

        let span = info_span!("scan_session.dispatch", event = ?event);
        async {
            let mut pending_events = vec![event];

            while let Some(event) = pending_events.pop() {
                let from = state.clone();
                let (next, actions) = ScanSessionStateMachine::transition(from.clone(), event);
                if from != next {
                    info!(from = ?from, to = ?next, "scan session transition");
                }
                *state = next;
                pending_events.extend(self.execute_actions(actions).await);
            }

            state.clone()
        }
        .instrument(span)
        .await
    }

    async fn execute_actions(&self, actions: Vec<ScanSessionAction>) -> Vec<ScanSessionEvent> {
        let mut follow_up_events = Vec::new();
        for action in actions {
            debug!(?action, "scan session executing action");
            match action {
                ScanSessionAction::RunIntake { payload, symbology } => {
                    self.run_intake(&payload, &symbology).await;
                    follow_up_events.push(ScanSessionEvent::IntakeFinished);
                }
                ScanSessionAction::FireHaptic => self.haptics.impact(),
                ScanSessionAction::RequestDismiss => {
                    if let Err(err) = self.scanner_ui.dismiss_scanner().await {
                        warn!(error = %err, "failed to dismiss scanner");
                    }
                }
                ScanSessionAction::StartCooldown { session_id } => {
                    if let Err(err) = self.timer.start(&session_id, self.cooldown).await {
                        // Without a timer the window would never close.
                        error!(error = %err, session_id = %session_id, "failed to start cooldown");
                        follow_up_events.push(ScanSessionEvent::CooldownElapsed { session_id });
                    }
                }
                ScanSessionAction::CancelCooldown { session_id } => {
                    // A late expiry is ignored by the state machine anyway.
                    if let Err(err) = self.timer.cancel(&session_id).await {
                        warn!(error = %err, session_id = %session_id, "failed to cancel cooldown");
                    }
                }
            }
        }
        follow_up_events
    }

    async fn run_intake(&self, payload: &str, symbology: &ScanKind) {
        match self.intake.execute(payload, symbology) {
            Ok(record) => {
                self.history.append(record).await;
            }
            Err(err) => error!(error = %err, "scan intake failed"),
        }
    }
}
