//! Scan session state machine.
//!
//! Defines a pure state transition function for a live scanner session:
//! one accepted code per session, then a cooldown before the next one.

use crate::ids::SessionId;
use crate::scan::ScanKind;

/// Scanner session state.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum ScanSessionState {
    /// No scanner presented.
    #[default]
    Idle,
    /// Scanner presented, the next decoded code is accepted.
    Armed { session_id: SessionId },
    /// A code was accepted and intake is running.
    ProcessingScan { session_id: SessionId },
    /// Intake finished; further detections are dropped until the cooldown elapses.
    ///
    /// `dismissed` records that the scanner went away during the window.
    CooldownWindow {
        session_id: SessionId,
        dismissed: bool,
    },
}

/// Events that drive a scanner session.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum ScanSessionEvent {
    /// The scanner was presented (user action or deep link).
    Activate { session_id: SessionId },
    /// The detector reported a code.
    Decoded { payload: String, symbology: ScanKind },
    /// Intake for the accepted code completed.
    IntakeFinished,
    /// The scanner was dismissed.
    Dismiss,
    /// The cooldown timer of a session fired.
    CooldownElapsed { session_id: SessionId },
}

/// Side-effects produced by state transitions.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum ScanSessionAction {
    /// Run the intake pipeline and store the record.
    RunIntake { payload: String, symbology: ScanKind },
    /// Success haptic.
    FireHaptic,
    /// Ask the UI to dismiss the scanner.
    RequestDismiss,
    /// Schedule `CooldownElapsed` for the session.
    StartCooldown { session_id: SessionId },
    /// Drop the pending cooldown of a replaced session.
    CancelCooldown { session_id: SessionId },
}

/// Pure scan session state machine.
pub struct ScanSessionStateMachine;

impl ScanSessionStateMachine {
    pub fn transition(
        state: ScanSessionState,
        event: ScanSessionEvent,
    ) -> (ScanSessionState, Vec<ScanSessionAction>) {
        match (state, event) {
            (state, ScanSessionEvent::Activate { session_id }) => {
                let actions = match state {
                    ScanSessionState::CooldownWindow {
                        session_id: replaced,
                        ..
                    } => vec![ScanSessionAction::CancelCooldown {
                        session_id: replaced,
                    }],
                    _ => Vec::new(),
                };
                (ScanSessionState::Armed { session_id }, actions)
            }
            (
                ScanSessionState::Armed { session_id },
                ScanSessionEvent::Decoded { payload, symbology },
            ) => {
                if payload.is_empty() {
                    return (ScanSessionState::Armed { session_id }, Vec::new());
                }
                (
                    ScanSessionState::ProcessingScan { session_id },
                    vec![ScanSessionAction::RunIntake { payload, symbology }],
                )
            }
            (ScanSessionState::ProcessingScan { session_id }, ScanSessionEvent::IntakeFinished) => (
                ScanSessionState::CooldownWindow {
                    session_id: session_id.clone(),
                    dismissed: false,
                },
                vec![
                    ScanSessionAction::FireHaptic,
                    ScanSessionAction::RequestDismiss,
                    ScanSessionAction::StartCooldown { session_id },
                ],
            ),
            (ScanSessionState::Armed { .. }, ScanSessionEvent::Dismiss)
            | (ScanSessionState::ProcessingScan { .. }, ScanSessionEvent::Dismiss) => {
                (ScanSessionState::Idle, Vec::new())
            }
            (ScanSessionState::CooldownWindow { session_id, .. }, ScanSessionEvent::Dismiss) => (
                ScanSessionState::CooldownWindow {
                    session_id,
                    dismissed: true,
                },
                Vec::new(),
            ),
            (
                ScanSessionState::CooldownWindow {
                    session_id,
                    dismissed,
                },
                ScanSessionEvent::CooldownElapsed {
                    session_id: elapsed,
                },
            ) => {
                if session_id != elapsed {
                    return (
                        ScanSessionState::CooldownWindow {
                            session_id,
                            dismissed,
                        },
                        Vec::new(),
                    );
                }
                if dismissed {
                    (ScanSessionState::Idle, Vec::new())
                } else {
                    (ScanSessionState::Armed { session_id }, Vec::new())
                }
            }
            (state, _event) => (state, Vec::new()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sid(id: &str) -> SessionId {
        SessionId::from(id)
    }

    fn decoded(payload: &str) -> ScanSessionEvent {
        ScanSessionEvent::Decoded {
            payload: payload.into(),
            symbology: ScanKind::qr_code(),
        }
    }

    fn armed(id: &str) -> ScanSessionState {
        ScanSessionState::Armed { session_id: sid(id) }
    }

    fn cooldown(id: &str, dismissed: bool) -> ScanSessionState {
        ScanSessionState::CooldownWindow {
            session_id: sid(id),
            dismissed,
        }
    }

    #[test]
    fn activate_from_idle_arms_session() {
        let (next, actions) = ScanSessionStateMachine::transition(
            ScanSessionState::Idle,
            ScanSessionEvent::Activate { session_id: sid("s1") },
        );
        assert_eq!(next, armed("s1"));
        assert!(actions.is_empty());
    }

    #[test]
    fn activate_during_cooldown_replaces_session() {
        let (next, actions) = ScanSessionStateMachine::transition(
            cooldown("s1", true),
            ScanSessionEvent::Activate { session_id: sid("s2") },
        );
        assert_eq!(next, armed("s2"));
        assert_eq!(
            actions,
            vec![ScanSessionAction::CancelCooldown { session_id: sid("s1") }]
        );
    }

    #[test]
    fn reactivate_while_armed_has_no_timer_to_cancel() {
        let (next, actions) = ScanSessionStateMachine::transition(
            armed("s1"),
            ScanSessionEvent::Activate { session_id: sid("s2") },
        );
        assert_eq!(next, armed("s2"));
        assert!(actions.is_empty());
    }

    #[test]
    fn armed_decoded_runs_intake() {
        let (next, actions) = ScanSessionStateMachine::transition(armed("s1"), decoded("hello"));
        assert_eq!(next, ScanSessionState::ProcessingScan { session_id: sid("s1") });
        assert_eq!(
            actions,
            vec![ScanSessionAction::RunIntake {
                payload: "hello".into(),
                symbology: ScanKind::qr_code(),
            }]
        );
    }

    #[test]
    fn armed_ignores_empty_payload() {
        let (next, actions) = ScanSessionStateMachine::transition(armed("s1"), decoded(""));
        assert_eq!(next, armed("s1"));
        assert!(actions.is_empty());
    }

    #[test]
    fn decoded_outside_armed_is_dropped() {
        for state in [
            ScanSessionState::Idle,
            ScanSessionState::ProcessingScan { session_id: sid("s1") },
            cooldown("s1", false),
        ] {
            let (next, actions) = ScanSessionStateMachine::transition(state.clone(), decoded("x"));
            assert_eq!(next, state);
            assert!(actions.is_empty());
        }
    }

    #[test]
    fn intake_finished_enters_cooldown_with_side_effects() {
        let (next, actions) = ScanSessionStateMachine::transition(
            ScanSessionState::ProcessingScan { session_id: sid("s1") },
            ScanSessionEvent::IntakeFinished,
        );
        assert_eq!(next, cooldown("s1", false));
        assert_eq!(
            actions,
            vec![
                ScanSessionAction::FireHaptic,
                ScanSessionAction::RequestDismiss,
                ScanSessionAction::StartCooldown { session_id: sid("s1") },
            ]
        );
    }

    #[test]
    fn dismiss_during_cooldown_keeps_guard() {
        let (next, actions) =
            ScanSessionStateMachine::transition(cooldown("s1", false), ScanSessionEvent::Dismiss);
        assert_eq!(next, cooldown("s1", true));
        assert!(actions.is_empty());
    }

    #[test]
    fn dismiss_while_armed_goes_idle() {
        let (next, _) = ScanSessionStateMachine::transition(armed("s1"), ScanSessionEvent::Dismiss);
        assert_eq!(next, ScanSessionState::Idle);
    }

    #[test]
    fn cooldown_elapsed_rearms_when_still_presented() {
        let (next, _) = ScanSessionStateMachine::transition(
            cooldown("s1", false),
            ScanSessionEvent::CooldownElapsed { session_id: sid("s1") },
        );
        assert_eq!(next, armed("s1"));
    }

    #[test]
    fn cooldown_elapsed_after_dismiss_goes_idle() {
        let (next, _) = ScanSessionStateMachine::transition(
            cooldown("s1", true),
            ScanSessionEvent::CooldownElapsed { session_id: sid("s1") },
        );
        assert_eq!(next, ScanSessionState::Idle);
    }

    #[test]
    fn stale_cooldown_is_ignored() {
        let (next, _) = ScanSessionStateMachine::transition(
            cooldown("s2", false),
            ScanSessionEvent::CooldownElapsed { session_id: sid("s1") },
        );
        assert_eq!(next, cooldown("s2", false));

        let (next, _) = ScanSessionStateMachine::transition(
            armed("s2"),
            ScanSessionEvent::CooldownElapsed { session_id: sid("s1") },
        );
        assert_eq!(next, armed("s2"));
    }
}
