//! Live scan session domain module.
//!
//! This module defines the scanner session state machine types.

pub mod state_machine;

pub use state_machine::{ScanSessionAction, ScanSessionEvent, ScanSessionState, ScanSessionStateMachine};

/// Delay before a session accepts another code after a successful scan.
pub const DEFAULT_COOLDOWN_MS: u64 = 1_000;
