//! Live scanner session.
//!
//! [`ScanSessionCoordinator`] drives the pure session state machine and runs
//! its side effects; [`ScanSessionRuntime`] feeds it from one command channel
//! so detector callbacks and timer expiry are handled one at a time.

mod coordinator;
mod runtime;

pub use coordinator::ScanSessionCoordinator;
pub use runtime::{session_channel, ScanSessionRuntime, SessionCommand, SessionHandle};
