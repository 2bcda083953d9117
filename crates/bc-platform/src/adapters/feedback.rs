use tracing::debug;

use bc_core::ports::HapticFeedbackPort;

/// Haptics for hosts without a vibration motor: records the impact in the log.
#[derive(Debug, Clone, Default)]
pub struct LoggingHaptics;

impl HapticFeedbackPort for LoggingHaptics {
    fn impact(&self) {
        debug!("haptic impact");
    }
}
