//! Scanner UI port for the headless host.

use std::sync::Arc;

use anyhow::Result;
use tracing::info;

use bc_core::ports::ScannerUiPort;

type DismissCallback = Arc<dyn Fn() + Send + Sync>;

/// Scanner "screen" of a host without a camera view.
///
/// Dismissing it tears the session down the way closing a scanner sheet
/// does: `on_dismiss` reports the dismissal back to the session owner.
#[derive(Clone)]
pub struct HeadlessScannerUi {
    on_dismiss: DismissCallback,
}

impl HeadlessScannerUi {
    pub fn new(on_dismiss: impl Fn() + Send + Sync + 'static) -> Self {
        Self {
            on_dismiss: Arc::new(on_dismiss),
        }
    }
}

#[async_trait::async_trait]
impl ScannerUiPort for HeadlessScannerUi {
    async fn dismiss_scanner(&self) -> Result<()> {
        info!("scanner dismissed");
        (self.on_dismiss)();
        Ok(())
    }
}
