use std::sync::{Arc, Mutex};

use anyhow::{anyhow, Result};
use clipboard_rs::{Clipboard, ClipboardContext};
use tracing::debug;

use bc_core::ports::SystemClipboardPort;

/// System clipboard backed by `clipboard-rs`.
pub struct SystemClipboard {
    inner: Arc<Mutex<ClipboardContext>>,
}

impl SystemClipboard {
    pub fn new() -> Result<Self> {
        let context =
            ClipboardContext::new().map_err(|e| anyhow!("ClipboardContext::new failed: {e}"))?;
        Ok(Self {
            inner: Arc::new(Mutex::new(context)),
        })
    }
}

impl SystemClipboardPort for SystemClipboard {
    fn write_text(&self, text: &str) -> Result<()> {
        let ctx = self
            .inner
            .lock()
            .map_err(|_| anyhow!("clipboard context lock poisoned"))?;
        ctx.set_text(text.to_string())
            .map_err(|e| anyhow!("failed to set clipboard text: {e}"))?;
        debug!(len = text.len(), "clipboard text written");
        Ok(())
    }
}

/// Stand-in when no system clipboard can be opened (headless sessions).
///
/// Every write fails, so intake logs the miss and still records the scan.
#[derive(Debug, Clone, Default)]
pub struct UnavailableClipboard;

impl SystemClipboardPort for UnavailableClipboard {
    fn write_text(&self, _text: &str) -> Result<()> {
        Err(anyhow!("system clipboard unavailable"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unavailable_clipboard_rejects_writes() {
        assert!(UnavailableClipboard.write_text("hello").is_err());
    }
}
