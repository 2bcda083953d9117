use anyhow::Result;

/// Write access to the system clipboard.
pub trait SystemClipboardPort: Send + Sync {
    /// Replace the clipboard contents with `text`.
    fn write_text(&self, text: &str) -> Result<()>;
}
