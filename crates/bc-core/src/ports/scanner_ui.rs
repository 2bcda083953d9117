use anyhow::Result;

#[async_trait::async_trait]
pub trait ScannerUiPort: Send + Sync {
    /// Take the live scanner off screen.
    async fn dismiss_scanner(&self) -> Result<()>;
}
