use anyhow::Result;

use crate::scan::DecodedSymbol;

/// Barcode detection on a still image (a photo picked by the user).
pub trait StillImageDetectorPort: Send + Sync {
    /// Decode the first code found in the encoded image.
    ///
    /// `Ok(None)` means the image was readable but holds no code.
    fn detect(&self, image_bytes: &[u8]) -> Result<Option<DecodedSymbol>>;
}
