//! Still-image barcode decoding with `rxing`.

use anyhow::{Context, Result};
use rxing::common::HybridBinarizer;
use rxing::{
    BarcodeFormat, BinaryBitmap, DecodeHintValue, DecodeHints, Exceptions, Luma8LuminanceSource,
    MultiFormatReader, Reader,
};
use tracing::debug;

use bc_core::ports::StillImageDetectorPort;
use bc_core::DecodedSymbol;

/// Decodes the first barcode of any supported symbology in a PNG or JPEG image.
#[derive(Debug, Clone, Default)]
pub struct RxingStillImageDetector;

impl RxingStillImageDetector {
    pub fn new() -> Self {
        Self
    }
}

impl StillImageDetectorPort for RxingStillImageDetector {
    fn detect(&self, image_bytes: &[u8]) -> Result<Option<DecodedSymbol>> {
        let luma = image::load_from_memory(image_bytes)
            .context("failed to decode image")?
            .to_luma8();
        let (width, height) = luma.dimensions();
        debug!(width, height, "scanning still image");

        let hints = DecodeHints::default().with(DecodeHintValue::TryHarder(true));
        let source = Luma8LuminanceSource::new(luma.into_raw(), width, height);
        let mut bitmap = BinaryBitmap::new(HybridBinarizer::new(source));

        let mut reader = MultiFormatReader::default();
        match reader.decode_with_hints(&mut bitmap, &hints) {
            Ok(result) => Ok(Some(DecodedSymbol::new(
                result.getText(),
                symbology_tag(result.getBarcodeFormat()),
            ))),
            // No code in the picture is not a failure.
            Err(Exceptions::NotFoundException(_)) => Ok(None),
            Err(e) => Err(anyhow::anyhow!("barcode decode failed: {e:?}")),
        }
    }
}

/// Detector symbology tag in the same naming scheme the live camera detector reports.
fn symbology_tag(format: &BarcodeFormat) -> String {
    match format {
        BarcodeFormat::QR_CODE => "org.iso.QRCode".to_string(),
        BarcodeFormat::EAN_13 => "org.gs1.EAN-13".to_string(),
        BarcodeFormat::EAN_8 => "org.gs1.EAN-8".to_string(),
        BarcodeFormat::UPC_E => "org.gs1.UPC-E".to_string(),
        BarcodeFormat::DATA_MATRIX => "org.iso.DataMatrix".to_string(),
        BarcodeFormat::PDF_417 => "org.iso.PDF417".to_string(),
        BarcodeFormat::AZTEC => "org.iso.Aztec".to_string(),
        BarcodeFormat::CODE_39 => "org.iso.Code39".to_string(),
        BarcodeFormat::CODE_128 => "org.iso.Code128".to_string(),
        BarcodeFormat::CODE_93 => "com.intermec.Code93".to_string(),
        other => format!("{other:?}"),
    }
}
