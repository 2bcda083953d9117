use serde::{Deserialize, Serialize};

/// Type tag of a scan: the detector-reported symbology, or a synthetic tag
/// for scans that did not come straight from a live detector.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScanKind(String);

impl ScanKind {
    /// Tag for records whose content is a password extracted from a Wi-Fi payload.
    pub const WIFI_PASSWORD: &'static str = "WiFi Password";
    /// Tag for records decoded from a still image.
    pub const PHOTO_BARCODE: &'static str = "Photo Barcode";
    /// Symbology tag reported by camera detectors for QR codes.
    pub const QR_CODE: &'static str = "org.iso.QRCode";

    pub fn new(tag: impl Into<String>) -> Self {
        Self(tag.into())
    }

    pub fn wifi_password() -> Self {
        Self::new(Self::WIFI_PASSWORD)
    }

    pub fn photo_barcode() -> Self {
        Self::new(Self::PHOTO_BARCODE)
    }

    pub fn qr_code() -> Self {
        Self::new(Self::QR_CODE)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_qr_code(&self) -> bool {
        self.0 == Self::QR_CODE
    }

    /// Human readable name of the tag.
    pub fn display_name(&self) -> &str {
        match self.0.as_str() {
            "org.iso.QRCode" => "QR Code",
            "org.gs1.EAN-13" => "EAN-13",
            "org.gs1.EAN-8" => "EAN-8",
            "org.iso.DataMatrix" => "Data Matrix",
            other => other.strip_prefix("org.iso.").unwrap_or(other),
        }
    }
}

impl std::fmt::Display for ScanKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ScanKind {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for ScanKind {
    fn from(s: String) -> Self {
        Self(s)
    }
}
