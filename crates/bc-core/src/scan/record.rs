use serde::{Deserialize, Serialize};

use super::{extract_wifi_password, ScanKind, TimestampMs};
use crate::ids::ScanId;

/// One recognized code as kept in the history.
///
/// `content` is exactly what was written to the clipboard: the raw payload,
/// or the password extracted from a Wi-Fi payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanRecord {
    pub id: ScanId,
    pub content: String,
    #[serde(rename = "type")]
    pub kind: ScanKind,
    #[serde(rename = "timestamp")]
    pub captured_at: TimestampMs,
}

/// Identity used for history de-duplication: `(content, kind)`.
///
/// Id and capture time deliberately take no part in it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DedupeKey<'a> {
    pub content: &'a str,
    pub kind: &'a str,
}

impl ScanRecord {
    pub fn new(id: ScanId, content: String, kind: ScanKind, captured_at: TimestampMs) -> Self {
        Self {
            id,
            content,
            kind,
            captured_at,
        }
    }

    pub fn dedupe_key(&self) -> DedupeKey<'_> {
        DedupeKey {
            content: &self.content,
            kind: self.kind.as_str(),
        }
    }

    pub fn is_duplicate_of(&self, other: &ScanRecord) -> bool {
        self.dedupe_key() == other.dedupe_key()
    }

    /// Text shown for the record and copied when it is picked from the history.
    ///
    /// Older QR code records still hold the whole Wi-Fi payload; for those the
    /// password is used.
    pub fn clipboard_text(&self) -> String {
        if self.kind.is_qr_code() {
            if let Some(password) = extract_wifi_password(&self.content) {
                return password;
            }
        }
        self.content.clone()
    }
}
