use serde::{Deserialize, Serialize};

use super::ScanKind;

/// One decode reported by a detector: the payload string and its symbology.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecodedSymbol {
    pub payload: String,
    pub symbology: ScanKind,
}

impl DecodedSymbol {
    pub fn new(payload: impl Into<String>, symbology: impl Into<ScanKind>) -> Self {
        Self {
            payload: payload.into(),
            symbology: symbology.into(),
        }
    }
}
