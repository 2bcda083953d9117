//! Deep links routed into the app, e.g. `barcodecopier://scanner`.

use thiserror::Error;
use url::Url;

pub const DEEP_LINK_SCHEME: &str = "barcodecopier";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeepLinkRequest {
    /// Present the live scanner.
    OpenScanner,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DeepLinkError {
    #[error("invalid deep link: {0}")]
    Invalid(String),

    #[error("unsupported deep link scheme: {0}")]
    UnsupportedScheme(String),

    #[error("deep link has no host")]
    MissingHost,
}

impl DeepLinkRequest {
    /// Parse an incoming URL.
    ///
    /// Returns `Ok(None)` for well-formed links to hosts this app does not
    /// handle.
    pub fn parse(raw: &str) -> Result<Option<Self>, DeepLinkError> {
        let url = Url::parse(raw).map_err(|e| DeepLinkError::Invalid(e.to_string()))?;

        if url.scheme() != DEEP_LINK_SCHEME {
            return Err(DeepLinkError::UnsupportedScheme(url.scheme().to_string()));
        }

        match url.host_str() {
            None | Some("") => Err(DeepLinkError::MissingHost),
            Some("scanner") => Ok(Some(DeepLinkRequest::OpenScanner)),
            Some(_) => Ok(None),
        }
    }
}
