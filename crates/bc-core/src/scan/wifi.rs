//! Wi-Fi credential payloads.
//!
//! Wi-Fi QR codes carry a payload of the form
//! `WIFI:S:<ssid>;T:<auth>;P:<password>;H:<hidden>;`. Only the field map is
//! interpreted here; escaping (`\;`, `\:`) is not, so a password containing
//! `;` is truncated at that character.

use std::collections::HashMap;

const WIFI_PREFIX: &str = "WIFI:";

/// Typed view over the fields of a Wi-Fi payload.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct WifiCredential {
    pub ssid: Option<String>,
    pub auth: Option<String>,
    pub password: Option<String>,
    pub hidden: bool,
}

impl WifiCredential {
    /// Parse a decoded payload. Returns `None` unless it starts with `WIFI:`.
    pub fn parse(payload: &str) -> Option<Self> {
        let mut fields = parse_fields(payload)?;

        Some(Self {
            ssid: fields.remove("S"),
            auth: fields.remove("T"),
            password: fields.remove("P"),
            hidden: fields.get("H").is_some_and(|h| h.eq_ignore_ascii_case("true")),
        })
    }
}

/// Extract the password field (`P`) of a Wi-Fi payload.
///
/// Returns `None` for payloads without the `WIFI:` prefix and for Wi-Fi
/// payloads that carry no password. Never fails on malformed input: tokens
/// that do not form a `key:value` pair are skipped.
pub fn extract_wifi_password(payload: &str) -> Option<String> {
    WifiCredential::parse(payload)?.password
}

/// Split the body of a Wi-Fi payload into a key/value map.
///
/// Tokens are separated by `;` and split on their first `:`. A token only
/// contributes when both its key and its value are non-empty; a later token
/// with the same key overwrites an earlier one.
fn parse_fields(payload: &str) -> Option<HashMap<&str, String>> {
    let body = payload.strip_prefix(WIFI_PREFIX)?;

    let fields = body
        .split(';')
        .filter_map(|token| token.split_once(':'))
        .filter(|(key, value)| !key.is_empty() && !value.is_empty())
        .map(|(key, value)| (key, value.to_string()))
        .collect();

    Some(fields)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_password_from_standard_payload() {
        let payload = "WIFI:S:Home;T:WPA;P:secret123;H:false;";
        assert_eq!(extract_wifi_password(payload), Some("secret123".to_string()));
    }

    #[test]
    fn returns_none_without_password_field() {
        assert_eq!(extract_wifi_password("WIFI:S:Home;T:WPA;H:false;"), None);
    }

    #[test]
    fn returns_none_for_non_wifi_payloads() {
        for payload in [
            "",
            "https://example.com",
            "wifi:S:Home;P:lowercase;",
            " WIFI:S:Home;P:leading-space;",
            "4006381333931",
        ] {
            assert_eq!(extract_wifi_password(payload), None, "payload: {payload:?}");
        }
    }

    #[test]
    fn splits_only_on_first_colon() {
        let payload = "WIFI:S:Home;P:pa:ss:word;";
        assert_eq!(extract_wifi_password(payload), Some("pa:ss:word".to_string()));
    }

    #[test]
    fn last_duplicate_key_wins() {
        let payload = "WIFI:P:first;S:Home;P:second;";
        assert_eq!(extract_wifi_password(payload), Some("second".to_string()));
    }

    #[test]
    fn malformed_tokens_are_skipped() {
        let payload = "WIFI:garbage;;S:Home;:orphan;P:ok;trailing";
        assert_eq!(extract_wifi_password(payload), Some("ok".to_string()));
    }

    #[test]
    fn empty_password_counts_as_absent() {
        assert_eq!(extract_wifi_password("WIFI:S:Cafe;T:nopass;P:;;"), None);
    }

    #[test]
    fn bare_prefix_has_no_password() {
        assert_eq!(extract_wifi_password("WIFI:"), None);
    }

    #[test]
    fn credential_exposes_all_fields() {
        let credential = WifiCredential::parse("WIFI:S:Home;T:WPA;P:secret123;H:true;").unwrap();
        assert_eq!(
            credential,
            WifiCredential {
                ssid: Some("Home".to_string()),
                auth: Some("WPA".to_string()),
                password: Some("secret123".to_string()),
                hidden: true,
            }
        );
    }

    #[test]
    fn credential_agrees_with_password_extraction() {
        for payload in [
            "WIFI:S:Home;T:WPA;P:secret123;H:false;",
            "WIFI:S:Home;T:WPA;H:false;",
            "WIFI:P:a;P:b;",
        ] {
            let credential = WifiCredential::parse(payload).unwrap();
            assert_eq!(credential.password, extract_wifi_password(payload));
        }
        assert!(WifiCredential::parse("MECARD:N:Doe;").is_none());
    }
}
