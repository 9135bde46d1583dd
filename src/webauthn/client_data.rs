use serde::Serialize;

/// WebAuthn ceremony kind carried in `clientDataJSON.type`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CeremonyType {
    Create,
    Get,
    /// Any other caller-supplied type string, passed through verbatim.
    Other(String),
}

impl CeremonyType {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Create => "webauthn.create",
            Self::Get => "webauthn.get",
            Self::Other(s) => s,
        }
    }
}

impl From<&str> for CeremonyType {
    fn from(s: &str) -> Self {
        match s {
            "webauthn.create" => Self::Create,
            "webauthn.get" => Self::Get,
            other => Self::Other(other.to_string()),
        }
    }
}

impl std::fmt::Display for CeremonyType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Collected client data. Field order here is the serialized key order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClientData<'a> {
    #[serde(rename = "type")]
    pub ceremony: &'a str,
    pub challenge: &'a str,
    pub origin: &'a str,
    #[serde(rename = "crossOrigin")]
    pub cross_origin: bool,
}

impl<'a> ClientData<'a> {
    /// Same-origin client data. `challenge` must already be base64url and
    /// `origin` already normalized; neither is checked.
    pub fn new(ceremony: &'a CeremonyType, challenge: &'a str, origin: &'a str) -> Self {
        Self {
            ceremony: ceremony.as_str(),
            challenge,
            origin,
            cross_origin: false,
        }
    }

    /// Compact UTF-8 JSON, byte-identical for identical inputs.
    pub fn to_json(&self) -> Vec<u8> {
        serde_json::to_vec(self).expect("clientDataJSON encoding is infallible")
    }
}

/// Reconstruct the `clientDataJSON` bytes a browser would hand the relying
/// party for this ceremony.
pub fn build_client_data_json(challenge: &str, origin: &str, ceremony: &CeremonyType) -> Vec<u8> {
    let json = ClientData::new(ceremony, challenge, origin).to_json();
    tracing::trace!(%ceremony, origin, len = json.len(), "Built clientDataJSON");
    json
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_bytes_for_get() {
        let json = build_client_data_json(
            "c2FtcGxlLWNoYWxsZW5nZQ",
            "https://example.com",
            &CeremonyType::Get,
        );
        assert_eq!(
            std::str::from_utf8(&json).unwrap(),
            r#"{"type":"webauthn.get","challenge":"c2FtcGxlLWNoYWxsZW5nZQ","origin":"https://example.com","crossOrigin":false}"#
        );
    }

    #[test]
    fn test_exact_bytes_for_create() {
        let json = build_client_data_json("AAAA", "https://a.test", &CeremonyType::Create);
        assert_eq!(
            json,
            br#"{"type":"webauthn.create","challenge":"AAAA","origin":"https://a.test","crossOrigin":false}"#
        );
    }

    #[test]
    fn test_deterministic() {
        let a = build_client_data_json("x-y_z", "https://rp.test:8443", &CeremonyType::Get);
        let b = build_client_data_json("x-y_z", "https://rp.test:8443", &CeremonyType::Get);
        assert_eq!(a, b);
    }

    #[test]
    fn test_decodes_to_exactly_four_keys() {
        let json = build_client_data_json("abc", "https://example.com", &CeremonyType::Get);
        let value: serde_json::Value = serde_json::from_slice(&json).unwrap();
        let obj = value.as_object().unwrap();
        assert_eq!(obj.len(), 4);
        assert_eq!(obj["type"], "webauthn.get");
        assert_eq!(obj["challenge"], "abc");
        assert_eq!(obj["origin"], "https://example.com");
        assert_eq!(obj["crossOrigin"], false);
    }

    #[test]
    fn test_custom_type_passes_through() {
        let ceremony = CeremonyType::from("payment.get");
        assert_eq!(ceremony, CeremonyType::Other("payment.get".into()));
        let json = build_client_data_json("abc", "https://example.com", &ceremony);
        assert!(json.starts_with(br#"{"type":"payment.get","#));
    }

    #[test]
    fn test_known_type_strings_map_to_variants() {
        assert_eq!(CeremonyType::from("webauthn.get"), CeremonyType::Get);
        assert_eq!(CeremonyType::from("webauthn.create"), CeremonyType::Create);
        assert_eq!(CeremonyType::Create.to_string(), "webauthn.create");
    }

    #[test]
    fn test_malformed_inputs_are_not_validated() {
        // Not base64url and not an origin; emitted as-is (JSON-escaped).
        let json = build_client_data_json("not base64!", "example.com/\"path\"", &CeremonyType::Get);
        let value: serde_json::Value = serde_json::from_slice(&json).unwrap();
        assert_eq!(value["challenge"], "not base64!");
        assert_eq!(value["origin"], "example.com/\"path\"");
    }
}
