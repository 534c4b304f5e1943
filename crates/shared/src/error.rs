use serde::{Deserialize, Serialize};

/// Error payload returned by the remote store on a rejected request.
/// Every field is optional; stores are not consistent about which they send.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreErrorBody {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

impl StoreErrorBody {
    /// Best-effort parse; anything that is not a JSON object yields `None`.
    pub fn parse(bytes: &[u8]) -> Option<Self> {
        serde_json::from_slice(bytes).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_store_error_payload() {
        let body = StoreErrorBody::parse(
            br#"{"code":"23505","details":"Key (email) already exists.","hint":null,"message":"duplicate key value violates unique constraint"}"#,
        )
        .expect("body");

        assert_eq!(body.code.as_deref(), Some("23505"));
        assert_eq!(
            body.message.as_deref(),
            Some("duplicate key value violates unique constraint")
        );
        assert!(body.hint.is_none());
    }

    #[test]
    fn non_json_payload_is_ignored() {
        assert!(StoreErrorBody::parse(b"<html>Bad Gateway</html>").is_none());
        assert!(StoreErrorBody::parse(b"").is_none());
    }
}
