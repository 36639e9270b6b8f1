//! Identifier encodings.

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE;

/// Encode a name as padded URL-safe base64, the form the server uses as
/// the ID of roles, groups and users.
pub fn encode_to_urlsafe_base64(input: &str) -> String {
    URL_SAFE.encode(input.as_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_simple_name() {
        assert_eq!(encode_to_urlsafe_base64("admin"), "YWRtaW4=");
    }

    #[test]
    fn test_encode_uses_url_safe_alphabet() {
        // Standard base64 gives "Pz8/IA==".
        assert_eq!(encode_to_urlsafe_base64("??? "), "Pz8_IA==");
        assert_eq!(encode_to_urlsafe_base64(""), "");
    }

    #[test]
    fn test_encode_non_ascii() {
        assert_eq!(encode_to_urlsafe_base64("管理者"), "566h55CG6ICF");
    }
}
