//! Short id generation.
//!
//! Ids are drawn from a cryptographically secure source and encoded as
//! URL-safe base64 without padding.

use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;

/// Length of every generated id in characters.
pub const ID_LENGTH: usize = 7;

/// Random bytes drawn per id; 5 bytes encode to exactly [`ID_LENGTH`] chars.
const ID_BYTES: usize = 5;

/// Generates a random short id of exactly [`ID_LENGTH`] URL-safe characters.
///
/// Should the encoding ever come up short, the id is extended with further
/// random bytes rather than any deterministic filler, so every character
/// stays unpredictable.
///
/// # Panics
///
/// Panics if the system random number generator fails (extremely rare).
pub fn generate_id() -> String {
    let mut buffer = [0u8; ID_BYTES];
    getrandom::fill(&mut buffer).expect("Failed to generate random bytes");

    let mut id = URL_SAFE_NO_PAD.encode(buffer);
    while id.len() < ID_LENGTH {
        let mut extra = [0u8; 1];
        getrandom::fill(&mut extra).expect("Failed to generate random bytes");
        id.push_str(&URL_SAFE_NO_PAD.encode(extra));
    }

    id.truncate(ID_LENGTH);
    id
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_generate_id_has_exact_length() {
        for _ in 0..100 {
            assert_eq!(generate_id().len(), ID_LENGTH);
        }
    }

    #[test]
    fn test_generate_id_url_safe_characters() {
        for _ in 0..100 {
            let id = generate_id();
            assert!(
                id.chars()
                    .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_'),
                "unexpected character in id {id:?}"
            );
        }
    }

    #[test]
    fn test_generate_id_no_padding() {
        assert!(!generate_id().contains('='));
    }

    #[test]
    fn test_generate_id_produces_unique_ids() {
        let mut ids = HashSet::new();
        for _ in 0..1000 {
            ids.insert(generate_id());
        }
        // 40 bits of entropy; 1000 draws colliding would indicate a broken source.
        assert_eq!(ids.len(), 1000);
    }
}
