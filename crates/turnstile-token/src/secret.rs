//! Shared-secret handling for token signing.

use crate::error::TokenError;

/// The process-wide signing secret.
///
/// Loaded once at startup and shared by issuance and verification. Both sides
/// of the exchange hold the same bytes; if they ever diverge, every
/// verification fails. The secret is never rotated at runtime.
#[derive(Clone)]
pub struct Secret {
    bytes: Vec<u8>,
}

impl Secret {
    /// Create a secret from raw bytes.
    ///
    /// Empty secrets are rejected: an auth subsystem keyed on zero bytes is
    /// inoperable and the surrounding process must refuse to start.
    pub fn new(bytes: impl Into<Vec<u8>>) -> Result<Self, TokenError> {
        let bytes = bytes.into();
        if bytes.is_empty() {
            return Err(TokenError::EmptySecret);
        }
        Ok(Self { bytes })
    }

    /// Raw key bytes for the HMAC.
    pub(crate) fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }
}

// Keep key material out of logs and error chains.
impl std::fmt::Debug for Secret {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Secret")
            .field("len", &self.bytes.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_secret_rejected() {
        let err = Secret::new(Vec::new()).unwrap_err();
        assert!(matches!(err, TokenError::EmptySecret));
    }

    #[test]
    fn test_non_empty_secret_accepted() {
        let secret = Secret::new(b"super-secret".to_vec()).unwrap();
        assert_eq!(secret.as_bytes(), b"super-secret");
    }

    #[test]
    fn test_debug_redacts_bytes() {
        let secret = Secret::new(b"super-secret".to_vec()).unwrap();
        let printed = format!("{:?}", secret);
        assert!(!printed.contains("super-secret"));
        assert!(printed.contains("len"));
    }
}
