//! Token signing and verification.

use crate::claims::TokenClaims;
use crate::error::TokenError;
use crate::secret::Secret;
use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use hmac::{Hmac, Mac};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// Outcome of verifying a presented token.
///
/// Exists only for the duration of a single request; nothing here is
/// persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthDecision {
    /// Signature checks out; the claims recovered from the payload.
    Valid(TokenClaims),
    /// Structurally sound token whose signature does not match the secret.
    Invalid,
    /// Input that cannot be parsed into (payload, signature). Covers absent
    /// and empty header values too.
    Malformed,
}

impl AuthDecision {
    /// Whether the request should be allowed through.
    pub fn is_valid(&self) -> bool {
        matches!(self, AuthDecision::Valid(_))
    }
}

/// Signs and verifies compact tokens under the shared secret.
///
/// Both operations are pure and CPU-only, safe to call concurrently from any
/// number of request tasks.
#[derive(Clone)]
pub struct TokenSigner {
    secret: Secret,
}

impl TokenSigner {
    /// Create a signer over the given secret.
    pub fn new(secret: Secret) -> Self {
        Self { secret }
    }

    /// Sign the claims into a compact token.
    ///
    /// Deterministic: the same claims under the same secret always produce
    /// the same token.
    pub fn sign(&self, claims: &TokenClaims) -> Result<String, TokenError> {
        let payload = serde_json::to_vec(claims)?;
        let signature = self.signature(&payload);
        Ok(format!(
            "{}.{}",
            URL_SAFE_NO_PAD.encode(&payload),
            URL_SAFE_NO_PAD.encode(signature)
        ))
    }

    /// Verify a presented token.
    ///
    /// Everything up to the signature comparison treats the input as
    /// untrusted bytes: malformed input is a normal outcome, never a panic.
    /// The comparison itself is constant-time via [`Mac::verify_slice`].
    pub fn verify(&self, token: &str) -> AuthDecision {
        let Some((payload_b64, signature_b64)) = token.split_once('.') else {
            return AuthDecision::Malformed;
        };
        let Ok(payload) = URL_SAFE_NO_PAD.decode(payload_b64) else {
            return AuthDecision::Malformed;
        };
        let Ok(signature) = URL_SAFE_NO_PAD.decode(signature_b64) else {
            return AuthDecision::Malformed;
        };
        let claims: TokenClaims = match serde_json::from_slice(&payload) {
            Ok(claims) => claims,
            Err(_) => return AuthDecision::Malformed,
        };

        let mut mac = self.mac();
        mac.update(&payload);
        if mac.verify_slice(&signature).is_err() {
            return AuthDecision::Invalid;
        }

        AuthDecision::Valid(claims)
    }

    fn signature(&self, payload: &[u8]) -> Vec<u8> {
        let mut mac = self.mac();
        mac.update(payload);
        mac.finalize().into_bytes().to_vec()
    }

    fn mac(&self) -> HmacSha256 {
        HmacSha256::new_from_slice(self.secret.as_bytes())
            .expect("HMAC accepts keys of any length")
    }
}

/// Issues tokens on demand.
///
/// Issuance is deliberately unauthenticated: any caller can mint a token, so
/// a token proves possession of an issued credential, not caller identity.
/// Do not add a login step here; that would change the contract.
#[derive(Clone)]
pub struct TokenIssuer {
    signer: TokenSigner,
}

impl TokenIssuer {
    /// Create an issuer backed by the given signer.
    pub fn new(signer: TokenSigner) -> Self {
        Self { signer }
    }

    /// Mint a token asserting "request authorized" as of now.
    pub fn issue(&self) -> Result<String, TokenError> {
        let claims = TokenClaims::now();
        let token = self.signer.sign(&claims)?;
        tracing::debug!(iat = claims.iat, "Issued access token");
        Ok(token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn signer(key: &[u8]) -> TokenSigner {
        TokenSigner::new(Secret::new(key.to_vec()).unwrap())
    }

    #[test]
    fn test_sign_and_verify_roundtrip() {
        let signer = signer(b"roundtrip-secret");
        let claims = TokenClaims { iat: 1_700_000_000 };

        let token = signer.sign(&claims).unwrap();
        assert_eq!(signer.verify(&token), AuthDecision::Valid(claims));
    }

    #[test]
    fn test_sign_is_deterministic() {
        let signer = signer(b"deterministic");
        let claims = TokenClaims { iat: 42 };

        assert_eq!(signer.sign(&claims).unwrap(), signer.sign(&claims).unwrap());
    }

    #[test]
    fn test_verify_rejects_other_secret() {
        let minting = signer(b"secret-one");
        let verifying = signer(b"secret-two");

        let token = minting.sign(&TokenClaims { iat: 7 }).unwrap();
        assert_eq!(verifying.verify(&token), AuthDecision::Invalid);
    }

    #[test]
    fn test_verify_rejects_tampered_signature() {
        let signer = signer(b"tamper-secret");
        let token = signer.sign(&TokenClaims { iat: 7 }).unwrap();

        // Mutate each character of the signature portion in turn; every
        // variant must fail, either as a signature mismatch or as input that
        // no longer base64-decodes.
        let dot = token.find('.').unwrap();
        for i in dot + 1..token.len() {
            let mut bytes = token.clone().into_bytes();
            bytes[i] = if bytes[i] == b'A' { b'B' } else { b'A' };
            let mutated = String::from_utf8(bytes).unwrap();
            if mutated == token {
                continue;
            }
            assert_ne!(
                signer.verify(&mutated),
                AuthDecision::Valid(TokenClaims { iat: 7 }),
                "mutation at byte {i} was accepted"
            );
        }
    }

    #[test]
    fn test_verify_rejects_tampered_payload() {
        let signer = signer(b"tamper-secret");
        let token = signer.sign(&TokenClaims { iat: 7 }).unwrap();

        // Re-encode a different payload over the original signature.
        let signature_b64 = token.split_once('.').unwrap().1;
        let forged_payload = URL_SAFE_NO_PAD.encode(br#"{"iat":8}"#);
        let forged = format!("{forged_payload}.{signature_b64}");

        assert_eq!(signer.verify(&forged), AuthDecision::Invalid);
    }

    #[test]
    fn test_verify_malformed_inputs() {
        let signer = signer(b"malformed-secret");

        for input in [
            "",
            "no-dot-at-all",
            ".",
            "only-payload.",
            ".only-signature",
            "!!!.###",
            "b64/but?not=urlsafe.c2ln",
        ] {
            assert_eq!(
                signer.verify(input),
                AuthDecision::Malformed,
                "input {input:?} was not treated as malformed"
            );
        }

        // Decodable base64 that is not a claims document.
        let not_json = format!(
            "{}.{}",
            URL_SAFE_NO_PAD.encode(b"plain text"),
            URL_SAFE_NO_PAD.encode(b"sig")
        );
        assert_eq!(signer.verify(&not_json), AuthDecision::Malformed);
    }

    #[test]
    fn test_issue_produces_valid_token() {
        let signer = signer(b"issuer-secret");
        let issuer = TokenIssuer::new(signer.clone());

        let token = issuer.issue().unwrap();
        let decision = signer.verify(&token);
        assert!(decision.is_valid());

        match decision {
            AuthDecision::Valid(claims) => assert!(claims.issued_at().is_some()),
            other => panic!("expected valid decision, got {other:?}"),
        }
    }
}
