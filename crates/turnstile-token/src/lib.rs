//! # turnstile-token
//!
//! Compact signed bearer tokens for the Turnstile auth gate.
//!
//! This crate provides functionality for:
//! - Holding the process-wide signing secret loaded at startup
//! - Issuing tokens that assert "request authorized" with an issued-at claim
//! - Verifying presented tokens statelessly, in constant time
//!
//! ## Token model
//!
//! A token is `base64url(claims).base64url(signature)` where the signature is
//! HMAC-SHA256 over the serialized claims under a shared secret. Verification
//! is a pure function of (token, secret): there is no server-side token
//! storage and no revocation.
//!
//! A valid token proves only that it was minted by a holder of the secret.
//! There are no subject or role claims, and the embedded issued-at timestamp
//! is informational rather than an enforced expiry.

pub mod claims;
pub mod error;
pub mod secret;
pub mod token;

pub use claims::TokenClaims;
pub use error::TokenError;
pub use secret::Secret;
pub use token::{AuthDecision, TokenIssuer, TokenSigner};
