//! Token claims.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Claims carried by an issued token.
///
/// Deliberately minimal: the token asserts "minted by a holder of the
/// secret" and nothing else. The issued-at timestamp is embedded for
/// observability; expiry is not enforced anywhere.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenClaims {
    /// Issued-at timestamp, unix seconds.
    pub iat: i64,
}

impl TokenClaims {
    /// Claims stamped with the current time.
    pub fn now() -> Self {
        Self {
            iat: Utc::now().timestamp(),
        }
    }

    /// Issued-at as a `DateTime`, when the embedded value is representable.
    pub fn issued_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.iat, 0)
    }
}
