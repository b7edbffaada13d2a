//! JWT claim structure for Chatkit bearer tokens.

use serde::{Deserialize, Serialize};

/// Claims carried by every Chatkit token.
///
/// # Fields
///
/// - `iat`: issued-at timestamp (Unix seconds)
/// - `exp`: expiry timestamp (Unix seconds)
/// - `iss`: `api_keys/<keyId>`
/// - `instance`: the instance id from the locator
/// - `sub`: end-user id, absent for instance-wide admin tokens
/// - `su`: present (and `true`) only on superuser tokens
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    pub iat: i64,
    pub exp: i64,
    pub iss: String,
    pub instance: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub su: Option<bool>,
}

impl Claims {
    pub fn is_superuser(&self) -> bool {
        self.su == Some(true)
    }

    /// Seconds between issuance and expiry.
    pub fn lifetime_secs(&self) -> i64 {
        self.exp - self.iat
    }
}
