//! Token signing and verification.
//!
//! Every token is a compact HS256 JWT keyed by the instance key secret.
//! Three flavours are issued:
//!
//! - **Server token** ([`server_token`]): superuser, no subject. Used for
//!   instance-wide administration.
//! - **Scoped server token** ([`server_token_for`]): superuser acting as a
//!   given user, e.g. to update that user or list their rooms.
//! - **User token** ([`user_token`]): subject only, never superuser. Handed
//!   to end users by `authenticate`.
//!
//! Tokens are built fresh for each call and never cached.
//!
//! # Example
//!
//! ```
//! use chatkit_auth::{user_token, verify_token};
//! use chatkit_config::InstanceConfig;
//!
//! let config = InstanceConfig::resolve("v1:us1:instance", "key:secret", None).unwrap();
//! let issued = user_token(&config, "alice").unwrap();
//!
//! let claims = verify_token(&issued.token, &config).unwrap();
//! assert_eq!(claims.sub.as_deref(), Some("alice"));
//! assert!(!claims.is_superuser());
//! ```

use chrono::{DateTime, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};

use chatkit_config::InstanceConfig;
use chatkit_core::ChatkitError;

use crate::claims::Claims;

/// A freshly signed token together with its validity window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessToken {
    pub token: String,
    pub issued_at: i64,
    pub expires_at: i64,
}

impl AccessToken {
    /// Lifetime in seconds, computed as expiry minus issuance.
    pub fn expires_in(&self) -> i64 {
        self.expires_at - self.issued_at
    }
}

/// Signs a token issued at `now`.
///
/// The `sub` claim is set only when `subject` is given; the `su` claim is
/// present (as `true`) only when `superuser` is set and omitted otherwise.
///
/// # Errors
///
/// Returns [`ChatkitError::Token`] if encoding fails or the expiry does not
/// fit in a timestamp.
pub fn sign_at(
    config: &InstanceConfig,
    subject: Option<&str>,
    superuser: bool,
    now: DateTime<Utc>,
) -> Result<AccessToken, ChatkitError> {
    let iat = now.timestamp();
    let lifetime = i64::try_from(config.token_lifetime_secs())
        .map_err(|_| ChatkitError::token("token lifetime is out of range"))?;
    let exp = iat
        .checked_add(lifetime)
        .ok_or_else(|| ChatkitError::token("token expiry is out of range"))?;

    let claims = Claims {
        iat,
        exp,
        iss: config.issuer(),
        instance: config.instance_id().to_string(),
        sub: subject.map(str::to_string),
        su: superuser.then_some(true),
    };

    let token = encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(config.key_secret().as_bytes()),
    )
    .map_err(|e| ChatkitError::token(format!("Failed to create token: {}", e)))?;

    tracing::debug!(subject = ?subject, superuser, exp, "Signed Chatkit token");

    Ok(AccessToken {
        token,
        issued_at: iat,
        expires_at: exp,
    })
}

/// Signs a token issued now.
pub fn sign(
    config: &InstanceConfig,
    subject: Option<&str>,
    superuser: bool,
) -> Result<AccessToken, ChatkitError> {
    sign_at(config, subject, superuser, Utc::now())
}

/// Superuser token with no subject.
pub fn server_token(config: &InstanceConfig) -> Result<AccessToken, ChatkitError> {
    sign(config, None, true)
}

/// Superuser token acting as `user_id`.
pub fn server_token_for(
    config: &InstanceConfig,
    user_id: &str,
) -> Result<AccessToken, ChatkitError> {
    sign(config, Some(user_id), true)
}

/// End-user token for `user_id`; never carries the superuser claim.
pub fn user_token(config: &InstanceConfig, user_id: &str) -> Result<AccessToken, ChatkitError> {
    sign(config, Some(user_id), false)
}

/// Verifies a token against the instance secret and issuer and returns its claims.
///
/// # Errors
///
/// Returns [`ChatkitError::Token`] if the signature, issuer, or expiry check
/// fails or the token is malformed.
pub fn verify_token(token: &str, config: &InstanceConfig) -> Result<Claims, ChatkitError> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.set_issuer(&[config.issuer()]);
    validation.validate_aud = false;

    decode::<Claims>(
        token,
        &DecodingKey::from_secret(config.key_secret().as_bytes()),
        &validation,
    )
    .map(|data| data.claims)
    .map_err(|e| ChatkitError::token(format!("Invalid or expired token: {}", e)))
}
