//! # Chatkit Auth
//!
//! Bearer token claims and signing for the Chatkit server SDK.
//!
//! - [`claims`]: the JWT claim structure
//! - [`jwt`]: token signing and verification
//!
//! # Token Types
//!
//! - **Server token**: superuser, no subject
//! - **Scoped server token**: superuser acting as a specific user
//! - **User token**: end-user token returned by `authenticate`
//!
//! # Example
//!
//! ```
//! use chatkit_auth::{server_token, verify_token};
//! use chatkit_config::InstanceConfig;
//!
//! let config = InstanceConfig::resolve("v1:us1:instance", "key:secret", None).unwrap();
//! let issued = server_token(&config).unwrap();
//! let claims = verify_token(&issued.token, &config).unwrap();
//! assert!(claims.is_superuser());
//! ```

pub mod claims;
pub mod jwt;

// Re-export commonly used types at crate root
pub use claims::Claims;
pub use jwt::{
    AccessToken, server_token, server_token_for, sign, sign_at, user_token, verify_token,
};
