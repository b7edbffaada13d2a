//! # Chatkit Config
//!
//! Configuration types for the Chatkit server SDK.
//!
//! - [`instance`]: instance locator, key, and token lifetime
//! - [`http`]: timeouts for the outbound HTTP transport
//!
//! # Example
//!
//! ```
//! use chatkit_config::InstanceConfig;
//!
//! let config = InstanceConfig::resolve("v1:us1:my-instance", "key-id:secret", None).unwrap();
//! assert_eq!(config.instance_id(), "my-instance");
//! assert_eq!(config.token_lifetime_secs(), 86_400);
//! ```

pub mod http;
pub mod instance;

// Re-export commonly used types at crate root
pub use http::HttpConfig;
pub use instance::{DEFAULT_TOKEN_LIFETIME_SECS, InstanceConfig, MAX_TOKEN_LIFETIME_SECS};
