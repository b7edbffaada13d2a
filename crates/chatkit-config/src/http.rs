//! Outbound HTTP transport configuration.
//!
//! # Environment Variables
//!
//! - `CHATKIT_HTTP_TIMEOUT_SECS`: whole-request timeout in seconds (default: 30)
//! - `CHATKIT_HTTP_CONNECT_TIMEOUT_SECS`: connect timeout in seconds (default: 10)

use std::env;
use std::time::Duration;

/// Timeouts applied by the HTTP transport.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpConfig {
    /// Upper bound for a whole request, including reading the body.
    pub timeout: Duration,

    /// Upper bound for establishing the connection.
    pub connect_timeout: Duration,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
        }
    }
}

impl HttpConfig {
    /// Creates a new `HttpConfig` from environment variables.
    ///
    /// Falls back to default values if variables are not set or cannot be
    /// parsed.
    #[must_use]
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            timeout: env::var("CHATKIT_HTTP_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .map(Duration::from_secs)
                .unwrap_or(defaults.timeout),
            connect_timeout: env::var("CHATKIT_HTTP_CONNECT_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .map(Duration::from_secs)
                .unwrap_or(defaults.connect_timeout),
        }
    }
}
