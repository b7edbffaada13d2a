//! Chatkit instance configuration.
//!
//! An instance is addressed by a locator of the form `v1:<region>:<instance>`
//! and authenticated with a key of the form `<keyId>:<keySecret>`. Both are
//! split and validated once, when the [`InstanceConfig`] is built.
//!
//! # Environment Variables
//!
//! - `CHATKIT_INSTANCE_LOCATOR`: instance locator (required)
//! - `CHATKIT_KEY`: instance key (required)
//! - `CHATKIT_EXPIRE_IN`: token lifetime in seconds (default: 86400)
//! - `CHATKIT_API_BASE_URL`: full API base URL override (optional)

use std::env;
use std::fmt;

use chatkit_core::ChatkitError;

/// Default token lifetime: 24 hours.
pub const DEFAULT_TOKEN_LIFETIME_SECS: u64 = 24 * 60 * 60;

/// Longest accepted token lifetime: 10 years.
pub const MAX_TOKEN_LIFETIME_SECS: u64 = 10 * 365 * 24 * 60 * 60;

/// Host every instance is served from, whatever its locator region says.
pub const DEFAULT_API_HOST: &str = "us1.pusherplatform.io";

const LOCATOR_FORMAT: &str = "v1:region:instance";
const KEY_FORMAT: &str = "keyId:keySecret";

/// Immutable, validated instance configuration.
///
/// The key secret is never shown by the `Debug` implementation.
#[derive(Clone, PartialEq, Eq)]
pub struct InstanceConfig {
    instance_id: String,
    region: String,
    key_id: String,
    key_secret: String,
    token_lifetime_secs: u64,
    api_base_url: String,
}

impl InstanceConfig {
    /// Splits and validates a locator and key.
    ///
    /// `lifetime_override` defaults to [`DEFAULT_TOKEN_LIFETIME_SECS`].
    ///
    /// # Errors
    ///
    /// Returns [`ChatkitError::Configuration`] naming the expected format when
    /// the locator is not exactly three colon-separated segments, when the key
    /// is not exactly two, when the instance id, key id, or secret is empty,
    /// or when the lifetime is zero or above [`MAX_TOKEN_LIFETIME_SECS`].
    pub fn resolve(
        locator: &str,
        key: &str,
        lifetime_override: Option<u64>,
    ) -> Result<Self, ChatkitError> {
        let locator_parts: Vec<&str> = locator.split(':').collect();
        let [_, region, instance_id] = locator_parts.as_slice() else {
            return Err(ChatkitError::configuration(format!(
                "instance locator must have the format {LOCATOR_FORMAT}"
            )));
        };
        if instance_id.is_empty() {
            return Err(ChatkitError::configuration(format!(
                "instance locator must have the format {LOCATOR_FORMAT}"
            )));
        }

        let key_parts: Vec<&str> = key.split(':').collect();
        let [key_id, key_secret] = key_parts.as_slice() else {
            return Err(ChatkitError::configuration(format!(
                "key must have the format {KEY_FORMAT}"
            )));
        };
        if key_id.is_empty() || key_secret.is_empty() {
            return Err(ChatkitError::configuration(format!(
                "key must have the format {KEY_FORMAT}"
            )));
        }

        let token_lifetime_secs = lifetime_override.unwrap_or(DEFAULT_TOKEN_LIFETIME_SECS);
        if token_lifetime_secs == 0 {
            return Err(ChatkitError::configuration(
                "token lifetime must be greater than zero",
            ));
        }
        if token_lifetime_secs > MAX_TOKEN_LIFETIME_SECS {
            return Err(ChatkitError::configuration(format!(
                "token lifetime must be at most {MAX_TOKEN_LIFETIME_SECS} seconds"
            )));
        }

        Ok(Self {
            api_base_url: default_base_url(instance_id),
            instance_id: (*instance_id).to_string(),
            region: (*region).to_string(),
            key_id: (*key_id).to_string(),
            key_secret: (*key_secret).to_string(),
            token_lifetime_secs,
        })
    }

    /// Loads configuration from `CHATKIT_*` environment variables.
    ///
    /// # Errors
    ///
    /// Fails when the locator or key is unset or malformed, or when
    /// `CHATKIT_EXPIRE_IN` is not a positive integer.
    pub fn from_env() -> Result<Self, ChatkitError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Same as [`from_env`](Self::from_env) with a custom variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ChatkitError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let locator = lookup("CHATKIT_INSTANCE_LOCATOR")
            .ok_or_else(|| ChatkitError::configuration("you must provide an instance locator"))?;
        let key = lookup("CHATKIT_KEY")
            .ok_or_else(|| ChatkitError::configuration("you must provide a key"))?;

        let lifetime = lookup("CHATKIT_EXPIRE_IN")
            .map(|raw| {
                raw.trim().parse::<u64>().map_err(|_| {
                    ChatkitError::configuration(format!(
                        "CHATKIT_EXPIRE_IN must be a number of seconds, got {raw:?}"
                    ))
                })
            })
            .transpose()?;

        let config = Self::resolve(&locator, &key, lifetime)?;

        match lookup("CHATKIT_API_BASE_URL") {
            Some(base_url) if !base_url.trim().is_empty() => {
                Ok(config.with_api_base_url(base_url.trim()))
            }
            _ => Ok(config),
        }
    }

    /// Replaces the API base URL, keeping a single trailing `/`.
    #[must_use]
    pub fn with_api_base_url(mut self, base_url: &str) -> Self {
        let trimmed = base_url.trim_end_matches('/');
        tracing::debug!(base_url = %trimmed, "Overriding Chatkit API base URL");
        self.api_base_url = format!("{trimmed}/");
        self
    }

    pub fn instance_id(&self) -> &str {
        &self.instance_id
    }

    /// Region segment of the locator. Not used to pick the host.
    pub fn region(&self) -> &str {
        &self.region
    }

    pub fn key_id(&self) -> &str {
        &self.key_id
    }

    pub fn key_secret(&self) -> &str {
        &self.key_secret
    }

    pub fn token_lifetime_secs(&self) -> u64 {
        self.token_lifetime_secs
    }

    pub fn api_base_url(&self) -> &str {
        &self.api_base_url
    }

    /// Issuer claim for tokens signed with this key.
    pub fn issuer(&self) -> String {
        format!("api_keys/{}", self.key_id)
    }

    /// Joins a service path onto the base URL.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.api_base_url, path.trim_start_matches('/'))
    }
}

impl fmt::Debug for InstanceConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InstanceConfig")
            .field("instance_id", &self.instance_id)
            .field("region", &self.region)
            .field("key_id", &self.key_id)
            .field("token_lifetime_secs", &self.token_lifetime_secs)
            .field("api_base_url", &self.api_base_url)
            .finish_non_exhaustive()
    }
}

fn default_base_url(instance_id: &str) -> String {
    format!("https://{DEFAULT_API_HOST}/services/chatkit/v1/{instance_id}/")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    const LOCATOR: &str = "v1:us1:instance-123";
    const KEY: &str = "key-id:key-secret";

    #[test]
    fn test_resolve_splits_locator_and_key() {
        let config = InstanceConfig::resolve(LOCATOR, KEY, None).unwrap();

        assert_eq!(config.instance_id(), "instance-123");
        assert_eq!(config.region(), "us1");
        assert_eq!(config.key_id(), "key-id");
        assert_eq!(config.key_secret(), "key-secret");
        assert_eq!(config.token_lifetime_secs(), DEFAULT_TOKEN_LIFETIME_SECS);
        assert_eq!(config.issuer(), "api_keys/key-id");
    }

    #[test]
    fn test_default_base_url_ignores_region() {
        let config = InstanceConfig::resolve("v1:eu1:abc", KEY, None).unwrap();
        assert_eq!(
            config.api_base_url(),
            "https://us1.pusherplatform.io/services/chatkit/v1/abc/"
        );
    }

    #[test]
    fn test_lifetime_override() {
        let config = InstanceConfig::resolve(LOCATOR, KEY, Some(600)).unwrap();
        assert_eq!(config.token_lifetime_secs(), 600);
    }

    #[test]
    fn test_zero_lifetime_rejected() {
        let result = InstanceConfig::resolve(LOCATOR, KEY, Some(0));
        assert!(matches!(result, Err(ChatkitError::Configuration(_))));
    }

    #[test]
    fn test_oversized_lifetime_rejected() {
        let at_cap =
            InstanceConfig::resolve(LOCATOR, KEY, Some(MAX_TOKEN_LIFETIME_SECS)).unwrap();
        assert_eq!(at_cap.token_lifetime_secs(), MAX_TOKEN_LIFETIME_SECS);

        for lifetime in [MAX_TOKEN_LIFETIME_SECS + 1, i64::MAX as u64, u64::MAX] {
            let result = InstanceConfig::resolve(LOCATOR, KEY, Some(lifetime));
            assert!(
                matches!(result, Err(ChatkitError::Configuration(_))),
                "lifetime {lifetime} was accepted"
            );
        }
    }

    #[test]
    fn test_locator_with_wrong_segment_count() {
        for locator in ["", "instance", "v1:us1", "v1:us1:abc:extra"] {
            let err = InstanceConfig::resolve(locator, KEY, None).unwrap_err();
            assert!(
                err.to_string().contains("v1:region:instance"),
                "locator {locator:?} gave {err}"
            );
        }
    }

    #[test]
    fn test_locator_with_empty_instance() {
        let result = InstanceConfig::resolve("v1:us1:", KEY, None);
        assert!(matches!(result, Err(ChatkitError::Configuration(_))));
    }

    #[test]
    fn test_key_with_wrong_segment_count() {
        for key in ["", "just-an-id", "a:b:c"] {
            let err = InstanceConfig::resolve(LOCATOR, key, None).unwrap_err();
            assert!(
                err.to_string().contains("keyId:keySecret"),
                "key {key:?} gave {err}"
            );
        }
    }

    #[test]
    fn test_key_with_empty_secret() {
        let result = InstanceConfig::resolve(LOCATOR, "key-id:", None);
        assert!(matches!(result, Err(ChatkitError::Configuration(_))));
    }

    #[test]
    fn test_with_api_base_url_normalizes_slash() {
        let config = InstanceConfig::resolve(LOCATOR, KEY, None)
            .unwrap()
            .with_api_base_url("http://127.0.0.1:8080/chatkit//");
        assert_eq!(config.api_base_url(), "http://127.0.0.1:8080/chatkit/");
        assert_eq!(
            config.endpoint("users/alice"),
            "http://127.0.0.1:8080/chatkit/users/alice"
        );
    }

    #[test]
    fn test_debug_hides_secret() {
        let config = InstanceConfig::resolve(LOCATOR, KEY, None).unwrap();
        let debug_str = format!("{:?}", config);
        assert!(debug_str.contains("InstanceConfig"));
        assert!(!debug_str.contains("key-secret"));
    }

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name: &str| map.get(name).cloned()
    }

    #[test]
    fn test_from_lookup_reads_all_variables() {
        let config = InstanceConfig::from_lookup(lookup_from(&[
            ("CHATKIT_INSTANCE_LOCATOR", LOCATOR),
            ("CHATKIT_KEY", KEY),
            ("CHATKIT_EXPIRE_IN", "3600"),
            ("CHATKIT_API_BASE_URL", "http://localhost:9000"),
        ]))
        .unwrap();

        assert_eq!(config.token_lifetime_secs(), 3600);
        assert_eq!(config.api_base_url(), "http://localhost:9000/");
    }

    #[test]
    fn test_from_lookup_requires_locator() {
        let err = InstanceConfig::from_lookup(lookup_from(&[("CHATKIT_KEY", KEY)])).unwrap_err();
        assert!(err.to_string().contains("instance locator"));
    }

    #[test]
    fn test_from_lookup_requires_key() {
        let err = InstanceConfig::from_lookup(lookup_from(&[(
            "CHATKIT_INSTANCE_LOCATOR",
            LOCATOR,
        )]))
        .unwrap_err();
        assert!(err.to_string().contains("key"));
    }

    #[test]
    fn test_from_lookup_rejects_non_numeric_lifetime() {
        let result = InstanceConfig::from_lookup(lookup_from(&[
            ("CHATKIT_INSTANCE_LOCATOR", LOCATOR),
            ("CHATKIT_KEY", KEY),
            ("CHATKIT_EXPIRE_IN", "one day"),
        ]));
        assert!(matches!(result, Err(ChatkitError::Configuration(_))));
    }

    #[test]
    fn test_from_lookup_rejects_oversized_lifetime() {
        let result = InstanceConfig::from_lookup(lookup_from(&[
            ("CHATKIT_INSTANCE_LOCATOR", LOCATOR),
            ("CHATKIT_KEY", KEY),
            ("CHATKIT_EXPIRE_IN", "9223372036854775807"),
        ]));
        assert!(matches!(result, Err(ChatkitError::Configuration(_))));
    }
}
