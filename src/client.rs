//! The [`ChatKit`] client.
//!
//! The client holds only immutable configuration and a transport. Each
//! operation signs its own token and passes it by value to the transport, so
//! one client can be shared freely across tasks.

use std::time::Instant;

use chatkit_auth::AccessToken;
use chatkit_config::{HttpConfig, InstanceConfig};
use chatkit_core::{ApiResponse, ChatkitError, is_success_status, normalize};
use serde_json::Value;
use tracing::{error, info, warn};
use uuid::Uuid;

use crate::transport::{HttpTransport, Method, Transport, TransportRequest};

/// Server-side client for a single Chatkit instance.
///
/// # Example
///
/// ```no_run
/// use chatkit::{ChatKit, InstanceConfig};
///
/// # async fn run() -> Result<(), chatkit::ChatkitError> {
/// let config = InstanceConfig::resolve("v1:us1:my-instance", "key-id:key-secret", None)?;
/// let chatkit = ChatKit::new(config)?;
///
/// let user = chatkit.get_user("alice").await?;
/// println!("{}", user.to_json());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ChatKit<T = HttpTransport> {
    config: InstanceConfig,
    transport: T,
}

impl ChatKit<HttpTransport> {
    /// Creates a client using the default HTTP timeouts.
    pub fn new(config: InstanceConfig) -> Result<Self, ChatkitError> {
        Self::with_http_config(config, &HttpConfig::default())
    }

    pub fn with_http_config(
        config: InstanceConfig,
        http_config: &HttpConfig,
    ) -> Result<Self, ChatkitError> {
        Ok(Self::with_transport(config, HttpTransport::new(http_config)?))
    }

    /// Creates a client from `CHATKIT_*` environment variables.
    pub fn from_env() -> Result<Self, ChatkitError> {
        Self::with_http_config(InstanceConfig::from_env()?, &HttpConfig::from_env())
    }
}

impl<T: Transport> ChatKit<T> {
    pub fn with_transport(config: InstanceConfig, transport: T) -> Self {
        Self { config, transport }
    }

    pub fn config(&self) -> &InstanceConfig {
        &self.config
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Sends one request with `token` and normalizes the reply.
    pub(crate) async fn request(
        &self,
        method: Method,
        path: &str,
        token: AccessToken,
        body: Option<Value>,
    ) -> Result<ApiResponse, ChatkitError> {
        let request_id = Uuid::new_v4();
        let start = Instant::now();
        let url = self.config.endpoint(path);

        let result = self
            .transport
            .send(TransportRequest {
                method,
                url,
                bearer_token: token.token,
                body,
            })
            .await;

        let latency = start.elapsed();

        let response = match result {
            Ok(response) => response,
            Err(e) => {
                error!(
                    request_id = %request_id,
                    method = %method,
                    path = %path,
                    latency_ms = %latency.as_millis(),
                    error = %e,
                    "Chatkit request failed"
                );
                return Err(e);
            }
        };

        if is_success_status(response.status) {
            info!(
                request_id = %request_id,
                method = %method,
                path = %path,
                status = %response.status,
                latency_ms = %latency.as_millis(),
                "Chatkit request completed"
            );
        } else {
            warn!(
                request_id = %request_id,
                method = %method,
                path = %path,
                status = %response.status,
                latency_ms = %latency.as_millis(),
                "Chatkit request returned an error status"
            );
        }

        normalize(response.status, response.body)
    }
}
