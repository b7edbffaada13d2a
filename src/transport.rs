//! The HTTP seam between the facade and the network.
//!
//! [`ChatKit`](crate::ChatKit) builds a [`TransportRequest`] per call, with the
//! bearer token passed by value, and hands it to a [`Transport`]. The default
//! [`HttpTransport`] uses `reqwest` with request and connect timeouts; tests
//! substitute an in-memory double.

use std::fmt;
use std::future::Future;

use chatkit_config::HttpConfig;
use chatkit_core::ChatkitError;
use reqwest::header::CONTENT_TYPE;
use serde_json::Value;

/// HTTP verbs used by the Chatkit API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<Method> for reqwest::Method {
    fn from(method: Method) -> Self {
        match method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Put => reqwest::Method::PUT,
            Method::Delete => reqwest::Method::DELETE,
        }
    }
}

/// One outbound call.
#[derive(Clone, PartialEq)]
pub struct TransportRequest {
    pub method: Method,
    pub url: String,
    pub bearer_token: String,
    pub body: Option<Value>,
}

impl fmt::Debug for TransportRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TransportRequest")
            .field("method", &self.method)
            .field("url", &self.url)
            .field("body", &self.body)
            .finish_non_exhaustive()
    }
}

/// Raw upstream reply: status code and the JSON body, if any.
#[derive(Debug, Clone, PartialEq)]
pub struct TransportResponse {
    pub status: u16,
    pub body: Option<Value>,
}

/// Sends a single request and waits for the reply.
///
/// Implementations must not retry. Network failures are reported as
/// [`ChatkitError::Transport`]; any HTTP status, including errors, is a
/// successful send.
pub trait Transport: Send + Sync {
    fn send(
        &self,
        request: TransportRequest,
    ) -> impl Future<Output = Result<TransportResponse, ChatkitError>> + Send;
}

/// `reqwest`-backed transport.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    /// Builds a client with the configured timeouts.
    ///
    /// # Errors
    ///
    /// Returns [`ChatkitError::Transport`] if the TLS backend cannot be initialised.
    pub fn new(config: &HttpConfig) -> Result<Self, ChatkitError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .build()
            .map_err(ChatkitError::transport)?;

        Ok(Self { client })
    }

    /// Wraps an existing client, keeping whatever policy it was built with.
    pub fn from_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

impl Transport for HttpTransport {
    async fn send(&self, request: TransportRequest) -> Result<TransportResponse, ChatkitError> {
        let mut builder = self
            .client
            .request(request.method.into(), &request.url)
            .bearer_auth(&request.bearer_token)
            .header(CONTENT_TYPE, "application/json");

        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder.send().await.map_err(ChatkitError::transport)?;
        let status = response.status().as_u16();
        let bytes = response.bytes().await.map_err(ChatkitError::transport)?;

        let body = if bytes.iter().all(u8::is_ascii_whitespace) {
            None
        } else {
            Some(serde_json::from_slice::<Value>(&bytes)?)
        };

        Ok(TransportResponse { status, body })
    }
}
