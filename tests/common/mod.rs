#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::Mutex;

use chatkit::{
    ChatKit, ChatkitError, InstanceConfig, Transport, TransportRequest, TransportResponse,
};
use fake::Fake;
use fake::faker::internet::en::Username;
use fake::faker::name::en::Name;
use serde_json::Value;

pub const TEST_LOCATOR: &str = "v1:us1:test-instance";
pub const TEST_KEY: &str = "test-key:test-secret-key-at-least-32-characters-long";

/// In-memory transport that records every request and replays scripted replies.
///
/// With no scripted reply left it answers `204 No Content`.
#[derive(Default)]
pub struct MockTransport {
    requests: Mutex<Vec<TransportRequest>>,
    replies: Mutex<VecDeque<Result<TransportResponse, ChatkitError>>>,
}

impl MockTransport {
    pub fn reply(self, status: u16, body: Option<Value>) -> Self {
        self.replies
            .lock()
            .unwrap()
            .push_back(Ok(TransportResponse { status, body }));
        self
    }

    pub fn fail(self, error: ChatkitError) -> Self {
        self.replies.lock().unwrap().push_back(Err(error));
        self
    }

    pub fn requests(&self) -> Vec<TransportRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    pub fn last_request(&self) -> TransportRequest {
        self.requests
            .lock()
            .unwrap()
            .last()
            .cloned()
            .expect("no request was sent")
    }
}

impl Transport for MockTransport {
    async fn send(&self, request: TransportRequest) -> Result<TransportResponse, ChatkitError> {
        self.requests.lock().unwrap().push(request);
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(Ok(TransportResponse {
                status: 204,
                body: None,
            }))
    }
}

pub fn test_config() -> InstanceConfig {
    InstanceConfig::resolve(TEST_LOCATOR, TEST_KEY, Some(3600)).unwrap()
}

pub fn client_with(transport: MockTransport) -> ChatKit<MockTransport> {
    ChatKit::with_transport(test_config(), transport)
}

pub fn test_client() -> ChatKit<MockTransport> {
    client_with(MockTransport::default())
}

pub fn generate_user_id() -> String {
    let username: String = Username().fake();
    format!("{}-{}", username, uuid::Uuid::new_v4().simple())
}

pub fn generate_name() -> String {
    Name().fake()
}

pub fn base_url() -> String {
    test_config().api_base_url().to_string()
}
