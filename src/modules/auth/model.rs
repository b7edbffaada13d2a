use chatkit_core::JsonObject;
use serde_json::Value;

pub const TOKEN_TYPE: &str = "access_token";

/// Payload returned by `authenticate`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthTokenPayload {
    pub access_token: String,
    pub token_type: String,
    /// Token lifetime in seconds.
    pub expires_in: i64,
    pub user_id: String,
}

impl AuthTokenPayload {
    pub fn into_object(self) -> JsonObject {
        let mut object = JsonObject::new();
        object.insert("access_token".to_string(), Value::from(self.access_token));
        object.insert("token_type".to_string(), Value::from(self.token_type));
        object.insert("expires_in".to_string(), Value::from(self.expires_in));
        object.insert("user_id".to_string(), Value::from(self.user_id));
        object
    }
}
