//! Room request DTOs.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use validator::Validate;

/// Body for creating a room on behalf of a creator.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
pub struct CreateRoomDto {
    #[validate(length(min = 1))]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub private: Option<bool>,
    /// Initial members besides the creator.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_ids: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_data: Option<Value>,
}

impl CreateRoomDto {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}

/// Wire body for `POST rooms`: the DTO with `creator_id` merged in.
#[derive(Debug, Serialize)]
pub struct CreateRoomBody<'a> {
    pub creator_id: &'a str,
    #[serde(flatten)]
    pub room: &'a CreateRoomDto,
}
