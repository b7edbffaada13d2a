use chatkit_auth::server_token_for;
use chatkit_core::{ApiResponse, ChatkitError};
use chatkit_models::{CreateRoomBody, CreateRoomDto, require_id, validate_dto};
use tracing::instrument;

use crate::client::ChatKit;
use crate::transport::{Method, Transport};

pub(crate) const ROOMS_PATH: &str = "rooms";

impl<T: Transport> ChatKit<T> {
    /// Creates a room owned by `creator_id`, signing as the creator with
    /// superuser rights.
    ///
    /// # Errors
    ///
    /// Returns [`ChatkitError::Validation`] if `creator_id` is blank or the
    /// DTO has an empty `name`.
    #[instrument(skip(self, room))]
    pub async fn create_room(
        &self,
        creator_id: &str,
        room: &CreateRoomDto,
    ) -> Result<ApiResponse, ChatkitError> {
        require_id("creator_id", creator_id)?;
        validate_dto(room)?;

        let body = serde_json::to_value(CreateRoomBody { creator_id, room })?;
        let token = server_token_for(self.config(), creator_id)?;
        self.request(Method::Post, ROOMS_PATH, token, Some(body)).await
    }
}
