use chatkit_auth::user_token;
use chatkit_core::{ApiResponse, ChatkitError, Payload};
use chatkit_models::require_id;
use tracing::instrument;

use crate::client::ChatKit;
use crate::modules::auth::model::{AuthTokenPayload, TOKEN_TYPE};
use crate::transport::Transport;

impl<T: Transport> ChatKit<T> {
    /// Issues an end-user token for `user_id`.
    ///
    /// Nothing is sent upstream: the token is signed locally and returned as
    /// the payload of a status-200 envelope with `access_token`, `token_type`,
    /// `expires_in` (seconds), and `user_id`.
    ///
    /// # Errors
    ///
    /// Returns [`ChatkitError::Validation`] if `user_id` is blank.
    #[instrument(skip(self))]
    pub fn authenticate(&self, user_id: &str) -> Result<ApiResponse, ChatkitError> {
        require_id("user_id", user_id)?;

        let issued = user_token(self.config(), user_id)?;
        let payload = AuthTokenPayload {
            expires_in: issued.expires_in(),
            access_token: issued.token,
            token_type: TOKEN_TYPE.to_string(),
            user_id: user_id.to_string(),
        };

        Ok(ApiResponse::success(Some(Payload::Object(payload.into_object()))))
    }
}
