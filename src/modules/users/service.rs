use chatkit_auth::{server_token, server_token_for};
use chatkit_core::{ApiResponse, ChatkitError};
use chatkit_models::{
    CreateUserBody, CreateUserDto, UpdateUserDto, require_id, require_ids, validate_dto,
};
use tracing::instrument;

use crate::client::ChatKit;
use crate::transport::{Method, Transport};

pub(crate) const USERS_PATH: &str = "users";

pub(crate) fn user_path(user_id: &str) -> String {
    format!("{USERS_PATH}/{user_id}")
}

pub(crate) fn users_by_ids_path<S: AsRef<str>>(user_ids: &[S]) -> String {
    let joined = user_ids
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join(",");
    format!("users_by_ids?user_ids={joined}")
}

pub(crate) fn user_rooms_path(user_id: &str, joinable: bool) -> String {
    if joinable {
        format!("{USERS_PATH}/{user_id}/rooms?joinable=true")
    } else {
        format!("{USERS_PATH}/{user_id}/rooms")
    }
}

impl<T: Transport> ChatKit<T> {
    /// Lists every user in the instance.
    #[instrument(skip(self))]
    pub async fn get_users(&self) -> Result<ApiResponse, ChatkitError> {
        let token = server_token(self.config())?;
        self.request(Method::Get, USERS_PATH, token, None).await
    }

    /// Fetches the users with the given ids, in one request.
    ///
    /// # Errors
    ///
    /// Returns [`ChatkitError::Validation`] naming `user_ids` if the list is
    /// empty or contains a blank id.
    #[instrument(skip(self))]
    pub async fn get_users_by_ids<S>(&self, user_ids: &[S]) -> Result<ApiResponse, ChatkitError>
    where
        S: AsRef<str> + std::fmt::Debug + Sync,
    {
        require_ids("user_ids", user_ids)?;

        let token = server_token(self.config())?;
        self.request(Method::Get, &users_by_ids_path(user_ids), token, None).await
    }

    #[instrument(skip(self))]
    pub async fn get_user(&self, user_id: &str) -> Result<ApiResponse, ChatkitError> {
        require_id("user_id", user_id)?;

        let token = server_token(self.config())?;
        self.request(Method::Get, &user_path(user_id), token, None).await
    }

    /// Creates a user with id `user_id`.
    ///
    /// # Errors
    ///
    /// Returns [`ChatkitError::Validation`] if `user_id` is blank or the DTO
    /// has an empty `name`.
    #[instrument(skip(self, user))]
    pub async fn create_user(
        &self,
        user_id: &str,
        user: &CreateUserDto,
    ) -> Result<ApiResponse, ChatkitError> {
        require_id("user_id", user_id)?;
        validate_dto(user)?;

        let body = serde_json::to_value(CreateUserBody { id: user_id, user })?;
        let token = server_token(self.config())?;
        self.request(Method::Post, USERS_PATH, token, Some(body)).await
    }

    /// Updates a user, signing as that user with superuser rights.
    #[instrument(skip(self, update))]
    pub async fn update_user(
        &self,
        user_id: &str,
        update: &UpdateUserDto,
    ) -> Result<ApiResponse, ChatkitError> {
        require_id("user_id", user_id)?;

        let body = serde_json::to_value(update)?;
        let token = server_token_for(self.config(), user_id)?;
        self.request(Method::Put, &user_path(user_id), token, Some(body)).await
    }

    #[instrument(skip(self))]
    pub async fn delete_user(&self, user_id: &str) -> Result<ApiResponse, ChatkitError> {
        require_id("user_id", user_id)?;

        let token = server_token(self.config())?;
        self.request(Method::Delete, &user_path(user_id), token, None).await
    }

    /// Lists the rooms `user_id` belongs to.
    #[instrument(skip(self))]
    pub async fn get_user_rooms(&self, user_id: &str) -> Result<ApiResponse, ChatkitError> {
        require_id("user_id", user_id)?;

        let token = server_token_for(self.config(), user_id)?;
        self.request(Method::Get, &user_rooms_path(user_id, false), token, None).await
    }

    /// Lists the rooms `user_id` is able to join.
    #[instrument(skip(self))]
    pub async fn get_user_joinable_rooms(
        &self,
        user_id: &str,
    ) -> Result<ApiResponse, ChatkitError> {
        require_id("user_id", user_id)?;

        let token = server_token_for(self.config(), user_id)?;
        self.request(Method::Get, &user_rooms_path(user_id, true), token, None).await
    }
}
