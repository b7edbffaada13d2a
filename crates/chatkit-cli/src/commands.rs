//! Subcommand definitions and their dispatch onto the SDK.

use anyhow::Context as _;
use chatkit::{ChatKit, CreateRoomDto, CreateUserDto, Transport, UpdateUserDto, verify_token};
use clap::Subcommand;
use serde_json::{Value, json};

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Issue an end-user access token (no network call)
    Authenticate {
        /// Id of the user to authenticate
        user_id: String,
    },
    /// List users, optionally restricted to a set of ids
    GetUsers {
        /// Comma-separated user ids
        #[arg(long, value_delimiter = ',')]
        ids: Vec<String>,
    },
    /// Fetch one user
    GetUser { user_id: String },
    /// Create a user
    CreateUser {
        user_id: String,

        /// Display name
        #[arg(short = 'n', long)]
        name: String,

        /// Avatar image URL
        #[arg(long)]
        avatar_url: Option<String>,

        /// Arbitrary JSON stored with the user
        #[arg(long)]
        custom_data: Option<String>,
    },
    /// Update a user's name, avatar, or custom data
    UpdateUser {
        user_id: String,

        #[arg(short = 'n', long)]
        name: Option<String>,

        #[arg(long)]
        avatar_url: Option<String>,

        #[arg(long)]
        custom_data: Option<String>,
    },
    /// Delete a user
    DeleteUser { user_id: String },
    /// List the rooms a user belongs to
    GetUserRooms {
        user_id: String,

        /// List rooms the user can join instead
        #[arg(long)]
        joinable: bool,
    },
    /// Create a room owned by a user
    CreateRoom {
        /// Id of the creating user
        creator_id: String,

        #[arg(short = 'n', long)]
        name: String,

        /// Make the room private
        #[arg(long)]
        private: bool,

        /// Additional member ids (repeatable)
        #[arg(short = 'm', long = "member")]
        members: Vec<String>,
    },
    /// Verify a token against the configured key and print its claims
    DecodeToken { token: String },
}

fn parse_custom_data(raw: Option<String>) -> anyhow::Result<Option<Value>> {
    raw.map(|text| serde_json::from_str(&text).context("--custom-data must be valid JSON"))
        .transpose()
}

/// Runs one command and returns the JSON to print.
pub async fn execute<T: Transport>(
    chatkit: &ChatKit<T>,
    command: Command,
) -> anyhow::Result<Value> {
    let response = match command {
        Command::Authenticate { user_id } => chatkit.authenticate(&user_id)?,
        Command::GetUsers { ids } if ids.is_empty() => chatkit.get_users().await?,
        Command::GetUsers { ids } => chatkit.get_users_by_ids(&ids).await?,
        Command::GetUser { user_id } => chatkit.get_user(&user_id).await?,
        Command::CreateUser {
            user_id,
            name,
            avatar_url,
            custom_data,
        } => {
            let user = CreateUserDto {
                name,
                avatar_url,
                custom_data: parse_custom_data(custom_data)?,
            };
            chatkit.create_user(&user_id, &user).await?
        }
        Command::UpdateUser {
            user_id,
            name,
            avatar_url,
            custom_data,
        } => {
            let update = UpdateUserDto {
                name,
                avatar_url,
                custom_data: parse_custom_data(custom_data)?,
            };
            chatkit.update_user(&user_id, &update).await?
        }
        Command::DeleteUser { user_id } => chatkit.delete_user(&user_id).await?,
        Command::GetUserRooms { user_id, joinable } if joinable => {
            chatkit.get_user_joinable_rooms(&user_id).await?
        }
        Command::GetUserRooms { user_id, .. } => chatkit.get_user_rooms(&user_id).await?,
        Command::CreateRoom {
            creator_id,
            name,
            private,
            members,
        } => {
            let room = CreateRoomDto {
                name,
                private: private.then_some(true),
                user_ids: (!members.is_empty()).then_some(members),
                custom_data: None,
            };
            chatkit.create_room(&creator_id, &room).await?
        }
        Command::DecodeToken { token } => {
            let claims = verify_token(&token, chatkit.config())?;
            return Ok(json!({
                "iss": claims.iss,
                "instance": claims.instance,
                "sub": claims.sub,
                "su": claims.su,
                "iat": claims.iat,
                "exp": claims.exp,
            }));
        }
    };

    Ok(response.to_json())
}
