//! # Chatkit
//!
//! Server-side SDK for the Chatkit hosted chat API.
//!
//! ## Overview
//!
//! The SDK signs bearer tokens for administrators and end users and relays
//! user and room management calls to the Chatkit HTTP API. Every operation
//! returns an [`ApiResponse`] envelope:
//!
//! - upstream 200, 201 and 204 become status 200 with an optional payload
//!   (one object or an ordered list of objects)
//! - any other status is passed through with the upstream `error` code and
//!   `error_description` message
//!
//! Upstream business errors are data, not `Err`. [`ChatkitError`] is reserved
//! for bad configuration, missing arguments, transport failures, and bodies
//! that cannot be interpreted.
//!
//! ## Architecture
//!
//! ```text
//! crates/
//! ├── chatkit-core/           # ChatkitError, ApiResponse, normalize
//! ├── chatkit-config/         # InstanceConfig, HttpConfig
//! ├── chatkit-auth/           # Claims, token signing and verification
//! ├── chatkit-models/         # Request DTOs and argument validation
//! ├── chatkit-observability/  # Console logging setup
//! └── chatkit-cli/            # Command-line front end
//! src/
//! ├── client.rs               # ChatKit client
//! ├── transport.rs            # Transport trait and reqwest implementation
//! └── modules/                # Operations: auth, users, rooms
//! ```
//!
//! ## Token Policy
//!
//! | Operation | Token |
//! |---|---|
//! | `authenticate` | user token (returned, not sent) |
//! | `get_users`, `get_users_by_ids`, `get_user`, `create_user`, `delete_user` | server token |
//! | `update_user`, `get_user_rooms`, `get_user_joinable_rooms` | server token scoped to the user |
//! | `create_room` | server token scoped to the creator |
//!
//! ## Example
//!
//! ```no_run
//! use chatkit::{ChatKit, CreateUserDto, InstanceConfig};
//!
//! # async fn run() -> Result<(), chatkit::ChatkitError> {
//! let config = InstanceConfig::resolve("v1:us1:my-instance", "key-id:key-secret", None)?;
//! let chatkit = ChatKit::new(config)?;
//!
//! let created = chatkit.create_user("alice", &CreateUserDto::new("Alice")).await?;
//! if !created.is_success() {
//!     eprintln!("{}: {}", created.error_code().unwrap_or_default(), created.message());
//! }
//!
//! let auth = chatkit.authenticate("alice")?;
//! println!("{}", auth.to_json());
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod modules;
pub mod transport;

pub use chatkit_auth::{AccessToken, Claims, verify_token};
pub use chatkit_config::{HttpConfig, InstanceConfig};
pub use chatkit_core::{ApiResponse, ChatkitError, JsonObject, Outcome, Payload, normalize};
pub use chatkit_models::{CreateRoomDto, CreateUserDto, UpdateUserDto};
pub use client::ChatKit;
pub use transport::{HttpTransport, Method, Transport, TransportRequest, TransportResponse};
