//! # Chatkit Models
//!
//! Typed request bodies for the Chatkit server SDK, plus the argument checks
//! every operation runs before touching the network.
//!
//! - [`users`]: user DTOs
//! - [`rooms`]: room DTOs
//! - [`validation`]: id and DTO validation helpers

pub mod rooms;
pub mod users;
pub mod validation;

// Re-export commonly used types at crate root
pub use rooms::{CreateRoomBody, CreateRoomDto};
pub use users::{CreateUserBody, CreateUserDto, UpdateUserDto};
pub use validation::{require_id, require_ids, validate_dto};
