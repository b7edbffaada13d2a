//! Facade operations, grouped by resource.
//!
//! Each module adds methods to [`ChatKit`](crate::ChatKit):
//!
//! - [`auth`]: `authenticate` (local, no network call)
//! - [`users`]: user lookup and management
//! - [`rooms`]: room creation

pub mod auth;
pub mod rooms;
pub mod users;
