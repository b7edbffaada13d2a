//! # Chatkit Core
//!
//! Core types shared by every Chatkit SDK crate.
//!
//! - [`errors`]: the [`ChatkitError`] enum
//! - [`response`]: the [`ApiResponse`] envelope and the [`normalize`] function
//!   that maps raw upstream replies onto it
//!
//! # Example
//!
//! ```
//! use chatkit_core::{ChatkitError, normalize};
//! use serde_json::json;
//!
//! let response = normalize(200, Some(json!([{"id": "u1"}]))).unwrap();
//! assert!(response.is_success());
//!
//! let err = ChatkitError::validation("user_id");
//! assert!(err.is_client_side());
//! ```

pub mod errors;
pub mod response;

// Re-export commonly used types at crate root
pub use errors::ChatkitError;
pub use response::{ApiResponse, JsonObject, Outcome, Payload, is_success_status, normalize};
