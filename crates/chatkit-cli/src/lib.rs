//! # Chatkit CLI
//!
//! Shell access to every Chatkit SDK operation. Credentials come from the
//! `CHATKIT_*` environment variables (a `.env` file is honoured).

pub mod commands;

pub use commands::{Command, execute};
