//! # Core Module
//!
//! Configuration, the handler error taxonomy, and reply shaping for the
//! assistant bot.
//!
//! - **Version**: 1.2.0
//! - **Since**: 0.1.0
//! - **Toggleable**: false
//!
//! ## Changelog
//! - 1.2.0: Add errors module with the handler-boundary taxonomy
//! - 1.1.0: Add response module with message chunking utilities
//! - 1.0.0: Initial creation with config module

pub mod config;
pub mod errors;
pub mod response;

// Re-export commonly used items
pub use config::Config;
pub use errors::{DeliveryError, HandlerError};
pub use response::{chunk_for_message, chunk_text, format_numbered, truncate_for_message, MESSAGE_LIMIT};
