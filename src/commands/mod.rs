//! # Command System
//!
//! Text command parsing and dispatch.
//!
//! - **Version**: 2.0.0
//! - **Since**: 0.2.0
//! - **Toggleable**: false
//!
//! ## Changelog
//! - 2.0.0: Consolidate the two historical handler sets into one router
//! - 1.0.0: Initial modular command structure

pub mod command;
pub mod context;
pub mod handler;
pub mod handlers;
pub mod registry;
pub mod router;

// Re-export handler infrastructure
pub use command::Command;
pub use context::CommandContext;
pub use handler::CommandHandler;
pub use registry::CommandRegistry;
pub use router::CommandRouter;
