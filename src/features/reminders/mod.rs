//! # Reminders Feature
//!
//! One-shot delayed message delivery.
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.4.0
//! - **Toggleable**: true

pub mod scheduler;

pub use scheduler::{parse_time_spec, ReminderScheduler, TimeSpec, TimeSpecError};
