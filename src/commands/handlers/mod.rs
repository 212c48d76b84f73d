//! Per-command handler implementations
//!
//! - **Version**: 1.2.0
//! - **Since**: 0.2.0
//!
//! ## Changelog
//! - 1.2.0: Add NewsHandler (news, setfeed)
//! - 1.1.0: Add TasksHandler and RemindHandler
//! - 1.0.0: Initial extraction into one handler per command family

pub mod news;
pub mod notes;
pub mod remind;
pub mod tasks;
pub mod utility;
pub mod weather;

use std::sync::Arc;

use super::handler::CommandHandler;

/// Create all registered command handlers
///
/// Returns a vector of handlers ready to be registered with CommandRegistry.
pub fn create_all_handlers() -> Vec<Arc<dyn CommandHandler>> {
    vec![
        Arc::new(utility::UtilityHandler),
        Arc::new(notes::NotesHandler),
        Arc::new(tasks::TasksHandler),
        Arc::new(remind::RemindHandler),
        Arc::new(weather::WeatherHandler),
        Arc::new(news::NewsHandler),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_no_duplicate_command_names() {
        let mut seen = HashSet::new();
        for handler in create_all_handlers() {
            for name in handler.command_names() {
                assert!(seen.insert(*name), "duplicate command name: {name}");
            }
        }
    }

    #[test]
    fn test_full_command_set_registered() {
        let names: HashSet<&str> = create_all_handlers()
            .iter()
            .flat_map(|h| h.command_names().iter().copied())
            .collect();

        for expected in [
            "start", "help", "time", "note", "notes", "clear_notes", "task", "tasks",
            "clear_tasks", "remind", "weather", "news", "setfeed",
        ] {
            assert!(names.contains(expected), "missing command: {expected}");
        }
    }
}
