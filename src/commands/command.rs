//! Inbound text parsing
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.2.0

/// A parsed user input: a command name token plus space-delimited arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    pub name: String,
    pub args: Vec<String>,
}

impl Command {
    /// Parse `text` into a command; None for non-command text.
    ///
    /// Command names are case-sensitive. The leading `/` is stripped and a
    /// `@botname` suffix on the command token is dropped (group-chat
    /// convention).
    pub fn parse(text: &str) -> Option<Command> {
        let rest = text.trim().strip_prefix('/')?;

        let mut parts = rest.split_whitespace();
        let token = parts.next()?;
        let name = match token.split_once('@') {
            Some((name, _bot)) => name,
            None => token,
        };
        if name.is_empty() {
            return None;
        }

        Some(Command {
            name: name.to_string(),
            args: parts.map(str::to_string).collect(),
        })
    }

    /// Join the arguments from index `start` onward back into free text.
    pub fn rest(&self, start: usize) -> String {
        self.args
            .get(start..)
            .map(|args| args.join(" "))
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_command_with_args() {
        let cmd = Command::parse("/note buy bread").unwrap();
        assert_eq!(cmd.name, "note");
        assert_eq!(cmd.args, vec!["buy", "bread"]);
    }

    #[test]
    fn test_parse_bare_command() {
        let cmd = Command::parse("/notes").unwrap();
        assert_eq!(cmd.name, "notes");
        assert!(cmd.args.is_empty());
    }

    #[test]
    fn test_parse_strips_bot_suffix() {
        let cmd = Command::parse("/weather@valet_bot New York").unwrap();
        assert_eq!(cmd.name, "weather");
        assert_eq!(cmd.args, vec!["New", "York"]);
    }

    #[test]
    fn test_non_command_text_is_none() {
        assert!(Command::parse("hello there").is_none());
        assert!(Command::parse("").is_none());
        assert!(Command::parse("   ").is_none());
        assert!(Command::parse("/").is_none());
    }

    #[test]
    fn test_names_are_case_sensitive() {
        let cmd = Command::parse("/Notes").unwrap();
        assert_eq!(cmd.name, "Notes");
    }

    #[test]
    fn test_rest_joins_tail() {
        let cmd = Command::parse("/task 24.12.25 18:30 buy gifts for everyone").unwrap();
        assert_eq!(cmd.rest(2), "buy gifts for everyone");
        assert_eq!(cmd.rest(0), "24.12.25 18:30 buy gifts for everyone");
        assert_eq!(cmd.rest(10), "");
    }
}
