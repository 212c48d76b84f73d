//! Reply chunking and list formatting utilities
//!
//! - **Version**: 1.1.0
//! - **Since**: 0.3.0
//!
//! ## Changelog
//! - 1.1.0: Add format_numbered for note/task listings
//! - 1.0.0: Initial chunking implementation

/// Transport message content limit (Telegram)
pub const MESSAGE_LIMIT: usize = 4096;

/// Chunk text into pieces that fit the transport limit (UTF-8 safe, line-aware)
///
/// This function splits text respecting:
/// - UTF-8 character boundaries (never splits mid-character)
/// - Line boundaries when possible (prefers splitting at newlines)
/// - Falls back to byte-aware character splitting for very long lines
pub fn chunk_text(text: &str, max_size: usize) -> Vec<String> {
    if text.len() <= max_size {
        return vec![text.to_string()];
    }

    let mut chunks = Vec::new();
    let mut current = String::new();

    for line in text.lines() {
        let line_with_newline = format!("{line}\n");
        if current.len() + line_with_newline.len() > max_size {
            if !current.is_empty() {
                chunks.push(current.trim_end().to_string());
                current = String::new();
            }
            // Handle lines longer than max_size (byte-aware)
            if line_with_newline.len() > max_size {
                chunks.extend(chunk_long_line(line, max_size));
            } else {
                current = line_with_newline;
            }
        } else {
            current.push_str(&line_with_newline);
        }
    }
    if !current.is_empty() {
        chunks.push(current.trim_end().to_string());
    }
    chunks
}

/// Split a single long line into chunks respecting UTF-8 boundaries
fn chunk_long_line(line: &str, max_size: usize) -> Vec<String> {
    let mut result = Vec::new();
    let mut current = String::new();

    for ch in line.chars() {
        let ch_len = ch.len_utf8();
        if current.len() + ch_len > max_size && !current.is_empty() {
            result.push(current);
            current = String::new();
        }
        current.push(ch);
    }

    if !current.is_empty() {
        result.push(current);
    }

    result
}

/// Chunk text for message content (4096 character limit)
pub fn chunk_for_message(text: &str) -> Vec<String> {
    chunk_text(text, MESSAGE_LIMIT)
}

/// Truncate text to fit the message limit, adding ellipsis if needed
pub fn truncate_for_message(text: &str) -> String {
    if text.len() <= MESSAGE_LIMIT {
        text.to_string()
    } else {
        // Find a safe UTF-8 boundary
        let mut end = MESSAGE_LIMIT - 3; // Room for "..."
        while !text.is_char_boundary(end) && end > 0 {
            end -= 1;
        }
        format!("{}...", &text[..end])
    }
}

/// Format entries as a 1-indexed numbered list, one per line
///
/// Pure function of the sequence; order is preserved.
pub fn format_numbered(entries: &[String]) -> String {
    entries
        .iter()
        .enumerate()
        .map(|(i, entry)| format!("{}. {}", i + 1, entry))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_text_no_chunk() {
        let result = chunk_text("hello", 100);
        assert_eq!(result, vec!["hello"]);
    }

    #[test]
    fn test_chunk_respects_lines() {
        let text = "line1\nline2\nline3";
        let result = chunk_text(text, 12);
        assert!(result.len() >= 2);
        for chunk in &result {
            assert!(!chunk.ends_with('\n'));
        }
    }

    #[test]
    fn test_chunk_handles_long_lines() {
        let long_line = "a".repeat(100);
        let result = chunk_text(&long_line, 30);
        assert!(result.len() >= 3);
        for chunk in &result {
            assert!(chunk.len() <= 30);
        }
    }

    #[test]
    fn test_message_limit() {
        let result = chunk_for_message(&"a".repeat(5000));
        assert!(result.len() >= 2);
        assert!(result[0].len() <= MESSAGE_LIMIT);
    }

    #[test]
    fn test_truncate_for_message_long() {
        let text = "a".repeat(5000);
        let result = truncate_for_message(&text);
        assert!(result.len() <= MESSAGE_LIMIT);
        assert!(result.ends_with("..."));
    }

    #[test]
    fn test_utf8_safety() {
        let text = "Привет 世界! ".repeat(500);
        let chunks = chunk_for_message(&text);
        for chunk in chunks {
            assert!(chunk.len() <= MESSAGE_LIMIT);
            assert!(chunk.chars().count() > 0);
        }
    }

    #[test]
    fn test_format_numbered() {
        let entries = vec!["buy bread".to_string(), "call mom".to_string()];
        assert_eq!(format_numbered(&entries), "1. buy bread\n2. call mom");
    }

    #[test]
    fn test_format_numbered_empty() {
        assert_eq!(format_numbered(&[]), "");
    }

    #[test]
    fn test_format_numbered_preserves_order() {
        let entries: Vec<String> = (0..12).map(|i| format!("entry {i}")).collect();
        let formatted = format_numbered(&entries);
        let lines: Vec<&str> = formatted.lines().collect();
        assert_eq!(lines.len(), 12);
        assert_eq!(lines[0], "1. entry 0");
        assert_eq!(lines[11], "12. entry 11");
    }
}
