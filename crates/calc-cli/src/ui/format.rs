//! String formatting utilities for UI rendering.

/// Truncate a string to max length, adding ellipsis if needed.
pub fn truncate(s: &str, max_len: usize) -> String {
    let char_count = s.chars().count();
    if char_count <= max_len {
        return s.to_string();
    }
    if max_len <= 3 {
        return s.chars().take(max_len).collect();
    }
    let truncated: String = s.chars().take(max_len - 3).collect();
    format!("{}...", truncated)
}

/// Keep the last `max_len` characters, marking the cut with a leading ellipsis.
///
/// Expressions grow on the right, so the tail is the part worth showing.
pub fn truncate_left(s: &str, max_len: usize) -> String {
    let char_count = s.chars().count();
    if char_count <= max_len {
        return s.to_string();
    }
    if max_len <= 3 {
        return s.chars().skip(char_count - max_len).collect();
    }
    let tail: String = s.chars().skip(char_count - (max_len - 3)).collect();
    format!("...{}", tail)
}

/// Pad a string to a fixed width (right-aligned).
pub fn pad_left(s: &str, width: usize) -> String {
    let char_count = s.chars().count();
    if char_count >= width {
        s.to_string()
    } else {
        format!("{}{}", " ".repeat(width - char_count), s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("hello", 10), "hello");
        assert_eq!(truncate("hello world", 8), "hello...");
        assert_eq!(truncate("hi", 2), "hi");
        assert_eq!(truncate("hello", 3), "hel");
    }

    #[test]
    fn test_truncate_left_keeps_tail() {
        assert_eq!(truncate_left("1+2", 10), "1+2");
        assert_eq!(truncate_left("123456789", 6), "...789");
        assert_eq!(truncate_left("12345", 2), "45");
    }

    #[test]
    fn test_pad_left_counts_chars() {
        assert_eq!(pad_left("42", 5), "   42");
        assert_eq!(pad_left("6×7", 4), " 6×7");
        assert_eq!(pad_left("toolong", 3), "toolong");
    }
}
