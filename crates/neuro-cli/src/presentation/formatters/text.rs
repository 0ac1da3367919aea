use crossterm::Command;

/// Cut `text` to at most `max_len` characters, marking the cut with `...`.
pub fn truncate(text: &str, max_len: usize) -> String {
    let char_count = text.chars().count();

    if char_count <= max_len {
        text.to_string()
    } else if max_len <= 3 {
        text.chars().take(max_len).collect()
    } else {
        let truncated: String = text.chars().take(max_len - 3).collect();
        format!("{}...", truncated)
    }
}

/// Hard cut with no marker. Used for terminal-width limits.
pub fn cut(text: &str, max_len: usize) -> String {
    text.chars().take(max_len).collect()
}

/// Escape sequence of a crossterm command, for renderers that return text.
pub fn ansi(command: impl Command) -> String {
    let mut out = String::new();
    // fmt::Write into a String does not fail
    let _ = command.write_ansi(&mut out);
    out
}

pub fn char_width(text: &str) -> usize {
    text.chars().count()
}

pub fn pad_right(text: &str, width: usize) -> String {
    let len = char_width(text);
    if len >= width {
        text.to_string()
    } else {
        format!("{}{}", text, " ".repeat(width - len))
    }
}

pub fn pad_left(text: &str, width: usize) -> String {
    let len = char_width(text);
    if len >= width {
        text.to_string()
    } else {
        format!("{}{}", " ".repeat(width - len), text)
    }
}

/// Center inside `width`; the odd space goes to the right.
pub fn pad_center(text: &str, width: usize) -> String {
    let len = char_width(text);
    if len >= width {
        return text.to_string();
    }
    let total = width - len;
    let left = total / 2;
    format!("{}{}{}", " ".repeat(left), text, " ".repeat(total - left))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 50), "short");
        assert_eq!(truncate("abcdefghij", 8), "abcde...");
        assert_eq!(truncate("abcdef", 2), "ab");
    }

    #[test]
    fn test_truncate_counts_chars_not_bytes() {
        assert_eq!(truncate("◢◣◤◥◢◣", 5), "◢◣...");
    }

    #[test]
    fn test_cut() {
        assert_eq!(cut("ID  NAME  STATUS", 10), "ID  NAME  ");
        assert_eq!(cut("ID", 10), "ID");
    }

    #[test]
    fn test_padding() {
        assert_eq!(pad_right("ab", 4), "ab  ");
        assert_eq!(pad_left("ab", 4), "  ab");
        assert_eq!(pad_center("ab", 5), " ab  ");
        assert_eq!(pad_center("abcdef", 5), "abcdef");
    }
}
