//! UI helper functions

/// Wrap text into lines no wider than `max_width`, breaking on spaces
pub fn wrap_text(text: &str, max_width: usize) -> Vec<String> {
    if max_width == 0 {
        return vec![text.to_string()];
    }

    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        if current.is_empty() {
            current = word.to_string();
        } else if current.chars().count() + 1 + word.chars().count() <= max_width {
            current.push(' ');
            current.push_str(word);
        } else {
            lines.push(std::mem::take(&mut current));
            current = word.to_string();
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }

    if lines.is_empty() {
        lines.push(String::new());
    }

    lines
}

/// Truncate a label to `max_width` characters, appending "..." when cut.
/// Operates on char boundaries so multi-byte labels never panic.
pub fn truncate_label(label: &str, max_width: usize) -> String {
    let char_count = label.chars().count();
    if char_count <= max_width {
        return label.to_string();
    }
    let take = max_width.saturating_sub(3);
    let truncated: String = label.chars().take(take).collect();
    format!("{}...", truncated)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_text_empty() {
        assert_eq!(wrap_text("", 10), vec![""]);
    }

    #[test]
    fn test_wrap_text_zero_width() {
        assert_eq!(wrap_text("hello world", 0), vec!["hello world"]);
    }

    #[test]
    fn test_wrap_text_fits() {
        assert_eq!(wrap_text("hello world", 20), vec!["hello world"]);
    }

    #[test]
    fn test_wrap_text_multiple_lines() {
        assert_eq!(
            wrap_text("rate each skill honestly please", 12),
            vec!["rate each", "skill", "honestly", "please"]
        );
    }

    #[test]
    fn test_truncate_label_short() {
        assert_eq!(truncate_label("Git", 10), "Git");
    }

    #[test]
    fn test_truncate_label_cut() {
        assert_eq!(truncate_label("Pair Programming", 10), "Pair Pr...");
    }

    #[test]
    fn test_truncate_label_multibyte() {
        // Must not panic on non-ASCII boundaries
        assert_eq!(truncate_label("Résumé Review", 9), "Résumé...");
    }
}
