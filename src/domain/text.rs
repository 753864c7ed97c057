use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const ELLIPSIS: char = '…';

/// Shorten `s` to at most `width` terminal columns, ending with an ellipsis
/// when anything was cut.
pub fn truncate_to_width(s: &str, width: usize) -> String {
    if s.width() <= width {
        return s.to_string();
    }
    if width == 0 {
        return String::new();
    }

    let mut result = String::with_capacity(s.len());
    let mut used = 0;
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if used + w + 1 > width {
            break;
        }
        result.push(c);
        used += w;
    }
    result.push(ELLIPSIS);
    result
}

/// Append `c` to a single-line input buffer, ignoring control characters.
pub fn push_input(buffer: &str, c: char) -> String {
    let mut next = buffer.to_string();
    if !c.is_control() {
        next.push(c);
    }
    next
}

/// Drop the last character of an input buffer.
pub fn pop_input(buffer: &str) -> String {
    let mut next = buffer.to_string();
    next.pop();
    next
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_truncate_no_cut() {
        assert_eq!(truncate_to_width("hello", 5), "hello");
        assert_eq!(truncate_to_width("", 0), "");
    }

    #[test]
    fn test_truncate_alnum() {
        assert_eq!(truncate_to_width("hello, world!", 6), "hello…");
        assert_eq!(truncate_to_width("hello", 1), "…");
        assert_eq!(truncate_to_width("hello", 0), "");
    }

    #[test]
    fn test_truncate_double_width() {
        // Each kana is two columns wide
        assert_eq!(truncate_to_width("こんにちは", 6), "こん…");
    }

    #[test]
    fn test_input_editing() {
        assert_eq!(push_input("ab", 'c'), "abc");
        assert_eq!(push_input("ab", '\n'), "ab");
        assert_eq!(pop_input("abc"), "ab");
        assert_eq!(pop_input(""), "");
    }
}
