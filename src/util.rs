// src/util.rs — Shared utility functions

/// Single-line preview of generated source for log messages.
///
/// Newlines are shown as `⏎` and the text is cut after at most `max_len`
/// bytes, on a UTF-8 character boundary, with `…` appended when cut.
pub fn preview(s: &str, max_len: usize) -> String {
    let cut = if s.len() <= max_len {
        s
    } else {
        let mut end = max_len;
        while end > 0 && !s.is_char_boundary(end) {
            end -= 1;
        }
        &s[..end]
    };
    let mut out = cut.replace('\n', "⏎");
    if cut.len() < s.len() {
        out.push('…');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preview_short() {
        assert_eq!(preview("hello", 10), "hello");
    }

    #[test]
    fn test_preview_cut() {
        assert_eq!(preview("hello world", 5), "hello…");
    }

    #[test]
    fn test_preview_multibyte() {
        // "café" is 5 bytes (é = 2 bytes), cutting at 4 must not split é
        assert_eq!(preview("café", 4), "caf…");
    }

    #[test]
    fn test_preview_newlines() {
        assert_eq!(preview("a\nb", 10), "a⏎b");
    }

    #[test]
    fn test_preview_zero_max() {
        assert_eq!(preview("hello", 0), "…");
        assert_eq!(preview("", 0), "");
    }
}
