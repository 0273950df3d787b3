//! Display-width helpers shared by the layout engine and the renderer.
//!
//! Widths are terminal columns as reported by `unicode-width`, not bytes or
//! chars, so wide glyphs and state indicators line up with the box borders.

use std::borrow::Cow;
use unicode_width::UnicodeWidthStr;

/// Marker appended to anything cut to fit its column.
pub const ELLIPSIS: &str = "...";

/// `s` with control characters (tabs, newlines, escapes) replaced by spaces.
///
/// Terminals move the cursor on these instead of printing a glyph, so they
/// never reach a cell.
pub fn sanitize(s: &str) -> Cow<'_, str> {
    if s.chars().any(char::is_control) {
        Cow::Owned(
            s.chars()
                .map(|c| if c.is_control() { ' ' } else { c })
                .collect(),
        )
    } else {
        Cow::Borrowed(s)
    }
}

/// Columns `s` occupies once sanitized.
pub fn display_width(s: &str) -> usize {
    UnicodeWidthStr::width(sanitize(s).as_ref())
}

/// Cut `s` to at most `width` columns, ending with [`ELLIPSIS`] when it had
/// to be shortened. Control characters come back as spaces.
pub fn truncate(s: &str, width: usize) -> String {
    let s = sanitize(s);
    if display_width(&s) <= width {
        return s.into_owned();
    }

    let marker = if width >= ELLIPSIS.len() { ELLIPSIS } else { "" };
    let budget = width - marker.len();

    let mut out = String::new();
    for c in s.chars() {
        out.push(c);
        if display_width(&out) > budget {
            out.pop();
            break;
        }
    }
    out.push_str(marker);
    out
}

/// Like [`truncate`], but keeps the end of `s` and puts the marker first.
pub fn truncate_left(s: &str, width: usize) -> String {
    let s = sanitize(s);
    if display_width(&s) <= width {
        return s.into_owned();
    }

    let marker = if width >= ELLIPSIS.len() { ELLIPSIS } else { "" };
    let budget = width - marker.len();

    let tail = s
        .char_indices()
        .map(|(i, _)| &s[i..])
        .find(|tail| display_width(tail) <= budget)
        .unwrap_or("");
    format!("{marker}{tail}")
}

/// Pad or truncate `s` so its display width is exactly `width`.
pub fn fit(s: &str, width: usize) -> String {
    pad(truncate(s, width), width)
}

/// [`fit`] keeping the end of `s`.
pub fn fit_left(s: &str, width: usize) -> String {
    pad(truncate_left(s, width), width)
}

fn pad(mut out: String, width: usize) -> String {
    let used = display_width(&out);
    if used < width {
        out.push_str(&" ".repeat(width - used));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fit_pads_short_text() {
        assert_eq!(fit("web", 6), "web   ");
    }

    #[test]
    fn test_fit_truncates_with_ellipsis() {
        assert_eq!(fit("i-0123456789abcdef", 10), "i-01234...");
        assert_eq!(display_width(&fit("i-0123456789abcdef", 10)), 10);
    }

    #[test]
    fn test_exact_fit_is_untouched() {
        assert_eq!(fit("abcdef", 6), "abcdef");
    }

    #[test]
    fn test_narrow_width_drops_marker() {
        assert_eq!(truncate("abcdef", 2), "ab");
        assert_eq!(fit("abcdef", 0), "");
    }

    #[test]
    fn test_wide_glyphs_keep_exact_width() {
        // Each CJK glyph is two columns; an odd budget leaves one pad space.
        let fitted = fit("東京リージョン", 8);
        assert_eq!(display_width(&fitted), 8);
        assert!(fitted.contains(ELLIPSIS));
    }

    #[test]
    fn test_state_indicators_are_single_width() {
        assert_eq!(display_width("● running"), 9);
        assert_eq!(display_width("◐ pending"), 9);
    }

    #[test]
    fn test_control_characters_become_spaces() {
        assert_eq!(fit("a\tb", 4), "a b ");
        assert_eq!(sanitize("web\n01"), "web 01");
        assert!(matches!(sanitize("web-01"), Cow::Borrowed(_)));
    }

    #[test]
    fn test_control_characters_are_cut_to_width() {
        let id = format!("i-1{}z", "\t".repeat(21));
        let fitted = fit(&id, 21);
        assert_eq!(display_width(&fitted), 21);
        assert!(fitted.ends_with(ELLIPSIS));
        assert!(!fitted.contains('\t'));
    }

    #[test]
    fn test_truncate_left_keeps_the_end() {
        assert_eq!(truncate_left("production-web", 9), "...on-web");
        assert_eq!(truncate_left("web", 9), "web");
        assert_eq!(truncate_left("abcdef", 2), "ef");
        assert_eq!(fit_left("i-0123456789abcdef", 10), "...9abcdef");
    }

    #[test]
    fn test_truncate_left_wide_glyphs() {
        let fitted = fit_left("東京リージョン", 8);
        assert_eq!(display_width(&fitted), 8);
        assert!(fitted.starts_with(ELLIPSIS));
    }
}
