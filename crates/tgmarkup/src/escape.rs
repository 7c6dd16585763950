//! Per-mode escaping.
//!
//! Three content classes are escaped differently:
//!
//! - **Text**: prose leaves. HTML escapes `&`, `<`, `>`; legacy Markdown
//!   backslash-escapes `_`, `*`, `` ` `` and `[`; MarkdownV2 backslash-escapes every
//!   character its grammar may treat as markup, plus the backslash itself.
//! - **URL**: link targets. They sit inside `(...)` in the lightweight
//!   dialects and inside an attribute value in HTML.
//! - **Code**: inline code and code blocks in the lightweight dialects,
//!   where only the backslash and the backtick delimiter are significant.
//!
//! Every function is a single linear scan, so an escape sequence produced
//! for one character is never re-escaped by another substitution.
//!
//! See <https://core.telegram.org/bots/api#formatting-options>.

use crate::mode::ParseMode;

/// Characters legacy Markdown treats as markup in text.
const MARKDOWN_SPECIAL: &[char] = &['_', '*', '`', '['];

/// Characters MarkdownV2 treats as markup in text.
const MARKDOWN_V2_SPECIAL: &[char] = &[
    '\\', '_', '*', '[', ']', '(', ')', '~', '`', '>', '#', '+', '-', '=', '|', '{', '}', '.',
    '!',
];

/// Escape a text leaf for the given mode.
///
/// # Examples
///
/// ```
/// use tgmarkup::{ParseMode, escape_text};
///
/// assert_eq!(escape_text(ParseMode::Html, "a < b"), "a &lt; b");
/// assert_eq!(escape_text(ParseMode::MarkdownV2, "1.5"), "1\\.5");
/// assert_eq!(escape_text(ParseMode::Plain, "*raw*"), "*raw*");
/// ```
pub fn escape_text(mode: ParseMode, text: &str) -> String {
    match mode {
        ParseMode::Html => escape_html(text),
        ParseMode::Markdown => backslash_escape(text, MARKDOWN_SPECIAL),
        ParseMode::MarkdownV2 => backslash_escape(text, MARKDOWN_V2_SPECIAL),
        ParseMode::Plain => text.to_owned(),
    }
}

/// Escape text for a hand-assembled payload.
///
/// Same rules as [`escape_text`]; the input must not contain intended
/// formatting, since that would be escaped too.
pub fn escape(mode: ParseMode, text: &str) -> String {
    escape_text(mode, text)
}

/// Escape a link target for the given mode.
pub fn escape_url(mode: ParseMode, url: &str) -> String {
    match mode {
        ParseMode::Html => escape_html_attr(url),
        ParseMode::Markdown => backslash_escape(url, &['\\', ')']),
        ParseMode::MarkdownV2 => backslash_escape(url, &['\\', ')', '(']),
        ParseMode::Plain => url.to_owned(),
    }
}

/// Escape code content for the lightweight dialects: only `\` and `` ` ``.
pub fn escape_code(code: &str) -> String {
    backslash_escape(code, &['\\', '`'])
}

/// Escape the three characters HTML reserves in element bodies.
pub fn escape_html(text: &str) -> String {
    let mut result = String::with_capacity(text.len() + text.len() / 10);
    for c in text.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            _ => result.push(c),
        }
    }
    result
}

/// Escape an HTML attribute value (double-quoted).
pub fn escape_html_attr(value: &str) -> String {
    let mut result = String::with_capacity(value.len() + value.len() / 10);
    for c in value.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            _ => result.push(c),
        }
    }
    result
}

fn backslash_escape(text: &str, special: &[char]) -> String {
    let mut result = String::with_capacity(text.len() + text.len() / 10);
    for c in text.chars() {
        if special.contains(&c) {
            result.push('\\');
        }
        result.push(c);
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Inverse of the lightweight text escapes, used for round-trip checks.
    fn unescape_backslashes(text: &str) -> String {
        let mut out = String::with_capacity(text.len());
        let mut chars = text.chars();
        while let Some(c) = chars.next() {
            if c == '\\' {
                if let Some(next) = chars.next() {
                    out.push(next);
                }
            } else {
                out.push(c);
            }
        }
        out
    }

    fn unescape_html(text: &str) -> String {
        text.replace("&lt;", "<")
            .replace("&gt;", ">")
            .replace("&quot;", "\"")
            .replace("&amp;", "&")
    }

    #[test]
    fn html_escapes_three_chars() {
        assert_eq!(escape_text(ParseMode::Html, "<a & b>"), "&lt;a &amp; b&gt;");
        assert_eq!(escape_text(ParseMode::Html, "\"quoted\""), "\"quoted\"");
    }

    #[test]
    fn html_ampersand_not_double_escaped() {
        assert_eq!(escape_html("&lt;"), "&amp;lt;");
    }

    #[test]
    fn markdown_escapes_four_chars() {
        assert_eq!(
            escape_text(ParseMode::Markdown, "_a_ *b* `c` [d]"),
            "\\_a\\_ \\*b\\* \\`c\\` \\[d]"
        );
        assert_eq!(escape_text(ParseMode::Markdown, "1.5 (x) #!"), "1.5 (x) #!");
    }

    #[test]
    fn markdown_v2_escapes_all_punctuation() {
        assert_eq!(
            escape_text(ParseMode::MarkdownV2, "_*[]()~`>#+-=|{}.!"),
            "\\_\\*\\[\\]\\(\\)\\~\\`\\>\\#\\+\\-\\=\\|\\{\\}\\.\\!"
        );
        assert_eq!(escape_text(ParseMode::MarkdownV2, "a\\b"), "a\\\\b");
        assert_eq!(escape_text(ParseMode::MarkdownV2, "plain words"), "plain words");
    }

    #[test]
    fn plain_passthrough() {
        assert_eq!(escape_text(ParseMode::Plain, "<*_>"), "<*_>");
        assert_eq!(escape_url(ParseMode::Plain, "a(b)"), "a(b)");
    }

    #[test]
    fn url_escape_sets() {
        let url = "https://x.test/a_(b)\\c?d=1&e=\"2\"";
        assert_eq!(
            escape_url(ParseMode::Markdown, url),
            "https://x.test/a_(b\\)\\\\c?d=1&e=\"2\""
        );
        assert_eq!(
            escape_url(ParseMode::MarkdownV2, url),
            "https://x.test/a_\\(b\\)\\\\c?d=1&e=\"2\""
        );
        assert_eq!(
            escape_url(ParseMode::Html, url),
            "https://x.test/a_(b)\\c?d=1&amp;e=&quot;2&quot;"
        );
    }

    #[test]
    fn code_escapes_backslash_and_backtick_only() {
        assert_eq!(escape_code("a`b\\c*d_e"), "a\\`b\\\\c*d_e");
    }

    #[test]
    fn escape_alias_matches_escape_text() {
        for mode in ParseMode::ALL {
            assert_eq!(escape(mode, "a*b<c>"), escape_text(mode, "a*b<c>"));
        }
    }

    #[test]
    fn unicode_is_preserved() {
        assert_eq!(escape_text(ParseMode::MarkdownV2, "привет, мир!"), "привет, мир\\!");
        assert_eq!(escape_text(ParseMode::Html, "👍 <ok>"), "👍 &lt;ok&gt;");
    }

    #[test]
    fn round_trip_per_escape_set() {
        let samples = [
            "",
            "hello",
            "a*b_c`d[e]",
            "price: 1.50 (approx) - 2!",
            "x > y && y < z",
            "path\\to\\file",
            "{json: [1, 2]} #tag | ~strike~ = +1",
        ];
        for s in samples {
            assert_eq!(unescape_html(&escape_text(ParseMode::Html, s)), s);
            assert_eq!(unescape_backslashes(&escape_text(ParseMode::MarkdownV2, s)), s);
            if !s.contains('\\') {
                assert_eq!(unescape_backslashes(&escape_text(ParseMode::Markdown, s)), s);
            }
        }
    }
}
