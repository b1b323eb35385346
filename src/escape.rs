//! Context-aware escaping for HTML and inline-script interpolation.
//!
//! Every value interpolated into generated markup passes through one of
//! these functions, chosen by embedding context: element text, a
//! double-quoted attribute, a quoted string literal inside an inline
//! script, or the JSON argument object embedded in a `<script>` block.

use std::sync::LazyLock;

use regex::{Captures, Regex};

static ENTITY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("(?i)&(amp|gt|lt|quot);").expect("entity pattern is valid"));

/// Escape a value for use as element text.
///
/// Covers exactly the entity set the widget's `data` callback decodes
/// (`&` `<` `>` `"`), so a rendered value survives an edit round trip
/// unchanged. See [`unescape_entities`].
pub fn html_text(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Escape a value for a double-quoted HTML attribute.
///
/// Same set as [`html_text`] plus `'`, so the value is safe in either
/// attribute quoting style.
pub fn html_attr(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Escape a value for a quoted string literal inside an inline script.
///
/// Quotes and backslashes are backslash-escaped. `<`, `>`, `&` and the
/// JS line separators become `\u` escapes, so the literal can never
/// terminate the surrounding `<script>` element.
pub fn js_string(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\'' => out.push_str("\\'"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '<' => out.push_str("\\u003C"),
            '>' => out.push_str("\\u003E"),
            '&' => out.push_str("\\u0026"),
            '\u{2028}' => out.push_str("\\u2028"),
            '\u{2029}' => out.push_str("\\u2029"),
            _ => out.push(ch),
        }
    }
    out
}

/// Harden serialized JSON for embedding in a `<script>` block.
///
/// `<`, `>` and `&` can only occur inside JSON string values, so a global
/// replacement never touches JSON syntax.
pub fn json_for_script(json: &str) -> String {
    json.replace('<', "\\u003C")
        .replace('>', "\\u003E")
        .replace('&', "\\u0026")
}

/// Decode the fixed entity set handled by the activation script's `data`
/// callback: `&amp;` `&gt;` `&lt;` `&quot;`, case-insensitively, in a
/// single pass. All other substrings are left unchanged.
///
/// This is the server-side mirror of the callback emitted into the
/// activation script, kept in Rust so the decode contract stays testable
/// in isolation. A single pass means each entity decodes exactly once:
/// `&amp;gt;` becomes `&gt;`, never `>`.
pub fn unescape_entities(input: &str) -> String {
    ENTITY
        .replace_all(input, |caps: &Captures<'_>| {
            match caps[1].to_ascii_lowercase().as_str() {
                "amp" => "&",
                "gt" => ">",
                "lt" => "<",
                _ => "\"",
            }
        })
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_html_text_escapes_entity_set() {
        assert_eq!(html_text(r#"a & b < c > d "e""#), "a &amp; b &lt; c &gt; d &quot;e&quot;");
    }

    #[test]
    fn test_html_text_leaves_plain_text_unchanged() {
        assert_eq!(html_text("Hello, world"), "Hello, world");
    }

    #[test]
    fn test_html_attr_escapes_single_quote() {
        assert_eq!(html_attr("it's"), "it&#x27;s");
        assert_eq!(html_attr(r#""x""#), "&quot;x&quot;");
    }

    #[test]
    fn test_js_string_escapes_quotes_and_backslash() {
        assert_eq!(js_string(r#"a"b"#), r#"a\"b"#);
        assert_eq!(js_string("a'b"), r"a\'b");
        assert_eq!(js_string(r"a\b"), r"a\\b");
    }

    #[test]
    fn test_js_string_neutralizes_script_close() {
        let escaped = js_string("</script>");
        assert!(!escaped.contains('<'));
        assert!(!escaped.contains('>'));
        assert_eq!(escaped, r"\u003C/script\u003E");
    }

    #[test]
    fn test_json_for_script_neutralizes_script_close() {
        let hardened = json_for_script(r#"{"a":"</script><b>&"}"#);
        assert!(!hardened.contains('<'));
        assert!(!hardened.contains('>'));
        assert!(!hardened.contains('&'));
        assert_eq!(hardened, r#"{"a":"\u003C/script\u003E\u003Cb\u003E\u0026"}"#);
    }

    #[test]
    fn test_unescape_maps_fixed_entity_set() {
        assert_eq!(unescape_entities("&amp;"), "&");
        assert_eq!(unescape_entities("&gt;"), ">");
        assert_eq!(unescape_entities("&lt;"), "<");
        assert_eq!(unescape_entities("&quot;"), "\"");
        assert_eq!(unescape_entities("a &amp; b &lt;c&gt;"), "a & b <c>");
    }

    #[test]
    fn test_unescape_is_case_insensitive() {
        assert_eq!(unescape_entities("&AMP;&Gt;&lT;&QUOT;"), "&><\"");
    }

    #[test]
    fn test_unescape_is_single_pass() {
        // A decoded ampersand never re-forms an entity with what follows.
        assert_eq!(unescape_entities("&amp;gt;"), "&gt;");
        assert_eq!(unescape_entities("&amp;amp;"), "&amp;");
    }

    #[test]
    fn test_unescape_leaves_other_entities_unchanged() {
        assert_eq!(unescape_entities("&copy; &nbsp; &#39;"), "&copy; &nbsp; &#39;");
    }

    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn escape_then_unescape_round_trips(value in ".*") {
                prop_assert_eq!(unescape_entities(&html_text(&value)), value);
            }

            #[test]
            fn html_text_output_has_no_raw_specials(value in ".*") {
                let escaped = html_text(&value);
                prop_assert!(!escaped.contains('<'));
                prop_assert!(!escaped.contains('>'));
                prop_assert!(!escaped.contains('"'));
            }

            #[test]
            fn html_attr_output_has_no_raw_quotes(value in ".*") {
                let escaped = html_attr(&value);
                prop_assert!(!escaped.contains('"'));
                prop_assert!(!escaped.contains('\''));
            }

            #[test]
            fn js_string_output_stays_inside_literal(value in ".*") {
                let escaped = js_string(&value);
                prop_assert!(!escaped.contains('<'));
                prop_assert!(!escaped.contains('>'));
                prop_assert!(!escaped.contains('&'));
                prop_assert!(!escaped.contains('\n'));
                prop_assert!(!escaped.contains('\r'));
            }

            #[test]
            fn json_for_script_only_rewrites_angle_and_amp(value in "[^<>&]*") {
                prop_assert_eq!(json_for_script(&value), value);
            }
        }
    }
}
