//! C# literal formatting.
//!
//! Every value taken from a definition goes through here before it is
//! interpolated, so a quote or newline in YAML can never end a string
//! literal early.

/// Escape `value` for use inside a regular C# string literal.
pub fn escape(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\0' => out.push_str("\\0"),
            '\u{07}' => out.push_str("\\a"),
            '\u{08}' => out.push_str("\\b"),
            '\u{0C}' => out.push_str("\\f"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\u{0B}' => out.push_str("\\v"),
            // U+0085 is a control character as well
            c if c.is_control() || c == '\u{2028}' || c == '\u{2029}' => {
                out.push_str(&format!("\\u{:04X}", c as u32));
            }
            c => out.push(c),
        }
    }
    out
}

/// A quoted C# string literal.
pub fn string(value: &str) -> String {
    format!("\"{}\"", escape(value))
}

/// A `new string[] { ... }` array expression.
///
/// An empty input renders as `new string[] { }`.
pub fn string_array<'a>(values: impl IntoIterator<Item = &'a str>) -> String {
    let items: Vec<String> = values.into_iter().map(string).collect();
    if items.is_empty() {
        "new string[] { }".to_string()
    } else {
        format!("new string[] {{ {} }}", items.join(", "))
    }
}

/// Flatten `value` onto a single line so it can sit in a `//` comment.
pub fn comment_text(value: &str) -> String {
    value
        .replace("\r\n", " ")
        .chars()
        .map(|c| {
            if c.is_control() || c == '\u{2028}' || c == '\u{2029}' {
                ' '
            } else {
                c
            }
        })
        .collect()
}
