//! Text and attribute escaping for XAML output.

use std::borrow::Cow;

const PREDEFINED_REFERENCES: [&str; 5] = ["amp;", "lt;", "apos;", "gt;", "quot;"];

/// Escape character data for use in XAML text or attribute values.
///
/// A `&` that already starts a predefined or numeric reference is kept as is so
/// references produced by entity preprocessing are not double-encoded. Every other
/// `&` becomes `&amp;`; `<`, `>`, `"` and `'` become their named references.
#[must_use]
pub fn escape_text(text: &str) -> Cow<'_, str> {
    if !text.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(text);
    }

    let mut escaped = String::with_capacity(text.len() + text.len() / 8 + 8);
    for (idx, ch) in text.char_indices() {
        match ch {
            '&' if starts_with_reference(&text[idx + 1..]) => escaped.push('&'),
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(ch),
        }
    }
    Cow::Owned(escaped)
}

/// Escape a URL for an attribute value, dropping its query string.
///
/// A `?` at the very start is not treated as a query separator.
#[must_use]
pub fn escape_url(url: &str) -> Cow<'_, str> {
    let without_query = match url.find('?') {
        Some(pos) if pos > 0 => &url[..pos],
        _ => url,
    };
    escape_text(without_query)
}

/// Check whether the text after an `&` completes a reference the XAML parser accepts.
fn starts_with_reference(after_ampersand: &str) -> bool {
    if PREDEFINED_REFERENCES
        .iter()
        .any(|name| after_ampersand.starts_with(name))
    {
        return true;
    }

    let Some(numeric) = after_ampersand.strip_prefix('#') else {
        return false;
    };
    let (digits, radix, max_len) = match numeric.strip_prefix(['x', 'X']) {
        Some(hex) => (hex, 16, 6),
        None => (numeric, 10, 7),
    };
    let Some(end) = digits.find(';') else {
        return false;
    };
    let value = &digits[..end];
    (1..=max_len).contains(&value.len()) && value.chars().all(|c| c.is_digit(radix))
}
