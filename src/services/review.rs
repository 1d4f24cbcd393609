/// Fragment each newline in a review becomes
pub const LINE_BREAK: &str = "<br /><br />";

/// Review text as page HTML
///
/// Line endings are normalised to `\n` first, then every `\n` becomes
/// [`LINE_BREAK`]. Markup already in the review is kept as-is.
pub fn review_to_html(review: &str) -> String {
    review
        .replace("\r\n", "\n")
        .replace('\r', "\n")
        .replace('\n', LINE_BREAK)
}

/// Escape text for an HTML text node or attribute
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
