//! MarkdownV2 escaping.

/// Characters Telegram's MarkdownV2 parser treats as markup.
const RESERVED: &[char] = &[
    '\\', '_', '*', '[', ']', '(', ')', '~', '`', '>', '#', '+', '-', '=', '|', '{', '}', '.',
    '!',
];

/// Escape text so MarkdownV2 shows it literally.
///
/// Apply exactly once, to raw text, at the point it is placed into markup.
/// Escaping already-escaped text doubles the backslashes.
///
/// # Examples
///
/// ```
/// use last_train::format::escape;
///
/// assert_eq!(escape("Jurong East"), "Jurong East");
/// assert_eq!(escape("Thomson-East Coast"), "Thomson\\-East Coast");
/// ```
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        if RESERVED.contains(&c) {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

/// Similarity as a percentage rounded to two decimals, keeping at least
/// one decimal digit (`70.0`, `94.74`, `100.0`). Not escaped.
pub fn similarity_percent(score: f64) -> String {
    let fixed = format!("{:.2}", score * 100.0);
    match fixed.strip_suffix('0') {
        Some(trimmed) if !trimmed.ends_with('.') => trimmed.to_string(),
        _ => fixed,
    }
}
