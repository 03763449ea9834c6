//! LaTeX escaping for user-supplied text.
//!
//! Only `&`, `%` and `#` are escaped. Other reserved characters (`$`, `_`,
//! `{`, `}`, `~`, `^`, backslash) pass through untouched, so text containing
//! them may still produce invalid LaTeX.

/// Escape the LaTeX reserved characters `&`, `%` and `#`.
///
/// Each occurrence is replaced exactly once in a single left-to-right pass:
///
/// ```ignore
/// assert_eq!(escape("100% & pass"), "100\\% \\& pass");
/// ```
pub fn escape(text: &str) -> String {
    let mut result = String::with_capacity(text.len() + text.len() / 10);

    for c in text.chars() {
        match c {
            '&' | '%' | '#' => {
                result.push('\\');
                result.push(c);
            }
            _ => result.push(c),
        }
    }

    result
}
