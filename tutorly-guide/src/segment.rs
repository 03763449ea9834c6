//! Structural segmentation of raw editor text.
//!
//! Topics are entered one per line; notes are free text where paragraphs are
//! separated by blank lines. Both splitters are total: empty or
//! whitespace-only input yields an empty vector.

/// Split `raw` into trimmed, non-empty lines.
pub fn split_lines(raw: &str) -> Vec<String> {
    raw.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Split `raw` into trimmed, non-empty paragraphs.
///
/// Any maximal run of whitespace-only lines ends the current paragraph, so
/// `"A\n\n\n\nB"` yields exactly `["A", "B"]`. Lines within a paragraph are
/// rejoined with `\n`.
pub fn split_paragraphs(raw: &str) -> Vec<String> {
    let mut paragraphs = Vec::new();
    let mut current: Vec<&str> = Vec::new();

    for line in raw.lines() {
        if line.trim().is_empty() {
            flush_paragraph(&mut current, &mut paragraphs);
        } else {
            current.push(line);
        }
    }
    flush_paragraph(&mut current, &mut paragraphs);

    paragraphs
}

fn flush_paragraph(current: &mut Vec<&str>, paragraphs: &mut Vec<String>) {
    if current.is_empty() {
        return;
    }
    let joined = current.join("\n");
    current.clear();

    let trimmed = joined.trim();
    if !trimmed.is_empty() {
        paragraphs.push(trimmed.to_string());
    }
}

/// Whether `raw` contains anything other than whitespace.
pub fn has_content(raw: &str) -> bool {
    !raw.trim().is_empty()
}
