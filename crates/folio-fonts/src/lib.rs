//! Block letter font for the folio stats counters.

/// Height of every glyph in rows.
pub const GLYPH_HEIGHT: usize = 5;

/// Digits 0-9 (5 lines tall, 4 chars wide).
pub const DIGITS: [[&str; GLYPH_HEIGHT]; 10] = [
    // 0
    ["▄▀▀▄", "█  █", "█  █", "█  █", "▀▄▄▀"],
    // 1
    [" ▄█ ", "  █ ", "  █ ", "  █ ", " ▄█▄"],
    // 2
    ["▄▀▀▄", "   █", " ▄▀ ", "▄▀  ", "█▄▄▄"],
    // 3
    ["▄▀▀▄", "   █", " ▀▀▄", "   █", "▀▄▄▀"],
    // 4
    ["█  █", "█  █", "▀▀▀█", "   █", "   █"],
    // 5
    ["█▀▀▀", "█▄▄ ", "   █", "   █", "▀▄▄▀"],
    // 6
    ["▄▀▀ ", "█▄▄ ", "█  █", "█  █", "▀▄▄▀"],
    // 7
    ["▀▀▀█", "   █", "  █ ", " █  ", " █  "],
    // 8
    ["▄▀▀▄", "█  █", "▄▀▀▄", "█  █", "▀▄▄▀"],
    // 9
    ["▄▀▀▄", "█  █", " ▀▀█", "   █", " ▄▄▀"],
];

/// Percent sign (5 lines tall, 4 chars wide).
pub const PERCENT: [&str; GLYPH_HEIGHT] = ["█  █", "  █ ", " █  ", "█   ", "█  █"];

/// Plus sign (5 lines tall, 3 chars wide).
pub const PLUS: [&str; GLYPH_HEIGHT] = ["   ", " █ ", "███", " █ ", "   "];

/// Glyph rows for a supported character.
fn glyph(ch: char) -> Option<&'static [&'static str; GLYPH_HEIGHT]> {
    match ch {
        '0'..='9' => ch.to_digit(10).map(|d| &DIGITS[d as usize]),
        '%' => Some(&PERCENT),
        '+' => Some(&PLUS),
        _ => None,
    }
}

/// Whether every character of `text` has a glyph.
pub fn is_supported(text: &str) -> bool {
    !text.is_empty() && text.chars().all(|c| glyph(c).is_some())
}

/// Build block letter art for a counter label such as `40%` or `3+`.
///
/// Unsupported characters are skipped.
///
/// # Returns
/// A vector of [`GLYPH_HEIGHT`] strings, one per row. Empty when no
/// character of `text` is supported.
pub fn build_banner(text: &str) -> Vec<String> {
    let glyphs: Vec<_> = text.chars().filter_map(glyph).collect();
    if glyphs.is_empty() {
        return Vec::new();
    }

    (0..GLYPH_HEIGHT)
        .map(|row| {
            glyphs
                .iter()
                .map(|g| g[row])
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect()
}
