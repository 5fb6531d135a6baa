//! Character constants for terminal rendering.

/// Glyphs for particles, smallest radius first.
pub const DOT_CHARS: &[char] = &['·', '•', '●'];
