//! Typing effect that reveals text one character at a time.

/// Default delay between characters.
pub const DEFAULT_SPEED_MS: u64 = 100;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Typewriter {
    text: String,
    speed_ms: u64,
    /// Number of characters shown.
    shown: usize,
    /// Time accumulated toward the next character.
    pending_ms: u64,
}

impl Typewriter {
    /// Start typing `text` with `speed_ms` between characters. The text
    /// starts empty.
    pub fn new(text: impl Into<String>, speed_ms: u64) -> Self {
        Self {
            text: text.into(),
            speed_ms: speed_ms.max(1),
            shown: 0,
            pending_ms: 0,
        }
    }

    /// Feed elapsed time, revealing one character per `speed_ms`.
    pub fn advance(&mut self, delta_ms: u64) {
        let total = self.text.chars().count();
        self.pending_ms += delta_ms;
        while self.pending_ms >= self.speed_ms && self.shown < total {
            self.pending_ms -= self.speed_ms;
            self.shown += 1;
        }
    }

    /// The portion typed so far.
    pub fn visible(&self) -> &str {
        match self.text.char_indices().nth(self.shown) {
            Some((idx, _)) => &self.text[..idx],
            None => &self.text,
        }
    }

    pub fn is_done(&self) -> bool {
        self.shown >= self.text.chars().count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_types_one_char_per_interval() {
        let mut tw = Typewriter::new("Systems engineer", 50);
        assert_eq!(tw.visible(), "");
        tw.advance(49);
        assert_eq!(tw.visible(), "");
        tw.advance(1);
        assert_eq!(tw.visible(), "S");
        tw.advance(150);
        assert_eq!(tw.visible(), "Syst");
        tw.advance(10_000);
        assert_eq!(tw.visible(), "Systems engineer");
        assert!(tw.is_done());
    }

    #[test]
    fn test_multibyte_text() {
        let mut tw = Typewriter::new("héllo", DEFAULT_SPEED_MS);
        tw.advance(200);
        assert_eq!(tw.visible(), "hé");
    }
}
