//! Typewriter text rotation.
//!
//! Reveals the current phrase one character per tick, holds it, deletes it
//! one character per (faster) tick, pauses on the empty string and moves on
//! to the next phrase, wrapping around forever.

use std::time::Duration;

/// Course taglines shown by default.
pub const DEFAULT_PHRASES: [&str; 4] = [
    "从零开始构建你的第一个神经网络",
    "掌握GPT、Stable Diffusion等前沿AI技术",
    "与顶尖AI专家一起探索人工智能的奥秘",
    "通过实战项目打造专业的AI作品集",
];

/// Delays between typewriter ticks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypewriterTiming {
    /// Delay before the very first tick.
    pub start_delay: Duration,
    /// Delay after revealing a character.
    pub type_delay: Duration,
    /// Delay after removing a character.
    pub delete_delay: Duration,
    /// Pause once a phrase is fully shown.
    pub hold: Duration,
    /// Pause on the empty string before the next phrase.
    pub next_phrase_pause: Duration,
}

impl Default for TypewriterTiming {
    fn default() -> Self {
        Self {
            start_delay: Duration::from_millis(1000),
            type_delay: Duration::from_millis(100),
            delete_delay: Duration::from_millis(50),
            hold: Duration::from_millis(2000),
            next_phrase_pause: Duration::from_millis(500),
        }
    }
}

/// Self-rescheduling typewriter over a fixed phrase list.
#[derive(Debug, Clone)]
pub struct Typewriter {
    phrases: Vec<String>,
    phrase_index: usize,
    // Visible prefix length, in chars.
    char_index: usize,
    deleting: bool,
    text: String,
    timing: TypewriterTiming,
    next_due: Duration,
}

impl Typewriter {
    pub fn new<I, S>(phrases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::with_timing(phrases, TypewriterTiming::default())
    }

    pub fn with_timing<I, S>(phrases: I, timing: TypewriterTiming) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            phrases: phrases.into_iter().map(Into::into).collect(),
            phrase_index: 0,
            char_index: 0,
            deleting: false,
            text: String::new(),
            timing,
            next_due: timing.start_delay,
        }
    }

    /// Currently visible text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Index of the phrase being typed or deleted.
    pub fn phrase_index(&self) -> usize {
        self.phrase_index
    }

    pub fn is_deleting(&self) -> bool {
        self.deleting
    }

    /// Perform one step and return the delay until the next one.
    pub fn tick(&mut self) -> Duration {
        let Some(phrase) = self.phrases.get(self.phrase_index) else {
            return self.timing.type_delay;
        };
        let len = phrase.chars().count();

        if self.deleting {
            self.char_index = self.char_index.saturating_sub(1);
        } else {
            self.char_index = (self.char_index + 1).min(len);
        }
        self.text = phrase.chars().take(self.char_index).collect();

        if !self.deleting && self.char_index == len {
            self.deleting = true;
            self.timing.hold
        } else if self.deleting && self.char_index == 0 {
            self.deleting = false;
            self.phrase_index = (self.phrase_index + 1) % self.phrases.len();
            self.timing.next_phrase_pause
        } else if self.deleting {
            self.timing.delete_delay
        } else {
            self.timing.type_delay
        }
    }

    /// Run every tick due by `now` (time since start). Returns `true` if the
    /// visible text may have changed.
    pub fn update(&mut self, now: Duration) -> bool {
        let mut ticked = false;
        while now >= self.next_due {
            // A zero delay would never let `next_due` pass `now`.
            let delay = self.tick().max(Duration::from_millis(1));
            self.next_due += delay;
            ticked = true;
        }
        ticked
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_types_holds_deletes_and_advances() {
        let mut tw = Typewriter::new(["ab", "xyz"]);
        assert_eq!(tw.tick(), Duration::from_millis(100));
        assert_eq!(tw.text(), "a");
        assert_eq!(tw.tick(), Duration::from_millis(2000));
        assert_eq!(tw.text(), "ab");
        assert!(tw.is_deleting());

        assert_eq!(tw.tick(), Duration::from_millis(50));
        assert_eq!(tw.text(), "a");
        assert_eq!(tw.tick(), Duration::from_millis(500));
        assert_eq!(tw.text(), "");
        assert_eq!(tw.phrase_index(), 1);

        tw.tick();
        assert_eq!(tw.text(), "x");
    }

    #[test]
    fn test_wraps_to_first_phrase() {
        let mut tw = Typewriter::new(["a"]);
        tw.tick(); // "a", hold
        tw.tick(); // "", next
        assert_eq!(tw.phrase_index(), 0);
        tw.tick();
        assert_eq!(tw.text(), "a");
    }

    #[test]
    fn test_multibyte_phrases_split_on_chars() {
        let mut tw = Typewriter::new([DEFAULT_PHRASES[0]]);
        tw.tick();
        tw.tick();
        assert_eq!(tw.text(), "从零");
    }

    #[test]
    fn test_update_respects_start_delay() {
        let mut tw = Typewriter::new(["hello"]);
        assert!(!tw.update(Duration::from_millis(999)));
        assert_eq!(tw.text(), "");
        assert!(tw.update(Duration::from_millis(1000)));
        assert_eq!(tw.text(), "h");
        // 1000 + 100 + 100 = 1200: two more characters
        tw.update(Duration::from_millis(1200));
        assert_eq!(tw.text(), "hel");
    }

    #[test]
    fn test_empty_list_is_inert() {
        let mut tw = Typewriter::new(Vec::<String>::new());
        assert_eq!(tw.tick(), Duration::from_millis(100));
        assert_eq!(tw.text(), "");
        tw.update(Duration::from_secs(10));
        assert_eq!(tw.text(), "");
    }

    #[test]
    fn test_empty_phrase_is_skipped() {
        let mut tw = Typewriter::new(["", "b"]);
        tw.tick(); // empty phrase fully shown
        tw.tick(); // deleting from empty, moves on
        assert_eq!(tw.phrase_index(), 1);
        tw.tick();
        assert_eq!(tw.text(), "b");
    }
}
