//! Staggered per-character entrance animation.
//!
//! Text is split into characters; each one fades in, rises and un-rotates on
//! its own timeline, offset from the previous character by a fixed stagger.
//! Whitespace is kept in the text but not animated.

use super::easing::{Easing, Tween};
use std::time::Duration;

/// Visual state of one character.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CharPose {
    pub opacity: f32,
    /// Vertical offset in pixels (positive is down).
    pub translate_y: f32,
    /// Rotation in degrees.
    pub rotate_z: f32,
}

/// One animated character.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CharAnimation {
    pub ch: char,
    /// Char offset inside the source text.
    pub text_index: usize,
    /// When this character starts animating.
    pub start: Duration,
}

/// Animation parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextSplitter {
    /// Delay after load before the first character moves.
    pub start_delay: Duration,
    /// Offset between consecutive characters.
    pub stagger: Duration,
    /// Length of each character's animation.
    pub duration: Duration,
    pub easing: Easing,
    /// Starting vertical offset.
    pub rise: f32,
    /// Starting rotation in degrees.
    pub rotation: f32,
}

impl Default for TextSplitter {
    fn default() -> Self {
        Self {
            start_delay: Duration::from_millis(500),
            stagger: Duration::from_millis(50),
            duration: Duration::from_millis(800),
            easing: Easing::OutExpo,
            rise: 50.0,
            rotation: 10.0,
        }
    }
}

impl TextSplitter {
    /// Split `text` and schedule each non-whitespace character.
    pub fn split(&self, text: &str) -> SplitText {
        let chars = text
            .chars()
            .enumerate()
            .filter(|(_, ch)| !ch.is_whitespace())
            .enumerate()
            .map(|(order, (text_index, ch))| CharAnimation {
                ch,
                text_index,
                start: self.start_delay + self.stagger * order as u32,
            })
            .collect();
        SplitText {
            chars,
            splitter: *self,
        }
    }
}

/// Text split into scheduled characters.
#[derive(Debug, Clone, PartialEq)]
pub struct SplitText {
    chars: Vec<CharAnimation>,
    splitter: TextSplitter,
}

impl SplitText {
    pub fn chars(&self) -> &[CharAnimation] {
        &self.chars
    }

    /// Pose of the `index`-th animated character at `now`.
    pub fn pose(&self, index: usize, now: Duration) -> Option<CharPose> {
        let anim = self.chars.get(index)?;
        let s = &self.splitter;
        let tween = |from: f32, to: f32| Tween::new(from, to, anim.start, s.duration, s.easing);
        Some(CharPose {
            opacity: tween(0.0, 1.0).value(now),
            translate_y: tween(s.rise, 0.0).value(now),
            rotate_z: tween(s.rotation, 0.0).value(now),
        })
    }

    /// Poses of all animated characters at `now`.
    pub fn poses(&self, now: Duration) -> Vec<CharPose> {
        (0..self.chars.len())
            .filter_map(|i| self.pose(i, now))
            .collect()
    }

    /// Whether the last character has finished.
    pub fn is_finished(&self, now: Duration) -> bool {
        self.chars
            .last()
            .map_or(true, |last| now >= last.start + self.splitter.duration)
    }
}
