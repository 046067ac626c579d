//! Hover scale micro-interaction for cards.

use super::easing::{Easing, Tween};
use std::time::Duration;

/// Scales a card up while hovered and back down when left.
///
/// Each transition starts from wherever the previous one currently is, so
/// quick enter/leave flicks never jump.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HoverScale {
    pub rest: f32,
    pub hovered: f32,
    pub duration: Duration,
    pub easing: Easing,
    tween: Tween,
}

impl Default for HoverScale {
    fn default() -> Self {
        Self {
            rest: 1.0,
            hovered: 1.05,
            duration: Duration::from_millis(300),
            easing: Easing::OutQuad,
            tween: Tween::settled(1.0),
        }
    }
}

impl HoverScale {
    pub fn enter(&mut self, now: Duration) {
        self.retarget(self.hovered, now);
    }

    pub fn leave(&mut self, now: Duration) {
        self.retarget(self.rest, now);
    }

    pub fn scale(&self, now: Duration) -> f32 {
        self.tween.value(now)
    }

    fn retarget(&mut self, to: f32, now: Duration) {
        let from = self.scale(now);
        self.tween = Tween::new(from, to, now, self.duration, self.easing);
    }
}
