//! Smooth scrolling to in-page anchors.

use super::easing::{Easing, Tween};
use std::time::Duration;

/// A scroll target on the page.
#[derive(Debug, Clone, PartialEq)]
pub struct Anchor {
    pub id: String,
    /// Top edge in document coordinates.
    pub top: f32,
}

impl Anchor {
    pub fn new(id: impl Into<String>, top: f32) -> Self {
        Self { id: id.into(), top }
    }
}

/// Eases the scroll offset to an anchor instead of jumping there.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SmoothScroll {
    pub duration: Duration,
    pub easing: Easing,
    animation: Option<Tween>,
}

impl Default for SmoothScroll {
    fn default() -> Self {
        Self {
            duration: Duration::from_millis(400),
            easing: Easing::InOutCubic,
            animation: None,
        }
    }
}

impl SmoothScroll {
    /// Handle a click on a link to `href`.
    ///
    /// Only `#id` links are intercepted. Returns `false`, leaving the scroll
    /// untouched, when the link is not in-page or names no known anchor.
    pub fn follow(&mut self, href: &str, anchors: &[Anchor], current: f32, now: Duration) -> bool {
        let Some(id) = href.strip_prefix('#') else {
            return false;
        };
        let Some(target) = anchors.iter().find(|a| !id.is_empty() && a.id == id) else {
            return false;
        };
        self.animation = Some(Tween::new(current, target.top, now, self.duration, self.easing));
        true
    }

    /// Scroll offset to apply at `now`, or `None` when idle.
    pub fn offset(&self, now: Duration) -> Option<f32> {
        self.animation.map(|tween| tween.value(now))
    }

    /// Drop a finished animation. Returns `true` while still scrolling.
    pub fn update(&mut self, now: Duration) -> bool {
        if self.animation.is_some_and(|tween| tween.is_finished(now)) {
            self.animation = None;
        }
        self.animation.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn anchors() -> Vec<Anchor> {
        vec![Anchor::new("courses", 1200.0), Anchor::new("contact", 3000.0)]
    }

    #[test]
    fn test_follow_anchor() {
        let mut scroll = SmoothScroll::default();
        assert!(scroll.follow("#courses", &anchors(), 0.0, Duration::ZERO));

        assert_eq!(scroll.offset(Duration::ZERO), Some(0.0));
        let halfway = scroll.offset(Duration::from_millis(200)).unwrap();
        assert!((halfway - 600.0).abs() < 1e-3);
        assert_eq!(scroll.offset(Duration::from_millis(400)), Some(1200.0));

        assert!(scroll.update(Duration::from_millis(399)));
        assert!(!scroll.update(Duration::from_millis(400)));
        assert_eq!(scroll.offset(Duration::from_millis(500)), None);
    }

    #[test]
    fn test_unknown_targets_are_skipped() {
        let mut scroll = SmoothScroll::default();
        assert!(!scroll.follow("#missing", &anchors(), 0.0, Duration::ZERO));
        assert!(!scroll.follow("#", &anchors(), 0.0, Duration::ZERO));
        assert!(!scroll.follow("https://example.com/#courses", &anchors(), 0.0, Duration::ZERO));
        assert_eq!(scroll.offset(Duration::ZERO), None);
    }
}
