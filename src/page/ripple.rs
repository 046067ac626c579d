//! Click ripples.
//!
//! A ripple is a circle as large as the clicked button's longer side,
//! centered on the click, that grows to four times its size while fading out
//! and then removes itself.

use crate::canvas::Canvas;
use glam::{Vec2, Vec3};
use std::time::Duration;

const LIFETIME: Duration = Duration::from_millis(600);
const MAX_SCALE: f32 = 4.0;
const START_OPACITY: f32 = 0.3;

/// Axis-aligned rectangle in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub origin: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(origin: Vec2, size: Vec2) -> Self {
        Self { origin, size }
    }

    /// A `size x size` square centered on `center`.
    pub fn centered(center: Vec2, size: f32) -> Self {
        Self::new(center - Vec2::splat(size * 0.5), Vec2::splat(size))
    }
}

/// One expanding ripple.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ripple {
    /// Diameter before scaling.
    pub size: f32,
    /// Top-left of the unscaled ripple, relative to the button.
    pub offset: Vec2,
    /// Click point in absolute pixels.
    pub center: Vec2,
    pub spawned: Duration,
}

impl Ripple {
    pub fn spawn(button: Rect, click: Vec2, now: Duration) -> Self {
        let size = button.size.x.max(button.size.y);
        Self {
            size,
            offset: click - button.origin - Vec2::splat(size * 0.5),
            center: click,
            spawned: now,
        }
    }

    fn progress(&self, now: Duration) -> f32 {
        let age = now.saturating_sub(self.spawned);
        (age.as_secs_f32() / LIFETIME.as_secs_f32()).min(1.0)
    }

    /// Current scale factor, linear from 0 to 4.
    pub fn scale(&self, now: Duration) -> f32 {
        self.progress(now) * MAX_SCALE
    }

    /// Current opacity, linear from 0.3 to 0.
    pub fn opacity(&self, now: Duration) -> f32 {
        START_OPACITY * (1.0 - self.progress(now))
    }

    pub fn radius(&self, now: Duration) -> f32 {
        self.size * 0.5 * self.scale(now)
    }

    pub fn is_expired(&self, now: Duration) -> bool {
        now.saturating_sub(self.spawned) >= LIFETIME
    }
}

/// Live ripples, pruned as they expire.
#[derive(Debug, Clone, Default)]
pub struct RippleSet {
    ripples: Vec<Ripple>,
}

impl RippleSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn spawn(&mut self, button: Rect, click: Vec2, now: Duration) {
        self.ripples.push(Ripple::spawn(button, click, now));
    }

    pub fn prune(&mut self, now: Duration) {
        self.ripples.retain(|r| !r.is_expired(now));
    }

    pub fn len(&self) -> usize {
        self.ripples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ripples.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Ripple> {
        self.ripples.iter()
    }

    /// Paint every live ripple in `color` at its current opacity.
    pub fn paint<C: Canvas + ?Sized>(&self, canvas: &mut C, color: Vec3, now: Duration) {
        for ripple in self.ripples.iter().filter(|r| !r.is_expired(now)) {
            canvas.circle(ripple.center, ripple.radius(now), color.extend(ripple.opacity(now)));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::DrawList;

    #[test]
    fn test_spawn_geometry() {
        let button = Rect::new(Vec2::new(100.0, 50.0), Vec2::new(120.0, 40.0));
        let ripple = Ripple::spawn(button, Vec2::new(130.0, 70.0), Duration::ZERO);
        assert_eq!(ripple.size, 120.0);
        assert_eq!(ripple.offset, Vec2::new(-30.0, -40.0));
    }

    #[test]
    fn test_animation_curve() {
        let ripple = Ripple::spawn(Rect::centered(Vec2::ZERO, 10.0), Vec2::ZERO, Duration::ZERO);
        assert_eq!(ripple.scale(Duration::ZERO), 0.0);
        assert!((ripple.opacity(Duration::ZERO) - 0.3).abs() < 1e-6);
        assert!((ripple.scale(Duration::from_millis(300)) - 2.0).abs() < 1e-5);
        assert!((ripple.radius(Duration::from_millis(600)) - 20.0).abs() < 1e-5);
        assert!(!ripple.is_expired(Duration::from_millis(599)));
        assert!(ripple.is_expired(Duration::from_millis(600)));
    }

    #[test]
    fn test_set_prunes_and_paints() {
        let mut set = RippleSet::new();
        set.spawn(Rect::centered(Vec2::ZERO, 10.0), Vec2::ZERO, Duration::ZERO);
        set.spawn(Rect::centered(Vec2::ONE, 10.0), Vec2::ONE, Duration::from_millis(400));

        let mut canvas = DrawList::new();
        set.paint(&mut canvas, Vec3::ONE, Duration::from_millis(700));
        assert_eq!(canvas.circles().len(), 1);

        set.prune(Duration::from_millis(700));
        assert_eq!(set.len(), 1);
        set.prune(Duration::from_millis(1000));
        assert!(set.is_empty());
    }
}
