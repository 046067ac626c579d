//! Frame clock for the host loop.
//!
//! The field itself is frame-coupled and never reads the clock. `Time` only
//! serves the host: page timers (typewriter, quotes, ripples) run on its
//! elapsed time, and it counts frames for FPS reporting.
//!
//! # Example
//!
//! ```ignore
//! let mut time = Time::new();
//!
//! // In your frame loop:
//! if time.update() {
//!     log::debug!("{:.1} fps", time.fps());
//! }
//! ```

use std::time::{Duration, Instant};

/// Time tracking for the render loop.
#[derive(Debug)]
pub struct Time {
    /// When the timer was created.
    start: Instant,
    /// When the last frame occurred.
    last_frame: Instant,
    /// Time since last frame.
    delta: Duration,
    /// Total frames since start (paused frames excluded).
    frame_count: u64,
    /// Calculated FPS (updated periodically).
    fps: f32,
    /// Frame count at last FPS update.
    fps_frame_count: u64,
    /// Time of last FPS calculation.
    fps_update_time: Instant,
    /// How often to update FPS calculation.
    fps_update_interval: Duration,
    /// When the current pause began, if paused.
    paused_at: Option<Instant>,
    /// Total time spent paused.
    pause_elapsed: Duration,
}

impl Time {
    /// Create a new time tracker starting from now.
    pub fn new() -> Self {
        Self::starting_at(Instant::now())
    }

    fn starting_at(now: Instant) -> Self {
        Self {
            start: now,
            last_frame: now,
            delta: Duration::ZERO,
            frame_count: 0,
            fps: 0.0,
            fps_frame_count: 0,
            fps_update_time: now,
            fps_update_interval: Duration::from_secs(1),
            paused_at: None,
            pause_elapsed: Duration::ZERO,
        }
    }

    /// Record a frame. Returns `true` when the FPS figure was refreshed.
    pub fn update(&mut self) -> bool {
        self.update_at(Instant::now())
    }

    fn update_at(&mut self, now: Instant) -> bool {
        if self.paused_at.is_some() {
            self.delta = Duration::ZERO;
            return false;
        }

        self.delta = now.saturating_duration_since(self.last_frame);
        self.last_frame = now;
        self.frame_count += 1;

        let fps_elapsed = now.saturating_duration_since(self.fps_update_time);
        if fps_elapsed >= self.fps_update_interval {
            let frames_since = self.frame_count - self.fps_frame_count;
            self.fps = frames_since as f32 / fps_elapsed.as_secs_f32();
            self.fps_frame_count = self.frame_count;
            self.fps_update_time = now;
            return true;
        }
        false
    }

    /// Time since start, excluding paused spans, as of the last update.
    pub fn elapsed(&self) -> Duration {
        self.last_frame
            .saturating_duration_since(self.start)
            .saturating_sub(self.pause_elapsed)
    }

    /// Time since last frame.
    #[inline]
    pub fn delta(&self) -> Duration {
        self.delta
    }

    /// Total frames recorded.
    #[inline]
    pub fn frame(&self) -> u64 {
        self.frame_count
    }

    /// Calculated frames per second.
    #[inline]
    pub fn fps(&self) -> f32 {
        self.fps
    }

    /// Whether time is currently paused.
    #[inline]
    pub fn is_paused(&self) -> bool {
        self.paused_at.is_some()
    }

    /// Toggle pause state.
    pub fn toggle_pause(&mut self) {
        self.toggle_pause_at(Instant::now());
    }

    fn toggle_pause_at(&mut self, now: Instant) {
        match self.paused_at.take() {
            Some(since) => {
                self.pause_elapsed += now.saturating_duration_since(since);
                self.last_frame = now;
                self.fps_update_time = now;
                self.fps_frame_count = self.frame_count;
            }
            None => self.paused_at = Some(now),
        }
    }
}

impl Default for Time {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_new() {
        let time = Time::new();
        assert_eq!(time.frame(), 0);
        assert!(!time.is_paused());
        assert_eq!(time.elapsed(), Duration::ZERO);
    }

    #[test]
    fn test_time_update() {
        let t0 = Instant::now();
        let mut time = Time::starting_at(t0);
        time.update_at(t0 + Duration::from_millis(16));

        assert_eq!(time.delta(), Duration::from_millis(16));
        assert_eq!(time.elapsed(), Duration::from_millis(16));
        assert_eq!(time.frame(), 1);
    }

    #[test]
    fn test_fps_refresh() {
        let t0 = Instant::now();
        let mut time = Time::starting_at(t0);
        let mut refreshed = false;
        for i in 1..=60 {
            refreshed = time.update_at(t0 + Duration::from_micros(16_667 * i));
        }
        assert!(refreshed);
        assert!((time.fps() - 60.0).abs() < 0.5);
    }

    #[test]
    fn test_time_pause() {
        let t0 = Instant::now();
        let mut time = Time::starting_at(t0);
        time.update_at(t0 + Duration::from_millis(10));

        time.toggle_pause_at(t0 + Duration::from_millis(10));
        assert!(time.is_paused());
        assert!(!time.update_at(t0 + Duration::from_millis(500)));
        assert_eq!(time.delta(), Duration::ZERO);
        assert_eq!(time.frame(), 1);

        // The paused span does not count towards elapsed time
        time.toggle_pause_at(t0 + Duration::from_millis(1010));
        time.update_at(t0 + Duration::from_millis(1020));
        assert_eq!(time.elapsed(), Duration::from_millis(20));
    }
}
