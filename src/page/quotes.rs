//! Rotating quote panel.
//!
//! Every interval a random quote is chosen; the panel fades out, the text is
//! swapped after the fade time, and the panel fades back in.

use rand::Rng;
use std::time::Duration;

/// Quotes shown by default.
pub const DEFAULT_QUOTES: [&str; 8] = [
    "人工智能是新的电力，它将改变一切。 - 吴恩达",
    "机器学习是人工智能的核心，深度学习是机器学习的未来。",
    "数据是新的石油，AI是新的引擎。",
    "第一个神经网络在1957年就被提出了，叫做感知机。",
    "GPT-3拥有1750亿个参数，是目前最大的语言模型之一。",
    "你知道吗？AI可以创作音乐、绘画，甚至写诗。",
    "深度学习模仿人脑神经网络，但有自己独特的学习方式。",
    "AIGC代表着人工智能生成内容，是创意产业的未来。",
];

/// Timer-driven random quote swapper.
#[derive(Debug, Clone)]
pub struct QuoteRotator {
    quotes: Vec<String>,
    current: usize,
    interval: Duration,
    fade: Duration,
    next_swap: Duration,
    // Quote waiting for the fade-out to finish, and when the fade began.
    pending: Option<(usize, Duration)>,
}

impl QuoteRotator {
    pub fn new<I, S>(quotes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let interval = Duration::from_secs(10);
        Self {
            quotes: quotes.into_iter().map(Into::into).collect(),
            current: 0,
            interval,
            fade: Duration::from_millis(300),
            next_swap: interval,
            pending: None,
        }
    }

    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self.next_swap = interval;
        self
    }

    pub fn with_fade(mut self, fade: Duration) -> Self {
        self.fade = fade;
        self
    }

    /// The quote currently on display, if the list is non-empty.
    pub fn text(&self) -> Option<&str> {
        self.quotes.get(self.current).map(String::as_str)
    }

    /// Target opacity: 0 while faded out awaiting the swap, 1 otherwise.
    pub fn opacity(&self) -> f32 {
        if self.pending.is_some() {
            0.0
        } else {
            1.0
        }
    }

    /// Advance to `now` (time since start). Returns the new quote when the
    /// displayed text was swapped during this call.
    pub fn update<R: Rng + ?Sized>(&mut self, now: Duration, rng: &mut R) -> Option<&str> {
        if self.quotes.is_empty() {
            return None;
        }

        if self.pending.is_none() && now >= self.next_swap {
            let pick = rng.gen_range(0..self.quotes.len());
            self.pending = Some((pick, self.next_swap));
            self.next_swap += self.interval;
            if self.next_swap <= now {
                self.next_swap = now + self.interval;
            }
        }

        let (pick, started) = self.pending?;
        if now < started + self.fade {
            return None;
        }
        self.pending = None;
        self.current = pick;
        self.text()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    #[test]
    fn test_fade_then_swap() {
        let mut rng = SmallRng::seed_from_u64(9);
        let mut rotator = QuoteRotator::new(["a", "b", "c"]);
        assert_eq!(rotator.text(), Some("a"));

        assert!(rotator.update(Duration::from_secs(9), &mut rng).is_none());
        assert_eq!(rotator.opacity(), 1.0);

        // Interval reached: fade out, text unchanged
        assert!(rotator.update(Duration::from_secs(10), &mut rng).is_none());
        assert_eq!(rotator.opacity(), 0.0);

        let swapped = rotator
            .update(Duration::from_millis(10_300), &mut rng)
            .map(str::to_owned);
        assert!(swapped.is_some());
        assert_eq!(rotator.opacity(), 1.0);
        assert_eq!(rotator.text().map(str::to_owned), swapped);
    }

    #[test]
    fn test_keeps_cadence() {
        let mut rng = SmallRng::seed_from_u64(1);
        let mut rotator = QuoteRotator::new(DEFAULT_QUOTES);
        let mut swaps = 0;
        for ms in (0..=60_000u64).step_by(100) {
            if rotator.update(Duration::from_millis(ms), &mut rng).is_some() {
                swaps += 1;
            }
        }
        // Swaps land at 10.3 s, 20.3 s, ... 50.3 s
        assert_eq!(swaps, 5);
    }

    #[test]
    fn test_empty_list_never_swaps() {
        let mut rng = SmallRng::seed_from_u64(1);
        let mut rotator = QuoteRotator::new(Vec::<String>::new());
        assert!(rotator.update(Duration::from_secs(100), &mut rng).is_none());
        assert_eq!(rotator.text(), None);
    }
}
