//! Page embellishments that sit around the particle field.
//!
//! Each one is a small state machine driven by explicit timestamps
//! (`Duration` since page load) rather than by ambient timers, so a host can
//! drive them from its frame clock and tests can drive them from a script.
//!
//! | Type | Behavior |
//! |------|----------|
//! | [`Typewriter`] | Types and deletes a rotating list of phrases |
//! | [`ScrollReveal`] | Marks elements once they scroll near the viewport bottom |
//! | [`QuoteRotator`] | Swaps in a random quote every 10 s with a short fade |
//! | [`TextSplitter`] | Staggered per-character entrance animation |
//! | [`HoverScale`] | Smooth scale-up on hover, scale-down on leave |
//! | [`RippleSet`] | Expanding, fading click ripples |
//! | [`SmoothScroll`] | Eased scrolling to in-page anchors |

pub mod easing;
mod hover;
mod quotes;
mod reveal;
mod ripple;
mod scroll;
mod splitting;
mod typewriter;

pub use easing::{Easing, Tween};
pub use hover::HoverScale;
pub use quotes::{QuoteRotator, DEFAULT_QUOTES};
pub use reveal::{Revealable, ScrollReveal};
pub use ripple::{Rect, Ripple, RippleSet};
pub use scroll::{Anchor, SmoothScroll};
pub use splitting::{CharAnimation, CharPose, SplitText, TextSplitter};
pub use typewriter::{Typewriter, TypewriterTiming, DEFAULT_PHRASES};
