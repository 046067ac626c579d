//! Scroll-triggered reveal markers.

/// An element that gets revealed once it scrolls into view.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Revealable {
    /// Top edge in document coordinates.
    pub document_top: f32,
    revealed: bool,
}

impl Revealable {
    pub fn new(document_top: f32) -> Self {
        Self {
            document_top,
            revealed: false,
        }
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed
    }
}

/// Reveals elements whose top edge comes within `margin` of the viewport bottom.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollReveal {
    pub margin: f32,
}

impl Default for ScrollReveal {
    fn default() -> Self {
        Self { margin: 150.0 }
    }
}

impl ScrollReveal {
    /// Check every element against the viewport at `scroll_y`.
    ///
    /// Meant to run once at startup and then on every scroll event. Revealed
    /// elements stay revealed. Returns how many were newly revealed.
    pub fn reveal(&self, elements: &mut [Revealable], scroll_y: f32, viewport_height: f32) -> usize {
        let mut newly = 0;
        for element in elements.iter_mut().filter(|e| !e.revealed) {
            let top_in_viewport = element.document_top - scroll_y;
            if top_in_viewport < viewport_height - self.margin {
                element.revealed = true;
                newly += 1;
            }
        }
        newly
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reveal_threshold() {
        let reveal = ScrollReveal::default();
        let mut elements = [Revealable::new(500.0), Revealable::new(449.0), Revealable::new(450.0)];

        assert_eq!(reveal.reveal(&mut elements, 0.0, 600.0), 1);
        assert!(!elements[0].is_revealed());
        assert!(elements[1].is_revealed());
        assert!(!elements[2].is_revealed());
    }

    #[test]
    fn test_reveal_is_sticky_and_idempotent() {
        let reveal = ScrollReveal::default();
        let mut elements = [Revealable::new(1000.0)];

        assert_eq!(reveal.reveal(&mut elements, 600.0, 600.0), 1);
        assert_eq!(reveal.reveal(&mut elements, 600.0, 600.0), 0);

        // Scrolling back up does not hide it again.
        reveal.reveal(&mut elements, 0.0, 600.0);
        assert!(elements[0].is_revealed());
    }
}
