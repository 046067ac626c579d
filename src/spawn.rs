//! Randomized node placement and proximity-graph construction.
//!
//! All randomness flows through a caller-supplied [`Rng`], so a seeded
//! generator reproduces the same field:
//!
//! ```ignore
//! use rand::{rngs::SmallRng, SeedableRng};
//!
//! let mut rng = SmallRng::seed_from_u64(7);
//! let mut ctx = SpawnContext::new(800.0, 600.0, &mut rng);
//! let nodes = ctx.spawn_nodes(80, &SpawnConfig::default());
//! let edges = ctx.connect(&nodes, &SpawnConfig::default());
//! ```

use crate::particle::{Connection, Node};
use glam::Vec2;
use rand::Rng;
use std::f32::consts::TAU;

/// Ranges used when creating nodes and connections.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpawnConfig {
    /// Each velocity component is drawn from `[-max_speed, max_speed)`.
    pub max_speed: f32,
    /// Base diameter range.
    pub size_range: (f32, f32),
    /// Connection strength range.
    pub strength_range: (f32, f32),
    /// Two nodes closer than this at creation are connected.
    pub proximity_threshold: f32,
}

impl Default for SpawnConfig {
    fn default() -> Self {
        Self {
            max_speed: 0.5,
            size_range: (3.0, 6.0),
            strength_range: (0.3, 1.0),
            proximity_threshold: 120.0,
        }
    }
}

/// Context for spawning a field inside a `width x height` viewport.
pub struct SpawnContext<'a, R: Rng + ?Sized> {
    /// Viewport width in pixels.
    pub width: f32,
    /// Viewport height in pixels.
    pub height: f32,
    rng: &'a mut R,
}

impl<'a, R: Rng + ?Sized> SpawnContext<'a, R> {
    /// Create a spawn context over the given generator.
    pub fn new(width: f32, height: f32, rng: &'a mut R) -> Self {
        Self { width, height, rng }
    }

    /// Whether the viewport can hold any nodes at all.
    pub fn is_valid(&self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }

    // ========== Random primitives ==========

    /// Random f32 in `[min, max)`. Returns `min` for an empty range.
    #[inline]
    pub fn random_range(&mut self, min: f32, max: f32) -> f32 {
        if max > min {
            self.rng.gen_range(min..max)
        } else {
            min
        }
    }

    /// Random phase angle in `[0, 2π)`.
    #[inline]
    pub fn random_phase(&mut self) -> f32 {
        self.rng.gen_range(0.0..TAU)
    }

    /// Random point inside the viewport.
    pub fn random_position(&mut self) -> Vec2 {
        Vec2::new(
            self.random_range(0.0, self.width),
            self.random_range(0.0, self.height),
        )
    }

    // ========== Field construction ==========

    /// Create one node with randomized position, velocity, size and phase.
    pub fn spawn_node(&mut self, config: &SpawnConfig) -> Node {
        let position = self.random_position();
        let velocity = Vec2::new(
            self.random_range(-config.max_speed, config.max_speed),
            self.random_range(-config.max_speed, config.max_speed),
        );
        let size = self.random_range(config.size_range.0, config.size_range.1);
        let pulse = self.random_phase();
        Node::new(position, velocity, size, pulse)
    }

    /// Create `count` nodes, or none if the viewport is degenerate.
    pub fn spawn_nodes(&mut self, count: usize, config: &SpawnConfig) -> Vec<Node> {
        if !self.is_valid() {
            return Vec::new();
        }
        (0..count).map(|_| self.spawn_node(config)).collect()
    }

    /// Build the proximity graph over `nodes`.
    ///
    /// Scans every unordered pair `i < j` once; pairs strictly closer than the
    /// threshold get an edge. Edges come out ordered by `(from, to)`.
    pub fn connect(&mut self, nodes: &[Node], config: &SpawnConfig) -> Vec<Connection> {
        let mut connections = Vec::new();
        for i in 0..nodes.len() {
            for j in (i + 1)..nodes.len() {
                let distance = nodes[i].position.distance(nodes[j].position);
                if distance < config.proximity_threshold {
                    let strength =
                        self.random_range(config.strength_range.0, config.strength_range.1);
                    let pulse = self.random_phase();
                    connections.push(Connection {
                        from: i,
                        to: j,
                        strength,
                        pulse,
                    });
                }
            }
        }
        connections
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    #[test]
    fn test_spawn_ranges() {
        let mut rng = SmallRng::seed_from_u64(1);
        let mut ctx = SpawnContext::new(800.0, 600.0, &mut rng);
        let config = SpawnConfig::default();

        for node in ctx.spawn_nodes(500, &config) {
            assert!(node.position.x >= 0.0 && node.position.x < 800.0);
            assert!(node.position.y >= 0.0 && node.position.y < 600.0);
            assert!(node.velocity.x.abs() <= 0.5 && node.velocity.y.abs() <= 0.5);
            assert!(node.size >= 3.0 && node.size < 6.0);
            assert!(node.pulse >= 0.0 && node.pulse < TAU);
        }
    }

    #[test]
    fn test_degenerate_viewport_spawns_nothing() {
        let mut rng = SmallRng::seed_from_u64(1);
        for (w, h) in [(0.0, 600.0), (800.0, -1.0), (f32::NAN, 10.0)] {
            let mut ctx = SpawnContext::new(w, h, &mut rng);
            assert!(ctx.spawn_nodes(80, &SpawnConfig::default()).is_empty());
        }
    }

    #[test]
    fn test_connect_threshold_is_strict() {
        let mut rng = SmallRng::seed_from_u64(3);
        let mut ctx = SpawnContext::new(800.0, 600.0, &mut rng);
        let nodes = vec![Node::at(0.0, 0.0), Node::at(120.0, 0.0), Node::at(119.0, 0.0)];
        let edges = ctx.connect(&nodes, &SpawnConfig::default());

        // 0-1 sits exactly on the threshold and is excluded.
        let pairs: Vec<_> = edges.iter().map(|c| c.endpoints()).collect();
        assert_eq!(pairs, vec![(0, 2), (1, 2)]);
        for edge in &edges {
            assert!(edge.strength >= 0.3 && edge.strength < 1.0);
        }
    }

    #[test]
    fn test_empty_range_returns_min() {
        let mut rng = SmallRng::seed_from_u64(0);
        let mut ctx = SpawnContext::new(1.0, 1.0, &mut rng);
        assert_eq!(ctx.random_range(2.0, 2.0), 2.0);
        assert_eq!(ctx.random_range(5.0, 1.0), 5.0);
    }
}
