//! Particle and edge types of the field.
//!
//! A [`Node`] is a moving, pulsing point. A [`Connection`] joins two nodes by
//! index; it never owns them and the node side keeps no back-reference.

use glam::Vec2;

/// A simulated particle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Node {
    /// Position in canvas pixels.
    pub position: Vec2,
    /// Velocity in pixels per frame.
    pub velocity: Vec2,
    /// Base drawn diameter, fixed at creation.
    pub size: f32,
    /// Phase angle in radians. Only ever increases.
    pub pulse: f32,
}

impl Node {
    /// Create a node with the given kinematic state.
    pub fn new(position: Vec2, velocity: Vec2, size: f32, pulse: f32) -> Self {
        Self {
            position,
            velocity,
            size,
            pulse,
        }
    }

    /// Create a motionless node, mostly useful for hand-built layouts.
    pub fn at(x: f32, y: f32) -> Self {
        Self::new(Vec2::new(x, y), Vec2::ZERO, 4.5, 0.0)
    }

    /// Current speed in pixels per frame.
    #[inline]
    pub fn speed(&self) -> f32 {
        self.velocity.length()
    }
}

/// A static edge between two nodes, fixed at initialization.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Connection {
    /// Index of the first node. Always less than `to`.
    pub from: usize,
    /// Index of the second node.
    pub to: usize,
    /// Opacity multiplier in `[0.3, 1.0]`.
    pub strength: f32,
    /// Phase angle in radians.
    pub pulse: f32,
}

impl Connection {
    /// The pair of node indices this edge joins.
    #[inline]
    pub fn endpoints(&self) -> (usize, usize) {
        (self.from, self.to)
    }
}
