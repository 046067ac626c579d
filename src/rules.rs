//! Per-frame kinematics for field nodes.
//!
//! Every frame each node goes through the same fixed pipeline:
//!
//! 1. pointer repulsion (velocity impulse away from the pointer)
//! 2. integration (`position += velocity`)
//! 3. wall bounce (velocity component flipped and scaled by the restitution)
//! 4. clamp into `[0, width] x [0, height]`
//! 5. damping (velocity scaled every frame, bounce or not)
//!
//! All increments are per call, not per second: a faster display runs the
//! animation faster, exactly like a frame-coupled canvas sketch.

use crate::particle::Node;
use glam::Vec2;

/// How a force fades between the source and its maximum range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Falloff {
    /// Constant force regardless of distance.
    Constant,

    /// Linear falloff: force decreases linearly to zero at max range.
    #[default]
    Linear,

    /// Smooth falloff using smoothstep for gradual transitions.
    Smooth,
}

impl Falloff {
    /// Falloff factor in `[0, 1]` at `dist` for a force reaching `radius`.
    pub fn factor(&self, dist: f32, radius: f32) -> f32 {
        match self {
            Falloff::Constant => 1.0,
            Falloff::Linear => 1.0 - dist / radius,
            Falloff::Smooth => 1.0 - smoothstep(0.0, radius, dist),
        }
    }
}

fn smoothstep(edge0: f32, edge1: f32, x: f32) -> f32 {
    let t = ((x - edge0) / (edge1 - edge0)).clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

/// Pointer repulsion parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Repulsion {
    /// Influence radius in pixels. Nodes at or beyond it are unaffected.
    pub radius: f32,
    /// Impulse magnitude at distance zero, in pixels per frame.
    pub strength: f32,
    /// Shape of the fade between zero and `radius`.
    pub falloff: Falloff,
}

impl Default for Repulsion {
    fn default() -> Self {
        Self {
            radius: 150.0,
            strength: 0.02,
            falloff: Falloff::Linear,
        }
    }
}

impl Repulsion {
    /// Impulse magnitude for a node `distance` pixels from the pointer.
    pub fn force(&self, distance: f32) -> f32 {
        if distance < self.radius {
            self.strength * self.falloff.factor(distance, self.radius)
        } else {
            0.0
        }
    }

    /// Velocity change for a node at `position`, pointing away from `pointer`.
    ///
    /// A node sitting exactly on the pointer is pushed along +x, since
    /// `atan2(0, 0)` is zero.
    pub fn impulse(&self, pointer: Vec2, position: Vec2) -> Vec2 {
        let force = self.force(pointer.distance(position));
        if force == 0.0 {
            return Vec2::ZERO;
        }
        let away = position - pointer;
        let angle = away.y.atan2(away.x);
        Vec2::new(angle.cos(), angle.sin()) * force
    }
}

/// Tunable constants of the node update pipeline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Kinematics {
    /// Pointer repulsion.
    pub repulsion: Repulsion,
    /// Velocity multiplier applied (with a sign flip) on a wall hit.
    pub restitution: f32,
    /// Velocity multiplier applied every frame.
    pub damping: f32,
}

impl Default for Kinematics {
    fn default() -> Self {
        Self {
            repulsion: Repulsion::default(),
            restitution: 0.8,
            damping: 0.99,
        }
    }
}

impl Kinematics {
    /// Advance one node by one frame inside `[0, bounds.x] x [0, bounds.y]`.
    pub fn step(&self, node: &mut Node, pointer: Option<Vec2>, bounds: Vec2) {
        if let Some(pointer) = pointer {
            node.velocity += self.repulsion.impulse(pointer, node.position);
        }

        node.position += node.velocity;

        // Tested on the unclamped position so any excursion bounces.
        if node.position.x < 0.0 || node.position.x > bounds.x {
            node.velocity.x *= -self.restitution;
        }
        if node.position.y < 0.0 || node.position.y > bounds.y {
            node.velocity.y *= -self.restitution;
        }

        node.position = node.position.clamp(Vec2::ZERO, bounds);

        node.velocity *= self.damping;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BOUNDS: Vec2 = Vec2::new(800.0, 600.0);

    #[test]
    fn test_linear_force_falloff() {
        let repulsion = Repulsion::default();
        assert_eq!(repulsion.force(0.0), 0.02);
        assert!((repulsion.force(75.0) - 0.01).abs() < 1e-7);
        assert_eq!(repulsion.force(150.0), 0.0);
        assert_eq!(repulsion.force(500.0), 0.0);
        assert_eq!(repulsion.force(f32::NAN), 0.0);
    }

    #[test]
    fn test_impulse_points_away() {
        let repulsion = Repulsion::default();
        let push = repulsion.impulse(Vec2::new(100.0, 100.0), Vec2::new(100.0, 160.0));
        assert!(push.x.abs() < 1e-6);
        assert!(push.y > 0.0);
    }

    #[test]
    fn test_impulse_at_pointer_is_along_x() {
        let repulsion = Repulsion::default();
        let push = repulsion.impulse(Vec2::new(5.0, 5.0), Vec2::new(5.0, 5.0));
        assert!((push.x - 0.02).abs() < 1e-7);
        assert!(push.y.abs() < 1e-7);
    }

    #[test]
    fn test_smooth_falloff_ends() {
        assert_eq!(Falloff::Smooth.factor(0.0, 10.0), 1.0);
        assert_eq!(Falloff::Smooth.factor(10.0, 10.0), 0.0);
        assert_eq!(Falloff::Constant.factor(9.0, 10.0), 1.0);
    }

    #[test]
    fn test_step_integrates_and_damps() {
        let kinematics = Kinematics::default();
        let mut node = Node::new(Vec2::new(100.0, 100.0), Vec2::new(1.0, -0.5), 4.0, 0.0);
        kinematics.step(&mut node, None, BOUNDS);

        assert_eq!(node.position, Vec2::new(101.0, 99.5));
        assert!((node.velocity.x - 0.99).abs() < 1e-6);
        assert!((node.velocity.y + 0.495).abs() < 1e-6);
    }

    #[test]
    fn test_step_bounces_off_right_wall() {
        let kinematics = Kinematics::default();
        let mut node = Node::new(Vec2::new(799.8, 300.0), Vec2::new(0.4, 0.0), 4.0, 0.0);
        kinematics.step(&mut node, None, BOUNDS);

        assert_eq!(node.position.x, 800.0);
        assert!((node.velocity.x - (-0.4 * 0.8 * 0.99)).abs() < 1e-6);
    }

    #[test]
    fn test_step_ignores_far_pointer() {
        let kinematics = Kinematics::default();
        let mut with = Node::new(Vec2::new(400.0, 300.0), Vec2::new(0.1, 0.1), 4.0, 0.0);
        let mut without = with;
        kinematics.step(&mut with, Some(Vec2::new(0.0, 0.0)), BOUNDS);
        kinematics.step(&mut without, None, BOUNDS);
        assert_eq!(with, without);
    }
}
