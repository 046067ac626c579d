//! # Neural Field
//!
//! An animated "neural network" backdrop: a few dozen drifting nodes, joined
//! by a proximity graph fixed at spawn time, that pulse softly, bounce off the
//! viewport edges, and shy away from the pointer.
//!
//! ## Quick Start
//!
//! ```ignore
//! use neural_field::prelude::*;
//!
//! fn main() -> Result<(), SimulationError> {
//!     Simulation::new()
//!         .with_node_count(80)
//!         .with_seed(42)
//!         .run()
//! }
//! ```
//!
//! ## Core Concepts
//!
//! ### Field
//!
//! [`ParticleField`] holds the [`Node`]s and [`Connection`]s and runs one
//! frame at a time. It knows nothing about windows or GPUs; it paints onto
//! any [`Canvas`]. [`DrawList`] is the canvas the built-in renderer consumes,
//! and also makes frames easy to inspect in tests.
//!
//! ```ignore
//! let mut rng = SmallRng::seed_from_u64(7);
//! let mut field = ParticleField::new(800.0, 600.0, 80, &mut rng);
//! let mut list = DrawList::new();
//! field.frame(Some(Vec2::new(400.0, 300.0)), &mut list);
//! ```
//!
//! ### Motion
//!
//! [`Kinematics`] is applied per node, per frame, in a fixed order: pointer
//! [`Repulsion`], integration, bounce off the edges with a restitution factor,
//! clamping into the viewport, then damping. All rates are per frame, not
//! per second.
//!
//! ### Looks
//!
//! [`VisualConfig`] holds colors, pulse rates and amplitudes. Connections
//! fade with their pulse and strength; nodes breathe in size and carry a
//! small glow.
//!
//! ### Page effects
//!
//! The [`page`] module holds the small time-driven state machines that sit
//! around the backdrop on a landing page: typewriter, quote rotator, scroll
//! reveal, split-text entrance, hover scale, click ripples and smooth scroll.

pub mod canvas;
pub mod error;
pub mod field;
mod gpu;
pub mod input;
pub mod page;
pub mod particle;
pub mod rules;
pub mod simulation;
pub mod spawn;
pub mod time;
pub mod visuals;

pub use canvas::{Canvas, DrawList};
pub use error::{GpuError, SimulationError};
pub use field::{FieldConfig, ParticleField, DEFAULT_NODE_COUNT};
pub use glam::{Vec2, Vec3, Vec4};
pub use particle::{Connection, Node};
pub use rules::{Falloff, Kinematics, Repulsion};
pub use simulation::Simulation;
pub use spawn::{SpawnConfig, SpawnContext};
pub use visuals::{BlendMode, VisualConfig};

/// Convenient re-exports for common usage.
///
/// ```ignore
/// use neural_field::prelude::*;
/// ```
pub mod prelude {
    pub use crate::canvas::{Canvas, DrawList};
    pub use crate::error::SimulationError;
    pub use crate::field::{FieldConfig, ParticleField};
    pub use crate::input::{Input, KeyCode, MouseButton};
    pub use crate::particle::{Connection, Node};
    pub use crate::rules::{Falloff, Kinematics, Repulsion};
    pub use crate::simulation::Simulation;
    pub use crate::spawn::{SpawnConfig, SpawnContext};
    pub use crate::time::Time;
    pub use crate::visuals::{BlendMode, VisualConfig};
    pub use crate::{Vec2, Vec3, Vec4};
}
