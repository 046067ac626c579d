//! The particle field: nodes, their static proximity graph, and the frame step.
//!
//! A [`ParticleField`] owns all simulation state. The host drives it once per
//! display refresh with [`ParticleField::frame`], passing the current pointer
//! position and a [`Canvas`] to paint on. Headless callers can use
//! [`ParticleField::advance`] and [`ParticleField::render`] separately.
//!
//! # Example
//!
//! ```ignore
//! use neural_field::{DrawList, ParticleField};
//! use rand::{rngs::SmallRng, SeedableRng};
//!
//! let mut rng = SmallRng::seed_from_u64(42);
//! let mut field = ParticleField::new(800.0, 600.0, 80, &mut rng);
//! let mut canvas = DrawList::new();
//!
//! // Once per display refresh:
//! field.frame(Some(Vec2::new(400.0, 300.0)), &mut canvas);
//! ```
//!
//! # Connectivity
//!
//! Edges are computed once from the initial positions and never again, even
//! as nodes drift apart. Only [`ParticleField::rebuild`] replaces them.

use crate::canvas::Canvas;
use crate::particle::{Connection, Node};
use crate::rules::Kinematics;
use crate::spawn::{SpawnConfig, SpawnContext};
use crate::visuals::VisualConfig;
use glam::{Vec2, Vec4};
use rand::Rng;

/// Default number of nodes in a field.
pub const DEFAULT_NODE_COUNT: usize = 80;

/// Everything that parameterizes a field besides its size and node count.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldConfig {
    pub spawn: SpawnConfig,
    pub kinematics: Kinematics,
    pub visuals: VisualConfig,
}

/// Canvas that discards every draw, used to step without painting.
struct NullCanvas;

impl Canvas for NullCanvas {
    fn clear(&mut self) {}
    fn line(&mut self, _from: Vec2, _to: Vec2, _width: f32, _color: Vec4) {}
    fn circle(&mut self, _center: Vec2, _radius: f32, _color: Vec4) {}
}

/// Simulator state for the animated network.
#[derive(Debug, Clone)]
pub struct ParticleField {
    width: f32,
    height: f32,
    nodes: Vec<Node>,
    connections: Vec<Connection>,
    config: FieldConfig,
}

impl ParticleField {
    /// Create a field of `count` random nodes with default settings.
    pub fn new<R: Rng + ?Sized>(width: f32, height: f32, count: usize, rng: &mut R) -> Self {
        Self::with_config(width, height, count, FieldConfig::default(), rng)
    }

    /// Create a field of `count` random nodes.
    ///
    /// A non-positive or non-finite viewport gives an empty field rather
    /// than an error.
    pub fn with_config<R: Rng + ?Sized>(
        width: f32,
        height: f32,
        count: usize,
        config: FieldConfig,
        rng: &mut R,
    ) -> Self {
        let mut ctx = SpawnContext::new(width, height, rng);
        let nodes = ctx.spawn_nodes(count, &config.spawn);
        let connections = ctx.connect(&nodes, &config.spawn);
        log::debug!(
            "spawned field {}x{}: {} nodes, {} connections",
            width,
            height,
            nodes.len(),
            connections.len()
        );
        Self {
            width,
            height,
            nodes,
            connections,
            config,
        }
    }

    /// Create a field from caller-placed nodes and build their proximity graph.
    ///
    /// The nodes are dropped when the viewport is degenerate, the same as
    /// for a spawned field.
    pub fn from_nodes<R: Rng + ?Sized>(
        width: f32,
        height: f32,
        mut nodes: Vec<Node>,
        config: FieldConfig,
        rng: &mut R,
    ) -> Self {
        let mut ctx = SpawnContext::new(width, height, rng);
        if !ctx.is_valid() {
            log::debug!("dropping {} nodes for viewport {}x{}", nodes.len(), width, height);
            nodes.clear();
        }
        let connections = ctx.connect(&nodes, &config.spawn);
        Self {
            width,
            height,
            nodes,
            connections,
            config,
        }
    }

    /// Discard all nodes and connections and spawn `count` fresh ones at the
    /// current size.
    pub fn rebuild<R: Rng + ?Sized>(&mut self, count: usize, rng: &mut R) {
        let config = std::mem::take(&mut self.config);
        *self = Self::with_config(self.width, self.height, count, config, rng);
    }

    // ========== Accessors ==========

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn connections(&self) -> &[Connection] {
        &self.connections
    }

    pub fn config(&self) -> &FieldConfig {
        &self.config
    }

    pub fn kinematics(&self) -> &Kinematics {
        &self.config.kinematics
    }

    pub fn visuals(&self) -> &VisualConfig {
        &self.config.visuals
    }

    /// Replace the look of the field without touching its state.
    pub fn set_visuals(&mut self, visuals: VisualConfig) {
        self.config.visuals = visuals;
    }

    // ========== Frame step ==========

    /// Run one complete frame: clear, then advance and paint every
    /// connection, then advance and paint every node, all in collection order.
    ///
    /// Connections are stroked before the nodes move, so they use the
    /// positions left by the previous frame.
    pub fn frame<C: Canvas + ?Sized>(&mut self, pointer: Option<Vec2>, canvas: &mut C) {
        canvas.clear();

        let visuals = &self.config.visuals;
        for conn in &mut self.connections {
            conn.pulse += visuals.connection_pulse_step;
            let a = self.nodes[conn.from].position;
            let b = self.nodes[conn.to].position;
            canvas.line(
                a,
                b,
                visuals.connection_width,
                visuals.connection_rgba(conn.pulse, conn.strength),
            );
        }

        let bounds = Vec2::new(self.width, self.height);
        for node in &mut self.nodes {
            self.config.kinematics.step(node, pointer, bounds);
            node.pulse += visuals.node_pulse_step;
            paint_node(visuals, node, canvas);
        }
    }

    /// Advance the simulation by one frame without painting.
    pub fn advance(&mut self, pointer: Option<Vec2>) {
        self.frame(pointer, &mut NullCanvas);
    }

    /// Advance the simulation by `frames` frames with a fixed pointer.
    pub fn advance_frames(&mut self, frames: u32, pointer: Option<Vec2>) {
        for _ in 0..frames {
            self.advance(pointer);
        }
    }

    /// Paint the current state without advancing it.
    pub fn render<C: Canvas + ?Sized>(&self, canvas: &mut C) {
        canvas.clear();

        let visuals = &self.config.visuals;
        for conn in &self.connections {
            canvas.line(
                self.nodes[conn.from].position,
                self.nodes[conn.to].position,
                visuals.connection_width,
                visuals.connection_rgba(conn.pulse, conn.strength),
            );
        }
        for node in &self.nodes {
            paint_node(visuals, node, canvas);
        }
    }

    /// Adopt a new viewport size.
    ///
    /// Nodes are neither moved nor rebuilt; anything now outside the bounds is
    /// pulled back by the next frame's bounce and clamp. Non-positive sizes,
    /// such as a minimized window, are ignored.
    pub fn resize(&mut self, width: f32, height: f32) {
        if !(width > 0.0 && height > 0.0 && width.is_finite() && height.is_finite()) {
            log::debug!("ignoring degenerate resize to {}x{}", width, height);
            return;
        }
        self.width = width;
        self.height = height;
    }
}

fn paint_node<C: Canvas + ?Sized>(visuals: &VisualConfig, node: &Node, canvas: &mut C) {
    let diameter = visuals.node_diameter(node.size, node.pulse);
    canvas.circle(node.position, diameter * 0.5, visuals.node_color);
    canvas.circle(
        node.position,
        diameter * visuals.glow_scale * 0.5,
        visuals.glow_color,
    );
}
