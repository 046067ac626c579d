//! Drawing surface abstraction.
//!
//! The field renders through the [`Canvas`] trait, so the same frame can be
//! drawn by the GPU host, captured in tests, or fed to any other backend.
//! [`DrawList`] is the recording implementation the GPU renderer consumes.

use bytemuck::{Pod, Zeroable};
use glam::{Vec2, Vec4};
use std::ops::Range;

/// A 2D drawing surface in pixel coordinates (origin top-left, y down).
pub trait Canvas {
    /// Erase everything drawn so far.
    fn clear(&mut self);

    /// Stroke a straight segment.
    fn line(&mut self, from: Vec2, to: Vec2, width: f32, color: Vec4);

    /// Fill a circle.
    fn circle(&mut self, center: Vec2, radius: f32, color: Vec4);
}

/// One stroked segment, laid out for a GPU instance buffer.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct LineInstance {
    pub from: [f32; 2],
    pub to: [f32; 2],
    pub color: [f32; 4],
    pub width: f32,
    pub _pad: [f32; 3],
}

/// One filled circle, laid out for a GPU instance buffer.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct CircleInstance {
    pub center: [f32; 2],
    pub radius: f32,
    pub _pad: f32,
    pub color: [f32; 4],
}

/// Which instance list a batch draws from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Primitive {
    Lines,
    Circles,
}

/// A run of consecutive draws of the same primitive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Batch {
    pub primitive: Primitive,
    /// Instance range inside the matching list.
    pub range: Range<u32>,
}

/// Records draw calls in submission order.
///
/// Consecutive draws of the same kind are merged into one [`Batch`];
/// replaying the batches in order reproduces the painter's order.
#[derive(Debug, Default, Clone)]
pub struct DrawList {
    lines: Vec<LineInstance>,
    circles: Vec<CircleInstance>,
    batches: Vec<Batch>,
}

impl DrawList {
    /// Create an empty draw list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorded segments.
    pub fn lines(&self) -> &[LineInstance] {
        &self.lines
    }

    /// Recorded circles.
    pub fn circles(&self) -> &[CircleInstance] {
        &self.circles
    }

    /// Draw batches in submission order.
    pub fn batches(&self) -> &[Batch] {
        &self.batches
    }

    /// Whether nothing has been drawn since the last clear.
    pub fn is_empty(&self) -> bool {
        self.batches.is_empty()
    }

    fn push_batch(&mut self, primitive: Primitive, index: u32) {
        match self.batches.last_mut() {
            Some(batch) if batch.primitive == primitive => batch.range.end = index + 1,
            _ => self.batches.push(Batch {
                primitive,
                range: index..index + 1,
            }),
        }
    }
}

impl Canvas for DrawList {
    fn clear(&mut self) {
        self.lines.clear();
        self.circles.clear();
        self.batches.clear();
    }

    fn line(&mut self, from: Vec2, to: Vec2, width: f32, color: Vec4) {
        let index = self.lines.len() as u32;
        self.lines.push(LineInstance {
            from: from.to_array(),
            to: to.to_array(),
            color: color.to_array(),
            width,
            _pad: [0.0; 3],
        });
        self.push_batch(Primitive::Lines, index);
    }

    fn circle(&mut self, center: Vec2, radius: f32, color: Vec4) {
        let index = self.circles.len() as u32;
        self.circles.push(CircleInstance {
            center: center.to_array(),
            radius,
            _pad: 0.0,
            color: color.to_array(),
        });
        self.push_batch(Primitive::Circles, index);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_batches_follow_submission_order() {
        let mut list = DrawList::new();
        list.line(Vec2::ZERO, Vec2::ONE, 1.0, Vec4::ONE);
        list.line(Vec2::ZERO, Vec2::ONE, 1.0, Vec4::ONE);
        list.circle(Vec2::ZERO, 2.0, Vec4::ONE);
        list.line(Vec2::ONE, Vec2::ZERO, 1.0, Vec4::ONE);

        assert_eq!(
            list.batches(),
            &[
                Batch { primitive: Primitive::Lines, range: 0..2 },
                Batch { primitive: Primitive::Circles, range: 0..1 },
                Batch { primitive: Primitive::Lines, range: 2..3 },
            ]
        );
    }

    #[test]
    fn test_clear_drops_everything() {
        let mut list = DrawList::new();
        list.circle(Vec2::ZERO, 2.0, Vec4::ONE);
        list.clear();
        assert!(list.is_empty());
        assert!(list.circles().is_empty());
    }

    #[test]
    fn test_instance_layout_is_16_byte_aligned() {
        assert_eq!(std::mem::size_of::<LineInstance>(), 48);
        assert_eq!(std::mem::size_of::<CircleInstance>(), 32);
    }
}
