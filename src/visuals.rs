//! Visual configuration for field rendering.
//!
//! Controls how nodes and connections look, separate from the kinematics
//! that control how they move. Colors are straight (non-premultiplied) RGBA
//! with channels in `0.0..=1.0`, authored in sRGB like a 2D canvas.
//!
//! # Usage
//!
//! ```ignore
//! Simulation::new()
//!     .with_visuals(VisualConfig {
//!         connection_color: Vec3::new(1.0, 0.4, 0.8),
//!         blend_mode: BlendMode::Additive,
//!         ..Default::default()
//!     })
//!     .run()?;
//! ```

use glam::{Vec3, Vec4};

/// Build a color from 8-bit channels.
pub fn rgba8(r: u8, g: u8, b: u8, a: u8) -> Vec4 {
    Vec4::new(r as f32, g as f32, b as f32, a as f32) / 255.0
}

/// Blend mode for field rendering.
///
/// Controls how node and edge colors combine with the background and each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BlendMode {
    /// Standard alpha blending (default).
    ///
    /// Matches painting onto a 2D canvas.
    #[default]
    Alpha,

    /// Additive blending.
    ///
    /// Overlapping nodes and edges become brighter, for a stronger glow.
    Additive,
}

/// Complete visual configuration for a particle field.
#[derive(Debug, Clone, PartialEq)]
pub struct VisualConfig {
    /// Blend mode for everything drawn on the canvas.
    pub blend_mode: BlendMode,
    /// Background clear color (RGB, 0.0-1.0). Only hosts with an opaque
    /// surface use it; a transparent canvas clears to nothing.
    pub background_color: Vec3,
    /// Stroke color for connections (RGB). Alpha comes from the pulse.
    pub connection_color: Vec3,
    /// Stroke width for connections, in pixels.
    pub connection_width: f32,
    /// Phase advance per frame for connections, in radians.
    pub connection_pulse_step: f32,
    /// Lowest connection opacity before the strength multiplier.
    pub connection_alpha_base: f32,
    /// Half the swing of the connection opacity wave.
    pub connection_alpha_amplitude: f32,
    /// Node fill color.
    pub node_color: Vec4,
    /// Phase advance per frame for nodes, in radians.
    pub node_pulse_step: f32,
    /// How far the drawn diameter swings around the base size.
    pub node_pulse_amplitude: f32,
    /// Inner glow fill color.
    pub glow_color: Vec4,
    /// Glow diameter relative to the node diameter.
    pub glow_scale: f32,
}

impl Default for VisualConfig {
    fn default() -> Self {
        Self {
            blend_mode: BlendMode::Alpha,
            background_color: Vec3::new(0.04, 0.05, 0.1),
            connection_color: Vec3::new(0.0, 212.0 / 255.0, 1.0),
            connection_width: 1.0,
            connection_pulse_step: 0.02,
            connection_alpha_base: 0.2,
            connection_alpha_amplitude: 0.3,
            node_color: rgba8(0, 212, 255, 200),
            node_pulse_step: 0.05,
            node_pulse_amplitude: 2.0,
            glow_color: rgba8(255, 255, 255, 100),
            glow_scale: 0.5,
        }
    }
}

impl VisualConfig {
    /// Connection opacity for a phase and strength.
    ///
    /// The wave runs between `base` and `base + 2 * amplitude` (0.2 to 0.8 by
    /// default) before the strength multiplier, so edges never vanish nor
    /// reach full intensity.
    pub fn connection_alpha(&self, pulse: f32, strength: f32) -> f32 {
        let wave = (pulse.sin() + 1.0) * self.connection_alpha_amplitude
            + self.connection_alpha_base;
        wave * strength
    }

    /// Full stroke color of a connection at the given phase.
    pub fn connection_rgba(&self, pulse: f32, strength: f32) -> Vec4 {
        self.connection_color
            .extend(self.connection_alpha(pulse, strength))
    }

    /// Drawn node diameter: the base size swinging by the pulse amplitude.
    pub fn node_diameter(&self, size: f32, pulse: f32) -> f32 {
        size + pulse.sin() * self.node_pulse_amplitude
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    #[test]
    fn test_rgba8() {
        let c = rgba8(255, 0, 51, 255);
        assert_eq!(c, Vec4::new(1.0, 0.0, 0.2, 1.0));
    }

    #[test]
    fn test_connection_alpha_range() {
        let v = VisualConfig::default();
        assert!((v.connection_alpha(FRAC_PI_2, 1.0) - 0.8).abs() < 1e-6);
        assert!((v.connection_alpha(-FRAC_PI_2, 1.0) - 0.2).abs() < 1e-6);
        assert!((v.connection_alpha(0.0, 0.5) - 0.25).abs() < 1e-6);
    }

    #[test]
    fn test_connection_rgba_keeps_stroke() {
        let v = VisualConfig::default();
        let c = v.connection_rgba(FRAC_PI_2, 1.0);
        assert_eq!(c.truncate(), v.connection_color);
        assert!((c.w - 0.8).abs() < 1e-6);
    }

    #[test]
    fn test_node_diameter_swings_by_two() {
        let v = VisualConfig::default();
        assert!((v.node_diameter(4.0, FRAC_PI_2) - 6.0).abs() < 1e-6);
        assert!((v.node_diameter(4.0, -FRAC_PI_2) - 2.0).abs() < 1e-6);
    }
}
