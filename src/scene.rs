//! Visual proxy boundary
//!
//! A retained collection of colored box nodes, addressed by id. This is the
//! surface an external renderer consumes each frame; the game only ever sets
//! position, scale, orientation, and color through it. No drawing happens
//! here.

use glam::{Quat, Vec3};

/// One renderable box
#[derive(Debug, Clone)]
pub struct BoxNode {
    pub id: u32,
    /// Center position in world space
    pub position: Vec3,
    pub rotation: Quat,
    /// Scale factors applied on top of `size` (cuts rescale along one axis)
    pub scale: Vec3,
    /// Unscaled dimensions the box was created with
    pub size: Vec3,
    /// Linear RGB
    pub color: [f32; 3],
}

/// Scene container of box nodes
#[derive(Debug, Default)]
pub struct Scene {
    nodes: Vec<BoxNode>,
    next_id: u32,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a box node and return its id
    pub fn spawn_box(&mut self, position: Vec3, size: Vec3, color: [f32; 3]) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        self.nodes.push(BoxNode {
            id,
            position,
            rotation: Quat::IDENTITY,
            scale: Vec3::ONE,
            size,
            color,
        });
        id
    }

    pub fn node(&self, id: u32) -> Option<&BoxNode> {
        self.nodes.iter().find(|n| n.id == id)
    }

    pub fn node_mut(&mut self, id: u32) -> Option<&mut BoxNode> {
        self.nodes.iter_mut().find(|n| n.id == id)
    }

    pub fn remove(&mut self, id: u32) {
        self.nodes.retain(|n| n.id != id);
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Nodes in creation order, for a renderer to walk
    pub fn iter(&self) -> impl Iterator<Item = &BoxNode> {
        self.nodes.iter()
    }
}

/// Color for the layer at `index`: a hue ramp so the tower shades gradually
/// as it grows.
pub fn layer_color(index: usize) -> [f32; 3] {
    hsl_to_rgb(30.0 + index as f32 * 4.0, 1.0, 0.5)
}

/// Convert HSL (hue in degrees) to linear RGB
fn hsl_to_rgb(h: f32, s: f32, l: f32) -> [f32; 3] {
    let h = h.rem_euclid(360.0);
    let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let x = c * (1.0 - ((h / 60.0).rem_euclid(2.0) - 1.0).abs());
    let m = l - c / 2.0;
    let (r, g, b) = match h {
        h if h < 60.0 => (c, x, 0.0),
        h if h < 120.0 => (x, c, 0.0),
        h if h < 180.0 => (0.0, c, x),
        h if h < 240.0 => (0.0, x, c),
        h if h < 300.0 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };
    [r + m, g + m, b + m]
}
