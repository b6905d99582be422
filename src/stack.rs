//! The canonical tower model
//!
//! Owns the ordered list of placed layers and the parallel collection of
//! detached overhang fragments, and applies the vertical placement rule.
//! `add_layer` / `add_overhang` are the one place a visual node and a rigid
//! body enter the world (create-and-attach).

use glam::Vec3;
use rapier3d::prelude::RigidBodyHandle;

use crate::physics::PhysicsWorld;
use crate::scene::{Scene, layer_color};
use crate::sim::Axis;
use crate::tuning::Tuning;

/// One placed or in-motion block. Never destroyed during play; a cut shrinks
/// it in place.
#[derive(Debug)]
pub struct Layer {
    /// Scene node id (visual proxy, owned by the scene)
    pub visual: u32,
    /// Rigid-body handle (physics proxy, owned by the world)
    pub body: RigidBodyHandle,
    /// Current footprint; shrinks when cut
    pub width: f32,
    pub depth: f32,
    /// Resting height of this layer's center
    pub y: f32,
    /// Axis this layer sweeps along / was cut along
    pub axis: Axis,
}

/// A detached fragment falling under physics. Footprint fixed at creation.
#[derive(Debug)]
pub struct Overhang {
    pub visual: u32,
    pub body: RigidBodyHandle,
    pub width: f32,
    pub depth: f32,
}

/// Ordered layers (insertion order = stacking order) plus loose fragments.
/// The last layer is always the active or most recently placed one.
#[derive(Debug, Default)]
pub struct Stack {
    pub layers: Vec<Layer>,
    pub overhangs: Vec<Overhang>,
}

impl Stack {
    pub fn new() -> Self {
        Self::default()
    }

    /// Place a new layer at `y = box_height * len`, registering its visual
    /// node and a fixed cuboid body. Always succeeds.
    pub fn add_layer(
        &mut self,
        tuning: &Tuning,
        scene: &mut Scene,
        physics: &mut PhysicsWorld,
        x: f32,
        z: f32,
        width: f32,
        depth: f32,
        axis: Axis,
    ) {
        let index = self.layers.len();
        let y = tuning.box_height * index as f32;
        let center = Vec3::new(x, y, z);
        let visual = scene.spawn_box(
            center,
            Vec3::new(width, tuning.box_height, depth),
            layer_color(index),
        );
        let body = physics.add_fixed_box(center, tuning.half_extents(width, depth));
        self.layers.push(Layer {
            visual,
            body,
            width,
            depth,
            y,
            axis,
        });
    }

    /// Detach a fragment at the current top layer's height, registering a
    /// dynamic gravity-affected body.
    pub fn add_overhang(
        &mut self,
        tuning: &Tuning,
        scene: &mut Scene,
        physics: &mut PhysicsWorld,
        x: f32,
        z: f32,
        width: f32,
        depth: f32,
    ) {
        let index = self.layers.len().saturating_sub(1);
        let y = tuning.box_height * index as f32;
        let center = Vec3::new(x, y, z);
        let visual = scene.spawn_box(
            center,
            Vec3::new(width, tuning.box_height, depth),
            layer_color(index),
        );
        let body = physics.add_dynamic_box(
            center,
            tuning.half_extents(width, depth),
            tuning.debris_density,
        );
        self.overhangs.push(Overhang {
            visual,
            body,
            width,
            depth,
        });
    }

    /// The active (or most recently placed) layer
    pub fn top(&self) -> Option<&Layer> {
        self.layers.last()
    }

    pub fn top_mut(&mut self) -> Option<&mut Layer> {
        self.layers.last_mut()
    }

    /// The stable layer directly beneath the active one
    pub fn below_top(&self) -> Option<&Layer> {
        self.layers.len().checked_sub(2).map(|i| &self.layers[i])
    }

    pub fn len(&self) -> usize {
        self.layers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture() -> (Tuning, Scene, PhysicsWorld, Stack) {
        let tuning = Tuning::default();
        let physics = PhysicsWorld::new(tuning.gravity_y, tuning.solver_iterations);
        (tuning, Scene::new(), physics, Stack::new())
    }

    #[test]
    fn test_layer_heights_follow_index() {
        let (tuning, mut scene, mut physics, mut stack) = fixture();
        for i in 0..5 {
            stack.add_layer(
                &tuning,
                &mut scene,
                &mut physics,
                0.0,
                0.0,
                3.0,
                3.0,
                if i % 2 == 0 { Axis::X } else { Axis::Z },
            );
        }
        for (i, layer) in stack.layers.iter().enumerate() {
            assert_eq!(layer.y, tuning.box_height * i as f32);
            let node = scene.node(layer.visual).unwrap();
            assert_eq!(node.position.y, layer.y);
            assert_eq!(physics.translation(layer.body).y, layer.y);
        }
    }

    #[test]
    fn test_add_layer_attaches_both_proxies() {
        let (tuning, mut scene, mut physics, mut stack) = fixture();
        stack.add_layer(&tuning, &mut scene, &mut physics, 0.0, 0.0, 3.0, 3.0, Axis::X);
        assert_eq!(scene.len(), 1);
        assert_eq!(physics.body_count(), 1);
        assert_eq!(stack.len(), 1);
    }

    #[test]
    fn test_overhang_spawns_at_top_layer_height() {
        let (tuning, mut scene, mut physics, mut stack) = fixture();
        stack.add_layer(&tuning, &mut scene, &mut physics, 0.0, 0.0, 3.0, 3.0, Axis::X);
        stack.add_layer(&tuning, &mut scene, &mut physics, 0.0, 0.0, 3.0, 3.0, Axis::Z);
        stack.add_overhang(&tuning, &mut scene, &mut physics, 2.0, 0.0, 1.0, 3.0);

        let overhang = &stack.overhangs[0];
        let node = scene.node(overhang.visual).unwrap();
        assert_eq!(node.position.y, tuning.box_height);
        assert_eq!(physics.translation(overhang.body).y, tuning.box_height);
        assert_eq!(overhang.width, 1.0);
    }

    #[test]
    fn test_top_and_below_top() {
        let (tuning, mut scene, mut physics, mut stack) = fixture();
        assert!(stack.top().is_none());
        assert!(stack.below_top().is_none());

        stack.add_layer(&tuning, &mut scene, &mut physics, 0.0, 0.0, 3.0, 3.0, Axis::X);
        assert!(stack.top().is_some());
        assert!(stack.below_top().is_none());

        stack.add_layer(&tuning, &mut scene, &mut physics, 1.0, 0.0, 3.0, 3.0, Axis::Z);
        assert_eq!(stack.top().unwrap().axis, Axis::Z);
        assert_eq!(stack.below_top().unwrap().axis, Axis::X);
    }
}
