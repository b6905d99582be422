//! Game session
//!
//! Owns the tower, the physics world, the scene, and the camera rig, and
//! drives them from two entry points: the discrete activate event and the
//! per-frame update. Both take `&mut self`, so the placement engine never
//! observes a mid-step world.

use glam::Vec3;

use crate::camera::CameraRig;
use crate::physics::PhysicsWorld;
use crate::scene::Scene;
use crate::sim::{
    ActivateEffect, Axis, CutOutcome, CutPlan, GamePhase, Slab, next_spawn_center, plan_cut,
};
use crate::stack::Stack;
use crate::tuning::Tuning;

pub struct GameSession {
    tuning: Tuning,
    pub phase: GamePhase,
    pub stack: Stack,
    pub scene: Scene,
    pub physics: PhysicsWorld,
    pub camera: CameraRig,
}

impl GameSession {
    /// Build a session with the foundation layer already placed.
    pub fn new(tuning: Tuning, viewport_w: f32, viewport_h: f32) -> Self {
        let mut scene = Scene::new();
        let mut physics = PhysicsWorld::new(tuning.gravity_y, tuning.solver_iterations);
        let camera = CameraRig::new(&tuning, viewport_w, viewport_h);
        let mut stack = Stack::new();
        stack.add_layer(
            &tuning,
            &mut scene,
            &mut physics,
            0.0,
            0.0,
            tuning.box_size,
            tuning.box_size,
            // the first sweeping layer takes the complement of this
            Axis::Z,
        );
        log::info!("Session ready, awaiting start");
        Self {
            tuning,
            phase: GamePhase::AwaitingStart,
            stack,
            scene,
            physics,
            camera,
        }
    }

    /// The single discrete input event: starts the round on first occurrence,
    /// attempts a drop afterwards, does nothing once the round is over.
    pub fn on_activate(&mut self) {
        match self.phase.on_activate() {
            ActivateEffect::StartRound => {
                self.spawn_next_layer();
                self.phase = GamePhase::Dropping;
                log::info!("Round started");
            }
            ActivateEffect::AttemptDrop => self.attempt_drop(),
            ActivateEffect::Ignored => log::debug!("Activate ignored, round is over"),
        }
    }

    /// Viewport change: recompute projection parameters only.
    pub fn resize(&mut self, viewport_w: f32, viewport_h: f32) {
        self.camera.resize(viewport_w, viewport_h);
    }

    /// Layers the player has stacked on top of the foundation.
    pub fn score(&self) -> usize {
        self.stack.len().saturating_sub(2)
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    /// Advance the simulation by a frame delta and resynchronize visuals.
    pub fn update(&mut self, elapsed_ms: f32) {
        let dt = elapsed_ms / 1000.0;
        if self.phase == GamePhase::Dropping {
            self.advance_active_layer(dt);
            self.camera.follow(&self.tuning, self.stack.len(), dt);
        }
        self.physics.step(dt);
        self.sync_overhangs();
        self.despawn_sunk_overhangs();
    }

    /// Scripted sweep: the active layer's visual and body advance together at
    /// constant speed; physics never drives it.
    fn advance_active_layer(&mut self, dt: f32) {
        let Some(top) = self.stack.top() else {
            return;
        };
        let (axis, visual, body) = (top.axis, top.visual, top.body);
        let Some(node) = self.scene.node_mut(visual) else {
            return;
        };
        node.position += axis.unit() * (self.tuning.move_speed * dt);
        let position = node.position;
        self.physics.set_translation(body, position);

        if axis.of(position) > self.tuning.travel_limit {
            self.end_round("swept past the far edge");
        }
    }

    fn attempt_drop(&mut self) {
        let (Some(top), Some(below)) = (self.stack.top(), self.stack.below_top()) else {
            return;
        };
        let axis = top.axis;
        let (Some(top_node), Some(below_node)) =
            (self.scene.node(top.visual), self.scene.node(below.visual))
        else {
            return;
        };
        let top_slab = Slab::new(top_node.position, top.width, top.depth);
        let below_slab = Slab::new(below_node.position, below.width, below.depth);

        match plan_cut(axis, &top_slab, &below_slab) {
            CutOutcome::Missed => self.end_round("no overlap with the layer below"),
            CutOutcome::Split(plan) => self.apply_cut(axis, plan),
        }
    }

    /// Commit a successful cut: shrink the placed layer in place, detach the
    /// overhang, and send in the next layer on the complementary axis.
    fn apply_cut(&mut self, axis: Axis, plan: CutPlan) {
        let retained = plan.retained;
        log::debug!(
            "Cut along {}: retained {:.3} x {:.3} at {:?}",
            axis.as_str(),
            retained.width,
            retained.depth,
            retained.center,
        );

        if let Some(layer) = self.stack.top_mut() {
            layer.width = retained.width;
            layer.depth = retained.depth;
            let (visual, body) = (layer.visual, layer.body);
            if let Some(node) = self.scene.node_mut(visual) {
                node.position = retained.center;
                let mut scale = node.scale;
                axis.set(&mut scale, plan.scale_along_axis);
                node.scale = scale;
            }
            self.physics.set_translation(body, retained.center);
            self.physics
                .replace_box_shape(body, self.tuning.half_extents(retained.width, retained.depth));
        }

        if let Some(fragment) = plan.overhang {
            self.stack.add_overhang(
                &self.tuning,
                &mut self.scene,
                &mut self.physics,
                fragment.center.x,
                fragment.center.z,
                fragment.width,
                fragment.depth,
            );
        }

        log::info!(
            "Placed layer {} ({:.0}% kept)",
            self.stack.len().saturating_sub(1),
            plan.scale_along_axis * 100.0
        );
        self.spawn_next_layer();
    }

    /// Append the next sweeping layer: retained footprint, complementary
    /// axis, entering from the off-stack spawn offset at full speed.
    fn spawn_next_layer(&mut self) {
        let Some(top) = self.stack.top() else {
            return;
        };
        let next_axis = top.axis.other();
        let (width, depth) = (top.width, top.depth);
        let center = self
            .scene
            .node(top.visual)
            .map(|n| n.position)
            .unwrap_or(Vec3::ZERO);
        let retained = Slab::new(center, width, depth);
        let spawn = next_spawn_center(&retained, next_axis, self.tuning.spawn_offset, 0.0);
        self.stack.add_layer(
            &self.tuning,
            &mut self.scene,
            &mut self.physics,
            spawn.x,
            spawn.z,
            width,
            depth,
            next_axis,
        );
    }

    fn end_round(&mut self, reason: &str) {
        self.phase = GamePhase::GameOver;
        log::info!("Game over with {} placed layers: {reason}", self.score());
    }

    /// Physics is authoritative for detached fragments: copy each body's
    /// transform onto its scene node verbatim.
    fn sync_overhangs(&mut self) {
        for overhang in &self.stack.overhangs {
            let (position, rotation) = self.physics.transform(overhang.body);
            if let Some(node) = self.scene.node_mut(overhang.visual) {
                node.position = position;
                node.rotation = rotation;
            }
        }
    }

    /// Retention policy for fallen debris: fragments sinking below the
    /// despawn height give back their body and scene node.
    fn despawn_sunk_overhangs(&mut self) {
        let despawn_y = self.tuning.despawn_y;
        let physics = &mut self.physics;
        let scene = &mut self.scene;
        self.stack.overhangs.retain(|overhang| {
            let sunk = physics.translation(overhang.body).y < despawn_y;
            if sunk {
                physics.remove_body(overhang.body);
                scene.remove(overhang.visual);
                log::debug!("Despawned sunk fragment");
            }
            !sunk
        });
    }
}
