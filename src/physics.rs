//! Rigid-body proxy boundary
//!
//! Wraps the rapier3d world behind the handful of operations the game needs:
//! create fixed/dynamic cuboid bodies, teleport, replace a collider shape
//! when a footprint changes (shapes are replaced, never resized in place),
//! read transforms back, and step. All positions cross this boundary as glam
//! types; nalgebra stays on the rapier side.

use std::num::NonZeroUsize;

use glam::{Quat, Vec3};
use nalgebra::{UnitQuaternion, Vector3};
use rapier3d::prelude::*;

fn to_na(v: Vec3) -> Vector3<f32> {
    Vector3::new(v.x, v.y, v.z)
}

fn to_glam(v: &Vector3<f32>) -> Vec3 {
    Vec3::new(v.x, v.y, v.z)
}

fn rot_to_glam(q: &UnitQuaternion<f32>) -> Quat {
    Quat::from_xyzw(q.coords.x, q.coords.y, q.coords.z, q.coords.w)
}

/// The physics world: gravity, broadphase, solver configuration set once at
/// startup, mutated only by stepping.
pub struct PhysicsWorld {
    gravity: Vector3<f32>,
    params: IntegrationParameters,
    pipeline: PhysicsPipeline,
    islands: IslandManager,
    broad_phase: DefaultBroadPhase,
    narrow_phase: NarrowPhase,
    bodies: RigidBodySet,
    colliders: ColliderSet,
    impulse_joints: ImpulseJointSet,
    multibody_joints: MultibodyJointSet,
    ccd: CCDSolver,
}

impl PhysicsWorld {
    pub fn new(gravity_y: f32, solver_iterations: usize) -> Self {
        let mut params = IntegrationParameters::default();
        if let Some(iterations) = NonZeroUsize::new(solver_iterations) {
            params.num_solver_iterations = iterations.get();
        }
        Self {
            gravity: Vector3::new(0.0, gravity_y, 0.0),
            params,
            pipeline: PhysicsPipeline::new(),
            islands: IslandManager::new(),
            broad_phase: DefaultBroadPhase::new(),
            narrow_phase: NarrowPhase::new(),
            bodies: RigidBodySet::new(),
            colliders: ColliderSet::new(),
            impulse_joints: ImpulseJointSet::new(),
            multibody_joints: MultibodyJointSet::new(),
            ccd: CCDSolver::new(),
        }
    }

    /// Create a fixed (immobile, zero effective mass) cuboid body
    pub fn add_fixed_box(&mut self, center: Vec3, half_extents: Vec3) -> RigidBodyHandle {
        let body = RigidBodyBuilder::fixed().translation(to_na(center)).build();
        let handle = self.bodies.insert(body);
        let collider =
            ColliderBuilder::cuboid(half_extents.x, half_extents.y, half_extents.z).build();
        self.colliders
            .insert_with_parent(collider, handle, &mut self.bodies);
        handle
    }

    /// Create a dynamic, gravity-affected cuboid body
    pub fn add_dynamic_box(
        &mut self,
        center: Vec3,
        half_extents: Vec3,
        density: f32,
    ) -> RigidBodyHandle {
        let body = RigidBodyBuilder::dynamic()
            .translation(to_na(center))
            .build();
        let handle = self.bodies.insert(body);
        let collider = ColliderBuilder::cuboid(half_extents.x, half_extents.y, half_extents.z)
            .density(density)
            .build();
        self.colliders
            .insert_with_parent(collider, handle, &mut self.bodies);
        handle
    }

    /// Teleport a body (scripted motion and cut recentring use this)
    pub fn set_translation(&mut self, handle: RigidBodyHandle, center: Vec3) {
        if let Some(body) = self.bodies.get_mut(handle) {
            body.set_translation(to_na(center), true);
        }
    }

    /// Swap a body's collider shape for a new cuboid. Attached shapes are
    /// immutable, so a footprint change means a replacement, not a resize.
    pub fn replace_box_shape(&mut self, handle: RigidBodyHandle, half_extents: Vec3) {
        let Some(body) = self.bodies.get(handle) else {
            return;
        };
        let attached: Vec<ColliderHandle> = body.colliders().to_vec();
        for collider_handle in attached {
            if let Some(collider) = self.colliders.get_mut(collider_handle) {
                collider.set_shape(SharedShape::cuboid(
                    half_extents.x,
                    half_extents.y,
                    half_extents.z,
                ));
            }
        }
    }

    pub fn translation(&self, handle: RigidBodyHandle) -> Vec3 {
        self.bodies
            .get(handle)
            .map(|body| to_glam(body.translation()))
            .unwrap_or(Vec3::ZERO)
    }

    /// Position and orientation of a body, for syncing visuals
    pub fn transform(&self, handle: RigidBodyHandle) -> (Vec3, Quat) {
        match self.bodies.get(handle) {
            Some(body) => (to_glam(body.translation()), rot_to_glam(body.rotation())),
            None => (Vec3::ZERO, Quat::IDENTITY),
        }
    }

    /// Advance the world by `dt` seconds. A non-positive delta performs no
    /// integration and leaves every body untouched.
    pub fn step(&mut self, dt: f32) {
        if dt <= 0.0 {
            return;
        }
        self.params.dt = dt;
        self.pipeline.step(
            &self.gravity,
            &self.params,
            &mut self.islands,
            &mut self.broad_phase,
            &mut self.narrow_phase,
            &mut self.bodies,
            &mut self.colliders,
            &mut self.impulse_joints,
            &mut self.multibody_joints,
            &mut self.ccd,
            &(),
            &(),
        );
    }

    /// Remove a body and its colliders from the world
    pub fn remove_body(&mut self, handle: RigidBodyHandle) {
        let _ = self.bodies.remove(
            handle,
            &mut self.islands,
            &mut self.colliders,
            &mut self.impulse_joints,
            &mut self.multibody_joints,
            true,
        );
    }

    pub fn body_count(&self) -> usize {
        self.bodies.len()
    }
}
