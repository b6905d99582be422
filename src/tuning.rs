//! Data-driven game balance
//!
//! Everything a designer might reasonably retune lives here, with defaults
//! matching the shipped game. An optional JSON file overrides the defaults.

use serde::{Deserialize, Serialize};

use crate::consts;

/// Gameplay and world tuning
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Tower geometry ===
    /// Height of every layer (world units)
    pub box_height: f32,
    /// Footprint of the foundation and every uncut layer
    pub box_size: f32,

    // === Scripted motion ===
    /// Sweep speed of the active layer (units/sec)
    pub move_speed: f32,
    /// Entry position of a new layer along its movement axis
    pub spawn_offset: f32,
    /// Sweeping past this point without a drop ends the round
    pub travel_limit: f32,

    // === Physics world ===
    /// Gravity along y (units/sec^2, negative is down)
    pub gravity_y: f32,
    /// Velocity solver iterations per step
    pub solver_iterations: usize,
    /// Collider density for falling fragments (mass scales with volume)
    pub debris_density: f32,
    /// Fragments whose center sinks below this height are despawned
    pub despawn_y: f32,

    // === Camera ===
    /// Width of the orthographic view volume
    pub view_width: f32,
    /// Eye rises while below `box_height * (layers - 2) + follow_margin`
    pub follow_margin: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            box_height: consts::BOX_HEIGHT,
            box_size: consts::BOX_SIZE,

            move_speed: consts::MOVE_SPEED,
            spawn_offset: consts::SPAWN_OFFSET,
            travel_limit: consts::TRAVEL_LIMIT,

            gravity_y: -10.0,
            solver_iterations: 40,
            debris_density: 5.0,
            despawn_y: -30.0,

            view_width: 10.0,
            follow_margin: 4.0,
        }
    }
}

impl Tuning {
    /// Load tuning from a JSON file, falling back to defaults if the file is
    /// missing or malformed.
    pub fn load(path: &str) -> Self {
        match std::fs::read_to_string(path)
            .ok()
            .and_then(|json| serde_json::from_str(&json).ok())
        {
            Some(tuning) => {
                log::info!("Loaded tuning from {path}");
                tuning
            }
            None => {
                log::warn!("No usable tuning at {path}, using defaults");
                Self::default()
            }
        }
    }

    /// Half-extents of an uncut layer's collider
    pub fn half_extents(&self, width: f32, depth: f32) -> glam::Vec3 {
        glam::Vec3::new(width / 2.0, self.box_height / 2.0, depth / 2.0)
    }

    /// Camera height above which following stops, for a tower of `layers`
    pub fn follow_ceiling(&self, layers: usize) -> f32 {
        self.box_height * (layers.saturating_sub(2)) as f32 + self.follow_margin
    }
}
