//! Block Stacker - a tower-stacking arcade game
//!
//! Core modules:
//! - `sim`: Deterministic placement geometry (the cut algorithm, play phases)
//! - `stack`: Canonical tower model (layers + falling overhangs)
//! - `scene`: Visual proxy boundary (retained box nodes for a renderer)
//! - `physics`: Rigid-body proxy boundary (rapier3d world wrapper)
//! - `session`: Game session tying the above into a frame loop
//! - `tuning`: Data-driven game balance

pub mod camera;
pub mod physics;
pub mod scene;
pub mod session;
pub mod sim;
pub mod stack;
pub mod tuning;

pub use session::GameSession;
pub use sim::{Axis, CutOutcome, GamePhase};
pub use tuning::Tuning;

/// Structural constants shared by tuning defaults and tests
pub mod consts {
    /// Height of every layer (world units)
    pub const BOX_HEIGHT: f32 = 1.0;
    /// Footprint of the foundation layer and every uncut layer
    pub const BOX_SIZE: f32 = 3.0;
    /// Scripted sweep speed of the active layer (units per second)
    pub const MOVE_SPEED: f32 = 8.0;
    /// Where a new layer enters along its movement axis
    pub const SPAWN_OFFSET: f32 = -10.0;
    /// Sweeping past this point without a drop ends the round
    pub const TRAVEL_LIMIT: f32 = 10.0;
    /// Frame delta used by the headless demo loop (milliseconds)
    pub const DEMO_FRAME_MS: f32 = 1000.0 / 60.0;
}
