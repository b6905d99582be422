//! Deterministic placement core
//!
//! All gameplay geometry lives here. This module must stay pure:
//! - Plain-value inputs and outputs only
//! - No physics, scene, or platform dependencies
//! - No hidden state

pub mod cut;
pub mod state;

pub use cut::{CutOutcome, CutPlan, Slab, next_spawn_center, plan_cut};
pub use state::{ActivateEffect, Axis, GamePhase};
