//! Block Stacker entry point
//!
//! Runs a headless demo session: a scripted autopilot drops each layer as it
//! sweeps across the tower center, so the whole placement/cut/debris loop is
//! exercised without a window. A renderer would consume `session.scene` and
//! `session.camera` after each update.

use block_stacker::consts::DEMO_FRAME_MS;
use block_stacker::{GamePhase, GameSession, Tuning};

fn main() {
    env_logger::init();
    log::info!("Block Stacker (headless demo) starting...");

    let tuning = match std::env::args().nth(1) {
        Some(path) => Tuning::load(&path),
        None => Tuning::default(),
    };

    let mut session = GameSession::new(tuning, 1280.0, 720.0);
    session.on_activate();

    let target_layers = 12;
    let mut frames = 0u32;
    while session.phase == GamePhase::Dropping
        && session.score() < target_layers
        && frames < 20_000
    {
        if should_drop(&session) {
            session.on_activate();
        }
        session.update(DEMO_FRAME_MS);
        frames += 1;
    }

    log::info!(
        "Demo finished after {frames} frames: {} layers placed",
        session.score()
    );
    println!(
        "Tower: {} layers, {} loose fragments still falling, camera at y={:.2}",
        session.stack.len(),
        session.stack.overhangs.len(),
        session.camera.eye.y,
    );
}

/// Drop when this frame's sweep crosses the center of the layer below.
fn should_drop(session: &GameSession) -> bool {
    let (Some(top), Some(below)) = (session.stack.top(), session.stack.below_top()) else {
        return false;
    };
    let (Some(top_node), Some(below_node)) = (
        session.scene.node(top.visual),
        session.scene.node(below.visual),
    ) else {
        return false;
    };
    let axis = top.axis;
    let delta = axis.of(top_node.position) - axis.of(below_node.position);
    let half_step = session.tuning().move_speed * (DEMO_FRAME_MS / 1000.0) / 2.0;
    delta.abs() <= half_step + 1e-4
}
