//! Play phases and the horizontal movement axis

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Horizontal axis a layer sweeps along, alternating each layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Axis {
    X,
    Z,
}

impl Axis {
    /// The complementary axis (x <-> z)
    pub fn other(self) -> Self {
        match self {
            Axis::X => Axis::Z,
            Axis::Z => Axis::X,
        }
    }

    /// Component of `v` along this axis
    pub fn of(self, v: Vec3) -> f32 {
        match self {
            Axis::X => v.x,
            Axis::Z => v.z,
        }
    }

    /// Overwrite the component of `v` along this axis
    pub fn set(self, v: &mut Vec3, value: f32) {
        match self {
            Axis::X => v.x = value,
            Axis::Z => v.z = value,
        }
    }

    /// Unit vector along this axis
    pub fn unit(self) -> Vec3 {
        match self {
            Axis::X => Vec3::X,
            Axis::Z => Vec3::Z,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Axis::X => "x",
            Axis::Z => "z",
        }
    }
}

/// Current phase of play
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    /// Foundation placed, waiting for the first activation
    #[default]
    AwaitingStart,
    /// A layer is sweeping; each activation attempts a drop
    Dropping,
    /// Run ended (a drop had no overlap, or the layer swept past the limit)
    GameOver,
}

/// What a discrete activate event means in the current phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivateEffect {
    /// Spawn the first moving layer and begin play
    StartRound,
    /// Attempt to place the active layer
    AttemptDrop,
    /// Nothing to do (round already over)
    Ignored,
}

impl GamePhase {
    /// Pure transition semantics for the single input event, independent of
    /// any UI event loop.
    pub fn on_activate(self) -> ActivateEffect {
        match self {
            GamePhase::AwaitingStart => ActivateEffect::StartRound,
            GamePhase::Dropping => ActivateEffect::AttemptDrop,
            GamePhase::GameOver => ActivateEffect::Ignored,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_axis_alternates() {
        assert_eq!(Axis::X.other(), Axis::Z);
        assert_eq!(Axis::Z.other(), Axis::X);
        assert_eq!(Axis::X.other().other(), Axis::X);
    }

    #[test]
    fn test_axis_accessors() {
        let mut v = Vec3::new(1.0, 2.0, 3.0);
        assert_eq!(Axis::X.of(v), 1.0);
        assert_eq!(Axis::Z.of(v), 3.0);
        Axis::Z.set(&mut v, 9.0);
        assert_eq!(v, Vec3::new(1.0, 2.0, 9.0));
    }

    #[test]
    fn test_activate_semantics() {
        assert_eq!(
            GamePhase::AwaitingStart.on_activate(),
            ActivateEffect::StartRound
        );
        assert_eq!(GamePhase::Dropping.on_activate(), ActivateEffect::AttemptDrop);
        assert_eq!(GamePhase::GameOver.on_activate(), ActivateEffect::Ignored);
    }
}
