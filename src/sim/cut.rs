//! The overlap-cut / overhang-split algorithm
//!
//! Pure geometry: given the sweeping top layer and the stable layer beneath
//! it at the instant of a drop, compute the retained region, the discarded
//! fragment, and where the next layer enters. Nothing here touches the
//! physics world or the scene.

use glam::Vec3;

use super::state::Axis;

/// Horizontal footprint of a layer: center plus extents along x and z.
/// The vertical extent is the fixed per-layer box height and is not cut.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Slab {
    pub center: Vec3,
    pub width: f32,
    pub depth: f32,
}

impl Slab {
    pub fn new(center: Vec3, width: f32, depth: f32) -> Self {
        Self {
            center,
            width,
            depth,
        }
    }

    /// Extent along the given horizontal axis
    pub fn extent(&self, axis: Axis) -> f32 {
        match axis {
            Axis::X => self.width,
            Axis::Z => self.depth,
        }
    }

    pub fn set_extent(&mut self, axis: Axis, value: f32) {
        match axis {
            Axis::X => self.width = value,
            Axis::Z => self.depth = value,
        }
    }

    /// (min, max) edges along the given axis
    pub fn edges(&self, axis: Axis) -> (f32, f32) {
        let c = axis.of(self.center);
        let half = self.extent(axis) / 2.0;
        (c - half, c + half)
    }
}

/// Result of a successful drop: the kept region and the detached fragment
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CutPlan {
    /// The top layer's footprint after the cut, recentred over the layer below
    pub retained: Slab,
    /// Visual rescale factor along the cut axis (`overlap / size`)
    pub scale_along_axis: f32,
    /// Discarded fragment, flush against the retained edge it overhung.
    /// `None` on perfect alignment: a zero-extent fragment is degenerate and
    /// would become a zero-area rigid body, so it is skipped outright.
    pub overhang: Option<Slab>,
    /// Movement axis for the next layer (complement of the cut axis)
    pub next_axis: Axis,
}

/// Outcome of a drop action
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CutOutcome {
    /// No overlap with the layer below. This is the normal terminal state of
    /// the round, not a fault.
    Missed,
    Split(CutPlan),
}

/// Cut the sweeping `top` layer against the stable `below` layer.
///
/// `axis` is the axis `top` sweeps along. The retained footprint shrinks to
/// the overlapping region and recentres over `below`; the non-overlapping
/// remainder becomes the overhang. Plain f32 arithmetic, no snapping.
pub fn plan_cut(axis: Axis, top: &Slab, below: &Slab) -> CutOutcome {
    let delta = axis.of(top.center) - axis.of(below.center);
    let overhang_size = delta.abs();
    let size = top.extent(axis);
    let overlap = size - overhang_size;

    if overlap <= 0.0 {
        return CutOutcome::Missed;
    }

    let mut retained = *top;
    retained.set_extent(axis, overlap);
    axis.set(&mut retained.center, axis.of(top.center) - delta / 2.0);

    let overhang = (overhang_size > 0.0).then(|| {
        let mut fragment = retained;
        fragment.set_extent(axis, overhang_size);
        let shift = delta.signum() * (overlap / 2.0 + overhang_size / 2.0);
        axis.set(&mut fragment.center, axis.of(retained.center) + shift);
        fragment
    });

    CutOutcome::Split(CutPlan {
        retained,
        scale_along_axis: overlap / size,
        overhang,
        next_axis: axis.other(),
    })
}

/// Spawn position for the layer after a successful cut: it keeps the retained
/// center along the just-used axis and enters from the off-stack offset along
/// its own (perpendicular) movement axis.
pub fn next_spawn_center(retained: &Slab, next_axis: Axis, spawn_offset: f32, y: f32) -> Vec3 {
    let mut center = retained.center;
    center.y = y;
    next_axis.set(&mut center, spawn_offset);
    center
}
