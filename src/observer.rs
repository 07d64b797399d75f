//! Hooks for watching what a rig does.

use crate::float::Float;
use crate::input::Key;
use crate::render::Frame;
use crate::state::PointerId;
use crate::vec::Vec2;

/// Axis a bounce happened on.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

/// Trait for observing rig events (debug logging or test recorders).
///
/// All methods default to no-ops.
pub trait RigObserver<F: Float> {
    /// Container was measured; `anchor` is the recomputed pivot.
    fn on_bounds(&mut self, _width: F, _height: F, _anchor: Vec2<F>) {}

    /// A pointer took ownership of the flag.
    fn on_drag_start(&mut self, _pointer: PointerId) {}

    /// The owning pointer released (or cancelled) the drag.
    fn on_drag_end(&mut self, _pointer: PointerId) {}

    /// A keyboard impulse was applied.
    fn on_impulse(&mut self, _key: Key) {}

    /// The body hit a bound; `velocity` is the post-bounce component.
    fn on_bounce(&mut self, _axis: Axis, _velocity: F) {}

    /// A frame was produced.
    fn on_frame(&mut self, _frame: &Frame<F>) {}
}

/// Observer that ignores everything.
pub struct NoOpRigObserver;

impl<F: Float> RigObserver<F> for NoOpRigObserver {}
