//! Mutable simulation record for a single flag rig.

use crate::float::Float;
use crate::vec::Vec2;

/// Device-assigned pointer identifier (`PointerEvent.pointerId`).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct PointerId(pub i32);

/// Container rectangle in client (viewport) coordinates.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct ContainerRect<F: Float> {
    pub left: F,
    pub top: F,
    pub width: F,
    pub height: F,
}

impl<F: Float> ContainerRect<F> {
    pub fn new(left: F, top: F, width: F, height: F) -> Self {
        ContainerRect { left, top, width, height }
    }

    /// Rect of the given size at the viewport origin.
    pub fn sized(width: F, height: F) -> Self {
        ContainerRect::new(F::zero(), F::zero(), width, height)
    }

    /// Finite and non-negative in both dimensions.
    pub fn is_measurable(&self) -> bool {
        self.left.is_finite()
            && self.top.is_finite()
            && self.width.is_finite()
            && self.height.is_finite()
            && self.width >= F::zero()
            && self.height >= F::zero()
    }
}

/// Everything the rig mutates between frames.
///
/// Positions are container-local. The anchor belongs to the bounds tracker and
/// is only read by the integrator.
#[derive(Clone, Debug, PartialEq)]
pub struct SimulationState<F: Float> {
    pub width: F,
    pub height: F,
    /// Client-space top-left of the container, for pointer conversion.
    pub origin: Vec2<F>,
    pub anchor: Vec2<F>,
    pub pos: Vec2<F>,
    pub vel: Vec2<F>,
    pub pointer: Vec2<F>,
    pub pointer_id: Option<PointerId>,
    pub dragging: bool,
    pub rest_length: F,
    /// Set once the container has been measured.
    pub initialized: bool,
}

impl<F: Float> SimulationState<F> {
    pub fn new(rest_length: F) -> Self {
        SimulationState {
            width: F::zero(),
            height: F::zero(),
            origin: Vec2::zero(),
            anchor: Vec2::zero(),
            pos: Vec2::zero(),
            vel: Vec2::zero(),
            pointer: Vec2::zero(),
            pointer_id: None,
            dragging: false,
            rest_length,
            initialized: false,
        }
    }

    /// Client coordinates to container-local.
    pub fn to_local(&self, client: Vec2<F>) -> Vec2<F> {
        client - self.origin
    }

    /// True when `pointer` owns the active drag.
    pub fn is_owned_by(&self, pointer: PointerId) -> bool {
        self.dragging && self.pointer_id == Some(pointer)
    }
}
