//! Container measurement: anchor placement and body re-clamping on resize.

use crate::config::RigConfig;
use crate::float::Float;
use crate::observer::RigObserver;
use crate::state::{ContainerRect, SimulationState};
use crate::vec::Vec2;

/// Inclusive box the body centre may occupy.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct BodyBounds<F: Float> {
    pub min: Vec2<F>,
    pub max: Vec2<F>,
}

impl<F: Float> BodyBounds<F> {
    /// Free-flight bounds: inside the container less half-extents, and at least
    /// `top_clearance` below the anchor.
    pub fn free(state: &SimulationState<F>, config: &RigConfig<F>) -> Self {
        Self::with_clearance(state, config, config.top_clearance)
    }

    /// Bounds applied to the pointer while dragging.
    pub fn drag(state: &SimulationState<F>, config: &RigConfig<F>) -> Self {
        Self::with_clearance(state, config, config.drag_top_clearance)
    }

    fn with_clearance(state: &SimulationState<F>, config: &RigConfig<F>, clearance: F) -> Self {
        let half = config.half_extents;
        BodyBounds {
            min: Vec2::new(half.x, state.anchor.y + clearance),
            max: Vec2::new(state.width - half.x, state.height - half.y),
        }
    }

    pub fn clamp(&self, p: Vec2<F>) -> Vec2<F> {
        Vec2::new(
            p.x.clamp(self.min.x, self.max.x),
            p.y.clamp(self.min.y, self.max.y),
        )
    }
}

/// Anchor for a container of the given width.
pub fn anchor_for<F: Float>(width: F, config: &RigConfig<F>) -> Vec2<F> {
    let x = (width * config.anchor_fraction)
        .clamp(config.anchor_min_x, width - config.anchor_right_inset);
    Vec2::new(x, config.anchor_y)
}

/// Re-measure the container.
///
/// The first measurement hangs the body straight below the anchor at rest
/// length. Later ones keep the body where it is, clamped into the new box.
/// Unmeasurable rects are ignored.
pub fn recompute_bounds<F: Float, O: RigObserver<F>>(
    state: &mut SimulationState<F>,
    rect: ContainerRect<F>,
    config: &RigConfig<F>,
    observer: &mut O,
) {
    if !rect.is_measurable() {
        return;
    }

    state.width = rect.width;
    state.height = rect.height;
    state.origin = Vec2::new(rect.left, rect.top);
    state.anchor = anchor_for(rect.width, config);

    if state.initialized {
        state.pos = BodyBounds::free(state, config).clamp(state.pos);
    } else {
        state.pos = Vec2::new(state.anchor.x, state.anchor.y + state.rest_length);
        state.initialized = true;
    }

    observer.on_bounds(state.width, state.height, state.anchor);
}
