//! Per-frame output: flag transform, tether curve and anchor marker.

use alloc::format;
use alloc::string::String;

use crate::config::RigConfig;
use crate::float::Float;
use crate::state::SimulationState;
use crate::vec::Vec2;

/// Quadratic Bézier from the anchor to the body.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TetherCurve<F: Float> {
    pub start: Vec2<F>,
    pub control: Vec2<F>,
    pub end: Vec2<F>,
    /// Downward offset of the control point from the chord midpoint.
    pub sag: F,
}

impl<F: Float> TetherCurve<F> {
    /// SVG path data, `M ax ay Q cx cy bx by`, two decimals.
    pub fn svg_path(&self) -> String {
        format!(
            "M {:.2} {:.2} Q {:.2} {:.2} {:.2} {:.2}",
            self.start.x, self.start.y, self.control.x, self.control.y, self.end.x, self.end.y,
        )
    }
}

/// Everything the host needs to draw one frame.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Frame<F: Float> {
    /// Top-left placement of the flag element.
    pub translate: Vec2<F>,
    /// Flag rotation in degrees; zero when hanging straight down.
    pub rotation_deg: F,
    pub tether: TetherCurve<F>,
    pub anchor: Vec2<F>,
}

impl<F: Float> Frame<F> {
    /// Build the frame for the current state.
    pub fn from_state(state: &SimulationState<F>, config: &RigConfig<F>) -> Self {
        let offset = state.pos - state.anchor;
        let rotation_deg = F::atan2(offset.y, offset.x).to_degrees() - F::from_f64(90.0);

        let sag = (config.sag_base
            + state.vel.x.abs() * config.sag_per_speed
            + offset.x.abs() * config.sag_per_offset)
            .min(config.sag_max);
        let mid = state.anchor.midpoint(state.pos);

        Frame {
            translate: state.pos - config.half_extents,
            rotation_deg,
            tether: TetherCurve {
                start: state.anchor,
                control: Vec2::new(mid.x, mid.y + sag),
                end: state.pos,
                sag,
            },
            anchor: state.anchor,
        }
    }

    /// CSS `transform` value for the flag element.
    pub fn css_transform(&self) -> String {
        format!(
            "translate({}px, {}px) rotate({:.2}deg)",
            self.translate.x, self.translate.y, self.rotation_deg,
        )
    }

    /// Anchor marker `cx`/`cy` attribute values.
    pub fn anchor_marker(&self) -> (String, String) {
        (format!("{:.2}", self.anchor.x), format!("{:.2}", self.anchor.y))
    }
}
