//! An owned flag rig: state, config, clock and observer for one mounted widget.

use crate::bounds::recompute_bounds;
use crate::config::RigConfig;
use crate::error::RigError;
use crate::float::Float;
use crate::input::{self, InputResponse, Key};
use crate::integrator;
use crate::observer::{NoOpRigObserver, RigObserver};
use crate::render::Frame;
use crate::state::{ContainerRect, PointerId, SimulationState};
use crate::vec::Vec2;

/// A mounted flag widget.
///
/// Create it on mount, feed it host events and one `tick` per animation
/// frame, drop it on unmount.
///
/// ```
/// use flagrig::{ContainerRect, FlagRig, RigConfig};
///
/// let mut rig = FlagRig::new(RigConfig::<f32>::new(), 0.0).unwrap();
/// rig.resize(ContainerRect::sized(320.0, 180.0));
/// let frame = rig.tick(16.0);
/// assert!(frame.tether.svg_path().starts_with("M "));
/// ```
pub struct FlagRig<F: Float, O: RigObserver<F> = NoOpRigObserver> {
    state: SimulationState<F>,
    config: RigConfig<F>,
    observer: O,
    previous_ms: F,
    last_rect: Option<ContainerRect<F>>,
}

impl<F: Float> FlagRig<F, NoOpRigObserver> {
    /// Mount a rig at host time `now_ms`.
    pub fn new(config: RigConfig<F>, now_ms: F) -> Result<Self, RigError> {
        FlagRig::with_observer(config, now_ms, NoOpRigObserver)
    }
}

impl<F: Float, O: RigObserver<F>> FlagRig<F, O> {
    /// Mount a rig that reports to `observer`.
    pub fn with_observer(config: RigConfig<F>, now_ms: F, observer: O) -> Result<Self, RigError> {
        config.validate()?;
        Ok(FlagRig {
            state: SimulationState::new(config.rest_length),
            config,
            observer,
            previous_ms: now_ms,
            last_rect: None,
        })
    }

    /// Container was measured, resized or moved. Pointer coordinates are
    /// made local with this rect's origin until the next call.
    pub fn resize(&mut self, rect: ContainerRect<F>) {
        if rect.is_measurable() {
            self.last_rect = Some(rect);
        }
        recompute_bounds(&mut self.state, rect, &self.config, &mut self.observer);
    }

    pub fn pointer_down(&mut self, pointer: PointerId, client: Vec2<F>) -> InputResponse {
        input::begin_drag(&mut self.state, pointer, client, &mut self.observer)
    }

    pub fn pointer_move(&mut self, pointer: PointerId, client: Vec2<F>) -> InputResponse {
        input::update_drag(&mut self.state, pointer, client, &self.config)
    }

    pub fn pointer_up(&mut self, pointer: PointerId) -> InputResponse {
        input::end_drag(&mut self.state, pointer, &mut self.observer)
    }

    /// Cancelled pointers release the same way as lifted ones.
    pub fn pointer_cancel(&mut self, pointer: PointerId) -> InputResponse {
        self.pointer_up(pointer)
    }

    /// Keyboard input by DOM key name. Unknown keys are `Ignored` so the page
    /// keeps its default handling.
    pub fn key_down(&mut self, key: &str) -> InputResponse {
        match Key::from_dom(key) {
            Some(key) => self.key(key),
            None => InputResponse::Ignored,
        }
    }

    pub fn key(&mut self, key: Key) -> InputResponse {
        input::apply_key_impulse(&mut self.state, key, &self.config, &mut self.observer)
    }

    /// Advance to host time `now_ms` and return the frame to draw.
    pub fn tick(&mut self, now_ms: F) -> Frame<F> {
        let dt = (now_ms - self.previous_ms) / F::from_f64(1000.0);
        self.previous_ms = now_ms;
        integrator::step(&mut self.state, dt, now_ms, &self.config, &mut self.observer)
    }

    /// Change the reduced-motion preference.
    ///
    /// A change re-mounts the rig: state is rebuilt, the last measured
    /// container is applied again and the clock restarts at `now_ms`.
    pub fn set_reduced_motion(&mut self, reduced_motion: bool, now_ms: F) {
        if self.config.reduced_motion == reduced_motion {
            return;
        }
        self.config.reduced_motion = reduced_motion;
        self.state = SimulationState::new(self.config.rest_length);
        self.previous_ms = now_ms;
        if let Some(rect) = self.last_rect {
            recompute_bounds(&mut self.state, rect, &self.config, &mut self.observer);
        }
    }

    /// Frame for the current state without advancing time.
    pub fn frame(&self) -> Frame<F> {
        Frame::from_state(&self.state, &self.config)
    }

    pub fn state(&self) -> &SimulationState<F> { &self.state }
    pub fn config(&self) -> &RigConfig<F> { &self.config }
    pub fn observer(&self) -> &O { &self.observer }
    pub fn observer_mut(&mut self) -> &mut O { &mut self.observer }
    pub fn is_dragging(&self) -> bool { self.state.dragging }
}
