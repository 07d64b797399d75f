//! One animation frame of the flag: drag follow or spring-damper free flight.

use crate::bounds::BodyBounds;
use crate::config::RigConfig;
use crate::float::Float;
use crate::observer::{Axis, RigObserver};
use crate::render::Frame;
use crate::state::SimulationState;
use crate::vec::Vec2;

/// Net force on a free body: tether spring, damping, wind and gravity.
///
/// `time_ms` drives the wind phase.
pub fn free_flight_force<F: Float>(
    state: &SimulationState<F>,
    time_ms: F,
    config: &RigConfig<F>,
) -> Vec2<F> {
    let offset = state.pos - state.anchor;
    let distance = offset.length().max(config.min_distance);
    let extension = distance - state.rest_length;

    let spring = offset.scale(-config.spring_constant * extension / distance);
    let damping = state.vel.scale(-config.damping);
    let wind = (time_ms * config.wind_frequency).sin() * config.effective_wind_amplitude();

    spring + damping + Vec2::new(wind, config.gravity)
}

/// Advance the rig by one frame and return what to draw.
///
/// `dt` is wall-clock seconds since the previous frame and is clamped to
/// `[min_dt, max_dt]`. Before the container is measured nothing moves.
pub fn step<F: Float, O: RigObserver<F>>(
    state: &mut SimulationState<F>,
    dt: F,
    time_ms: F,
    config: &RigConfig<F>,
    observer: &mut O,
) -> Frame<F> {
    let dt = config.clamp_dt(dt);

    if state.initialized {
        if state.dragging {
            state.pos = BodyBounds::drag(state, config).clamp(state.pointer);
        } else {
            integrate_free(state, dt, time_ms, config, observer);
        }
    }

    let frame = Frame::from_state(state, config);
    observer.on_frame(&frame);
    frame
}

fn integrate_free<F: Float, O: RigObserver<F>>(
    state: &mut SimulationState<F>,
    dt: F,
    time_ms: F,
    config: &RigConfig<F>,
    observer: &mut O,
) {
    let force = free_flight_force(state, time_ms, config);

    // Semi-implicit Euler: velocity first, then position with the new velocity.
    state.vel = state.vel + force.scale(dt);
    state.pos = state.pos + state.vel.scale(dt);

    let bounds = BodyBounds::free(state, config);
    let clamped = bounds.clamp(state.pos);

    if clamped.x != state.pos.x {
        state.vel.x = -state.vel.x * config.restitution;
        observer.on_bounce(Axis::X, state.vel.x);
    }
    if clamped.y != state.pos.y {
        state.vel.y = -state.vel.y * config.restitution;
        observer.on_bounce(Axis::Y, state.vel.y);
    }
    state.pos = clamped;
}
