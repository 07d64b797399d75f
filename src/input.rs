//! Pointer drag and keyboard impulses.
//!
//! Dragging hands position control to the pointer and derives velocity from
//! its motion, so releasing flings the flag. Keys only ever add velocity.

use crate::config::RigConfig;
use crate::float::Float;
use crate::observer::RigObserver;
use crate::state::{PointerId, SimulationState};
use crate::vec::Vec2;

/// Whether an event was used. `Consumed` tells the host to call
/// `preventDefault()` (and, for pointer-down, to capture the pointer).
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum InputResponse {
    Consumed,
    Ignored,
}

impl InputResponse {
    pub fn is_consumed(self) -> bool {
        self == InputResponse::Consumed
    }
}

/// Keys the flag reacts to.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Key {
    ArrowLeft,
    ArrowRight,
    ArrowUp,
    ArrowDown,
    /// Space: a stronger upward kick.
    Launch,
}

impl Key {
    /// Map a DOM `KeyboardEvent.key` value.
    pub fn from_dom(key: &str) -> Option<Key> {
        match key {
            "ArrowLeft" => Some(Key::ArrowLeft),
            "ArrowRight" => Some(Key::ArrowRight),
            "ArrowUp" => Some(Key::ArrowUp),
            "ArrowDown" => Some(Key::ArrowDown),
            " " => Some(Key::Launch),
            _ => None,
        }
    }

    /// Velocity change this key applies.
    pub fn impulse<F: Float>(self, config: &RigConfig<F>) -> Vec2<F> {
        let k = config.key_impulse;
        match self {
            Key::ArrowLeft => Vec2::new(-k, F::zero()),
            Key::ArrowRight => Vec2::new(k, F::zero()),
            Key::ArrowUp => Vec2::new(F::zero(), -k),
            Key::ArrowDown => Vec2::new(F::zero(), k),
            Key::Launch => Vec2::new(F::zero(), -(k * config.launch_multiplier)),
        }
    }
}

/// Start a drag. Refused while another pointer owns the flag or before the
/// container has been measured.
pub fn begin_drag<F: Float, O: RigObserver<F>>(
    state: &mut SimulationState<F>,
    pointer: PointerId,
    client: Vec2<F>,
    observer: &mut O,
) -> InputResponse {
    if state.dragging || !state.initialized || !client.is_finite() {
        return InputResponse::Ignored;
    }

    state.dragging = true;
    state.pointer_id = Some(pointer);
    state.pointer = state.to_local(client);
    observer.on_drag_start(pointer);
    InputResponse::Consumed
}

/// Follow the owning pointer. Velocity becomes the per-event displacement
/// times `drag_velocity_scale`.
pub fn update_drag<F: Float>(
    state: &mut SimulationState<F>,
    pointer: PointerId,
    client: Vec2<F>,
    config: &RigConfig<F>,
) -> InputResponse {
    if !state.is_owned_by(pointer) || !client.is_finite() {
        return InputResponse::Ignored;
    }

    let next = state.to_local(client);
    state.vel = (next - state.pointer).scale(config.drag_velocity_scale);
    state.pointer = next;
    InputResponse::Consumed
}

/// Release the drag (pointer-up or pointer-cancel). Only the owner can.
pub fn end_drag<F: Float, O: RigObserver<F>>(
    state: &mut SimulationState<F>,
    pointer: PointerId,
    observer: &mut O,
) -> InputResponse {
    if !state.is_owned_by(pointer) {
        return InputResponse::Ignored;
    }

    state.dragging = false;
    state.pointer_id = None;
    observer.on_drag_end(pointer);
    InputResponse::Consumed
}

/// Add a keyboard impulse to the body's velocity.
pub fn apply_key_impulse<F: Float, O: RigObserver<F>>(
    state: &mut SimulationState<F>,
    key: Key,
    config: &RigConfig<F>,
    observer: &mut O,
) -> InputResponse {
    if !state.initialized {
        return InputResponse::Ignored;
    }

    state.vel = state.vel + key.impulse(config);
    observer.on_impulse(key);
    InputResponse::Consumed
}
