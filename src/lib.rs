//! Physics for a draggable flag hanging from an elastic tether.
//!
//! `flagrig` drives a small decorative widget: a flag suspended below an anchor
//! by a spring, swayed by wind, pulled down by gravity, bounced off the edges
//! of its container, dragged by a pointer and kicked by the keyboard. The host
//! (a browser page, usually through `demo-wasm`) measures the container,
//! forwards input, calls `tick` once per animation frame and draws the
//! returned [`Frame`].
//!
//! # Features
//!
//! - **Step function**: `integrator::step` is state + dt in, frame out; no display needed
//! - **Single-owner drag**: one pointer at a time, velocity from pointer motion
//! - **Keyboard impulses**: arrows nudge, Space launches
//! - **Reduced motion**: switches off the ambient wind
//! - **Observable**: hook drags, bounces and frames via the `RigObserver` trait
//! - **`no_std` compatible**: works in WASM with only `alloc`

#![no_std]

extern crate alloc;

pub mod float;
pub mod vec;
pub mod state;
pub mod bounds;
pub mod input;
pub mod integrator;
pub mod render;
pub mod rig;
pub mod observer;
pub mod config;
pub mod error;

// Re-export primary API
pub use float::Float;
pub use vec::Vec2;
pub use state::{ContainerRect, PointerId, SimulationState};
pub use bounds::{BodyBounds, recompute_bounds};
pub use input::{InputResponse, Key};
pub use render::{Frame, TetherCurve};
pub use rig::FlagRig;
pub use config::RigConfig;
pub use observer::{Axis, NoOpRigObserver, RigObserver};
pub use error::RigError;
