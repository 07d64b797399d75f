//! Tuning constants and the reduced-motion switch for a flag rig.

use crate::error::RigError;
use crate::float::Float;
use crate::vec::Vec2;

/// Configuration for one flag rig.
///
/// The numbers are hand-tuned for a ~58x40 px flag hanging in a small header
/// container. Units are CSS pixels and seconds; wind time is in milliseconds.
///
/// # Builder Pattern
/// ```
/// use flagrig::config::RigConfig;
///
/// let config: RigConfig<f32> = RigConfig::new()
///     .with_reduced_motion(true)
///     .with_rest_length(60.0)
///     .with_gravity(500.0);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct RigConfig<F: Float> {
    /// Tether length at which the spring pulls with zero force. Default: 52.
    pub rest_length: F,
    /// Half width/height of the flag, used for clamping. Default: (28, 18).
    pub half_extents: Vec2<F>,

    /// Spring constant of the tether. Default: 20.
    pub spring_constant: F,
    /// Linear damping applied per axis. Default: 4.6.
    pub damping: F,
    /// Downward acceleration. Default: 680.
    pub gravity: F,
    /// Peak horizontal wind force. Default: 44.
    pub wind_amplitude: F,
    /// Wind phase rate in radians per millisecond. Default: 0.0018.
    pub wind_frequency: F,
    /// Velocity kept (sign inverted) after hitting a bound. Default: 0.34.
    pub restitution: F,
    /// Distance floor for the spring direction. Default: 0.001.
    pub min_distance: F,

    /// Smallest frame step in seconds. Default: 0.001.
    pub min_dt: F,
    /// Largest frame step in seconds. Default: 0.033.
    pub max_dt: F,

    /// Pointer displacement per event to velocity. Default: 30.
    pub drag_velocity_scale: F,
    /// Arrow-key impulse. Default: 110.
    pub key_impulse: F,
    /// Launch key impulse multiplier (applied upward). Default: 1.2.
    pub launch_multiplier: F,

    /// Anchor x as a fraction of container width. Default: 0.6.
    pub anchor_fraction: F,
    /// Smallest anchor x. Default: 34.
    pub anchor_min_x: F,
    /// Anchor x keeps at least this far from the right edge. Default: 24.
    pub anchor_right_inset: F,
    /// Anchor y offset from the container top. Default: 10.
    pub anchor_y: F,
    /// Free-flight minimum distance of the body below the anchor. Default: 16.
    pub top_clearance: F,
    /// Minimum distance below the anchor while dragging. Default: 18.
    pub drag_top_clearance: F,

    /// Sag with the body still and straight below the anchor. Default: 7.
    pub sag_base: F,
    /// Sag added per unit of horizontal speed. Default: 0.014.
    pub sag_per_speed: F,
    /// Sag added per unit of horizontal offset from the anchor. Default: 0.12.
    pub sag_per_offset: F,
    /// Sag cap. Default: 24.
    pub sag_max: F,

    /// Suppress ambient wind. Sourced from the page's accessibility preference.
    pub reduced_motion: bool,
}

impl<F: Float> RigConfig<F> {
    /// Create a config with the stock tuning.
    pub fn new() -> Self {
        RigConfig {
            rest_length: F::from_f64(52.0),
            half_extents: Vec2::new(F::from_f64(28.0), F::from_f64(18.0)),
            spring_constant: F::from_f64(20.0),
            damping: F::from_f64(4.6),
            gravity: F::from_f64(680.0),
            wind_amplitude: F::from_f64(44.0),
            wind_frequency: F::from_f64(0.0018),
            restitution: F::from_f64(0.34),
            min_distance: F::from_f64(0.001),
            min_dt: F::from_f64(0.001),
            max_dt: F::from_f64(0.033),
            drag_velocity_scale: F::from_f64(30.0),
            key_impulse: F::from_f64(110.0),
            launch_multiplier: F::from_f64(1.2),
            anchor_fraction: F::from_f64(0.6),
            anchor_min_x: F::from_f64(34.0),
            anchor_right_inset: F::from_f64(24.0),
            anchor_y: F::from_f64(10.0),
            top_clearance: F::from_f64(16.0),
            drag_top_clearance: F::from_f64(18.0),
            sag_base: F::from_f64(7.0),
            sag_per_speed: F::from_f64(0.014),
            sag_per_offset: F::from_f64(0.12),
            sag_max: F::from_f64(24.0),
            reduced_motion: false,
        }
    }

    pub fn with_reduced_motion(mut self, reduced_motion: bool) -> Self {
        self.reduced_motion = reduced_motion;
        self
    }

    pub fn with_rest_length(mut self, rest_length: F) -> Self {
        self.rest_length = rest_length;
        self
    }

    pub fn with_spring_constant(mut self, spring_constant: F) -> Self {
        self.spring_constant = spring_constant;
        self
    }

    pub fn with_damping(mut self, damping: F) -> Self {
        self.damping = damping;
        self
    }

    pub fn with_gravity(mut self, gravity: F) -> Self {
        self.gravity = gravity;
        self
    }

    pub fn with_wind_amplitude(mut self, wind_amplitude: F) -> Self {
        self.wind_amplitude = wind_amplitude;
        self
    }

    pub fn with_restitution(mut self, restitution: F) -> Self {
        self.restitution = restitution;
        self
    }

    /// Set the frame step clamp in seconds.
    pub fn with_dt_range(mut self, min_dt: F, max_dt: F) -> Self {
        self.min_dt = min_dt;
        self.max_dt = max_dt;
        self
    }

    pub fn with_half_extents(mut self, half_extents: Vec2<F>) -> Self {
        self.half_extents = half_extents;
        self
    }

    /// Disable spring, damping, gravity and wind. Only impulses and bounds remain.
    pub fn without_forces(self) -> Self {
        self.with_spring_constant(F::zero())
            .with_damping(F::zero())
            .with_gravity(F::zero())
            .with_wind_amplitude(F::zero())
    }

    /// Wind amplitude in effect, zero under reduced motion.
    pub fn effective_wind_amplitude(&self) -> F {
        if self.reduced_motion {
            F::zero()
        } else {
            self.wind_amplitude
        }
    }

    /// Clamp a raw frame step into `[min_dt, max_dt]`. NaN maps to `min_dt`.
    pub fn clamp_dt(&self, dt: F) -> F {
        if dt > self.max_dt {
            self.max_dt
        } else if dt > self.min_dt {
            dt
        } else {
            self.min_dt
        }
    }

    /// Check the config for values the integrator cannot work with.
    pub fn validate(&self) -> Result<(), RigError> {
        if !(self.rest_length > F::zero()) || !self.rest_length.is_finite() {
            return Err(RigError::InvalidRestLength);
        }
        if !(self.min_dt > F::zero()) || !(self.min_dt <= self.max_dt) || !self.max_dt.is_finite() {
            return Err(RigError::InvalidTimeStep);
        }
        if !(self.restitution >= F::zero()) || !(self.restitution <= F::one()) {
            return Err(RigError::InvalidRestitution);
        }
        if !(self.half_extents.x > F::zero()) || !(self.half_extents.y > F::zero()) {
            return Err(RigError::InvalidHalfExtents);
        }
        let constants = [
            ("spring constant", self.spring_constant),
            ("damping", self.damping),
            ("gravity", self.gravity),
            ("wind amplitude", self.wind_amplitude),
            ("minimum distance", self.min_distance),
        ];
        for (name, value) in constants {
            if !(value >= F::zero()) || !value.is_finite() {
                return Err(RigError::InvalidConstant { name });
            }
        }
        Ok(())
    }
}

impl<F: Float> Default for RigConfig<F> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stock_config_is_valid() {
        assert_eq!(RigConfig::<f32>::new().validate(), Ok(()));
    }

    #[test]
    fn reduced_motion_zeroes_wind() {
        let config: RigConfig<f32> = RigConfig::new().with_reduced_motion(true);
        assert_eq!(config.effective_wind_amplitude(), 0.0);
        assert_eq!(RigConfig::<f32>::new().effective_wind_amplitude(), 44.0);
    }

    #[test]
    fn dt_is_clamped() {
        let config: RigConfig<f64> = RigConfig::new();
        assert_eq!(config.clamp_dt(10.0), 0.033);
        assert_eq!(config.clamp_dt(0.0), 0.001);
        assert_eq!(config.clamp_dt(-1.0), 0.001);
        assert_eq!(config.clamp_dt(f64::NAN), 0.001);
        assert_eq!(config.clamp_dt(0.016), 0.016);
    }

    #[test]
    fn rejects_bad_values() {
        let zero_rest: RigConfig<f32> = RigConfig::new().with_rest_length(0.0);
        assert_eq!(zero_rest.validate(), Err(RigError::InvalidRestLength));

        let inverted: RigConfig<f32> = RigConfig::new().with_dt_range(0.05, 0.01);
        assert_eq!(inverted.validate(), Err(RigError::InvalidTimeStep));

        let bouncy: RigConfig<f32> = RigConfig::new().with_restitution(1.5);
        assert_eq!(bouncy.validate(), Err(RigError::InvalidRestitution));

        let flat: RigConfig<f32> = RigConfig::new().with_half_extents(Vec2::new(28.0, 0.0));
        assert_eq!(flat.validate(), Err(RigError::InvalidHalfExtents));

        let negative: RigConfig<f32> = RigConfig::new().with_gravity(-1.0);
        assert_eq!(
            negative.validate(),
            Err(RigError::InvalidConstant { name: "gravity" })
        );
    }

    #[test]
    fn without_forces_keeps_impulses() {
        let config: RigConfig<f32> = RigConfig::new().without_forces();
        assert_eq!(config.gravity, 0.0);
        assert_eq!(config.spring_constant, 0.0);
        assert_eq!(config.key_impulse, 110.0);
        assert!(config.validate().is_ok());
    }
}
