//! Movement domain: tuning, bindings, and input resources.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LocomotionTuning {
    /// Upward speed applied by a grounded jump.
    pub jump_force: f32,
    /// Gravity once the actor has landed at least once.
    pub fall_gravity: f32,
    /// Reduced gravity after an air dash.
    pub flight_gravity: f32,
    /// Gravity before the first landing.
    pub base_gravity: f32,
    pub dash_duration: f32,
    pub dash_velocity: f32,
    pub rotation_speed: f32,
    pub max_speed: f32,
    /// Speed gained per tick while input is held.
    pub velocity: f32,
    /// Forced speed in debug mode.
    pub debug_speed: f32,
    /// Upward acceleration of the debug boost key.
    pub boost_acceleration: f32,
    /// Speed ratio above which releasing input brakes gradually.
    pub brake_threshold: f32,
    /// Braking decrement as a multiple of `velocity`.
    pub brake_factor: f32,
    /// Seconds after a jump during which gravity keeps accumulating.
    pub jump_recovery: f32,
    pub ground_probe_range: f32,
    pub ground_probe_lift: f32,
    pub ring_divisions: u32,
    pub ring_radius: f32,
    pub floor_probe_range: f32,
    pub floor_distance_scale: f32,
    pub dash_floor_threshold: f32,
    /// Vertical offset from the body origin to the actor's feet.
    pub foot_offset: f32,
}

impl Default for LocomotionTuning {
    fn default() -> Self {
        Self {
            jump_force: 15.0,
            fall_gravity: -18.0,
            flight_gravity: -9.0,
            base_gravity: -9.81,
            dash_duration: 0.25,
            dash_velocity: 30.0,
            rotation_speed: 10.0,
            max_speed: 15.0,
            velocity: 3.0,
            debug_speed: 25.0,
            boost_acceleration: 80.0,
            brake_threshold: 0.2,
            brake_factor: 1.5,
            jump_recovery: 1.0,
            ground_probe_range: 0.2,
            ground_probe_lift: 0.1,
            ring_divisions: 10,
            ring_radius: 1.0 / 3.0,
            floor_probe_range: 150.0,
            floor_distance_scale: 100.0,
            dash_floor_threshold: 0.04,
            foot_offset: -0.9,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum TuningError {
    #[error("tuning field '{field}' must be finite, got {value}")]
    NonFinite { field: &'static str, value: f32 },
    #[error("tuning field '{field}' must be positive, got {value}")]
    NotPositive { field: &'static str, value: f32 },
    #[error("tuning field '{field}' must pull downward (negative), got {value}")]
    GravityUpward { field: &'static str, value: f32 },
    #[error("ring_divisions must be at least 1")]
    NoRingDivisions,
}

impl LocomotionTuning {
    /// Speed removed per braking step.
    pub fn brake_decrement(&self) -> f32 {
        self.velocity * self.brake_factor
    }

    /// Every problem with these values, in field order.
    pub fn problems(&self) -> Vec<TuningError> {
        let mut errors = Vec::new();

        let positive = [
            ("jump_force", self.jump_force),
            ("dash_duration", self.dash_duration),
            ("max_speed", self.max_speed),
            ("velocity", self.velocity),
            ("brake_factor", self.brake_factor),
            ("jump_recovery", self.jump_recovery),
            ("ground_probe_range", self.ground_probe_range),
            ("floor_probe_range", self.floor_probe_range),
            ("floor_distance_scale", self.floor_distance_scale),
        ];
        for (field, value) in positive {
            if !value.is_finite() {
                errors.push(TuningError::NonFinite { field, value });
            } else if value <= 0.0 {
                errors.push(TuningError::NotPositive { field, value });
            }
        }

        let gravities = [
            ("fall_gravity", self.fall_gravity),
            ("flight_gravity", self.flight_gravity),
            ("base_gravity", self.base_gravity),
        ];
        for (field, value) in gravities {
            if !value.is_finite() {
                errors.push(TuningError::NonFinite { field, value });
            } else if value > 0.0 {
                errors.push(TuningError::GravityUpward { field, value });
            }
        }

        let finite = [
            ("dash_velocity", self.dash_velocity),
            ("rotation_speed", self.rotation_speed),
            ("debug_speed", self.debug_speed),
            ("boost_acceleration", self.boost_acceleration),
            ("brake_threshold", self.brake_threshold),
            ("ground_probe_lift", self.ground_probe_lift),
            ("ring_radius", self.ring_radius),
            ("dash_floor_threshold", self.dash_floor_threshold),
            ("foot_offset", self.foot_offset),
        ];
        for (field, value) in finite {
            if !value.is_finite() {
                errors.push(TuningError::NonFinite { field, value });
            }
        }

        if self.ring_divisions == 0 {
            errors.push(TuningError::NoRingDivisions);
        }

        errors
    }

    pub fn validate(&self) -> Result<(), TuningError> {
        match self.problems().into_iter().next() {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }
}

#[derive(Resource, Debug, Clone, PartialEq)]
pub struct KeyBindings {
    pub forward: KeyCode,
    pub back: KeyCode,
    pub left: KeyCode,
    pub right: KeyCode,
    pub jump: KeyCode,
    pub boost: KeyCode,
    pub debug_toggle: KeyCode,
    pub orbit_left: KeyCode,
    pub orbit_right: KeyCode,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            forward: KeyCode::KeyW,
            back: KeyCode::KeyS,
            left: KeyCode::KeyA,
            right: KeyCode::KeyD,
            jump: KeyCode::Space,
            boost: KeyCode::KeyM,
            debug_toggle: KeyCode::KeyT,
            orbit_left: KeyCode::KeyQ,
            orbit_right: KeyCode::KeyE,
        }
    }
}

#[derive(Resource, Debug, Default)]
pub struct MovementInput {
    pub axis: Vec2,
    pub jump_just_pressed: bool,
    pub boost_held: bool,
}

/// Diagnostic overrides: forced run speed and the boost key.
#[derive(Resource, Debug, Default)]
pub struct DebugMode {
    pub enabled: bool,
}
