//! Movement domain: the locomotion controller.
//!
//! `LocomotionController::advance` runs one tick: camera-relative direction,
//! speed integration or braking, jump/dash resolution against the ground
//! probes, vertical integration, and finally hands the displacement to the
//! body and samples the floor distance for the animator.

use bevy::prelude::*;

use crate::animation::{AnimatorState, params};
use crate::audio::CueCategory;
use crate::movement::probe;
use crate::movement::tasks::{Braking, Dash, DashStep, JumpRecovery};
use crate::movement::{Collaborators, LocomotionTuning, TuningError};

/// Camera axes used to map stick input onto the ground plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraBasis {
    pub forward: Vec3,
    pub right: Vec3,
}

impl CameraBasis {
    pub fn from_rotation(rotation: Quat) -> Self {
        Self {
            forward: rotation * Vec3::NEG_Z,
            right: rotation * Vec3::X,
        }
    }
}

impl Default for CameraBasis {
    fn default() -> Self {
        Self {
            forward: Vec3::NEG_Z,
            right: Vec3::X,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TickInput {
    /// (horizontal, vertical), each in `[-1, 1]`.
    pub axes: Vec2,
    pub jump_pressed: bool,
    pub boost_held: bool,
    pub debug_mode: bool,
    pub camera: CameraBasis,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ActorState {
    pub facing: Quat,
    /// Last resolved movement direction, kept while braking.
    pub direction: Vec3,
    pub horizontal_speed: f32,
    pub vertical_speed: f32,
    pub gravity_rate: f32,
    pub is_grounded: bool,
    pub is_in_liquid: bool,
    pub dash_available: bool,
    pub landing_sound_pending: bool,
    pub dash_displacement: Vec3,
}

impl ActorState {
    fn spawned(facing: Quat, tuning: &LocomotionTuning) -> Self {
        Self {
            facing,
            direction: Vec3::ZERO,
            horizontal_speed: 0.0,
            vertical_speed: 0.0,
            gravity_rate: tuning.base_gravity,
            is_grounded: false,
            is_in_liquid: false,
            dash_available: true,
            landing_sound_pending: true,
            dash_displacement: Vec3::ZERO,
        }
    }

    pub fn forward(&self) -> Vec3 {
        self.facing * Vec3::NEG_Z
    }
}

#[derive(Debug, Clone)]
pub struct LocomotionController {
    tuning: LocomotionTuning,
    state: ActorState,
    braking: Option<Braking>,
    dash: Option<Dash>,
    recovery: Option<JumpRecovery>,
}

impl LocomotionController {
    pub fn new(tuning: LocomotionTuning, facing: Quat) -> Result<Self, TuningError> {
        tuning.validate()?;
        let state = ActorState::spawned(facing, &tuning);
        Ok(Self {
            tuning,
            state,
            braking: None,
            dash: None,
            recovery: None,
        })
    }

    pub fn state(&self) -> &ActorState {
        &self.state
    }

    pub fn tuning(&self) -> &LocomotionTuning {
        &self.tuning
    }

    pub fn is_braking(&self) -> bool {
        self.braking.is_some()
    }

    pub fn is_dashing(&self) -> bool {
        self.dash.is_some()
    }

    pub fn recently_jumped(&self) -> bool {
        self.recovery.is_some()
    }

    pub fn dash_remaining(&self) -> f32 {
        self.dash.map_or(0.0, |dash| dash.remaining())
    }

    pub fn speed_ratio(&self) -> f32 {
        self.state.horizontal_speed / self.tuning.max_speed
    }

    pub fn set_in_liquid(&mut self, in_liquid: bool) {
        if self.state.is_in_liquid != in_liquid {
            debug!("Liquid contact: in_liquid={}", in_liquid);
        }
        self.state.is_in_liquid = in_liquid;
    }

    /// Run one tick and return the displacement handed to the body.
    pub fn advance(&mut self, dt: f32, input: &TickInput, world: &mut Collaborators) -> Vec3 {
        if !dt.is_finite() || dt <= 0.0 {
            return Vec3::ZERO;
        }

        self.advance_tasks(dt);
        let mut movement = self.state.dash_displacement * dt;

        if input.axes != Vec2::ZERO {
            if self.braking.take().is_some() {
                debug!("Braking cancelled by input");
            }
            self.state.direction = resolve_direction(input.axes, &input.camera);
            movement += self.accelerate(dt, input, world);
        } else {
            movement += self.decelerate(dt, world);
        }

        self.resolve_jump(dt, input, world);

        movement.y = self.state.vertical_speed * dt;
        world.body.move_by(movement);

        let base = world.body.base_position();
        if let Some(distance) = probe::floor_distance(world.physics, base, &self.tuning) {
            world.animator.set_float(params::DISTANCE_TO_FLOOR, distance);
        }

        movement
    }

    fn advance_tasks(&mut self, dt: f32) {
        if let Some(recovery) = self.recovery.as_mut() {
            if !recovery.advance(dt) {
                self.recovery = None;
            }
        }

        let forward = self.state.forward();
        match self.dash.as_mut().map(|dash| dash.step(dt)) {
            Some(DashStep::Moving(interpolation)) => {
                self.state.dash_displacement = forward * self.tuning.dash_velocity * interpolation;
            }
            Some(DashStep::Finished) => {
                self.state.dash_displacement = Vec3::ZERO;
                self.dash = None;
                debug!("Dash finished");
            }
            None => {}
        }
    }

    fn accelerate(&mut self, dt: f32, input: &TickInput, world: &mut Collaborators) -> Vec3 {
        let state = &mut self.state;
        state.horizontal_speed = (state.horizontal_speed + self.tuning.velocity).min(self.tuning.max_speed);
        if input.debug_mode {
            state.horizontal_speed = self.tuning.debug_speed;
        }

        world.animator.set_float(
            params::HORIZONTAL_VELOCITY,
            state.horizontal_speed / self.tuning.max_speed,
        );

        if state.direction != Vec3::ZERO {
            let target = Transform::IDENTITY
                .looking_to(state.direction, Vec3::Y)
                .rotation;
            let t = (self.tuning.rotation_speed * dt).clamp(0.0, 1.0);
            state.facing = state.facing.slerp(target, t);
        }

        if state.is_grounded {
            world.audio.play_random(CueCategory::step(state.is_in_liquid));
        }

        state.direction * state.horizontal_speed * dt
    }

    fn decelerate(&mut self, dt: f32, world: &mut Collaborators) -> Vec3 {
        // Speed is held while a dash runs; braking resumes after it.
        if self.dash.is_some() {
            return self.state.direction * self.state.horizontal_speed * dt;
        }

        if self.braking.is_none() && self.speed_ratio() <= self.tuning.brake_threshold {
            self.state.horizontal_speed = 0.0;
            world.animator.set_float(params::HORIZONTAL_VELOCITY, 0.0);
            return Vec3::ZERO;
        }

        if self.braking.is_none() {
            debug!("Braking from speed {:.2}", self.state.horizontal_speed);
        }
        let decrement = self.tuning.brake_decrement();
        let braking = self.braking.get_or_insert_with(Braking::default);
        let stopped = braking.step(&mut self.state.horizontal_speed, decrement);

        // Raw speed, not the ratio written while accelerating.
        world
            .animator
            .set_float(params::HORIZONTAL_VELOCITY, self.state.horizontal_speed);

        if stopped {
            debug!("Braking finished after {} steps", braking.steps);
            self.braking = None;
        }

        self.state.direction * self.state.horizontal_speed * dt
    }

    fn resolve_jump(&mut self, dt: f32, input: &TickInput, world: &mut Collaborators) {
        let was_grounded = self.state.is_grounded;
        let base = world.body.base_position();
        self.state.is_grounded = probe::is_grounded(world.physics, base, &self.tuning);

        if self.state.is_grounded != was_grounded {
            debug!(
                "Ground contact changed: grounded={}, vertical_speed={:.2}",
                self.state.is_grounded, self.state.vertical_speed
            );
        }

        if !self.state.is_grounded || self.recovery.is_some() {
            self.state.vertical_speed += self.state.gravity_rate * dt;
        } else {
            self.land(world);
        }

        if input.jump_pressed {
            if self.state.is_grounded {
                self.jump(world);
            } else if self.state.dash_available && self.dash.is_none() {
                self.try_dash(world);
            }
        }

        world
            .animator
            .set_bool(params::IS_GROUNDED, self.state.is_grounded);

        if input.debug_mode && input.boost_held {
            self.state.vertical_speed += self.tuning.boost_acceleration * dt;
        }
    }

    fn land(&mut self, world: &mut Collaborators) {
        let state = &mut self.state;
        state.gravity_rate = self.tuning.fall_gravity;
        state.vertical_speed = 0.0;
        state.dash_available = true;

        if state.landing_sound_pending {
            world.audio.play_random(CueCategory::jump(state.is_in_liquid));
            state.landing_sound_pending = false;
            debug!("Landed: in_liquid={}", state.is_in_liquid);
        }
    }

    fn jump(&mut self, world: &mut Collaborators) {
        self.recovery = Some(JumpRecovery::new(self.tuning.jump_recovery));
        self.state.vertical_speed = self.tuning.jump_force;
        world
            .audio
            .play_random(CueCategory::jump(self.state.is_in_liquid));
        self.state.landing_sound_pending = true;
        world.animator.set_trigger(params::JUMPED);
        debug!("Jump: vertical_speed={:.2}", self.state.vertical_speed);
    }

    fn try_dash(&mut self, world: &mut Collaborators) {
        // Distance check binds to the Falled state only.
        let permitted = world.animator.current_state_is(AnimatorState::Jumped)
            || (world.animator.current_state_is(AnimatorState::Falled)
                && world.animator.get_float(params::DISTANCE_TO_FLOOR)
                    > self.tuning.dash_floor_threshold);
        if !permitted {
            return;
        }

        world.animator.set_trigger(params::DASHED);
        if self.braking.take().is_some() {
            debug!("Braking cancelled by dash");
        }
        self.dash = Some(Dash::new(self.tuning.dash_duration));
        self.state.vertical_speed = 0.0;
        world.audio.play_dash();
        self.state.gravity_rate = self.tuning.flight_gravity;
        self.state.dash_available = false;
        debug!("Dash started: duration={:.2}", self.tuning.dash_duration);
    }
}

/// Project the camera axes onto the ground plane and blend them by input.
pub fn resolve_direction(axes: Vec2, camera: &CameraBasis) -> Vec3 {
    let forward = Vec3::new(camera.forward.x, 0.0, camera.forward.z).normalize_or_zero();
    let right = Vec3::new(camera.right.x, 0.0, camera.right.z).normalize_or_zero();
    (forward * axes.y + right * axes.x).normalize_or_zero()
}
