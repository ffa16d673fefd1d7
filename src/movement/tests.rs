//! Movement domain: tests for the locomotion tick, probes, and wiring checks.

use std::collections::{HashMap, HashSet};

use bevy::prelude::*;

use super::bootstrap::{WiringError, check_wiring};
use super::probe::{floor_distance, is_grounded, ring_offsets};
use super::systems::adapters::BodyMotion;
use super::tasks::{Braking, Dash, DashStep, JumpRecovery};
use super::{
    AnimationSink, CameraBasis, Collaborators, LocomotionController, LocomotionTuning,
    MovementApplier, PhysicsQuery, RayFilter, RayHit, TickInput, TuningError, resolve_direction,
};
use crate::animation::{AnimatorState, params};
use crate::audio::{CueBuffer, CueCategory, PlayCue};

// -----------------------------------------------------------------------------
// Test doubles
// -----------------------------------------------------------------------------

/// Horizontal walkable floor at `height`, covering `x <= max_x`.
struct Floor {
    height: f32,
    max_x: f32,
}

impl Floor {
    fn flat() -> Self {
        Self {
            height: 0.0,
            max_x: f32::INFINITY,
        }
    }

    fn ledge(max_x: f32) -> Self {
        Self { height: 0.0, max_x }
    }
}

struct Scene {
    floor: Option<Floor>,
}

impl Scene {
    fn ground() -> Self {
        Self {
            floor: Some(Floor::flat()),
        }
    }

    fn void() -> Self {
        Self { floor: None }
    }
}

impl PhysicsQuery for Scene {
    fn raycast(
        &self,
        origin: Vec3,
        direction: Dir3,
        max_distance: f32,
        _filter: RayFilter,
    ) -> Option<RayHit> {
        let floor = self.floor.as_ref()?;
        if direction != Dir3::NEG_Y || origin.x > floor.max_x || origin.y < floor.height {
            return None;
        }
        let distance = origin.y - floor.height;
        (distance <= max_distance).then(|| RayHit {
            point: Vec3::new(origin.x, floor.height, origin.z),
            distance,
        })
    }
}

#[derive(Default)]
struct RecordingAnimator {
    state: AnimatorState,
    floats: HashMap<String, f32>,
    bools: HashMap<String, bool>,
    triggers: HashSet<String>,
}

impl RecordingAnimator {
    fn in_state(state: AnimatorState) -> Self {
        Self {
            state,
            ..default()
        }
    }
}

impl AnimationSink for RecordingAnimator {
    fn set_float(&mut self, name: &str, value: f32) {
        self.floats.insert(name.to_string(), value);
    }

    fn set_bool(&mut self, name: &str, value: bool) {
        self.bools.insert(name.to_string(), value);
    }

    fn set_trigger(&mut self, name: &str) {
        self.triggers.insert(name.to_string());
    }

    fn current_state_is(&self, state: AnimatorState) -> bool {
        self.state == state
    }

    fn get_float(&self, name: &str) -> f32 {
        self.floats.get(name).copied().unwrap_or(0.0)
    }
}

/// Records displacements without moving, so probes always see the same base.
#[derive(Default)]
struct PinnedBody {
    base: Vec3,
    moves: Vec<Vec3>,
}

impl PinnedBody {
    fn at(base: Vec3) -> Self {
        Self {
            base,
            moves: Vec::new(),
        }
    }
}

impl MovementApplier for PinnedBody {
    fn base_position(&self) -> Vec3 {
        self.base
    }

    fn move_by(&mut self, displacement: Vec3) {
        self.moves.push(displacement);
    }
}

struct Rig {
    controller: LocomotionController,
    scene: Scene,
    animator: RecordingAnimator,
    audio: CueBuffer,
    body: PinnedBody,
}

impl Rig {
    fn new(scene: Scene) -> Self {
        Self::with_tuning(scene, LocomotionTuning::default())
    }

    fn with_tuning(scene: Scene, tuning: LocomotionTuning) -> Self {
        Self {
            controller: LocomotionController::new(tuning, Quat::IDENTITY)
                .expect("default tuning is valid"),
            scene,
            animator: RecordingAnimator::default(),
            audio: CueBuffer::default(),
            body: PinnedBody::default(),
        }
    }

    fn tick(&mut self, dt: f32, input: TickInput) -> Vec3 {
        let mut world = Collaborators {
            physics: &self.scene,
            animator: &mut self.animator,
            audio: &mut self.audio,
            body: &mut self.body,
        };
        self.controller.advance(dt, &input, &mut world)
    }

    fn cues(&self) -> &[PlayCue] {
        &self.audio.0
    }
}

fn forward_input() -> TickInput {
    TickInput {
        axes: Vec2::new(0.0, 1.0),
        ..default()
    }
}

fn jump_input() -> TickInput {
    TickInput {
        jump_pressed: true,
        ..default()
    }
}

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-4
}

// -----------------------------------------------------------------------------
// Tuning tests
// -----------------------------------------------------------------------------

#[test]
fn test_default_tuning_is_valid() {
    assert_eq!(LocomotionTuning::default().validate(), Ok(()));
}

#[test]
fn test_brake_decrement_scales_velocity() {
    let tuning = LocomotionTuning::default();
    assert_eq!(tuning.brake_decrement(), 4.5);
}

#[test]
fn test_tuning_problems_reports_each_field() {
    let tuning = LocomotionTuning {
        max_speed: -1.0,
        fall_gravity: 5.0,
        rotation_speed: f32::NAN,
        ring_divisions: 0,
        ..default()
    };
    let problems = tuning.problems();
    assert_eq!(problems.len(), 4);
    assert!(problems.contains(&TuningError::NotPositive {
        field: "max_speed",
        value: -1.0
    }));
    assert!(problems.contains(&TuningError::GravityUpward {
        field: "fall_gravity",
        value: 5.0
    }));
    assert!(problems.contains(&TuningError::NoRingDivisions));
    assert!(problems.iter().any(|e| matches!(
        e,
        TuningError::NonFinite {
            field: "rotation_speed",
            ..
        }
    )));
}

#[test]
fn test_controller_rejects_invalid_tuning() {
    let tuning = LocomotionTuning {
        dash_duration: 0.0,
        ..default()
    };
    let result = LocomotionController::new(tuning, Quat::IDENTITY);
    assert!(matches!(
        result,
        Err(TuningError::NotPositive {
            field: "dash_duration",
            ..
        })
    ));
}

#[test]
fn test_spawned_state() {
    let rig = Rig::new(Scene::ground());
    let state = rig.controller.state();
    assert_eq!(state.horizontal_speed, 0.0);
    assert_eq!(state.vertical_speed, 0.0);
    assert_eq!(state.gravity_rate, -9.81);
    assert!(state.dash_available);
    assert!(state.landing_sound_pending);
    assert!(!state.is_grounded);
    assert!(!rig.controller.is_dashing());
    assert!(!rig.controller.is_braking());
}

// -----------------------------------------------------------------------------
// Task tests
// -----------------------------------------------------------------------------

#[test]
fn test_braking_step_clamps_at_zero() {
    let mut braking = Braking::default();
    let mut speed = 5.0;
    assert!(!braking.step(&mut speed, 4.5));
    assert_eq!(speed, 0.5);
    assert!(braking.step(&mut speed, 4.5));
    assert_eq!(speed, 0.0);
    assert_eq!(braking.steps, 2);
}

#[test]
fn test_dash_interpolation_decays_linearly() {
    let mut dash = Dash::new(1.0);
    assert_eq!(dash.step(0.25), DashStep::Moving(1.0));
    assert_eq!(dash.step(0.25), DashStep::Moving(0.75));
    assert_eq!(dash.step(0.25), DashStep::Moving(0.5));
    assert_eq!(dash.step(0.25), DashStep::Moving(0.25));
    assert_eq!(dash.step(0.25), DashStep::Finished);
    assert_eq!(dash.remaining(), 0.0);
}

#[test]
fn test_jump_recovery_window() {
    let mut recovery = JumpRecovery::new(1.0);
    assert!(recovery.advance(0.5));
    assert!(recovery.advance(0.25));
    assert!(!recovery.advance(0.5));
}

// -----------------------------------------------------------------------------
// Direction tests
// -----------------------------------------------------------------------------

#[test]
fn test_resolve_direction_default_camera() {
    let camera = CameraBasis::default();
    assert_eq!(resolve_direction(Vec2::new(0.0, 1.0), &camera), Vec3::NEG_Z);
    assert_eq!(resolve_direction(Vec2::new(1.0, 0.0), &camera), Vec3::X);
    assert_eq!(resolve_direction(Vec2::ZERO, &camera), Vec3::ZERO);
}

#[test]
fn test_resolve_direction_ignores_camera_pitch() {
    let rotation = Quat::from_rotation_x(-0.6);
    let camera = CameraBasis::from_rotation(rotation);
    let dir = resolve_direction(Vec2::new(0.0, 1.0), &camera);
    assert!(approx(dir.y, 0.0));
    assert!(approx(dir.length(), 1.0));
    assert!(approx(dir.z, -1.0));
}

#[test]
fn test_resolve_direction_diagonal_is_normalized() {
    let dir = resolve_direction(Vec2::new(1.0, 1.0), &CameraBasis::default());
    assert!(approx(dir.length(), 1.0));
    assert!(approx(dir.x, dir.z.abs()));
}

// -----------------------------------------------------------------------------
// Speed tests
// -----------------------------------------------------------------------------

#[test]
fn test_forward_input_reaches_max_speed_on_fifth_tick() {
    let mut rig = Rig::new(Scene::ground());
    let expected = [3.0, 6.0, 9.0, 12.0, 15.0, 15.0, 15.0, 15.0, 15.0, 15.0];

    for (tick, speed) in expected.into_iter().enumerate() {
        rig.tick(0.1, forward_input());
        assert_eq!(
            rig.controller.state().horizontal_speed,
            speed,
            "tick {}",
            tick + 1
        );
    }

    assert_eq!(rig.animator.get_float(params::HORIZONTAL_VELOCITY), 1.0);
}

#[test]
fn test_forward_displacement_follows_camera() {
    let mut rig = Rig::new(Scene::ground());
    let movement = rig.tick(0.1, forward_input());
    assert!(approx(movement.z, -0.3));
    assert!(approx(movement.x, 0.0));
    assert_eq!(rig.body.moves, vec![movement]);
}

#[test]
fn test_facing_turns_toward_movement() {
    let mut rig = Rig::new(Scene::ground());
    let input = TickInput {
        axes: Vec2::new(1.0, 0.0),
        ..default()
    };
    for _ in 0..30 {
        rig.tick(0.1, input);
    }
    let forward = rig.controller.state().forward();
    assert!(forward.dot(Vec3::X) > 0.99);
}

#[test]
fn test_release_above_threshold_brakes_gradually() {
    let mut rig = Rig::new(Scene::ground());
    for _ in 0..5 {
        rig.tick(0.1, forward_input());
    }

    rig.tick(0.1, TickInput::default());
    assert!(rig.controller.is_braking());
    assert_eq!(rig.controller.state().horizontal_speed, 10.5);
    // Braking reports raw speed, not a ratio.
    assert_eq!(rig.animator.get_float(params::HORIZONTAL_VELOCITY), 10.5);

    rig.tick(0.1, TickInput::default());
    rig.tick(0.1, TickInput::default());
    assert_eq!(rig.controller.state().horizontal_speed, 1.5);

    rig.tick(0.1, TickInput::default());
    assert_eq!(rig.controller.state().horizontal_speed, 0.0);
    assert!(!rig.controller.is_braking());
}

#[test]
fn test_release_at_threshold_stops_immediately() {
    let mut rig = Rig::new(Scene::ground());
    rig.tick(0.1, forward_input());
    assert_eq!(rig.controller.speed_ratio(), 0.2);

    let movement = rig.tick(0.1, TickInput::default());
    assert_eq!(rig.controller.state().horizontal_speed, 0.0);
    assert!(!rig.controller.is_braking());
    assert_eq!(rig.animator.get_float(params::HORIZONTAL_VELOCITY), 0.0);
    assert!(approx(movement.z, 0.0));
}

#[test]
fn test_input_cancels_braking() {
    let mut rig = Rig::new(Scene::ground());
    for _ in 0..5 {
        rig.tick(0.1, forward_input());
    }
    rig.tick(0.1, TickInput::default());
    assert!(rig.controller.is_braking());

    rig.tick(0.1, forward_input());
    assert!(!rig.controller.is_braking());
    assert_eq!(rig.controller.state().horizontal_speed, 13.5);
}

#[test]
fn test_debug_mode_forces_speed() {
    let mut rig = Rig::new(Scene::ground());
    let input = TickInput {
        debug_mode: true,
        ..forward_input()
    };
    rig.tick(0.1, input);
    assert_eq!(rig.controller.state().horizontal_speed, 25.0);
}

// -----------------------------------------------------------------------------
// Vertical tests
// -----------------------------------------------------------------------------

#[test]
fn test_first_landing_switches_to_fall_gravity() {
    let mut rig = Rig::new(Scene::ground());
    rig.tick(0.1, TickInput::default());

    let state = rig.controller.state();
    assert!(state.is_grounded);
    assert_eq!(state.vertical_speed, 0.0);
    assert_eq!(state.gravity_rate, -18.0);
    assert!(!state.landing_sound_pending);
    assert_eq!(rig.cues(), &[PlayCue::Random(CueCategory::LandJump)]);
    assert_eq!(rig.animator.bools.get(params::IS_GROUNDED), Some(&true));
}

#[test]
fn test_airborne_accumulates_base_gravity() {
    let mut rig = Rig::new(Scene::void());
    let movement = rig.tick(0.1, TickInput::default());
    assert!(approx(rig.controller.state().vertical_speed, -0.981));
    assert!(approx(movement.y, -0.0981));
    assert!(rig.cues().is_empty());
}

#[test]
fn test_jump_applies_impulse_on_triggering_tick() {
    let mut rig = Rig::new(Scene::ground());
    rig.tick(0.1, TickInput::default());

    let movement = rig.tick(0.1, jump_input());
    assert_eq!(rig.controller.state().vertical_speed, 15.0);
    assert!(approx(movement.y, 1.5));
    assert!(rig.controller.recently_jumped());
    assert!(rig.controller.state().landing_sound_pending);
    assert!(rig.animator.triggers.contains(params::JUMPED));
    assert_eq!(
        rig.cues(),
        &[
            PlayCue::Random(CueCategory::LandJump),
            PlayCue::Random(CueCategory::LandJump)
        ]
    );
}

#[test]
fn test_jump_then_airborne() {
    let mut rig = Rig::new(Scene::ground());
    rig.tick(0.1, TickInput::default());
    rig.tick(0.1, jump_input());
    assert!(rig.controller.state().is_grounded);

    rig.scene = Scene::void();
    rig.tick(0.1, TickInput::default());
    let state = rig.controller.state();
    assert!(!state.is_grounded);
    assert!(approx(state.vertical_speed, 13.2));
    assert_eq!(state.gravity_rate, -18.0);
    assert_eq!(rig.animator.bools.get(params::IS_GROUNDED), Some(&false));
}

#[test]
fn test_recovery_window_ignores_ground_until_it_ends() {
    let mut rig = Rig::new(Scene::ground());
    rig.tick(0.1, TickInput::default());
    rig.tick(0.1, jump_input());

    for _ in 0..8 {
        rig.tick(0.1, TickInput::default());
    }
    assert!(rig.controller.recently_jumped());
    assert!(approx(rig.controller.state().vertical_speed, 15.0 - 8.0 * 1.8));

    for _ in 0..4 {
        rig.tick(0.1, TickInput::default());
    }
    assert!(!rig.controller.recently_jumped());
    assert_eq!(rig.controller.state().vertical_speed, 0.0);
    assert!(!rig.controller.state().landing_sound_pending);
    assert_eq!(rig.cues().len(), 3);
}

#[test]
fn test_debug_boost_only_in_debug_mode() {
    let mut rig = Rig::new(Scene::void());
    rig.tick(
        0.1,
        TickInput {
            boost_held: true,
            ..default()
        },
    );
    assert!(approx(rig.controller.state().vertical_speed, -0.981));

    let mut rig = Rig::new(Scene::void());
    rig.tick(
        0.1,
        TickInput {
            boost_held: true,
            debug_mode: true,
            ..default()
        },
    );
    assert!(approx(rig.controller.state().vertical_speed, 7.019));
}

// -----------------------------------------------------------------------------
// Dash tests
// -----------------------------------------------------------------------------

#[test]
fn test_dash_requires_jumped_or_high_fall() {
    let mut rig = Rig::new(Scene::void());
    rig.tick(0.05, jump_input());
    assert!(!rig.controller.is_dashing());

    rig.animator = RecordingAnimator::in_state(AnimatorState::Falled);
    rig.animator.set_float(params::DISTANCE_TO_FLOOR, 0.04);
    rig.tick(0.05, jump_input());
    assert!(!rig.controller.is_dashing());

    rig.animator.set_float(params::DISTANCE_TO_FLOOR, 0.5);
    rig.tick(0.05, jump_input());
    assert!(rig.controller.is_dashing());
}

#[test]
fn test_dash_from_jumped_state() {
    let mut rig = Rig::new(Scene::void());
    rig.animator = RecordingAnimator::in_state(AnimatorState::Jumped);
    rig.tick(0.05, jump_input());

    let state = rig.controller.state();
    assert!(rig.controller.is_dashing());
    assert!(!state.dash_available);
    assert_eq!(state.vertical_speed, 0.0);
    assert_eq!(state.gravity_rate, -9.0);
    assert!(rig.animator.triggers.contains(params::DASHED));
    assert_eq!(rig.cues(), &[PlayCue::Dash]);
}

#[test]
fn test_only_one_dash_per_airtime() {
    let mut rig = Rig::new(Scene::void());
    rig.animator = RecordingAnimator::in_state(AnimatorState::Jumped);
    rig.tick(0.05, jump_input());
    for _ in 0..10 {
        rig.tick(0.05, TickInput::default());
    }
    assert!(!rig.controller.is_dashing());

    rig.tick(0.05, jump_input());
    assert!(!rig.controller.is_dashing());
    assert_eq!(rig.cues(), &[PlayCue::Dash]);
}

#[test]
fn test_dash_displacement_decays_to_zero() {
    let mut rig = Rig::new(Scene::void());
    rig.animator = RecordingAnimator::in_state(AnimatorState::Jumped);
    rig.tick(0.05, jump_input());

    let first = rig.tick(0.05, TickInput::default());
    assert!(approx(first.z, -1.5));

    let mut previous = first.z;
    for _ in 0..3 {
        let movement = rig.tick(0.05, TickInput::default());
        assert!(movement.z > previous);
        assert!(movement.z < 0.0);
        previous = movement.z;
    }

    for _ in 0..4 {
        rig.tick(0.05, TickInput::default());
    }
    assert!(!rig.controller.is_dashing());
    assert_eq!(rig.controller.state().dash_displacement, Vec3::ZERO);
    assert_eq!(rig.controller.dash_remaining(), 0.0);
}

#[test]
fn test_dash_cancels_braking() {
    let mut rig = Rig::new(Scene::void());
    for _ in 0..5 {
        rig.tick(0.05, forward_input());
    }
    rig.tick(0.05, TickInput::default());
    assert!(rig.controller.is_braking());

    rig.animator = RecordingAnimator::in_state(AnimatorState::Jumped);
    rig.tick(0.05, jump_input());
    assert!(rig.controller.is_dashing());
    assert!(!rig.controller.is_braking());

    // Released input during the dash holds speed instead of braking.
    let speed = rig.controller.state().horizontal_speed;
    rig.tick(0.05, TickInput::default());
    assert!(rig.controller.is_dashing());
    assert!(!rig.controller.is_braking());
    assert_eq!(rig.controller.state().horizontal_speed, speed);
}

#[test]
fn test_braking_resumes_after_dash() {
    let mut rig = Rig::new(Scene::void());
    for _ in 0..5 {
        rig.tick(0.05, forward_input());
    }
    rig.animator = RecordingAnimator::in_state(AnimatorState::Jumped);
    rig.tick(0.05, jump_input());
    for _ in 0..8 {
        rig.tick(0.05, TickInput::default());
        assert!(!(rig.controller.is_dashing() && rig.controller.is_braking()));
    }
    assert!(!rig.controller.is_dashing());
    assert!(rig.controller.state().horizontal_speed < 15.0);
}

#[test]
fn test_landing_restores_dash() {
    let mut rig = Rig::new(Scene::void());
    rig.animator = RecordingAnimator::in_state(AnimatorState::Jumped);
    rig.tick(0.05, jump_input());
    assert!(!rig.controller.state().dash_available);

    rig.scene = Scene::ground();
    rig.tick(0.05, TickInput::default());
    assert!(rig.controller.state().dash_available);
    assert_eq!(rig.controller.state().gravity_rate, -18.0);
}

// -----------------------------------------------------------------------------
// Probe tests
// -----------------------------------------------------------------------------

#[test]
fn test_ring_offsets_lie_on_circle() {
    let offsets: Vec<Vec3> = ring_offsets(10, 1.0 / 3.0).collect();
    assert_eq!(offsets.len(), 10);
    for offset in offsets {
        assert_eq!(offset.y, 0.0);
        assert!(approx(offset.length(), 1.0 / 3.0));
    }
}

#[test]
fn test_ring_catches_ledge_when_center_misses() {
    let tuning = LocomotionTuning::default();
    let scene = Scene {
        floor: Some(Floor::ledge(0.0)),
    };
    assert!(is_grounded(&scene, Vec3::new(0.2, 0.0, 0.0), &tuning));
    assert!(!is_grounded(&scene, Vec3::new(0.5, 0.0, 0.0), &tuning));
}

#[test]
fn test_ground_probe_range_is_short() {
    let tuning = LocomotionTuning::default();
    let scene = Scene::ground();
    assert!(is_grounded(&scene, Vec3::new(0.0, 0.05, 0.0), &tuning));
    assert!(!is_grounded(&scene, Vec3::new(0.0, 0.35, 0.0), &tuning));
}

#[test]
fn test_floor_distance_is_scaled() {
    let tuning = LocomotionTuning::default();
    let distance = floor_distance(&Scene::ground(), Vec3::new(0.0, 2.0, 0.0), &tuning);
    assert!(distance.is_some_and(|d| approx(d, 0.02)));
    assert_eq!(floor_distance(&Scene::void(), Vec3::ZERO, &tuning), None);
}

#[test]
fn test_floor_distance_uses_hit_distance_below_base() {
    let tuning = LocomotionTuning::default();
    // Base slightly below the floor surface but inside the probe lift.
    let distance = floor_distance(&Scene::ground(), Vec3::new(0.0, -0.05, 0.0), &tuning);
    assert_eq!(distance, Some(0.0));
}

#[test]
fn test_tick_publishes_floor_distance() {
    let mut rig = Rig::new(Scene::ground());
    rig.body = PinnedBody::at(Vec3::new(0.0, 5.0, 0.0));
    rig.tick(0.1, TickInput::default());
    assert!(approx(
        rig.animator.get_float(params::DISTANCE_TO_FLOOR),
        0.05
    ));
    assert!(!rig.controller.state().is_grounded);
}

// -----------------------------------------------------------------------------
// Liquid and audio tests
// -----------------------------------------------------------------------------

#[test]
fn test_liquid_selects_water_cues() {
    let mut rig = Rig::new(Scene::ground());
    rig.controller.set_in_liquid(true);
    rig.tick(0.1, TickInput::default());
    rig.tick(0.1, forward_input());
    assert_eq!(
        rig.cues(),
        &[
            PlayCue::Random(CueCategory::WaterJump),
            PlayCue::Random(CueCategory::WaterStep)
        ]
    );
}

#[test]
fn test_step_cue_uses_previous_ground_contact() {
    let mut rig = Rig::new(Scene::ground());
    rig.tick(0.1, forward_input());
    // First tick lands but was not grounded when stepping.
    assert_eq!(rig.cues(), &[PlayCue::Random(CueCategory::LandJump)]);

    rig.tick(0.1, forward_input());
    assert_eq!(rig.cues().last(), Some(&PlayCue::Random(CueCategory::LandStep)));
}

// -----------------------------------------------------------------------------
// Edge cases
// -----------------------------------------------------------------------------

#[test]
fn test_non_positive_dt_is_a_no_op() {
    let mut rig = Rig::new(Scene::ground());
    let before = rig.controller.state().clone();
    for dt in [0.0, -0.1, f32::NAN] {
        assert_eq!(rig.tick(dt, forward_input()), Vec3::ZERO);
    }
    assert_eq!(rig.controller.state(), &before);
    assert!(rig.body.moves.is_empty());
    assert!(rig.cues().is_empty());
}

#[test]
fn test_body_motion_velocity() {
    let mut body = BodyMotion::new(Vec3::new(0.0, 2.0, 0.0), -0.9);
    assert!(approx(body.base_position().y, 1.1));
    body.move_by(Vec3::new(0.3, 0.0, 0.0));
    assert!(approx(body.velocity(0.1).x, 3.0));
    assert_eq!(body.velocity(0.0), Vec3::ZERO);
}

#[test]
fn test_check_wiring() {
    let player = Entity::from_bits(42);
    assert_eq!(check_wiring(1, [(player, true)]), Ok(()));
    assert_eq!(
        check_wiring(0, [(player, true)]),
        Err(WiringError::MissingCamera)
    );
    assert_eq!(
        check_wiring(1, [(player, false)]),
        Err(WiringError::MissingAnimator(player))
    );
}
