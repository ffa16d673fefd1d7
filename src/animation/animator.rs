//! Animator state machine and parameter storage.
//!
//! The locomotion controller writes named parameters and fires triggers;
//! `Animator::evaluate` turns them into the high-level state the controller
//! queries back (for example to decide whether an air dash is allowed).

use std::collections::{HashMap, HashSet};

use bevy::prelude::*;

use super::params;
use crate::movement::AnimationSink;

/// High-level states of the player's base animation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AnimatorState {
    #[default]
    Idle,
    Run,
    Jumped,
    Falled,
    Dashed,
}

impl AnimatorState {
    /// Triggered states play their clip through before yielding.
    fn clip_length(self) -> Option<f32> {
        match self {
            AnimatorState::Jumped => Some(0.5),
            AnimatorState::Dashed => Some(0.4),
            _ => None,
        }
    }
}

/// Speed ratio above which a grounded actor plays the run cycle.
const RUN_THRESHOLD: f32 = 0.1;

#[derive(Component, Debug, Default)]
pub struct Animator {
    state: AnimatorState,
    time_in_state: f32,
    floats: HashMap<String, f32>,
    bools: HashMap<String, bool>,
    triggers: HashSet<String>,
}

impl Animator {
    pub fn state(&self) -> AnimatorState {
        self.state
    }

    pub fn get_bool(&self, name: &str) -> bool {
        self.bools.get(name).copied().unwrap_or(false)
    }

    pub fn is_trigger_set(&self, name: &str) -> bool {
        self.triggers.contains(name)
    }

    /// Advance the state machine by `dt`, consuming pending triggers.
    pub fn evaluate(&mut self, dt: f32) {
        self.time_in_state += dt;

        if self.triggers.remove(params::DASHED) {
            self.triggers.remove(params::JUMPED);
            self.enter(AnimatorState::Dashed);
            return;
        }
        if self.triggers.remove(params::JUMPED) {
            self.enter(AnimatorState::Jumped);
            return;
        }

        if let Some(length) = self.state.clip_length() {
            if self.time_in_state < length {
                return;
            }
        }

        let next = if self.get_bool(params::IS_GROUNDED) {
            if self.get_float(params::HORIZONTAL_VELOCITY) > RUN_THRESHOLD {
                AnimatorState::Run
            } else {
                AnimatorState::Idle
            }
        } else {
            AnimatorState::Falled
        };
        if next != self.state {
            self.enter(next);
        }
    }

    fn enter(&mut self, state: AnimatorState) {
        trace!("Animator: {:?} -> {:?}", self.state, state);
        self.state = state;
        self.time_in_state = 0.0;
    }
}

impl AnimationSink for Animator {
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

pub(crate) fn evaluate_animators(time: Res<Time>, mut query: Query<&mut Animator>) {
    let dt = time.delta_secs();
    for mut animator in &mut query {
        animator.evaluate(dt);
    }
}
