//! Movement domain: collaborator seams consumed by the locomotion core.
//!
//! The controller never touches the engine directly. Physics queries,
//! animation parameters, sound cues and body movement all go through these
//! traits so the bevy adapters and the test doubles are interchangeable.

use bevy::prelude::*;

use crate::animation::AnimatorState;
use crate::audio::CueCategory;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayHit {
    pub point: Vec3,
    pub distance: f32,
}

/// Which colliders a ray may hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RayFilter {
    pub walkable_only: bool,
    pub ignore_triggers: bool,
}

impl RayFilter {
    pub const ANY: Self = Self {
        walkable_only: false,
        ignore_triggers: false,
    };

    pub const WALKABLE: Self = Self {
        walkable_only: true,
        ignore_triggers: true,
    };
}

pub trait PhysicsQuery {
    fn raycast(
        &self,
        origin: Vec3,
        direction: Dir3,
        max_distance: f32,
        filter: RayFilter,
    ) -> Option<RayHit>;
}

pub trait AnimationSink {
    fn set_float(&mut self, name: &str, value: f32);
    fn set_bool(&mut self, name: &str, value: bool);
    fn set_trigger(&mut self, name: &str);
    fn current_state_is(&self, state: AnimatorState) -> bool;
    fn get_float(&self, name: &str) -> f32;
}

pub trait AudioCues {
    fn play_random(&mut self, category: CueCategory);
    fn play_dash(&mut self);
}

pub trait MovementApplier {
    /// World position of the actor's feet.
    fn base_position(&self) -> Vec3;
    fn move_by(&mut self, displacement: Vec3);
}

/// Everything one locomotion tick talks to.
pub struct Collaborators<'a> {
    pub physics: &'a dyn PhysicsQuery,
    pub animator: &'a mut dyn AnimationSink,
    pub audio: &'a mut dyn AudioCues,
    pub body: &'a mut dyn MovementApplier,
}
