//! Animation domain: parameter-driven animator state for the player rig.

mod animator;

pub use animator::{Animator, AnimatorState};

use bevy::prelude::*;

/// Parameter names shared by the locomotion controller and the animator.
pub mod params {
    pub const HORIZONTAL_VELOCITY: &str = "PlayerHorizontalVelocity";
    pub const DISTANCE_TO_FLOOR: &str = "DistanceToFloor";
    pub const IS_GROUNDED: &str = "IsGrounded";
    pub const JUMPED: &str = "Jumped";
    pub const DASHED: &str = "Dashed";
}

pub struct AnimationPlugin;

impl Plugin for AnimationPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            animator::evaluate_animators.after(crate::movement::LocomotionSet),
        );
    }
}
