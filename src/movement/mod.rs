//! Movement domain: locomotion core, engine adapters, and plugin wiring.

mod bootstrap;
mod collaborators;
mod components;
mod controller;
#[cfg(feature = "dev-tools")]
mod dev;
mod probe;
mod resources;
mod systems;
mod tasks;

#[cfg(test)]
mod tests;

pub use collaborators::{
    AnimationSink, AudioCues, Collaborators, MovementApplier, PhysicsQuery, RayFilter, RayHit,
};
pub use components::{GameLayer, LiquidVolume, Locomotion, Player, Walkable};
pub use controller::{ActorState, CameraBasis, LocomotionController, TickInput, resolve_direction};
pub use resources::{DebugMode, KeyBindings, LocomotionTuning, MovementInput, TuningError};

use bevy::prelude::*;

use crate::movement::bootstrap::{spawn_player, verify_locomotion_wiring};
use crate::movement::systems::{
    drive_locomotion, read_input, sync_liquid_contact, toggle_debug_mode,
};

/// Systems that read input and advance the locomotion controllers.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct LocomotionSet;

pub struct MovementPlugin;

impl Plugin for MovementPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<LocomotionTuning>()
            .init_resource::<KeyBindings>()
            .init_resource::<MovementInput>()
            .init_resource::<DebugMode>()
            .add_systems(Startup, spawn_player)
            .add_systems(PostStartup, verify_locomotion_wiring)
            .add_systems(
                Update,
                (
                    read_input,
                    toggle_debug_mode,
                    sync_liquid_contact,
                    drive_locomotion,
                )
                    .chain()
                    .in_set(LocomotionSet),
            );

        #[cfg(feature = "dev-tools")]
        app.add_systems(Startup, dev::spawn_test_arena);
    }
}
