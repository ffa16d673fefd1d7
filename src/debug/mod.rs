//! Debug overlay for locomotion tuning sessions.
//!
//! Shown while `DebugMode` is enabled (toggle key from `KeyBindings`).

mod overlay;


use bevy::prelude::*;

use crate::movement::LocomotionSet;

pub struct DebugPlugin;

impl Plugin for DebugPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            overlay::update_locomotion_overlay.after(LocomotionSet),
        );
    }
}
