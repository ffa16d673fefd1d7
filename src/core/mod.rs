//! Core domain: camera rig and app-wide setup.

mod camera;


pub use camera::{CameraRig, MainCamera};

use bevy::prelude::*;

use crate::core::camera::{follow_player, orbit_camera, setup_camera};

pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<CameraRig>()
            .add_systems(Startup, setup_camera)
            .add_systems(
                Update,
                (orbit_camera, follow_player)
                    .chain()
                    .after(crate::movement::LocomotionSet),
            );
    }
}
