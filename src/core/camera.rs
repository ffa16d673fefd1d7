//! Core domain: third-person follow camera.

use bevy::prelude::*;

use crate::movement::{KeyBindings, Player};

#[derive(Component, Debug)]
pub struct MainCamera;

/// Orbit parameters for the follow camera.
#[derive(Resource, Debug, Clone)]
pub struct CameraRig {
    /// Horizontal angle around the player (radians).
    pub yaw: f32,
    pub distance: f32,
    pub height: f32,
    /// Radians per second while an orbit key is held.
    pub orbit_speed: f32,
}

impl Default for CameraRig {
    fn default() -> Self {
        Self {
            yaw: 0.0,
            distance: 10.0,
            height: 5.0,
            orbit_speed: 2.0,
        }
    }
}

impl CameraRig {
    /// Turn by `direction` (+1 left, -1 right) for `dt` seconds.
    pub fn orbit(&mut self, direction: f32, dt: f32) {
        self.yaw += direction * self.orbit_speed * dt;
    }

    /// Camera position for a target at `focus`.
    pub fn eye(&self, focus: Vec3) -> Vec3 {
        let back = Quat::from_rotation_y(self.yaw) * Vec3::Z * self.distance;
        focus + back + Vec3::Y * self.height
    }
}

pub(crate) fn setup_camera(mut commands: Commands, rig: Res<CameraRig>) {
    let focus = Vec3::ZERO;
    commands.spawn((
        MainCamera,
        Camera3d::default(),
        Transform::from_translation(rig.eye(focus)).looking_at(focus, Vec3::Y),
    ));
}

pub(crate) fn orbit_camera(
    time: Res<Time>,
    keyboard: Res<ButtonInput<KeyCode>>,
    bindings: Res<KeyBindings>,
    mut rig: ResMut<CameraRig>,
) {
    let mut turn = 0.0;
    if keyboard.pressed(bindings.orbit_left) {
        turn += 1.0;
    }
    if keyboard.pressed(bindings.orbit_right) {
        turn -= 1.0;
    }
    rig.orbit(turn, time.delta_secs());
}

pub(crate) fn follow_player(
    rig: Res<CameraRig>,
    players: Query<&Transform, (With<Player>, Without<MainCamera>)>,
    mut cameras: Query<&mut Transform, With<MainCamera>>,
) {
    let Some(player) = players.iter().next() else {
        return;
    };
    let focus = player.translation;
    for mut camera in &mut cameras {
        *camera = Transform::from_translation(rig.eye(focus)).looking_at(focus, Vec3::Y);
    }
}
