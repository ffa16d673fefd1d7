//! Movement domain: player bootstrap and wiring checks.

use avian3d::prelude::*;
use bevy::prelude::*;
use thiserror::Error;

use crate::animation::Animator;
use crate::core::MainCamera;
use crate::movement::{GameLayer, Locomotion, LocomotionController, LocomotionTuning, Player};

/// Configuration problems that make locomotion impossible to run.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WiringError {
    #[error("no main camera to resolve movement direction against")]
    MissingCamera,
    #[error("player {0:?} has no animator")]
    MissingAnimator(Entity),
}

pub(crate) fn check_wiring(
    camera_count: usize,
    players: impl IntoIterator<Item = (Entity, bool)>,
) -> Result<(), WiringError> {
    if camera_count == 0 {
        return Err(WiringError::MissingCamera);
    }
    for (entity, has_animator) in players {
        if !has_animator {
            return Err(WiringError::MissingAnimator(entity));
        }
    }
    Ok(())
}

pub(crate) fn spawn_player(
    mut commands: Commands,
    tuning: Res<LocomotionTuning>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut exit: MessageWriter<AppExit>,
) {
    let transform = Transform::from_xyz(0.0, 2.0, 0.0);
    let controller = match LocomotionController::new(tuning.clone(), transform.rotation) {
        Ok(controller) => controller,
        Err(e) => {
            error!("Cannot spawn player: {}", e);
            exit.write(AppExit::error());
            return;
        }
    };

    info!(
        "Spawning player: max_speed={}, jump_force={}, dash_duration={}",
        tuning.max_speed, tuning.jump_force, tuning.dash_duration
    );

    commands.spawn((
        // Identity & Locomotion
        (Player, Locomotion(controller), Animator::default()),
        // Rendering
        (
            Mesh3d(meshes.add(Capsule3d::new(0.4, 1.0))),
            MeshMaterial3d(materials.add(Color::srgb(0.85, 0.8, 0.65))),
            transform,
        ),
        // Physics
        (
            RigidBody::Dynamic,
            Collider::capsule(0.4, 1.0),
            LockedAxes::ROTATION_LOCKED,
            LinearVelocity::default(),
            GravityScale(0.0), // Locomotion integrates gravity itself
            Friction::new(0.0),
            CollisionEventsEnabled,
            CollisionLayers::new(
                GameLayer::Player,
                [GameLayer::Default, GameLayer::Walkable, GameLayer::Liquid],
            ),
        ),
    ));
}

pub(crate) fn verify_locomotion_wiring(
    cameras: Query<(), With<MainCamera>>,
    players: Query<(Entity, Has<Animator>), With<Player>>,
    mut exit: MessageWriter<AppExit>,
) {
    match check_wiring(cameras.iter().count(), players.iter()) {
        Ok(()) => info!("Locomotion wiring verified for {} player(s)", players.iter().count()),
        Err(e) => {
            error!("Locomotion wiring error: {}", e);
            exit.write(AppExit::error());
        }
    }
}
