//! Movement domain: per-frame locomotion tick for player actors.

use avian3d::prelude::*;
use bevy::prelude::*;

use crate::animation::Animator;
use crate::audio::{CueBuffer, PlayCue};
use crate::core::MainCamera;
use crate::movement::systems::adapters::{BodyMotion, SceneProbe};
use crate::movement::{
    CameraBasis, Collaborators, DebugMode, Locomotion, MovementInput, Player, TickInput,
};

#[allow(clippy::type_complexity)]
pub(crate) fn drive_locomotion(
    time: Res<Time>,
    input: Res<MovementInput>,
    debug_mode: Res<DebugMode>,
    spatial_query: SpatialQuery,
    sensors: Query<(), With<Sensor>>,
    camera: Query<&GlobalTransform, With<MainCamera>>,
    mut cues: MessageWriter<PlayCue>,
    mut players: Query<
        (
            Entity,
            &mut Transform,
            &mut LinearVelocity,
            &mut Locomotion,
            &mut Animator,
        ),
        With<Player>,
    >,
) {
    let dt = time.delta_secs();
    let Ok(camera) = camera.single() else {
        return;
    };

    let tick = TickInput {
        axes: input.axis,
        jump_pressed: input.jump_just_pressed,
        boost_held: input.boost_held,
        debug_mode: debug_mode.enabled,
        camera: CameraBasis::from_rotation(camera.rotation()),
    };
    let is_trigger = |entity: Entity| sensors.contains(entity);

    for (entity, mut transform, mut velocity, mut locomotion, mut animator) in &mut players {
        let physics = SceneProbe {
            spatial_query: &spatial_query,
            is_trigger: &is_trigger,
            actor: entity,
        };
        let mut body = BodyMotion::new(transform.translation, locomotion.0.tuning().foot_offset);
        let mut audio = CueBuffer::default();

        let mut world = Collaborators {
            physics: &physics,
            animator: &mut *animator,
            audio: &mut audio,
            body: &mut body,
        };
        locomotion.0.advance(dt, &tick, &mut world);

        velocity.0 = body.velocity(dt);
        transform.rotation = locomotion.0.state().facing;

        for cue in audio.0 {
            cues.write(cue);
        }
    }
}
