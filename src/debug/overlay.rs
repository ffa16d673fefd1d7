//! Debug domain: on-screen locomotion readout.

use bevy::prelude::*;

use crate::animation::Animator;
use crate::movement::{DebugMode, Locomotion, LocomotionController, Player};

/// Marker for the locomotion info overlay
#[derive(Component, Debug)]
pub struct LocomotionOverlay;

/// Overlay text for one actor.
pub(crate) fn overlay_text(controller: &LocomotionController, animator: &Animator) -> String {
    let state = controller.state();
    format!(
        "DEBUG MODE\nSpeed: {:.1} ({:.0}%)\nVertical: {:.2}\nGravity: {:.2}\nGrounded: {}\nIn liquid: {}\nDash: {}\nAnimator: {:?}",
        state.horizontal_speed,
        controller.speed_ratio() * 100.0,
        state.vertical_speed,
        state.gravity_rate,
        state.is_grounded,
        state.is_in_liquid,
        dash_label(controller),
        animator.state(),
    )
}

fn dash_label(controller: &LocomotionController) -> String {
    if controller.is_dashing() {
        format!("active ({:.2}s left)", controller.dash_remaining())
    } else if controller.state().dash_available {
        "ready".to_string()
    } else {
        "spent".to_string()
    }
}

pub(crate) fn update_locomotion_overlay(
    mut commands: Commands,
    mode: Res<DebugMode>,
    players: Query<(&Locomotion, &Animator), With<Player>>,
    mut overlay_query: Query<&mut Text, With<LocomotionOverlay>>,
    existing_overlay: Query<Entity, With<LocomotionOverlay>>,
) {
    if !mode.enabled {
        for entity in &existing_overlay {
            commands.entity(entity).despawn();
        }
        return;
    }

    if existing_overlay.is_empty() {
        spawn_locomotion_overlay(&mut commands);
        return;
    }

    if let (Some((locomotion, animator)), Ok(mut text)) =
        (players.iter().next(), overlay_query.single_mut())
    {
        **text = overlay_text(&locomotion.0, animator);
    }
}

fn spawn_locomotion_overlay(commands: &mut Commands) {
    commands.spawn((
        LocomotionOverlay,
        Text::new("Loading..."),
        TextFont {
            font_size: 12.0,
            ..default()
        },
        TextColor(Color::srgb(0.8, 0.9, 0.8)),
        Node {
            position_type: PositionType::Absolute,
            left: Val::Px(20.0),
            bottom: Val::Px(20.0),
            padding: UiRect::all(Val::Px(8.0)),
            ..default()
        },
        BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.7)),
        ZIndex(500),
    ));
}
