//! Movement domain: input sampling for locomotion.

use bevy::prelude::*;

use crate::movement::{DebugMode, KeyBindings, MovementInput};

fn axis(keyboard: &ButtonInput<KeyCode>, negative: KeyCode, positive: KeyCode) -> f32 {
    let mut value = 0.0;
    if keyboard.pressed(negative) {
        value -= 1.0;
    }
    if keyboard.pressed(positive) {
        value += 1.0;
    }
    value
}

pub(crate) fn read_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    bindings: Res<KeyBindings>,
    mut input: ResMut<MovementInput>,
) {
    input.axis = Vec2::new(
        axis(&keyboard, bindings.left, bindings.right),
        axis(&keyboard, bindings.back, bindings.forward),
    );
    input.jump_just_pressed = keyboard.just_pressed(bindings.jump);
    input.boost_held = keyboard.pressed(bindings.boost);
}

pub(crate) fn toggle_debug_mode(
    keyboard: Res<ButtonInput<KeyCode>>,
    bindings: Res<KeyBindings>,
    mut debug_mode: ResMut<DebugMode>,
) {
    if keyboard.just_pressed(bindings.debug_toggle) {
        debug_mode.enabled = !debug_mode.enabled;
        info!("Debug mode {}", if debug_mode.enabled { "on" } else { "off" });
    }
}
