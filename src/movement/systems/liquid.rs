//! Movement domain: liquid volume enter/exit tracking.

use avian3d::prelude::*;
use bevy::prelude::*;

use crate::movement::{LiquidVolume, Locomotion, Player};

/// Returns the player-side entity when exactly one end of the contact is a
/// liquid volume.
fn liquid_contact(
    a: Entity,
    b: Entity,
    liquids: &Query<(), With<LiquidVolume>>,
) -> Option<Entity> {
    match (liquids.contains(a), liquids.contains(b)) {
        (true, false) => Some(b),
        (false, true) => Some(a),
        _ => None,
    }
}

pub(crate) fn sync_liquid_contact(
    mut collision_start_events: MessageReader<CollisionStart>,
    mut collision_end_events: MessageReader<CollisionEnd>,
    liquids: Query<(), With<LiquidVolume>>,
    mut players: Query<&mut Locomotion, With<Player>>,
) {
    for event in collision_start_events.read() {
        let Some(other) = liquid_contact(event.collider1, event.collider2, &liquids) else {
            continue;
        };
        if let Ok(mut locomotion) = players.get_mut(other) {
            locomotion.0.set_in_liquid(true);
        }
    }

    for event in collision_end_events.read() {
        let Some(other) = liquid_contact(event.collider1, event.collider2, &liquids) else {
            continue;
        };
        if let Ok(mut locomotion) = players.get_mut(other) {
            locomotion.0.set_in_liquid(false);
        }
    }
}
