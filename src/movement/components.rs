//! Movement domain: components and physics layers for locomotion.

use avian3d::prelude::*;
use bevy::prelude::*;

use crate::movement::LocomotionController;

/// Physics layers for collision filtering
#[derive(PhysicsLayer, Clone, Copy, Debug, Default)]
pub enum GameLayer {
    #[default]
    Default,
    /// Surfaces the ground probe accepts
    Walkable,
    /// Player character
    Player,
    /// Water and other liquid trigger volumes
    Liquid,
}

#[derive(Component, Debug)]
pub struct Player;

/// Marker for walkable colliders
#[derive(Component, Debug)]
pub struct Walkable;

/// Sensor volume that switches the actor to water cues
#[derive(Component, Debug)]
pub struct LiquidVolume;

/// Per-actor locomotion state machine.
#[derive(Component, Debug)]
pub struct Locomotion(pub LocomotionController);
