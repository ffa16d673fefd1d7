//! Movement domain: debug-only test arena.

use avian3d::prelude::*;
use bevy::prelude::*;

use crate::movement::{GameLayer, LiquidVolume, Walkable};

pub(crate) fn spawn_test_arena(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let ground_color = Color::srgb(0.4, 0.5, 0.4);
    let platform_color = Color::srgb(0.5, 0.4, 0.3);
    let water_color = Color::srgba(0.2, 0.4, 0.8, 0.5);

    let walkable_layers = CollisionLayers::new(GameLayer::Walkable, [GameLayer::Player]);
    let liquid_layers = CollisionLayers::new(GameLayer::Liquid, [GameLayer::Player]);

    let mut walkable_block = |commands: &mut Commands, size: Vec3, position: Vec3, color: Color| {
        commands.spawn((
            Walkable,
            Mesh3d(meshes.add(Cuboid::new(size.x, size.y, size.z))),
            MeshMaterial3d(materials.add(color)),
            Transform::from_translation(position),
            RigidBody::Static,
            Collider::cuboid(size.x, size.y, size.z),
            walkable_layers,
        ));
    };

    // Ground
    walkable_block(
        &mut commands,
        Vec3::new(60.0, 1.0, 60.0),
        Vec3::new(0.0, -0.5, 0.0),
        ground_color,
    );

    // Platforms for ledge and dash practice
    walkable_block(
        &mut commands,
        Vec3::new(6.0, 2.0, 6.0),
        Vec3::new(10.0, 1.0, 0.0),
        platform_color,
    );
    walkable_block(
        &mut commands,
        Vec3::new(4.0, 1.0, 4.0),
        Vec3::new(-8.0, 4.0, 12.0),
        platform_color,
    );

    // Shallow pool
    commands.spawn((
        LiquidVolume,
        Mesh3d(meshes.add(Cuboid::new(8.0, 1.0, 8.0))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: water_color,
            alpha_mode: AlphaMode::Blend,
            ..default()
        })),
        Transform::from_xyz(-10.0, 0.5, -10.0),
        RigidBody::Static,
        Collider::cuboid(8.0, 1.0, 8.0),
        Sensor,
        liquid_layers,
    ));

    commands.spawn((
        DirectionalLight {
            illuminance: 12_000.0,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_xyz(8.0, 20.0, 6.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));
}
