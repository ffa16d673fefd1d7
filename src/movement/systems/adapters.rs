//! Movement domain: bevy/avian implementations of the collaborator traits.

use avian3d::prelude::*;
use bevy::prelude::*;

use crate::movement::{GameLayer, MovementApplier, PhysicsQuery, RayFilter, RayHit};

/// Ray casts against the avian spatial query pipeline.
pub(crate) struct SceneProbe<'a, 'w, 's> {
    pub spatial_query: &'a SpatialQuery<'w, 's>,
    pub is_trigger: &'a dyn Fn(Entity) -> bool,
    /// The actor's own collider.
    pub actor: Entity,
}

impl PhysicsQuery for SceneProbe<'_, '_, '_> {
    fn raycast(
        &self,
        origin: Vec3,
        direction: Dir3,
        max_distance: f32,
        filter: RayFilter,
    ) -> Option<RayHit> {
        let query_filter = if filter.walkable_only {
            SpatialQueryFilter::from_mask(GameLayer::Walkable)
        } else {
            SpatialQueryFilter::default()
        }
        .with_excluded_entities([self.actor]);

        let hit = self.spatial_query.cast_ray_predicate(
            origin,
            direction,
            max_distance,
            true,
            &query_filter,
            &|entity| !(filter.ignore_triggers && (self.is_trigger)(entity)),
        )?;

        Some(RayHit {
            point: origin + *direction * hit.distance,
            distance: hit.distance,
        })
    }
}

/// Accumulates the tick's displacement for the dynamic body.
#[derive(Debug)]
pub(crate) struct BodyMotion {
    pub base: Vec3,
    pub displacement: Vec3,
}

impl BodyMotion {
    pub fn new(translation: Vec3, foot_offset: f32) -> Self {
        Self {
            base: translation + Vec3::Y * foot_offset,
            displacement: Vec3::ZERO,
        }
    }

    /// Velocity that covers the displacement in `dt`; collisions are left
    /// to the solver.
    pub fn velocity(&self, dt: f32) -> Vec3 {
        if dt > 0.0 {
            self.displacement / dt
        } else {
            Vec3::ZERO
        }
    }
}

impl MovementApplier for BodyMotion {
    fn base_position(&self) -> Vec3 {
        self.base + self.displacement
    }

    fn move_by(&mut self, displacement: Vec3) {
        self.displacement += displacement;
    }
}
