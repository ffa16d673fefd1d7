//! Movement domain: downward probes for ground contact and floor distance.

use std::f32::consts::TAU;
use std::iter;

use bevy::prelude::*;

use crate::movement::{LocomotionTuning, PhysicsQuery, RayFilter};

/// Offsets of `divisions` points evenly spaced on a horizontal circle.
pub fn ring_offsets(divisions: u32, radius: f32) -> impl Iterator<Item = Vec3> {
    let step = TAU / divisions.max(1) as f32;
    (0..divisions).map(move |i| {
        let angle = step * i as f32;
        Vec3::new(angle.cos() * radius, 0.0, angle.sin() * radius)
    })
}

/// Short walkable-only probe below the base, retried around a ring so an
/// actor whose origin overhangs a ledge still counts as grounded.
pub fn is_grounded(physics: &dyn PhysicsQuery, base: Vec3, tuning: &LocomotionTuning) -> bool {
    let lift = Vec3::Y * tuning.ground_probe_lift;
    iter::once(Vec3::ZERO)
        .chain(ring_offsets(tuning.ring_divisions, tuning.ring_radius))
        .any(|offset| {
            physics
                .raycast(
                    base + offset + lift,
                    Dir3::NEG_Y,
                    tuning.ground_probe_range,
                    RayFilter::WALKABLE,
                )
                .is_some()
        })
}

/// Scaled distance from the base to whatever lies below, if anything does.
/// The probe starts `ground_probe_lift` above the base.
pub fn floor_distance(
    physics: &dyn PhysicsQuery,
    base: Vec3,
    tuning: &LocomotionTuning,
) -> Option<f32> {
    let origin = base + Vec3::Y * tuning.ground_probe_lift;
    physics
        .raycast(origin, Dir3::NEG_Y, tuning.floor_probe_range, RayFilter::ANY)
        .map(|hit| {
            (hit.distance - tuning.ground_probe_lift).max(0.0) / tuning.floor_distance_scale
        })
}
