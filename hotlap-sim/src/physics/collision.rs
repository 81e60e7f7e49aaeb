use glam::DVec2;

use crate::physics::bounding_box::BoundingBox;
use crate::physics::constants::{WALL_PUSHBACK_DISTANCE, WALL_SPEED_RETENTION};
use crate::physics::vehicle::Vehicle;

/* Clamp a freshly-advanced car against the track walls. The first corner
 * found inside a wall counts as the collision for this tick: the car keeps
 * only a fraction of its speed and gets nudged away from that wall's
 * center. The nudge is a soft positional correction, not an exact
 * penetration resolution; a fast car can stay overlapped for a few ticks
 * and gets the same correction re-applied each tick until it is clear. */
pub fn resolve_wall_collisions(vehicle: &Vehicle, walls: &[BoundingBox]) -> Vehicle {
    let corners = vehicle.corners();

    for wall in walls {
        for corner in corners {
            if wall.contains_point(corner) {
                return Vehicle {
                    speed: vehicle.speed * WALL_SPEED_RETENTION,
                    position: vehicle.position + pushback_direction(vehicle.position, wall) * WALL_PUSHBACK_DISTANCE,
                    ..*vehicle
                };
            }
        }
    }

    *vehicle
}

// unit vector from the wall's center toward the car; if the car sits exactly
// on the wall's center there is no direction to normalize, so push +x
fn pushback_direction(car_position: DVec2, wall: &BoundingBox) -> DVec2 {
    let direction = (car_position - wall.center()).normalize_or_zero();
    if direction == DVec2::ZERO {
        DVec2::X
    } else {
        direction
    }
}
