use glam::{DMat2, DVec2};

use hotlap_core::control::ControlIntent;
use hotlap_core::GLOBAL_CONFIG;

use crate::physics::constants::*;

// The car the simulation steps. The only independent kinematic quantity is
// the signed scalar speed; the velocity vector is always derived from speed
// and heading, never integrated on its own.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Vehicle {
    pub position: DVec2,
    // radians, zero facing +x; deliberately left unnormalized
    pub heading: f64,
    // signed: negative while reversing
    pub speed: f64,

    pub max_speed: f64,
    pub acceleration: f64,
    pub friction: f64,
    pub turn_rate: f64,

    pub width: f64,
    pub height: f64,
}

impl Vehicle {
    // a parked car at the given pose, with tuning from the global config
    pub fn spawn(position: DVec2, heading: f64) -> Vehicle {
        Vehicle {
            position,
            heading,
            speed: 0.0,
            max_speed: GLOBAL_CONFIG.max_car_speed,
            acceleration: GLOBAL_CONFIG.car_accelerator,
            friction: GLOBAL_CONFIG.car_friction,
            turn_rate: GLOBAL_CONFIG.car_turn_rate,
            width: GLOBAL_CONFIG.car_width,
            height: GLOBAL_CONFIG.car_height,
        }
    }

    pub fn velocity(&self) -> DVec2 {
        DVec2::new(self.heading.cos(), self.heading.sin()) * self.speed
    }

    /* Given the control intent for this tick and the elapsed time, compute
     * and return what next tick's kinematic state will be for this car */
    pub fn advance(&self, intent: &ControlIntent, elapsed_ms: f64) -> Vehicle {
        let dt = elapsed_ms / 1000.0;

        // forward throttle wins if both pedals are down; reverse is weaker
        let requested_acceleration = if intent.forward {
            self.acceleration
        } else if intent.backward {
            -self.acceleration * REVERSE_ACCEL_RATIO
        } else {
            0.0
        };

        // steering authority degrades linearly with speed, floored so the
        // car is never completely unsteerable
        let turn_authority = (1.0
            - TURN_AUTHORITY_FALLOFF * self.speed.abs() / self.max_speed)
            .max(TURN_AUTHORITY_FLOOR);

        // a stationary (or nearly so) car cannot rotate in place; the steer
        // flags are independent, so both held at once cancel out
        let mut heading = self.heading;
        if self.speed.abs() > MIN_TURNING_SPEED {
            if intent.steer_left {
                heading -= self.turn_rate * turn_authority * dt;
            }
            if intent.steer_right {
                heading += self.turn_rate * turn_authority * dt;
            }
        }

        // friction decays exponentially in dt so its strength is
        // frame-rate independent
        let mut speed = self.speed + requested_acceleration * dt;
        speed *= self.friction.powf(dt);
        speed = speed.clamp(-self.max_speed * REVERSE_SPEED_RATIO, self.max_speed);
        if speed.abs() < STOP_EPSILON {
            speed = 0.0;
        }

        // velocity derives from the updated heading and speed
        let mut next = Vehicle {
            heading,
            speed,
            ..*self
        };
        next.position = self.position + next.velocity() * dt;
        next
    }

    // the four corners of the car's oriented bounding box, used for wall
    // collision sampling
    pub fn corners(&self) -> [DVec2; 4] {
        let rotation = DMat2::from_angle(self.heading);
        let half_w = self.width / 2.0;
        let half_h = self.height / 2.0;

        [
            DVec2::new(half_w, -half_h),
            DVec2::new(half_w, half_h),
            DVec2::new(-half_w, -half_h),
            DVec2::new(-half_w, half_h),
        ]
        .map(|corner| self.position + rotation.mul_vec2(corner))
    }
}
