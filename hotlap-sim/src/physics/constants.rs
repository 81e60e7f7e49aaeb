// Structural ratios of the driving model. Tuning that a track or car might
// reasonably override (top speed, acceleration, friction, car size) lives in
// GLOBAL_CONFIG instead.

// Reverse gear applies this fraction of forward acceleration, and reverse
// top speed is capped at this fraction of forward top speed
pub const REVERSE_ACCEL_RATIO: f64 = 0.6;
pub const REVERSE_SPEED_RATIO: f64 = 0.4;

// Steering authority falls off linearly with speed, down to a floor so the
// car never becomes completely unsteerable at top speed
pub const TURN_AUTHORITY_FLOOR: f64 = 0.3;
pub const TURN_AUTHORITY_FALLOFF: f64 = 0.5;

// Below this speed the car cannot rotate in place; below the stop epsilon
// the speed snaps to exactly zero so friction never leaves a perpetual creep
pub const MIN_TURNING_SPEED: f64 = 5.0;
pub const STOP_EPSILON: f64 = 1.0;

// Hitting a wall keeps this fraction of the incoming speed and nudges the
// car this many world units away from the wall's center per tick
pub const WALL_SPEED_RETENTION: f64 = 0.3;
pub const WALL_PUSHBACK_DISTANCE: f64 = 5.0;

// The tick scheduler clamps elapsed time to this before calling into the
// simulation; the simulation treats it as a precondition
pub const MAX_TICK_MS: f64 = 100.0;
