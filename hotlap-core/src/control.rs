use serde::{Deserialize, Serialize};

// ControlIntent is the per-tick snapshot of what the driver is asking the
// car to do. The input collaborator (keyboard tracking, a scripted driver,
// a test) writes one of these between ticks; the simulation reads a single
// consistent copy at the start of each tick.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ControlIntent {
    pub forward: bool,
    pub backward: bool,
    pub steer_left: bool,
    pub steer_right: bool,
}

impl ControlIntent {
    // the all-clear snapshot input sources fall back to on focus loss
    pub fn released() -> Self {
        ControlIntent::default()
    }
}
