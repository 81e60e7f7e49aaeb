use serde::{Deserialize, Serialize};

pub type LapNumber = u32;
pub type CheckpointIndex = usize;

// RaceProgress is the racing-side record of how far around the circuit the
// vehicle has gotten: which zone it crossed last, how long the current lap
// has been running, and the lap history. The progression logic that advances
// it lives with the simulation; this is just the value it folds over.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RaceProgress {
    pub current_lap: LapNumber,
    // None until the first zone is crossed; behaves like "last crossed the
    // start line", so the first zone the vehicle must reach is index 1
    pub last_checkpoint: Option<CheckpointIndex>,
    // milliseconds into the lap in progress; reset on lap completion
    pub current_lap_elapsed: f64,
    pub best_lap_time: Option<f64>,
    pub completed_lap_times: Vec<f64>,
}

impl RaceProgress {
    pub fn new() -> Self {
        RaceProgress {
            current_lap: 1,
            last_checkpoint: None,
            current_lap_elapsed: 0.0,
            best_lap_time: None,
            completed_lap_times: Vec::new(),
        }
    }
}

impl Default for RaceProgress {
    fn default() -> Self {
        RaceProgress::new()
    }
}
