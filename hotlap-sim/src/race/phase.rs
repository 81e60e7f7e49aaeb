// During Menu nothing is simulated; the session waits for a race to start.
// Countdown shows the grid and runs the start clock down; controls are dead
// until it hits zero. Racing ticks the full simulation. There is no
// finished phase: the lap count grows without bound until a restart.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum RacePhase {
    Menu,
    Countdown { remaining_ms: f64 },
    Racing,
}

impl RacePhase {
    pub fn is_racing(&self) -> bool {
        matches!(self, RacePhase::Racing)
    }
}
