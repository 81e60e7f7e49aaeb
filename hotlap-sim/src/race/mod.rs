use hotlap_core::control::ControlIntent;
use hotlap_core::lap::RaceProgress;
use hotlap_core::time::format_lap_time;
use hotlap_core::GLOBAL_CONFIG;

use crate::physics::collision::resolve_wall_collisions;
use crate::physics::constants::MAX_TICK_MS;
use crate::physics::vehicle::Vehicle;
use crate::progress::tick_progress;
use crate::track::Track;

mod phase;

pub use phase::RacePhase;

// RaceSession owns one race: the (shared, read-only) track, the car, the
// progress record, and the control intent snapshot for the next tick. The
// external scheduler calls tick() with elapsed milliseconds; an input
// source calls set_intent() between ticks; a renderer reads the accessors
// after each tick.
pub struct RaceSession {
    phase: RacePhase,
    track: Track,
    vehicle: Vehicle,
    progress: RaceProgress,
    intent: ControlIntent,
}

impl RaceSession {
    pub fn new(track: Track) -> RaceSession {
        let vehicle = Vehicle::spawn(track.start_position, track.start_heading);
        RaceSession {
            phase: RacePhase::Menu,
            track,
            vehicle,
            progress: RaceProgress::new(),
            intent: ControlIntent::released(),
        }
    }

    /* Begin (or restart) a race: the previous car and progress are simply
     * replaced wholesale, there is no partial state to clean up. */
    pub fn start_race(&mut self) {
        self.vehicle = Vehicle::spawn(self.track.start_position, self.track.start_heading);
        self.progress = RaceProgress::new();
        self.intent = ControlIntent::released();
        self.phase = RacePhase::Countdown {
            remaining_ms: GLOBAL_CONFIG.countdown_ms,
        };
        log::info!("race started, {}ms countdown", GLOBAL_CONFIG.countdown_ms);
    }

    // intent writes land between ticks; tick() reads one snapshot at its
    // start, so a mid-tick write never tears the integration
    pub fn set_intent(&mut self, intent: ControlIntent) {
        self.intent = intent;
    }

    /* One simulation tick. The scheduler guarantees 0 <= elapsed_ms <= 100
     * (it clamps stalled frames); strictly in order: kinematics advance,
     * wall collision resolve, checkpoint/lap update. */
    pub fn tick(&mut self, elapsed_ms: f64) {
        debug_assert!(
            (0.0..=MAX_TICK_MS).contains(&elapsed_ms),
            "scheduler must clamp elapsed time to {}ms",
            MAX_TICK_MS
        );

        match self.phase {
            RacePhase::Menu => {}
            RacePhase::Countdown { remaining_ms } => {
                let remaining_ms = remaining_ms - elapsed_ms;
                if remaining_ms <= 0.0 {
                    log::info!("green flag");
                    self.phase = RacePhase::Racing;
                    // the tick that crosses the green flag spends its
                    // leftover time racing rather than dropping it
                    self.step_race(-remaining_ms);
                } else {
                    self.phase = RacePhase::Countdown { remaining_ms };
                }
            }
            RacePhase::Racing => self.step_race(elapsed_ms),
        }
    }

    fn step_race(&mut self, elapsed_ms: f64) {
        let intent = self.intent;

        let advanced = self.vehicle.advance(&intent, elapsed_ms);
        let resolved = resolve_wall_collisions(&advanced, &self.track.walls);
        let progress = tick_progress(&self.progress, &resolved, &self.track, elapsed_ms);

        if progress.current_lap > self.progress.current_lap {
            // the lap that just finished is the last recorded one
            let lap_time = *progress
                .completed_lap_times
                .last()
                .expect("completed lap must be recorded");
            log::info!(
                "lap {} complete in {} (best {})",
                self.progress.current_lap,
                format_lap_time(lap_time),
                format_lap_time(progress.best_lap_time.unwrap_or(lap_time)),
            );
        }

        self.vehicle = resolved;
        self.progress = progress;
    }

    pub fn phase(&self) -> RacePhase {
        self.phase
    }

    pub fn track(&self) -> &Track {
        &self.track
    }

    pub fn vehicle(&self) -> &Vehicle {
        &self.vehicle
    }

    pub fn progress(&self) -> &RaceProgress {
        &self.progress
    }
}
