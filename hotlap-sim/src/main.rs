use std::thread;
use std::time::{Duration, Instant};

use hotlap_core::control::ControlIntent;
use hotlap_core::time::format_lap_time;
use hotlap_core::GLOBAL_CONFIG;

use hotlap_sim::physics::constants::MAX_TICK_MS;
use hotlap_sim::race::RaceSession;
use hotlap_sim::track::Track;

// Headless demo driver: runs the oval with a scripted full-throttle,
// hard-right driver for a fixed number of laps. Useful for watching the
// simulation behave without any front end attached.
fn main() {
    env_logger::init();

    let track = Track::oval(GLOBAL_CONFIG.world_width, GLOBAL_CONFIG.world_height);
    let mut session = RaceSession::new(track);
    session.start_race();
    session.set_intent(ControlIntent {
        forward: true,
        steer_right: true,
        ..ControlIntent::default()
    });

    let tick_duration = Duration::from_millis(GLOBAL_CONFIG.tick_ms);
    let target_laps = 3;
    // bail out if the scripted driver wedges itself in a corner
    let deadline = Instant::now() + Duration::from_secs(120);
    let mut previous_tick = Instant::now();

    while session.progress().current_lap <= target_laps && Instant::now() < deadline {
        let start_time = Instant::now();

        // the scheduler side of the update-loop contract: measured elapsed
        // time, clamped so a stalled frame can't blow up the integration
        let elapsed_ms = (start_time - previous_tick).as_secs_f64() * 1000.0;
        session.tick(elapsed_ms.min(MAX_TICK_MS));
        previous_tick = start_time;

        // wait out the remainder of the tick
        let remaining = tick_duration.saturating_sub(start_time.elapsed());
        thread::sleep(remaining);
    }

    let progress = session.progress();
    log::info!(
        "done: {} laps, best {}",
        progress.completed_lap_times.len(),
        format_lap_time(progress.best_lap_time.unwrap_or(0.0)),
    );
}
