use hotlap_core::lap::RaceProgress;

use crate::physics::vehicle::Vehicle;
use crate::track::Track;

/* One progression step: check whether the car's center entered the single
 * zone it is expected at next, record a lap when that zone is the finish
 * line reached after a full ordered traversal, and accumulate lap time.
 *
 * Zones gate strictly in cyclic index order: driving into a later zone
 * without having crossed the one before it does nothing, so a lap only
 * counts when every zone was visited in sequence. */
pub fn tick_progress(
    progress: &RaceProgress,
    vehicle: &Vehicle,
    track: &Track,
    elapsed_ms: f64,
) -> RaceProgress {
    let zone_count = track.checkpoints.len();
    let mut next = progress.clone();

    // before any zone is crossed the car is treated as sitting on the start
    // line, so the first zone it must reach is index 1 (or 0 when N == 1)
    let next_expected = progress
        .last_checkpoint
        .map_or(1 % zone_count, |last| (last + 1) % zone_count);

    if track.checkpoints[next_expected]
        .bounds
        .contains_point(vehicle.position)
    {
        let completes_lap =
            next_expected == 0 && progress.last_checkpoint == Some(zone_count - 1);
        if completes_lap {
            let lap_time = next.current_lap_elapsed;
            next.completed_lap_times.push(lap_time);
            if next.best_lap_time.map_or(true, |best| lap_time < best) {
                next.best_lap_time = Some(lap_time);
            }
            next.current_lap += 1;
            next.current_lap_elapsed = 0.0;
        }
        next.last_checkpoint = Some(next_expected);
    }

    // lap time always accrues, whether or not a zone was crossed; a lap that
    // just completed starts its clock with this tick's elapsed time
    next.current_lap_elapsed += elapsed_ms;

    next
}

#[cfg(test)]
mod tests {
    use glam::DVec2;

    use super::*;
    use crate::track::Track;

    fn oval() -> Track {
        Track::oval(800.0, 600.0)
    }

    fn car_at(track: &Track, position: DVec2) -> Vehicle {
        Vehicle {
            position,
            ..Vehicle::spawn(track.start_position, track.start_heading)
        }
    }

    fn zone_center(track: &Track, index: usize) -> DVec2 {
        track.checkpoints[index].bounds.center()
    }

    // drive the progress record through zones by teleporting the car's
    // center into each zone for one tick
    fn cross(track: &Track, progress: RaceProgress, index: usize, elapsed_ms: f64) -> RaceProgress {
        let car = car_at(track, zone_center(track, index));
        tick_progress(&progress, &car, track, elapsed_ms)
    }

    #[test]
    fn test_time_accrues_every_tick() {
        let track = oval();
        let car = car_at(&track, DVec2::new(200.0, 490.0)); // mid corridor, no zone
        let mut progress = RaceProgress::new();
        progress = tick_progress(&progress, &car, &track, 16.0);
        progress = tick_progress(&progress, &car, &track, 16.0);
        assert_eq!(progress.current_lap_elapsed, 32.0);
        assert_eq!(progress.current_lap, 1);
        assert_eq!(progress.last_checkpoint, None);
    }

    #[test]
    fn test_out_of_order_zone_does_not_advance() {
        let track = oval();
        let mut progress = RaceProgress::new();
        progress.last_checkpoint = Some(0);

        // zone 2 straight from zone 0: skipped zone 1 gates it out
        let progress = cross(&track, progress, 2, 16.0);
        assert_eq!(progress.last_checkpoint, Some(0));
        assert_eq!(progress.current_lap, 1);
    }

    #[test]
    fn test_ordered_traversal_completes_lap() {
        let track = oval();
        let mut progress = RaceProgress::new();
        for zone in [1, 2, 3] {
            progress = cross(&track, progress, zone, 1000.0);
        }
        assert_eq!(progress.last_checkpoint, Some(3));
        assert_eq!(progress.current_lap, 1);

        // re-entering the finish line completes the lap; the recorded time
        // excludes the completing tick's delta, which seeds the next lap
        let progress = cross(&track, progress, 0, 1000.0);
        assert_eq!(progress.current_lap, 2);
        assert_eq!(progress.completed_lap_times, vec![3000.0]);
        assert_eq!(progress.best_lap_time, Some(3000.0));
        assert_eq!(progress.current_lap_elapsed, 1000.0);
        assert_eq!(progress.last_checkpoint, Some(0));
    }

    #[test]
    fn test_finish_line_without_full_traversal_is_ignored() {
        let track = oval();
        let mut progress = RaceProgress::new();
        progress.last_checkpoint = Some(1);

        let progress = cross(&track, progress, 0, 16.0);
        assert_eq!(progress.current_lap, 1);
        assert!(progress.completed_lap_times.is_empty());
        assert_eq!(progress.last_checkpoint, Some(1));
    }

    #[test]
    fn test_best_lap_only_lowers() {
        let track = oval();
        let mut progress = RaceProgress::new();

        for lap_ms in [12_000.0, 9_000.0, 15_000.0] {
            // burn the lap time in one off-zone tick, then traverse
            let idle = car_at(&track, DVec2::new(200.0, 490.0));
            progress = tick_progress(&progress, &idle, &track, lap_ms - progress.current_lap_elapsed);
            for zone in [1, 2, 3, 0] {
                progress = cross(&track, progress, zone, 0.0);
            }
        }

        assert_eq!(progress.completed_lap_times, vec![12_000.0, 9_000.0, 15_000.0]);
        assert_eq!(progress.best_lap_time, Some(9_000.0));
        assert_eq!(progress.current_lap, 4);
    }

    #[test]
    fn test_single_zone_track_degenerates_gracefully() {
        use crate::physics::bounding_box::BoundingBox;
        use crate::track::Checkpoint;

        let walls = vec![BoundingBox::from_origin_size(0.0, 0.0, 100.0, 10.0)];
        let zone = Checkpoint::new(0, BoundingBox::from_origin_size(0.0, 20.0, 100.0, 100.0));
        let track = Track::new(walls, vec![zone], DVec2::new(50.0, 70.0), 0.0).unwrap();

        let car = car_at(&track, DVec2::new(50.0, 70.0));
        // first crossing only arms the finish line
        let progress = tick_progress(&RaceProgress::new(), &car, &track, 16.0);
        assert_eq!(progress.current_lap, 1);
        assert_eq!(progress.last_checkpoint, Some(0));

        // every subsequent tick inside the zone completes a "lap"
        let progress = tick_progress(&progress, &car, &track, 16.0);
        assert_eq!(progress.current_lap, 2);
    }
}
