use std::f64::consts::FRAC_PI_2;

use anyhow::{anyhow, Result};
use glam::DVec2;

use hotlap_core::lap::CheckpointIndex;

use crate::physics::bounding_box::BoundingBox;

// A timing zone on the circuit. Zones are crossed in index order; index 0
// doubles as the start/finish line.
#[derive(Copy, Clone, Debug)]
pub struct Checkpoint {
    pub index: CheckpointIndex,
    pub bounds: BoundingBox,
}

impl Checkpoint {
    pub fn new(index: CheckpointIndex, bounds: BoundingBox) -> Self {
        Self { index, bounds }
    }
}

// One circuit layout: the walls enclosing the drivable corridor, the ordered
// checkpoint zones, and the grid position. Built once per layout and shared
// read-only by the whole simulation.
#[derive(Clone, Debug)]
pub struct Track {
    pub walls: Vec<BoundingBox>,
    // ordered by index, 0..N
    pub checkpoints: Vec<Checkpoint>,
    pub start_position: DVec2,
    pub start_heading: f64,
}

impl Track {
    /* Malformed geometry is rejected here, once, so the per-tick collision
     * and progression code never has to re-validate it. */
    pub fn new(
        walls: Vec<BoundingBox>,
        checkpoints: Vec<Checkpoint>,
        start_position: DVec2,
        start_heading: f64,
    ) -> Result<Track> {
        if walls.is_empty() {
            return Err(anyhow!("track must have at least one boundary wall"));
        }
        if checkpoints.is_empty() {
            return Err(anyhow!("track must have at least one checkpoint zone"));
        }
        for (position, checkpoint) in checkpoints.iter().enumerate() {
            if checkpoint.index != position {
                return Err(anyhow!(
                    "checkpoint at position {} has index {}; zones must be ordered 0..{}",
                    position,
                    checkpoint.index,
                    checkpoints.len()
                ));
            }
            if checkpoint.bounds.is_degenerate() {
                return Err(anyhow!("checkpoint zone {} is degenerate", checkpoint.index));
            }
        }
        if walls.iter().any(|wall| wall.is_degenerate()) {
            return Err(anyhow!("track has a degenerate boundary wall"));
        }
        for (position, zone) in checkpoints.iter().enumerate() {
            for other in &checkpoints[position + 1..] {
                if zone.bounds.is_colliding(&other.bounds) {
                    return Err(anyhow!(
                        "checkpoint zones {} and {} overlap",
                        zone.index,
                        other.index
                    ));
                }
            }
        }

        Ok(Track {
            walls,
            checkpoints,
            start_position,
            start_heading,
        })
    }

    /// The standard oval: a rectangular outer wall and an inner island
    /// leaving a 100-unit corridor, with four checkpoint zones (start/finish
    /// at the bottom center, then right, top, left). The car starts mid
    /// corridor on the finish line, facing up the track.
    pub fn oval(world_width: f64, world_height: f64) -> Track {
        let margin = 60.0;
        let corridor = 100.0;
        let thickness = 20.0;

        let mut walls = Vec::new();

        // outer boundary
        walls.push(BoundingBox::from_origin_size(
            margin,
            margin,
            world_width - margin * 2.0,
            thickness,
        ));
        walls.push(BoundingBox::from_origin_size(
            margin,
            world_height - margin - thickness,
            world_width - margin * 2.0,
            thickness,
        ));
        walls.push(BoundingBox::from_origin_size(
            margin,
            margin,
            thickness,
            world_height - margin * 2.0,
        ));
        walls.push(BoundingBox::from_origin_size(
            world_width - margin - thickness,
            margin,
            thickness,
            world_height - margin * 2.0,
        ));

        // inner island
        let inner = margin + corridor;
        walls.push(BoundingBox::from_origin_size(
            inner,
            inner,
            world_width - inner * 2.0,
            thickness,
        ));
        walls.push(BoundingBox::from_origin_size(
            inner,
            world_height - inner - thickness,
            world_width - inner * 2.0,
            thickness,
        ));
        walls.push(BoundingBox::from_origin_size(
            inner,
            inner,
            thickness,
            world_height - inner * 2.0,
        ));
        walls.push(BoundingBox::from_origin_size(
            world_width - inner - thickness,
            inner,
            thickness,
            world_height - inner * 2.0,
        ));

        // thin zones spanning the corridor at the four compass points
        let checkpoints = vec![
            Checkpoint::new(
                0,
                BoundingBox::from_origin_size(
                    world_width / 2.0 - 5.0,
                    world_height - margin - corridor,
                    10.0,
                    corridor,
                ),
            ),
            Checkpoint::new(
                1,
                BoundingBox::from_origin_size(
                    world_width - margin - corridor,
                    world_height / 2.0 - 5.0,
                    corridor,
                    10.0,
                ),
            ),
            Checkpoint::new(
                2,
                BoundingBox::from_origin_size(world_width / 2.0 - 5.0, margin, 10.0, corridor),
            ),
            Checkpoint::new(
                3,
                BoundingBox::from_origin_size(margin, world_height / 2.0 - 5.0, corridor, 10.0),
            ),
        ];

        let start_position = DVec2::new(
            world_width / 2.0,
            world_height - margin - corridor / 2.0,
        );

        Track::new(walls, checkpoints, start_position, -FRAC_PI_2)
            .expect("oval track geometry is well formed")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_oval_track_shape() {
        let track = Track::oval(800.0, 600.0);
        assert_eq!(track.walls.len(), 8);
        assert_eq!(track.checkpoints.len(), 4);
        // the start position sits on the start/finish zone
        assert!(track.checkpoints[0]
            .bounds
            .contains_point(track.start_position));
        // and not inside any wall
        assert!(!track
            .walls
            .iter()
            .any(|wall| wall.contains_point(track.start_position)));
    }

    #[test]
    fn test_rejects_empty_checkpoints() {
        let walls = vec![BoundingBox::from_origin_size(0.0, 0.0, 10.0, 10.0)];
        let result = Track::new(walls, Vec::new(), DVec2::ZERO, 0.0);
        assert!(result.is_err());
    }

    #[test]
    fn test_rejects_empty_walls() {
        let checkpoints = vec![Checkpoint::new(
            0,
            BoundingBox::from_origin_size(0.0, 0.0, 10.0, 10.0),
        )];
        let result = Track::new(Vec::new(), checkpoints, DVec2::ZERO, 0.0);
        assert!(result.is_err());
    }

    #[test]
    fn test_rejects_overlapping_zones() {
        let walls = vec![BoundingBox::from_origin_size(0.0, 0.0, 10.0, 10.0)];
        let checkpoints = vec![
            Checkpoint::new(0, BoundingBox::from_origin_size(0.0, 0.0, 5.0, 5.0)),
            Checkpoint::new(1, BoundingBox::from_origin_size(3.0, 3.0, 5.0, 5.0)),
        ];
        let result = Track::new(walls, checkpoints, DVec2::ZERO, 0.0);
        assert!(result.is_err());
    }

    #[test]
    fn test_rejects_out_of_order_zones() {
        let walls = vec![BoundingBox::from_origin_size(0.0, 0.0, 10.0, 10.0)];
        let checkpoints = vec![
            Checkpoint::new(0, BoundingBox::from_origin_size(0.0, 0.0, 5.0, 5.0)),
            Checkpoint::new(2, BoundingBox::from_origin_size(5.0, 0.0, 5.0, 5.0)),
        ];
        let result = Track::new(walls, checkpoints, DVec2::ZERO, 0.0);
        assert!(result.is_err());
    }
}
