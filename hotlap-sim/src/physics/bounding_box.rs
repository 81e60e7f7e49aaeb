use glam::DVec2;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct BoundingBox {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
}

impl BoundingBox {
    pub fn new(min_x: f64, max_x: f64, min_y: f64, max_y: f64) -> BoundingBox {
        BoundingBox {
            min_x,
            max_x,
            min_y,
            max_y,
        }
    }

    // track layouts describe rectangles as origin plus extent
    pub fn from_origin_size(x: f64, y: f64, width: f64, height: f64) -> BoundingBox {
        BoundingBox {
            min_x: x,
            max_x: x + width,
            min_y: y,
            max_y: y + height,
        }
    }

    pub fn center(&self) -> DVec2 {
        DVec2::new(
            (self.min_x + self.max_x) / 2.0,
            (self.min_y + self.max_y) / 2.0,
        )
    }

    // boundaries count as inside, so a point exactly on a wall edge collides
    pub fn contains_point(&self, point: DVec2) -> bool {
        point.x >= self.min_x
            && point.x <= self.max_x
            && point.y >= self.min_y
            && point.y <= self.max_y
    }

    pub fn is_colliding(&self, other: &BoundingBox) -> bool {
        // https://developer.mozilla.org/en-US/docs/Games/Techniques/3D_collision_detection
        (self.min_x <= other.max_x && self.max_x >= other.min_x)
            && (self.min_y <= other.max_y && self.max_y >= other.min_y)
    }

    pub fn is_degenerate(&self) -> bool {
        self.min_x >= self.max_x || self.min_y >= self.max_y
    }
}
