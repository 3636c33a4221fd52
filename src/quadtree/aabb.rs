use core::fmt::Debug;
use core::fmt::Display;

use crate::quadtree::point::Point;

/// Closed axis-aligned rectangle. The `y` axis points up, so `max.y` is the northern edge.
#[derive(Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Point,
    pub max: Point,
}

impl Aabb {
    pub const fn new(x_min: f32, y_min: f32, x_max: f32, y_max: f32) -> Self {
        Aabb {
            min: Point { x: x_min, y: y_min },
            max: Point { x: x_max, y: y_max },
        }
    }

    pub fn width(&self) -> f32 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f32 {
        self.max.y - self.min.y
    }

    pub fn center(&self) -> Point {
        self.min.mid(&self.max)
    }

    /// The same box moved by `(dx, dy)`.
    pub fn translated(&self, dx: f32, dy: f32) -> Self {
        Aabb::new(
            self.min.x + dx,
            self.min.y + dy,
            self.max.x + dx,
            self.max.y + dy,
        )
    }

    /// Whether `other` lies entirely within `self`. Shared edges count as inside.
    pub fn contains(&self, other: &Aabb) -> bool {
        self.min.x <= other.min.x
            && self.min.y <= other.min.y
            && other.max.x <= self.max.x
            && other.max.y <= self.max.y
    }

    /// Whether `self` and `other` share at least one point.
    pub fn intersects(&self, other: &Aabb) -> bool {
        !(self.max.x < other.min.x
            || self.min.x > other.max.x
            || self.max.y < other.min.y
            || self.min.y > other.max.y)
    }

    /// Splits the bounding box into four equal quadrants, ordered NE, NW, SW, SE.
    pub fn split(&self) -> [Aabb; 4] {
        let center = self.center();

        let ne = Aabb {
            min: center,
            max: self.max,
        };

        let nw = Aabb {
            min: Point {
                x: self.min.x,
                y: center.y,
            },
            max: Point {
                x: center.x,
                y: self.max.y,
            },
        };

        let sw = Aabb {
            min: self.min,
            max: center,
        };

        let se = Aabb {
            min: Point {
                x: center.x,
                y: self.min.y,
            },
            max: Point {
                x: self.max.x,
                y: center.y,
            },
        };

        [ne, nw, sw, se]
    }
}

impl Debug for Aabb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{self}")
    }
}

impl Display for Aabb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[{}, {}, {}, {}]",
            self.min.x, self.min.y, self.max.x, self.max.y
        )
    }
}
