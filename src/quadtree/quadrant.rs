use crate::quadtree::aabb::Aabb;
use crate::quadtree::point::Point;

/// One of the four parts of a node, relative to its center. The discriminant is the index of the
/// child in [`Node::quadrants`](crate::quadtree::Node).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Quadrant {
    NorthEast = 0,
    NorthWest = 1,
    SouthWest = 2,
    SouthEast = 3,
}

impl Quadrant {
    pub const ALL: [Quadrant; 4] = [
        Quadrant::NorthEast,
        Quadrant::NorthWest,
        Quadrant::SouthWest,
        Quadrant::SouthEast,
    ];

    pub const fn index(self) -> usize {
        self as usize
    }

    /// Short lowercase name, e.g. `"ne"`
    pub const fn label(self) -> &'static str {
        match self {
            Quadrant::NorthEast => "ne",
            Quadrant::NorthWest => "nw",
            Quadrant::SouthWest => "sw",
            Quadrant::SouthEast => "se",
        }
    }

    /// The single quadrant around `center` that fully contains `bounds`, or `None` if `bounds`
    /// straddles either center line.
    ///
    /// A box lying exactly on a center line is given to the west (or south) side.
    pub fn containing(bounds: &Aabb, center: Point) -> Option<Self> {
        let west = bounds.max.x <= center.x;
        let east = bounds.min.x >= center.x;
        let south = bounds.max.y <= center.y;
        let north = bounds.min.y >= center.y;

        match (west, east, south, north) {
            (true, _, true, _) => Some(Quadrant::SouthWest),
            (true, _, _, true) => Some(Quadrant::NorthWest),
            (_, true, true, _) => Some(Quadrant::SouthEast),
            (_, true, _, true) => Some(Quadrant::NorthEast),
            _ => None,
        }
    }
}

#[cfg(test)]
mod test {
    use super::Quadrant;
    use crate::quadtree::aabb::Aabb;
    use crate::quadtree::point::Point;

    #[test]
    fn containing() {
        let c = Point::new(50., 50.);

        let cases = [
            (Aabb::new(60., 60., 70., 70.), Some(Quadrant::NorthEast)),
            (Aabb::new(10., 60., 20., 70.), Some(Quadrant::NorthWest)),
            (Aabb::new(10., 10., 20., 20.), Some(Quadrant::SouthWest)),
            (Aabb::new(60., 10., 70., 20.), Some(Quadrant::SouthEast)),
            (Aabb::new(45., 45., 55., 55.), None),
            (Aabb::new(45., 10., 55., 20.), None),
            (Aabb::new(10., 45., 20., 55.), None),
            // touching the center lines from the outside
            (Aabb::new(40., 40., 50., 50.), Some(Quadrant::SouthWest)),
            (Aabb::new(50., 50., 60., 60.), Some(Quadrant::NorthEast)),
        ];

        for (bounds, want) in cases {
            assert_eq!(Quadrant::containing(&bounds, c), want, "for {bounds}");
        }
    }

    #[test]
    fn containing_matches_split() {
        let node = Aabb::new(0., 0., 8., 8.);
        let parts = node.split();
        let obj = Aabb::new(1., 5., 2., 6.);

        let q = Quadrant::containing(&obj, node.center()).unwrap();

        assert!(parts[q.index()].contains(&obj));
    }
}
