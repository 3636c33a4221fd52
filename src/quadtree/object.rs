use crate::quadtree::aabb::Aabb;
use crate::quadtree::node::NodeID;
use crate::quadtree::point::Point;
use crate::quadtree::quadrant::Quadrant;

/// The capabilities a [`QuadTree`](crate::quadtree::QuadTree) needs from the objects it stores.
///
/// Only `bounds` and the owner bookkeeping are required. The geometric tests are derived from
/// `bounds` but may be overridden, for instance by shapes with a cheaper exact test.
pub trait Spatial {
    /// Current bounding box of the object.
    fn bounds(&self) -> Aabb;

    /// The node last recorded through [`Spatial::set_owner`].
    fn owner(&self) -> Option<NodeID>;

    /// Record the node holding this object. Only the tree calls this.
    fn set_owner(&mut self, owner: Option<NodeID>);

    /// `true` iff the object lies entirely within `region`.
    fn is_enclosed_by(&self, region: &Aabb) -> bool {
        region.contains(&self.bounds())
    }

    /// `true` iff the object and `region` share at least one point.
    fn overlaps(&self, region: &Aabb) -> bool {
        region.intersects(&self.bounds())
    }

    /// The single quadrant around `center` fully containing the object, if any.
    fn quadrant_of(&self, center: Point) -> Option<Quadrant> {
        Quadrant::containing(&self.bounds(), center)
    }
}

/// A rectangle carrying an arbitrary payload.
#[derive(Debug, Clone)]
pub struct Entry<P> {
    bounds: Aabb,
    pub payload: P,
    owner: Option<NodeID>,
}

impl<P> Entry<P> {
    pub fn new(bounds: Aabb, payload: P) -> Self {
        Entry {
            bounds,
            payload,
            owner: None,
        }
    }

    /// Replace the bounds. The tree must be told through `reinsert` afterwards.
    pub fn set_bounds(&mut self, bounds: Aabb) {
        self.bounds = bounds;
    }

    /// Move by `(dx, dy)`. The tree must be told through `reinsert` afterwards.
    pub fn translate(&mut self, dx: f32, dy: f32) {
        self.bounds = self.bounds.translated(dx, dy);
    }
}

impl<P> Spatial for Entry<P> {
    fn bounds(&self) -> Aabb {
        self.bounds
    }

    fn owner(&self) -> Option<NodeID> {
        self.owner
    }

    fn set_owner(&mut self, owner: Option<NodeID>) {
        self.owner = owner;
    }
}

#[cfg(test)]
mod test {
    use super::Entry;
    use super::Spatial;
    use crate::quadtree::aabb::Aabb;
    use crate::quadtree::point::Point;
    use crate::quadtree::quadrant::Quadrant;

    #[test]
    fn entry_capabilities() {
        let mut e = Entry::new(Aabb::new(10., 10., 20., 20.), "a");

        assert!(e.is_enclosed_by(&Aabb::new(0., 0., 50., 50.)));
        assert!(e.overlaps(&Aabb::new(15., 15., 30., 30.)));
        assert!(!e.overlaps(&Aabb::new(21., 21., 30., 30.)));
        assert_eq!(
            e.quadrant_of(Point::new(50., 50.)),
            Some(Quadrant::SouthWest)
        );

        e.translate(60., 60.);

        assert_eq!(e.bounds(), Aabb::new(70., 70., 80., 80.));
        assert_eq!(
            e.quadrant_of(Point::new(50., 50.)),
            Some(Quadrant::NorthEast)
        );
        assert_eq!(e.owner(), None);
    }
}
