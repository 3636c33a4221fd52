use std::fmt::Debug;

use crate::quadtree::aabb::Aabb;
use crate::quadtree::point::Point;

/// Index of a [`Node`] in the tree's node buffer.
pub type NodeID = usize;

/// Handle to an object stored in a [`QuadTree`](crate::quadtree::QuadTree).
pub type ObjectId = usize;

pub struct Node {
    /// Region covered by this node
    pub(crate) bounds: Aabb,

    /// Midpoint of `bounds`, fixed at construction
    pub(crate) center: Point,

    /// How many more levels may be created below this node
    pub(crate) max_depth: u8,

    /// Objects that fit in this node but in none of its quadrants
    pub(crate) children: Vec<ObjectId>,

    /// NE, NW, SW, SE. Either all four exist or none do.
    pub(crate) quadrants: Option<[NodeID; 4]>,

    /// Non-owning link back up, `None` for the root
    pub(crate) parent: Option<NodeID>,
}

impl Node {
    pub fn new(bounds: Aabb, max_depth: u8, parent: Option<NodeID>) -> Self {
        Node {
            bounds,
            center: bounds.center(),
            max_depth,
            children: Vec::new(),
            quadrants: None,
            parent,
        }
    }

    pub fn bounds(&self) -> &Aabb {
        &self.bounds
    }

    pub fn center(&self) -> Point {
        self.center
    }

    pub fn max_depth(&self) -> u8 {
        self.max_depth
    }

    /// Objects attached directly to this node
    pub fn children(&self) -> &[ObjectId] {
        &self.children
    }

    pub fn quadrants(&self) -> Option<[NodeID; 4]> {
        self.quadrants
    }

    pub fn parent(&self) -> Option<NodeID> {
        self.parent
    }

    pub fn is_leaf(&self) -> bool {
        self.quadrants.is_none()
    }

    /// Detach `id`, returning whether it was found. Only the first match is removed.
    pub(crate) fn detach(&mut self, id: ObjectId) -> bool {
        let Some(i) = self.children.iter().position(|&c| c == id) else {
            return false;
        };

        self.children.remove(i);

        true
    }
}

impl Debug for Node {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let g = |i: Option<NodeID>| -> isize { i.map_or(-1, |i| i as isize) };
        let q = |n: usize| g(self.quadrants.map(|q| q[n]));

        write!(
            f,
            "{} d={} {:?} [ne: {}, nw: {}, sw: {}, se: {}]",
            self.bounds,
            self.max_depth,
            self.children,
            q(0),
            q(1),
            q(2),
            q(3)
        )
    }
}
