use core::fmt::Display;

use tracing::debug;
use tracing::trace;
use tracing::warn;

use crate::config::Config;

pub use crate::quadtree::aabb::Aabb;
pub use crate::quadtree::error::InsertError;
pub use crate::quadtree::error::QuadTreeError;
pub use crate::quadtree::node::Node;
pub use crate::quadtree::node::NodeID;
pub use crate::quadtree::node::ObjectId;
pub use crate::quadtree::object::Entry;
pub use crate::quadtree::object::Spatial;
pub use crate::quadtree::point::Point;
pub use crate::quadtree::quadrant::Quadrant;

mod aabb;
mod error;
mod node;
mod object;
mod point;
mod quadrant;
mod query;

/// An MX-CIF quadtree.
///
/// Objects are stored at the smallest node that fully encloses them, so an object crossing a
/// center line stays with the ancestor that bounds it instead of being copied into several
/// quadrants. Nodes are created lazily, the first time an insert needs them, and are never freed.
#[derive(Debug)]
pub struct QuadTree<T> {
    /// The index of the root of the tree in `nodes`
    root: NodeID,

    config: Config,

    nodes: Vec<Node>,

    /// Stored objects, indexed by [`ObjectId`]. Removed objects leave a `None` behind.
    objects: Vec<Option<T>>,

    /// Node holding each object. Objects are told through `set_owner`, but only this is trusted.
    owners: Vec<Option<NodeID>>,

    len: usize,
}

impl<T: Spatial> QuadTree<T> {
    /// Create an empty tree covering `bounds` that may subdivide `max_depth` times.
    pub fn new(bounds: Aabb, max_depth: u8) -> Self {
        Self::with_config(bounds, Config::new(max_depth))
    }

    pub fn with_config(bounds: Aabb, config: Config) -> Self {
        QuadTree {
            root: 0,
            config,
            nodes: vec![Node::new(bounds, config.max_depth, None)],
            objects: vec![],
            owners: vec![],
            len: 0,
        }
    }

    pub fn root(&self) -> NodeID {
        self.root
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn bounds(&self) -> &Aabb {
        &self.nodes[self.root].bounds
    }

    pub fn node(&self, id: NodeID) -> Option<&Node> {
        self.nodes.get(id)
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Number of objects stored
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn get(&self, id: ObjectId) -> Option<&T> {
        self.objects.get(id).and_then(Option::as_ref)
    }

    /// Mutable access to a stored object. Call [`QuadTree::reinsert`] after changing its bounds.
    pub fn get_mut(&mut self, id: ObjectId) -> Option<&mut T> {
        self.objects.get_mut(id).and_then(Option::as_mut)
    }

    /// The node currently holding `id`.
    pub fn owner_of(&self, id: ObjectId) -> Option<NodeID> {
        self.owners.get(id).copied().flatten()
    }

    pub fn iter(&self) -> impl Iterator<Item = (ObjectId, &T)> {
        self.objects
            .iter()
            .enumerate()
            .filter_map(|(id, o)| o.as_ref().map(|o| (id, o)))
    }

    /// Number of levels between `node` and the root.
    pub fn depth_of(&self, node: NodeID) -> Option<usize> {
        let mut n = self.nodes.get(node)?;
        let mut depth = 0;

        while let Some(parent) = n.parent {
            n = &self.nodes[parent];
            depth += 1;
        }

        Some(depth)
    }

    /// Split `node` into four quadrants. Returns `false` if the node is already split or its
    /// depth budget is spent.
    pub fn subdivide(&mut self, node: NodeID) -> bool {
        let n = &self.nodes[node];

        if n.quadrants.is_some() {
            return false;
        }

        let Some(depth) = n.max_depth.checked_sub(1) else {
            return false;
        };

        let first = self.nodes.len();
        let parts = n.bounds.split();

        trace!(node, bounds = %n.bounds, depth, "subdividing");

        for part in parts {
            self.nodes.push(Node::new(part, depth, Some(node)));
        }

        self.nodes[node].quadrants = Some([first, first + 1, first + 2, first + 3]);

        true
    }

    /// Store `object` starting from the root.
    ///
    /// An object outside the root bounds is kept at the root, unless the tree is strict.
    pub fn insert(&mut self, object: T) -> Result<ObjectId, InsertError<T>> {
        self.insert_into(self.root, object)
    }

    /// Store `object` in the subtree below `node`.
    ///
    /// If `node` does not enclose the object, it is attached to `node` itself. A strict tree rejects
    /// it instead.
    pub fn insert_into(&mut self, node: NodeID, object: T) -> Result<ObjectId, InsertError<T>> {
        let Some(n) = self.nodes.get(node) else {
            return Err(InsertError {
                reason: QuadTreeError::UnknownNode(node),
                object,
            });
        };

        let enclosed = object.is_enclosed_by(&n.bounds);

        if !enclosed && self.config.strict {
            let reason = if node == self.root {
                QuadTreeError::OutOfBounds
            } else {
                QuadTreeError::NotEnclosed { node }
            };

            return Err(InsertError { reason, object });
        }

        let id = self.objects.len();
        self.objects.push(Some(object));
        self.owners.push(None);
        self.len += 1;

        if enclosed {
            self.place(node, id);
        } else {
            if node != self.root {
                warn!(id, node, "object is not enclosed by the node it was inserted into");
            } else {
                debug!(id, "object lies outside the tree, keeping it at the root");
            }

            self.attach(node, id);
        }

        Ok(id)
    }

    /// Take `id` out of the tree. Returns `None` if it is not stored.
    pub fn remove(&mut self, id: ObjectId) -> Option<T> {
        let mut object = self.objects.get_mut(id)?.take()?;

        if let Some(owner) = self.owners[id].take() {
            self.nodes[owner].detach(id);
        }

        object.set_owner(None);
        self.len -= 1;

        debug!(id, "removed");

        Some(object)
    }

    /// Move `id` to the node matching its current bounds, starting from where it is now and
    /// climbing only as far as needed. Returns the new owner.
    ///
    /// If the object has left the root bounds entirely it is kept at the root and
    /// [`QuadTreeError::LeftBounds`] is returned.
    pub fn reinsert(&mut self, id: ObjectId) -> Result<NodeID, QuadTreeError> {
        if self.get(id).is_none() {
            return Err(QuadTreeError::UnknownObject(id));
        }

        let owner = self.owners[id].take().unwrap_or(self.root);
        self.nodes[owner].detach(id);

        let mut node = owner;
        loop {
            let object = self.object(id);

            if object.is_enclosed_by(&self.nodes[node].bounds) {
                let found = self.place(node, id);
                debug!(id, from = owner, to = found, "reinserted");

                return Ok(found);
            }

            match self.nodes[node].parent {
                Some(parent) => node = parent,
                None => break,
            }
        }

        warn!(id, bounds = %self.object(id).bounds(), "object left the tree bounds");
        self.attach(self.root, id);

        Err(QuadTreeError::LeftBounds { id })
    }

    /// Apply `f` to the object, then [`reinsert`](QuadTree::reinsert) it.
    pub fn relocate<F>(&mut self, id: ObjectId, f: F) -> Result<NodeID, QuadTreeError>
    where
        F: FnOnce(&mut T),
    {
        let object = self.get_mut(id).ok_or(QuadTreeError::UnknownObject(id))?;
        f(object);

        self.reinsert(id)
    }

    /// Walk down from `node`, which must enclose the object, subdividing on the way, and attach
    /// the object to the deepest node containing it.
    fn place(&mut self, mut node: NodeID, id: ObjectId) -> NodeID {
        loop {
            if self.nodes[node].quadrants.is_none() {
                self.subdivide(node);
            }

            let Some(quadrants) = self.nodes[node].quadrants else {
                break;
            };

            let center = self.nodes[node].center;
            let Some(q) = self.object(id).quadrant_of(center) else {
                break;
            };

            node = quadrants[q.index()];
        }

        trace!(id, node, "placed");
        self.attach(node, id)
    }

    fn attach(&mut self, node: NodeID, id: ObjectId) -> NodeID {
        self.nodes[node].children.push(id);
        self.owners[id] = Some(node);

        if let Some(object) = self.objects[id].as_mut() {
            object.set_owner(Some(node));
        }

        node
    }

    /// Only for ids known to be live.
    fn object(&self, id: ObjectId) -> &T {
        match &self.objects[id] {
            Some(object) => object,
            None => unreachable!("object {id} is referenced by the tree but was removed"),
        }
    }

    fn fmt_node(
        &self,
        f: &mut std::fmt::Formatter<'_>,
        node: NodeID,
        label: &str,
        indent: usize,
    ) -> std::fmt::Result {
        let n = &self.nodes[node];

        writeln!(
            f,
            "{:indent$}{label} {} d={} {:?}",
            "",
            n.bounds,
            n.max_depth,
            n.children,
            indent = indent * 2
        )?;

        if let Some(quadrants) = n.quadrants {
            for q in Quadrant::ALL {
                self.fmt_node(f, quadrants[q.index()], q.label(), indent + 1)?;
            }
        }

        Ok(())
    }
}

/// Indented dump of the node hierarchy: label, bounds, depth budget and attached ids.
impl<T: Spatial> Display for QuadTree<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.fmt_node(f, self.root, "root", 0)
    }
}
