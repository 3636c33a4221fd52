use crate::quadtree::Aabb;
use crate::quadtree::NodeID;
use crate::quadtree::ObjectId;
use crate::quadtree::QuadTree;
use crate::quadtree::Spatial;

impl<T: Spatial> QuadTree<T> {
    /// Every object in the tree.
    pub fn get_children(&self) -> Vec<ObjectId> {
        self.select_children(self.root)
    }

    /// Every object stored in the subtree below `node`, unfiltered.
    pub fn select_children(&self, node: NodeID) -> Vec<ObjectId> {
        let mut out = Vec::new();

        if node < self.nodes.len() {
            self.collect(node, &mut out);
        }

        out
    }

    /// Objects lying entirely within `region`.
    pub fn get_enclosed(&self, region: &Aabb) -> Vec<ObjectId> {
        let mut out = Vec::new();
        self.select(self.root, region, &|o: &T| o.is_enclosed_by(region), &mut out);

        out
    }

    /// Objects sharing at least one point with `region`.
    pub fn get_overlapping(&self, region: &Aabb) -> Vec<ObjectId> {
        let mut out = Vec::new();
        self.select(self.root, region, &|o: &T| o.overlaps(region), &mut out);

        out
    }

    fn collect(&self, node: NodeID, out: &mut Vec<ObjectId>) {
        let n = &self.nodes[node];

        out.extend_from_slice(&n.children);

        if let Some(quadrants) = n.quadrants {
            for q in quadrants {
                self.collect(q, out);
            }
        }
    }

    /// Subtrees not touching `region` are skipped. Objects at a node inside `region` are taken
    /// without testing, as long as they lie within that node; everything else goes through `test`.
    ///
    /// The caller is responsible for pruning `node` itself, which lets the root always be visited
    /// and its out-of-bounds objects be tested.
    fn select<F>(&self, node: NodeID, region: &Aabb, test: &F, out: &mut Vec<ObjectId>)
    where
        F: Fn(&T) -> bool,
    {
        let n = &self.nodes[node];
        let contained = region.contains(&n.bounds);

        for &id in &n.children {
            let object = self.object(id);

            if (contained && object.is_enclosed_by(&n.bounds)) || test(object) {
                out.push(id);
            }
        }

        let Some(quadrants) = n.quadrants else {
            return;
        };

        for q in quadrants {
            if self.nodes[q].bounds.intersects(region) {
                self.select(q, region, test, out);
            }
        }
    }
}
