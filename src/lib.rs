pub mod camera;
pub mod config;
pub mod quadtree;

pub use config::Config;
pub use quadtree::Aabb;
pub use quadtree::Entry;
pub use quadtree::InsertError;
pub use quadtree::NodeID;
pub use quadtree::ObjectId;
pub use quadtree::Point;
pub use quadtree::QuadTree;
pub use quadtree::QuadTreeError;
pub use quadtree::Quadrant;
pub use quadtree::Spatial;
