mod link;
pub use link::*;

mod free_vec;
pub use free_vec::*;

pub mod spatial_tree;
pub use spatial_tree::{Octree, QuadTree, SpatialTree};
