pub use containers_octo as containers;
pub use math_octo as math;
pub use nab_octo as nab;

pub use containers_octo::spatial_tree::{ElementId, OctreeQuery, QuadTreeQuery, QueryScratch, SpatialBound, SpatialError, TreeConfig};
pub use containers_octo::{Octree, QuadTree, SpatialTree};
