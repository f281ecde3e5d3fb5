use std::fmt::{Debug, Formatter};
use math_octo::{Rect, AABB};
use crate::SlotKey;

mod bound;
pub use bound::*;

mod config;
pub use config::*;

mod error;
pub use error::*;

mod query;
pub use query::*;

mod inner;
mod maintenance;

mod tree;
pub use tree::*;

pub type Octree<T> = SpatialTree<T, AABB>;
pub type QuadTree<T> = SpatialTree<T, Rect>;

// Handle to an element stored in a SpatialTree. Only meaningful to the tree that returned it;
// erasing the element invalidates the id even if its slot gets reused
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(SlotKey);
impl ElementId
{
    // the slot index, stable for the lifetime of the element
    #[inline] #[must_use] pub fn index(self) -> usize { self.0.index() }
    #[inline] #[must_use] pub fn generation(self) -> u32 { self.0.generation() }
}
impl Debug for ElementId
{
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result
    {
        write!(f, "ElementId({:?})", self.0)
    }
}
