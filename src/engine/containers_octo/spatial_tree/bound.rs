use std::fmt::Debug;
use glam::{Vec2, Vec3};
use math_octo::{Intersects, Rect, AABB};
use crate::spatial_tree::{OctreeQuery, QuadTreeQuery};

// What a spatial tree needs from the bounds it partitions with. Each node's children split its
// bound in half along every axis; child `i` takes the high half of axis `k` when bit `k` of `i` is set
pub trait SpatialBound: Copy + PartialEq + Debug
{
    const CHILD_COUNT: usize;

    type Point: Copy + Debug;
    // the closed set of shapes the tree can be queried with
    type Query: Intersects<Self> + Debug;

    // inclusive of shared edges
    fn overlaps(self, other: Self) -> bool;
    // other's max edge must be strictly inside of self's max edge
    fn contains(self, other: Self) -> bool;
    // inclusive on both edges
    fn fully_contains(self, other: Self) -> bool;

    fn min(self) -> Self::Point;
    fn max(self) -> Self::Point;
    fn center(self) -> Self::Point;
    fn extents(self) -> Self::Point; // half size

    fn child(self, index: usize) -> Self;
}

impl SpatialBound for AABB
{
    const CHILD_COUNT: usize = 8;

    type Point = Vec3;
    type Query = OctreeQuery;

    #[inline] fn overlaps(self, other: Self) -> bool { AABB::overlaps(self, other) }
    #[inline] fn contains(self, other: Self) -> bool { AABB::contains(self, other) }
    #[inline] fn fully_contains(self, other: Self) -> bool { AABB::fully_contains(self, other) }

    #[inline] fn min(self) -> Vec3 { self.min }
    #[inline] fn max(self) -> Vec3 { self.max }
    #[inline] fn center(self) -> Vec3 { AABB::center(self) }
    #[inline] fn extents(self) -> Vec3 { self.half() }

    #[inline] fn child(self, index: usize) -> Self { self.octant(index) }
}

impl SpatialBound for Rect
{
    const CHILD_COUNT: usize = 4;

    type Point = Vec2;
    type Query = QuadTreeQuery;

    #[inline] fn overlaps(self, other: Self) -> bool { Rect::overlaps(self, other) }
    #[inline] fn contains(self, other: Self) -> bool { Rect::contains(self, other) }
    #[inline] fn fully_contains(self, other: Self) -> bool { Rect::fully_contains(self, other) }

    #[inline] fn min(self) -> Vec2 { self.min }
    #[inline] fn max(self) -> Vec2 { self.max }
    #[inline] fn center(self) -> Vec2 { Rect::center(self) }
    #[inline] fn extents(self) -> Vec2 { self.half() }

    #[inline] fn child(self, index: usize) -> Self { self.quadrant(index) }
}

#[cfg(test)]
mod tests
{
    use super::*;

    // every child must lie inside its parent and the children must tile the parent exactly
    fn check_children<B: SpatialBound>(parent: B, volume: impl Fn(B) -> f32)
    {
        let mut total = 0.0;
        for i in 0..B::CHILD_COUNT
        {
            let child = parent.child(i);
            assert!(parent.fully_contains(child), "child {i} {child:?} outside of {parent:?}");
            total += volume(child);
        }
        assert_eq!(total, volume(parent));
    }

    #[test]
    fn octants()
    {
        let root = AABB::new(Vec3::new(-8.0, 0.0, 2.0), Vec3::new(8.0, 4.0, 6.0));
        check_children(root, |b| { let e = b.extents(); e.x * e.y * e.z });
        assert_eq!(SpatialBound::center(root), Vec3::new(0.0, 2.0, 4.0));
        assert_eq!(root.extents(), Vec3::new(8.0, 2.0, 2.0));
        assert_eq!(SpatialBound::min(root.child(7)), SpatialBound::center(root));
        assert_eq!(SpatialBound::max(root.child(0)), SpatialBound::center(root));
    }

    #[test]
    fn quadrants()
    {
        let root = Rect::new(Vec2::ZERO, Vec2::new(10.0, 4.0));
        check_children(root, |b| { let e = b.extents(); e.x * e.y });
        assert_eq!(root.extents(), Vec2::new(5.0, 2.0));
        assert_eq!(SpatialBound::min(root.child(3)), Vec2::new(5.0, 2.0));
    }
}
