use glam::{Vec2, Vec3};
use crate::geometry_tests::clip_slabs;
use crate::{Intersection, Intersects, Rect, AABB};

// A half-line. direction does not need to be normalized
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray
{
    pub origin: Vec3,
    pub direction: Vec3,
}
impl Ray
{
    #[inline] #[must_use]
    pub fn new(origin: Vec3, direction: Vec3) -> Self { Self { origin, direction } }
}
impl Intersects<AABB> for Ray
{
    fn get_intersection(&self, other: AABB) -> Intersection
    {
        match clip_slabs(self.origin.to_array(), self.direction.to_array(), other.min.to_array(), other.max.to_array(), 0.0, f32::INFINITY)
        {
            true => Intersection::Overlapping,
            false => Intersection::None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment
{
    pub start: Vec3,
    pub end: Vec3,
}
impl Segment
{
    #[inline] #[must_use]
    pub fn new(start: Vec3, end: Vec3) -> Self { Self { start, end } }
}
impl Intersects<AABB> for Segment
{
    fn get_intersection(&self, other: AABB) -> Intersection
    {
        let dir = self.end - self.start;
        match clip_slabs(self.start.to_array(), dir.to_array(), other.min.to_array(), other.max.to_array(), 0.0, 1.0)
        {
            true => Intersection::Overlapping,
            false => Intersection::None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment2
{
    pub start: Vec2,
    pub end: Vec2,
}
impl Segment2
{
    #[inline] #[must_use]
    pub fn new(start: Vec2, end: Vec2) -> Self { Self { start, end } }
}
impl Intersects<Rect> for Segment2
{
    fn get_intersection(&self, other: Rect) -> Intersection
    {
        let dir = self.end - self.start;
        match clip_slabs(self.start.to_array(), dir.to_array(), other.min.to_array(), other.max.to_array(), 0.0, 1.0)
        {
            true => Intersection::Overlapping,
            false => Intersection::None,
        }
    }
}
