use std::fmt::{Debug, Formatter};
use glam::{Vec2, Vec3};
use math_octo::{Circle, Frustum, Intersection, Intersects, Ray, Rect, Segment, Segment2, Sphere, AABB};
use nab_octo::utils::FormatBits;

#[derive(Debug, Clone, PartialEq)]
pub enum OctreeQuery
{
    Point(Vec3),
    Segment(Segment),
    Ray(Ray),
    Aabb(AABB),
    Sphere(Sphere),
    Frustum(Frustum),
    FrustumNoDepth(Frustum), // ignores the near and far planes
}
impl Intersects<AABB> for OctreeQuery
{
    fn get_intersection(&self, other: AABB) -> Intersection
    {
        match self
        {
            OctreeQuery::Point(point) => point.get_intersection(other),
            OctreeQuery::Segment(segment) => segment.get_intersection(other),
            OctreeQuery::Ray(ray) => ray.get_intersection(other),
            OctreeQuery::Aabb(aabb) => aabb.get_intersection(other),
            OctreeQuery::Sphere(sphere) => sphere.get_intersection(other),
            OctreeQuery::Frustum(frustum) => frustum.get_intersection(other),
            OctreeQuery::FrustumNoDepth(frustum) => frustum.get_intersection_no_depth(other),
        }
    }
}
impl From<Vec3> for OctreeQuery
{
    fn from(point: Vec3) -> Self { Self::Point(point) }
}
impl From<Segment> for OctreeQuery
{
    fn from(segment: Segment) -> Self { Self::Segment(segment) }
}
impl From<Ray> for OctreeQuery
{
    fn from(ray: Ray) -> Self { Self::Ray(ray) }
}
impl From<AABB> for OctreeQuery
{
    fn from(aabb: AABB) -> Self { Self::Aabb(aabb) }
}
impl From<Sphere> for OctreeQuery
{
    fn from(sphere: Sphere) -> Self { Self::Sphere(sphere) }
}
impl From<Frustum> for OctreeQuery
{
    fn from(frustum: Frustum) -> Self { Self::Frustum(frustum) }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum QuadTreeQuery
{
    Point(Vec2),
    Segment(Segment2),
    Rect(Rect),
    Circle(Circle),
}
impl Intersects<Rect> for QuadTreeQuery
{
    fn get_intersection(&self, other: Rect) -> Intersection
    {
        match self
        {
            QuadTreeQuery::Point(point) => point.get_intersection(other),
            QuadTreeQuery::Segment(segment) => segment.get_intersection(other),
            QuadTreeQuery::Rect(rect) => rect.get_intersection(other),
            QuadTreeQuery::Circle(circle) => circle.get_intersection(other),
        }
    }
}
impl From<Vec2> for QuadTreeQuery
{
    fn from(point: Vec2) -> Self { Self::Point(point) }
}
impl From<Segment2> for QuadTreeQuery
{
    fn from(segment: Segment2) -> Self { Self::Segment(segment) }
}
impl From<Rect> for QuadTreeQuery
{
    fn from(rect: Rect) -> Self { Self::Rect(rect) }
}
impl From<Circle> for QuadTreeQuery
{
    fn from(circle: Circle) -> Self { Self::Circle(circle) }
}

// Visited set for deduplicating elements referenced from multiple leaves. Owned by the caller
// so concurrent queries never share one. Every bit is cleared again before a query returns
#[derive(Default)]
pub struct QueryScratch
{
    visited: Vec<u64>,
}
impl QueryScratch
{
    #[inline] #[must_use]
    pub fn new() -> Self { Self::default() }

    pub(crate) fn ensure_capacity(&mut self, slots: usize)
    {
        let words = slots.div_ceil(64);
        if self.visited.len() < words
        {
            self.visited.resize(words, 0);
        }
    }

    // true if index was not already marked
    #[inline]
    pub(crate) fn mark(&mut self, index: usize) -> bool
    {
        let bit = 1u64 << (index % 64);
        let word = &mut self.visited[index / 64];
        let fresh = *word & bit == 0;
        *word |= bit;
        fresh
    }

    #[inline]
    pub(crate) fn unmark(&mut self, index: usize)
    {
        self.visited[index / 64] &= !(1u64 << (index % 64));
    }

    #[inline] #[must_use]
    pub fn is_clear(&self) -> bool { self.visited.iter().all(|w| *w == 0) }
}
impl Debug for QueryScratch
{
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result
    {
        f.debug_tuple("QueryScratch").field(&FormatBits(&self.visited)).finish()
    }
}
