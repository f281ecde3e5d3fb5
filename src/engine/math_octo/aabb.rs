use glam::{BVec3, Vec3};
use serde::{Deserialize, Serialize};
use crate::{Intersection, Intersects};

#[derive(Default, Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AABB
{
    pub min: Vec3,
    pub max: Vec3,
}
impl AABB
{
    #[inline] #[must_use] pub const fn new(min: Vec3, max: Vec3) -> Self { Self { min, max } }
    #[inline] #[must_use]
    pub fn from_center_half(center: Vec3, half: Vec3) -> Self
    {
        Self { min: center - half, max: center + half }
    }

    #[inline] #[must_use] pub fn half(self) -> Vec3 { (self.max - self.min) / 2.0 }
    #[inline] #[must_use] pub fn center(self) -> Vec3 { (self.min + self.max) / 2.0 }
    // Inclusive on both edges
    #[must_use]
    pub fn fully_contains(self, rhs: Self) -> bool
    {
        self.min.cmple(rhs.min).all() &&
        self.max.cmpge(rhs.max).all()
    }

    // Like fully_contains, but rhs' max edge must be strictly inside of this box's max edge
    #[must_use]
    pub fn contains(self, rhs: Self) -> bool
    {
        self.min.cmple(rhs.min).all() &&
        self.max.cmpgt(rhs.max).all()
    }

    // Shared faces count as overlapping
    #[must_use]
    pub fn overlaps(self, rhs: Self) -> bool
    {
        self.min.cmple(rhs.max).all() &&
        self.max.cmpge(rhs.min).all()
    }

    #[must_use]
    pub fn contains_point(self, point: Vec3) -> bool
    {
        self.min.cmple(point).all() &&
        self.max.cmpge(point).all()
    }

    #[inline] #[must_use]
    pub fn closest_point(self, point: Vec3) -> Vec3 { point.max(self.min).min(self.max) }

    #[inline] #[must_use]
    pub fn farthest_point(self, point: Vec3) -> Vec3
    {
        Vec3::select(point.cmplt(self.center()), self.max, self.min)
    }

    // One of the eight sub-boxes split at the center; bit 0 = +x, bit 1 = +y, bit 2 = +z
    #[must_use]
    pub fn octant(self, index: usize) -> Self
    {
        debug_assert!(index < 8, "Octant {index} out of range");
        let center = self.center();
        let high = BVec3::new(index & 1 != 0, index & 2 != 0, index & 4 != 0);
        Self
        {
            min: Vec3::select(high, center, self.min),
            max: Vec3::select(high, self.max, center),
        }
    }
}
impl Intersects<AABB> for AABB
{
    fn get_intersection(&self, other: AABB) -> Intersection
    {
        if self.fully_contains(other) { Intersection::FullyContained }
        else if self.overlaps(other) { Intersection::Overlapping }
        else { Intersection::None }
    }
}
impl Intersects<AABB> for Vec3
{
    fn get_intersection(&self, other: AABB) -> Intersection
    {
        match other.contains_point(*self)
        {
            true => Intersection::Overlapping,
            false => Intersection::None,
        }
    }
}
