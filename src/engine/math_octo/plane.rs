use std::fmt::{Debug, Formatter};
use glam::{Vec3, Vec4, Vec4Swizzles};
use nab_octo::utils::ShortTypeName;
use crate::{Facing, GetFacing, AABB};

// Points p where dot(normal, p) == distance. The normal points to the 'front' side
#[derive(Copy, Clone, PartialEq)]
pub struct Plane(pub Vec4);
impl Plane
{
    // An 'invalid' plane with all zero values, primarily for 'fast' initialization
    pub const NULL: Plane = Plane(Vec4::ZERO);

    #[inline] #[must_use]
    pub const fn new(normal: Vec3, distance: f32) -> Self
    {
        Self(Vec4::new(normal.x, normal.y, normal.z, distance))
    }

    #[inline] #[must_use] pub fn normal(self) -> Vec3 { self.0.xyz() }
    #[inline] #[must_use] pub fn distance(self) -> f32 { self.0.w }

    #[inline] #[must_use]
    pub fn normalized(self) -> Self
    {
        let len = self.0.xyz().length_recip();
        Self(self.0 * len)
    }

    // Positive in front of the plane. Only a true distance if the plane is normalized
    #[inline] #[must_use]
    pub fn signed_distance(self, point: Vec3) -> f32
    {
        self.normal().dot(point) - self.distance()
    }
}
impl Debug for Plane
{
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result
    {
        f.debug_struct(Self::short_type_name())
            .field("normal", &self.normal())
            .field("distance", &self.distance())
            .finish()
    }
}
impl GetFacing<AABB> for Plane
{
    fn get_facing(&self, other: AABB) -> Facing
    {
        // the corners furthest along and against the normal
        let positive = self.normal().cmpge(Vec3::ZERO);
        let far_corner = Vec3::select(positive, other.max, other.min);
        let near_corner = Vec3::select(positive, other.min, other.max);

        if self.signed_distance(near_corner) > 0.0 { Facing::InFront }
        else if self.signed_distance(far_corner) < 0.0 { Facing::Behind }
        else { Facing::On }
    }
}

#[cfg(test)]
mod tests
{
    use approx::assert_relative_eq;
    use super::*;

    #[test]
    fn basic()
    {
        let plane = Plane::new(Vec3::new(1.0, 2.0, 3.0), 3.0);
        assert_eq!(plane.normal(), Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(plane.distance(), 3.0);

        let normalized = plane.normalized();
        assert_relative_eq!(normalized.normal().length(), 1.0);
        assert_relative_eq!(normalized.distance(), 3.0 / 14.0f32.sqrt());
    }

    #[test]
    fn signed_distances()
    {
        let plane = Plane::new(Vec3::Y, 5.0);
        assert_eq!(plane.signed_distance(Vec3::new(3.0, 7.0, 1.0)), 2.0);
        assert_eq!(plane.signed_distance(Vec3::new(3.0, 5.0, 1.0)), 0.0);
        assert_eq!(plane.signed_distance(Vec3::ZERO), -5.0);
    }

    #[test]
    fn aabb_facing()
    {
        let plane = Plane::new(Vec3::X, 2.0);
        assert_eq!(plane.get_facing(AABB::new(Vec3::splat(3.0), Vec3::splat(4.0))), Facing::InFront);
        assert_eq!(plane.get_facing(AABB::new(Vec3::ZERO, Vec3::splat(4.0))), Facing::On);
        assert_eq!(plane.get_facing(AABB::new(Vec3::splat(-4.0), Vec3::ONE)), Facing::Behind);

        let tilted = Plane::new(Vec3::new(-1.0, 1.0, 0.0).normalize(), 0.0);
        assert_eq!(tilted.get_facing(AABB::new(Vec3::new(-3.0, 1.0, 0.0), Vec3::new(-2.0, 2.0, 1.0))), Facing::InFront);
        assert_eq!(tilted.get_facing(AABB::new(Vec3::new(2.0, -3.0, 0.0), Vec3::new(3.0, -2.0, 1.0))), Facing::Behind);
    }
}
