use std::fmt::{Debug, Formatter};
use glam::{Vec3, Vec4, Vec4Swizzles};
use nab_octo::utils::ShortTypeName;
use crate::{Intersection, Intersects, AABB};

#[derive(Default, Clone, Copy, PartialEq)]
pub struct Sphere(pub Vec4);
impl Sphere
{
    #[inline] #[must_use] pub fn new(center: Vec3, radius: f32) -> Self
    {
        Self(center.extend(radius))
    }

    #[inline] #[must_use] pub fn center(&self) -> Vec3 { self.0.xyz() }
    #[inline] #[must_use] pub fn radius(&self) -> f32 { self.0.w }
    #[inline] #[must_use] pub fn radius_squared(&self) -> f32 { self.0.w * self.0.w }
}
impl Debug for Sphere
{
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result
    {
        f.debug_struct(Self::short_type_name())
            .field("center", &self.center())
            .field("radius", &self.radius())
            .finish()
    }
}
impl Intersects<AABB> for Sphere
{
    fn get_intersection(&self, other: AABB) -> Intersection
    {
        let center = self.center();
        let r2 = self.radius_squared();
        if other.closest_point(center).distance_squared(center) > r2
        {
            return Intersection::None;
        }
        match other.farthest_point(center).distance_squared(center) <= r2
        {
            true => Intersection::FullyContained,
            false => Intersection::Overlapping,
        }
    }
}

#[cfg(test)]
mod tests
{
    use super::*;

    #[test]
    fn basics()
    {
        let sphere = Sphere::new(Vec3::new(0.0, 2.0, 0.0), 5.0);
        assert_eq!(sphere.center(), Vec3::new(0.0, 2.0, 0.0));
        assert_eq!(sphere.radius(), 5.0);
        assert_eq!(sphere.radius_squared(), 25.0);
        assert_eq!(format!("{sphere:?}"), "Sphere { center: Vec3(0.0, 2.0, 0.0), radius: 5.0 }");
    }

    #[test]
    fn aabb_intersections()
    {
        let sphere = Sphere::new(Vec3::ZERO, 2.0);
        assert_eq!(sphere.get_intersection(AABB::new(Vec3::splat(-1.0), Vec3::splat(1.0))), Intersection::FullyContained);
        assert_eq!(sphere.get_intersection(AABB::new(Vec3::splat(1.0), Vec3::splat(3.0))), Intersection::Overlapping);
        // box corner is outside the sphere even though each axis is within the radius
        assert_eq!(sphere.get_intersection(AABB::new(Vec3::splat(1.5), Vec3::splat(3.0))), Intersection::None);
        assert_eq!(sphere.get_intersection(AABB::new(Vec3::new(2.0, -1.0, -1.0), Vec3::new(3.0, 1.0, 1.0))), Intersection::Overlapping);
    }
}
