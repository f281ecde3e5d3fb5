use glam::Vec2;
use crate::{Intersection, Intersects, Rect};

#[derive(Default, Debug, Clone, Copy, PartialEq)]
pub struct Circle
{
    pub center: Vec2,
    pub radius: f32,
}
impl Circle
{
    #[inline] #[must_use] pub const fn new(center: Vec2, radius: f32) -> Self { Self { center, radius } }

    #[inline] #[must_use] pub fn radius_squared(self) -> f32 { self.radius * self.radius }
}
impl Intersects<Rect> for Circle
{
    fn get_intersection(&self, other: Rect) -> Intersection
    {
        let r2 = self.radius_squared();
        if other.closest_point(self.center).distance_squared(self.center) > r2
        {
            return Intersection::None;
        }
        match other.farthest_point(self.center).distance_squared(self.center) <= r2
        {
            true => Intersection::FullyContained,
            false => Intersection::Overlapping,
        }
    }
}
