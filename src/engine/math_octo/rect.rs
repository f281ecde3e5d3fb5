use glam::{BVec2, Vec2};
use serde::{Deserialize, Serialize};
use crate::{Intersection, Intersects};

// An axis aligned 2D box
#[derive(Default, Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect
{
    pub min: Vec2,
    pub max: Vec2,
}
impl Rect
{
    #[inline] #[must_use] pub const fn new(min: Vec2, max: Vec2) -> Self { Self { min, max } }
    #[inline] #[must_use]
    pub fn from_center_half(center: Vec2, half: Vec2) -> Self
    {
        Self { min: center - half, max: center + half }
    }

    #[inline] #[must_use] pub fn half(self) -> Vec2 { (self.max - self.min) / 2.0 }
    #[inline] #[must_use] pub fn center(self) -> Vec2 { (self.min + self.max) / 2.0 }

    #[must_use]
    pub fn fully_contains(self, rhs: Self) -> bool
    {
        self.min.cmple(rhs.min).all() &&
        self.max.cmpge(rhs.max).all()
    }

    // rhs' max edge must be strictly inside of this rect's max edge
    #[must_use]
    pub fn contains(self, rhs: Self) -> bool
    {
        self.min.cmple(rhs.min).all() &&
        self.max.cmpgt(rhs.max).all()
    }

    #[must_use]
    pub fn overlaps(self, rhs: Self) -> bool
    {
        self.min.cmple(rhs.max).all() &&
        self.max.cmpge(rhs.min).all()
    }

    #[must_use]
    pub fn contains_point(self, point: Vec2) -> bool
    {
        self.min.cmple(point).all() &&
        self.max.cmpge(point).all()
    }

    #[inline] #[must_use]
    pub fn closest_point(self, point: Vec2) -> Vec2 { point.max(self.min).min(self.max) }

    #[inline] #[must_use]
    pub fn farthest_point(self, point: Vec2) -> Vec2
    {
        Vec2::select(point.cmplt(self.center()), self.max, self.min)
    }

    // bit 0 = +x, bit 1 = +y
    #[must_use]
    pub fn quadrant(self, index: usize) -> Self
    {
        debug_assert!(index < 4, "Quadrant {index} out of range");
        let center = self.center();
        let high = BVec2::new(index & 1 != 0, index & 2 != 0);
        Self
        {
            min: Vec2::select(high, center, self.min),
            max: Vec2::select(high, self.max, center),
        }
    }
}
impl Intersects<Rect> for Rect
{
    fn get_intersection(&self, other: Rect) -> Intersection
    {
        if self.fully_contains(other) { Intersection::FullyContained }
        else if self.overlaps(other) { Intersection::Overlapping }
        else { Intersection::None }
    }
}
impl Intersects<Rect> for Vec2
{
    fn get_intersection(&self, other: Rect) -> Intersection
    {
        match other.contains_point(*self)
        {
            true => Intersection::Overlapping,
            false => Intersection::None,
        }
    }
}

#[cfg(test)]
mod tests
{
    use super::*;

    #[test]
    fn sizes()
    {
        let rect = Rect::new(Vec2::new(-1.0, 2.0), Vec2::new(3.0, 5.0));
        assert_eq!(rect.half(), Vec2::new(2.0, 1.5));
        assert_eq!(rect.center(), Vec2::new(1.0, 3.5));
        assert_eq!(Rect::from_center_half(Vec2::new(1.0, 3.5), Vec2::new(2.0, 1.5)), rect);
    }

    #[test]
    fn containment()
    {
        let outer = Rect::new(Vec2::ZERO, Vec2::splat(4.0));
        let inner = Rect::new(Vec2::ONE, Vec2::splat(2.0));
        assert!(outer.fully_contains(inner));
        assert!(outer.contains(inner));
        assert!(outer.fully_contains(outer));
        assert!(!outer.contains(outer));

        let edge = Rect::new(Vec2::ONE, Vec2::new(4.0, 2.0));
        assert!(outer.fully_contains(edge));
        assert!(!outer.contains(edge));
    }

    #[test]
    fn overlaps()
    {
        let a = Rect::new(Vec2::ZERO, Vec2::splat(2.0));
        let touching = Rect::new(Vec2::new(2.0, 0.0), Vec2::new(3.0, 1.0));
        let apart = Rect::new(Vec2::splat(5.0), Vec2::splat(6.0));
        assert!(a.overlaps(touching));
        assert!(touching.overlaps(a));
        assert!(!a.overlaps(apart));

        assert_eq!(a.get_intersection(Rect::new(Vec2::ONE, Vec2::splat(3.0))), Intersection::Overlapping);
        assert_eq!(a.get_intersection(apart), Intersection::None);
        assert_eq!(Vec2::ONE.get_intersection(a), Intersection::Overlapping);
    }

    #[test]
    fn quadrants()
    {
        let rect = Rect::new(Vec2::splat(-2.0), Vec2::splat(2.0));
        assert_eq!(rect.quadrant(0), Rect::new(Vec2::splat(-2.0), Vec2::ZERO));
        assert_eq!(rect.quadrant(1), Rect::new(Vec2::new(0.0, -2.0), Vec2::new(2.0, 0.0)));
        assert_eq!(rect.quadrant(2), Rect::new(Vec2::new(-2.0, 0.0), Vec2::new(0.0, 2.0)));
        assert_eq!(rect.quadrant(3), Rect::new(Vec2::ZERO, Vec2::splat(2.0)));
    }
}
