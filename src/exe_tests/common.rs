#![cfg(test)]

use glam::{Vec2, Vec3};
use rand::Rng;
use octo::math::{Rect, AABB};
use octo::ElementId;

pub fn random_point(rng: &mut impl Rng, within: AABB) -> Vec3
{
    Vec3::new(
        rng.random_range(within.min.x..within.max.x),
        rng.random_range(within.min.y..within.max.y),
        rng.random_range(within.min.z..within.max.z))
}

pub fn random_aabb(rng: &mut impl Rng, within: AABB, max_half: f32) -> AABB
{
    let center = random_point(rng, within);
    let half = Vec3::new(
        rng.random_range(0.0..max_half),
        rng.random_range(0.0..max_half),
        rng.random_range(0.0..max_half));
    AABB::from_center_half(center, half)
}

pub fn random_rect(rng: &mut impl Rng, within: Rect, max_half: f32) -> Rect
{
    let center = Vec2::new(
        rng.random_range(within.min.x..within.max.x),
        rng.random_range(within.min.y..within.max.y));
    let half = Vec2::new(rng.random_range(0.0..max_half), rng.random_range(0.0..max_half));
    Rect::from_center_half(center, half)
}

// a multiple of step from min, no further than max
pub fn snap(rng: &mut impl Rng, min: f32, max: f32, step: f32) -> f32
{
    let cells = ((max - min) / step) as i32;
    min + step * rng.random_range(0..=cells) as f32
}

pub fn snapped_point(rng: &mut impl Rng, within: AABB, step: f32) -> Vec3
{
    Vec3::new(
        snap(rng, within.min.x, within.max.x, step),
        snap(rng, within.min.y, within.max.y, step),
        snap(rng, within.min.z, within.max.z, step))
}

// corners on the step grid, possibly flat along some axes
pub fn snapped_aabb(rng: &mut impl Rng, within: AABB, step: f32, max_cells: i32) -> AABB
{
    let min = snapped_point(rng, within, step);
    let size = Vec3::new(
        step * rng.random_range(0..=max_cells) as f32,
        step * rng.random_range(0..=max_cells) as f32,
        step * rng.random_range(0..=max_cells) as f32);
    AABB::new(min, (min + size).min(within.max))
}

pub fn snapped_rect(rng: &mut impl Rng, within: Rect, step: f32, max_cells: i32) -> Rect
{
    let min = Vec2::new(
        snap(rng, within.min.x, within.max.x, step),
        snap(rng, within.min.y, within.max.y, step));
    let size = Vec2::new(
        step * rng.random_range(0..=max_cells) as f32,
        step * rng.random_range(0..=max_cells) as f32);
    Rect::new(min, (min + size).min(within.max))
}

pub fn sorted(mut ids: Vec<ElementId>) -> Vec<ElementId>
{
    ids.sort();
    ids
}

// panics if any id is reported more than once
pub fn assert_unique(ids: &[ElementId])
{
    let deduped = sorted(ids.to_vec());
    assert!(deduped.windows(2).all(|w| w[0] != w[1]), "Duplicate ids in {ids:?}");
}
