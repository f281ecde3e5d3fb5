use std::fmt::{Debug, Formatter};
use glam::{Mat4, Vec3, Vec4};
use nab_octo::utils::ShortTypeName;
use crate::{Facing, GetFacing, Intersection, Intersects, Plane, AABB};

#[derive(Clone, PartialEq)]
pub struct Frustum
{
    pub planes: [Plane; 6], // ordered left, right, top, bottom, near, far; normals point outward
}
impl Frustum
{
    // if input is projection, planes are in view space
    // if view projection, planes are in world space
    // expects a [0, 1] clip depth range (what glam's perspective_* produce)
    #[must_use]
    pub fn from_matrix(col_major_mtx: &Mat4) -> Self
    {
        let rows = col_major_mtx.transpose(); // glam stores in column-major

        // clip space half-spaces with the inside where dot(v, (p, 1)) >= 0
        let outward = |v: Vec4| Plane(Vec4::new(-v.x, -v.y, -v.z, v.w)).normalized();
        let planes =
        [
            outward(rows.w_axis + rows.x_axis), // left
            outward(rows.w_axis - rows.x_axis), // right
            outward(rows.w_axis - rows.y_axis), // top
            outward(rows.w_axis + rows.y_axis), // bottom
            outward(rows.z_axis), // near
            outward(rows.w_axis - rows.z_axis), // far
        ];
        Self { planes }
    }

    #[inline] #[must_use] pub fn left(&self) -> Plane { self.planes[0] }
    #[inline] #[must_use] pub fn right(&self) -> Plane { self.planes[1] }
    #[inline] #[must_use] pub fn top(&self) -> Plane { self.planes[2] }
    #[inline] #[must_use] pub fn bottom(&self) -> Plane { self.planes[3] }
    #[inline] #[must_use] pub fn near(&self) -> Plane { self.planes[4] }
    #[inline] #[must_use] pub fn far(&self) -> Plane { self.planes[5] }

    // The four side planes, i.e. the frustum without its near and far caps
    #[inline] #[must_use]
    pub fn side_planes(&self) -> &[Plane] { &self.planes[..4] }

    // Like get_intersection, but ignores the near and far planes (an infinitely deep frustum)
    #[must_use]
    pub fn get_intersection_no_depth(&self, aabb: AABB) -> Intersection
    {
        classify_aabb(self.side_planes(), aabb)
    }
}
impl Debug for Frustum
{
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result
    {
        f.debug_struct(Self::short_type_name())
            .field("left", &self.left())
            .field("right", &self.right())
            .field("top", &self.top())
            .field("bottom", &self.bottom())
            .field("near", &self.near())
            .field("far", &self.far())
            .finish()
    }
}

// Exact box classification. The per-plane pass settles most boxes; one that straddles planes near
// an edge or corner of the volume only overlaps if the region inside every plane and the box has a vertex
fn classify_aabb(planes: &[Plane], aabb: AABB) -> Intersection
{
    let mut straddling = false;
    for p in planes
    {
        match p.get_facing(aabb)
        {
            Facing::InFront => return Intersection::None,
            Facing::On => straddling = true,
            Facing::Behind => {},
        }
    }
    if !straddling
    {
        return Intersection::FullyContained;
    }
    match has_common_vertex(planes, aabb)
    {
        true => Intersection::Overlapping,
        false => Intersection::None,
    }
}

const MAX_CLIP_PLANES: usize = 12;

// Intersect the half-spaces behind every plane with the box. The result is bounded, so it is
// non-empty exactly when some three of its planes meet at a point behind all the others
fn has_common_vertex(planes: &[Plane], aabb: AABB) -> bool
{
    debug_assert!(planes.len() + 6 <= MAX_CLIP_PLANES);
    let mut clip = [Plane::NULL; MAX_CLIP_PLANES];
    let count = planes.len() + 6;
    clip[..planes.len()].copy_from_slice(planes);
    clip[planes.len()..count].copy_from_slice(&
    [
        Plane::new(Vec3::NEG_X, -aabb.min.x),
        Plane::new(Vec3::X, aabb.max.x),
        Plane::new(Vec3::NEG_Y, -aabb.min.y),
        Plane::new(Vec3::Y, aabb.max.y),
        Plane::new(Vec3::NEG_Z, -aabb.min.z),
        Plane::new(Vec3::Z, aabb.max.z),
    ]);
    let clip = &clip[..count];

    // touching counts as overlapping
    let tolerance = 1e-4 * aabb.min.abs().max(aabb.max.abs()).max_element().max(1.0);
    for i in 0..count
    {
        for j in (i + 1)..count
        {
            let ij = clip[i].normal().cross(clip[j].normal());
            for k in (j + 1)..count
            {
                let det = clip[k].normal().dot(ij);
                if det.abs() < 1e-6
                {
                    continue;
                }

                let vertex = (clip[i].distance() * clip[j].normal().cross(clip[k].normal()) +
                    clip[j].distance() * clip[k].normal().cross(clip[i].normal()) +
                    clip[k].distance() * ij) / det;
                if clip.iter().all(|p| p.signed_distance(vertex) <= tolerance)
                {
                    return true;
                }
            }
        }
    }
    false
}

impl Intersects<AABB> for Frustum
{
    fn get_intersection(&self, other: AABB) -> Intersection
    {
        classify_aabb(&self.planes, other)
    }
}

#[cfg(test)]
mod tests
{
    use std::f32::consts::FRAC_PI_2;
    use approx::assert_relative_eq;
    use super::*;

    // camera at the origin looking down +Z, 90 degree fov, depth 1..10
    fn test_frustum() -> Frustum
    {
        let projection = Mat4::perspective_lh(FRAC_PI_2, 1.0, 1.0, 10.0);
        let view = Mat4::look_at_lh(Vec3::ZERO, Vec3::Z, Vec3::Y);
        Frustum::from_matrix(&(projection * view))
    }

    #[test]
    fn planes()
    {
        let frustum = test_frustum();
        let recip_sqrt2 = 1.0 / 2.0_f32.sqrt();

        let expected_planes = [
            Plane::new(Vec3::new(-recip_sqrt2, 0.0, -recip_sqrt2), 0.0),
            Plane::new(Vec3::new(recip_sqrt2, 0.0, -recip_sqrt2), 0.0),
            Plane::new(Vec3::new(0.0, recip_sqrt2, -recip_sqrt2), 0.0),
            Plane::new(Vec3::new(0.0, -recip_sqrt2, -recip_sqrt2), 0.0),
            Plane::new(Vec3::new(0.0, 0.0, -1.0), -1.0),
            Plane::new(Vec3::new(0.0, 0.0, 1.0), 10.0),
        ];

        for (i, plane) in frustum.planes.iter().enumerate()
        {
            let expected = &expected_planes[i];
            assert!(
                plane.normal().abs_diff_eq(expected.normal(), 1e-5),
                "Plane {i} normal mismatch: got {:?}, expected {:?}", plane.normal(), expected.normal());
            assert_relative_eq!(plane.distance(), expected.distance(), epsilon = 1e-4);
        }
    }

    #[test]
    fn aabbs()
    {
        let frustum = test_frustum();
        let inside = AABB::new(Vec3::new(-1.0, -1.0, 4.0), Vec3::new(1.0, 1.0, 6.0));
        let straddling_far = AABB::new(Vec3::new(-1.0, -1.0, 9.0), Vec3::new(1.0, 1.0, 12.0));
        let behind = AABB::new(Vec3::new(-1.0, -1.0, -6.0), Vec3::new(1.0, 1.0, -4.0));
        let beside = AABB::new(Vec3::new(20.0, -1.0, 4.0), Vec3::new(22.0, 1.0, 6.0));

        assert_eq!(frustum.get_intersection(inside), Intersection::FullyContained);
        assert_eq!(frustum.get_intersection(straddling_far), Intersection::Overlapping);
        assert_eq!(frustum.get_intersection(behind), Intersection::None);
        assert_eq!(frustum.get_intersection(beside), Intersection::None);
    }

    #[test]
    fn aabbs_no_depth()
    {
        let frustum = test_frustum();
        let straddling_far = AABB::new(Vec3::new(-1.0, -1.0, 9.0), Vec3::new(1.0, 1.0, 12.0));
        let past_far = AABB::new(Vec3::new(-1.0, -1.0, 50.0), Vec3::new(1.0, 1.0, 60.0));
        let before_near = AABB::new(Vec3::new(-0.1, -0.1, 0.2), Vec3::new(0.1, 0.1, 0.5));
        let behind = AABB::new(Vec3::new(-1.0, -1.0, -6.0), Vec3::new(1.0, 1.0, -4.0));

        assert_eq!(frustum.get_intersection_no_depth(straddling_far), Intersection::FullyContained);
        assert_eq!(frustum.get_intersection_no_depth(past_far), Intersection::FullyContained);
        assert_eq!(frustum.get_intersection_no_depth(before_near), Intersection::FullyContained);
        assert_eq!(frustum.get_intersection(past_far), Intersection::None);
        // behind the camera is still outside of the side planes
        assert_eq!(frustum.get_intersection_no_depth(behind), Intersection::None);
    }

    #[test]
    fn aabbs_past_an_edge()
    {
        let frustum = test_frustum();

        // partly behind the left plane and partly behind the far plane, but never both at once
        let past_far_left = AABB::new(Vec3::new(-11.0, -0.5, 9.5), Vec3::new(-10.1, 0.5, 10.5));
        assert_eq!(frustum.get_intersection(past_far_left), Intersection::None);
        assert_eq!(frustum.get_intersection_no_depth(past_far_left), Intersection::Overlapping);

        // nudged inwards it reaches the corner
        let at_far_left = AABB::new(Vec3::new(-11.0, -0.5, 9.5), Vec3::new(-9.9, 0.5, 10.5));
        assert_eq!(frustum.get_intersection(at_far_left), Intersection::Overlapping);

        // behind the camera, straddling all four side planes
        let behind_apex = AABB::new(Vec3::new(-1.0, -1.0, -1.0), Vec3::new(1.0, 1.0, -0.5));
        assert_eq!(frustum.get_intersection_no_depth(behind_apex), Intersection::None);
        assert_eq!(frustum.get_intersection(behind_apex), Intersection::None);

        // wrapped around the apex and reaching past the near plane
        let around_apex = AABB::new(Vec3::splat(-1.0), Vec3::new(1.0, 1.0, 2.0));
        assert_eq!(frustum.get_intersection_no_depth(around_apex), Intersection::Overlapping);
        assert_eq!(frustum.get_intersection(around_apex), Intersection::Overlapping);
    }
}
