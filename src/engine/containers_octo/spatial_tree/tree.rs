use std::fmt::{Debug, Formatter};
use glam::{Vec2, Vec3};
use parking_lot::{MappedRwLockReadGuard, MappedRwLockWriteGuard, RwLock, RwLockReadGuard, RwLockWriteGuard};
use math_octo::{Circle, Frustum, Ray, Rect, Segment, Segment2, Sphere, AABB};
use crate::spatial_tree::inner::{Node, TreeInner};
use crate::spatial_tree::{ConfigError, ElementId, OctreeQuery, QuadTreeQuery, QueryScratch, SpatialBound, SpatialError, TreeConfig};

// A loose octree/quadtree over a fixed root bound. Elements are stored once and referenced from
// every leaf their bound overlaps; ones reaching past the root are also kept in an overflow list.
// Leaves split past max_elements_per_leaf (down to max_depth), emptied branches stay until cleanup().
// Writers take the internal write lock, queries share the read lock
pub struct SpatialTree<T, B: SpatialBound>
{
    inner: RwLock<TreeInner<T, B>>,
}
impl<T, B: SpatialBound> SpatialTree<T, B>
{
    #[must_use]
    pub fn new(root_bound: B) -> Self
    {
        Self { inner: RwLock::new(TreeInner::new(root_bound, TreeConfig::default())) }
    }

    pub fn with_config(root_bound: B, config: TreeConfig) -> Result<Self, ConfigError>
    {
        let config = config.validate()?;
        Ok(Self { inner: RwLock::new(TreeInner::new(root_bound, config)) })
    }

    // Store an item covering `bound`. Returns None (and drops the item) if the bound lies outside the root
    pub fn insert(&self, bound: B, item: T) -> Option<ElementId>
    {
        self.inner.write().insert(bound, item)
    }

    // Returns false if the id is stale
    pub fn erase(&self, id: ElementId) -> bool
    {
        self.remove(id).is_some()
    }

    // Erase an element, returning its item
    pub fn remove(&self, id: ElementId) -> Option<T>
    {
        self.inner.write().remove(id).map(|(_, item)| item)
    }

    // Replace an element's item. The element keeps its bound
    pub fn update(&self, id: ElementId, item: T) -> bool
    {
        let mut inner = self.inner.write();
        match inner.elements.get_mut(id.0)
        {
            Some(element) =>
            {
                element.item = item;
                true
            }
            None => false,
        }
    }

    // Move an element to a new bound, keeping its id. Returns false (leaving the element untouched)
    // if the id is stale or the new bound lies outside the root
    pub fn relocate(&self, id: ElementId, bound: B) -> bool
    {
        self.inner.write().relocate(id, bound)
    }

    // Read an element's item. The tree stays read-locked while the guard lives
    pub fn get(&self, id: ElementId) -> Result<MappedRwLockReadGuard<'_, T>, SpatialError>
    {
        RwLockReadGuard::try_map(self.inner.read(), |inner| inner.elements.get(id.0).map(|e| &e.item))
            .map_err(|_| SpatialError::InvalidHandle(id))
    }

    // Modify an element's item in place. The tree stays write-locked while the guard lives
    pub fn get_mut(&self, id: ElementId) -> Result<MappedRwLockWriteGuard<'_, T>, SpatialError>
    {
        RwLockWriteGuard::try_map(self.inner.write(), |inner| inner.elements.get_mut(id.0).map(|e| &mut e.item))
            .map_err(|_| SpatialError::InvalidHandle(id))
    }

    pub fn get_bound(&self, id: ElementId) -> Result<B, SpatialError>
    {
        self.inner.read().elements.get(id.0).map(|e| e.bound).ok_or(SpatialError::InvalidHandle(id))
    }

    #[must_use]
    pub fn contains(&self, id: ElementId) -> bool
    {
        self.inner.read().elements.is_valid(id.0)
    }

    // Every element whose bound intersects the shape, each once, in no particular order
    #[must_use]
    pub fn query(&self, shape: &B::Query) -> Vec<ElementId>
    {
        let mut scratch = QueryScratch::new();
        let mut results = Vec::new();
        self.query_with(shape, &mut scratch, &mut results);
        results
    }

    // Like query, but appends to `results` and reuses a caller-owned scratch buffer
    pub fn query_with(&self, shape: &B::Query, scratch: &mut QueryScratch, results: &mut Vec<ElementId>)
    {
        self.inner.read().query_into(shape, scratch, results);
    }

    // Rebuild the tree under a new root bound. Elements no longer overlapping the root are
    // removed and returned. No-op if the bound is unchanged
    pub fn set_root_bound(&self, root_bound: B) -> Vec<(ElementId, T)>
    {
        self.inner.write().set_root_bound(root_bound)
    }

    // Collapse emptied branches, returns the number of nodes freed
    pub fn cleanup(&self) -> usize
    {
        self.inner.write().cleanup()
    }

    // Remove every element. Outstanding ids are invalidated
    pub fn clear(&self)
    {
        self.inner.write().clear();
    }

    #[must_use]
    pub fn len(&self) -> usize { self.inner.read().elements.len() }
    #[must_use]
    pub fn element_count(&self) -> usize { self.len() }
    #[must_use]
    pub fn is_empty(&self) -> bool { self.len() == 0 }

    #[must_use]
    pub fn root_bound(&self) -> B { self.inner.read().root_bound }
    #[must_use]
    pub fn config(&self) -> TreeConfig { self.inner.read().config }

    // The bounds of every branch node, parents first
    #[must_use]
    pub fn branch_bounds(&self) -> Vec<B>
    {
        let mut bounds = Vec::new();
        self.inner.read().for_each_node(|visit, node|
        {
            if matches!(node, Node::Branch { .. })
            {
                bounds.push(visit.bound);
            }
        });
        bounds
    }

    // Live nodes (branches and leaves)
    #[must_use]
    pub fn node_count(&self) -> usize { self.inner.read().node_count() }

    #[must_use]
    pub fn leaf_count(&self) -> usize
    {
        let mut leaves = 0;
        self.inner.read().for_each_node(|_, node| if matches!(node, Node::Leaf { .. }) { leaves += 1; });
        leaves
    }
}

impl<T> SpatialTree<T, AABB>
{
    #[must_use] pub fn query_point(&self, point: Vec3) -> Vec<ElementId> { self.query(&OctreeQuery::Point(point)) }
    #[must_use] pub fn query_segment(&self, segment: Segment) -> Vec<ElementId> { self.query(&OctreeQuery::Segment(segment)) }
    #[must_use] pub fn query_ray(&self, ray: Ray) -> Vec<ElementId> { self.query(&OctreeQuery::Ray(ray)) }
    #[must_use] pub fn query_aabb(&self, aabb: AABB) -> Vec<ElementId> { self.query(&OctreeQuery::Aabb(aabb)) }
    #[must_use] pub fn query_sphere(&self, sphere: Sphere) -> Vec<ElementId> { self.query(&OctreeQuery::Sphere(sphere)) }
    #[must_use] pub fn query_frustum(&self, frustum: &Frustum) -> Vec<ElementId> { self.query(&OctreeQuery::Frustum(frustum.clone())) }
    // Frustum query ignoring the near and far planes
    #[must_use] pub fn query_frustum_no_depth(&self, frustum: &Frustum) -> Vec<ElementId> { self.query(&OctreeQuery::FrustumNoDepth(frustum.clone())) }
}

impl<T> SpatialTree<T, Rect>
{
    #[must_use] pub fn query_point(&self, point: Vec2) -> Vec<ElementId> { self.query(&QuadTreeQuery::Point(point)) }
    #[must_use] pub fn query_segment(&self, segment: Segment2) -> Vec<ElementId> { self.query(&QuadTreeQuery::Segment(segment)) }
    #[must_use] pub fn query_rect(&self, rect: Rect) -> Vec<ElementId> { self.query(&QuadTreeQuery::Rect(rect)) }
    #[must_use] pub fn query_circle(&self, circle: Circle) -> Vec<ElementId> { self.query(&QuadTreeQuery::Circle(circle)) }
}

impl<T: Debug, B: SpatialBound> Debug for SpatialTree<T, B>
{
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result
    {
        let inner = self.inner.read();
        f.write_fmt(format_args!("SpatialTree ({} elements, {} nodes)", inner.elements.len(), inner.node_count()))?;

        let mut visits = Vec::with_capacity(inner.node_count());
        inner.for_each_node(|visit, node| visits.push((visit, node)));
        for (visit, node) in visits
        {
            if f.alternate()
            {
                f.write_fmt(format_args!("\n{:3}  ", visit.index))?;
            }
            else
            {
                f.write_str("\n  ")?;
            }

            for i in 0..visit.depth
            {
                f.write_str([" ┗━ ", "━━ "][(i as usize).min(1)])?;
            }
            f.write_fmt(format_args!("{:?}", visit.bound))?;

            let Node::Leaf { head, count } = node else { continue; };
            f.write_fmt(format_args!(" (Leaf, {count}) values: ["))?;
            let mut cursor = head;
            while let Some(l) = cursor.get()
            {
                let link = inner.links[l];
                Debug::fmt(&inner.elements[link.element as usize].item, f)?;
                cursor = link.next;
                if cursor.is_some() { f.write_str(", ")?; }
            }
            f.write_str("]")?;
        }

        Ok(())
    }
}
