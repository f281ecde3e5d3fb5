use crate::Link;
use crate::spatial_tree::inner::{Node, TreeInner, ROOT};
use crate::spatial_tree::{ElementId, SpatialBound};

impl<T, B: SpatialBound> TreeInner<T, B>
{
    // Collapse every branch whose subtree holds no elements back into an empty leaf.
    // Works bottom-up, so nested empty branches all fold away in a single call
    pub(super) fn cleanup(&mut self) -> usize
    {
        let before = self.node_count();
        self.collapse_empty(ROOT);
        let freed = before - self.node_count();
        if freed > 0
        {
            log::debug!("Cleanup freed {freed} nodes ({} remaining)", self.node_count());
        }
        freed
    }

    // returns true if the node is (now) an empty leaf
    fn collapse_empty(&mut self, index: usize) -> bool
    {
        match self.nodes[index]
        {
            Node::Leaf { count, .. } => count == 0,
            Node::Branch { first_child } =>
            {
                let mut all_empty = true;
                for i in 0..B::CHILD_COUNT
                {
                    // no short-circuit, non-empty siblings still get their own subtrees compacted
                    all_empty &= self.collapse_empty(first_child as usize + i);
                }
                if all_empty
                {
                    self.free_groups.push(first_child);
                    self.nodes[index] = Node::EMPTY_LEAF;
                }
                all_empty
            }
        }
    }

    // Rebuild the node hierarchy under a new root. Elements that no longer overlap the root are
    // dropped from the tree and handed back
    pub(super) fn set_root_bound(&mut self, new_root: B) -> Vec<(ElementId, T)>
    {
        if new_root == self.root_bound
        {
            return Vec::new();
        }

        let referenced = self.collect_referenced();
        debug_assert_eq!(referenced.len(), self.elements.len(), "Tree references a different number of elements than are stored");

        self.nodes.clear();
        self.nodes.push(Node::EMPTY_LEAF);
        self.free_groups.clear();
        self.links.clear();
        self.overflow = Link::none();
        self.root_bound = new_root;

        let mut evicted = Vec::new();
        for element in referenced
        {
            let index = element as usize;
            let bound = self.elements[index].bound;
            if new_root.overlaps(bound)
            {
                self.thread(element, bound);
                continue;
            }

            if let Some(key) = self.elements.key_at(index)
            {
                if let Some(removed) = self.elements.erase_at(index)
                {
                    evicted.push((ElementId(key), removed.item));
                }
            }
        }

        log::debug!("Rebuilt tree under {new_root:?}: {} elements kept, {} evicted, {} nodes",
            self.elements.len(), evicted.len(), self.node_count());
        evicted
    }

    pub(super) fn clear(&mut self)
    {
        self.elements.clear();
        self.links.clear();
        self.nodes.clear();
        self.nodes.push(Node::EMPTY_LEAF);
        self.free_groups.clear();
        self.overflow = Link::none();
    }
}
