use smallvec::SmallVec;
use math_octo::{Intersection, Intersects};
use nab_octo::debug_panic;
use crate::{FreeVec, Link};
use crate::spatial_tree::{ElementId, QueryScratch, SpatialBound, TreeConfig};

pub(super) const ROOT: usize = 0;

pub(super) struct Element<T, B>
{
    pub(super) item: T,
    pub(super) bound: B,
}

// One entry in a leaf's singly linked element list
#[derive(Clone, Copy)]
pub(super) struct ElementLink
{
    pub(super) element: u32, // slot index in TreeInner::elements
    pub(super) next: Link,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) enum Node
{
    Leaf { head: Link, count: u32 },
    Branch { first_child: u32 }, // B::CHILD_COUNT contiguous nodes
}
impl Node
{
    pub(super) const EMPTY_LEAF: Node = Node::Leaf { head: Link::none(), count: 0 };
}

// Node bounds are not stored, they are derived from the root on the way down
#[derive(Clone, Copy)]
pub(super) struct NodeVisit<B>
{
    pub(super) index: usize,
    pub(super) bound: B,
    pub(super) depth: u32,
}
impl<B: SpatialBound> NodeVisit<B>
{
    #[inline]
    pub(super) fn child(self, first_child: u32, i: usize) -> Self
    {
        Self
        {
            index: first_child as usize + i,
            bound: self.bound.child(i),
            depth: self.depth + 1,
        }
    }
}

pub(super) type NodeStack<B> = SmallVec<[NodeVisit<B>; 32]>;

pub(super) struct TreeInner<T, B>
{
    pub(super) elements: FreeVec<Element<T, B>>,
    pub(super) links: FreeVec<ElementLink>,
    pub(super) nodes: Vec<Node>,
    pub(super) free_groups: Vec<u32>, // first child of each freed sibling group
    pub(super) overflow: Link, // elements reaching past the root, tested individually by every query
    pub(super) root_bound: B,
    pub(super) config: TreeConfig,
}
impl<T, B: SpatialBound> TreeInner<T, B>
{
    pub(super) fn new(root_bound: B, config: TreeConfig) -> Self
    {
        Self
        {
            elements: FreeVec::new(),
            links: FreeVec::new(),
            nodes: vec![Node::EMPTY_LEAF],
            free_groups: Vec::new(),
            overflow: Link::none(),
            root_bound,
            config,
        }
    }

    #[inline]
    pub(super) fn root_visit(&self) -> NodeVisit<B>
    {
        NodeVisit { index: ROOT, bound: self.root_bound, depth: 0 }
    }

    #[inline]
    pub(super) fn node_count(&self) -> usize
    {
        self.nodes.len() - self.free_groups.len() * B::CHILD_COUNT
    }

    pub(super) fn insert(&mut self, bound: B, item: T) -> Option<ElementId>
    {
        if !self.root_bound.overlaps(bound)
        {
            log::trace!("Rejecting element at {bound:?}, outside of root {:?}", self.root_bound);
            return None;
        }

        let key = self.elements.emplace(Element { item, bound });
        self.thread(key.index() as u32, bound);
        Some(ElementId(key))
    }

    // Link the element into every leaf it overlaps, and into the overflow list if it sticks out of the root
    pub(super) fn thread(&mut self, element: u32, bound: B)
    {
        if !self.root_bound.fully_contains(bound)
        {
            let link = self.links.emplace(ElementLink { element, next: self.overflow });
            self.overflow = Link::some(link.index());
        }
        self.route(self.root_visit(), element, bound);
    }

    // Thread the element into every leaf below start that its bound overlaps
    fn route(&mut self, start: NodeVisit<B>, element: u32, bound: B)
    {
        let mut stack = NodeStack::new();
        stack.push(start);
        while let Some(visit) = stack.pop()
        {
            match self.nodes[visit.index]
            {
                Node::Branch { first_child } =>
                {
                    push_overlapping_children(&mut stack, visit, first_child, bound);
                }
                Node::Leaf { head, count } =>
                {
                    let link = self.links.emplace(ElementLink { element, next: head });
                    let count = count + 1;
                    self.nodes[visit.index] = Node::Leaf { head: Link::some(link.index()), count };

                    if count > self.config.max_elements_per_leaf &&
                        visit.depth < self.config.max_depth &&
                        visit.bound.contains(bound)
                    {
                        self.split(visit);
                    }
                }
            }
        }
    }

    // Convert a leaf to a branch and push its elements down into the new children
    fn split(&mut self, visit: NodeVisit<B>)
    {
        let Node::Leaf { head, count } = self.nodes[visit.index]
        else
        {
            unreachable!("Splitting branch node {}", visit.index);
        };
        log::trace!("Splitting node {} at depth {} ({count} elements)", visit.index, visit.depth);

        let mut pulled: SmallVec<[u32; 32]> = SmallVec::with_capacity(count as usize);
        let mut cursor = head;
        while let Some(l) = cursor.get()
        {
            let Some(link) = self.links.erase_at(l)
            else
            {
                log::error!("Node {} links to freed element link {l}", visit.index);
                debug_panic!("Node {} links to freed element link {l}", visit.index);
                break;
            };
            pulled.push(link.element);
            cursor = link.next;
        }

        let first_child = self.alloc_children();
        self.nodes[visit.index] = Node::Branch { first_child };
        for element in pulled
        {
            let bound = self.elements[element as usize].bound;
            self.route(visit, element, bound);
        }
    }

    fn alloc_children(&mut self) -> u32
    {
        match self.free_groups.pop()
        {
            Some(first) =>
            {
                let start = first as usize;
                self.nodes[start..(start + B::CHILD_COUNT)].fill(Node::EMPTY_LEAF);
                first
            }
            None =>
            {
                let first = self.nodes.len();
                self.nodes.resize(first + B::CHILD_COUNT, Node::EMPTY_LEAF);
                first as u32
            }
        }
    }

    // Drop the element's link from the list starting at head. Returns the new head if the element was in the list
    fn remove_from_list(&mut self, head: Link, element: u32) -> Option<Link>
    {
        let mut prev = Link::none();
        let mut cursor = head;
        while let Some(l) = cursor.get()
        {
            let link = self.links[l];
            if link.element != element
            {
                prev = cursor;
                cursor = link.next;
                continue;
            }

            self.links.erase_at(l);
            return Some(match prev.get()
            {
                Some(p) =>
                {
                    self.links[p].next = link.next;
                    head
                }
                None => link.next,
            });
        }
        None
    }

    // Remove the element from every leaf its bound routes to. Returns false if no leaf referenced it
    pub(super) fn unlink(&mut self, element: u32, bound: B) -> bool
    {
        if !self.root_bound.fully_contains(bound)
        {
            match self.remove_from_list(self.overflow, element)
            {
                Some(head) => self.overflow = head,
                None =>
                {
                    log::error!("Element {element} at {bound:?} is missing from the overflow list");
                    debug_panic!("Element {element} at {bound:?} is missing from the overflow list");
                }
            }
        }

        let mut found = false;
        let mut stack = NodeStack::new();
        stack.push(self.root_visit());
        while let Some(visit) = stack.pop()
        {
            match self.nodes[visit.index]
            {
                Node::Branch { first_child } =>
                {
                    push_overlapping_children(&mut stack, visit, first_child, bound);
                }
                Node::Leaf { head, count } =>
                {
                    if let Some(head) = self.remove_from_list(head, element)
                    {
                        self.nodes[visit.index] = Node::Leaf { head, count: count - 1 };
                        found = true;
                    }
                }
            }
        }
        found
    }

    // Returns whether any leaf referenced the element, along with the removed item
    pub(super) fn remove(&mut self, id: ElementId) -> Option<(bool, T)>
    {
        let bound = self.elements.get(id.0)?.bound;
        let found = self.unlink(id.index() as u32, bound);
        if !found
        {
            log::error!("{id:?} at {bound:?} was not referenced by any leaf");
            debug_panic!("{id:?} at {bound:?} was not referenced by any leaf");
        }
        self.elements.erase(id.0).map(|e| (found, e.item))
    }

    pub(super) fn relocate(&mut self, id: ElementId, new_bound: B) -> bool
    {
        let Some(old_bound) = self.elements.get(id.0).map(|e| e.bound) else { return false; };
        if !self.root_bound.overlaps(new_bound)
        {
            log::trace!("Not moving {id:?} to {new_bound:?}, outside of root {:?}", self.root_bound);
            return false;
        }

        let element = id.index() as u32;
        if !self.unlink(element, old_bound)
        {
            log::error!("{id:?} at {old_bound:?} was not referenced by any leaf");
            debug_panic!("{id:?} at {old_bound:?} was not referenced by any leaf");
        }
        self.elements[id.index()].bound = new_bound;
        self.thread(element, new_bound);
        true
    }

    // Appends every element intersecting the shape to out, each one once
    pub(super) fn query_into(&self, shape: &B::Query, scratch: &mut QueryScratch, out: &mut Vec<ElementId>)
    {
        scratch.ensure_capacity(self.elements.capacity());
        let first_emitted = out.len();

        // the flag marks subtrees already known to be entirely inside the shape
        let mut stack: SmallVec<[(NodeVisit<B>, bool); 32]> = SmallVec::new();
        stack.push((self.root_visit(), false));
        while let Some((visit, inside)) = stack.pop()
        {
            let hit = match inside
            {
                true => Intersection::FullyContained,
                false => shape.get_intersection(visit.bound),
            };
            if hit.is_none()
            {
                continue;
            }

            match self.nodes[visit.index]
            {
                Node::Branch { first_child } =>
                {
                    let inside = hit == Intersection::FullyContained;
                    for i in 0..B::CHILD_COUNT
                    {
                        stack.push((visit.child(first_child, i), inside));
                    }
                }
                Node::Leaf { head, .. } =>
                {
                    self.emit_list(head, hit == Intersection::FullyContained, shape, scratch, out);
                }
            }
        }
        // the parts of these outside the root are not covered by any node
        self.emit_list(self.overflow, false, shape, scratch, out);

        for id in &out[first_emitted..]
        {
            scratch.unmark(id.index());
        }
    }

    fn emit_list(&self, head: Link, accept_all: bool, shape: &B::Query, scratch: &mut QueryScratch, out: &mut Vec<ElementId>)
    {
        let mut cursor = head;
        while let Some(l) = cursor.get()
        {
            let link = self.links[l];
            cursor = link.next;

            let index = link.element as usize;
            let Some(key) = self.elements.key_at(index) else { continue; };
            if (accept_all || shape.intersects(self.elements[index].bound)) && scratch.mark(index)
            {
                out.push(ElementId(key));
            }
        }
    }

    // Every node reachable from the root, parents before children, child 0 first
    pub(super) fn for_each_node(&self, mut visitor: impl FnMut(NodeVisit<B>, Node))
    {
        let mut stack = NodeStack::new();
        stack.push(self.root_visit());
        while let Some(visit) = stack.pop()
        {
            let node = self.nodes[visit.index];
            visitor(visit, node);
            if let Node::Branch { first_child } = node
            {
                for i in (0..B::CHILD_COUNT).rev()
                {
                    stack.push(visit.child(first_child, i));
                }
            }
        }
    }

    // Slot indices of every element referenced by a leaf, each once
    pub(super) fn collect_referenced(&self) -> Vec<u32>
    {
        let mut scratch = QueryScratch::new();
        scratch.ensure_capacity(self.elements.capacity());

        let mut referenced = Vec::with_capacity(self.elements.len());
        self.for_each_node(|_, node|
        {
            let Node::Leaf { head, .. } = node else { return; };
            let mut cursor = head;
            while let Some(l) = cursor.get()
            {
                let link = self.links[l];
                cursor = link.next;
                if scratch.mark(link.element as usize)
                {
                    referenced.push(link.element);
                }
            }
        });
        referenced
    }
}

fn push_overlapping_children<B: SpatialBound>(stack: &mut NodeStack<B>, visit: NodeVisit<B>, first_child: u32, bound: B)
{
    for i in 0..B::CHILD_COUNT
    {
        let child = visit.child(first_child, i);
        if child.bound.overlaps(bound)
        {
            stack.push(child);
        }
    }
}
