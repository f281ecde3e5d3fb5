use std::fmt::{Debug, Formatter};
use std::ops::{Index, IndexMut};
use crate::Link;

// A handle to a value in a FreeVec. The generation changes every time the slot is freed, so
// a key outliving its value never resolves to whatever reuses the slot
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SlotKey
{
    index: u32,
    generation: u32,
}
impl SlotKey
{
    #[inline] #[must_use] pub fn index(self) -> usize { self.index as usize }
    #[inline] #[must_use] pub fn generation(self) -> u32 { self.generation }
}
impl Debug for SlotKey
{
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result
    {
        write!(f, "{}v{}", self.index, self.generation)
    }
}

enum Slot<T>
{
    Occupied { generation: u32, value: T },
    Free { generation: u32, next_free: Link },
}

// A growable array with stable indices. Freed slots are threaded into a free list and reused (LIFO)
pub struct FreeVec<T>
{
    slots: Vec<Slot<T>>,
    free_head: Link,
    len: usize,
}
impl<T> Default for FreeVec<T>
{
    fn default() -> Self { Self::new() }
}
impl<T> FreeVec<T>
{
    #[inline] #[must_use]
    pub const fn new() -> Self
    {
        Self
        {
            slots: Vec::new(),
            free_head: Link::none(),
            len: 0,
        }
    }

    // number of live values
    #[inline] #[must_use] pub fn len(&self) -> usize { self.len }
    #[inline] #[must_use] pub fn is_empty(&self) -> bool { self.len == 0 }

    // number of slots (live or free); every index ever handed out is below this
    #[inline] #[must_use] pub fn capacity(&self) -> usize { self.slots.len() }

    pub fn emplace(&mut self, value: T) -> SlotKey
    {
        self.len += 1;
        match self.free_head.get()
        {
            Some(index) =>
            {
                let Slot::Free { generation, next_free } = self.slots[index]
                else
                {
                    unreachable!("Free list points at occupied slot {index}");
                };
                self.free_head = next_free;
                self.slots[index] = Slot::Occupied { generation, value };
                SlotKey { index: index as u32, generation }
            }
            None =>
            {
                let index = self.slots.len();
                debug_assert!(Link::some(index).is_some(), "FreeVec is full");
                self.slots.push(Slot::Occupied { generation: 0, value });
                SlotKey { index: index as u32, generation: 0 }
            }
        }
    }

    // Free the value at index, regardless of generation
    pub fn erase_at(&mut self, index: usize) -> Option<T>
    {
        let slot = self.slots.get_mut(index)?;
        let Slot::Occupied { generation, .. } = *slot else { return None; };

        let freed = std::mem::replace(slot, Slot::Free
        {
            generation: generation.wrapping_add(1),
            next_free: self.free_head,
        });
        self.free_head = Link::some(index);
        self.len -= 1;

        match freed
        {
            Slot::Occupied { value, .. } => Some(value),
            Slot::Free { .. } => None,
        }
    }

    pub fn erase(&mut self, key: SlotKey) -> Option<T>
    {
        match self.is_valid(key)
        {
            true => self.erase_at(key.index()),
            false => None,
        }
    }

    #[inline] #[must_use]
    pub fn is_valid(&self, key: SlotKey) -> bool
    {
        matches!(self.slots.get(key.index()), Some(Slot::Occupied { generation, .. }) if *generation == key.generation)
    }

    // The key for the value currently living at index, if any
    #[inline] #[must_use]
    pub fn key_at(&self, index: usize) -> Option<SlotKey>
    {
        match self.slots.get(index)
        {
            Some(Slot::Occupied { generation, .. }) => Some(SlotKey { index: index as u32, generation: *generation }),
            _ => None,
        }
    }

    #[inline] #[must_use]
    pub fn get(&self, key: SlotKey) -> Option<&T>
    {
        match self.slots.get(key.index())
        {
            Some(Slot::Occupied { generation, value }) if *generation == key.generation => Some(value),
            _ => None,
        }
    }

    #[inline] #[must_use]
    pub fn get_mut(&mut self, key: SlotKey) -> Option<&mut T>
    {
        match self.slots.get_mut(key.index())
        {
            Some(Slot::Occupied { generation, value }) if *generation == key.generation => Some(value),
            _ => None,
        }
    }

    #[inline] #[must_use]
    pub fn get_at(&self, index: usize) -> Option<&T>
    {
        match self.slots.get(index)
        {
            Some(Slot::Occupied { value, .. }) => Some(value),
            _ => None,
        }
    }

    #[inline] #[must_use]
    pub fn get_at_mut(&mut self, index: usize) -> Option<&mut T>
    {
        match self.slots.get_mut(index)
        {
            Some(Slot::Occupied { value, .. }) => Some(value),
            _ => None,
        }
    }

    // Drop all values. Slots are kept (and their generations advanced) so old keys stay invalid
    pub fn clear(&mut self)
    {
        self.free_head = Link::none();
        for (index, slot) in self.slots.iter_mut().enumerate().rev()
        {
            let generation = match slot
            {
                Slot::Occupied { generation, .. } => generation.wrapping_add(1),
                Slot::Free { generation, .. } => *generation,
            };
            *slot = Slot::Free { generation, next_free: self.free_head };
            self.free_head = Link::some(index);
        }
        self.len = 0;
    }

    pub fn iter(&self) -> impl Iterator<Item = (SlotKey, &T)>
    {
        self.slots.iter().enumerate().filter_map(|(index, slot)| match slot
        {
            Slot::Occupied { generation, value } => Some((SlotKey { index: index as u32, generation: *generation }, value)),
            Slot::Free { .. } => None,
        })
    }
}
impl<T> Index<usize> for FreeVec<T>
{
    type Output = T;
    fn index(&self, index: usize) -> &Self::Output
    {
        match self.get_at(index)
        {
            Some(value) => value,
            None => panic!("{index} is not an occupied slot (0-{})", self.capacity()),
        }
    }
}
impl<T> IndexMut<usize> for FreeVec<T>
{
    fn index_mut(&mut self, index: usize) -> &mut Self::Output
    {
        let capacity = self.capacity();
        match self.get_at_mut(index)
        {
            Some(value) => value,
            None => panic!("{index} is not an occupied slot (0-{capacity})"),
        }
    }
}
impl<T: Debug> Debug for FreeVec<T>
{
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result
    {
        f.debug_map().entries(self.iter()).finish()
    }
}
