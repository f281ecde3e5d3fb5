use std::fmt::{Debug, Formatter};

// An optional index into one of the index arenas, packed into a u32
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub struct Link(u32);
impl Link
{
    const NONE: u32 = u32::MAX;

    #[inline] #[must_use] pub const fn none() -> Self { Self(Self::NONE) }
    #[inline] #[must_use]
    pub const fn some(index: usize) -> Self
    {
        debug_assert!(index < Self::NONE as usize, "Index does not fit in a link");
        Self(index as u32)
    }

    #[inline] #[must_use] pub const fn is_none(self) -> bool { self.0 == Self::NONE }
    #[inline] #[must_use] pub const fn is_some(self) -> bool { self.0 != Self::NONE }

    #[inline] #[must_use]
    pub const fn get(self) -> Option<usize>
    {
        match self.is_some()
        {
            true => Some(self.0 as usize),
            false => None,
        }
    }
}
impl Default for Link
{
    fn default() -> Self { Self::none() }
}
impl Debug for Link
{
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result
    {
        match self.get()
        {
            Some(i) => write!(f, "Link({i})"),
            None => f.write_str("Link(none)"),
        }
    }
}

#[cfg(test)]
mod tests
{
    use super::*;

    #[test]
    fn basic()
    {
        assert!(Link::none().is_none());
        assert!(Link::default().is_none());
        assert!(Link::some(0).is_some());
        assert!(Link::some(u32::MAX as usize - 1).is_some());

        assert_eq!(Link::none().get(), None);
        assert_eq!(Link::some(12).get(), Some(12));

        assert_eq!(format!("{:?}", Link::some(3)), "Link(3)");
        assert_eq!(format!("{:?}", Link::none()), "Link(none)");
    }
}
