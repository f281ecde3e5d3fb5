use std::fmt::{Debug, Formatter};

pub trait ShortTypeName
{
    fn short_type_name() -> &'static str;
}
impl<T: ?Sized> ShortTypeName for T
{
    // strips the module path (and any generic arguments) off of type_name
    #[inline]
    fn short_type_name() -> &'static str
    {
        let type_name = std::any::type_name::<T>();
        let base = match type_name.find('<')
        {
            None => type_name,
            Some(i) => &type_name[..i],
        };
        match base.rfind(':')
        {
            None => base,
            Some(i) => &base[(i + 1)..]
        }
    }
}

// Print a fixed-width table of the bits in a word slice, mostly for debugging visited sets
pub struct FormatBits<'w>(pub &'w [u64]);
impl Debug for FormatBits<'_>
{
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result
    {
        for (i, word) in self.0.iter().enumerate()
        {
            if i > 0 { f.write_str(" ")?; }
            write!(f, "{word:064b}")?;
        }
        Ok(())
    }
}
