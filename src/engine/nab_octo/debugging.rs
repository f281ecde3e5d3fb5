// Panics in debug builds, compiles to nothing in release. Callers log before invoking this
// so the failure is still visible in release builds.
#[macro_export]
macro_rules! debug_panic
{
    ($($arg:tt)*) =>
    {
        if cfg!(debug_assertions)
        {
            panic!($($arg)*)
        }
    }
}

#[cfg(test)]
mod tests
{
    #[test]
    #[cfg_attr(debug_assertions, should_panic(expected = "broken invariant 3"))]
    fn panics_only_in_debug()
    {
        debug_panic!("broken invariant {}", 3);
    }
}
