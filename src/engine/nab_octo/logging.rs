use log::LevelFilter;

// workspace crates that get the verbose level, everything else stays at warn
const ENGINE_CRATES: [&str; 4] = ["octo", "containers_octo", "math_octo", "nab_octo"];

#[must_use]
pub fn default_log_levels() -> (LevelFilter, LevelFilter)
{
    #[cfg(debug_assertions)]
    let levels = (LevelFilter::Warn, LevelFilter::Debug);
    #[cfg(not(debug_assertions))]
    let levels = (LevelFilter::Warn, LevelFilter::Info);
    levels
}

macro_rules! engine_builder
{
    ($engine_level:expr) =>
    {{
        let mut builder = colog::basic_builder();
        builder.filter_level(default_log_levels().0);
        for module in ENGINE_CRATES
        {
            builder.filter_module(module, $engine_level);
        }
        builder.parse_default_env(); // RUST_LOG wins over the defaults
        builder
    }};
}

// Install the global logger. Returns false if a logger was already installed
pub fn init_logging() -> bool
{
    engine_builder!(default_log_levels().1).try_init().is_ok()
}

// Same as init_logging but routes through the test harness' captured output; safe to call from every test
pub fn init_test_logging()
{
    let _ = engine_builder!(LevelFilter::Trace).is_test(true).try_init();
}

#[cfg(test)]
mod tests
{
    use super::*;

    #[test]
    fn levels()
    {
        let (global, engine) = default_log_levels();
        assert_eq!(global, LevelFilter::Warn);
        assert!(engine > global);
    }

    #[test]
    fn repeated_init()
    {
        init_test_logging();
        init_test_logging();
        assert!(!init_logging());
        log::trace!("logger survives repeated init");
    }
}
