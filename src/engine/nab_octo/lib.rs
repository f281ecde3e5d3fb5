pub mod debugging;
pub mod logging;
pub mod utils;

mod toml_io;
pub use toml_io::*;
