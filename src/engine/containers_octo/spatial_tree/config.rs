use std::error::Error;
use std::fmt::{Debug, Display, Formatter};
use nab_octo::{TomlError, TomlRead, TomlWrite};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TreeConfig
{
    // a leaf holding more than this many elements splits (if depth and bounds allow)
    pub max_elements_per_leaf: u32,
    // the root is at depth 0
    pub max_depth: u32,
}
impl TreeConfig
{
    pub const DEPTH_LIMIT: u32 = 32;

    #[inline] #[must_use]
    pub const fn new(max_elements_per_leaf: u32, max_depth: u32) -> Self
    {
        Self { max_elements_per_leaf, max_depth }
    }

    pub fn validate(self) -> Result<Self, ConfigError>
    {
        if self.max_elements_per_leaf == 0
        {
            return Err(ConfigError::ZeroElementsPerLeaf);
        }
        if self.max_depth > Self::DEPTH_LIMIT
        {
            return Err(ConfigError::DepthTooLarge { max_depth: self.max_depth });
        }
        Ok(self)
    }

    // Parse and validate a config, missing fields take their defaults
    pub fn load_toml(toml: &str) -> Result<Self, ConfigError>
    {
        Self::from_toml_str(toml).map_err(ConfigError::Toml)?.validate()
    }
}
impl Default for TreeConfig
{
    fn default() -> Self
    {
        Self
        {
            max_elements_per_leaf: 16,
            max_depth: 16,
        }
    }
}
impl TomlRead for TreeConfig { }
impl TomlWrite for TreeConfig { }

#[derive(Debug)]
pub enum ConfigError
{
    Toml(TomlError),
    ZeroElementsPerLeaf,
    DepthTooLarge { max_depth: u32 },
}
impl Display for ConfigError
{
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result { Debug::fmt(self, f) }
}
impl Error for ConfigError { }
