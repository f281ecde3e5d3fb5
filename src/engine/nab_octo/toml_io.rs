use serde::de::DeserializeOwned;
use serde::Serialize;
use std::io::{Read, Write};

#[derive(Debug)]
pub enum TomlError
{
    Io(std::io::Error),
    Parse(toml::de::Error),
    Serialize(toml::ser::Error),
}
impl std::fmt::Display for TomlError
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result { std::fmt::Debug::fmt(self, f) }
}
impl std::error::Error for TomlError { }

pub trait TomlRead: DeserializeOwned
{
    fn from_toml_str(toml: &str) -> Result<Self, TomlError>
    {
        toml::from_str(toml).map_err(TomlError::Parse)
    }

    fn load(reader: &mut impl Read) -> Result<Self, TomlError>
    {
        let mut buf = String::new();
        reader.read_to_string(&mut buf).map_err(TomlError::Io)?;
        Self::from_toml_str(&buf)
    }
}

pub trait TomlWrite: Serialize
{
    fn to_toml_string(&self, prettify: bool) -> Result<String, TomlError>
    {
        match prettify
        {
            true => toml::to_string_pretty(self),
            false => toml::to_string(self),
        }.map_err(TomlError::Serialize)
    }

    fn save(&self, prettify: bool, writer: &mut impl Write) -> Result<(), TomlError>
    {
        let toml = self.to_toml_string(prettify)?;
        writer.write_all(toml.as_bytes()).map_err(TomlError::Io)
    }
}

#[cfg(test)]
mod tests
{
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Settings
    {
        name: String,
        count: u32,
    }
    impl TomlRead for Settings { }
    impl TomlWrite for Settings { }

    #[test]
    fn round_trip()
    {
        let settings = Settings { name: "donk".to_string(), count: 5 };
        let mut buf = Vec::new();
        settings.save(true, &mut buf).unwrap();

        let loaded = Settings::load(&mut buf.as_slice()).unwrap();
        assert_eq!(settings, loaded);
    }

    #[test]
    fn bad_input()
    {
        let err = Settings::from_toml_str("name = 5").unwrap_err();
        assert!(matches!(err, TomlError::Parse(_)));
    }
}
