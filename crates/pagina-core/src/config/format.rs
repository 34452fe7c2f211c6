// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Config file formats

#[cfg(feature = "serde")]
use serde::{Serialize, de::DeserializeOwned};
use std::path::Path;
use std::str::FromStr;
use thiserror::Error;

/// Errors reading, writing or validating configuration
#[derive(Error, Debug)]
pub enum Error {
    #[cfg(feature = "json")]
    #[error("malformed JSON paging config")]
    Json(#[from] serde_json::Error),

    #[cfg(feature = "yaml")]
    #[error("malformed YAML paging config")]
    YamlDe(#[from] serde::de::value::Error),

    #[cfg(feature = "yaml")]
    #[error("paging config not representable as YAML")]
    YamlSer(#[from] serde_yaml2::ser::Errors),

    #[cfg(feature = "ron")]
    #[error("malformed RON paging config")]
    RonSpanned(#[from] ron::error::SpannedError),

    #[cfg(feature = "ron")]
    #[error("paging config not representable as RON")]
    Ron(#[from] ron::Error),

    #[cfg(feature = "toml")]
    #[error("malformed TOML paging config")]
    TomlDe(#[from] toml::de::Error),

    #[cfg(feature = "toml")]
    #[error("paging config not representable as TOML")]
    TomlSer(#[from] toml::ser::Error),

    #[error("config file access failed")]
    IoError(#[from] std::io::Error),

    /// The format is unknown or its feature is not enabled
    #[error("config format {0} is not available")]
    UnsupportedFormat(Format),

    /// A value was read but is not usable
    #[error("invalid paging config: {0}")]
    Invalid(&'static str),
}

/// Config file formats
///
/// Each format other than [`Format::None`] and [`Format::Unknown`] requires
/// the feature of the same (lower-case) name.
#[non_exhaustive]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Format {
    /// Not specified: guess from the path
    #[default]
    None,
    Json,
    Toml,
    Yaml,
    Ron,
    /// Unrecognised extension or name
    Unknown,
}

impl std::fmt::Display for Format {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Format::None => "(unspecified)",
            Format::Json => "JSON",
            Format::Toml => "TOML",
            Format::Yaml => "YAML",
            Format::Ron => "RON",
            Format::Unknown => "(unknown)",
        })
    }
}

impl FromStr for Format {
    type Err = Error;

    /// Parse a format name or file extension, ignoring case
    fn from_str(s: &str) -> Result<Self, Error> {
        match s.to_ascii_lowercase().as_str() {
            "json" => Ok(Format::Json),
            "toml" => Ok(Format::Toml),
            "yaml" | "yml" => Ok(Format::Yaml),
            "ron" => Ok(Format::Ron),
            _ => Err(Error::UnsupportedFormat(Format::Unknown)),
        }
    }
}

impl Format {
    /// Usual file extension
    pub fn extension(self) -> Option<&'static str> {
        match self {
            Format::Json => Some("json"),
            Format::Toml => Some("toml"),
            Format::Yaml => Some("yaml"),
            Format::Ron => Some("ron"),
            Format::None | Format::Unknown => None,
        }
    }

    /// Guess the format from the file extension of `path`
    ///
    /// The file is not opened.
    pub fn guess_from_path(path: &Path) -> Format {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(|ext| ext.parse().ok())
            .unwrap_or(Format::Unknown)
    }

    /// Resolve [`Format::None`] by guessing from `path`
    #[inline]
    fn or_guess(self, path: &Path) -> Format {
        match self {
            Format::None => Format::guess_from_path(path),
            format => format,
        }
    }

    /// Deserialise `text`
    #[cfg(feature = "serde")]
    pub fn read_str<T: DeserializeOwned>(self, text: &str) -> Result<T, Error> {
        let value: T = match self {
            #[cfg(feature = "json")]
            Format::Json => serde_json::from_str(text)?,
            #[cfg(feature = "toml")]
            Format::Toml => toml::from_str(text)?,
            #[cfg(feature = "yaml")]
            Format::Yaml => serde_yaml2::from_str(text)?,
            #[cfg(feature = "ron")]
            Format::Ron => ron::from_str(text)?,
            _ => {
                let _ = text;
                return Err(Error::UnsupportedFormat(self));
            }
        };
        Ok(value)
    }

    /// Serialise `value` (pretty-printed where supported)
    #[cfg(feature = "serde")]
    pub fn write_string<T: Serialize>(self, value: &T) -> Result<String, Error> {
        let text: String = match self {
            #[cfg(feature = "json")]
            Format::Json => serde_json::to_string_pretty(value)?,
            #[cfg(feature = "toml")]
            Format::Toml => toml::to_string_pretty(value)?,
            #[cfg(feature = "yaml")]
            Format::Yaml => serde_yaml2::to_string(value)?,
            #[cfg(feature = "ron")]
            Format::Ron => ron::ser::to_string_pretty(value, Default::default())?,
            _ => {
                let _ = value;
                return Err(Error::UnsupportedFormat(self));
            }
        };
        Ok(text)
    }

    /// Read from `path`
    ///
    /// [`Format::None`] guesses the format from the path.
    #[cfg(feature = "serde")]
    pub fn read_path<T: DeserializeOwned>(self, path: &Path) -> Result<T, Error> {
        let format = self.or_guess(path);
        log::info!("Format::read_path: reading {format} from {}", path.display());
        let text = std::fs::read_to_string(path)?;
        format.read_str(&text)
    }

    /// Write to `path`
    ///
    /// [`Format::None`] guesses the format from the path. The file is not
    /// touched unless serialisation succeeds.
    #[cfg(feature = "serde")]
    pub fn write_path<T: Serialize>(self, path: &Path, value: &T) -> Result<(), Error> {
        let format = self.or_guess(path);
        let text = format.write_string(value)?;
        log::info!("Format::write_path: writing {format} to {}", path.display());
        std::fs::write(path, text)?;
        Ok(())
    }

    /// Guess the format and read from `path`
    #[cfg(feature = "serde")]
    #[inline]
    pub fn guess_and_read_path<T: DeserializeOwned>(path: &Path) -> Result<T, Error> {
        Format::None.read_path(path)
    }

    /// Guess the format and write to `path`
    #[cfg(feature = "serde")]
    #[inline]
    pub fn guess_and_write_path<T: Serialize>(path: &Path, value: &T) -> Result<(), Error> {
        Format::None.write_path(path, value)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn guess() {
        assert_eq!(Format::guess_from_path(Path::new("a/b.json")), Format::Json);
        assert_eq!(Format::guess_from_path(Path::new("paging.TOML")), Format::Toml);
        assert_eq!(Format::guess_from_path(Path::new("x.yml")), Format::Yaml);
        assert_eq!(Format::guess_from_path(Path::new("x.ron")), Format::Ron);
        assert_eq!(Format::guess_from_path(Path::new("x.ini")), Format::Unknown);
        assert_eq!(Format::guess_from_path(Path::new("noext")), Format::Unknown);
    }

    #[test]
    fn names() {
        assert_eq!("Yaml".parse::<Format>().unwrap(), Format::Yaml);
        assert!("xml".parse::<Format>().is_err());
        assert_eq!(Format::Yaml.extension(), Some("yaml"));
        assert_eq!(Format::None.extension(), None);
        assert_eq!(Format::Ron.to_string(), "RON");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn unsupported() {
        let r: Result<u32, Error> = Format::Unknown.read_str("1");
        assert!(matches!(r, Err(Error::UnsupportedFormat(Format::Unknown))));
    }
}
