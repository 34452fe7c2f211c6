// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Where paging configuration comes from

use super::{Error, Format, PagingConfig};
#[cfg(feature = "serde")]
use crate::util::warn_about_error;
use std::env::var;
use std::path::PathBuf;

/// How the config file is used
///
/// See [`Options::from_env`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ConfigMode {
    /// Read the file; never write it
    #[default]
    Read,
    /// Read the file; [`Options::write_config`] writes it back
    ReadWrite,
    /// Ignore any existing file, replacing it with the default config
    WriteDefault,
}

impl ConfigMode {
    fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_uppercase().as_str() {
            "READ" => Some(ConfigMode::Read),
            "READWRITE" => Some(ConfigMode::ReadWrite),
            "WRITEDEFAULT" => Some(ConfigMode::WriteDefault),
            _ => None,
        }
    }
}

/// Config file location and mode
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Options {
    /// Path of the config file; empty for none
    pub config_path: PathBuf,
    /// Format of the config file; [`Format::None`] guesses from the path
    pub config_format: Format,
    pub config_mode: ConfigMode,
}

impl Options {
    /// Construct from environment variables
    ///
    /// -   `PAGINA_CONFIG`: path of a [`PagingConfig`] file. When unset,
    ///     the default config is used and nothing is read or written.
    /// -   `PAGINA_CONFIG_FORMAT`: one of `json`, `toml`, `yaml`, `ron`
    ///     (case-insensitive). When unset, the format is guessed from the
    ///     file extension.
    /// -   `PAGINA_CONFIG_MODE`: `Read` (default), `ReadWrite` or
    ///     `WriteDefault` (case-insensitive); see [`ConfigMode`].
    ///
    /// Bad values are logged and replaced by the default.
    pub fn from_env() -> Self {
        let mut options = Options::default();

        if let Ok(path) = var("PAGINA_CONFIG") {
            options.config_path = path.into();
        }

        if let Ok(name) = var("PAGINA_CONFIG_FORMAT") {
            match name.parse() {
                Ok(format) => options.config_format = format,
                Err(_) => log::error!(
                    "Options::from_env: unknown PAGINA_CONFIG_FORMAT={name}; expected one of json, toml, yaml, ron"
                ),
            }
        }

        if let Ok(mode) = var("PAGINA_CONFIG_MODE") {
            match ConfigMode::parse(&mode) {
                Some(mode) => options.config_mode = mode,
                None => log::error!(
                    "Options::from_env: unknown PAGINA_CONFIG_MODE={mode}; expected one of Read, ReadWrite, WriteDefault"
                ),
            }
        }

        options
    }

    #[cfg(feature = "serde")]
    fn has_path(&self) -> bool {
        !self.config_path.as_os_str().is_empty()
    }

    /// Load and validate config
    ///
    /// Without a config path (or without feature `serde`) this returns the
    /// default config. In [`ConfigMode::WriteDefault`] a failure to write is
    /// logged, not returned.
    pub fn read_config(&self) -> Result<PagingConfig, Error> {
        let config = match self.config_mode {
            #[cfg(feature = "serde")]
            ConfigMode::Read | ConfigMode::ReadWrite if self.has_path() => {
                self.config_format.read_path(&self.config_path)?
            }
            #[cfg(feature = "serde")]
            ConfigMode::WriteDefault if self.has_path() => {
                let config = PagingConfig::default();
                if let Err(error) = self.config_format.write_path(&self.config_path, &config) {
                    warn_about_error("Options::read_config: failed to write default config", &error);
                }
                config
            }
            _ => PagingConfig::default(),
        };
        config.validate()?;
        Ok(config)
    }

    /// Save config
    ///
    /// Writes only in [`ConfigMode::ReadWrite`] with a config path. Requires
    /// feature `serde`; otherwise this does nothing.
    pub fn write_config(&self, config: &PagingConfig) -> Result<(), Error> {
        #[cfg(feature = "serde")]
        if self.config_mode == ConfigMode::ReadWrite && self.has_path() {
            self.config_format.write_path(&self.config_path, config)?;
        }
        let _ = config;
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn parse_mode() {
        assert_eq!(ConfigMode::parse("readwrite"), Some(ConfigMode::ReadWrite));
        assert_eq!(ConfigMode::parse("Read"), Some(ConfigMode::Read));
        assert_eq!(ConfigMode::parse("WriteDefault"), Some(ConfigMode::WriteDefault));
        assert_eq!(ConfigMode::parse("write"), None);
    }

    #[test]
    fn no_path_uses_defaults() {
        let options = Options::default();
        assert_eq!(options.read_config().unwrap(), PagingConfig::default());
        assert!(options.write_config(&PagingConfig::default()).is_ok());

        let options = Options {
            config_mode: ConfigMode::WriteDefault,
            ..Options::default()
        };
        assert_eq!(options.read_config().unwrap(), PagingConfig::default());
    }

    #[cfg(feature = "json")]
    #[test]
    fn read_write_file() {
        let _ = env_logger::builder().is_test(true).try_init();
        let path = std::env::temp_dir().join(format!("pagina-options-{}.cfg", std::process::id()));
        let options = Options {
            config_path: path.clone(),
            config_format: Format::Json,
            config_mode: ConfigMode::WriteDefault,
        };
        assert_eq!(options.read_config().unwrap(), PagingConfig::default());

        let options = Options {
            config_mode: ConfigMode::ReadWrite,
            ..options
        };
        let config = PagingConfig::default().with_page_size(12);
        options.write_config(&config).unwrap();
        assert_eq!(options.read_config().unwrap(), config);

        let read_only = Options {
            config_mode: ConfigMode::Read,
            ..options.clone()
        };
        read_only.write_config(&PagingConfig::default()).unwrap();
        assert_eq!(read_only.read_config().unwrap(), config);
        let _ = std::fs::remove_file(path);
    }
}
