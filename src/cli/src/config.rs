use std::{
    fs, io,
    path::{Path, PathBuf},
};

use log::{debug, info};
use serde::Deserialize;
use tesseract_core::{Cell, UnknownCell};
use thiserror::Error;

pub const DEFAULT_CONFIG_PATH: &str = "tesseract.toml";

/// Settings for the terminal front end.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Seed for scrambles; a fresh one is drawn when absent.
    pub seed: Option<u64>,
    /// Cells drawn in the neutral color instead of their facelets.
    pub hidden_cells: Vec<String>,
    /// Drawn once per facelet.
    pub glyph: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            seed: None,
            hidden_cells: vec![Cell::WPlus.label().to_owned()],
            glyph: "■".to_owned(),
        }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Could not read the configuration file {path:?}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Could not parse the configuration file {path:?}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("Invalid hidden cell in the configuration")]
    HiddenCell(#[from] UnknownCell),
}

impl Config {
    /// Load the configuration from `path`, or from `tesseract.toml` if no
    /// path is given and that file exists. Otherwise use the defaults.
    pub fn load(path: Option<&Path>) -> Result<Config, ConfigError> {
        let path = match path {
            Some(path) => path,
            None => {
                let default_path = Path::new(DEFAULT_CONFIG_PATH);
                if !default_path.exists() {
                    debug!("No {DEFAULT_CONFIG_PATH} found, using the default configuration");
                    return Ok(Config::default());
                }
                default_path
            }
        };

        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_owned(),
            source,
        })?;
        let config = Config::parse(&text).map_err(|source| ConfigError::Parse {
            path: path.to_owned(),
            source,
        })?;
        info!("Loaded configuration from {}", path.display());

        Ok(config)
    }

    pub fn parse(text: &str) -> Result<Config, toml::de::Error> {
        toml::from_str(text)
    }

    pub fn hidden_cells(&self) -> Result<Vec<Cell>, ConfigError> {
        Ok(self
            .hidden_cells
            .iter()
            .map(|label| label.parse())
            .collect::<Result<Vec<Cell>, _>>()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_gives_defaults() {
        let config = Config::parse("").unwrap();

        assert_eq!(config, Config::default());
        assert_eq!(config.hidden_cells().unwrap(), vec![Cell::WPlus]);
    }

    #[test]
    fn fields_are_read() {
        let config = Config::parse(
            r##"
            seed = 42
            hidden_cells = ["W-", "x+"]
            glyph = "#"
            "##,
        )
        .unwrap();

        assert_eq!(config.seed, Some(42));
        assert_eq!(
            config.hidden_cells().unwrap(),
            vec![Cell::WMinus, Cell::XPlus]
        );
        assert_eq!(config.glyph, "#");
    }

    #[test]
    fn bad_cells_and_unknown_keys_are_rejected() {
        let config = Config::parse(r#"hidden_cells = ["W0"]"#).unwrap();
        assert!(matches!(
            config.hidden_cells(),
            Err(ConfigError::HiddenCell(UnknownCell(label))) if label == "W0"
        ));

        assert!(Config::parse("speed = 3").is_err());
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        assert!(matches!(
            Config::load(Some(Path::new("does/not/exist.toml"))),
            Err(ConfigError::Read { .. })
        ));
    }
}
