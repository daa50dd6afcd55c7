//! Configuration files
//!
//! Any `Serialize + Deserialize + Default` type can be stored as TOML or RON.
//! The format follows the file extension.

use std::path::Path;

pub use serde::{Serialize, Deserialize};

/// On-disk configuration formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    /// `.toml`
    Toml,
    /// `.ron`
    Ron,
}

impl ConfigFormat {
    /// Format for `path`, from its extension
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("toml") => Ok(Self::Toml),
            Some(ext) if ext.eq_ignore_ascii_case("ron") => Ok(Self::Ron),
            _ => Err(ConfigError::UnsupportedFormat(path.display().to_string())),
        }
    }
}

/// Load/save support for configuration types
pub trait Config: Serialize + for<'de> Deserialize<'de> + Default {
    /// Read and parse a configuration file
    fn load_from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let format = ConfigFormat::from_path(path)?;
        let text = std::fs::read_to_string(path)?;

        let parsed = match format {
            ConfigFormat::Toml => toml::from_str(&text).map_err(|e| e.to_string()),
            ConfigFormat::Ron => ron::from_str(&text).map_err(|e| e.to_string()),
        };
        let config = parsed.map_err(|reason| ConfigError::Parse(format!("{}: {}", path.display(), reason)))?;

        log::info!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Serialize and write a configuration file, replacing any existing one
    fn save_to_file(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();
        let text = match ConfigFormat::from_path(path)? {
            ConfigFormat::Toml => toml::to_string_pretty(self).map_err(|e| e.to_string()),
            ConfigFormat::Ron => ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::new()).map_err(|e| e.to_string()),
        }
        .map_err(ConfigError::Serialize)?;

        std::fs::write(path, text)?;
        log::debug!("Saved configuration to {}", path.display());
        Ok(())
    }
}

/// Configuration errors
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    /// File could not be read or written
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// File contents did not parse
    #[error("Parse error: {0}")]
    Parse(String),

    /// Value could not be serialized
    #[error("Serialization error: {0}")]
    Serialize(String),

    /// Extension is neither `.toml` nor `.ron`
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    /// A value failed validation
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}
