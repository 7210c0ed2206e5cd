//! Reader and rendering configuration.
//!
//! ```yaml
//! reader:
//!   extension: xml
//! render:
//!   line-ending: crlf
//! ```
//!
//! Every key is optional.

use crate::error::{Error, Result};
use crate::plain_text::LineEnding;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Config {
    pub reader: ReaderConfig,
    pub render: RenderConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct ReaderConfig {
    /// Extension of the documentation file that sits next to a binary.
    pub extension: String,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            extension: "xml".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct RenderConfig {
    pub line_ending: LineEnding,
}

impl Config {
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        // An empty document deserializes as null, not as an empty mapping.
        if yaml.trim().is_empty() {
            return Ok(Config::default());
        }
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Read a YAML configuration file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_yaml_str(&content)?;
        tracing::debug!(path = %path.display(), "Loaded configuration");
        Ok(config)
    }
}
