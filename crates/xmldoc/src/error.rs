//! Error types for reading documentation files.

use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced by the reader.
///
/// Only problems with the inputs themselves are errors. Markup the model
/// does not understand, unresolved reflection lookups, and missing
/// attributes all degrade silently instead.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Documentation file not found: {}", .path.display())]
    NotFound { path: PathBuf },

    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed documentation XML in {}: {source}", .path.display())]
    Xml {
        path: PathBuf,
        #[source]
        source: xmldoc_xml::Error,
    },

    #[error("Invalid reflection metadata: {0}")]
    Metadata(#[from] serde_json::Error),

    #[error("Invalid configuration: {0}")]
    Config(#[from] serde_yaml::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
