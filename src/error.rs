use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failure reported by a project configuration loader.
pub type LoadError = Box<dyn std::error::Error + Send + Sync>;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to read file: {0}")]
    Io(#[from] io::Error),

    #[error("failed to parse file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("failed to render options: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// The config loader failed; passed through untouched.
    #[error("failed to load project configuration for {}: {source}", path.display())]
    Load {
        path: PathBuf,
        #[source]
        source: LoadError,
    },

    #[error("invalid {field} value `{value}`")]
    InvalidOption { field: &'static str, value: String },
}
