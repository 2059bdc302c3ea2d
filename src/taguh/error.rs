use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TaguhError {
    #[error("IO error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Serialization error on {path}: {source}")]
    Serialization {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("file does not exist: {0}")]
    FileNotFound(PathBuf),

    #[error("Tag(s) not found: {}", .0.join(", "))]
    TagNotFound(Vec<String>),

    #[error("tag name '{0}' must not contain a comma")]
    InvalidTagName(String),

    #[error("option {0} does not exist")]
    InvalidOption(String),

    #[error("{0}")]
    NotFound(String),

    #[error("Please provide arguments. For usage : taguh {0} -h")]
    Usage(String),
}

impl TaguhError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        TaguhError::Io {
            path: path.into(),
            source,
        }
    }

    pub fn serialization(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        TaguhError::Serialization {
            path: path.into(),
            source,
        }
    }

    /// Storage failures are fatal and exit with 255; everything the user can
    /// fix by changing the invocation exits with 1.
    pub fn exit_code(&self) -> i32 {
        match self {
            TaguhError::Io { .. } | TaguhError::Serialization { .. } => 255,
            TaguhError::FileNotFound(_)
            | TaguhError::TagNotFound(_)
            | TaguhError::InvalidTagName(_)
            | TaguhError::InvalidOption(_)
            | TaguhError::NotFound(_)
            | TaguhError::Usage(_) => 1,
        }
    }
}

pub type Result<T> = std::result::Result<T, TaguhError>;
