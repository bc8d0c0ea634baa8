use std::path::PathBuf;

use thiserror::Error;

use crate::tree::LayoutNodeId;

#[derive(Debug, Error)]
pub enum LayoutError {
    #[error("layout engine error: {0}")]
    Taffy(#[from] taffy::TaffyError),

    #[error("unknown layout node {0:?}")]
    UnknownNode(LayoutNodeId),

    #[error("layout node {0:?} belongs to the surface itself")]
    ReservedNode(LayoutNodeId),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read surface config {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Parse(#[from] toml::de::Error),

    #[error("spring frequency response must be positive, got {0}")]
    InvalidFrequencyResponse(f32),

    #[error("spring damping ratio must not be negative, got {0}")]
    InvalidDampingRatio(f32),
}
