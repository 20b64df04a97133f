//! Error types for discovery and trimming

use std::path::{Path, PathBuf};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TrimError {
    #[error("Invalid search pattern: {0}")]
    Pattern(#[from] glob::PatternError),
    #[error("Failed to read directory entry: {0}")]
    Walk(#[from] glob::GlobError),
    #[error("Failed to load image {}: {source}", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    #[error("Image {} has no visible content to trim to", .path.display())]
    EmptyImage { path: PathBuf },
    #[error("Failed to save image {}: {source}", .path.display())]
    Save {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    #[error("Failed to write progress: {0}")]
    Output(#[from] std::io::Error),
}

impl TrimError {
    /// Path of the file that failed, if the error is tied to one.
    pub fn path(&self) -> Option<&Path> {
        match self {
            TrimError::Decode { path, .. }
            | TrimError::EmptyImage { path }
            | TrimError::Save { path, .. } => Some(path),
            TrimError::Walk(err) => Some(err.path()),
            TrimError::Pattern(_) | TrimError::Output(_) => None,
        }
    }
}
