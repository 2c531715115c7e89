//! Error types for the scene crate

use thiserror::Error;

/// Scene-related errors
#[derive(Debug, Error)]
pub enum SceneError {
    /// Molecule not found in registry
    #[error("Molecule not found: {0}")]
    NotFound(String),

    /// A molecule with this name is already registered
    #[error("Molecule already exists: {0}")]
    DuplicateName(String),

    /// Operation needs a selected molecule and none is
    #[error("No molecule selected")]
    NoSelection,

    /// Record-level import failure
    #[error("Import error: {0}")]
    Io(#[from] molview_io::IoError),
}

/// Result type for scene operations
pub type SceneResult<T> = Result<T, SceneError>;
