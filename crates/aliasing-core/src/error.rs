//! Error types for the aliasing demo.

use thiserror::Error;

use crate::session::SessionState;
use crate::viewer::{PresentationStep, SessionHandle};
use crate::volume::Axis;

/// The main error type for volume construction and presentation.
#[derive(Error, Debug)]
pub enum AliasingError {
    /// A requested volume dimension is not positive.
    #[error("invalid {axis} dimension {value}: must be at least 1")]
    InvalidDimension { axis: Axis, value: u32 },

    /// The display name of a volume is empty.
    #[error("volume name must not be empty")]
    InvalidName,

    /// The voxel count does not fit in memory addressing.
    #[error("volume of {nx}x{ny}x{nz} voxels is too large")]
    VolumeTooLarge { nx: u32, ny: u32, nz: u32 },

    /// A camera transform could not be parsed or is not affine.
    #[error("invalid camera transform: {0}")]
    InvalidTransform(String),

    /// A step of the presentation sequence failed; later steps were not issued.
    #[error("presentation failed at step {} ({step}): {source}", .step.index())]
    Presentation {
        step: PresentationStep,
        #[source]
        source: ViewerError,
    },

    /// Writing slice previews failed.
    #[error("preview error: {0}")]
    Preview(String),

    /// Image encoding error.
    #[error("image error: {0}")]
    Image(#[from] image::ImageError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl AliasingError {
    /// Returns the failing step if this is a presentation failure.
    #[must_use]
    pub fn failed_step(&self) -> Option<PresentationStep> {
        match self {
            Self::Presentation { step, .. } => Some(*step),
            _ => None,
        }
    }
}

/// Errors reported by a 3D viewer implementation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ViewerError {
    /// The viewer could not be reached at all.
    #[error("viewer unreachable: {0}")]
    Unreachable(String),

    /// No session is open.
    #[error("no viewer session is open")]
    NoSession,

    /// The handle does not name the open session.
    #[error("unknown session {0}")]
    UnknownSession(SessionHandle),

    /// Content with the given name is already loaded.
    #[error("content '{0}' already exists")]
    ObjectExists(String),

    /// Content with the given name was not found.
    #[error("content '{0}' not found")]
    ObjectNotFound(String),

    /// An operation needs a selected object but none is selected.
    #[error("no content is selected")]
    NoSelection,

    /// The session cannot move between these states.
    #[error("cannot go from {from} to {to}")]
    InvalidTransition { from: SessionState, to: SessionState },
}

/// A specialized Result type for aliasing demo operations.
pub type Result<T> = std::result::Result<T, AliasingError>;
