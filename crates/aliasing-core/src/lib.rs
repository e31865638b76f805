//! Core types for the aliasing demo.
//!
//! This crate provides the data and interfaces shared by the demo:
//! - [`Volume`], an 8-bit grayscale 3D grid with a display name
//! - [`CameraTransform`], a fixed row-major 4×4 affine transform
//! - [`Viewer3d`], the command interface of an external 3D viewer
//! - Session state and the content registry used by in-process viewers

// Documentation lints - internal functions don't need exhaustive panic/error docs
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]
// Builder patterns return Self which doesn't need must_use
#![allow(clippy::must_use_candidate)]
// Module-prefixed names such as `ViewerConfig` in `options` read better in docs
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod options;
pub mod registry;
pub mod session;
pub mod transform;
pub mod viewer;
pub mod volume;

pub use error::{AliasingError, Result, ViewerError};
pub use options::{AddVolumeOptions, ChannelMask, RenderMode, ViewerConfig};
pub use registry::{Content, Registry};
pub use session::{Session, SessionState};
pub use transform::{CameraTransform, DOUBLE_SHEET_VIEW};
pub use viewer::{PresentationStep, SessionHandle, Viewer3d};
pub use volume::{Axis, Volume, MAX_INTENSITY, MIN_INTENSITY};

// Re-export glam types for convenience
pub use glam::{Mat4, UVec3, Vec3};
