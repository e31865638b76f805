//! aliasing-demo: shows how volume renderers alias surfaces seen edge-on.
//!
//! The demo builds a black cube with two bright sheets, its first and last
//! Z slices, hands it to a 3D viewer under a fixed camera transform and
//! starts a rotation. As the sheets turn towards the viewing direction the
//! renderer undersamples them and the sheets break up. The take-home message
//! is to look at an object from several angles and trust views where the
//! surface faces the camera.
//!
//! # Quick Start
//!
//! ```no_run
//! use aliasing_demo::*;
//!
//! fn main() -> Result<()> {
//!     let mut viewer = HeadlessViewer::new();
//!     let report = run(&DemoConfig::default(), &mut viewer)?;
//!     assert_eq!(report.volume_name, "Double_Sheet");
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! - [`builder::build`] creates the double-sheet [`Volume`]
//! - [`ViewerDirector`] drives any [`Viewer3d`] through the fixed
//!   presentation sequence
//! - [`HeadlessViewer`] is an in-process [`Viewer3d`] that keeps session
//!   state without drawing

// Documentation lints - internal functions don't need exhaustive panic/error docs
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]

pub mod builder;
pub mod config;
pub mod director;
pub mod headless;
pub mod preview;

// Re-export core types
pub use aliasing_core::{
    AddVolumeOptions, AliasingError, Axis, CameraTransform, PresentationStep, RenderMode, Result,
    Mat4, SessionHandle, SessionState, UVec3, Vec3, Viewer3d, ViewerConfig, ViewerError, Volume,
    DOUBLE_SHEET_VIEW, MAX_INTENSITY, MIN_INTENSITY,
};

pub use builder::build;
pub use config::DemoConfig;
pub use director::{present, ViewerDirector};
pub use headless::{Command, HeadlessViewer};

use std::path::PathBuf;

/// Outcome of a successful [`run`].
#[derive(Debug, Clone, PartialEq)]
pub struct RunReport {
    /// Name the volume was registered under.
    pub volume_name: String,

    /// Size of the generated volume.
    pub dimensions: UVec3,

    /// Session the volume is rotating in.
    pub session: SessionHandle,

    /// Preview images written, if previews were requested.
    pub previews: Vec<PathBuf>,
}

/// Builds the volume described by `config` and presents it in `viewer`.
///
/// Volume errors are reported before the viewer is touched. Presentation
/// errors name the failing step; the viewer is left as that step left it.
pub fn run<V: Viewer3d + ?Sized>(config: &DemoConfig, viewer: &mut V) -> Result<RunReport> {
    let [nx, ny, nz] = config.dimensions;
    let volume = build(&config.volume_name, nx, ny, nz)?;

    let previews = match &config.preview_dir {
        Some(dir) => preview::write_previews(&volume, dir)?,
        None => Vec::new(),
    };

    let session = ViewerDirector::new()
        .with_viewer_config(config.viewer.clone())
        .with_add_options(config.add_options.clone())
        .present(&volume, &config.transform, viewer)?;

    Ok(RunReport {
        volume_name: volume.name().to_string(),
        dimensions: volume.dims(),
        session,
        previews,
    })
}
