//! Interface to an external 3D viewer.
//!
//! The viewer owns all rendering and animation. Callers only push commands
//! into it through [`Viewer3d`] and never read its state back, so any
//! implementation (a host plugin bridge, an in-process headless viewer, a
//! test double) can be swapped in.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ViewerError;
use crate::options::{AddVolumeOptions, ViewerConfig};
use crate::transform::CameraTransform;
use crate::volume::Volume;

/// Opaque identifier of a viewer session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SessionHandle(u64);

impl SessionHandle {
    /// Wraps a raw session id.
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Returns the raw session id.
    pub const fn id(self) -> u64 {
        self.0
    }
}

impl fmt::Display for SessionHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Commands accepted by a 3D viewer.
///
/// Every method blocks until the viewer has applied the command, except
/// [`start_animation`](Viewer3d::start_animation), which only starts a
/// rotation the viewer keeps running on its own.
pub trait Viewer3d {
    /// Closes every open display and session.
    fn reset_all(&mut self) -> Result<(), ViewerError>;

    /// Opens a session, or returns the one already open.
    fn open_viewer(&mut self, config: &ViewerConfig) -> Result<SessionHandle, ViewerError>;

    /// Shows or hides the coordinate axes.
    fn set_axis_overlay(&mut self, session: SessionHandle, enabled: bool)
        -> Result<(), ViewerError>;

    /// Imports a volume, registered under the volume's name.
    fn add_volume_object(
        &mut self,
        session: SessionHandle,
        volume: &Volume,
        options: &AddVolumeOptions,
    ) -> Result<(), ViewerError>;

    /// Makes the named content the active selection.
    fn select_object(&mut self, session: SessionHandle, name: &str) -> Result<(), ViewerError>;

    /// Replaces the model-to-view transform of the active selection.
    fn set_transform(
        &mut self,
        session: SessionHandle,
        transform: &CameraTransform,
    ) -> Result<(), ViewerError>;

    /// Starts continuous rotation. Returns without waiting for it to finish.
    fn start_animation(&mut self, session: SessionHandle) -> Result<(), ViewerError>;
}

impl<V: Viewer3d + ?Sized> Viewer3d for &mut V {
    fn reset_all(&mut self) -> Result<(), ViewerError> {
        (**self).reset_all()
    }

    fn open_viewer(&mut self, config: &ViewerConfig) -> Result<SessionHandle, ViewerError> {
        (**self).open_viewer(config)
    }

    fn set_axis_overlay(
        &mut self,
        session: SessionHandle,
        enabled: bool,
    ) -> Result<(), ViewerError> {
        (**self).set_axis_overlay(session, enabled)
    }

    fn add_volume_object(
        &mut self,
        session: SessionHandle,
        volume: &Volume,
        options: &AddVolumeOptions,
    ) -> Result<(), ViewerError> {
        (**self).add_volume_object(session, volume, options)
    }

    fn select_object(&mut self, session: SessionHandle, name: &str) -> Result<(), ViewerError> {
        (**self).select_object(session, name)
    }

    fn set_transform(
        &mut self,
        session: SessionHandle,
        transform: &CameraTransform,
    ) -> Result<(), ViewerError> {
        (**self).set_transform(session, transform)
    }

    fn start_animation(&mut self, session: SessionHandle) -> Result<(), ViewerError> {
        (**self).start_animation(session)
    }
}

/// The steps of presenting a volume, in the order they are issued.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PresentationStep {
    ResetAll,
    OpenViewer,
    HideAxes,
    AddVolume,
    SelectObject,
    SetTransform,
    StartAnimation,
}

impl PresentationStep {
    /// All steps in issue order.
    pub const ALL: [Self; 7] = [
        Self::ResetAll,
        Self::OpenViewer,
        Self::HideAxes,
        Self::AddVolume,
        Self::SelectObject,
        Self::SetTransform,
        Self::StartAnimation,
    ];

    /// One-based position of the step in the sequence.
    pub fn index(self) -> usize {
        self as usize + 1
    }
}

impl fmt::Display for PresentationStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::ResetAll => "reset all",
            Self::OpenViewer => "open viewer",
            Self::HideAxes => "hide axes",
            Self::AddVolume => "add volume",
            Self::SelectObject => "select object",
            Self::SetTransform => "set transform",
            Self::StartAnimation => "start animation",
        };
        f.write_str(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_indices() {
        let indices: Vec<usize> = PresentationStep::ALL.iter().map(|s| s.index()).collect();
        assert_eq!(indices, vec![1, 2, 3, 4, 5, 6, 7]);
    }

    #[test]
    fn test_step_display() {
        assert_eq!(PresentationStep::SetTransform.to_string(), "set transform");
    }

    #[test]
    fn test_handle_display() {
        let handle = SessionHandle::new(7);
        assert_eq!(handle.to_string(), "#7");
        assert_eq!(handle.id(), 7);
    }
}
