//! Scripted presentation of a volume in a 3D viewer.
//!
//! The sequence is fixed: reset the viewer, open a session, hide the axes,
//! import the volume, select it, apply the camera transform, start rotating.
//! The first failing step aborts the rest. Nothing is retried, since the
//! reset at the start already discards whatever a failed attempt left behind.

use aliasing_core::{
    AddVolumeOptions, AliasingError, CameraTransform, PresentationStep, RenderMode, Result,
    SessionHandle, Viewer3d, ViewerConfig, ViewerError, Volume,
};

/// Drives a [`Viewer3d`] through the presentation sequence.
#[derive(Debug, Clone, Default)]
pub struct ViewerDirector {
    viewer_config: ViewerConfig,
    add_options: AddVolumeOptions,
}

impl ViewerDirector {
    /// Creates a director with default session and import options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the options used to open the session.
    #[must_use]
    pub fn with_viewer_config(mut self, config: ViewerConfig) -> Self {
        self.viewer_config = config;
        self
    }

    /// Sets the options used to import the volume.
    #[must_use]
    pub fn with_add_options(mut self, options: AddVolumeOptions) -> Self {
        self.add_options = options;
        self
    }

    /// Returns the import options.
    pub fn add_options(&self) -> &AddVolumeOptions {
        &self.add_options
    }

    /// Shows `volume` under `transform` and leaves it rotating.
    ///
    /// Returns the session the volume was loaded into. On failure the error
    /// names the step that failed; no later step has been issued.
    pub fn present<V: Viewer3d + ?Sized>(
        &self,
        volume: &Volume,
        transform: &CameraTransform,
        viewer: &mut V,
    ) -> Result<SessionHandle> {
        if self.add_options.render_mode != RenderMode::None {
            log::warn!(
                "presenting '{}' with render mode '{}'; aliasing is only visible with direct volume rendering",
                volume.name(),
                self.add_options.render_mode
            );
        }

        run_step(PresentationStep::ResetAll, || viewer.reset_all())?;
        let session = run_step(PresentationStep::OpenViewer, || {
            viewer.open_viewer(&self.viewer_config)
        })?;
        run_step(PresentationStep::HideAxes, || {
            viewer.set_axis_overlay(session, false)
        })?;
        run_step(PresentationStep::AddVolume, || {
            viewer.add_volume_object(session, volume, &self.add_options)
        })?;
        run_step(PresentationStep::SelectObject, || {
            viewer.select_object(session, volume.name())
        })?;
        run_step(PresentationStep::SetTransform, || {
            viewer.set_transform(session, transform)
        })?;
        run_step(PresentationStep::StartAnimation, || {
            viewer.start_animation(session)
        })?;

        log::info!("'{}' is rotating in session {session}", volume.name());
        Ok(session)
    }
}

/// Presents `volume` with the default director.
pub fn present<V: Viewer3d + ?Sized>(
    volume: &Volume,
    transform: &CameraTransform,
    viewer: &mut V,
) -> Result<SessionHandle> {
    ViewerDirector::new().present(volume, transform, viewer)
}

fn run_step<T>(
    step: PresentationStep,
    f: impl FnOnce() -> std::result::Result<T, ViewerError>,
) -> Result<T> {
    log::info!("step {}/{}: {step}", step.index(), PresentationStep::ALL.len());
    f().map_err(|source| {
        log::warn!("step {} ({step}) failed: {source}", step.index());
        AliasingError::Presentation { step, source }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Viewer that refuses every command.
    struct Offline;

    impl Viewer3d for Offline {
        fn reset_all(&mut self) -> std::result::Result<(), ViewerError> {
            Err(ViewerError::Unreachable("offline".to_string()))
        }

        fn open_viewer(
            &mut self,
            _config: &ViewerConfig,
        ) -> std::result::Result<SessionHandle, ViewerError> {
            unreachable!("sequence must stop after reset fails")
        }

        fn set_axis_overlay(
            &mut self,
            _session: SessionHandle,
            _enabled: bool,
        ) -> std::result::Result<(), ViewerError> {
            unreachable!()
        }

        fn add_volume_object(
            &mut self,
            _session: SessionHandle,
            _volume: &Volume,
            _options: &AddVolumeOptions,
        ) -> std::result::Result<(), ViewerError> {
            unreachable!()
        }

        fn select_object(
            &mut self,
            _session: SessionHandle,
            _name: &str,
        ) -> std::result::Result<(), ViewerError> {
            unreachable!()
        }

        fn set_transform(
            &mut self,
            _session: SessionHandle,
            _transform: &CameraTransform,
        ) -> std::result::Result<(), ViewerError> {
            unreachable!()
        }

        fn start_animation(
            &mut self,
            _session: SessionHandle,
        ) -> std::result::Result<(), ViewerError> {
            unreachable!()
        }
    }

    #[test]
    fn test_unreachable_viewer_fails_first_step() {
        let volume = Volume::black("v", 1, 1, 1).unwrap();
        let err = present(&volume, &CameraTransform::IDENTITY, &mut Offline).unwrap_err();
        assert_eq!(err.failed_step(), Some(PresentationStep::ResetAll));
        assert!(err.to_string().contains("step 1 (reset all)"));
    }

    #[test]
    fn test_director_defaults() {
        let director = ViewerDirector::new();
        assert_eq!(director.add_options().render_mode, RenderMode::None);
        assert!(director.add_options().visible);
    }
}
