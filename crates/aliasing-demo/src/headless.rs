//! In-process viewer without a window.
//!
//! [`HeadlessViewer`] accepts the same commands as a real 3D viewer and keeps
//! the resulting session state, so the presentation sequence can run and be
//! inspected where no host viewer exists. It does not draw anything. The
//! rotation started by `start_animation` only advances when [`HeadlessViewer::tick`]
//! is called.

use aliasing_core::{
    AddVolumeOptions, CameraTransform, Content, Session, SessionHandle, SessionState, Viewer3d,
    ViewerConfig, ViewerError, Volume,
};
use glam::Mat4;

/// A command received by the headless viewer.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    ResetAll,
    OpenViewer { title: String },
    SetAxisOverlay { enabled: bool },
    AddVolume { name: String, label: String },
    SelectObject { name: String },
    SetTransform { rows: [f32; 16] },
    StartAnimation,
}

/// A viewer that keeps session state in memory.
#[derive(Debug, Default)]
pub struct HeadlessViewer {
    session: Option<Session>,
    next_id: u64,
    journal: Vec<Command>,
    disconnected: bool,
    angle_degrees: f32,
}

impl HeadlessViewer {
    /// Creates a viewer with no open session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a viewer that rejects every command as unreachable.
    pub fn disconnected() -> Self {
        Self {
            disconnected: true,
            ..Self::default()
        }
    }

    /// Returns the open session, if any.
    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    /// Returns the state of the open session, or `Closed`.
    pub fn state(&self) -> SessionState {
        self.session
            .as_ref()
            .map_or(SessionState::Closed, Session::state)
    }

    /// Returns every accepted command in order.
    ///
    /// The journal covers the whole lifetime of the viewer; `reset_all` closes
    /// the session but is itself recorded rather than clearing the log.
    pub fn journal(&self) -> &[Command] {
        &self.journal
    }

    /// Current rotation angle of the animation in degrees.
    pub fn animation_angle(&self) -> f32 {
        self.angle_degrees
    }

    /// Advances a running animation by `frames` frames.
    ///
    /// Does nothing unless the session is animating.
    pub fn tick(&mut self, frames: u32) {
        let Some(session) = self.session.as_ref().filter(|s| s.is_animating()) else {
            return;
        };
        #[allow(clippy::cast_precision_loss)]
        let delta = session.config.rotation_speed * frames as f32;
        self.angle_degrees = (self.angle_degrees + delta).rem_euclid(360.0);
    }

    /// Transform of the selected content in the current animation frame.
    ///
    /// The rotation turns about the view Y axis through the centre of the
    /// content, applied after the model transform.
    pub fn frame_transform(&self) -> Option<Mat4> {
        let session = self.session.as_ref()?;
        let content = session.selected_content()?;
        let model = content.transform();
        let center = model.transform_point3(content.dims().as_vec3() * 0.5);
        let spin = Mat4::from_translation(center)
            * Mat4::from_rotation_y(self.angle_degrees.to_radians())
            * Mat4::from_translation(-center);
        Some(spin * model)
    }

    fn check_reachable(&self) -> Result<(), ViewerError> {
        if self.disconnected {
            return Err(ViewerError::Unreachable("headless viewer disconnected".to_string()));
        }
        Ok(())
    }

    fn session_mut(&mut self, handle: SessionHandle) -> Result<&mut Session, ViewerError> {
        self.check_reachable()?;
        match self.session.as_mut() {
            None => Err(ViewerError::NoSession),
            Some(s) if s.handle != handle => Err(ViewerError::UnknownSession(handle)),
            Some(s) => Ok(s),
        }
    }
}

impl Viewer3d for HeadlessViewer {
    fn reset_all(&mut self) -> Result<(), ViewerError> {
        self.check_reachable()?;
        if let Some(session) = self.session.take() {
            log::debug!(
                "closing session {} with {} item(s)",
                session.handle,
                session.registry.len()
            );
        }
        self.angle_degrees = 0.0;
        self.journal.push(Command::ResetAll);
        Ok(())
    }

    fn open_viewer(&mut self, config: &ViewerConfig) -> Result<SessionHandle, ViewerError> {
        self.check_reachable()?;
        let handle = match &self.session {
            Some(session) => session.handle,
            None => {
                self.next_id += 1;
                let handle = SessionHandle::new(self.next_id);
                log::debug!(
                    "opening session {handle} '{}' ({}x{}, background {})",
                    config.title,
                    config.width,
                    config.height,
                    config.background_color
                );
                self.session = Some(Session::open(handle, config.clone()));
                handle
            }
        };
        self.journal.push(Command::OpenViewer {
            title: config.title.clone(),
        });
        Ok(handle)
    }

    fn set_axis_overlay(
        &mut self,
        session: SessionHandle,
        enabled: bool,
    ) -> Result<(), ViewerError> {
        self.session_mut(session)?.axis_overlay = enabled;
        self.journal.push(Command::SetAxisOverlay { enabled });
        Ok(())
    }

    fn add_volume_object(
        &mut self,
        session: SessionHandle,
        volume: &Volume,
        options: &AddVolumeOptions,
    ) -> Result<(), ViewerError> {
        let s = self.session_mut(session)?;
        if s.registry.contains(volume.name()) {
            return Err(ViewerError::ObjectExists(volume.name().to_string()));
        }
        s.advance(SessionState::ObjectLoaded)?;
        let content = Content::from_volume(volume, options);
        let label = content.label().to_string();
        s.registry.register(content)?;
        self.journal.push(Command::AddVolume {
            name: volume.name().to_string(),
            label,
        });
        Ok(())
    }

    fn select_object(&mut self, session: SessionHandle, name: &str) -> Result<(), ViewerError> {
        let s = self.session_mut(session)?;
        if !s.registry.contains(name) {
            return Err(ViewerError::ObjectNotFound(name.to_string()));
        }
        s.advance(SessionState::ObjectSelected)?;
        s.selected = Some(name.to_string());
        self.journal.push(Command::SelectObject {
            name: name.to_string(),
        });
        Ok(())
    }

    fn set_transform(
        &mut self,
        session: SessionHandle,
        transform: &CameraTransform,
    ) -> Result<(), ViewerError> {
        let s = self.session_mut(session)?;
        if s.selected_content().is_none() {
            return Err(ViewerError::NoSelection);
        }
        s.advance(SessionState::TransformApplied)?;
        if let Some(content) = s.selected_content_mut() {
            content.set_transform(transform.to_mat4());
        }
        self.journal.push(Command::SetTransform {
            rows: transform.to_row_major(),
        });
        Ok(())
    }

    fn start_animation(&mut self, session: SessionHandle) -> Result<(), ViewerError> {
        let s = self.session_mut(session)?;
        s.advance(SessionState::Animating)?;
        log::debug!(
            "session {session} rotating at {} deg/frame",
            s.config.rotation_speed
        );
        self.journal.push(Command::StartAnimation);
        Ok(())
    }
}
