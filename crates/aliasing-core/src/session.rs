//! State of a single 3D viewer session.
//!
//! A session moves strictly forward through
//! `Closed -> Open -> ObjectLoaded -> ObjectSelected -> TransformApplied -> Animating`.
//! `Animating` is terminal; only a reset returns the viewer to `Closed`.

use std::fmt;

use glam::Vec3;

use crate::error::ViewerError;
use crate::options::ViewerConfig;
use crate::registry::{Content, Registry};
use crate::viewer::SessionHandle;

/// Lifecycle state of a viewer session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SessionState {
    Closed,
    Open,
    ObjectLoaded,
    ObjectSelected,
    TransformApplied,
    Animating,
}

impl SessionState {
    /// Returns the state that follows this one, if any.
    pub fn next(self) -> Option<Self> {
        match self {
            Self::Closed => Some(Self::Open),
            Self::Open => Some(Self::ObjectLoaded),
            Self::ObjectLoaded => Some(Self::ObjectSelected),
            Self::ObjectSelected => Some(Self::TransformApplied),
            Self::TransformApplied => Some(Self::Animating),
            Self::Animating => None,
        }
    }

    /// Whether this state is the terminal one.
    pub fn is_terminal(self) -> bool {
        self.next().is_none()
    }
}

impl fmt::Display for SessionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Closed => "Closed",
            Self::Open => "Open",
            Self::ObjectLoaded => "ObjectLoaded",
            Self::ObjectSelected => "ObjectSelected",
            Self::TransformApplied => "TransformApplied",
            Self::Animating => "Animating",
        };
        f.write_str(s)
    }
}

/// An open viewer session with its loaded content.
#[derive(Debug)]
pub struct Session {
    /// Handle identifying this session.
    pub handle: SessionHandle,

    /// The options the session was opened with.
    pub config: ViewerConfig,

    /// Loaded content.
    pub registry: Registry,

    /// Name of the selected content.
    pub selected: Option<String>,

    /// Whether the coordinate axes are drawn.
    pub axis_overlay: bool,

    state: SessionState,
}

impl Session {
    /// Creates a freshly opened session.
    pub fn open(handle: SessionHandle, config: ViewerConfig) -> Self {
        Self {
            handle,
            config,
            registry: Registry::new(),
            selected: None,
            axis_overlay: true,
            state: SessionState::Open,
        }
    }

    /// Returns the current state.
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Moves to `to`, which must directly follow the current state.
    pub fn advance(&mut self, to: SessionState) -> Result<(), ViewerError> {
        if self.state.next() != Some(to) {
            return Err(ViewerError::InvalidTransition {
                from: self.state,
                to,
            });
        }
        log::debug!("session {}: {} -> {}", self.handle, self.state, to);
        self.state = to;
        Ok(())
    }

    /// Whether the session is rotating its content.
    pub fn is_animating(&self) -> bool {
        self.state == SessionState::Animating
    }

    /// Returns the selected content.
    pub fn selected_content(&self) -> Option<&Content> {
        self.selected.as_deref().and_then(|n| self.registry.get(n))
    }

    /// Returns the selected content for modification.
    pub fn selected_content_mut(&mut self) -> Option<&mut Content> {
        let name = self.selected.as_deref()?;
        self.registry.get_mut(name)
    }

    /// Computes the bounding box of all visible content in view coordinates.
    ///
    /// Falls back to the unit cube when nothing is visible.
    pub fn bounding_box(&self) -> (Vec3, Vec3) {
        let mut min = Vec3::splat(f32::MAX);
        let mut max = Vec3::splat(f32::MIN);
        let mut has_extent = false;

        for content in self.registry.iter().filter(|c| c.is_visible()) {
            let (bb_min, bb_max) = content.bounding_box();
            min = min.min(bb_min);
            max = max.max(bb_max);
            has_extent = true;
        }

        if has_extent {
            (min, max)
        } else {
            (Vec3::ZERO, Vec3::ONE)
        }
    }

    /// Representative length scale of the visible content.
    pub fn length_scale(&self) -> f32 {
        let (min, max) = self.bounding_box();
        (max - min).length()
    }
}
