//! Configuration for viewer sessions and loaded content.

use std::fmt;

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// How a volume is displayed by the 3D viewer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum RenderMode {
    /// Direct volume rendering, no surface extraction.
    #[default]
    None,
    /// Orthogonal slice planes.
    Surface,
    /// Isosurface extracted at the configured threshold.
    Iso,
}

impl fmt::Display for RenderMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::None => "none",
            Self::Surface => "surface",
            Self::Iso => "iso",
        };
        f.write_str(s)
    }
}

/// Which color channels of the source image are used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChannelMask {
    pub red: bool,
    pub green: bool,
    pub blue: bool,
}

impl Default for ChannelMask {
    fn default() -> Self {
        Self {
            red: true,
            green: true,
            blue: true,
        }
    }
}

/// Options for importing a volume into a viewer session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AddVolumeOptions {
    /// Display mode.
    pub render_mode: RenderMode,

    /// On-screen label. `None` uses the volume name.
    pub label: Option<String>,

    /// Fixed display color. `None` keeps the viewer's default coloring.
    pub color: Option<Vec3>,

    /// Channels taken from the source image.
    pub channels: ChannelMask,

    /// Downsampling factor applied before display (1 = full resolution).
    pub resampling_factor: u32,

    /// Intensity threshold below which samples are transparent.
    pub threshold: u8,

    /// Whether the content is visible once loaded.
    pub visible: bool,
}

impl Default for AddVolumeOptions {
    fn default() -> Self {
        Self {
            render_mode: RenderMode::None,
            label: None,
            color: None,
            channels: ChannelMask::default(),
            resampling_factor: 1,
            threshold: 0,
            visible: true,
        }
    }
}

impl AddVolumeOptions {
    /// Creates options with the viewer defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the render mode.
    #[must_use]
    pub fn with_render_mode(mut self, mode: RenderMode) -> Self {
        self.render_mode = mode;
        self
    }

    /// Sets an explicit label.
    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Sets the visibility.
    #[must_use]
    pub fn with_visible(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }

    /// Returns the label to show, falling back to `name`.
    pub fn label_or<'a>(&'a self, name: &'a str) -> &'a str {
        self.label.as_deref().unwrap_or(name)
    }
}

/// Options for opening a viewer session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    /// Window title.
    pub title: String,

    /// Window size in pixels.
    pub width: u32,
    pub height: u32,

    /// Background color.
    pub background_color: Vec3,

    /// Rotation speed of the animation in degrees per frame.
    pub rotation_speed: f32,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            title: "3D Viewer".to_string(),
            width: 512,
            height: 512,
            background_color: Vec3::ZERO,
            rotation_speed: 1.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_add_options() {
        let opts = AddVolumeOptions::default();
        assert_eq!(opts.render_mode, RenderMode::None);
        assert!(opts.visible);
        assert_eq!(opts.resampling_factor, 1);
        assert_eq!(opts.threshold, 0);
        assert_eq!(opts.channels, ChannelMask::default());
        assert!(opts.color.is_none());
    }

    #[test]
    fn test_label_fallback() {
        let opts = AddVolumeOptions::new();
        assert_eq!(opts.label_or("Double_Sheet"), "Double_Sheet");
        let opts = opts.with_label("sheets");
        assert_eq!(opts.label_or("Double_Sheet"), "sheets");
    }

    #[test]
    fn test_render_mode_serde_names() {
        assert_eq!(serde_json::to_string(&RenderMode::None).unwrap(), "\"none\"");
        let mode: RenderMode = serde_json::from_str("\"iso\"").unwrap();
        assert_eq!(mode, RenderMode::Iso);
        assert_eq!(RenderMode::Surface.to_string(), "surface");
    }

    #[test]
    fn test_partial_options_from_json() {
        let opts: AddVolumeOptions = serde_json::from_str(r#"{"threshold": 12}"#).unwrap();
        assert_eq!(opts.threshold, 12);
        assert_eq!(opts.render_mode, RenderMode::None);
    }
}
