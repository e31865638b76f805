//! Demo configuration.

use std::path::{Path, PathBuf};

use aliasing_core::{AddVolumeOptions, CameraTransform, Result, ViewerConfig};
use serde::{Deserialize, Serialize};

/// Everything a demo run needs. The default is the reference double-sheet
/// setup: a 200×200×200 volume named `Double_Sheet` under the calibrated view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    /// Display name of the generated volume.
    pub volume_name: String,

    /// Samples along X, Y and Z.
    pub dimensions: [u32; 3],

    /// Model-to-view transform applied before rotating, row-major.
    pub transform: CameraTransform,

    /// Options for the viewer session.
    pub viewer: ViewerConfig,

    /// Options for importing the volume.
    pub add_options: AddVolumeOptions,

    /// Directory to write slice previews to. No previews when unset.
    pub preview_dir: Option<PathBuf>,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            volume_name: "Double_Sheet".to_string(),
            dimensions: [200, 200, 200],
            transform: CameraTransform::double_sheet_view(),
            viewer: ViewerConfig::default(),
            add_options: AddVolumeOptions::default(),
            preview_dir: None,
        }
    }
}

impl DemoConfig {
    /// Parses a configuration from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads a configuration from a JSON file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        log::info!("loading configuration from {}", path.display());
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    /// Serializes the configuration as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
