//! Registry of content loaded into a viewer session.

use std::collections::BTreeMap;

use glam::{Mat4, UVec3, Vec3};

use crate::error::ViewerError;
use crate::options::AddVolumeOptions;
use crate::volume::Volume;

/// A volume as held by a viewer session.
///
/// The session keeps its own copy of the samples, so the caller's volume is
/// never touched after import.
#[derive(Debug, Clone)]
pub struct Content {
    name: String,
    label: String,
    dims: UVec3,
    samples: Vec<u8>,
    options: AddVolumeOptions,
    visible: bool,
    transform: Mat4,
}

impl Content {
    /// Creates content from a volume, registered under the volume's name.
    pub fn from_volume(volume: &Volume, options: &AddVolumeOptions) -> Self {
        Self {
            name: volume.name().to_string(),
            label: options.label_or(volume.name()).to_string(),
            dims: volume.dims(),
            samples: volume.as_bytes().to_vec(),
            options: options.clone(),
            visible: options.visible,
            transform: Mat4::IDENTITY,
        }
    }

    /// Returns the registered name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the on-screen label.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Returns the grid dimensions.
    pub fn dims(&self) -> UVec3 {
        self.dims
    }

    /// Returns the imported samples.
    pub fn samples(&self) -> &[u8] {
        &self.samples
    }

    /// Returns the options the content was imported with.
    pub fn options(&self) -> &AddVolumeOptions {
        &self.options
    }

    /// Returns whether the content is visible.
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Sets the visibility.
    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    /// Returns the model-to-view transform.
    pub fn transform(&self) -> Mat4 {
        self.transform
    }

    /// Replaces the model-to-view transform.
    pub fn set_transform(&mut self, transform: Mat4) {
        self.transform = transform;
    }

    /// Returns the axis-aligned bounding box in view coordinates.
    pub fn bounding_box(&self) -> (Vec3, Vec3) {
        let extent = self.dims.as_vec3();
        let mut min = Vec3::splat(f32::MAX);
        let mut max = Vec3::splat(f32::MIN);
        for i in 0..8u32 {
            let corner = Vec3::new(
                if i & 1 == 0 { 0.0 } else { extent.x },
                if i & 2 == 0 { 0.0 } else { extent.y },
                if i & 4 == 0 { 0.0 } else { extent.z },
            );
            let p = self.transform.transform_point3(corner);
            min = min.min(p);
            max = max.max(p);
        }
        (min, max)
    }
}

/// Content of one session, keyed by name.
#[derive(Debug, Default)]
pub struct Registry {
    contents: BTreeMap<String, Content>,
}

impl Registry {
    /// Creates a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers content.
    ///
    /// Returns an error if content with the same name already exists.
    pub fn register(&mut self, content: Content) -> Result<(), ViewerError> {
        if self.contents.contains_key(content.name()) {
            return Err(ViewerError::ObjectExists(content.name().to_string()));
        }
        self.contents.insert(content.name().to_string(), content);
        Ok(())
    }

    /// Gets content by name.
    pub fn get(&self, name: &str) -> Option<&Content> {
        self.contents.get(name)
    }

    /// Gets mutable content by name.
    pub fn get_mut(&mut self, name: &str) -> Option<&mut Content> {
        self.contents.get_mut(name)
    }

    /// Checks if content with the given name exists.
    pub fn contains(&self, name: &str) -> bool {
        self.contents.contains_key(name)
    }

    /// Removes content by name.
    pub fn remove(&mut self, name: &str) -> Option<Content> {
        self.contents.remove(name)
    }

    /// Removes all content.
    pub fn clear(&mut self) {
        self.contents.clear();
    }

    /// Iterates over all content in name order.
    pub fn iter(&self) -> impl Iterator<Item = &Content> {
        self.contents.values()
    }

    /// Returns the number of registered items.
    pub fn len(&self) -> usize {
        self.contents.len()
    }

    /// Returns true if nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.contents.is_empty()
    }
}
