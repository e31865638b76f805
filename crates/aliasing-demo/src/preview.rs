//! Slice previews written as grayscale PNG files.

use std::path::{Path, PathBuf};

use aliasing_core::{AliasingError, Result, Volume};
use image::{GrayImage, ImageFormat};

/// Z indices shown in a preview: first, middle and last, without repeats.
pub fn preview_slices(nz: u32) -> Vec<u32> {
    let mut slices = vec![0, nz / 2, nz.saturating_sub(1)];
    slices.dedup();
    slices
}

/// Converts Z slice `z` of `volume` to an image.
pub fn slice_image(volume: &Volume, z: u32) -> Result<GrayImage> {
    let dims = volume.dims();
    let samples = volume
        .slice(z)
        .ok_or_else(|| AliasingError::Preview(format!("slice {z} out of range")))?;
    GrayImage::from_raw(dims.x, dims.y, samples.to_vec())
        .ok_or_else(|| AliasingError::Preview(format!("slice {z} has the wrong size")))
}

/// File name stem for `name`, with path separators replaced by `_`.
pub fn file_stem(name: &str) -> String {
    name.chars()
        .map(|c| if matches!(c, '/' | '\\' | ':') { '_' } else { c })
        .collect()
}

/// Writes the preview slices of `volume` into `dir` as `<name>_z<index>.png`.
///
/// Creates `dir` if needed and returns the written paths. The files always
/// land directly in `dir`, whatever the volume name contains.
pub fn write_previews(volume: &Volume, dir: &Path) -> Result<Vec<PathBuf>> {
    std::fs::create_dir_all(dir)?;

    let stem = file_stem(volume.name());
    let mut written = Vec::new();
    for z in preview_slices(volume.num_slices()) {
        let path = dir.join(format!("{stem}_z{z:04}.png"));
        slice_image(volume, z)?.save_with_format(&path, ImageFormat::Png)?;
        log::debug!("wrote preview {}", path.display());
        written.push(path);
    }
    log::info!("wrote {} preview slice(s) to {}", written.len(), dir.display());
    Ok(written)
}
