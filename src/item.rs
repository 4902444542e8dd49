use crate::error::ImageError;
use crate::metadata;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// One inspected image file: where it lives, how big it is, and whatever
/// metadata its container carries.
#[derive(Debug, Clone)]
pub struct ImageItem {
    pub path: PathBuf,
    pub name: String,
    /// Pixel width, read from the image header.
    pub width: u32,
    /// Pixel height, read from the image header.
    pub height: u32,
    /// Tag name → human-readable description, keys unique.
    pub metadata: BTreeMap<String, String>,
}

impl ImageItem {
    /// Probe `path` for its pixel dimensions and embedded metadata.
    ///
    /// An unreadable or unsupported file is a decode error; metadata
    /// extraction cannot fail (it degrades to a sentinel entry instead).
    pub fn load(path: &Path) -> Result<Self, ImageError> {
        let (width, height) = image::image_dimensions(path).map_err(ImageError::Decode)?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());

        Ok(Self {
            path: path.to_path_buf(),
            name,
            width,
            height,
            metadata: metadata::extract(path),
        })
    }
}
