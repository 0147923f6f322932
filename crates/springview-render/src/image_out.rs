use image::{ImageError, RgbImage};
use std::fs;
use std::path::Path;

pub fn write_png(path: &Path, image: &RgbImage) -> Result<(), ImageError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    image.save(path)
}
