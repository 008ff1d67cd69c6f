use crate::paint::buffer::PixelBuffer;
use anyhow::{Context, Result};
use image::codecs::png::PngEncoder;
use image::{ColorType, ImageEncoder};
use std::fs;
use std::path::{Path, PathBuf};

pub const EXPORT_FILE_NAME: &str = "canvas.png";

/// Encodes the full buffer as an 8-bit RGBA PNG.
pub fn encode_png(buffer: &PixelBuffer) -> Result<Vec<u8>> {
    let mut out = Vec::new();
    PngEncoder::new(&mut out)
        .write_image(
            buffer.pixels(),
            buffer.width(),
            buffer.height(),
            ColorType::Rgba8,
        )
        .with_context(|| {
            format!(
                "encode {}x{} canvas as png",
                buffer.width(),
                buffer.height()
            )
        })?;
    Ok(out)
}

/// Writes `file_name` (normally `canvas.png`) into `output_dir`, creating the
/// folder when needed.
pub fn save_png(buffer: &PixelBuffer, output_dir: &Path, file_name: &str) -> Result<PathBuf> {
    fs::create_dir_all(output_dir)
        .with_context(|| format!("create export folder {}", output_dir.display()))?;
    let path = output_dir.join(file_name);
    let bytes = encode_png(buffer)?;
    fs::write(&path, bytes).with_context(|| format!("write canvas export {}", path.display()))?;
    Ok(path)
}
