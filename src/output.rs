//! PNG handoff for a finished canvas

use std::fs::File;
use std::io::{self, BufWriter, Cursor, Write};
use std::path::Path;

use image::{ImageFormat, RgbaImage};

use crate::canvas::Canvas;
use crate::errors::{Result, ShotError};

/// Output path meaning "write to stdout"
pub const STDOUT: &str = "-";

/// Copy the canvas into an 8-bit RGBA image
pub fn to_image(canvas: &Canvas) -> Result<RgbaImage> {
    RgbaImage::from_raw(canvas.width(), canvas.height(), canvas.to_rgba8())
        .ok_or_else(|| ShotError::Canvas("pixel buffer does not match canvas size".to_string()))
}

/// Encode the canvas as PNG bytes
pub fn encode_png(canvas: &Canvas) -> Result<Vec<u8>> {
    let image = to_image(canvas)?;
    let mut bytes = Cursor::new(Vec::new());
    image.write_to(&mut bytes, ImageFormat::Png)?;
    Ok(bytes.into_inner())
}

/// Write the canvas as PNG to `path`, or stdout for `-`
pub fn write_png(canvas: &Canvas, path: &Path) -> Result<()> {
    let bytes = encode_png(canvas)?;

    if path.as_os_str() == STDOUT {
        let mut out = io::stdout().lock();
        out.write_all(&bytes)
            .and_then(|()| out.flush())
            .map_err(|e| ShotError::io(path, e))?;
        return Ok(());
    }

    let file = File::create(path).map_err(|e| ShotError::io(path, e))?;
    let mut writer = BufWriter::new(file);
    writer
        .write_all(&bytes)
        .and_then(|()| writer.flush())
        .map_err(|e| ShotError::io(path, e))?;
    tracing::info!("Wrote {} bytes to {}", bytes.len(), path.display());
    Ok(())
}
