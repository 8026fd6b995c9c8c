//! Use-Cases für den PNG-Export der aktuellen Ansicht.

use std::path::Path;

use anyhow::{bail, Context, Result};
use glam::UVec2;

use crate::app::prompt::Prompter;
use crate::app::AppState;

use super::file_io::with_extension;

/// Ein vom Frontend eingefangener Frame als RGBA8-Pixelpuffer.
#[derive(Debug, Clone)]
pub struct FrameCapture {
    /// Frame-Größe in Pixeln
    pub size: UVec2,
    /// Pixeldaten, zeilenweise RGBA8
    pub pixels: Vec<u8>,
}

/// Fragt einen Export-Pfad ab und merkt ihn im UI-State vor.
///
/// Der eigentliche Export passiert im Frontend: es rendert den
/// nächsten Frame, ruft [`write_frame_png`] und räumt das Feld ab.
pub fn request_export(state: &mut AppState, prompter: &dyn Prompter) {
    let Some(path) = prompter.ask_save_path() else {
        return;
    };
    state.ui.pending_image_export = Some(with_extension(path, ".png"));
}

/// Schreibt einen eingefangenen Frame als PNG-Datei.
pub fn write_frame_png(frame: &FrameCapture, path: &Path) -> Result<()> {
    let expected = frame.size.x as usize * frame.size.y as usize * 4;
    if frame.pixels.len() != expected {
        bail!(
            "Pixelpuffer passt nicht zur Frame-Größe {}x{}: {} statt {} Bytes",
            frame.size.x,
            frame.size.y,
            frame.pixels.len(),
            expected
        );
    }

    let image = image::RgbaImage::from_raw(frame.size.x, frame.size.y, frame.pixels.clone())
        .context("Pixelpuffer konnte nicht als Bild interpretiert werden")?;
    image
        .save_with_format(path, image::ImageFormat::Png)
        .with_context(|| format!("Konnte PNG {} nicht schreiben", path.display()))?;
    log::info!("Ansicht exportiert nach: {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_mismatch_is_rejected() {
        let frame = FrameCapture {
            size: UVec2::new(4, 4),
            pixels: vec![0u8; 3],
        };
        assert!(write_frame_png(&frame, Path::new("unused.png")).is_err());
    }
}
