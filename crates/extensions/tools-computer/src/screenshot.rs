//! Screenshot capture utilities.

use std::io::Cursor;

use screenshots::image::ImageOutputFormat;
use screenshots::Screen;
use serde::Serialize;
use thiserror::Error;

/// Screenshot errors.
#[derive(Debug, Error)]
pub enum ScreenshotError {
    #[error("Capture failed: {0}")]
    CaptureFailed(String),

    #[error("Encoding failed: {0}")]
    EncodingFailed(String),

    #[error("No monitor found")]
    NoMonitor,
}

/// A captured PNG image.
#[derive(Debug)]
pub struct Screenshot {
    pub data: Vec<u8>,
    pub width: u32,
    pub height: u32,
}

impl Screenshot {
    /// Encode the PNG bytes as base64.
    pub fn to_base64(&self) -> String {
        use base64::Engine;
        base64::engine::general_purpose::STANDARD.encode(&self.data)
    }
}

/// Screen dimensions in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScreenSize {
    pub width: u32,
    pub height: u32,
}

fn primary_screen() -> Result<Screen, ScreenshotError> {
    let screens = Screen::all().map_err(|e| ScreenshotError::CaptureFailed(e.to_string()))?;
    let index = screens
        .iter()
        .position(|s| s.display_info.is_primary)
        .unwrap_or(0);

    screens
        .into_iter()
        .nth(index)
        .ok_or(ScreenshotError::NoMonitor)
}

/// Capture the primary monitor as PNG.
pub fn capture_screen() -> Result<Screenshot, ScreenshotError> {
    let screen = primary_screen()?;
    let image = screen
        .capture()
        .map_err(|e| ScreenshotError::CaptureFailed(e.to_string()))?;

    let width = image.width();
    let height = image.height();

    let mut buffer = Cursor::new(Vec::new());
    image
        .write_to(&mut buffer, ImageOutputFormat::Png)
        .map_err(|e| ScreenshotError::EncodingFailed(e.to_string()))?;

    Ok(Screenshot {
        data: buffer.into_inner(),
        width,
        height,
    })
}

/// Get the primary monitor's dimensions.
pub fn get_screen_size() -> Result<ScreenSize, ScreenshotError> {
    let screen = primary_screen()?;
    Ok(ScreenSize {
        width: screen.display_info.width,
        height: screen.display_info.height,
    })
}
