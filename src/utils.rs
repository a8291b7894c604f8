//! Utility functions

use crate::analyzer::validate;
use crate::constants::APP_NAME;
use crate::error::SelectError;
use crate::theme;
use crate::types::SelectedFile;
use std::io::Read;
use std::path::{Path, PathBuf};

// Square viewBox, used for window/taskbar icons
pub const ICON_SVG: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 64 64"><rect x="4" y="12" width="56" height="42" rx="8" fill="#18181b" stroke="#2dd4bf" stroke-width="3"/><circle cx="32" cy="33" r="12" fill="none" stroke="#fff" stroke-width="3"/><rect x="22" y="6" width="20" height="8" rx="3" fill="#2dd4bf"/><path d="M26 37l4-5 3 3 5-6" fill="none" stroke="#2dd4bf" stroke-width="3" stroke-linecap="round" stroke-linejoin="round"/></svg>"##;

/// Rasterize the icon SVG to a square RGBA image.
pub fn rasterize_icon(size: u32) -> Option<(Vec<u8>, u32, u32)> {
    let tree = resvg::usvg::Tree::from_str(ICON_SVG, &resvg::usvg::Options::default()).ok()?;
    let scale = size as f32 / tree.size().width();
    let mut pixmap = resvg::tiny_skia::Pixmap::new(size, size)?;
    resvg::render(
        &tree,
        resvg::usvg::Transform::from_scale(scale, scale),
        &mut pixmap.as_mut(),
    );
    Some((premul_to_straight(&pixmap), size, size))
}

fn premul_to_straight(pixmap: &resvg::tiny_skia::Pixmap) -> Vec<u8> {
    pixmap
        .pixels()
        .iter()
        .flat_map(|p| {
            let a = p.alpha();
            if a == 0 {
                [0, 0, 0, 0]
            } else {
                let r = (p.red() as u16 * 255 / a as u16) as u8;
                let g = (p.green() as u16 * 255 / a as u16) as u8;
                let b = (p.blue() as u16 * 255 / a as u16) as u8;
                [r, g, b, a]
            }
        })
        .collect()
}

/// Get the app data directory (settings, logs)
pub fn get_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_NAME)
}

/// Format bytes into human-readable string (B, KB, MB)
pub fn format_bytes(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    if bytes >= MB {
        format!("{:.1} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.1} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} B", bytes)
    }
}

/// Work out a MIME type for a file the way a browser would: by extension
/// first, then by sniffing the content for names that say nothing useful.
///
/// Image types the decoder does not support (SVG, HEIC) are still reported
/// as `image/*`; they are accepted and simply shown without a preview.
pub fn detect_mime(name: &str, bytes: &[u8]) -> String {
    let by_name = mime_guess::from_path(name).first();
    if let Some(mime) = by_name.as_ref().filter(|m| m.type_() == mime_guess::mime::IMAGE) {
        return mime.essence_str().to_string();
    }
    if let Ok(format) = image::guess_format(bytes) {
        return format.to_mime_type().to_string();
    }
    by_name.map_or_else(
        || "application/octet-stream".to_string(),
        |m| m.essence_str().to_string(),
    )
}

/// Load a file from disk as a selection candidate.
///
/// Only the header is read before validation so oversized files are never
/// pulled into memory.
pub fn read_selected_file(path: &Path) -> Result<SelectedFile, SelectError> {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string());

    let mut file = std::fs::File::open(path).map_err(|e| SelectError::Read(e.to_string()))?;
    let size = file
        .metadata()
        .map_err(|e| SelectError::Read(e.to_string()))?
        .len();

    let mut header = [0u8; 64];
    let n = read_up_to(&mut file, &mut header).map_err(|e| SelectError::Read(e.to_string()))?;
    let mime = detect_mime(&name, &header[..n]);
    validate(&mime, size)?;

    let mut bytes = Vec::with_capacity(size as usize);
    bytes.extend_from_slice(&header[..n]);
    file.read_to_end(&mut bytes)
        .map_err(|e| SelectError::Read(e.to_string()))?;
    Ok(SelectedFile::new(name, mime, bytes))
}

fn read_up_to(reader: &mut impl Read, buf: &mut [u8]) -> std::io::Result<usize> {
    let mut filled = 0;
    while filled < buf.len() {
        match reader.read(&mut buf[filled..])? {
            0 => break,
            n => filled += n,
        }
    }
    Ok(filled)
}

/// Build a selection candidate from a file dropped onto the window.
pub fn dropped_to_selected(file: &egui::DroppedFile) -> Result<SelectedFile, SelectError> {
    if let Some(bytes) = &file.bytes {
        let name = if file.name.is_empty() {
            "dropped-image".to_string()
        } else {
            file.name.clone()
        };
        let mime = if file.mime.is_empty() {
            detect_mime(&name, bytes)
        } else {
            file.mime.clone()
        };
        return Ok(SelectedFile::new(name, mime, bytes.to_vec()));
    }
    match &file.path {
        Some(path) => read_selected_file(path),
        None => Err(SelectError::Read("dropped item has no data".to_string())),
    }
}

/// Largest preview that still fits the drop zone at 2x scale and the GPU's
/// `max_texture_side`.
pub fn preview_bounds(max_texture_side: usize) -> (u32, u32) {
    let cap = max_texture_side.min(u32::MAX as usize) as u32;
    let fit = |side: f32| ((side * 2.0) as u32).min(cap).max(1);
    (fit(theme::SIDEBAR_WIDTH), fit(theme::DROP_ZONE_HEIGHT))
}

/// Decode image bytes into an egui image for previewing, downscaled to fit
/// within `max_width` x `max_height`.
pub fn decode_preview(
    bytes: &[u8],
    max_width: u32,
    max_height: u32,
) -> Result<egui::ColorImage, image::ImageError> {
    let mut img = image::load_from_memory(bytes)?;
    if img.width() > max_width || img.height() > max_height {
        img = img.thumbnail(max_width, max_height);
    }
    let rgba = img.to_rgba8();
    let size = [rgba.width() as usize, rgba.height() as usize];
    Ok(egui::ColorImage::from_rgba_unmultiplied(size, rgba.as_raw()))
}
