//! File selection: dialog, drag and drop, preview decoding

use super::App;
use crate::error::SelectError;
use crate::types::SelectedFile;
use crate::utils::{decode_preview, dropped_to_selected, preview_bounds, read_selected_file};
use eframe::egui;
use std::path::PathBuf;
use tracing::{debug, warn};

const IMAGE_EXTENSIONS: &[&str] = &[
    "png", "jpg", "jpeg", "gif", "webp", "bmp", "tif", "tiff", "svg", "heic", "heif", "avif",
];

impl App {
    pub fn open_file_dialog(&mut self, ctx: &egui::Context) {
        let mut dialog = rfd::FileDialog::new()
            .set_title("Choose a photo")
            .add_filter("Images", IMAGE_EXTENSIONS)
            .add_filter("All files", &["*"]);
        if let Some(dir) = self.settings.last_dir_or_default() {
            dialog = dialog.set_directory(dir);
        }

        if let Some(path) = dialog.pick_file() {
            self.remember_dir(&path);
            self.select(ctx, read_selected_file(&path));
        }
    }

    /// Track drag hover and take the first dropped file, if any.
    pub fn handle_dropped_files(&mut self, ctx: &egui::Context) {
        let (hovering, dropped) = ctx.input(|i| {
            (!i.raw.hovered_files.is_empty(), i.raw.dropped_files.first().cloned())
        });
        self.drag_active = hovering && !self.analyzer.is_loading();

        let Some(file) = dropped else {
            return;
        };
        if self.analyzer.is_loading() {
            debug!("Ignoring drop while analysis is running");
            return;
        }
        if let Some(path) = &file.path {
            self.remember_dir(path);
        }
        self.select(ctx, dropped_to_selected(&file));
    }

    fn select(&mut self, ctx: &egui::Context, candidate: Result<SelectedFile, SelectError>) {
        let file = match candidate {
            Ok(file) => file,
            Err(e) => {
                self.analyzer.reject(e);
                return;
            }
        };
        let bytes = file.bytes.clone();
        if let Ok(generation) = self.analyzer.select_file(file) {
            self.spawn_preview_decode(ctx, generation, bytes);
        }
    }

    fn spawn_preview_decode(&self, ctx: &egui::Context, generation: u64, bytes: std::sync::Arc<[u8]>) {
        let inbox = self.preview_inbox.clone();
        let (max_w, max_h) = preview_bounds(ctx.input(|i| i.max_texture_side));
        let ctx = ctx.clone();
        self.runtime.spawn_blocking(move || {
            match decode_preview(&bytes, max_w, max_h) {
                Ok(image) => {
                    debug!(generation, size = ?image.size, "Preview decoded");
                    if let Ok(mut inbox) = inbox.lock() {
                        inbox.push((generation, image));
                    }
                }
                Err(e) => warn!(generation, error = %e, "Could not decode preview"),
            }
            ctx.request_repaint();
        });
    }

    fn remember_dir(&mut self, path: &std::path::Path) {
        if let Some(dir) = path.parent().map(PathBuf::from) {
            self.settings.last_dir = Some(dir.to_string_lossy().to_string());
        }
    }
}
