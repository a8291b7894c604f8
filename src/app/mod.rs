//! App module - contains the main application state and logic

mod analysis;
mod selection;
mod views;

use crate::analyzer::UploadAnalyzer;
use crate::client::AnalyzerClient;
use crate::settings::Settings;
use crate::theme;
use crate::types::Phase;
use eframe::egui;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use tracing::info;

// ============================================================================
// APP STATE
// ============================================================================

pub struct App {
    pub(crate) analyzer: UploadAnalyzer,
    pub(crate) client: AnalyzerClient,
    pub(crate) runtime: tokio::runtime::Runtime,
    // Background results, drained every frame
    pub(crate) preview_inbox: Arc<Mutex<Vec<(u64, egui::ColorImage)>>>,
    pub(crate) analysis_inbox: Arc<Mutex<Option<Phase>>>,
    // Preview texture for the current generation
    pub(crate) preview_texture: Option<(u64, egui::TextureHandle)>,
    pub(crate) drag_active: bool,
    // Settings
    pub(crate) settings: Settings,
    pub(crate) active_endpoint: String,
    pub(crate) endpoint_input: String,
    pub(crate) show_settings: bool,
    pub(crate) window_pos: Option<egui::Pos2>,
    pub(crate) window_size: Option<egui::Vec2>,
    pub(crate) needs_center: bool,
    pub(crate) host_ready: bool,
    pub(crate) data_dir: PathBuf,
}

// ============================================================================
// APP INITIALIZATION & HELPERS
// ============================================================================

impl App {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        settings: Settings,
        data_dir: PathBuf,
        runtime: tokio::runtime::Runtime,
    ) -> Self {
        // Force dark theme
        cc.egui_ctx.set_theme(egui::Theme::Dark);

        // Add Phosphor icons font
        let mut fonts = egui::FontDefinitions::default();
        egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
        cc.egui_ctx.set_fonts(fonts);

        // Apply theme from theme.rs
        theme::apply_visuals(&cc.egui_ctx);

        let endpoint = settings.effective_endpoint();
        let client = AnalyzerClient::new(&endpoint);
        info!(url = client.url(), demo_fallback = settings.demo_fallback, "Analysis client ready");

        Self {
            analyzer: UploadAnalyzer::new(),
            client,
            runtime,
            preview_inbox: Arc::new(Mutex::new(Vec::new())),
            analysis_inbox: Arc::new(Mutex::new(None)),
            preview_texture: None,
            drag_active: false,
            endpoint_input: endpoint.clone(),
            active_endpoint: endpoint,
            settings,
            show_settings: false,
            window_pos: None,
            window_size: None,
            needs_center: false,
            host_ready: false,
            data_dir,
        }
    }

    pub fn save_settings(&mut self) {
        self.settings.window_x = self.window_pos.map(|p| p.x);
        self.settings.window_y = self.window_pos.map(|p| p.y);
        self.settings.window_w = self.window_size.map(|s| s.x);
        self.settings.window_h = self.window_size.map(|s| s.y);
        self.settings.save(&self.data_dir);
    }

    /// Point the client at a new endpoint and persist it.
    pub fn apply_endpoint(&mut self) {
        let endpoint = self.endpoint_input.trim().to_string();
        if endpoint.is_empty() || endpoint == self.active_endpoint {
            return;
        }
        info!(endpoint = %endpoint, "Endpoint changed");
        self.client = AnalyzerClient::new(&endpoint);
        self.active_endpoint = endpoint.clone();
        self.settings.endpoint = endpoint;
        self.save_settings();
    }

    /// Startup signal to the host: log readiness and optionally take the whole screen.
    pub fn signal_host_ready(&mut self, ctx: &egui::Context) {
        if self.host_ready {
            return;
        }
        self.host_ready = true;
        info!(expand = self.settings.expand_on_start, "Widget ready");
        if self.settings.expand_on_start {
            ctx.send_viewport_cmd(egui::ViewportCommand::Maximized(true));
        } else if self.needs_center {
            if let Some(cmd) = egui::ViewportCommand::center_on_screen(ctx) {
                ctx.send_viewport_cmd(cmd);
            }
        }
        self.needs_center = false;
    }

    /// Move finished background work into the widget state.
    pub fn poll_background(&mut self, ctx: &egui::Context) {
        let previews = match self.preview_inbox.lock() {
            Ok(mut inbox) => std::mem::take(&mut *inbox),
            Err(_) => Vec::new(),
        };
        for (generation, image) in previews {
            self.analyzer.accept_preview(generation, image);
        }

        let finished = self.analysis_inbox.lock().ok().and_then(|mut inbox| inbox.take());
        if let Some(phase) = finished {
            self.analyzer.finish(phase);
        }

        self.sync_preview_texture(ctx);
    }

    fn sync_preview_texture(&mut self, ctx: &egui::Context) {
        let Some(preview) = self.analyzer.preview() else {
            self.preview_texture = None;
            return;
        };
        if matches!(&self.preview_texture, Some((generation, _)) if *generation == preview.generation) {
            return;
        }
        let texture = ctx.load_texture(
            format!("preview_{}", preview.generation),
            preview.image.clone(),
            egui::TextureOptions::LINEAR,
        );
        self.preview_texture = Some((preview.generation, texture));
    }
}
