//! Submitting the selected photo to the analysis service

use super::App;
use crate::demo::resolve;
use eframe::egui;
use tracing::info;

impl App {
    pub fn submit(&mut self, ctx: &egui::Context) {
        let Some(file) = self.analyzer.begin_submit() else {
            return;
        };

        info!(name = %file.name, size = file.size, url = self.client.url(), "Submitting photo");
        let client = self.client.clone();
        let demo_fallback = self.settings.demo_fallback;
        let inbox = self.analysis_inbox.clone();
        let ctx = ctx.clone();

        self.runtime.spawn(async move {
            let phase = resolve(client.analyze(&file).await, demo_fallback);
            if let Ok(mut inbox) = inbox.lock() {
                *inbox = Some(phase);
            }
            ctx.request_repaint();
        });
    }
}
