//! Panel rendering: upload sidebar, results area, settings

use super::App;
use crate::render::ResultView;
use crate::theme;
use crate::types::{AnalysisOutcome, Phase};
use crate::ui::components::{
    banner, drop_zone, placeholder_card, prediction_card, primary_button, recommendations_list,
};
use crate::utils::format_bytes;
use eframe::egui;

impl App {
    pub fn render_upload_panel(&mut self, ctx: &egui::Context) {
        egui::SidePanel::left("upload_panel")
            .exact_width(theme::SIDEBAR_WIDTH)
            .resizable(false)
            .show_separator_line(false)
            .frame(theme::sidebar_frame())
            .show(ctx, |ui| {
                ui.label(
                    egui::RichText::new(format!("{}  Sports AI Analyzer", egui_phosphor::regular::CHART_BAR))
                        .size(theme::FONT_TITLE)
                        .color(theme::TEXT_PRIMARY),
                );
                ui.label(
                    egui::RichText::new("Upload a match photo to get team predictions")
                        .size(theme::FONT_SMALL)
                        .color(theme::TEXT_DIM),
                );
                ui.add_space(theme::SPACING_XL);

                let loading = self.analyzer.is_loading();
                let texture = self.preview_texture.as_ref().map(|(_, t)| t);
                if drop_zone(ui, texture, self.drag_active, !loading).clicked() {
                    self.open_file_dialog(ctx);
                }
                ui.add_space(theme::SPACING_MD);

                if let Some(file) = self.analyzer.selected() {
                    ui.horizontal(|ui| {
                        ui.label(
                            egui::RichText::new(egui_phosphor::regular::IMAGE)
                                .color(theme::TEXT_MUTED),
                        );
                        ui.label(
                            egui::RichText::new(&file.name)
                                .size(theme::FONT_LABEL)
                                .color(theme::TEXT_SECONDARY),
                        );
                        ui.label(
                            egui::RichText::new(format_bytes(file.size))
                                .size(theme::FONT_SMALL)
                                .color(theme::TEXT_DIM),
                        );
                    });
                    ui.add_space(theme::SPACING_SM);
                }

                if let Some(err) = self.analyzer.select_error() {
                    banner(ui, egui_phosphor::regular::WARNING, &err.to_string(), theme::STATUS_ERROR);
                    ui.add_space(theme::SPACING_MD);
                }

                let label = if loading {
                    format!("{}  Analyzing...", egui_phosphor::regular::HOURGLASS)
                } else {
                    format!("{}  Analyze photo", egui_phosphor::regular::MAGIC_WAND)
                };
                if primary_button(ui, &label, self.analyzer.can_submit()) {
                    self.submit(ctx);
                }

                ui.add_space(theme::SPACING_XL);
                let gear = format!("{}  Settings", egui_phosphor::regular::GEAR);
                if ui.add(theme::button(gear)).clicked() {
                    self.show_settings = !self.show_settings;
                }
                if self.show_settings {
                    ui.add_space(theme::SPACING_MD);
                    self.render_settings(ui);
                }
            });
    }

    fn render_settings(&mut self, ui: &mut egui::Ui) {
        theme::section_frame().show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(
                egui::RichText::new("Analysis endpoint")
                    .size(theme::FONT_LABEL)
                    .color(theme::TEXT_MUTED),
            );
            let edit = ui.add(
                egui::TextEdit::singleline(&mut self.endpoint_input)
                    .hint_text("https://host")
                    .desired_width(ui.available_width()),
            );
            if edit.lost_focus() {
                self.apply_endpoint();
            }
            ui.add_space(theme::SPACING_MD);

            let fallback = self.settings.demo_fallback;
            if theme::toggle_row(ui, fallback, "Show demo data when the service fails") {
                self.settings.demo_fallback = !fallback;
                self.save_settings();
            }
            let expand = self.settings.expand_on_start;
            if theme::toggle_row(ui, expand, "Maximize window on start") {
                self.settings.expand_on_start = !expand;
                self.save_settings();
            }
        });
    }

    pub fn render_results(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default()
            .frame(egui::Frame::new().fill(theme::BG_BASE).inner_margin(theme::SPACING_XL))
            .show(ctx, |ui| match self.analyzer.phase() {
                Phase::Idle => {
                    ui.centered_and_justified(|ui| {
                        ui.label(
                            egui::RichText::new("Results will appear here")
                                .size(theme::FONT_BODY)
                                .color(theme::TEXT_DIM),
                        );
                    });
                }
                Phase::Loading => {
                    ui.centered_and_justified(|ui| {
                        ui.horizontal_centered(|ui| {
                            ui.spinner();
                            ui.label(
                                egui::RichText::new("Analyzing photo...")
                                    .size(theme::FONT_BODY)
                                    .color(theme::TEXT_SECONDARY),
                            );
                        });
                    });
                }
                Phase::Failed(err) => {
                    banner(ui, egui_phosphor::regular::WARNING, &err.to_string(), theme::STATUS_ERROR);
                }
                Phase::Done(outcome) => render_outcome(ui, outcome),
            });
    }
}

fn render_outcome(ui: &mut egui::Ui, outcome: &AnalysisOutcome) {
    ui.horizontal(|ui| {
        ui.label(
            egui::RichText::new("Analysis result")
                .size(theme::FONT_TITLE)
                .color(theme::TEXT_PRIMARY),
        );
        if outcome.is_demo() {
            ui.label(
                egui::RichText::new("DEMO")
                    .size(theme::FONT_SMALL)
                    .color(theme::STATUS_WARNING),
            );
        }
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.label(
                egui::RichText::new(outcome.received_at().format("%H:%M:%S").to_string())
                    .size(theme::FONT_SMALL)
                    .color(theme::TEXT_DIM),
            );
        });
    });
    ui.add_space(theme::SPACING_MD);

    if let AnalysisOutcome::Demo { cause, .. } = outcome {
        banner(
            ui,
            egui_phosphor::regular::INFO,
            &format!("Showing demo data. {}", cause),
            theme::STATUS_WARNING,
        );
        ui.add_space(theme::SPACING_MD);
    }

    egui::ScrollArea::vertical().auto_shrink([false, false]).show(ui, |ui| {
        match ResultView::from_result(outcome.result()) {
            ResultView::Placeholder(text) => placeholder_card(ui, text),
            ResultView::Cards {
                cards,
                recommendations,
            } => {
                for (card, prediction) in cards.iter().zip(&outcome.result().predictions) {
                    prediction_card(ui, card, prediction.confidence.value);
                    ui.add_space(theme::SPACING_MD);
                }
                if let Some(items) = recommendations {
                    recommendations_list(ui, &items);
                }
            }
        }
    });
}
