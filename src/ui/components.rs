//! Reusable UI components
//!
//! Standalone widgets for the upload area and the analysis result cards.

use crate::render::{PredictionCard, RECOMMENDATIONS_HEADING};
use crate::theme;
use eframe::egui;

/// Clickable drop zone. Shows `preview` when present, otherwise an upload hint.
/// Returns the click response so the caller can open a file dialog.
pub fn drop_zone(
    ui: &mut egui::Ui,
    preview: Option<&egui::TextureHandle>,
    drag_active: bool,
    enabled: bool,
) -> egui::Response {
    let size = egui::vec2(ui.available_width(), theme::DROP_ZONE_HEIGHT);
    let sense = if enabled {
        egui::Sense::click()
    } else {
        egui::Sense::hover()
    };
    let (rect, response) = ui.allocate_exact_size(size, sense);

    if enabled && response.hovered() {
        ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
    }

    if ui.is_rect_visible(rect) {
        let painter = ui.painter();
        let (fill, stroke_color) = if drag_active {
            (theme::BG_DROP_ACTIVE, theme::ACCENT)
        } else if response.hovered() && enabled {
            (theme::BG_HOVER, theme::ACCENT_LIGHT)
        } else {
            (theme::BG_INPUT, theme::BORDER_DEFAULT)
        };
        painter.rect_filled(rect, theme::RADIUS_LARGE, fill);
        painter.rect_stroke(
            rect,
            theme::RADIUS_LARGE,
            egui::Stroke::new(theme::STROKE_THICK, stroke_color),
            egui::StrokeKind::Inside,
        );

        match preview {
            Some(texture) => {
                let inner = rect.shrink(theme::SPACING_MD);
                let tex_size = texture.size_vec2();
                let scale = (inner.width() / tex_size.x).min(inner.height() / tex_size.y).min(1.0);
                let img_rect = egui::Rect::from_center_size(inner.center(), tex_size * scale);
                painter.image(
                    texture.id(),
                    img_rect,
                    egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
                    egui::Color32::WHITE,
                );
            }
            None => {
                painter.text(
                    rect.center() - egui::vec2(0.0, 18.0),
                    egui::Align2::CENTER_CENTER,
                    egui_phosphor::regular::UPLOAD_SIMPLE,
                    egui::FontId::proportional(40.0),
                    if drag_active { theme::ACCENT } else { theme::TEXT_DIM },
                );
                painter.text(
                    rect.center() + egui::vec2(0.0, 24.0),
                    egui::Align2::CENTER_CENTER,
                    "Click or drop a photo here",
                    egui::FontId::proportional(theme::FONT_BODY),
                    theme::TEXT_SECONDARY,
                );
                painter.text(
                    rect.center() + egui::vec2(0.0, 44.0),
                    egui::Align2::CENTER_CENTER,
                    "Any image type, up to 10 MB",
                    egui::FontId::proportional(theme::FONT_SMALL),
                    theme::TEXT_DIM,
                );
            }
        }
    }

    response
}

/// Full-width primary button. Returns true if clicked while enabled.
pub fn primary_button(ui: &mut egui::Ui, label: &str, enabled: bool) -> bool {
    let rect = ui.available_rect_before_wrap();
    let rect = egui::Rect::from_min_size(
        rect.min,
        egui::vec2(rect.width(), theme::BUTTON_HEIGHT_LARGE),
    );
    let response = ui.allocate_rect(rect, egui::Sense::click());

    let (fill, draw_rect) = if enabled {
        theme::pressable(&response, theme::BTN_ACCENT, rect)
    } else {
        (theme::BTN_DISABLED, rect)
    };
    ui.painter().rect_filled(draw_rect, theme::RADIUS_DEFAULT, fill);
    ui.painter().text(
        draw_rect.center(),
        egui::Align2::CENTER_CENTER,
        label,
        egui::FontId::proportional(theme::FONT_BODY),
        if enabled { theme::TEXT_ON_ACCENT } else { theme::TEXT_DIM },
    );

    if response.hovered() {
        ui.ctx().set_cursor_icon(if enabled {
            egui::CursorIcon::PointingHand
        } else {
            egui::CursorIcon::NotAllowed
        });
    }
    enabled && response.clicked()
}

/// One team prediction card. The confidence bar is drawn only when the
/// service sent a usable number.
pub fn prediction_card(ui: &mut egui::Ui, card: &PredictionCard, confidence: Option<f64>) {
    let confidence = confidence.filter(|v| v.is_finite());
    let tint = confidence.map_or(theme::TEXT_MUTED, theme::confidence_color);
    theme::card_frame().show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.label(
            egui::RichText::new(&card.team)
                .size(theme::FONT_HEADING)
                .strong()
                .color(theme::TEXT_PRIMARY),
        );
        ui.add_space(theme::SPACING_SM);
        ui.label(
            egui::RichText::new(&card.confidence)
                .size(theme::FONT_LABEL)
                .color(tint),
        );
        if let Some(percent) = confidence {
            confidence_bar(ui, percent);
        }
        ui.add_space(theme::SPACING_SM);
        ui.label(
            egui::RichText::new(&card.reason)
                .size(theme::FONT_BODY)
                .color(theme::TEXT_MUTED),
        );
    });
}

fn confidence_bar(ui: &mut egui::Ui, percent: f64) {
    let (rect, _) = ui.allocate_exact_size(
        egui::vec2(ui.available_width(), theme::CONFIDENCE_BAR_HEIGHT),
        egui::Sense::hover(),
    );
    let painter = ui.painter();
    painter.rect_filled(rect, theme::RADIUS_DEFAULT, theme::BG_SURFACE);
    let filled = egui::Rect::from_min_size(
        rect.min,
        egui::vec2(rect.width() * theme::confidence_fraction(percent), rect.height()),
    );
    painter.rect_filled(filled, theme::RADIUS_DEFAULT, theme::confidence_color(percent));
}

/// Placeholder card shown when nothing was recognized
pub fn placeholder_card(ui: &mut egui::Ui, text: &str) {
    theme::card_frame().show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.label(
            egui::RichText::new(text)
                .size(theme::FONT_BODY)
                .color(theme::TEXT_SECONDARY),
        );
    });
}

pub fn recommendations_list(ui: &mut egui::Ui, items: &[String]) {
    theme::section_frame().show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.label(
            egui::RichText::new(format!(
                "{}  {}",
                egui_phosphor::regular::LIGHTBULB,
                RECOMMENDATIONS_HEADING
            ))
            .size(theme::FONT_HEADING)
            .color(theme::ACCENT),
        );
        ui.add_space(theme::SPACING_SM);
        for item in items {
            ui.label(
                egui::RichText::new(item)
                    .size(theme::FONT_BODY)
                    .color(theme::TEXT_SECONDARY),
            );
        }
    });
}

/// Colored banner with an icon, used for errors and notices
pub fn banner(ui: &mut egui::Ui, icon: &str, text: &str, color: egui::Color32) {
    theme::banner_frame(color).show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.horizontal_wrapped(|ui| {
            ui.label(egui::RichText::new(icon).size(theme::FONT_BODY).color(color));
            ui.label(egui::RichText::new(text).size(theme::FONT_LABEL).color(color));
        });
    });
}
