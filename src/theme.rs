//! Centralized theme constants for Sports Photo Analyzer
//! All colors, sizes, and styling should reference these constants

use egui::Color32;

// =============================================================================
// COLORS - Backgrounds
// =============================================================================
pub const BG_BASE: Color32 = Color32::from_rgb(0x09, 0x09, 0x0b); // zinc-950
pub const BG_ELEVATED: Color32 = Color32::from_rgb(0x18, 0x18, 0x1b); // zinc-900
pub const BG_INPUT: Color32 = Color32::from_rgb(0x14, 0x14, 0x18); // input field background
pub const BG_SURFACE: Color32 = Color32::from_rgb(0x27, 0x27, 0x2a); // zinc-800
pub const BG_HOVER: Color32 = Color32::from_rgb(0x0f, 0x1a, 0x19); // subtle teal hover
pub const BG_DROP_ACTIVE: Color32 = Color32::from_rgb(0x0e, 0x24, 0x22); // drop zone while dragging

// =============================================================================
// COLORS - Accent (Teal)
// =============================================================================
pub const ACCENT: Color32 = Color32::from_rgb(0x2d, 0xd4, 0xbf); // teal-400
pub const ACCENT_LIGHT: Color32 = Color32::from_rgb(0x5e, 0xea, 0xd4); // teal-300

// =============================================================================
// COLORS - Text
// =============================================================================
pub const TEXT_PRIMARY: Color32 = Color32::WHITE;
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(0xe4, 0xe4, 0xe7); // zinc-200
pub const TEXT_MUTED: Color32 = Color32::from_rgb(0xa1, 0xa1, 0xaa); // zinc-400
pub const TEXT_DIM: Color32 = Color32::from_rgb(0x71, 0x71, 0x7a); // zinc-500
pub const TEXT_ON_ACCENT: Color32 = Color32::from_rgb(0x04, 0x2f, 0x2e); // teal-950

// =============================================================================
// COLORS - Borders
// =============================================================================
pub const BORDER_SUBTLE: Color32 = Color32::from_rgb(0x27, 0x27, 0x2a); // zinc-800 - faint gray for outlines
pub const BORDER_DEFAULT: Color32 = Color32::from_rgb(0x3f, 0x3f, 0x46); // zinc-700

// =============================================================================
// COLORS - Status
// =============================================================================
pub const STATUS_SUCCESS: Color32 = Color32::from_rgb(0x34, 0xd3, 0x99); // emerald-400
pub const STATUS_WARNING: Color32 = Color32::from_rgb(0xfb, 0xbf, 0x24); // amber-400
pub const STATUS_ERROR: Color32 = Color32::from_rgb(0xf8, 0x71, 0x71); // red-400

// =============================================================================
// COLORS - Buttons
// =============================================================================
// Default (gray) button
pub const BTN_DEFAULT: Color32 = Color32::from_rgb(0x3f, 0x3f, 0x46); // zinc-700

// Accent (teal) button
pub const BTN_ACCENT: Color32 = Color32::from_rgb(0x2d, 0xd4, 0xbf); // teal-400

// Settings switch track when on
pub const TOGGLE_ON: Color32 = Color32::from_rgb(0x14, 0xb8, 0xa6); // teal-500

// Disabled state
pub const BTN_DISABLED: Color32 = Color32::from_rgb(0x1a, 0x1a, 0x1a);

// =============================================================================
// COLORS - Confidence bar
// =============================================================================
pub fn confidence_color(percent: f64) -> Color32 {
    if percent >= 70.0 {
        STATUS_SUCCESS
    } else if percent >= 50.0 {
        STATUS_WARNING
    } else {
        STATUS_ERROR
    }
}

/// Share of the confidence bar to fill, for a value on the 0-100 scale
pub fn confidence_fraction(percent: f64) -> f32 {
    if percent.is_finite() {
        (percent / 100.0).clamp(0.0, 1.0) as f32
    } else {
        0.0
    }
}

// =============================================================================
// TYPOGRAPHY - Font Sizes
// =============================================================================
pub const FONT_TITLE: f32 = 18.0;
pub const FONT_HEADING: f32 = 16.0;
pub const FONT_BODY: f32 = 14.0;
pub const FONT_LABEL: f32 = 13.0;
pub const FONT_SMALL: f32 = 11.0;

// =============================================================================
// DIMENSIONS - Layout
// =============================================================================
pub const SIDEBAR_WIDTH: f32 = 320.0;
pub const DROP_ZONE_HEIGHT: f32 = 260.0;
pub const BUTTON_HEIGHT_LARGE: f32 = 40.0;
pub const CONFIDENCE_BAR_HEIGHT: f32 = 6.0;
pub const TOGGLE_ROW_HEIGHT: f32 = 24.0;
pub const TOGGLE_SIZE: (f32, f32) = (30.0, 16.0);
pub const ICON_SIZE: u32 = 64;

// =============================================================================
// CORNER RADIUS
// =============================================================================
pub const RADIUS_DEFAULT: f32 = 4.0;
pub const RADIUS_LARGE: f32 = 8.0;

// =============================================================================
// STROKE WIDTHS
// =============================================================================
pub const STROKE_DEFAULT: f32 = 1.0;
pub const STROKE_THICK: f32 = 2.0;

// =============================================================================
// SPACING
// =============================================================================
pub const SPACING_SM: f32 = 4.0;
pub const SPACING_MD: f32 = 8.0;
pub const SPACING_LG: f32 = 12.0;
pub const SPACING_XL: f32 = 16.0;

// =============================================================================
// HELPER - Global visuals
// =============================================================================

fn widget_visuals(fill: Color32, border: Option<Color32>, text: Color32, expansion: f32) -> egui::style::WidgetVisuals {
    let bg_stroke = border.map_or(egui::Stroke::NONE, |c| egui::Stroke::new(STROKE_DEFAULT, c));
    egui::style::WidgetVisuals {
        bg_fill: fill,
        weak_bg_fill: fill,
        bg_stroke,
        fg_stroke: egui::Stroke::new(STROKE_DEFAULT, text),
        corner_radius: RADIUS_DEFAULT.into(),
        expansion,
    }
}

pub fn apply_visuals(ctx: &egui::Context) {
    let widgets = egui::style::Widgets {
        noninteractive: widget_visuals(BG_ELEVATED, Some(BORDER_SUBTLE), TEXT_SECONDARY, 0.0),
        inactive: widget_visuals(BG_SURFACE, Some(BORDER_SUBTLE), TEXT_SECONDARY, 0.0),
        hovered: widget_visuals(mix(BG_SURFACE, ACCENT, 0.15), Some(ACCENT), TEXT_PRIMARY, 0.0),
        active: widget_visuals(mix(BG_SURFACE, ACCENT, 0.3), Some(ACCENT_LIGHT), TEXT_PRIMARY, -1.0),
        open: widget_visuals(BG_SURFACE, Some(BORDER_DEFAULT), TEXT_PRIMARY, 0.0),
    };

    let mut visuals = egui::Visuals::dark();
    visuals.panel_fill = BG_BASE;
    visuals.window_fill = BG_ELEVATED;
    visuals.extreme_bg_color = BG_INPUT;
    visuals.faint_bg_color = BG_ELEVATED;
    visuals.hyperlink_color = ACCENT;
    visuals.selection.bg_fill = mix(BG_SURFACE, ACCENT, 0.35);
    visuals.selection.stroke = egui::Stroke::new(STROKE_DEFAULT, ACCENT_LIGHT);
    visuals.text_cursor.stroke = egui::Stroke::new(STROKE_THICK, ACCENT);
    visuals.interact_cursor = Some(egui::CursorIcon::PointingHand);
    visuals.window_stroke = egui::Stroke::new(STROKE_DEFAULT, BORDER_DEFAULT);
    visuals.window_corner_radius = egui::CornerRadius::same(RADIUS_LARGE as u8);
    visuals.widgets = widgets;
    ctx.set_visuals(visuals);

    ctx.style_mut(|style| {
        style.interaction.selectable_labels = false;
        style.spacing.item_spacing = egui::vec2(SPACING_MD, SPACING_MD);
        style.spacing.button_padding = egui::vec2(SPACING_LG, SPACING_SM + 2.0);
        style.spacing.text_edit_width = SIDEBAR_WIDTH - 2.0 * SPACING_XL;
        style.spacing.scroll.bar_width = 6.0;
        style.spacing.scroll.floating = false;
    });
}

// =============================================================================
// HELPER - Frames
// =============================================================================

fn panel(fill: Color32, border: Color32, radius: f32, margin: egui::Margin) -> egui::Frame {
    egui::Frame::new()
        .fill(fill)
        .stroke(egui::Stroke::new(STROKE_DEFAULT, border))
        .corner_radius(radius)
        .inner_margin(margin)
}

/// Prediction and placeholder cards
pub fn card_frame() -> egui::Frame {
    panel(BG_ELEVATED, BORDER_SUBTLE, RADIUS_LARGE, egui::Margin::same(SPACING_LG as i8))
}

/// Upload sidebar
pub fn sidebar_frame() -> egui::Frame {
    panel(BG_BASE, BORDER_SUBTLE, 0.0, egui::Margin::same(SPACING_XL as i8))
}

/// Errors and the demo notice, tinted with `color`
pub fn banner_frame(color: Color32) -> egui::Frame {
    panel(
        color.gamma_multiply(0.08),
        color,
        RADIUS_DEFAULT,
        egui::Margin::symmetric(SPACING_LG as i8, SPACING_MD as i8),
    )
}

/// Settings block and recommendation list
pub fn section_frame() -> egui::Frame {
    panel(BG_INPUT, BORDER_SUBTLE, RADIUS_DEFAULT, egui::Margin::same(SPACING_LG as i8))
}

// =============================================================================
// HELPER - Controls
// =============================================================================

/// Secondary (gray) button
pub fn button(text: impl Into<String>) -> egui::Button<'static> {
    egui::Button::new(egui::RichText::new(text.into()).size(FONT_LABEL))
        .fill(BTN_DEFAULT)
        .corner_radius(RADIUS_DEFAULT)
}

/// Labelled on/off switch spanning the row. Returns true if flipped.
pub fn toggle_row(ui: &mut egui::Ui, on: bool, label: &str) -> bool {
    let (row, response) = ui.allocate_exact_size(
        egui::vec2(ui.available_width(), TOGGLE_ROW_HEIGHT),
        egui::Sense::click(),
    );
    if response.hovered() {
        ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
    }
    if !ui.is_rect_visible(row) {
        return response.clicked();
    }

    let t = ui.ctx().animate_bool(response.id, on);
    let (w, h) = TOGGLE_SIZE;
    let track = egui::Rect::from_min_size(
        egui::pos2(row.max.x - w, row.center().y - h / 2.0),
        egui::vec2(w, h),
    );
    let radius = h / 2.0;
    let painter = ui.painter();
    painter.rect_filled(track, radius, mix(BG_SURFACE, TOGGLE_ON, t));
    let knob_x = egui::lerp((track.min.x + radius)..=(track.max.x - radius), t);
    painter.circle_filled(
        egui::pos2(knob_x, track.center().y),
        radius - 2.0,
        if on { TEXT_ON_ACCENT } else { TEXT_MUTED },
    );

    painter.text(
        row.left_center(),
        egui::Align2::LEFT_CENTER,
        label,
        egui::FontId::proportional(FONT_LABEL),
        if response.hovered() { TEXT_PRIMARY } else { TEXT_SECONDARY },
    );
    response.clicked()
}

/// Fill and rect for a custom-painted control in its current pointer state.
/// Hover brightens toward the accent, a press sinks the rect by a pixel.
pub fn pressable(response: &egui::Response, fill: Color32, rect: egui::Rect) -> (Color32, egui::Rect) {
    let pressed = response.is_pointer_button_down_on();
    let amount = match (pressed, response.hovered()) {
        (true, _) => 0.25,
        (false, true) => 0.15,
        (false, false) => 0.0,
    };
    let rect = if pressed { rect.translate(egui::vec2(0.0, 1.0)) } else { rect };
    (mix(fill, ACCENT_LIGHT, amount), rect)
}

/// Linear blend from `from` toward `to`; `t` is clamped to 0..=1.
fn mix(from: Color32, to: Color32, t: f32) -> Color32 {
    let t = t.clamp(0.0, 1.0);
    let channel = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t).round() as u8;
    Color32::from_rgb(
        channel(from.r(), to.r()),
        channel(from.g(), to.g()),
        channel(from.b(), to.b()),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn confidence_bands() {
        assert_eq!(confidence_color(78.0), STATUS_SUCCESS);
        assert_eq!(confidence_color(65.0), STATUS_WARNING);
        assert_eq!(confidence_color(10.0), STATUS_ERROR);
    }

    #[test]
    fn confidence_fraction_is_clamped() {
        assert_eq!(confidence_fraction(50.0), 0.5);
        assert_eq!(confidence_fraction(1e20), 1.0);
        assert_eq!(confidence_fraction(-3.0), 0.0);
        assert_eq!(confidence_fraction(f64::NAN), 0.0);
    }

    #[test]
    fn mix_hits_both_ends() {
        assert_eq!(mix(Color32::BLACK, Color32::WHITE, 0.0), Color32::BLACK);
        assert_eq!(mix(Color32::BLACK, Color32::WHITE, 1.0), Color32::WHITE);
        assert_eq!(mix(Color32::BLACK, Color32::WHITE, 4.0), Color32::WHITE);
        assert_eq!(mix(BTN_DEFAULT, ACCENT, 0.5).g(), 138);
    }
}
