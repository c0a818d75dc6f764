//! Colors and egui style for the main window

use eframe::egui::{self, Color32};

pub mod colors {
    use eframe::egui::Color32;

    pub const BG_DARK: Color32 = Color32::from_rgb(0x16, 0x14, 0x12);
    pub const BG_MID: Color32 = Color32::from_rgb(0x22, 0x1f, 0x1b);
    pub const BG_LIGHT: Color32 = Color32::from_rgb(0x33, 0x2e, 0x28);
    /// Bonfire orange
    pub const ACCENT: Color32 = Color32::from_rgb(0xe0, 0x8a, 0x2c);
    pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(0xe8, 0xe2, 0xd6);
    pub const TEXT_MUTED: Color32 = Color32::from_rgb(0x9a, 0x92, 0x84);
    pub const SUCCESS: Color32 = Color32::from_rgb(0x7c, 0xc4, 0x6a);
    pub const ERROR: Color32 = Color32::from_rgb(0xe0, 0x5a, 0x4c);
}

pub fn apply_theme(ctx: &egui::Context) {
    let mut fonts = egui::FontDefinitions::default();
    egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
    ctx.set_fonts(fonts);

    let mut visuals = egui::Visuals::dark();
    visuals.panel_fill = colors::BG_DARK;
    visuals.window_fill = colors::BG_MID;
    visuals.extreme_bg_color = colors::BG_DARK;
    visuals.override_text_color = Some(colors::TEXT_PRIMARY);
    visuals.hyperlink_color = colors::ACCENT;
    visuals.selection.bg_fill = colors::ACCENT.linear_multiply(0.4);
    visuals.widgets.inactive.weak_bg_fill = colors::BG_LIGHT;
    visuals.widgets.hovered.bg_stroke = egui::Stroke::new(1.0, colors::ACCENT);
    ctx.set_visuals(visuals);
}

pub fn status_color(ok: bool) -> Color32 {
    if ok { colors::SUCCESS } else { colors::ERROR }
}
