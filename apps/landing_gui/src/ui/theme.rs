use eframe::egui;

pub const BACKGROUND: egui::Color32 = egui::Color32::from_rgb(13, 9, 26);
pub const ACCENT: egui::Color32 = egui::Color32::from_rgb(168, 85, 247);
pub const CHECK: egui::Color32 = egui::Color32::from_rgb(16, 185, 129);
pub const ERROR_TEXT: egui::Color32 = egui::Color32::from_rgb(248, 113, 113);
pub const TEXT: egui::Color32 = egui::Color32::WHITE;

pub fn card_fill() -> egui::Color32 {
    egui::Color32::from_rgba_unmultiplied(168, 85, 247, 26)
}

pub fn card_stroke() -> egui::Stroke {
    egui::Stroke::new(1.0, egui::Color32::from_rgba_unmultiplied(168, 85, 247, 51))
}

pub fn muted_text() -> egui::Color32 {
    egui::Color32::from_rgba_unmultiplied(255, 255, 255, 230)
}

pub fn visuals() -> egui::Visuals {
    let mut visuals = egui::Visuals::dark();
    visuals.panel_fill = BACKGROUND;
    visuals.window_fill = egui::Color32::from_rgb(28, 18, 52);
    visuals.window_stroke = card_stroke();
    visuals.selection.bg_fill = ACCENT;
    visuals.hyperlink_color = ACCENT;
    visuals.extreme_bg_color = egui::Color32::from_rgb(24, 16, 44);
    visuals
}
