//! Visual presets and palette conversions.

use std::collections::BTreeMap;

use eframe::egui;
use sample_data::content::{self, Rgb};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemePreset {
    Light,
    Dark,
}

impl ThemePreset {
    pub const ALL: [ThemePreset; 2] = [ThemePreset::Light, ThemePreset::Dark];

    pub fn label(self) -> &'static str {
        match self {
            ThemePreset::Light => "Light",
            ThemePreset::Dark => "Dark",
        }
    }
}

pub fn color(rgb: Rgb) -> egui::Color32 {
    egui::Color32::from_rgb(rgb.0, rgb.1, rgb.2)
}

/// Tints `rgb` toward white; `t` of 0 keeps the color, 1 gives white.
pub fn tint(rgb: Rgb, t: f32) -> egui::Color32 {
    let t = t.clamp(0.0, 1.0);
    let mix = |c: u8| -> u8 { (f32::from(c) + (255.0 - f32::from(c)) * t).round() as u8 };
    egui::Color32::from_rgb(mix(rgb.0), mix(rgb.1), mix(rgb.2))
}

pub fn accent() -> egui::Color32 {
    color(content::BLUE)
}

pub fn visuals_for_theme(preset: ThemePreset) -> egui::Visuals {
    let mut visuals = match preset {
        ThemePreset::Light => {
            let mut v = egui::Visuals::light();
            v.panel_fill = egui::Color32::from_rgb(248, 248, 250);
            v.window_fill = egui::Color32::WHITE;
            v.faint_bg_color = egui::Color32::from_rgb(242, 242, 247);
            v
        }
        ThemePreset::Dark => {
            let mut v = egui::Visuals::dark();
            v.panel_fill = egui::Color32::from_rgb(28, 28, 30);
            v.window_fill = egui::Color32::from_rgb(36, 36, 38);
            v.faint_bg_color = egui::Color32::from_rgb(44, 44, 46);
            v
        }
    };

    visuals.hyperlink_color = accent();
    visuals.selection.bg_fill = accent();
    visuals.widgets.active.bg_fill = accent();
    visuals.widgets.hovered.bg_fill = accent().gamma_multiply(0.85);

    let radius = egui::CornerRadius::same(8);
    visuals.widgets.noninteractive.corner_radius = radius;
    visuals.widgets.inactive.corner_radius = radius;
    visuals.widgets.hovered.corner_radius = radius;
    visuals.widgets.active.corner_radius = radius;
    visuals.widgets.open.corner_radius = radius;

    visuals
}

pub fn text_styles() -> BTreeMap<egui::TextStyle, egui::FontId> {
    let mut styles = egui::Style::default().text_styles;
    if let Some(heading) = styles.get_mut(&egui::TextStyle::Heading) {
        heading.size = 22.0;
    }
    styles
}
