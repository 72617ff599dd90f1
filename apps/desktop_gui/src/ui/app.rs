use dashboard_core::{DashboardContext, DashboardSession, DashboardSettings};
use eframe::egui;
use sample_data::content;
use serde::{Deserialize, Serialize};
use shared::domain::Tab;

use crate::controller::{events::UiAction, reducer};
use crate::ui::{
    panels::{self, PanelContext},
    theme::{accent, text_styles, visuals_for_theme, ThemePreset},
};

pub const SETTINGS_STORAGE_KEY: &str = "dadl_dashboard.settings";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
enum PersistedThemePreset {
    Light,
    Dark,
}

impl From<ThemePreset> for PersistedThemePreset {
    fn from(value: ThemePreset) -> Self {
        match value {
            ThemePreset::Light => Self::Light,
            ThemePreset::Dark => Self::Dark,
        }
    }
}

impl From<PersistedThemePreset> for ThemePreset {
    fn from(value: PersistedThemePreset) -> Self {
        match value {
            PersistedThemePreset::Light => Self::Light,
            PersistedThemePreset::Dark => Self::Dark,
        }
    }
}

/// Shell preferences kept across restarts. Selection state is not persisted;
/// every launch starts from the configured defaults.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PersistedDashboardSettings {
    theme_preset: PersistedThemePreset,
}

impl Default for PersistedDashboardSettings {
    fn default() -> Self {
        Self {
            theme_preset: PersistedThemePreset::Light,
        }
    }
}

impl PersistedDashboardSettings {
    pub fn from_storage_text(text: &str) -> Option<Self> {
        serde_json::from_str(text).ok()
    }
}

pub struct DashboardApp {
    context: DashboardContext,
    pending_actions: Vec<UiAction>,
    theme: ThemePreset,
    applied_theme: Option<ThemePreset>,
    chart_height: f32,
    status: Option<String>,
}

impl DashboardApp {
    pub fn new(settings: &DashboardSettings, persisted: Option<PersistedDashboardSettings>) -> Self {
        let mut context = DashboardContext::new();
        context.begin(DashboardSession::from_settings(settings));
        let theme = persisted.unwrap_or_default().theme_preset.into();
        Self {
            context,
            pending_actions: Vec::new(),
            theme,
            applied_theme: None,
            chart_height: settings.chart_height,
            status: None,
        }
    }

    fn apply_theme_if_needed(&mut self, ctx: &egui::Context) {
        if self.applied_theme == Some(self.theme) {
            return;
        }

        let mut style = (*ctx.style()).clone();
        style.visuals = visuals_for_theme(self.theme);
        style.text_styles = text_styles();
        style.spacing.item_spacing = egui::vec2(8.0, 6.0);
        style.spacing.button_padding = egui::vec2(10.0, 6.0);
        ctx.set_style(style);

        self.applied_theme = Some(self.theme);
    }

    fn process_actions(&mut self, ctx: &egui::Context) {
        if self.pending_actions.is_empty() {
            return;
        }

        let actions = std::mem::take(&mut self.pending_actions);
        for action in &actions {
            match action {
                UiAction::SelectTheme(preset) => self.theme = *preset,
                UiAction::CopyDiagram(key) => {
                    if let Some(diagram) = content::find_diagram(key) {
                        ctx.copy_text(diagram.source.to_string());
                        self.status = Some(format!("Copied {} to the clipboard", diagram.title));
                    }
                }
                _ => {}
            }
        }

        match reducer::apply_all(&mut self.context, actions) {
            Ok(outcome) if outcome.clusters_redrawn => ctx.request_repaint(),
            Ok(_) => {}
            Err(err) => {
                tracing::error!(error = %err, "dropping ui actions");
                self.status = Some(err.to_string());
            }
        }
    }

    fn show_header(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("dashboard_header")
            .frame(
                egui::Frame::new()
                    .fill(ctx.style().visuals.window_fill)
                    .inner_margin(egui::Margin::symmetric(16, 10)),
            )
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.vertical(|ui| {
                        ui.label(egui::RichText::new(content::TITLE).heading().color(accent()));
                        ui.label(egui::RichText::new(content::SUBTITLE).weak());
                    });
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        let mut theme = self.theme;
                        egui::ComboBox::from_id_salt("theme_preset")
                            .selected_text(theme.label())
                            .show_ui(ui, |ui| {
                                for preset in ThemePreset::ALL {
                                    ui.selectable_value(&mut theme, preset, preset.label());
                                }
                            });
                        ui.label("Theme");
                        if theme != self.theme {
                            self.pending_actions.push(UiAction::SelectTheme(theme));
                        }
                    });
                });
                ui.add_space(6.0);
                self.show_tab_strip(ui);
            });
    }

    fn show_tab_strip(&mut self, ui: &mut egui::Ui) {
        let Ok(active) = self.context.selection().map(|selection| selection.active_tab) else {
            return;
        };
        ui.horizontal(|ui| {
            for (tab, label, selected) in tab_strip_entries(active) {
                if ui.selectable_label(selected, label).clicked() && !selected {
                    self.pending_actions.push(UiAction::SelectTab(tab));
                }
            }
        });
    }

    fn show_status(&mut self, ctx: &egui::Context) {
        let Some(status) = self.status.clone() else {
            return;
        };
        egui::TopBottomPanel::bottom("dashboard_status").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(egui::RichText::new(status).small());
                if ui.small_button("Dismiss").clicked() {
                    self.status = None;
                }
            });
        });
    }

    fn show_body(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            let session = match self.context.session() {
                Ok(session) => session,
                Err(err) => {
                    ui.centered_and_justified(|ui| {
                        ui.label(egui::RichText::new(err.to_string()).color(ui.visuals().error_fg_color));
                    });
                    return;
                }
            };
            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    let mut panel = PanelContext {
                        session,
                        chart_height: self.chart_height,
                        actions: &mut self.pending_actions,
                    };
                    panels::show_tab(ui, &mut panel);
                });
        });
    }
}

/// Tabs in strip order with their labels and whether each one is active.
fn tab_strip_entries(active: Tab) -> impl Iterator<Item = (Tab, &'static str, bool)> {
    Tab::ALL
        .iter()
        .copied()
        .map(move |tab| (tab, content::tab_label(tab), tab == active))
}

impl eframe::App for DashboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.process_actions(ctx);
        self.apply_theme_if_needed(ctx);

        self.show_header(ctx);
        self.show_status(ctx);
        self.show_body(ctx);

        if !self.pending_actions.is_empty() {
            ctx.request_repaint();
        }
    }

    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        let settings = PersistedDashboardSettings {
            theme_preset: self.theme.into(),
        };
        if let Ok(serialized) = serde_json::to_string(&settings) {
            storage.set_string(SETTINGS_STORAGE_KEY, serialized);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn persisted_theme_round_trips_through_storage_text() {
        let text = serde_json::to_string(&PersistedDashboardSettings {
            theme_preset: PersistedThemePreset::Dark,
        })
        .expect("serialize");
        assert_eq!(text, r#"{"theme_preset":"dark"}"#);
        let restored = PersistedDashboardSettings::from_storage_text(&text).expect("parse");
        assert_eq!(ThemePreset::from(restored.theme_preset), ThemePreset::Dark);
    }

    #[test]
    fn unreadable_storage_text_is_ignored() {
        assert_eq!(PersistedDashboardSettings::from_storage_text("not json"), None);
        assert_eq!(
            PersistedDashboardSettings::from_storage_text("{}"),
            Some(PersistedDashboardSettings::default())
        );
    }

    #[test]
    fn tab_strip_lists_every_tab_and_marks_the_active_one() {
        let entries: Vec<_> = tab_strip_entries(Tab::Performance).collect();
        let tabs: Vec<Tab> = entries.iter().map(|(tab, _, _)| *tab).collect();
        assert_eq!(tabs, Tab::ALL.to_vec());

        let selected: Vec<Tab> = entries
            .iter()
            .filter(|(_, _, selected)| *selected)
            .map(|(tab, _, _)| *tab)
            .collect();
        assert_eq!(selected, vec![Tab::Performance]);

        for (tab, label, _) in &entries {
            assert_eq!(*label, content::tab_label(*tab));
            assert!(!label.is_empty());
        }
    }

    #[test]
    fn new_app_starts_an_active_session_from_settings() {
        let settings = DashboardSettings {
            seed: Some(11),
            initial_tab: Tab::Learning,
            ..DashboardSettings::default()
        };
        let app = DashboardApp::new(&settings, None);
        let selection = app.context.selection().expect("session");
        assert_eq!(selection.active_tab, Tab::Learning);
        assert_eq!(app.theme, ThemePreset::Light);
        assert_eq!(app.chart_height, settings.chart_height);
    }
}
