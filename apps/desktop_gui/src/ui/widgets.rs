//! Reusable dashboard widgets: cards, bullet lists, pickers and charts.

use eframe::egui;
use egui_plot::{Bar, BarChart, Corner, Legend, Line, Plot, PlotPoints, Points};
use sample_data::{
    content::{self, BulletGroup, Highlight},
    learning_rate::RATE_AXIS_MAX,
    tables::ACCURACY_AXIS,
    ScatterBounds,
};
use shared::{
    datasets::{ClusterPoint, CommunicationPoint, ConvergencePoint, LearningRatePoint},
    domain::{Approach, ClusterMethod, ConsensusMode, DataDistribution},
};

use crate::controller::events::UiAction;
use crate::ui::theme::{color, tint};

pub fn card(ui: &mut egui::Ui, add: impl FnOnce(&mut egui::Ui)) {
    egui::Frame::group(ui.style())
        .fill(ui.visuals().window_fill)
        .corner_radius(egui::CornerRadius::same(10))
        .inner_margin(egui::Margin::same(12))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            add(ui);
        });
}

pub fn tinted_card(ui: &mut egui::Ui, accent: content::Rgb, add: impl FnOnce(&mut egui::Ui)) {
    let fill = if ui.visuals().dark_mode {
        color(accent).gamma_multiply(0.18)
    } else {
        tint(accent, 0.9)
    };
    egui::Frame::new()
        .fill(fill)
        .stroke(egui::Stroke::new(1.0, tint(accent, 0.7)))
        .corner_radius(egui::CornerRadius::same(10))
        .inner_margin(egui::Margin::same(12))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            add(ui);
        });
}

pub fn section_title(ui: &mut egui::Ui, title: &str) {
    ui.label(egui::RichText::new(title).strong().size(15.0));
    ui.add_space(4.0);
}

pub fn bullet_list(ui: &mut egui::Ui, accent: content::Rgb, bullets: &[&str]) {
    for bullet in bullets {
        ui.horizontal_wrapped(|ui| {
            ui.label(egui::RichText::new("•").color(color(accent)));
            ui.label(*bullet);
        });
    }
}

pub fn bullet_group(ui: &mut egui::Ui, group: &BulletGroup) {
    tinted_card(ui, group.color, |ui| {
        ui.label(
            egui::RichText::new(group.title)
                .strong()
                .color(color(group.color)),
        );
        ui.add_space(4.0);
        bullet_list(ui, group.color, group.bullets);
    });
}

pub fn highlight_list(ui: &mut egui::Ui, accent: content::Rgb, highlights: &[Highlight]) {
    for highlight in highlights {
        ui.horizontal_wrapped(|ui| {
            ui.label(egui::RichText::new("●").small().color(color(accent)));
            ui.vertical(|ui| {
                ui.label(egui::RichText::new(highlight.title).strong());
                ui.label(egui::RichText::new(highlight.body).small());
            });
        });
        ui.add_space(4.0);
    }
}

pub fn chip(ui: &mut egui::Ui, accent: content::Rgb, text: &str) {
    egui::Frame::new()
        .fill(tint(accent, 0.85))
        .corner_radius(egui::CornerRadius::same(12))
        .inner_margin(egui::Margin::symmetric(8, 2))
        .show(ui, |ui| {
            ui.label(egui::RichText::new(text).small().color(color(accent)));
        });
}

pub fn distribution_picker(
    ui: &mut egui::Ui,
    id: &str,
    current: DataDistribution,
    actions: &mut Vec<UiAction>,
) {
    let mut selected = current;
    ui.horizontal(|ui| {
        ui.label(egui::RichText::new("Data Distribution:").strong());
        egui::ComboBox::from_id_salt(id)
            .selected_text(content::distribution_label(selected))
            .show_ui(ui, |ui| {
                for option in DataDistribution::ALL.iter().copied() {
                    ui.selectable_value(&mut selected, option, content::distribution_label(option));
                }
            });
    });
    if selected != current {
        actions.push(UiAction::SelectDistribution(selected));
    }
}

pub fn consensus_picker(
    ui: &mut egui::Ui,
    id: &str,
    current: ConsensusMode,
    actions: &mut Vec<UiAction>,
) {
    let mut selected = current;
    ui.horizontal(|ui| {
        ui.label(egui::RichText::new("Consensus Mode:").strong());
        egui::ComboBox::from_id_salt(id)
            .selected_text(content::consensus_label(selected))
            .show_ui(ui, |ui| {
                for option in ConsensusMode::ALL.iter().copied() {
                    ui.selectable_value(&mut selected, option, content::consensus_label(option));
                }
            });
    });
    if selected != current {
        actions.push(UiAction::SelectConsensusMode(selected));
    }
}

fn legend() -> Legend {
    Legend::default().position(Corner::RightBottom)
}

pub fn cluster_scatter(ui: &mut egui::Ui, id: impl std::hash::Hash, points: &[ClusterPoint], height: f32) {
    let mut plot = Plot::new(id)
        .height(height)
        .legend(legend())
        .x_axis_label("X")
        .y_axis_label("Y")
        .allow_scroll(false);
    if let Some(bounds) = ScatterBounds::from_points(points) {
        plot = plot
            .include_x(bounds.min_x)
            .include_x(bounds.max_x)
            .include_y(bounds.min_y)
            .include_y(bounds.max_y);
    }

    plot.show(ui, |plot_ui| {
        for method in ClusterMethod::ALL {
            let style = content::cluster_style(method);
            let cloud: PlotPoints = points
                .iter()
                .filter(|p| p.method == method)
                .map(|p| [p.x, p.y])
                .collect();
            plot_ui.points(
                Points::new(style.name, cloud)
                    .color(color(style.color).gamma_multiply(0.7))
                    .radius(3.0),
            );
        }
    });
}

pub fn convergence_chart(ui: &mut egui::Ui, points: &[ConvergencePoint], height: f32) {
    Plot::new("convergence_chart")
        .height(height)
        .legend(legend())
        .x_axis_label("Iterations")
        .y_axis_label("Accuracy")
        .include_y(ACCURACY_AXIS.0)
        .include_y(ACCURACY_AXIS.1)
        .allow_scroll(false)
        .show(ui, |plot_ui| {
            for approach in Approach::ALL {
                let series: PlotPoints = points
                    .iter()
                    .map(|p| [f64::from(p.iteration), p.value(approach)])
                    .collect();
                let style = content::approach_style(approach);
                plot_ui.line(Line::new(style.name, series).color(color(style.color)).width(2.0));
            }
        });
}

/// One small grouped bar chart per metric; the metrics differ by two orders
/// of magnitude so they do not share an axis.
pub fn communication_charts(ui: &mut egui::Ui, rows: &[CommunicationPoint], height: f32) {
    ui.columns(rows.len().max(1), |columns| {
        for (column, row) in columns.iter_mut().zip(rows) {
            column.label(egui::RichText::new(row.metric).strong());
            Plot::new(("communication_chart", row.metric))
                .height(height)
                .legend(legend())
                .include_y(0.0)
                .show_x(false)
                .allow_scroll(false)
                .allow_drag(false)
                .show(column, |plot_ui| {
                    for (slot, approach) in Approach::ALL.into_iter().enumerate() {
                        let style = content::approach_style(approach);
                        let bar = Bar::new(slot as f64, row.value(approach))
                            .width(0.7)
                            .name(style.name);
                        plot_ui.bar_chart(
                            BarChart::new(style.name, vec![bar]).color(color(style.color)),
                        );
                    }
                });
        }
    });
}

pub fn learning_rate_chart(ui: &mut egui::Ui, points: &[LearningRatePoint], height: f32) {
    Plot::new("learning_rate_chart")
        .height(height)
        .legend(legend())
        .x_axis_label("Training Iteration")
        .y_axis_label("Learning Rate")
        .include_y(0.0)
        .include_y(RATE_AXIS_MAX)
        .allow_scroll(false)
        .show(ui, |plot_ui| {
            let base: PlotPoints = points
                .iter()
                .map(|p| [f64::from(p.iteration), p.base_rate])
                .collect();
            let adapted: PlotPoints = points
                .iter()
                .map(|p| [f64::from(p.iteration), p.adapted_rate])
                .collect();
            plot_ui.line(
                Line::new(content::STANDARD_RATE.name, base)
                    .color(color(content::STANDARD_RATE.color))
                    .width(2.0),
            );
            plot_ui.line(
                Line::new(content::DENSITY_ADAPTED_RATE.name, adapted)
                    .color(color(content::DENSITY_ADAPTED_RATE.color))
                    .width(2.0),
            );
        });
}

pub fn density_ratio_chart(ui: &mut egui::Ui, points: &[LearningRatePoint], height: f32) {
    Plot::new("density_ratio_chart")
        .height(height)
        .legend(legend())
        .x_axis_label("Training Iteration")
        .y_axis_label("Local / Global")
        .include_y(0.5)
        .include_y(1.5)
        .allow_scroll(false)
        .show(ui, |plot_ui| {
            let ratio: PlotPoints = points
                .iter()
                .map(|p| [f64::from(p.iteration), p.density_ratio])
                .collect();
            plot_ui.line(
                Line::new(content::DENSITY_RATIO.name, ratio)
                    .color(color(content::DENSITY_RATIO.color))
                    .width(2.0),
            );
        });
}
