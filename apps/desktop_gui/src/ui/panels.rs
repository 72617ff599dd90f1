//! One panel per dashboard tab.

use dashboard_core::DashboardSession;
use eframe::egui;
use sample_data::content::{self, Diagram};
use shared::domain::Tab;

use crate::controller::events::UiAction;
use crate::ui::{
    theme::{accent, color},
    widgets,
};

pub struct PanelContext<'a> {
    pub session: &'a DashboardSession,
    pub chart_height: f32,
    pub actions: &'a mut Vec<UiAction>,
}

pub fn show_tab(ui: &mut egui::Ui, panel: &mut PanelContext<'_>) {
    let tab = panel.session.active_tab();
    ui.horizontal(|ui| {
        ui.label(
            egui::RichText::new(content::tab_heading(tab))
                .heading()
                .color(accent()),
        );
    });
    ui.add_space(8.0);

    match tab {
        Tab::Overview => show_overview(ui),
        Tab::Clustering => show_clustering(ui, panel),
        Tab::Learning => show_learning(ui, panel),
        Tab::Performance => show_performance(ui, panel),
        Tab::Implementation => show_implementation(ui, panel),
    }
}

fn show_overview(ui: &mut egui::Ui) {
    widgets::card(ui, |ui| {
        widgets::section_title(ui, "Key Components");
        ui.columns(content::KEY_COMPONENTS.len(), |columns| {
            for (column, group) in columns.iter_mut().zip(content::KEY_COMPONENTS.iter()) {
                widgets::bullet_group(column, group);
            }
        });
    });
    ui.add_space(8.0);

    widgets::card(ui, |ui| {
        widgets::section_title(ui, "Key Innovations");
        ui.columns(content::KEY_INNOVATIONS.len(), |columns| {
            let accents = [
                content::ORANGE,
                content::BLUE,
                content::GREEN,
                content::PURPLE,
                content::BLUE,
            ];
            for ((column, innovation), tone) in columns
                .iter_mut()
                .zip(content::KEY_INNOVATIONS.iter())
                .zip(accents)
            {
                widgets::tinted_card(column, tone, |ui| {
                    ui.label(egui::RichText::new(innovation.title).strong());
                    ui.label(egui::RichText::new(innovation.body).small());
                });
            }
        });
    });
    ui.add_space(8.0);

    widgets::card(ui, |ui| {
        widgets::section_title(ui, "Applications");
        for application in &content::APPLICATIONS {
            widgets::chip(ui, content::PURPLE, application.tag);
            ui.label(egui::RichText::new(application.title).strong());
            ui.label(application.body);
            ui.add_space(6.0);
        }
    });
}

fn show_clustering(ui: &mut egui::Ui, panel: &mut PanelContext<'_>) {
    let session = panel.session;
    ui.horizontal(|ui| {
        widgets::distribution_picker(
            ui,
            "clustering_distribution",
            session.data_distribution(),
            panel.actions,
        );
        if ui.button("Redraw sample").clicked() {
            panel.actions.push(UiAction::RegenerateClusters);
        }
    });
    ui.add_space(6.0);

    widgets::card(ui, |ui| {
        widgets::cluster_scatter(
            ui,
            ("cluster_scatter", session.generation()),
            session.clusters(),
            panel.chart_height,
        );
    });
    ui.add_space(8.0);

    ui.columns(content::CLUSTERING_TRAITS.len(), |columns| {
        for (column, group) in columns.iter_mut().zip(content::CLUSTERING_TRAITS.iter()) {
            widgets::bullet_group(column, group);
        }
    });
}

fn show_learning(ui: &mut egui::Ui, panel: &mut PanelContext<'_>) {
    let session = panel.session;
    widgets::distribution_picker(
        ui,
        "learning_distribution",
        session.data_distribution(),
        panel.actions,
    );
    ui.add_space(6.0);

    widgets::card(ui, |ui| {
        widgets::learning_rate_chart(ui, session.learning_rate(), panel.chart_height);
        ui.add_space(4.0);
        widgets::density_ratio_chart(ui, session.learning_rate(), panel.chart_height * 0.4);
    });
    ui.add_space(8.0);

    ui.columns(2, |columns| {
        widgets::tinted_card(&mut columns[0], content::BLUE, |ui| {
            widgets::section_title(ui, "Adaptation Factors");
            widgets::highlight_list(ui, content::BLUE, &content::ADAPTATION_FACTORS);
        });
        widgets::tinted_card(&mut columns[1], content::GREEN, |ui| {
            widgets::section_title(ui, "Benefits");
            widgets::highlight_list(ui, content::GREEN, &content::LEARNING_BENEFITS);
        });
    });
}

fn show_performance(ui: &mut egui::Ui, panel: &mut PanelContext<'_>) {
    let session = panel.session;
    ui.horizontal(|ui| {
        widgets::distribution_picker(
            ui,
            "performance_distribution",
            session.data_distribution(),
            panel.actions,
        );
        ui.add_space(16.0);
        widgets::consensus_picker(
            ui,
            "performance_consensus",
            session.consensus_mode(),
            panel.actions,
        );
    });
    ui.add_space(6.0);

    let chart_height = panel.chart_height * 0.85;
    widgets::card(ui, |ui| {
        widgets::section_title(ui, "Convergence Speed");
        widgets::convergence_chart(ui, session.convergence(), chart_height);
        caption(ui, content::CONVERGENCE_CAPTION);
    });
    ui.add_space(8.0);

    widgets::card(ui, |ui| {
        widgets::section_title(ui, "Communication Overhead");
        widgets::communication_charts(ui, session.communication(), chart_height * 0.8);
        caption(ui, content::COMMUNICATION_CAPTION);
    });
    ui.add_space(8.0);

    ui.columns(content::APPROACH_CARDS.len(), |columns| {
        for (column, card) in columns.iter_mut().zip(content::APPROACH_CARDS.iter()) {
            let tone = content::approach_style(card.approach).color;
            widgets::card(column, |ui| {
                widgets::chip(ui, tone, card.tag);
                ui.label(egui::RichText::new(card.title).strong());
                widgets::bullet_list(ui, tone, card.bullets);
            });
        }
    });
}

fn show_implementation(ui: &mut egui::Ui, panel: &mut PanelContext<'_>) {
    let plan = &content::IMPLEMENTATION_PLAN;
    ui.columns(2, |columns| {
        let (left, right) = columns.split_at_mut(1);
        let left = &mut left[0];
        let right = &mut right[0];

        widgets::card(left, |ui| {
            widgets::section_title(ui, "Integration with Established Systems");
            numbered_steps(ui, content::BLUE, plan.established_systems);
        });
        left.add_space(8.0);
        widgets::card(left, |ui| {
            widgets::section_title(ui, "Integration Challenges and Solutions");
            egui::Grid::new("challenge_grid")
                .striped(true)
                .num_columns(2)
                .spacing([16.0, 6.0])
                .show(ui, |ui| {
                    ui.label(egui::RichText::new("Challenge").strong());
                    ui.label(egui::RichText::new("Solution").strong());
                    ui.end_row();
                    for item in plan.challenges {
                        ui.label(egui::RichText::new(item.challenge).strong());
                        ui.label(item.solution);
                        ui.end_row();
                    }
                });
        });
        left.add_space(8.0);
        widgets::card(left, |ui| {
            widgets::section_title(ui, "Roadmap");
            for phase in plan.phases {
                ui.horizontal(|ui| {
                    ui.label(egui::RichText::new(phase.phase).strong());
                    widgets::chip(ui, content::GREEN, phase.timeframe);
                });
                widgets::bullet_list(ui, content::GREEN, phase.tasks);
                ui.add_space(4.0);
            }
        });

        widgets::card(right, |ui| {
            widgets::section_title(ui, "New System Implementations");
            numbered_steps(ui, content::PURPLE, plan.new_implementations);
        });
        for diagram in &content::DIAGRAMS {
            right.add_space(8.0);
            widgets::card(right, |ui| diagram_view(ui, diagram, panel.actions));
        }
    });
}

fn numbered_steps(ui: &mut egui::Ui, tone: content::Rgb, steps: &[shared::datasets::PlanStep]) {
    for (index, step) in steps.iter().enumerate() {
        ui.horizontal_wrapped(|ui| {
            ui.label(
                egui::RichText::new(format!(" {} ", index + 1))
                    .strong()
                    .color(egui::Color32::WHITE)
                    .background_color(color(tone)),
            );
            ui.vertical(|ui| {
                ui.label(egui::RichText::new(step.title).strong());
                ui.label(egui::RichText::new(step.detail).small());
            });
        });
        ui.add_space(4.0);
    }
}

fn diagram_view(ui: &mut egui::Ui, diagram: &'static Diagram, actions: &mut Vec<UiAction>) {
    ui.horizontal(|ui| {
        widgets::section_title(ui, diagram.title);
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.small_button("Copy Mermaid").clicked() {
                actions.push(UiAction::CopyDiagram(diagram.key));
            }
        });
    });
    egui::ScrollArea::horizontal()
        .id_salt(diagram.key)
        .show(ui, |ui| {
            ui.label(egui::RichText::new(diagram.source).monospace().small());
        });
}

fn caption(ui: &mut egui::Ui, text: &str) {
    ui.vertical_centered(|ui| {
        ui.label(egui::RichText::new(text).italics().small().weak());
    });
}
