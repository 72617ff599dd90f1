//! User actions raised by the dashboard widgets.

use shared::domain::{ConsensusMode, DataDistribution, Tab};

use crate::ui::theme::ThemePreset;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiAction {
    SelectTab(Tab),
    SelectDistribution(DataDistribution),
    SelectConsensusMode(ConsensusMode),
    RegenerateClusters,
    SelectTheme(ThemePreset),
    CopyDiagram(&'static str),
}

impl UiAction {
    pub fn name(self) -> &'static str {
        match self {
            UiAction::SelectTab(_) => "select_tab",
            UiAction::SelectDistribution(_) => "select_distribution",
            UiAction::SelectConsensusMode(_) => "select_consensus_mode",
            UiAction::RegenerateClusters => "regenerate_clusters",
            UiAction::SelectTheme(_) => "select_theme",
            UiAction::CopyDiagram(_) => "copy_diagram",
        }
    }
}

/// What applying an action did to the session, for status display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ActionOutcome {
    pub selection_changed: bool,
    pub clusters_redrawn: bool,
}
