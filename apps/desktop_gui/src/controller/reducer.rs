//! Applies [`UiAction`]s to the dashboard session.

use dashboard_core::{DashboardContext, SessionError};

use crate::controller::events::{ActionOutcome, UiAction};

/// Applies the session-facing part of `action`.
///
/// Theme and clipboard actions belong to the shell and leave the session
/// untouched.
pub fn apply_action(
    ctx: &mut DashboardContext,
    action: UiAction,
) -> Result<ActionOutcome, SessionError> {
    let session = ctx.session_mut()?;
    let generation = session.generation();

    let selection_changed = match action {
        UiAction::SelectTab(tab) => session.set_active_tab(tab),
        UiAction::SelectDistribution(distribution) => session.set_data_distribution(distribution),
        UiAction::SelectConsensusMode(mode) => session.set_consensus_mode(mode),
        UiAction::RegenerateClusters => {
            session.regenerate();
            false
        }
        UiAction::SelectTheme(_) | UiAction::CopyDiagram(_) => false,
    };

    let outcome = ActionOutcome {
        selection_changed,
        clusters_redrawn: session.generation() != generation,
    };
    tracing::debug!(
        action = action.name(),
        selection_changed = outcome.selection_changed,
        clusters_redrawn = outcome.clusters_redrawn,
        "applied ui action"
    );
    Ok(outcome)
}

pub fn apply_all(
    ctx: &mut DashboardContext,
    actions: impl IntoIterator<Item = UiAction>,
) -> Result<ActionOutcome, SessionError> {
    let mut combined = ActionOutcome::default();
    for action in actions {
        let outcome = apply_action(ctx, action)?;
        combined.selection_changed |= outcome.selection_changed;
        combined.clusters_redrawn |= outcome.clusters_redrawn;
    }
    Ok(combined)
}
