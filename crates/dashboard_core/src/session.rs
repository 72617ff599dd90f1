use rand::{rngs::StdRng, SeedableRng};
use sample_data::{generate_cluster_points, generate_learning_rate_series, lookup_communication, lookup_convergence};
use shared::{
    datasets::{ClusterPoint, CommunicationPoint, ConvergencePoint, DatasetSnapshot, LearningRatePoint},
    domain::{ConsensusMode, DataDistribution, SelectionState, Tab},
    error::SessionError,
};

use crate::config::DashboardSettings;

/// One viewer's selection plus the datasets derived from it.
///
/// Cluster clouds and the learning-rate series depend on the data
/// distribution, so they are rebuilt whenever it changes. The performance
/// tables are static and looked up on every read.
pub struct DashboardSession {
    selection: SelectionState,
    rng: StdRng,
    clusters: Vec<ClusterPoint>,
    learning_rate: Vec<LearningRatePoint>,
    generation: u64,
}

impl DashboardSession {
    pub fn new(selection: SelectionState, mut rng: StdRng) -> Self {
        let distribution = selection.data_distribution;
        let clusters = generate_cluster_points(distribution, &mut rng);
        Self {
            selection,
            rng,
            clusters,
            learning_rate: generate_learning_rate_series(distribution),
            generation: 0,
        }
    }

    pub fn from_settings(settings: &DashboardSettings) -> Self {
        let rng = match settings.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        tracing::info!(
            tab = settings.initial_tab.key(),
            distribution = settings.data_distribution.key(),
            mode = settings.consensus_mode.key(),
            seeded = settings.seed.is_some(),
            "starting dashboard session"
        );
        Self::new(settings.initial_selection(), rng)
    }

    pub fn selection(&self) -> SelectionState {
        self.selection
    }

    pub fn active_tab(&self) -> Tab {
        self.selection.active_tab
    }

    pub fn data_distribution(&self) -> DataDistribution {
        self.selection.data_distribution
    }

    pub fn consensus_mode(&self) -> ConsensusMode {
        self.selection.consensus_mode
    }

    /// Returns whether the tab actually changed.
    pub fn set_active_tab(&mut self, tab: Tab) -> bool {
        if self.selection.active_tab == tab {
            return false;
        }
        tracing::debug!(from = self.selection.active_tab.key(), to = tab.key(), "switching tab");
        self.selection.set_active_tab(tab);
        true
    }

    /// Returns whether the distribution actually changed. A change redraws
    /// the cluster clouds and recomputes the learning-rate series.
    pub fn set_data_distribution(&mut self, distribution: DataDistribution) -> bool {
        if self.selection.data_distribution == distribution {
            return false;
        }
        tracing::debug!(
            from = self.selection.data_distribution.key(),
            to = distribution.key(),
            "switching data distribution"
        );
        self.selection.set_data_distribution(distribution);
        self.learning_rate = generate_learning_rate_series(distribution);
        self.regenerate();
        true
    }

    pub fn set_consensus_mode(&mut self, mode: ConsensusMode) -> bool {
        if self.selection.consensus_mode == mode {
            return false;
        }
        tracing::debug!(
            from = self.selection.consensus_mode.key(),
            to = mode.key(),
            "switching consensus mode"
        );
        self.selection.set_consensus_mode(mode);
        true
    }

    /// Draws fresh cluster coordinates for the current distribution.
    pub fn regenerate(&mut self) {
        self.clusters = generate_cluster_points(self.selection.data_distribution, &mut self.rng);
        self.generation = self.generation.wrapping_add(1);
    }

    /// Bumped every time the cluster clouds are redrawn.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn clusters(&self) -> &[ClusterPoint] {
        &self.clusters
    }

    pub fn convergence(&self) -> &'static [ConvergencePoint] {
        lookup_convergence(self.selection.data_distribution)
    }

    pub fn communication(&self) -> &'static [CommunicationPoint] {
        lookup_communication(self.selection.consensus_mode)
    }

    pub fn learning_rate(&self) -> &[LearningRatePoint] {
        &self.learning_rate
    }

    pub fn snapshot(&self) -> DatasetSnapshot {
        DatasetSnapshot {
            selection: self.selection,
            clusters: self.clusters.clone(),
            convergence: self.convergence(),
            communication: self.communication(),
            learning_rate: self.learning_rate.clone(),
        }
    }
}

/// Owner of the session a front-end renders from.
///
/// Reads before [`DashboardContext::begin`] fail with
/// [`SessionError::NotInitialized`].
#[derive(Default)]
pub struct DashboardContext {
    session: Option<DashboardSession>,
}

impl DashboardContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_session(session: DashboardSession) -> Self {
        Self {
            session: Some(session),
        }
    }

    pub fn begin(&mut self, session: DashboardSession) -> &mut DashboardSession {
        if self.session.is_some() {
            tracing::warn!("replacing an active dashboard session");
        }
        self.session.insert(session)
    }

    pub fn end(&mut self) -> Option<DashboardSession> {
        self.session.take()
    }

    pub fn is_active(&self) -> bool {
        self.session.is_some()
    }

    pub fn session(&self) -> Result<&DashboardSession, SessionError> {
        self.session.as_ref().ok_or(SessionError::NotInitialized)
    }

    pub fn session_mut(&mut self) -> Result<&mut DashboardSession, SessionError> {
        self.session.as_mut().ok_or(SessionError::NotInitialized)
    }

    pub fn selection(&self) -> Result<SelectionState, SessionError> {
        self.session().map(DashboardSession::selection)
    }
}

#[cfg(test)]
#[path = "tests/session_tests.rs"]
mod tests;
