//! Synthetic datasets for the DADL dashboard charts.
//!
//! Nothing here trains a model. Cluster clouds are uniform jitter around fixed
//! centers, the convergence and overhead numbers are pre-authored tables and
//! the learning-rate curve is a closed-form decay.

pub mod clusters;
pub mod content;
pub mod jitter;
pub mod learning_rate;
pub mod tables;

pub use clusters::{generate_cluster_points, ScatterBounds};
pub use jitter::{Centered, JitterSource};
pub use learning_rate::generate_learning_rate_series;
pub use tables::{lookup_communication, lookup_convergence};

use shared::{datasets::DatasetSnapshot, domain::SelectionState};

/// Builds every dataset for `selection`, drawing fresh cluster coordinates.
pub fn build_snapshot(selection: SelectionState, jitter: &mut impl JitterSource) -> DatasetSnapshot {
    DatasetSnapshot {
        selection,
        clusters: generate_cluster_points(selection.data_distribution, jitter),
        convergence: lookup_convergence(selection.data_distribution),
        communication: lookup_communication(selection.consensus_mode),
        learning_rate: generate_learning_rate_series(selection.data_distribution),
    }
}
