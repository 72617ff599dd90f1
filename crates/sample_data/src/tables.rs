//! Pre-authored performance tables keyed by the current selection.

use shared::{
    datasets::{CommunicationPoint, ConvergencePoint},
    domain::{ConsensusMode, DataDistribution},
};

pub const METRIC_DATA_TRANSFER: &str = "Data Transfer (GB)";
pub const METRIC_MESSAGES: &str = "Messages (K)";
pub const METRIC_MEMORY: &str = "Memory Usage (GB)";

/// Convergence is plotted as accuracy, so the y axis is pinned to `[0, 1]`.
pub const ACCURACY_AXIS: (f64, f64) = (0.0, 1.0);

const fn accuracy(iteration: u32, proposed: f64, dsgd: f64, fedavg: f64) -> ConvergencePoint {
    ConvergencePoint {
        iteration,
        proposed,
        dsgd,
        fedavg,
    }
}

const fn overhead(metric: &'static str, proposed: f64, dsgd: f64, fedavg: f64) -> CommunicationPoint {
    CommunicationPoint {
        metric,
        proposed,
        dsgd,
        fedavg,
    }
}

static IID_CONVERGENCE: [ConvergencePoint; 6] = [
    accuracy(0, 0.2, 0.2, 0.2),
    accuracy(20, 0.55, 0.4, 0.45),
    accuracy(40, 0.75, 0.55, 0.6),
    accuracy(60, 0.85, 0.65, 0.7),
    accuracy(80, 0.9, 0.75, 0.8),
    accuracy(100, 0.92, 0.82, 0.85),
];

static NON_IID_CONVERGENCE: [ConvergencePoint; 6] = [
    accuracy(0, 0.2, 0.2, 0.2),
    accuracy(20, 0.45, 0.3, 0.35),
    accuracy(40, 0.65, 0.4, 0.45),
    accuracy(60, 0.8, 0.5, 0.55),
    accuracy(80, 0.85, 0.6, 0.65),
    accuracy(100, 0.9, 0.7, 0.75),
];

static SYNC_OVERHEAD: [CommunicationPoint; 3] = [
    overhead(METRIC_DATA_TRANSFER, 38.0, 48.0, 42.0),
    overhead(METRIC_MESSAGES, 220.0, 485.0, 420.0),
    overhead(METRIC_MEMORY, 5.6, 8.1, 7.2),
];

static ASYNC_OVERHEAD: [CommunicationPoint; 3] = [
    overhead(METRIC_DATA_TRANSFER, 32.0, 40.0, 38.0),
    overhead(METRIC_MESSAGES, 185.0, 410.0, 380.0),
    overhead(METRIC_MEMORY, 4.9, 7.4, 6.8),
];

static HYBRID_OVERHEAD: [CommunicationPoint; 3] = [
    overhead(METRIC_DATA_TRANSFER, 25.0, 48.0, 42.0),
    overhead(METRIC_MESSAGES, 150.0, 485.0, 420.0),
    overhead(METRIC_MEMORY, 4.2, 8.1, 7.2),
];

pub fn lookup_convergence(distribution: DataDistribution) -> &'static [ConvergencePoint] {
    match distribution {
        DataDistribution::Iid => &IID_CONVERGENCE,
        DataDistribution::NonIid => &NON_IID_CONVERGENCE,
    }
}

pub fn lookup_communication(mode: ConsensusMode) -> &'static [CommunicationPoint] {
    match mode {
        ConsensusMode::Sync => &SYNC_OVERHEAD,
        ConsensusMode::Async => &ASYNC_OVERHEAD,
        ConsensusMode::Hybrid => &HYBRID_OVERHEAD,
    }
}

#[cfg(test)]
mod tests {
    use shared::domain::Approach;

    use super::*;

    #[test]
    fn convergence_tables_cover_six_checkpoints() {
        for distribution in DataDistribution::ALL.iter().copied() {
            let table = lookup_convergence(distribution);
            let iterations: Vec<u32> = table.iter().map(|p| p.iteration).collect();
            assert_eq!(iterations, vec![0, 20, 40, 60, 80, 100]);
            for point in table {
                for approach in Approach::ALL {
                    let value = point.value(approach);
                    assert!((ACCURACY_AXIS.0..=ACCURACY_AXIS.1).contains(&value));
                }
            }
        }
    }

    #[test]
    fn proposed_approach_leads_after_start() {
        for distribution in DataDistribution::ALL.iter().copied() {
            for point in &lookup_convergence(distribution)[1..] {
                assert!(point.proposed > point.dsgd);
                assert!(point.proposed > point.fedavg);
            }
        }
    }

    #[test]
    fn communication_tables_share_metric_rows() {
        for mode in ConsensusMode::ALL.iter().copied() {
            let metrics: Vec<&str> = lookup_communication(mode).iter().map(|p| p.metric).collect();
            assert_eq!(
                metrics,
                vec![METRIC_DATA_TRANSFER, METRIC_MESSAGES, METRIC_MEMORY]
            );
        }
    }

    #[test]
    fn hybrid_mode_sends_fewest_messages() {
        let messages = |mode| {
            lookup_communication(mode)
                .iter()
                .find(|row| row.metric == METRIC_MESSAGES)
                .expect("messages row")
                .proposed
        };
        assert_eq!(messages(ConsensusMode::Hybrid), 150.0);
        assert!(messages(ConsensusMode::Hybrid) < messages(ConsensusMode::Async));
        assert!(messages(ConsensusMode::Async) < messages(ConsensusMode::Sync));
    }
}
