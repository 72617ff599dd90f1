use rand::{rngs::StdRng, SeedableRng};
use sample_data::{build_snapshot, Centered};
use shared::domain::{ClusterMethod, ConsensusMode, DataDistribution, SelectionState, Tab};

fn all_selections() -> impl Iterator<Item = SelectionState> {
    DataDistribution::ALL.iter().flat_map(|distribution| {
        ConsensusMode::ALL
            .iter()
            .map(move |mode| SelectionState::new(Tab::Overview, *distribution, *mode))
    })
}

#[test]
fn every_selection_yields_balanced_non_empty_datasets() {
    let mut rng = StdRng::seed_from_u64(11);
    for selection in all_selections() {
        let snapshot = build_snapshot(selection, &mut rng);
        let traditional = snapshot.clusters_for(ClusterMethod::Traditional).count();
        let density_aware = snapshot.clusters_for(ClusterMethod::DensityAware).count();

        assert!(traditional > 0);
        assert_eq!(traditional, density_aware);
        assert_eq!(traditional + density_aware, snapshot.clusters.len());
        assert_eq!(snapshot.convergence.len(), 6);
        assert_eq!(snapshot.communication.len(), 3);
        assert_eq!(snapshot.learning_rate.len(), 50);
        assert_eq!(snapshot.selection, selection);
    }
}

#[test]
fn seeded_snapshots_are_reproducible() {
    let selection = SelectionState::default();
    let first = build_snapshot(selection, &mut StdRng::seed_from_u64(99));
    let second = build_snapshot(selection, &mut StdRng::seed_from_u64(99));
    assert_eq!(first, second);
}

#[test]
fn snapshot_serializes_with_chart_field_names() {
    let selection = SelectionState::new(Tab::Learning, DataDistribution::Iid, ConsensusMode::Async);
    let snapshot = build_snapshot(selection, &mut Centered);
    let json = serde_json::to_value(&snapshot).expect("serialize");

    assert_eq!(json["selection"]["dataDistribution"], "iid");
    assert_eq!(json["clusters"][0]["method"], "Traditional");
    assert_eq!(json["clusters"][239]["method"], "Density-Aware");
    assert_eq!(json["communication"][0]["metric"], "Data Transfer (GB)");
    assert_eq!(json["communication"][0]["proposed"], 32.0);
    assert_eq!(json["learningRate"][0]["adaptedRate"], 0.1);
    assert_eq!(json["convergence"][5]["iteration"], 100);
}
