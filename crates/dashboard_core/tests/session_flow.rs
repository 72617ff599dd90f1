use dashboard_core::{DashboardContext, DashboardSession, DashboardSettings, SessionError};
use shared::domain::{ClusterMethod, ConsensusMode, DataDistribution, Tab};

fn seeded_settings() -> DashboardSettings {
    DashboardSettings {
        seed: Some(2024),
        ..DashboardSettings::default()
    }
}

#[test]
fn walks_every_tab_with_consistent_datasets() {
    let mut ctx = DashboardContext::new();
    assert_eq!(ctx.selection().unwrap_err(), SessionError::NotInitialized);

    ctx.begin(DashboardSession::from_settings(&seeded_settings()));
    let session = ctx.session_mut().expect("active session");

    for tab in Tab::ALL.iter().copied() {
        session.set_active_tab(tab);
        for distribution in DataDistribution::ALL.iter().copied() {
            session.set_data_distribution(distribution);
            for mode in ConsensusMode::ALL.iter().copied() {
                session.set_consensus_mode(mode);

                let snapshot = session.snapshot();
                assert_eq!(snapshot.selection.active_tab, tab);
                let traditional = snapshot.clusters_for(ClusterMethod::Traditional).count();
                let density_aware = snapshot.clusters_for(ClusterMethod::DensityAware).count();
                assert_eq!(traditional, density_aware);
                assert!(snapshot
                    .learning_rate
                    .iter()
                    .all(|p| p.adapted_rate <= p.base_rate));
            }
        }
    }
}

#[test]
fn snapshot_json_matches_chart_keys() {
    let session = DashboardSession::from_settings(&seeded_settings());
    let json = serde_json::to_value(session.snapshot()).expect("serialize");
    assert_eq!(json["selection"]["activeTab"], "overview");
    assert_eq!(json["selection"]["consensusMode"], "hybrid");
    assert_eq!(json["clusters"].as_array().map(Vec::len), Some(250));
    assert_eq!(json["communication"][1]["metric"], "Messages (K)");
}
