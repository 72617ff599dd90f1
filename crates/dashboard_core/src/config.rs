use std::path::Path;

use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use shared::domain::{ConsensusMode, DataDistribution, SelectionState, Tab};
use thiserror::Error;

pub const SETTINGS_FILE: &str = "dadl.toml";
pub const ENV_PREFIX: &str = "DADL";

pub const DEFAULT_CHART_HEIGHT: f32 = 350.0;
const MIN_CHART_HEIGHT: f32 = 200.0;
const MAX_CHART_HEIGHT: f32 = 600.0;

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to load dashboard settings: {0}")]
    Load(#[from] config::ConfigError),
    #[error("failed to render dashboard settings: {0}")]
    Render(#[from] toml::ser::Error),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardSettings {
    pub initial_tab: Tab,
    pub data_distribution: DataDistribution,
    pub consensus_mode: ConsensusMode,
    /// Fixes the cluster jitter so every run draws the same clouds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    pub chart_height: f32,
}

impl Default for DashboardSettings {
    fn default() -> Self {
        Self {
            initial_tab: Tab::default(),
            data_distribution: DataDistribution::default(),
            consensus_mode: ConsensusMode::default(),
            seed: None,
            chart_height: DEFAULT_CHART_HEIGHT,
        }
    }
}

impl DashboardSettings {
    pub fn initial_selection(&self) -> SelectionState {
        SelectionState::new(self.initial_tab, self.data_distribution, self.consensus_mode)
    }

    fn normalized(mut self) -> Self {
        self.chart_height = if self.chart_height.is_finite() {
            self.chart_height.clamp(MIN_CHART_HEIGHT, MAX_CHART_HEIGHT)
        } else {
            DEFAULT_CHART_HEIGHT
        };
        self
    }

    pub fn to_toml(&self) -> Result<String, SettingsError> {
        Ok(toml::to_string_pretty(self)?)
    }
}

/// Loads `dadl.toml` from the working directory, then `DADL__*` overrides.
pub fn load_settings() -> Result<DashboardSettings, SettingsError> {
    load_settings_from(Path::new(SETTINGS_FILE))
}

pub fn load_settings_from(path: &Path) -> Result<DashboardSettings, SettingsError> {
    let layered = Config::builder()
        .add_source(File::from(path).required(false))
        .add_source(
            Environment::with_prefix(ENV_PREFIX)
                .separator("__")
                .try_parsing(true),
        )
        .build()?;
    let settings = layered.try_deserialize::<DashboardSettings>()?.normalized();
    tracing::debug!(path = %path.display(), ?settings, "loaded dashboard settings");
    Ok(settings)
}

#[cfg(test)]
mod tests {
    use std::{
        env, fs,
        time::{SystemTime, UNIX_EPOCH},
    };

    use super::*;

    fn temp_settings_file(label: &str, contents: &str) -> std::path::PathBuf {
        let suffix = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("clock")
            .as_nanos();
        let root = env::temp_dir().join(format!("dadl_settings_{label}_{suffix}"));
        fs::create_dir_all(&root).expect("temp root");
        let path = root.join("dadl.toml");
        fs::write(&path, contents).expect("write settings");
        path
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let settings =
            load_settings_from(Path::new("/nonexistent/dadl/settings.toml")).expect("defaults");
        assert_eq!(settings.initial_tab, Tab::Overview);
        assert_eq!(settings.data_distribution, DataDistribution::NonIid);
        assert_eq!(settings.consensus_mode, ConsensusMode::Hybrid);
        assert_eq!(settings.chart_height, DEFAULT_CHART_HEIGHT);
    }

    #[test]
    fn reads_selection_and_seed_from_file() {
        let path = temp_settings_file(
            "selection",
            "initial_tab = \"performance\"\ndata_distribution = \"iid\"\nconsensus_mode = \"sync\"\nseed = 42\n",
        );
        let settings = load_settings_from(&path).expect("settings");
        assert_eq!(
            settings.initial_selection(),
            SelectionState::new(Tab::Performance, DataDistribution::Iid, ConsensusMode::Sync)
        );
        assert_eq!(settings.seed, Some(42));

        fs::remove_dir_all(path.parent().expect("parent")).expect("cleanup");
    }

    #[test]
    fn clamps_chart_height() {
        let path = temp_settings_file("clamp", "chart_height = 5000.0\n");
        let settings = load_settings_from(&path).expect("settings");
        assert_eq!(settings.chart_height, MAX_CHART_HEIGHT);

        fs::remove_dir_all(path.parent().expect("parent")).expect("cleanup");
    }

    #[test]
    fn rejects_unknown_distribution() {
        let path = temp_settings_file("unknown", "data_distribution = \"gaussian\"\n");
        assert!(matches!(
            load_settings_from(&path),
            Err(SettingsError::Load(_))
        ));

        fs::remove_dir_all(path.parent().expect("parent")).expect("cleanup");
    }

    #[test]
    fn renders_toml_omitting_unset_seed() {
        let settings = DashboardSettings {
            seed: Some(7),
            ..DashboardSettings::default()
        };
        let rendered = settings.to_toml().expect("toml");
        assert!(rendered.contains("data_distribution = \"non-iid\""));
        assert!(rendered.contains("seed = 7"));
        assert!(!DashboardSettings::default()
            .to_toml()
            .expect("toml")
            .contains("seed"));
    }
}
