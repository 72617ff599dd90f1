use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};
use dashboard_core::{load_settings_from, DashboardSession, DashboardSettings};
use sample_data::content;
use serde::Serialize;
use shared::domain::{ConsensusMode, DataDistribution};
use tracing_subscriber::EnvFilter;

/// Prints the dashboard's synthetic datasets.
#[derive(Parser, Debug)]
struct Cli {
    /// Settings file; missing files fall back to defaults.
    #[arg(long, default_value = dashboard_core::config::SETTINGS_FILE)]
    config: PathBuf,
    #[arg(long, global = true)]
    distribution: Option<DataDistribution>,
    #[arg(long, global = true)]
    mode: Option<ConsensusMode>,
    #[arg(long, global = true)]
    seed: Option<u64>,
    #[arg(long, global = true)]
    pretty: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
enum Command {
    Clusters,
    Convergence,
    Communication,
    LearningRate,
    Plan,
    Diagram { name: String },
    Snapshot,
    Settings,
}

impl Cli {
    fn apply_overrides(&self, mut settings: DashboardSettings) -> DashboardSettings {
        if let Some(distribution) = self.distribution {
            settings.data_distribution = distribution;
        }
        if let Some(mode) = self.mode {
            settings.consensus_mode = mode;
        }
        if self.seed.is_some() {
            settings.seed = self.seed;
        }
        settings
    }
}

fn emit<T: Serialize + ?Sized>(value: &T, pretty: bool) -> Result<()> {
    let text = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    }
    .context("failed to serialize output")?;
    println!("{text}");
    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();
    let settings = load_settings_from(&cli.config)
        .with_context(|| format!("failed to load settings from {}", cli.config.display()))?;
    let settings = cli.apply_overrides(settings);
    tracing::debug!(?settings, command = ?cli.command, "running tool");

    match &cli.command {
        Command::Settings => {
            print!("{}", settings.to_toml().context("failed to render settings")?);
        }
        Command::Plan => emit(&content::IMPLEMENTATION_PLAN, cli.pretty)?,
        Command::Diagram { name } => {
            let diagram = content::find_diagram(name).ok_or_else(|| {
                let known: Vec<_> = content::DIAGRAMS.iter().map(|d| d.key).collect();
                anyhow!("unknown diagram `{name}`; expected one of: {}", known.join(", "))
            })?;
            println!("{}", diagram.source);
        }
        command => {
            let session = DashboardSession::from_settings(&settings);
            match command {
                Command::Clusters => emit(session.clusters(), cli.pretty)?,
                Command::Convergence => emit(session.convergence(), cli.pretty)?,
                Command::Communication => emit(session.communication(), cli.pretty)?,
                Command::LearningRate => emit(session.learning_rate(), cli.pretty)?,
                _ => emit(&session.snapshot(), cli.pretty)?,
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_selection_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "tools",
            "clusters",
            "--distribution",
            "IID",
            "--mode",
            "async",
            "--seed",
            "9",
        ])
        .expect("parse");
        assert_eq!(cli.command, Command::Clusters);
        assert_eq!(cli.distribution, Some(DataDistribution::Iid));
        assert_eq!(cli.mode, Some(ConsensusMode::Async));
        assert_eq!(cli.seed, Some(9));
    }

    #[test]
    fn rejects_unknown_consensus_mode() {
        let err = Cli::try_parse_from(["tools", "--mode", "gossip", "snapshot"]).unwrap_err();
        assert!(err.to_string().contains("sync, async, hybrid"));
    }

    #[test]
    fn overrides_replace_only_given_fields() {
        let cli = Cli::try_parse_from(["tools", "--mode", "sync", "communication"]).expect("parse");
        let settings = cli.apply_overrides(DashboardSettings {
            seed: Some(4),
            ..DashboardSettings::default()
        });
        assert_eq!(settings.consensus_mode, ConsensusMode::Sync);
        assert_eq!(settings.data_distribution, DataDistribution::NonIid);
        assert_eq!(settings.seed, Some(4));
    }

    #[test]
    fn diagram_takes_a_name() {
        let cli = Cli::try_parse_from(["tools", "diagram", "architecture"]).expect("parse");
        assert_eq!(
            cli.command,
            Command::Diagram {
                name: "architecture".to_string()
            }
        );
    }
}
