use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::ParseSelectionError;

macro_rules! selection_enum {
    ($name:ident { $($variant:ident => $key:literal),+ $(,)? }) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(
                #[serde(rename = $key)]
                $variant,
            )+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Stable lowercase key, identical to the serde representation.
            pub fn key(self) -> &'static str {
                match self {
                    $($name::$variant => $key,)+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.key())
            }
        }

        impl FromStr for $name {
            type Err = ParseSelectionError;

            fn from_str(raw: &str) -> Result<Self, Self::Err> {
                let wanted = raw.trim();
                $name::ALL
                    .iter()
                    .copied()
                    .find(|candidate| candidate.key().eq_ignore_ascii_case(wanted))
                    .ok_or_else(|| {
                        ParseSelectionError::new(
                            stringify!($name),
                            raw,
                            $name::ALL.iter().map(|v| v.key()),
                        )
                    })
            }
        }
    };
}

selection_enum!(Tab {
    Overview => "overview",
    Clustering => "clustering",
    Learning => "learning",
    Performance => "performance",
    Implementation => "implementation",
});

selection_enum!(DataDistribution {
    Iid => "iid",
    NonIid => "non-iid",
});

selection_enum!(ConsensusMode {
    Sync => "sync",
    Async => "async",
    Hybrid => "hybrid",
});

impl Default for Tab {
    fn default() -> Self {
        Tab::Overview
    }
}

impl Default for DataDistribution {
    fn default() -> Self {
        DataDistribution::NonIid
    }
}

impl Default for ConsensusMode {
    fn default() -> Self {
        ConsensusMode::Hybrid
    }
}

/// Which clustering approach a scatter point illustrates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ClusterMethod {
    Traditional,
    #[serde(rename = "Density-Aware")]
    DensityAware,
}

impl ClusterMethod {
    pub const ALL: [ClusterMethod; 2] = [ClusterMethod::Traditional, ClusterMethod::DensityAware];

    pub fn label(self) -> &'static str {
        match self {
            ClusterMethod::Traditional => "Traditional",
            ClusterMethod::DensityAware => "Density-Aware",
        }
    }
}

/// The three training approaches compared on the performance charts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Approach {
    Proposed,
    Dsgd,
    Fedavg,
}

impl Approach {
    pub const ALL: [Approach; 3] = [Approach::Proposed, Approach::Dsgd, Approach::Fedavg];

    pub fn label(self) -> &'static str {
        match self {
            Approach::Proposed => "Our Approach",
            Approach::Dsgd => "Distributed SGD",
            Approach::Fedavg => "Federated Avg",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectionState {
    pub active_tab: Tab,
    pub data_distribution: DataDistribution,
    pub consensus_mode: ConsensusMode,
}

impl SelectionState {
    pub fn new(
        active_tab: Tab,
        data_distribution: DataDistribution,
        consensus_mode: ConsensusMode,
    ) -> Self {
        Self {
            active_tab,
            data_distribution,
            consensus_mode,
        }
    }

    pub fn set_active_tab(&mut self, tab: Tab) {
        self.active_tab = tab;
    }

    pub fn set_data_distribution(&mut self, distribution: DataDistribution) {
        self.data_distribution = distribution;
    }

    pub fn set_consensus_mode(&mut self, mode: ConsensusMode) {
        self.consensus_mode = mode;
    }
}
