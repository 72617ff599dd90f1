//! Static copy and styling shown alongside the generated datasets.

use std::fmt;

use serde::{Serialize, Serializer};
use shared::{
    datasets::{Challenge, ImplementationPlan, Phase, PlanStep},
    domain::{Approach, ClusterMethod, ConsensusMode, DataDistribution, Tab},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.0, self.1, self.2)
    }
}

impl Serialize for Rgb {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

pub const BLUE: Rgb = Rgb(0x0A, 0x84, 0xFF);
pub const ORANGE: Rgb = Rgb(0xFF, 0x95, 0x00);
pub const GREEN: Rgb = Rgb(0x34, 0xC7, 0x59);
pub const PURPLE: Rgb = Rgb(0xAF, 0x52, 0xDE);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SeriesStyle {
    pub name: &'static str,
    pub color: Rgb,
}

pub const STANDARD_RATE: SeriesStyle = SeriesStyle {
    name: "Standard Rate",
    color: ORANGE,
};
pub const DENSITY_ADAPTED_RATE: SeriesStyle = SeriesStyle {
    name: "Density-Adapted",
    color: BLUE,
};
pub const DENSITY_RATIO: SeriesStyle = SeriesStyle {
    name: "Density Ratio",
    color: GREEN,
};

pub fn approach_style(approach: Approach) -> SeriesStyle {
    let color = match approach {
        Approach::Proposed => BLUE,
        Approach::Dsgd => ORANGE,
        Approach::Fedavg => GREEN,
    };
    SeriesStyle {
        name: approach.label(),
        color,
    }
}

pub fn cluster_style(method: ClusterMethod) -> SeriesStyle {
    match method {
        ClusterMethod::Traditional => SeriesStyle {
            name: "Traditional Clustering",
            color: ORANGE,
        },
        ClusterMethod::DensityAware => SeriesStyle {
            name: "Density-Aware Clustering",
            color: BLUE,
        },
    }
}

pub const TITLE: &str = "DADL Density Aware Distributed Learning";
pub const SUBTITLE: &str =
    "Advanced architecture for efficient distributed learning in heterogeneous environments";

pub fn tab_label(tab: Tab) -> &'static str {
    match tab {
        Tab::Overview => "Overview",
        Tab::Clustering => "Clustering",
        Tab::Learning => "Adaptive Learning",
        Tab::Performance => "Performance",
        Tab::Implementation => "Implementation",
    }
}

pub fn tab_heading(tab: Tab) -> &'static str {
    match tab {
        Tab::Overview => "System Architecture Overview",
        Tab::Clustering => "Clustering Comparison",
        Tab::Learning => "Adaptive Learning Rate",
        Tab::Performance => "Performance Comparison",
        Tab::Implementation => "Implementation Strategy",
    }
}

pub fn distribution_label(distribution: DataDistribution) -> &'static str {
    match distribution {
        DataDistribution::Iid => "IID (Uniform)",
        DataDistribution::NonIid => "Non-IID (Heterogeneous)",
    }
}

pub fn consensus_label(mode: ConsensusMode) -> &'static str {
    match mode {
        ConsensusMode::Sync => "Synchronous",
        ConsensusMode::Async => "Asynchronous",
        ConsensusMode::Hybrid => "Hybrid (Adaptive)",
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Card {
    pub tag: &'static str,
    pub title: &'static str,
    pub body: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Highlight {
    pub title: &'static str,
    pub body: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BulletGroup {
    pub title: &'static str,
    pub color: Rgb,
    pub bullets: &'static [&'static str],
}

// Overview

pub const KEY_COMPONENTS: [BulletGroup; 3] = [
    BulletGroup {
        title: "Data Partitioning",
        color: BLUE,
        bullets: &[
            "Locality-Sensitive Hashing",
            "Density-Aware Bucketing",
            "Adaptive Bucket Width",
        ],
    },
    BulletGroup {
        title: "Density Estimation",
        color: GREEN,
        bullets: &[
            "HyperLogLog Counter",
            "T-Digest Algorithm",
            "Unified Density Metric",
        ],
    },
    BulletGroup {
        title: "Consensus",
        color: PURPLE,
        bullets: &[
            "Hybrid Sync/Async Updates",
            "Adaptive Learning Rates",
            "Dynamic Mode Selection",
        ],
    },
];

pub const KEY_INNOVATIONS: [Highlight; 5] = [
    Highlight {
        title: "Query Latency",
        body: "48.2% reduction vs traditional",
    },
    Highlight {
        title: "False Merges",
        body: "69.1% fewer in data clustering",
    },
    Highlight {
        title: "Storage Efficiency",
        body: "29.6% improvement",
    },
    Highlight {
        title: "Non-IID Data",
        body: "Superior heterogeneous handling",
    },
    Highlight {
        title: "Network Robustness",
        body: "Resilient to communication delays",
    },
];

pub const APPLICATIONS: [Card; 3] = [
    Card {
        tag: "Edge Computing",
        title: "Resource Optimization",
        body: "Efficient learning on resource-constrained devices with reduced communication overhead and adaptive computation scheduling.",
    },
    Card {
        tag: "Healthcare Analytics",
        title: "Privacy-preserving ML",
        body: "Collaborative learning for medical diagnosis and treatment while maintaining patient data privacy through federated computation.",
    },
    Card {
        tag: "Industrial IoT",
        title: "Anomaly Detection",
        body: "Real-time anomaly detection and predictive maintenance with 99.9% accuracy even under variable network conditions.",
    },
];

// Clustering

pub const CLUSTERING_TRAITS: [BulletGroup; 2] = [
    BulletGroup {
        title: "Traditional Clustering",
        color: ORANGE,
        bullets: &[
            "Fixed distance metrics that don't adapt to data characteristics",
            "Uniform density assumption across all regions",
            "Global parameters that can't adjust to local variations",
            "Less adaptive to local patterns and outliers",
            "Poor handling of non-IID data distributions",
        ],
    },
    BulletGroup {
        title: "Density-Aware Clustering",
        color: BLUE,
        bullets: &[
            "Adaptive distance metrics that respond to data density",
            "Local density consideration for improved boundary detection",
            "Dynamic parameters that adjust to cluster characteristics",
            "Better pattern recognition in complex data distributions",
            "Superior performance on heterogeneous data sets",
        ],
    },
];

// Adaptive learning

pub const ADAPTATION_FACTORS: [Highlight; 4] = [
    Highlight {
        title: "Local Density Ratio",
        body: "Adjusts learning based on the ratio of local to global data density.",
    },
    Highlight {
        title: "Gradient Magnitude",
        body: "Scales learning rate inversely with gradient size to prevent divergence.",
    },
    Highlight {
        title: "Training Progress",
        body: "Gradually decreases rate as training progresses for fine-tuning.",
    },
    Highlight {
        title: "Network Conditions",
        body: "Adapts to communication latency and available bandwidth.",
    },
];

pub const LEARNING_BENEFITS: [Highlight; 4] = [
    Highlight {
        title: "35% Faster Convergence",
        body: "Reaches optimal model accuracy in fewer iterations compared to fixed rates.",
    },
    Highlight {
        title: "Improved Stability",
        body: "Reduces oscillations in training and prevents divergence in sparse regions.",
    },
    Highlight {
        title: "Better Non-IID Data Handling",
        body: "Intelligently adapts to heterogeneous data distributions across nodes.",
    },
    Highlight {
        title: "Reduced Communication",
        body: "Lower bandwidth requirements due to faster convergence and fewer updates.",
    },
];

// Performance

pub const CONVERGENCE_CAPTION: &str =
    "Higher values indicate better accuracy. Our approach converges faster, especially with non-IID data.";
pub const COMMUNICATION_CAPTION: &str =
    "Lower values indicate more efficient resource usage. Our approach significantly reduces communication overhead.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ApproachCard {
    pub approach: Approach,
    pub tag: &'static str,
    pub title: &'static str,
    pub bullets: &'static [&'static str],
}

pub const APPROACH_CARDS: [ApproachCard; 3] = [
    ApproachCard {
        approach: Approach::Proposed,
        tag: "Our Approach",
        title: "Density-Aware Optimization",
        bullets: &[
            "Adaptive to data distribution",
            "Hybrid consensus mechanism",
            "Optimized communication patterns",
        ],
    },
    ApproachCard {
        approach: Approach::Dsgd,
        tag: "Distributed SGD",
        title: "Traditional Approach",
        bullets: &[
            "Fixed learning rate",
            "Synchronous updates only",
            "High message overhead",
        ],
    },
    ApproachCard {
        approach: Approach::Fedavg,
        tag: "Federated Averaging",
        title: "Alternative Approach",
        bullets: &[
            "Client-server architecture",
            "Periodic model averaging",
            "Better than DSGD but more centralized",
        ],
    },
];

// Implementation

pub const IMPLEMENTATION_PLAN: ImplementationPlan = ImplementationPlan {
    established_systems: &[
        PlanStep {
            title: "Begin with Density Estimation Layer",
            detail: "Add HyperLogLog and T-Digest structures as monitoring tools alongside your existing system.",
        },
        PlanStep {
            title: "Introduce Adaptive Learning Rates",
            detail: "Modify your existing optimizer to incorporate density-aware learning rate adjustments.",
        },
        PlanStep {
            title: "Hybrid Consensus Mechanism",
            detail: "Implement mode selection function that monitors network conditions and gradient variance.",
        },
        PlanStep {
            title: "Data Partitioning Enhancement",
            detail: "Add LSH-based partitioning as an optional preprocessing step for new training runs.",
        },
    ],
    new_implementations: &[
        PlanStep {
            title: "Foundational Components",
            detail: "Begin with core probabilistic data structures and build the LSH partitioning with density-aware bucket splitting.",
        },
        PlanStep {
            title: "Distributed Framework Selection",
            detail: "Choose a distributed computing framework like Ray or Dask that allows for flexible deployment models.",
        },
        PlanStep {
            title: "Communication Protocol Design",
            detail: "Design the communication protocol to support both synchronous and asynchronous patterns with priority mechanisms.",
        },
        PlanStep {
            title: "Monitoring and Adaptation",
            detail: "Implement comprehensive telemetry to track performance metrics and automatically adapt system parameters.",
        },
    ],
    challenges: &[
        Challenge {
            challenge: "Legacy code dependencies",
            solution: "Create wrapper classes that translate between your architecture and the existing system",
        },
        Challenge {
            challenge: "Performance overhead",
            solution: "Implement lightweight versions of HyperLogLog and T-Digest that minimize additional computation",
        },
        Challenge {
            challenge: "System monitoring",
            solution: "Add instrumentation to measure before/after performance improvements to justify further integration",
        },
        Challenge {
            challenge: "Backward compatibility",
            solution: "Design a fallback mechanism to revert to original behavior if issues arise",
        },
    ],
    phases: &[
        Phase {
            phase: "Core Functionality",
            timeframe: "1-3 months",
            tasks: &[
                "Implement basic data structures (HyperLogLog, T-Digest)",
                "Basic density calculations and metrics",
                "Simple adaptive learning rate mechanism",
            ],
        },
        Phase {
            phase: "Distribution and Scaling",
            timeframe: "2-4 months",
            tasks: &[
                "LSH partitioning with density-aware modifications",
                "Parallel DBSCAN implementation",
                "Distributed communication protocols",
            ],
        },
        Phase {
            phase: "Advanced Features",
            timeframe: "3-6 months",
            tasks: &[
                "Hybrid consensus mechanism with mode selection",
                "Comprehensive security features",
                "Performance optimization and tuning",
            ],
        },
    ],
};

/// A flowchart in Mermaid syntax, rendered by whatever diagram viewer the
/// front-end has.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Diagram {
    pub key: &'static str,
    pub title: &'static str,
    pub source: &'static str,
}

pub const HETEROGENEITY_DIAGRAM: Diagram = Diagram {
    key: "heterogeneity",
    title: "Heterogeneity Handling",
    source: r#"flowchart TB
  subgraph DH["Data Heterogeneity Handling"]
    direction TB
    subgraph Detection["Heterogeneity Detection"]
      DD[Distribution Analysis]
      DS[Density Sampling]
      GM[Gradient Monitoring]
    end
    subgraph Adaptation["Adaptation Mechanisms"]
      direction LR
      LN[Local Normalization]
      GT[Gradient Transformation]
      WS[Weight Scaling]
    end
    subgraph Monitoring["Performance Monitoring"]
      direction TB
      VM[Validation Metrics]
      DM[Distribution Metrics]
      CM[Convergence Monitoring]
    end
  end
  Detection --> Adaptation
  Adaptation --> Monitoring
  Monitoring -->|Feedback| Detection
  style Detection fill:#e1f3d8,stroke:#333,stroke-width:2px
  style Adaptation fill:#ffd700,stroke:#333,stroke-width:2px
  style Monitoring fill:#f9f9f9,stroke:#333,stroke-width:2px"#,
};

pub const ARCHITECTURE_DIAGRAM: Diagram = Diagram {
    key: "architecture",
    title: "Architecture Overview",
    source: r#"flowchart TD
  subgraph LSH["Locality-Sensitive Hashing"]
    direction TB
    HF["Hash Functions"] -->|"Creates"| BK["Buckets"]
    BK -->|"Resolution"| SB["Split by Density"]
  end
  subgraph DBSCAN["Parallel DBSCAN"]
    CP["Core Points"] -->|"Core"| EC["Expand"]
    EC -->|"Boundary"| BR["Resolution"]
  end
  LSH -->|"Data"| DBSCAN
  style LSH fill:#f5f5f5,stroke:#333,stroke-width:2px
  style DBSCAN fill:#e1f3d8,stroke:#333,stroke-width:2px"#,
};

pub static DIAGRAMS: [Diagram; 2] = [HETEROGENEITY_DIAGRAM, ARCHITECTURE_DIAGRAM];

pub fn find_diagram(key: &str) -> Option<&'static Diagram> {
    DIAGRAMS
        .iter()
        .find(|diagram| diagram.key.eq_ignore_ascii_case(key.trim()))
}
