use serde::{Deserialize, Serialize};

use crate::domain::{Approach, ClusterMethod, SelectionState};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClusterPoint {
    pub x: f64,
    pub y: f64,
    pub method: ClusterMethod,
}

/// Accuracy of each approach at a training iteration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConvergencePoint {
    pub iteration: u32,
    pub proposed: f64,
    pub dsgd: f64,
    pub fedavg: f64,
}

impl ConvergencePoint {
    pub fn value(&self, approach: Approach) -> f64 {
        match approach {
            Approach::Proposed => self.proposed,
            Approach::Dsgd => self.dsgd,
            Approach::Fedavg => self.fedavg,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CommunicationPoint {
    pub metric: &'static str,
    pub proposed: f64,
    pub dsgd: f64,
    pub fedavg: f64,
}

impl CommunicationPoint {
    pub fn value(&self, approach: Approach) -> f64 {
        match approach {
            Approach::Proposed => self.proposed,
            Approach::Dsgd => self.dsgd,
            Approach::Fedavg => self.fedavg,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LearningRatePoint {
    pub iteration: u32,
    pub density_ratio: f64,
    pub base_rate: f64,
    pub adapted_rate: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PlanStep {
    pub title: &'static str,
    pub detail: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Challenge {
    pub challenge: &'static str,
    pub solution: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Phase {
    pub phase: &'static str,
    pub timeframe: &'static str,
    pub tasks: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImplementationPlan {
    pub established_systems: &'static [PlanStep],
    pub new_implementations: &'static [PlanStep],
    pub challenges: &'static [Challenge],
    pub phases: &'static [Phase],
}

/// Everything one render pass needs for the current selection.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DatasetSnapshot {
    pub selection: SelectionState,
    pub clusters: Vec<ClusterPoint>,
    pub convergence: &'static [ConvergencePoint],
    pub communication: &'static [CommunicationPoint],
    pub learning_rate: Vec<LearningRatePoint>,
}

impl DatasetSnapshot {
    pub fn clusters_for(&self, method: ClusterMethod) -> impl Iterator<Item = &ClusterPoint> {
        self.clusters.iter().filter(move |point| point.method == method)
    }
}
