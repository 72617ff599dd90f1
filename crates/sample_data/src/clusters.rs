//! Before/after scatter clouds for the clustering comparison chart.
//!
//! Each distribution has a fixed layout of cluster pairs. A pair places one
//! blob of traditional-clustering points on the left half of the canvas and a
//! tighter blob of density-aware points four units to the right.

use shared::{
    datasets::ClusterPoint,
    domain::{ClusterMethod, DataDistribution},
};

use crate::jitter::JitterSource;

/// A square cloud of points: center plus the half-width of the uniform spread.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Blob {
    pub center_x: f64,
    pub center_y: f64,
    pub half_width: f64,
}

impl Blob {
    const fn new(center_x: f64, center_y: f64, half_width: f64) -> Self {
        Self {
            center_x,
            center_y,
            half_width,
        }
    }

    fn sample(&self, method: ClusterMethod, jitter: &mut impl JitterSource) -> ClusterPoint {
        let x = self.center_x + jitter.jitter(self.half_width);
        let y = self.center_y + jitter.jitter(self.half_width);
        ClusterPoint { x, y, method }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClusterPair {
    pub points: usize,
    pub traditional: Blob,
    pub density_aware: Blob,
}

impl ClusterPair {
    const fn new(points: usize, traditional: Blob, density_aware: Blob) -> Self {
        Self {
            points,
            traditional,
            density_aware,
        }
    }
}

const IID_LAYOUT: [ClusterPair; 3] = [
    ClusterPair::new(40, Blob::new(1.0, 1.5, 0.5), Blob::new(5.0, 1.5, 0.4)),
    ClusterPair::new(40, Blob::new(3.0, 1.5, 0.5), Blob::new(7.0, 1.5, 0.4)),
    ClusterPair::new(40, Blob::new(5.0, 1.5, 0.5), Blob::new(9.0, 1.5, 0.4)),
];

// dense, medium, sparse
const NON_IID_LAYOUT: [ClusterPair; 3] = [
    ClusterPair::new(70, Blob::new(1.0, 1.0, 0.35), Blob::new(5.0, 1.0, 0.2)),
    ClusterPair::new(40, Blob::new(3.0, 1.5, 0.5), Blob::new(7.0, 1.5, 0.3)),
    ClusterPair::new(15, Blob::new(5.0, 1.2, 0.75), Blob::new(9.0, 1.2, 0.4)),
];

pub fn cluster_layout(distribution: DataDistribution) -> &'static [ClusterPair] {
    match distribution {
        DataDistribution::Iid => &IID_LAYOUT,
        DataDistribution::NonIid => &NON_IID_LAYOUT,
    }
}

/// Generates both point clouds for `distribution`.
///
/// All traditional points come first, then all density-aware points. Both
/// halves have the same length.
pub fn generate_cluster_points(
    distribution: DataDistribution,
    jitter: &mut impl JitterSource,
) -> Vec<ClusterPoint> {
    let layout = cluster_layout(distribution);
    let per_method: usize = layout.iter().map(|pair| pair.points).sum();

    // Traditional points are collected straight into the output; the
    // density-aware half is appended once every pair has been sampled.
    let mut points = Vec::with_capacity(per_method * 2);
    let mut density_aware = Vec::with_capacity(per_method);
    for pair in layout {
        for _ in 0..pair.points {
            points.push(pair.traditional.sample(ClusterMethod::Traditional, jitter));
            density_aware.push(pair.density_aware.sample(ClusterMethod::DensityAware, jitter));
        }
    }
    points.extend(density_aware);

    tracing::debug!(
        distribution = distribution.key(),
        points = points.len(),
        "generated cluster points"
    );
    points
}

/// Axis extent of a scatter plot: the data extent padded on every side.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScatterBounds {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
}

impl ScatterBounds {
    pub const PADDING: f64 = 0.5;

    pub fn from_points(points: &[ClusterPoint]) -> Option<Self> {
        let first = points.first()?;
        let raw = points.iter().fold(
            Self {
                min_x: first.x,
                max_x: first.x,
                min_y: first.y,
                max_y: first.y,
            },
            |acc, point| Self {
                min_x: acc.min_x.min(point.x),
                max_x: acc.max_x.max(point.x),
                min_y: acc.min_y.min(point.y),
                max_y: acc.max_y.max(point.y),
            },
        );
        Some(Self {
            min_x: raw.min_x - Self::PADDING,
            max_x: raw.max_x + Self::PADDING,
            min_y: raw.min_y - Self::PADDING,
            max_y: raw.max_y + Self::PADDING,
        })
    }
}

#[cfg(test)]
#[path = "tests/clusters_tests.rs"]
mod tests;
