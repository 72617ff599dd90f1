use shared::{datasets::LearningRatePoint, domain::DataDistribution};

pub const SERIES_LEN: u32 = 50;
pub const INITIAL_RATE: f64 = 0.1;
pub const DECAY_PER_ITERATION: f64 = 0.98;
pub const DAMPING: f64 = 0.5;

/// Upper bound of the learning-rate chart's y axis.
pub const RATE_AXIS_MAX: f64 = 0.12;

/// Synthetic local/global density ratio; oscillates around 1.
pub fn density_ratio(distribution: DataDistribution, iteration: u32) -> f64 {
    let i = f64::from(iteration);
    match distribution {
        DataDistribution::Iid => (i / 10.0).sin() * 0.1 + 1.0,
        DataDistribution::NonIid => (i / 5.0).sin() * 0.4 + 1.0,
    }
}

pub fn base_rate(iteration: u32) -> f64 {
    INITIAL_RATE * DECAY_PER_ITERATION.powf(f64::from(iteration))
}

/// Damps `base_rate` by how far the density ratio strays from 1. Never exceeds
/// `base_rate`.
pub fn adapted_rate(base_rate: f64, density_ratio: f64) -> f64 {
    base_rate * (-DAMPING * (1.0 - density_ratio).abs()).exp()
}

pub fn generate_learning_rate_series(distribution: DataDistribution) -> Vec<LearningRatePoint> {
    (0..SERIES_LEN)
        .map(|iteration| {
            let density_ratio = density_ratio(distribution, iteration);
            let base_rate = base_rate(iteration);
            LearningRatePoint {
                iteration,
                density_ratio,
                base_rate,
                adapted_rate: adapted_rate(base_rate, density_ratio),
            }
        })
        .collect()
}
