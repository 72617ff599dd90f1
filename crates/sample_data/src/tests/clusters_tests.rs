use rand::{rngs::StdRng, SeedableRng};

use super::*;
use crate::jitter::Centered;

fn count(points: &[ClusterPoint], method: ClusterMethod) -> usize {
    points.iter().filter(|p| p.method == method).count()
}

#[test]
fn iid_produces_three_even_pairs() {
    let mut rng = StdRng::seed_from_u64(1);
    let points = generate_cluster_points(DataDistribution::Iid, &mut rng);
    assert_eq!(points.len(), 240);
    assert_eq!(count(&points, ClusterMethod::Traditional), 120);
    assert_eq!(count(&points, ClusterMethod::DensityAware), 120);
}

#[test]
fn non_iid_produces_dense_medium_sparse_pairs() {
    let mut rng = StdRng::seed_from_u64(2);
    let points = generate_cluster_points(DataDistribution::NonIid, &mut rng);
    assert_eq!(points.len(), 250);
    assert_eq!(count(&points, ClusterMethod::Traditional), 125);
    assert_eq!(count(&points, ClusterMethod::DensityAware), 125);

    let sizes: Vec<usize> = cluster_layout(DataDistribution::NonIid)
        .iter()
        .map(|pair| pair.points)
        .collect();
    assert_eq!(sizes, vec![70, 40, 15]);
}

#[test]
fn traditional_points_precede_density_aware_points() {
    let points = generate_cluster_points(DataDistribution::NonIid, &mut Centered);
    let split = points
        .iter()
        .position(|p| p.method == ClusterMethod::DensityAware)
        .expect("density-aware half");
    assert_eq!(split, 125);
    assert!(points[split..]
        .iter()
        .all(|p| p.method == ClusterMethod::DensityAware));
}

#[test]
fn centered_jitter_lands_on_layout_centers() {
    let points = generate_cluster_points(DataDistribution::Iid, &mut Centered);
    assert_eq!((points[0].x, points[0].y), (1.0, 1.5));
    assert_eq!((points[40].x, points[40].y), (3.0, 1.5));
    assert_eq!((points[80].x, points[80].y), (5.0, 1.5));
    assert_eq!((points[120].x, points[120].y), (5.0, 1.5));
    assert_eq!((points[239].x, points[239].y), (9.0, 1.5));
}

#[test]
fn centered_non_iid_jitter_lands_on_pair_centers() {
    let points = generate_cluster_points(DataDistribution::NonIid, &mut Centered);
    let at = |index: usize| (points[index].x, points[index].y, points[index].method);

    assert_eq!(at(0), (1.0, 1.0, ClusterMethod::Traditional));
    assert_eq!(at(70), (3.0, 1.5, ClusterMethod::Traditional));
    assert_eq!(at(110), (5.0, 1.2, ClusterMethod::Traditional));
    assert_eq!(at(124), (5.0, 1.2, ClusterMethod::Traditional));
    assert_eq!(at(125), (5.0, 1.0, ClusterMethod::DensityAware));
    assert_eq!(at(195), (7.0, 1.5, ClusterMethod::DensityAware));
    assert_eq!(at(235), (9.0, 1.2, ClusterMethod::DensityAware));
    assert_eq!(at(249), (9.0, 1.2, ClusterMethod::DensityAware));
}

#[test]
fn layouts_use_fixed_spreads() {
    let spreads = |distribution| -> Vec<(f64, f64)> {
        cluster_layout(distribution)
            .iter()
            .map(|pair| (pair.traditional.half_width, pair.density_aware.half_width))
            .collect()
    };
    assert_eq!(
        spreads(DataDistribution::Iid),
        vec![(0.5, 0.4), (0.5, 0.4), (0.5, 0.4)]
    );
    assert_eq!(
        spreads(DataDistribution::NonIid),
        vec![(0.35, 0.2), (0.5, 0.3), (0.75, 0.4)]
    );
}

#[test]
fn density_aware_blobs_sit_four_units_right_of_traditional() {
    for distribution in DataDistribution::ALL.iter().copied() {
        for pair in cluster_layout(distribution) {
            assert_eq!(pair.density_aware.center_x - pair.traditional.center_x, 4.0);
            assert_eq!(pair.density_aware.center_y, pair.traditional.center_y);
            assert!(pair.density_aware.half_width < pair.traditional.half_width);
        }
    }
}

#[test]
fn points_stay_within_their_blob_spread() {
    let mut rng = StdRng::seed_from_u64(3);
    for distribution in DataDistribution::ALL.iter().copied() {
        let points = generate_cluster_points(distribution, &mut rng);
        let layout = cluster_layout(distribution);
        let blobs = layout
            .iter()
            .flat_map(|pair| std::iter::repeat(pair.traditional).take(pair.points))
            .chain(
                layout
                    .iter()
                    .flat_map(|pair| std::iter::repeat(pair.density_aware).take(pair.points)),
            );

        for (point, blob) in points.iter().zip(blobs) {
            assert!((point.x - blob.center_x).abs() <= blob.half_width);
            assert!((point.y - blob.center_y).abs() <= blob.half_width);
        }
    }
}

#[test]
fn regeneration_draws_fresh_coordinates() {
    let mut rng = StdRng::seed_from_u64(4);
    let first = generate_cluster_points(DataDistribution::Iid, &mut rng);
    let second = generate_cluster_points(DataDistribution::Iid, &mut rng);
    assert_eq!(first.len(), second.len());
    assert_ne!(first, second);
}

#[test]
fn scatter_bounds_pad_data_extent() {
    let points = generate_cluster_points(DataDistribution::Iid, &mut Centered);
    let bounds = ScatterBounds::from_points(&points).expect("bounds");
    assert_eq!(
        bounds,
        ScatterBounds {
            min_x: 0.5,
            max_x: 9.5,
            min_y: 1.0,
            max_y: 2.0,
        }
    );
    assert_eq!(ScatterBounds::from_points(&[]), None);
}
