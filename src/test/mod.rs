//! Shared fixtures for tests.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::kdtree::distance::sq_euclidean;

/// 100 points with small integer coordinates in `[0, 100)`.
pub(crate) fn points() -> Vec<[f64; 2]> {
    #[rustfmt::skip]
    let coords: [[i32; 2]; 100] = [
        [54, 1], [97, 21], [65, 35], [33, 54], [95, 39], [54, 3], [53, 54], [84, 72],
        [33, 34], [43, 15], [52, 83], [81, 23], [1, 61], [38, 74], [11, 91], [24, 56],
        [90, 31], [25, 57], [46, 61], [29, 69], [49, 60], [4, 98], [71, 15], [60, 25],
        [38, 84], [52, 38], [94, 51], [13, 25], [77, 73], [88, 87], [6, 27], [58, 22],
        [53, 28], [27, 91], [96, 98], [93, 14], [22, 93], [45, 94], [18, 28], [35, 15],
        [19, 81], [20, 81], [67, 53], [43, 3], [47, 66], [48, 34], [46, 12], [32, 38],
        [43, 12], [39, 94], [88, 62], [66, 14], [84, 30], [72, 81], [41, 92], [26, 4],
        [6, 76], [47, 21], [57, 70], [71, 82], [50, 68], [96, 18], [40, 31], [78, 53],
        [71, 90], [32, 14], [55, 6], [32, 88], [62, 32], [21, 67], [73, 81], [44, 64],
        [29, 50], [70, 5], [6, 22], [68, 3], [11, 23], [20, 42], [21, 73], [63, 86],
        [9, 40], [99, 2], [99, 76], [56, 77], [83, 6], [21, 72], [78, 30], [75, 53],
        [41, 11], [95, 20], [30, 38], [96, 82], [65, 48], [33, 18], [87, 28], [10, 10],
        [40, 34], [10, 20], [47, 29], [46, 78],
    ];

    coords
        .into_iter()
        .map(|[x, y]| [x.into(), y.into()])
        .collect()
}

/// `count` points with `dims` coordinates, uniformly drawn from `[-range, range)`.
pub(crate) fn random_points(seed: u64, count: usize, dims: usize, range: f64) -> Vec<Vec<f64>> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|_| (0..dims).map(|_| rng.gen_range(-range..range)).collect())
        .collect()
}

/// Like [`random_points`] but snapped to the integer grid, which produces plenty of shared
/// coordinates, duplicate keys and equidistant candidates.
pub(crate) fn random_grid_points(
    seed: u64,
    count: usize,
    dims: usize,
    range: i32,
) -> Vec<Vec<f64>> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|_| {
            (0..dims)
                .map(|_| rng.gen_range(-range..range).into())
                .collect()
        })
        .collect()
}

/// Linear scan for the smallest squared distance from `query` to any of `points`.
pub(crate) fn brute_force_nearest(points: &[Vec<f64>], query: &[f64]) -> f64 {
    points
        .iter()
        .map(|point| sq_euclidean(point, query))
        .fold(f64::INFINITY, f64::min)
}
