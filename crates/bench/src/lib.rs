use std::time::Duration;

use criterion::BenchmarkGroup;
use criterion::measurement::Measurement;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const SMALL_RUNTIME_SAMPLE_SIZE: usize = 15;
const SMALL_RUNTIME_WARM_UP_MS: u64 = 100;
const SMALL_RUNTIME_MEASURE_MS: u64 = 200;
const MEDIUM_RUNTIME_SAMPLE_SIZE: usize = 15;
const MEDIUM_RUNTIME_WARM_UP_MS: u64 = 500;
const MEDIUM_RUNTIME_MEASURE_MS: u64 = 1000;
const LARGE_RUNTIME_SAMPLE_SIZE: usize = 10;
const LARGE_RUNTIME_WARM_UP_MS: u64 = 800;
const LARGE_RUNTIME_MEASURE_MS: u64 = 1500;
const RNG_SEED: u64 = 0x5EED_2026;

pub const SIZES: [usize; 4] = [1_024, 4_096, 16_384, 65_536];
pub const VALUE_RANGE: std::ops::RangeInclusive<i64> = -1_000_000_000..=1_000_000_000;

pub fn apply_small_runtime_config<M: Measurement>(group: &mut BenchmarkGroup<'_, M>) {
    group.sample_size(SMALL_RUNTIME_SAMPLE_SIZE);
    group.warm_up_time(Duration::from_millis(SMALL_RUNTIME_WARM_UP_MS));
    group.measurement_time(Duration::from_millis(SMALL_RUNTIME_MEASURE_MS));
}

pub fn apply_medium_runtime_config<M: Measurement>(group: &mut BenchmarkGroup<'_, M>) {
    group.sample_size(MEDIUM_RUNTIME_SAMPLE_SIZE);
    group.warm_up_time(Duration::from_millis(MEDIUM_RUNTIME_WARM_UP_MS));
    group.measurement_time(Duration::from_millis(MEDIUM_RUNTIME_MEASURE_MS));
}

pub fn apply_large_runtime_config<M: Measurement>(group: &mut BenchmarkGroup<'_, M>) {
    group.sample_size(LARGE_RUNTIME_SAMPLE_SIZE);
    group.warm_up_time(Duration::from_millis(LARGE_RUNTIME_WARM_UP_MS));
    group.measurement_time(Duration::from_millis(LARGE_RUNTIME_MEASURE_MS));
}

pub fn apply_runtime_config_for_size<M: Measurement>(
    group: &mut BenchmarkGroup<'_, M>,
    size: usize,
) {
    if size <= 4_096 {
        apply_small_runtime_config(group);
    } else if size <= 16_384 {
        apply_medium_runtime_config(group);
    } else {
        apply_large_runtime_config(group);
    }
}

pub fn default_rng() -> StdRng {
    StdRng::seed_from_u64(RNG_SEED)
}

pub fn random_values<R: Rng + ?Sized>(rng: &mut R, n: usize) -> Vec<i64> {
    let mut values = Vec::with_capacity(n);
    for _ in 0..n {
        values.push(rng.random_range(VALUE_RANGE));
    }
    values
}

/// Inclusive query ranges `(lo, hi)` over `[0, n)`.
pub fn random_ranges<R: Rng + ?Sized>(rng: &mut R, n: usize, q: usize) -> Vec<(usize, usize)> {
    let mut ranges = Vec::with_capacity(q);
    for _ in 0..q {
        let lo = rng.random_range(0..n);
        let hi = rng.random_range(lo..n);
        ranges.push((lo, hi));
    }
    ranges
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum TreeShape {
    Random,
    Path,
    Star,
    Caterpillar,
}

impl TreeShape {
    pub const ALL: [TreeShape; 4] = [Self::Random, Self::Path, Self::Star, Self::Caterpillar];

    pub fn label(self) -> &'static str {
        match self {
            Self::Random => "random",
            Self::Path => "path",
            Self::Star => "star",
            Self::Caterpillar => "caterpillar",
        }
    }
}

/// Edges of a tree on node ids `1..=n`, each listed as `(child, parent)`.
pub fn tree_edges<R: Rng + ?Sized>(rng: &mut R, shape: TreeShape, n: usize) -> Vec<(usize, usize)> {
    if n <= 1 {
        return Vec::new();
    }
    let spine = (n / 2).max(1);
    let mut edges = Vec::with_capacity(n - 1);
    for v in 2..=n {
        let parent = match shape {
            TreeShape::Random => rng.random_range(1..v),
            TreeShape::Path => v - 1,
            TreeShape::Star => 1,
            TreeShape::Caterpillar if v <= spine => v - 1,
            TreeShape::Caterpillar => rng.random_range(1..=spine),
        };
        edges.push((v, parent));
    }
    edges
}
