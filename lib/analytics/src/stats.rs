//! Diversity index and correlation statistics.
//!
//! The two operations here are the only places where degenerate input is
//! an error: an empty or zero-sum distribution has no diversity index,
//! and a correlation over fewer than two valid pairs (or a zero-variance
//! series) is undefined. Errors are local to the query and never affect
//! other computations.

use schoolscope_model::{Metric, School, Store};
use thiserror::Error;

pub type StatsResult<T> = std::result::Result<T, StatsError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StatsError {
    #[error("Distribution is empty or sums to zero")]
    InvalidDistribution,

    #[error("Correlation needs at least 2 valid pairs, got {0}")]
    InsufficientData(usize),

    #[error("Correlation undefined for a zero-variance series")]
    ZeroVariance,
}

/// Simpson-style diversity index: `1 - Σ (p_i / total)²`.
///
/// The input is normalized by its own sum, so both raw and
/// already-normalized percentage distributions are accepted.
/// Range is [0, 1 - 1/n]; a single-category distribution scores 0.
pub fn diversity_index(percentages: &[f64]) -> StatsResult<f64> {
    if percentages.is_empty() {
        return Err(StatsError::InvalidDistribution);
    }
    let total: f64 = percentages.iter().sum();
    if total.abs() < f64::EPSILON {
        return Err(StatsError::InvalidDistribution);
    }

    let squared_fractions: f64 = percentages.iter().map(|p| (p / total).powi(2)).sum();
    Ok(1.0 - squared_fractions)
}

/// The school with the highest diversity index among those with at least
/// two demographic entries. `None` when no school qualifies; callers
/// must not treat that as an error.
pub fn most_diverse(store: &Store) -> Option<&School> {
    let mut best: Option<(&School, f64)> = None;

    for school in store.schools() {
        let entries = store.demographics_for(school.id);
        if entries.len() < 2 {
            continue;
        }
        let percentages: Vec<f64> = entries.iter().map(|e| e.percentage).collect();
        let Ok(index) = diversity_index(&percentages) else {
            continue;
        };
        // Strict comparison keeps the first-seen school on exact ties
        match best {
            Some((_, best_index)) if index <= best_index => {}
            _ => best = Some((school, index)),
        }
    }

    best.map(|(school, _)| school)
}

/// Sample Pearson correlation with null-pair exclusion.
///
/// Any index where either value is `None` is dropped from both series
/// before the closed-form coefficient is computed.
pub fn pearson(xs: &[Option<f64>], ys: &[Option<f64>]) -> StatsResult<f64> {
    let pairs: Vec<(f64, f64)> = xs
        .iter()
        .zip(ys.iter())
        .filter_map(|(x, y)| x.zip(*y))
        .collect();

    let n = pairs.len();
    if n < 2 {
        return Err(StatsError::InsufficientData(n));
    }

    let nf = n as f64;
    let mean_x: f64 = pairs.iter().map(|(x, _)| x).sum::<f64>() / nf;
    let mean_y: f64 = pairs.iter().map(|(_, y)| y).sum::<f64>() / nf;

    let mut covariance = 0.0;
    let mut var_x = 0.0;
    let mut var_y = 0.0;
    for (x, y) in &pairs {
        let dx = x - mean_x;
        let dy = y - mean_y;
        covariance += dx * dy;
        var_x += dx * dx;
        var_y += dy * dy;
    }

    if var_x.abs() < f64::EPSILON || var_y.abs() < f64::EPSILON {
        return Err(StatsError::ZeroVariance);
    }

    Ok(covariance / (var_x * var_y).sqrt())
}

/// Correlation between two metrics across every school in the store.
///
/// Schools where either metric is not applicable are excluded pairwise,
/// so e.g. poverty-vs-graduation only considers high schools.
pub fn metric_correlation(store: &Store, x: Metric, y: Metric) -> StatsResult<f64> {
    let xs: Vec<Option<f64>> = store.schools().iter().map(|s| x.value(s)).collect();
    let ys: Vec<Option<f64>> = store.schools().iter().map(|s| y.value(s)).collect();
    pearson(&xs, &ys)
}
