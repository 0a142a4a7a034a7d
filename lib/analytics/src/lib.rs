//! # schoolscope Analytics
//!
//! Query engines over the schoolscope record store.
//!
//! This crate provides the analytical core:
//!
//! - [`filter`] - AND-composed predicate filtering of school records
//! - [`sort`] - Stable, deterministic ordering with missing-last semantics
//! - [`rank`] - Competition ranking over any metric
//! - [`aggregate`] - Grouped means and counts in first-seen order
//! - [`stats`] - Simpson diversity index and Pearson correlation
//! - [`district`] - Named district-level summary analyses
//!
//! Every operation is a pure function over `&Store` or school slices:
//! nothing here mutates, blocks or performs I/O, so concurrent callers
//! need no coordination.
//!
//! ## Example
//!
//! ```rust
//! use schoolscope_analytics::{filter::Predicate, rank::rank, sort::{sort_by, Direction, SortKey}};
//! use schoolscope_model::{sample, Metric, School, Store};
//!
//! let data = sample::generate(&sample::SampleConfig { seed: 1, schools: 8 });
//! let store = Store::load(data.schools, data.demographics, data.programs, data.reviews).unwrap();
//!
//! let schools: Vec<&School> = store.schools().iter().collect();
//! let good = schoolscope_analytics::filter::filter(&schools, &[Predicate::MinOverallRating(4.0)]);
//! let ordered = sort_by(&good, SortKey::OverallRating, Direction::Descending);
//! let ranked = rank(&ordered, Metric::OverallRating);
//! assert_eq!(ranked.len(), ordered.len());
//! ```

pub mod aggregate;
pub mod district;
pub mod filter;
pub mod rank;
pub mod sort;
pub mod stats;

pub use aggregate::{group_count, group_mean};
pub use district::{
    district_overview, ethnicity_by_neighborhood, performance_by_category,
    program_counts_by_category, program_counts_by_school, review_summary, CategoryPerformance,
    DistrictOverview, ReviewSummary,
};
pub use filter::{filter, Predicate};
pub use rank::rank;
pub use sort::{sort_by, Direction, SortKey};
pub use stats::{
    diversity_index, metric_correlation, most_diverse, pearson, StatsError, StatsResult,
};
