//! # schoolscope
//!
//! An analytical query and comparison engine for school records.
//!
//! schoolscope filters, sorts, ranks, aggregates and statistically
//! compares school records across four linked datasets: core school
//! facts, demographic breakdowns, extracurricular programs and parent
//! reviews. It is a pure computation library: no I/O, no UI, no
//! sessions — callers hand it four record collections and consume
//! typed query results.
//!
//! ## Quick Start
//!
//! ```rust
//! use schoolscope::prelude::*;
//!
//! // One possible data source: the built-in sample generator
//! let data = sample::generate(&sample::SampleConfig { seed: 42, schools: 10 });
//! let store = Store::load(data.schools, data.demographics, data.programs, data.reviews).unwrap();
//!
//! // Rank every school by overall rating (competition ranking)
//! let schools: Vec<&School> = store.schools().iter().collect();
//! let ranked = rank(&schools, Metric::OverallRating);
//!
//! // Compare the top two side by side and export as CSV
//! let ids: Vec<u32> = ranked.iter().take(2).map(|(_, s)| s.id).collect();
//! let table = build_metrics_table(&store, &ids, &default_comparison_specs()).unwrap();
//! println!("{}", table.to_csv());
//! ```
//!
//! ## Crate Structure
//!
//! schoolscope is composed of several crates:
//!
//! - [`schoolscope-model`](https://docs.rs/schoolscope-model) - Record types, validation, immutable store, sample generator
//! - [`schoolscope-analytics`](https://docs.rs/schoolscope-analytics) - Filter, sort, rank, aggregate, diversity and correlation engines
//! - [`schoolscope-report`](https://docs.rs/schoolscope-report) - Comparison matrices, formatting and CSV export
//!
//! ## Concurrency
//!
//! The store is immutable after `load` and every engine function is a
//! pure read, so independent queries may run concurrently against one
//! store with no coordination. Reloading data means building a new
//! store and swapping the reference the application holds.

// Re-export model types
pub use schoolscope_model::{
    sample, BetterDirection, DemographicEntry, DisplayClass, Error, GradeBand, Metric,
    ProgramCategory, ProgramEntry, Result, ReviewEntry, ReviewerKind, School, SchoolCategory,
    Store,
};

// Re-export analytics
pub use schoolscope_analytics::{
    district_overview, diversity_index, filter, group_count, group_mean, metric_correlation,
    most_diverse, pearson, performance_by_category, rank, review_summary, sort_by, Direction,
    DistrictOverview, Predicate, SortKey, StatsError,
};

// Re-export report surface
pub use schoolscope_report::{
    build_demographic_comparison, build_metrics_table, build_program_comparison,
    default_comparison_specs, DemographicRow, MetricSpec, MetricsTable, ProgramMatrix,
};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        build_demographic_comparison, build_metrics_table, build_program_comparison,
        default_comparison_specs, district_overview, diversity_index, filter, metric_correlation,
        most_diverse, pearson, rank, sample, sort_by, BetterDirection, Direction, DisplayClass,
        Error, Metric, MetricSpec, MetricsTable, Predicate, Result, School, SchoolCategory,
        SortKey, StatsError, Store,
    };
}
