//! # schoolscope Report
//!
//! Comparison matrices and export surfaces for schoolscope.
//!
//! This crate assembles presentation-ready output from the record store:
//!
//! - [`MetricsTable`] - Metric x school matrix with formatted cells
//! - [`build_demographic_comparison`] - Long-form demographic records
//! - [`build_program_comparison`] - Program-category count matrix
//! - [`format`] - Display-class value formatting ("4.2/5", "87.3%", "1,234")
//! - CSV export of the metrics table for delimited-text consumers
//!
//! All builders are pure with respect to the store; the set of schools
//! being compared is caller state passed in on each call.
//!
//! ## Example
//!
//! ```rust
//! use schoolscope_model::{sample, Store};
//! use schoolscope_report::{build_metrics_table, default_comparison_specs};
//!
//! let data = sample::generate(&sample::SampleConfig { seed: 1, schools: 4 });
//! let store = Store::load(data.schools, data.demographics, data.programs, data.reviews).unwrap();
//!
//! let ids: Vec<u32> = store.schools().iter().take(2).map(|s| s.id).collect();
//! let table = build_metrics_table(&store, &ids, &default_comparison_specs()).unwrap();
//! let csv = table.to_csv();
//! assert!(csv.starts_with("Metric,"));
//! ```

pub mod compare;
pub mod export;
pub mod format;

pub use compare::{
    build_demographic_comparison, build_metrics_table, build_program_comparison,
    default_comparison_specs, DemographicRow, MetricRow, MetricSpec, MetricsTable, ProgramMatrix,
    NA,
};
pub use format::{format_optional, format_value, NOT_APPLICABLE};
