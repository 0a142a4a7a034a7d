//! # schoolscope Model
//!
//! Record types, validation and the immutable store for schoolscope.
//!
//! This crate provides the data layer the analytical engines operate on:
//!
//! - [`School`] - Core school record with ratings and grade-dependent metrics
//! - [`DemographicEntry`], [`ProgramEntry`], [`ReviewEntry`] - Linked record types
//! - [`Metric`] - Named, comparable numeric attributes with display semantics
//! - [`Store`] - Immutable-per-session container validated at load time
//! - [`sample`] - Seedable generator producing realistic record collections
//!
//! ## Example
//!
//! ```rust
//! use schoolscope_model::{sample, Metric, Store};
//!
//! let data = sample::generate(&sample::SampleConfig { seed: 1, schools: 5 });
//! let store = Store::load(data.schools, data.demographics, data.programs, data.reviews).unwrap();
//!
//! let first = &store.schools()[0];
//! let rating = Metric::OverallRating.value(first);
//! assert!(rating.is_some());
//! ```

pub mod error;
pub mod metric;
pub mod records;
pub mod sample;
pub mod school;
pub mod store;

pub use error::{Error, Result};
pub use metric::{BetterDirection, DisplayClass, Metric};
pub use records::{
    CostTier, DemographicEntry, EnrollmentMethod, GradeBand, MeetingTime, ProgramCategory,
    ProgramEntry, ReviewEntry, ReviewerKind,
};
pub use school::{School, SchoolCategory};
pub use store::Store;
