//! Predicate-based school filtering.
//!
//! Predicates compose by logical AND; an empty predicate list returns
//! every school unchanged, in original order.

use ahash::AHashSet;
use schoolscope_model::{School, SchoolCategory};

/// One filter condition over a school record
#[derive(Debug, Clone)]
pub enum Predicate {
    CategoryEquals(SchoolCategory),
    NeighborhoodEquals(String),
    MinOverallRating(f64),
    IdIn(AHashSet<u32>),
    IdNotIn(AHashSet<u32>),
}

impl Predicate {
    pub fn matches(&self, school: &School) -> bool {
        match self {
            Predicate::CategoryEquals(category) => school.category == *category,
            Predicate::NeighborhoodEquals(neighborhood) => school.neighborhood == *neighborhood,
            Predicate::MinOverallRating(min) => school.overall_rating >= *min,
            Predicate::IdIn(ids) => ids.contains(&school.id),
            Predicate::IdNotIn(ids) => !ids.contains(&school.id),
        }
    }
}

/// Keep schools matching every predicate, preserving input order.
pub fn filter<'a>(schools: &[&'a School], predicates: &[Predicate]) -> Vec<&'a School> {
    schools
        .iter()
        .copied()
        .filter(|school| predicates.iter().all(|p| p.matches(school)))
        .collect()
}
