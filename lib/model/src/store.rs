//! Immutable-per-session record store.
//!
//! [`Store::load`] validates the four collections once, normalizes
//! demographic percentages eagerly, and then only ever hands out
//! read-only views. There is no mutation API: reloading data means
//! constructing a new `Store` and swapping the reference the caller
//! holds, which keeps concurrent readers coordination-free.

use crate::error::{Error, Result};
use crate::records::{DemographicEntry, ProgramEntry, ReviewEntry};
use crate::school::School;
use ahash::AHashMap;
use tracing::{debug, info};

/// Owns all four record collections for the duration of a session.
pub struct Store {
    schools: Vec<School>,
    demographics: Vec<DemographicEntry>,
    programs: Vec<ProgramEntry>,
    reviews: Vec<ReviewEntry>,
    by_id: AHashMap<u32, usize>,
}

impl Store {
    /// Validate and load the four record collections.
    ///
    /// Fails if any school id is duplicated, if any secondary record
    /// references an unknown school id, or if any school's demographic
    /// percentages sum to zero (normalization undefined). Demographic
    /// percentages are rescaled here so each school's entries sum to
    /// exactly 100; downstream consumers never re-normalize.
    pub fn load(
        schools: Vec<School>,
        mut demographics: Vec<DemographicEntry>,
        programs: Vec<ProgramEntry>,
        reviews: Vec<ReviewEntry>,
    ) -> Result<Self> {
        let mut by_id = AHashMap::with_capacity(schools.len());
        for (idx, school) in schools.iter().enumerate() {
            if by_id.insert(school.id, idx).is_some() {
                return Err(Error::DuplicateSchoolId(school.id));
            }
        }

        for entry in &demographics {
            if !by_id.contains_key(&entry.school_id) {
                return Err(Error::UnknownSchoolId {
                    dataset: "demographics",
                    id: entry.school_id,
                });
            }
        }
        for entry in &programs {
            if !by_id.contains_key(&entry.school_id) {
                return Err(Error::UnknownSchoolId {
                    dataset: "programs",
                    id: entry.school_id,
                });
            }
        }
        for entry in &reviews {
            if !by_id.contains_key(&entry.school_id) {
                return Err(Error::UnknownSchoolId {
                    dataset: "reviews",
                    id: entry.school_id,
                });
            }
        }

        normalize_demographics(&mut demographics)?;

        info!(
            schools = schools.len(),
            demographics = demographics.len(),
            programs = programs.len(),
            reviews = reviews.len(),
            "record store loaded"
        );

        Ok(Self {
            schools,
            demographics,
            programs,
            reviews,
            by_id,
        })
    }

    /// Look up a school by id
    pub fn by_id(&self, id: u32) -> Result<&School> {
        self.by_id
            .get(&id)
            .map(|&idx| &self.schools[idx])
            .ok_or(Error::SchoolNotFound(id))
    }

    pub fn contains(&self, id: u32) -> bool {
        self.by_id.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.schools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.schools.is_empty()
    }

    pub fn schools(&self) -> &[School] {
        &self.schools
    }

    pub fn demographics(&self) -> &[DemographicEntry] {
        &self.demographics
    }

    pub fn programs(&self) -> &[ProgramEntry] {
        &self.programs
    }

    pub fn reviews(&self) -> &[ReviewEntry] {
        &self.reviews
    }

    /// Demographic entries for one school, in load order
    pub fn demographics_for(&self, id: u32) -> Vec<&DemographicEntry> {
        self.demographics
            .iter()
            .filter(|e| e.school_id == id)
            .collect()
    }

    /// Program entries for one school, in load order
    pub fn programs_for(&self, id: u32) -> Vec<&ProgramEntry> {
        self.programs.iter().filter(|e| e.school_id == id).collect()
    }

    /// Review entries for one school, in load order
    pub fn reviews_for(&self, id: u32) -> Vec<&ReviewEntry> {
        self.reviews.iter().filter(|e| e.school_id == id).collect()
    }
}

/// Rescale each school's demographic percentages to sum to exactly 100.
///
/// Errors on a zero (or vanishing) group sum, where normalization is
/// undefined. Schools without demographic entries are untouched.
fn normalize_demographics(demographics: &mut [DemographicEntry]) -> Result<()> {
    let mut sums: AHashMap<u32, f64> = AHashMap::new();
    for entry in demographics.iter() {
        *sums.entry(entry.school_id).or_insert(0.0) += entry.percentage;
    }

    for (&school_id, &sum) in &sums {
        if sum.abs() < f64::EPSILON {
            return Err(Error::ZeroDemographicSum(school_id));
        }
    }

    let mut rescaled = 0usize;
    for entry in demographics.iter_mut() {
        let sum = sums[&entry.school_id];
        if (sum - 100.0).abs() > 1e-9 {
            entry.percentage *= 100.0 / sum;
            rescaled += 1;
        }
    }
    if rescaled > 0 {
        debug!(entries = rescaled, "normalized demographic percentages");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn school(id: u32, name: &str) -> School {
        School {
            id,
            name: name.to_string(),
            ..Default::default()
        }
    }

    fn demo(school_id: u32, ethnicity: &str, percentage: f64) -> DemographicEntry {
        DemographicEntry {
            school_id,
            ethnicity: ethnicity.to_string(),
            percentage,
        }
    }

    #[test]
    fn test_load_and_lookup() {
        let store = Store::load(
            vec![school(1, "Lincoln Elementary"), school(2, "King High")],
            vec![],
            vec![],
            vec![],
        )
        .unwrap();

        assert_eq!(store.len(), 2);
        assert_eq!(store.by_id(2).unwrap().name, "King High");
        assert!(matches!(store.by_id(99), Err(Error::SchoolNotFound(99))));
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let result = Store::load(
            vec![school(1, "A"), school(1, "B")],
            vec![],
            vec![],
            vec![],
        );
        assert!(matches!(result, Err(Error::DuplicateSchoolId(1))));
    }

    #[test]
    fn test_dangling_reference_rejected() {
        let result = Store::load(
            vec![school(1, "A")],
            vec![demo(2, "White", 100.0)],
            vec![],
            vec![],
        );
        assert!(matches!(
            result,
            Err(Error::UnknownSchoolId { dataset: "demographics", id: 2 })
        ));
    }

    #[test]
    fn test_demographics_normalized_to_100() {
        let store = Store::load(
            vec![school(1, "A")],
            vec![demo(1, "White", 20.0), demo(1, "Hispanic", 20.0)],
            vec![],
            vec![],
        )
        .unwrap();

        let entries = store.demographics_for(1);
        let total: f64 = entries.iter().map(|e| e.percentage).sum();
        assert!((total - 100.0).abs() < 1e-6);
        assert!((entries[0].percentage - 50.0).abs() < 1e-6);
        assert!((entries[1].percentage - 50.0).abs() < 1e-6);
    }

    #[test]
    fn test_zero_sum_group_rejected() {
        let result = Store::load(
            vec![school(1, "A")],
            vec![demo(1, "White", 0.0), demo(1, "Asian", 0.0)],
            vec![],
            vec![],
        );
        assert!(matches!(result, Err(Error::ZeroDemographicSum(1))));
    }

    #[test]
    fn test_school_without_secondary_records_is_valid() {
        let store = Store::load(vec![school(1, "A")], vec![], vec![], vec![]).unwrap();
        assert!(store.demographics_for(1).is_empty());
        assert!(store.programs_for(1).is_empty());
        assert!(store.reviews_for(1).is_empty());
    }
}
