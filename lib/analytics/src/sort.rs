//! Stable, deterministic school ordering.
//!
//! The listed sort keys alone do not give a total order, so ties are
//! broken by school id after the key comparison. Missing numeric values
//! sort last regardless of direction.

use schoolscope_model::{Metric, School};
use std::cmp::Ordering;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    OverallRating,
    Name,
    TotalStudents,
    StudentTeacherRatio,
    /// Sort by any metric; schools where it is not applicable sort last
    Metric(Metric),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Ascending,
    Descending,
}

impl SortKey {
    fn numeric(self, school: &School) -> Option<f64> {
        match self {
            SortKey::OverallRating => Some(school.overall_rating),
            SortKey::TotalStudents => Some(f64::from(school.total_students)),
            SortKey::StudentTeacherRatio => Some(school.student_teacher_ratio),
            SortKey::Metric(metric) => metric.value(school),
            SortKey::Name => None,
        }
    }
}

/// Sort schools by key and direction into a new vector.
///
/// Stable with a (key, id) total order, so sorting the same input twice
/// yields identical output including tie order.
pub fn sort_by<'a>(schools: &[&'a School], key: SortKey, direction: Direction) -> Vec<&'a School> {
    let mut sorted: Vec<&School> = schools.to_vec();
    sorted.sort_by(|a, b| compare(a, b, key, direction).then_with(|| a.id.cmp(&b.id)));
    sorted
}

fn compare(a: &School, b: &School, key: SortKey, direction: Direction) -> Ordering {
    if key == SortKey::Name {
        let ordering = a.name.cmp(&b.name);
        return match direction {
            Direction::Ascending => ordering,
            Direction::Descending => ordering.reverse(),
        };
    }

    match (key.numeric(a), key.numeric(b)) {
        (Some(x), Some(y)) => {
            let ordering = x.total_cmp(&y);
            match direction {
                Direction::Ascending => ordering,
                Direction::Descending => ordering.reverse(),
            }
        }
        // Missing values sort last in either direction
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
