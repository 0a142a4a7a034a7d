//! District-level summary analyses.
//!
//! Named aggregations built on [`aggregate`](crate::aggregate): performance
//! by school category, demographic patterns by neighborhood, program
//! counts, review summaries and the district overview strip.

use crate::aggregate::{group_count, group_mean};
use schoolscope_model::{Metric, ProgramCategory, Result, SchoolCategory, Store};
use serde::Serialize;

/// Mean performance figures for one school category
#[derive(Debug, Clone, Serialize)]
pub struct CategoryPerformance {
    pub category: SchoolCategory,
    pub mean_math: Option<f64>,
    pub mean_reading: Option<f64>,
    pub mean_rating: Option<f64>,
    pub schools: usize,
}

/// Per-category means of math %, reading % and overall rating, with the
/// number of schools in each category. First-seen category order.
pub fn performance_by_category(store: &Store) -> Vec<CategoryPerformance> {
    let schools = store.schools();
    let math = group_mean(schools, |s| s.category, |s| Some(s.math_proficiency));
    let reading = group_mean(schools, |s| s.category, |s| Some(s.reading_proficiency));
    let rating = group_mean(schools, |s| s.category, |s| Some(s.overall_rating));
    let counts = group_count(schools, |s| s.category);

    // The four passes iterate the same records, so group order matches
    math.into_iter()
        .zip(reading)
        .zip(rating)
        .zip(counts)
        .map(
            |(((( category, mean_math), (_, mean_reading)), (_, mean_rating)), (_, schools))| {
                CategoryPerformance {
                    category,
                    mean_math,
                    mean_reading,
                    mean_rating,
                    schools,
                }
            },
        )
        .collect()
}

/// Mean demographic percentage per (neighborhood, ethnicity) pair, in
/// first-seen order. Suitable for grouped charting.
pub fn ethnicity_by_neighborhood(store: &Store) -> Vec<(String, String, Option<f64>)> {
    let rows: Vec<(String, String, f64)> = store
        .demographics()
        .iter()
        .filter_map(|entry| {
            store.by_id(entry.school_id).ok().map(|school| {
                (
                    school.neighborhood.clone(),
                    entry.ethnicity.clone(),
                    entry.percentage,
                )
            })
        })
        .collect();

    group_mean(
        &rows,
        |(neighborhood, ethnicity, _)| (neighborhood.clone(), ethnicity.clone()),
        |(_, _, percentage)| Some(*percentage),
    )
    .into_iter()
    .map(|((neighborhood, ethnicity), mean)| (neighborhood, ethnicity, mean))
    .collect()
}

/// Number of program entries per school id, in first-seen order.
/// Schools with zero programs are absent, not zero-count.
pub fn program_counts_by_school(store: &Store) -> Vec<(u32, usize)> {
    group_count(store.programs(), |p| p.school_id)
}

/// Number of program entries per program category, in first-seen order.
pub fn program_counts_by_category(store: &Store) -> Vec<(ProgramCategory, usize)> {
    group_count(store.programs(), |p| p.category)
}

/// Aggregate view of one school's parent reviews
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReviewSummary {
    pub reviews: usize,
    /// None when the school has no reviews
    pub mean_rating: Option<f64>,
    pub helpful_votes: u32,
}

/// Summarize reviews for one school. A school with zero reviews yields
/// an empty summary, not an error.
pub fn review_summary(store: &Store, school_id: u32) -> Result<ReviewSummary> {
    store.by_id(school_id)?;
    let reviews = store.reviews_for(school_id);

    let mean_rating = (!reviews.is_empty()).then(|| {
        reviews.iter().map(|r| f64::from(r.rating)).sum::<f64>() / reviews.len() as f64
    });
    let helpful_votes = reviews.iter().map(|r| r.helpful_votes).sum();

    Ok(ReviewSummary {
        reviews: reviews.len(),
        mean_rating,
        helpful_votes,
    })
}

/// District-wide headline numbers
#[derive(Debug, Clone, Serialize)]
pub struct DistrictOverview {
    pub schools: usize,
    pub mean_overall_rating: Option<f64>,
    pub mean_enrollment: Option<f64>,
    /// Mean over schools that report one; None when no school does
    pub mean_graduation_rate: Option<f64>,
}

pub fn district_overview(store: &Store) -> DistrictOverview {
    let schools = store.schools();

    fn mean(schools: &[schoolscope_model::School], metric: Metric) -> Option<f64> {
        let values: Vec<f64> = schools.iter().filter_map(|s| metric.value(s)).collect();
        (!values.is_empty()).then(|| values.iter().sum::<f64>() / values.len() as f64)
    }

    DistrictOverview {
        schools: schools.len(),
        mean_overall_rating: mean(schools, Metric::OverallRating),
        mean_enrollment: mean(schools, Metric::TotalStudents),
        mean_graduation_rate: mean(schools, Metric::GraduationRate),
    }
}
