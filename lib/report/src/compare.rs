//! Multi-school comparison matrices.
//!
//! Pure assembly over the store: the "currently selected for comparison"
//! id set is caller state, passed in on every call and never retained.
//! Cost is O(N x M) in schools x metrics.

use crate::format::{format_optional, NOT_APPLICABLE};
use schoolscope_model::{
    BetterDirection, DisplayClass, Metric, ProgramCategory, Result, Store,
};
use serde::Serialize;

/// How one metric is presented and interpreted in a comparison
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MetricSpec {
    pub metric: Metric,
    pub display: DisplayClass,
    pub better: BetterDirection,
}

impl MetricSpec {
    /// Spec with the metric's own display class and better-direction
    pub fn for_metric(metric: Metric) -> Self {
        Self {
            metric,
            display: metric.display_class(),
            better: metric.better_direction(),
        }
    }
}

/// The metric set of the standard side-by-side comparison view
pub fn default_comparison_specs() -> Vec<MetricSpec> {
    [
        Metric::OverallRating,
        Metric::AcademicRating,
        Metric::TeacherRating,
        Metric::TotalStudents,
        Metric::StudentTeacherRatio,
        Metric::AttendanceRate,
        Metric::MathProficiency,
        Metric::ReadingProficiency,
    ]
    .into_iter()
    .map(MetricSpec::for_metric)
    .collect()
}

/// One row of a metrics table: a metric across every compared school
#[derive(Debug, Clone, Serialize)]
pub struct MetricRow {
    pub label: String,
    pub better: BetterDirection,
    /// Formatted values in school column order; "N/A" where not applicable
    pub cells: Vec<String>,
}

/// Metric x school comparison matrix with formatted cells
#[derive(Debug, Clone, Serialize)]
pub struct MetricsTable {
    /// Column order: school names as given by the id list
    pub schools: Vec<String>,
    pub rows: Vec<MetricRow>,
}

impl MetricsTable {
    /// Cell lookup by row and column index
    pub fn cell(&self, row: usize, col: usize) -> Option<&str> {
        self.rows.get(row).and_then(|r| r.cells.get(col)).map(String::as_str)
    }

    /// The cell for a metric label and school name, if both exist
    pub fn cell_for(&self, metric_label: &str, school: &str) -> Option<&str> {
        let col = self.schools.iter().position(|s| s == school)?;
        let row = self.rows.iter().find(|r| r.label == metric_label)?;
        row.cells.get(col).map(String::as_str)
    }
}

/// Build the metric-by-school comparison table.
///
/// Fails only when an id is unknown to the store; a school for which a
/// metric is not applicable gets the "N/A" sentinel instead.
pub fn build_metrics_table(
    store: &Store,
    school_ids: &[u32],
    specs: &[MetricSpec],
) -> Result<MetricsTable> {
    let schools = resolve(store, school_ids)?;

    let rows = specs
        .iter()
        .map(|spec| MetricRow {
            label: spec.metric.label().to_string(),
            better: spec.better,
            cells: schools
                .iter()
                .map(|school| format_optional(spec.display, spec.metric.value(school)))
                .collect(),
        })
        .collect();

    Ok(MetricsTable {
        schools: schools.iter().map(|s| s.name.clone()).collect(),
        rows,
    })
}

/// Long-form demographic record for grouped charting
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DemographicRow {
    pub school: String,
    pub ethnicity: String,
    /// Post-normalization percentage (school's entries sum to 100)
    pub percentage: f64,
}

/// Demographic entries for the compared schools in long form, ordered by
/// school (as given) then load order within a school.
pub fn build_demographic_comparison(
    store: &Store,
    school_ids: &[u32],
) -> Result<Vec<DemographicRow>> {
    let schools = resolve(store, school_ids)?;

    let mut rows = Vec::new();
    for school in schools {
        for entry in store.demographics_for(school.id) {
            rows.push(DemographicRow {
                school: school.name.clone(),
                ethnicity: entry.ethnicity.clone(),
                percentage: entry.percentage,
            });
        }
    }
    Ok(rows)
}

/// Program-category x school count matrix, zero-filled
#[derive(Debug, Clone, Serialize)]
pub struct ProgramMatrix {
    /// Column order: school names as given by the id list
    pub schools: Vec<String>,
    /// Row order: the fixed program category enumeration
    pub categories: Vec<ProgramCategory>,
    /// counts[row][col] = programs of categories[row] at schools[col]
    pub counts: Vec<Vec<u32>>,
}

impl ProgramMatrix {
    pub fn count(&self, category: ProgramCategory, col: usize) -> Option<u32> {
        let row = self.categories.iter().position(|&c| c == category)?;
        self.counts.get(row).and_then(|r| r.get(col)).copied()
    }
}

/// Count programs per category for each compared school. Absent
/// combinations are zero, never missing.
pub fn build_program_comparison(store: &Store, school_ids: &[u32]) -> Result<ProgramMatrix> {
    let schools = resolve(store, school_ids)?;

    let categories: Vec<ProgramCategory> = ProgramCategory::ALL.to_vec();
    let mut counts = vec![vec![0u32; schools.len()]; categories.len()];

    for (col, school) in schools.iter().enumerate() {
        for program in store.programs_for(school.id) {
            if let Some(row) = categories.iter().position(|&c| c == program.category) {
                counts[row][col] += 1;
            }
        }
    }

    Ok(ProgramMatrix {
        schools: schools.iter().map(|s| s.name.clone()).collect(),
        categories,
        counts,
    })
}

fn resolve<'a>(store: &'a Store, school_ids: &[u32]) -> Result<Vec<&'a schoolscope_model::School>> {
    school_ids.iter().map(|&id| store.by_id(id)).collect()
}

/// Re-exported so table consumers can compare against the sentinel
pub const NA: &str = NOT_APPLICABLE;
