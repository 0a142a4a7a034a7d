//! Comparable numeric metrics over [`School`] records.
//!
//! A [`Metric`] names one numeric attribute together with how it should be
//! presented ([`DisplayClass`]) and interpreted ([`BetterDirection`]).
//! `value` returns `None` for metrics that do not apply to a school
//! (e.g. graduation rate outside high schools); `None` is a first-class
//! "not applicable" value, never an error.

use crate::school::School;
use serde::{Deserialize, Serialize};

/// How a metric value is rendered in tables and exports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayClass {
    /// 1-5 scale, rendered as "4.2/5"
    Rating,
    /// Percentage, rendered as "87.3%"
    Percent,
    /// Integer count, rendered with thousands separators: "1,234"
    Count,
    /// Plain ratio, rendered with one decimal: "18.5"
    Ratio,
}

/// Which direction of a metric is preferable
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BetterDirection {
    Higher,
    Lower,
    /// No universal preference (e.g. enrollment size)
    Context,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    OverallRating,
    AcademicRating,
    TeacherRating,
    DiversityRating,
    SafetyRating,
    TotalStudents,
    StudentTeacherRatio,
    GraduationRate,
    CollegeAcceptance,
    AvgSatScore,
    AvgActScore,
    MathProficiency,
    ReadingProficiency,
    ScienceProficiency,
    AttendanceRate,
    ChronicAbsenteeism,
    FreeLunchPercent,
    ReducedLunchPercent,
}

impl Metric {
    pub const ALL: [Metric; 18] = [
        Metric::OverallRating,
        Metric::AcademicRating,
        Metric::TeacherRating,
        Metric::DiversityRating,
        Metric::SafetyRating,
        Metric::TotalStudents,
        Metric::StudentTeacherRatio,
        Metric::GraduationRate,
        Metric::CollegeAcceptance,
        Metric::AvgSatScore,
        Metric::AvgActScore,
        Metric::MathProficiency,
        Metric::ReadingProficiency,
        Metric::ScienceProficiency,
        Metric::AttendanceRate,
        Metric::ChronicAbsenteeism,
        Metric::FreeLunchPercent,
        Metric::ReducedLunchPercent,
    ];

    /// Human-readable label used as the row name in comparison tables
    pub fn label(self) -> &'static str {
        match self {
            Metric::OverallRating => "Overall Rating",
            Metric::AcademicRating => "Academic Rating",
            Metric::TeacherRating => "Teacher Rating",
            Metric::DiversityRating => "Diversity Rating",
            Metric::SafetyRating => "Safety Rating",
            Metric::TotalStudents => "Total Students",
            Metric::StudentTeacherRatio => "Student-Teacher Ratio",
            Metric::GraduationRate => "Graduation Rate",
            Metric::CollegeAcceptance => "College Acceptance",
            Metric::AvgSatScore => "Avg SAT Score",
            Metric::AvgActScore => "Avg ACT Score",
            Metric::MathProficiency => "Math Proficiency",
            Metric::ReadingProficiency => "Reading Proficiency",
            Metric::ScienceProficiency => "Science Proficiency",
            Metric::AttendanceRate => "Attendance Rate",
            Metric::ChronicAbsenteeism => "Chronic Absenteeism",
            Metric::FreeLunchPercent => "Free Lunch Eligible",
            Metric::ReducedLunchPercent => "Reduced Lunch Eligible",
        }
    }

    pub fn display_class(self) -> DisplayClass {
        match self {
            Metric::OverallRating
            | Metric::AcademicRating
            | Metric::TeacherRating
            | Metric::DiversityRating
            | Metric::SafetyRating => DisplayClass::Rating,
            Metric::GraduationRate
            | Metric::CollegeAcceptance
            | Metric::MathProficiency
            | Metric::ReadingProficiency
            | Metric::ScienceProficiency
            | Metric::AttendanceRate
            | Metric::ChronicAbsenteeism
            | Metric::FreeLunchPercent
            | Metric::ReducedLunchPercent => DisplayClass::Percent,
            Metric::TotalStudents | Metric::AvgSatScore => DisplayClass::Count,
            Metric::StudentTeacherRatio | Metric::AvgActScore => DisplayClass::Ratio,
        }
    }

    pub fn better_direction(self) -> BetterDirection {
        match self {
            Metric::StudentTeacherRatio | Metric::ChronicAbsenteeism => BetterDirection::Lower,
            Metric::TotalStudents
            | Metric::FreeLunchPercent
            | Metric::ReducedLunchPercent => BetterDirection::Context,
            _ => BetterDirection::Higher,
        }
    }

    /// Read this metric from a school; `None` means "not applicable"
    pub fn value(self, school: &School) -> Option<f64> {
        match self {
            Metric::OverallRating => Some(school.overall_rating),
            Metric::AcademicRating => Some(school.academic_rating),
            Metric::TeacherRating => Some(school.teacher_rating),
            Metric::DiversityRating => Some(school.diversity_rating),
            Metric::SafetyRating => Some(school.safety_rating),
            Metric::TotalStudents => Some(f64::from(school.total_students)),
            Metric::StudentTeacherRatio => Some(school.student_teacher_ratio),
            Metric::GraduationRate => school.graduation_rate,
            Metric::CollegeAcceptance => school.college_acceptance,
            Metric::AvgSatScore => school.avg_sat_score.map(f64::from),
            Metric::AvgActScore => school.avg_act_score,
            Metric::MathProficiency => Some(school.math_proficiency),
            Metric::ReadingProficiency => Some(school.reading_proficiency),
            Metric::ScienceProficiency => school.science_proficiency,
            Metric::AttendanceRate => Some(school.attendance_rate),
            Metric::ChronicAbsenteeism => Some(school.chronic_absenteeism),
            Metric::FreeLunchPercent => Some(school.free_lunch_percent),
            Metric::ReducedLunchPercent => Some(school.reduced_lunch_percent),
        }
    }
}
