//! Secondary record types linked to a school by id.
//!
//! All three record kinds are many-to-one against [`School`](crate::School);
//! a school with zero entries in any of them is valid everywhere.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One (school, ethnicity, percentage) observation.
///
/// Per-school percentages are rescaled to sum to exactly 100 when the
/// store is loaded, so downstream consumers never re-derive normalization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DemographicEntry {
    pub school_id: u32,
    pub ethnicity: String,
    pub percentage: f64,
}

/// The fixed set of extracurricular program categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProgramCategory {
    Sports,
    Arts,
    Stem,
    Music,
    Language,
    Leadership,
    CommunityService,
}

impl ProgramCategory {
    pub const ALL: [ProgramCategory; 7] = [
        ProgramCategory::Sports,
        ProgramCategory::Arts,
        ProgramCategory::Stem,
        ProgramCategory::Music,
        ProgramCategory::Language,
        ProgramCategory::Leadership,
        ProgramCategory::CommunityService,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ProgramCategory::Sports => "Sports",
            ProgramCategory::Arts => "Arts",
            ProgramCategory::Stem => "STEM",
            ProgramCategory::Music => "Music",
            ProgramCategory::Language => "Language",
            ProgramCategory::Leadership => "Leadership",
            ProgramCategory::CommunityService => "Community Service",
        }
    }
}

impl std::fmt::Display for ProgramCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Grade band a program or review refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GradeBand {
    K5,
    Grades68,
    Grades912,
    All,
}

impl GradeBand {
    pub fn label(self) -> &'static str {
        match self {
            GradeBand::K5 => "K-5",
            GradeBand::Grades68 => "6-8",
            GradeBand::Grades912 => "9-12",
            GradeBand::All => "All",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CostTier {
    Free,
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MeetingTime {
    BeforeSchool,
    AfterSchool,
    Weekends,
    Lunch,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EnrollmentMethod {
    Open,
    Tryouts,
    Application,
}

/// One extracurricular program offered by a school.
///
/// Program names need not be unique within a school (two soccer teams
/// in different grade bands are two entries).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgramEntry {
    pub school_id: u32,
    pub program_name: String,
    pub category: ProgramCategory,
    pub grade_band: GradeBand,
    pub cost: CostTier,
    pub meeting_time: MeetingTime,
    pub enrollment: EnrollmentMethod,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReviewerKind {
    CurrentParent,
    FormerParent,
    CommunityMember,
}

impl ReviewerKind {
    pub fn label(self) -> &'static str {
        match self {
            ReviewerKind::CurrentParent => "Current Parent",
            ReviewerKind::FormerParent => "Former Parent",
            ReviewerKind::CommunityMember => "Community Member",
        }
    }
}

/// One parent/community review.
///
/// Ratings are independent observations; nothing ties their mean to the
/// school's aggregate `overall_rating` (different data sources).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReviewEntry {
    pub school_id: u32,
    pub date: NaiveDate,
    /// Integer rating in 1..=5
    pub rating: u8,
    pub text: String,
    pub reviewer: ReviewerKind,
    pub student_grade: GradeBand,
    pub helpful_votes: u32,
}
