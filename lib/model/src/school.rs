use serde::{Deserialize, Serialize};

/// The fixed set of school categories.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SchoolCategory {
    #[default]
    PublicElementary,
    PublicMiddle,
    PublicHigh,
    Charter,
    Magnet,
    Private,
}

impl SchoolCategory {
    pub const ALL: [SchoolCategory; 6] = [
        SchoolCategory::PublicElementary,
        SchoolCategory::PublicMiddle,
        SchoolCategory::PublicHigh,
        SchoolCategory::Charter,
        SchoolCategory::Magnet,
        SchoolCategory::Private,
    ];

    /// Human-readable label, as shown in tables and exports
    pub fn label(self) -> &'static str {
        match self {
            SchoolCategory::PublicElementary => "Public Elementary",
            SchoolCategory::PublicMiddle => "Public Middle",
            SchoolCategory::PublicHigh => "Public High",
            SchoolCategory::Charter => "Charter School",
            SchoolCategory::Magnet => "Magnet School",
            SchoolCategory::Private => "Private School",
        }
    }

    /// Whether schools of this category report graduation-track metrics
    /// (graduation rate, college acceptance, SAT/ACT scores)
    pub fn is_secondary(self) -> bool {
        matches!(self, SchoolCategory::PublicHigh)
    }
}

impl std::fmt::Display for SchoolCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A single school record.
///
/// Created once at load time and treated as immutable for the duration of
/// an analysis session; every derived view is a copy or a projection.
/// Grade-dependent metrics are explicit `Option` fields: `None` means
/// "not applicable" and is propagated as such (never an error) through
/// filtering, sorting, ranking and aggregation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct School {
    pub id: u32,
    pub name: String,
    pub category: SchoolCategory,
    pub address: String,
    pub neighborhood: String,
    pub latitude: f64,
    pub longitude: f64,
    pub phone: String,
    pub website: String,

    /// Ratings on a 1.0-5.0 scale
    pub overall_rating: f64,
    pub academic_rating: f64,
    pub teacher_rating: f64,
    pub diversity_rating: f64,
    pub safety_rating: f64,

    pub total_students: u32,
    pub student_teacher_ratio: f64,

    /// High-school-only metrics
    #[serde(skip_serializing_if = "Option::is_none")]
    pub graduation_rate: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub college_acceptance: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avg_sat_score: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avg_act_score: Option<f64>,

    /// Proficiency percentages in [0, 100]; science is middle/high only
    pub math_proficiency: f64,
    pub reading_proficiency: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub science_proficiency: Option<f64>,

    pub attendance_rate: f64,
    pub chronic_absenteeism: f64,

    pub title_i: bool,
    pub free_lunch_percent: f64,
    pub reduced_lunch_percent: f64,
    pub transportation_provided: bool,
    pub before_school_care: bool,
    pub after_school_care: bool,

    pub year_established: i32,
    pub last_renovation: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_labels() {
        assert_eq!(SchoolCategory::PublicElementary.label(), "Public Elementary");
        assert_eq!(SchoolCategory::Charter.to_string(), "Charter School");
    }

    #[test]
    fn test_secondary_categories() {
        assert!(SchoolCategory::PublicHigh.is_secondary());
        assert!(!SchoolCategory::PublicElementary.is_secondary());
        assert!(!SchoolCategory::Private.is_secondary());
    }

    #[test]
    fn test_serde_roundtrip() {
        let school = School {
            id: 7,
            name: "Lincoln Elementary".to_string(),
            overall_rating: 4.2,
            graduation_rate: None,
            ..Default::default()
        };

        let json = serde_json::to_string(&school).unwrap();
        let parsed: School = serde_json::from_str(&json).unwrap();
        assert_eq!(school, parsed);
        // Absent metrics are omitted entirely, not serialized as null
        assert!(!json.contains("graduation_rate"));
    }
}
