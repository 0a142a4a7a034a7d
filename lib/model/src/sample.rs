//! Seedable sample-data generator.
//!
//! One possible data source for the engine: produces the four record
//! collections with realistic shapes (category mix, grade-dependent
//! metrics, raw demographic percentages that the store normalizes on
//! load). Deterministic for a fixed seed.

use crate::records::{
    CostTier, DemographicEntry, EnrollmentMethod, GradeBand, MeetingTime, ProgramCategory,
    ProgramEntry, ReviewEntry, ReviewerKind,
};
use crate::school::{School, SchoolCategory};
use chrono::NaiveDate;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};

const NEIGHBORHOODS: [&str; 8] = [
    "Northside",
    "Southside",
    "Eastside",
    "Westside",
    "Central District",
    "Riverside",
    "Hilltop",
    "Valley View",
];

const NAME_PREFIXES: [&str; 5] = ["Lincoln", "Washington", "Roosevelt", "Kennedy", "King"];
const NAME_SUFFIXES: [&str; 5] = ["Elementary", "Middle", "High", "Academy", "School"];
const STREETS: [&str; 4] = ["Main", "Oak", "Maple", "Pine"];

const ETHNICITIES: [&str; 7] = [
    "White",
    "Hispanic",
    "Black",
    "Asian",
    "Multiracial",
    "Native American",
    "Pacific Islander",
];

const SPORTS: [&str; 7] = [
    "Basketball",
    "Soccer",
    "Football",
    "Volleyball",
    "Track & Field",
    "Swimming",
    "Baseball",
];
const ARTS: [&str; 6] = [
    "Theater",
    "Dance",
    "Visual Arts",
    "Photography",
    "Film",
    "Creative Writing",
];
const STEM: [&str; 5] = [
    "Robotics",
    "Coding Club",
    "Science Olympiad",
    "Math Club",
    "Engineering",
];

const REVIEW_TEMPLATES: [&str; 15] = [
    "Great school with dedicated teachers. My child loves going here!",
    "Strong academic program. Could improve on extracurricular offerings.",
    "Very diverse and inclusive environment. Parent involvement is encouraged.",
    "Facilities need updating, but the teaching staff is excellent.",
    "Communication from school administration could be better.",
    "Wonderful arts program. My child has flourished creatively.",
    "Strong STEM focus with great lab facilities.",
    "Safety is a top priority here. I feel my child is well-protected.",
    "Too much homework in my opinion, but academic results are good.",
    "Excellent sports programs and team spirit.",
    "Special education support needs improvement.",
    "Great community feeling. Lots of family events.",
    "Transportation is reliable and safe.",
    "Nutrition program could offer healthier options.",
    "College counseling in high school is exceptional.",
];

/// Configuration for sample generation
#[derive(Debug, Clone)]
pub struct SampleConfig {
    pub seed: u64,
    pub schools: usize,
}

impl Default for SampleConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            schools: 50,
        }
    }
}

/// The four generated record collections, ready for `Store::load`
#[derive(Debug, Clone)]
pub struct SampleData {
    pub schools: Vec<School>,
    pub demographics: Vec<DemographicEntry>,
    pub programs: Vec<ProgramEntry>,
    pub reviews: Vec<ReviewEntry>,
}

/// Generate sample records for the given configuration.
pub fn generate(config: &SampleConfig) -> SampleData {
    let mut rng = StdRng::seed_from_u64(config.seed);

    let mut schools = Vec::with_capacity(config.schools);
    let mut demographics = Vec::new();
    let mut programs = Vec::new();
    let mut reviews = Vec::new();

    for i in 0..config.schools {
        let id = (i + 1) as u32;
        let school = generate_school(&mut rng, id);
        generate_demographics(&mut rng, id, &mut demographics);
        generate_programs(&mut rng, id, &mut programs);
        generate_reviews(&mut rng, id, &mut reviews);
        schools.push(school);
    }

    SampleData {
        schools,
        demographics,
        programs,
        reviews,
    }
}

fn pick<'a, T>(rng: &mut StdRng, pool: &'a [T]) -> &'a T {
    // Pools are compile-time non-empty arrays
    pool.choose(rng).unwrap_or(&pool[0])
}

fn weighted_category(rng: &mut StdRng) -> SchoolCategory {
    let weights = [
        (SchoolCategory::PublicElementary, 0.25),
        (SchoolCategory::PublicMiddle, 0.20),
        (SchoolCategory::PublicHigh, 0.20),
        (SchoolCategory::Charter, 0.15),
        (SchoolCategory::Magnet, 0.10),
        (SchoolCategory::Private, 0.10),
    ];
    let roll: f64 = rng.random_range(0.0..1.0);
    let mut cumulative = 0.0;
    for (category, weight) in weights {
        cumulative += weight;
        if roll < cumulative {
            return category;
        }
    }
    SchoolCategory::Private
}

fn generate_school(rng: &mut StdRng, id: u32) -> School {
    let category = weighted_category(rng);
    let is_high = category == SchoolCategory::PublicHigh;
    let has_science = matches!(
        category,
        SchoolCategory::PublicMiddle | SchoolCategory::PublicHigh
    );

    let year_established = rng.random_range(1950..2015);
    let last_renovation = rng.random_range(2000..2023).max(year_established);

    School {
        id,
        name: format!("{} {}", pick(rng, &NAME_PREFIXES), pick(rng, &NAME_SUFFIXES)),
        category,
        address: format!("{} {} St", rng.random_range(100..9999), pick(rng, &STREETS)),
        neighborhood: (*pick(rng, &NEIGHBORHOODS)).to_string(),
        latitude: 37.76 + rng.random_range(-0.15..0.15),
        longitude: -122.44 + rng.random_range(-0.2..0.2),
        phone: format!(
            "({}) {}-{}",
            rng.random_range(200..999),
            rng.random_range(200..999),
            rng.random_range(1000..9999)
        ),
        website: format!("https://www.school{id}.edu"),
        overall_rating: rng.random_range(3.0..5.0),
        academic_rating: rng.random_range(3.0..5.0),
        teacher_rating: rng.random_range(3.0..5.0),
        diversity_rating: rng.random_range(3.0..5.0),
        safety_rating: rng.random_range(3.0..5.0),
        total_students: rng.random_range(300..2500),
        student_teacher_ratio: rng.random_range(15.0..25.0),
        graduation_rate: is_high.then(|| rng.random_range(70.0..99.0)),
        college_acceptance: is_high.then(|| rng.random_range(60.0..98.0)),
        avg_sat_score: is_high.then(|| rng.random_range(1000..1500)),
        avg_act_score: is_high.then(|| rng.random_range(18.0..32.0)),
        math_proficiency: rng.random_range(40.0..95.0),
        reading_proficiency: rng.random_range(40.0..95.0),
        science_proficiency: has_science.then(|| rng.random_range(40.0..95.0)),
        attendance_rate: rng.random_range(85.0..98.0),
        chronic_absenteeism: rng.random_range(5.0..25.0),
        title_i: rng.random_bool(0.4),
        free_lunch_percent: rng.random_range(10.0..85.0),
        reduced_lunch_percent: rng.random_range(5.0..20.0),
        transportation_provided: rng.random_bool(0.8),
        before_school_care: rng.random_bool(0.6),
        after_school_care: rng.random_bool(0.7),
        year_established,
        last_renovation,
    }
}

fn generate_demographics(rng: &mut StdRng, school_id: u32, out: &mut Vec<DemographicEntry>) {
    // Raw percentages; the store rescales each school's group to 100
    for ethnicity in ETHNICITIES {
        out.push(DemographicEntry {
            school_id,
            ethnicity: ethnicity.to_string(),
            percentage: rng.random_range(5.0..40.0),
        });
    }
}

fn generate_programs(rng: &mut StdRng, school_id: u32, out: &mut Vec<ProgramEntry>) {
    let count = rng.random_range(5..15);
    for _ in 0..count {
        let category = *pick(rng, &ProgramCategory::ALL);
        let program_name = match category {
            ProgramCategory::Sports => (*pick(rng, &SPORTS)).to_string(),
            ProgramCategory::Arts => (*pick(rng, &ARTS)).to_string(),
            ProgramCategory::Stem => (*pick(rng, &STEM)).to_string(),
            other => format!("{} Club", other.label()),
        };

        let grade_roll: f64 = rng.random_range(0.0..1.0);
        let grade_band = if grade_roll < 0.3 {
            GradeBand::K5
        } else if grade_roll < 0.6 {
            GradeBand::Grades68
        } else if grade_roll < 0.9 {
            GradeBand::Grades912
        } else {
            GradeBand::All
        };

        let cost_roll: f64 = rng.random_range(0.0..1.0);
        let cost = if cost_roll < 0.6 {
            CostTier::Free
        } else if cost_roll < 0.8 {
            CostTier::Low
        } else if cost_roll < 0.95 {
            CostTier::Medium
        } else {
            CostTier::High
        };

        out.push(ProgramEntry {
            school_id,
            program_name,
            category,
            grade_band,
            cost,
            meeting_time: *pick(
                rng,
                &[
                    MeetingTime::BeforeSchool,
                    MeetingTime::AfterSchool,
                    MeetingTime::Weekends,
                    MeetingTime::Lunch,
                ],
            ),
            enrollment: *pick(
                rng,
                &[
                    EnrollmentMethod::Open,
                    EnrollmentMethod::Tryouts,
                    EnrollmentMethod::Application,
                ],
            ),
        });
    }
}

fn generate_reviews(rng: &mut StdRng, school_id: u32, out: &mut Vec<ReviewEntry>) {
    let count = rng.random_range(5..20);
    for _ in 0..count {
        let month = rng.random_range(1..=12);
        let day = rng.random_range(1..=27);
        out.push(ReviewEntry {
            school_id,
            date: NaiveDate::from_ymd_opt(2023, month, day).unwrap_or_default(),
            rating: rng.random_range(1..=5),
            text: (*pick(rng, &REVIEW_TEMPLATES)).to_string(),
            reviewer: *pick(
                rng,
                &[
                    ReviewerKind::CurrentParent,
                    ReviewerKind::FormerParent,
                    ReviewerKind::CommunityMember,
                ],
            ),
            student_grade: *pick(rng, &[GradeBand::K5, GradeBand::Grades68, GradeBand::Grades912]),
            helpful_votes: rng.random_range(0..20),
        });
    }
}
