// Integration tests for schoolscope
use schoolscope::prelude::*;
use schoolscope::{DemographicEntry, MetricSpec};

fn high_school(id: u32, name: &str, rating: f64, math: f64, ratio: f64) -> School {
    School {
        id,
        name: name.to_string(),
        category: SchoolCategory::PublicHigh,
        neighborhood: "Downtown".to_string(),
        overall_rating: rating,
        academic_rating: rating,
        teacher_rating: rating,
        diversity_rating: 3.5,
        safety_rating: 4.0,
        total_students: 1000 + id * 100,
        student_teacher_ratio: ratio,
        graduation_rate: Some(88.0),
        math_proficiency: math,
        reading_proficiency: math - 2.0,
        attendance_rate: 94.0,
        chronic_absenteeism: 8.0,
        free_lunch_percent: 30.0,
        reduced_lunch_percent: 10.0,
        year_established: 1970,
        last_renovation: 2010,
        ..School::default()
    }
}

fn demo_store() -> Store {
    let mut c = high_school(3, "Cedar High", 4.0, 70.0, 22.0);
    c.graduation_rate = None;

    let schools = vec![
        high_school(1, "Alder High", 4.8, 90.0, 18.0),
        high_school(2, "Birch High", 4.8, 85.0, 20.0),
        c,
    ];
    let demographics = vec![
        DemographicEntry { school_id: 1, ethnicity: "White".to_string(), percentage: 20.0 },
        DemographicEntry { school_id: 1, ethnicity: "Hispanic".to_string(), percentage: 20.0 },
        DemographicEntry { school_id: 2, ethnicity: "White".to_string(), percentage: 90.0 },
        DemographicEntry { school_id: 2, ethnicity: "Asian".to_string(), percentage: 10.0 },
    ];
    Store::load(schools, demographics, vec![], vec![]).unwrap()
}

#[test]
fn test_rank_uses_competition_ranking() {
    let store = demo_store();
    let schools: Vec<&School> = store.schools().iter().collect();

    let ranked = rank(&schools, Metric::OverallRating);
    let positions: Vec<(u32, &str)> =
        ranked.iter().map(|(r, s)| (*r, s.name.as_str())).collect();

    // Tied leaders share rank 1 and the next school skips to 3
    assert_eq!(
        positions,
        vec![(1, "Alder High"), (1, "Birch High"), (3, "Cedar High")]
    );
}

#[test]
fn test_rank_places_missing_values_after_every_ranked_school() {
    let store = demo_store();
    let schools: Vec<&School> = store.schools().iter().collect();

    let ranked = rank(&schools, Metric::GraduationRate);
    assert_eq!(ranked.len(), 3);
    // Cedar reports no graduation rate, so it trails at rank valued+1
    assert_eq!(ranked[2].0, 3);
    assert_eq!(ranked[2].1.name, "Cedar High");
    assert!(ranked[..2].iter().all(|(r, _)| *r <= 2));
}

#[test]
fn test_sort_by_ratio_ascending() {
    let store = demo_store();
    let schools: Vec<&School> = store.schools().iter().collect();

    let sorted = sort_by(&schools, SortKey::StudentTeacherRatio, Direction::Ascending);
    let names: Vec<&str> = sorted.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec!["Alder High", "Birch High", "Cedar High"]);
}

#[test]
fn test_filter_then_rank_pipeline() {
    let store = demo_store();
    let schools: Vec<&School> = store.schools().iter().collect();

    let kept = filter(&schools, &[Predicate::MinOverallRating(4.5)]);
    assert_eq!(kept.len(), 2);

    let ranked = rank(&kept, Metric::MathProficiency);
    assert_eq!(ranked[0].1.name, "Alder High");
    assert_eq!(ranked[0].0, 1);
}

#[test]
fn test_demographics_are_normalized_at_load() {
    let store = demo_store();

    // School 1 was loaded as 20/20; normalization rescales to 50/50
    let entries = store.demographics_for(1);
    let total: f64 = entries.iter().map(|e| e.percentage).sum();
    assert!((total - 100.0).abs() < 1e-9);
    assert!(entries.iter().all(|e| (e.percentage - 50.0).abs() < 1e-9));

    // An even two-way split yields a Simpson index of 0.5
    let shares: Vec<f64> = entries.iter().map(|e| e.percentage).collect();
    let index = diversity_index(&shares).unwrap();
    assert!((index - 0.5).abs() < 1e-9);
}

#[test]
fn test_most_diverse_prefers_even_split() {
    let store = demo_store();
    let school = most_diverse(&store).unwrap();
    assert_eq!(school.name, "Alder High");
}

#[test]
fn test_comparison_table_shows_na_for_missing_metric() {
    let store = demo_store();
    let specs = vec![
        MetricSpec::for_metric(Metric::OverallRating),
        MetricSpec::for_metric(Metric::GraduationRate),
    ];

    let table = build_metrics_table(&store, &[1, 2, 3], &specs).unwrap();
    assert_eq!(table.schools, vec!["Alder High", "Birch High", "Cedar High"]);
    assert_eq!(table.cell_for("Overall Rating", "Alder High"), Some("4.8/5"));
    assert_eq!(table.cell_for("Graduation Rate", "Birch High"), Some("88.0%"));
    assert_eq!(table.cell_for("Graduation Rate", "Cedar High"), Some("N/A"));
}

#[test]
fn test_comparison_table_rejects_unknown_id() {
    let store = demo_store();
    let result = build_metrics_table(&store, &[1, 999], &default_comparison_specs());
    assert!(result.is_err());
}

#[test]
fn test_csv_export_shape() {
    let store = demo_store();
    let specs = vec![MetricSpec::for_metric(Metric::OverallRating)];
    let table = build_metrics_table(&store, &[1, 3], &specs).unwrap();

    let csv = table.to_csv();
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines[0], "Metric,Alder High,Cedar High");
    assert_eq!(lines[1], "Overall Rating,4.8/5,4.0/5");
}

#[test]
fn test_sample_data_loads_and_queries() {
    let data = sample::generate(&sample::SampleConfig { seed: 7, schools: 25 });
    let store = Store::load(data.schools, data.demographics, data.programs, data.reviews)
        .expect("generated data must satisfy every load invariant");
    assert_eq!(store.schools().len(), 25);

    // Every school has a normalized demographic breakdown
    for school in store.schools() {
        let total: f64 = store
            .demographics_for(school.id)
            .iter()
            .map(|e| e.percentage)
            .sum();
        assert!((total - 100.0).abs() < 1e-6);
    }

    // Ranking covers the full roster and starts at 1
    let schools: Vec<&School> = store.schools().iter().collect();
    let ranked = rank(&schools, Metric::OverallRating);
    assert_eq!(ranked.len(), 25);
    assert_eq!(ranked[0].0, 1);

    // 25 schools give plenty of pairs for a defined correlation
    let r = metric_correlation(&store, Metric::FreeLunchPercent, Metric::MathProficiency)
        .expect("25 complete pairs");
    assert!((-1.0..=1.0).contains(&r));
}

#[test]
fn test_sample_generation_is_deterministic() {
    let config = sample::SampleConfig { seed: 42, schools: 10 };
    let a = sample::generate(&config);
    let b = sample::generate(&config);
    assert_eq!(a.schools, b.schools);
    assert_eq!(a.demographics, b.demographics);
}
