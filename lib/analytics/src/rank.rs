//! Competition ranking over a metric.
//!
//! Ties share a rank and the next distinct value skips ahead by the tie
//! count (1, 2, 2, 4...). Rank 1 is best: the highest value, unless the
//! metric is lower-is-better (e.g. student-teacher ratio), in which case
//! the lowest. Schools where the metric is not applicable trail as a
//! single tied block in their original relative order.

use schoolscope_model::{BetterDirection, Metric, School};

/// Assign competition ranks to schools by the given metric.
pub fn rank<'a>(schools: &[&'a School], metric: Metric) -> Vec<(u32, &'a School)> {
    let mut valued: Vec<(&School, f64)> = Vec::with_capacity(schools.len());
    let mut missing: Vec<&School> = Vec::new();

    for &school in schools {
        match metric.value(school) {
            Some(value) => valued.push((school, value)),
            None => missing.push(school),
        }
    }

    // Stable sort keeps original relative order inside tied groups
    match metric.better_direction() {
        BetterDirection::Lower => valued.sort_by(|a, b| a.1.total_cmp(&b.1)),
        BetterDirection::Higher | BetterDirection::Context => {
            valued.sort_by(|a, b| b.1.total_cmp(&a.1))
        }
    }

    let mut ranked = Vec::with_capacity(schools.len());
    let mut current_rank = 0u32;
    let mut previous: Option<f64> = None;

    for (position, (school, value)) in valued.iter().enumerate() {
        if previous != Some(*value) {
            current_rank = position as u32 + 1;
            previous = Some(*value);
        }
        ranked.push((current_rank, *school));
    }

    // All null-valued schools are mutually tied, after every ranked school
    let trailing_rank = valued.len() as u32 + 1;
    for school in missing {
        ranked.push((trailing_rank, school));
    }

    ranked
}

#[cfg(test)]
mod tests {
    use super::*;

    fn school(id: u32, rating: f64, ratio: f64) -> School {
        School {
            id,
            overall_rating: rating,
            student_teacher_ratio: ratio,
            ..Default::default()
        }
    }

    fn refs(schools: &[School]) -> Vec<&School> {
        schools.iter().collect()
    }

    fn rank_ids(ranked: &[(u32, &School)]) -> Vec<(u32, u32)> {
        ranked.iter().map(|(r, s)| (*r, s.id)).collect()
    }

    #[test]
    fn test_competition_ranking_skips_after_ties() {
        let schools = vec![
            school(1, 5.0, 18.0),
            school(2, 4.5, 18.0),
            school(3, 4.5, 18.0),
            school(4, 4.0, 18.0),
        ];
        let ranked = rank(&refs(&schools), Metric::OverallRating);
        assert_eq!(rank_ids(&ranked), vec![(1, 1), (2, 2), (2, 3), (4, 4)]);
    }

    #[test]
    fn test_lower_is_better_metric() {
        let schools = vec![
            school(1, 4.0, 22.0),
            school(2, 4.0, 16.0),
            school(3, 4.0, 19.0),
        ];
        let ranked = rank(&refs(&schools), Metric::StudentTeacherRatio);
        assert_eq!(rank_ids(&ranked), vec![(1, 2), (2, 3), (3, 1)]);
    }

    #[test]
    fn test_null_values_rank_last_as_block() {
        let mut a = school(1, 4.0, 18.0);
        a.graduation_rate = Some(95.0);
        let b = school(2, 4.0, 18.0);
        let mut c = school(3, 4.0, 18.0);
        c.graduation_rate = Some(88.0);
        let d = school(4, 4.0, 18.0);

        let schools = vec![a, b, c, d];
        let ranked = rank(&refs(&schools), Metric::GraduationRate);
        // Nulls trail in original relative order, all tied at rank 3
        assert_eq!(rank_ids(&ranked), vec![(1, 1), (2, 3), (3, 2), (3, 4)]);
    }

    #[test]
    fn test_ties_preserve_input_order() {
        let schools = vec![
            school(9, 4.5, 18.0),
            school(2, 4.5, 18.0),
            school(5, 4.5, 18.0),
        ];
        let ranked = rank(&refs(&schools), Metric::OverallRating);
        assert_eq!(rank_ids(&ranked), vec![(1, 9), (1, 2), (1, 5)]);
    }

    #[test]
    fn test_empty_input() {
        let ranked = rank(&[], Metric::OverallRating);
        assert!(ranked.is_empty());
    }
}
