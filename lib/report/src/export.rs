//! Delimited-text export of comparison tables.
//!
//! The one externally observable file format: UTF-8 CSV with a header
//! row of school names prefixed by a "Metric" column and one data row
//! per metric. Fields containing commas, quotes or newlines are
//! double-quoted RFC-4180 style.

use crate::compare::MetricsTable;

impl MetricsTable {
    /// Render the table as CSV, rows = metrics, columns = school names.
    pub fn to_csv(&self) -> String {
        let mut out = String::new();

        out.push_str("Metric");
        for school in &self.schools {
            out.push(',');
            out.push_str(&escape(school));
        }
        out.push('\n');

        for row in &self.rows {
            out.push_str(&escape(&row.label));
            for cell in &row.cells {
                out.push(',');
                out.push_str(&escape(cell));
            }
            out.push('\n');
        }

        out
    }
}

fn escape(field: &str) -> String {
    if field.contains(',') || field.contains('"') || field.contains('\n') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compare::{build_metrics_table, MetricSpec};
    use schoolscope_model::{Metric, School, Store};

    fn store() -> Store {
        let schools = vec![
            School {
                id: 1,
                name: "Lincoln High".to_string(),
                overall_rating: 4.5,
                total_students: 1234,
                ..Default::default()
            },
            School {
                id: 2,
                name: "King Academy, East".to_string(),
                overall_rating: 3.9,
                total_students: 820,
                ..Default::default()
            },
        ];
        Store::load(schools, vec![], vec![], vec![]).unwrap()
    }

    #[test]
    fn test_csv_shape() {
        let store = store();
        let specs = vec![
            MetricSpec::for_metric(Metric::OverallRating),
            MetricSpec::for_metric(Metric::TotalStudents),
            MetricSpec::for_metric(Metric::GraduationRate),
        ];
        let csv = build_metrics_table(&store, &[1, 2], &specs).unwrap().to_csv();

        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines.len(), 4);
        // Comma inside a school name gets quoted
        assert_eq!(lines[0], "Metric,Lincoln High,\"King Academy, East\"");
        assert_eq!(lines[1], "Overall Rating,4.5/5,3.9/5");
        assert_eq!(lines[2], "Total Students,\"1,234\",820");
        assert_eq!(lines[3], "Graduation Rate,N/A,N/A");
    }

    #[test]
    fn test_quote_escaping() {
        assert_eq!(escape("plain"), "plain");
        assert_eq!(escape("a,b"), "\"a,b\"");
        assert_eq!(escape("say \"hi\""), "\"say \"\"hi\"\"\"");
    }
}
