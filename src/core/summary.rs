use crate::core::{AvailabilityCategory, CatalogSummary, CourseReport};

pub fn summarize(rows: &[CourseReport]) -> CatalogSummary {
    let mut summary = CatalogSummary {
        total_courses: rows.len(),
        ..CatalogSummary::default()
    };

    for row in rows {
        match row.availability {
            AvailabilityCategory::Full => summary.full_courses += 1,
            AvailabilityCategory::Limited => summary.limited_courses += 1,
            AvailabilityCategory::Available => summary.available_courses += 1,
        }
        summary.total_enrolled += row.statistics.enrolled_count;
        summary.total_capacity += row.statistics.max_capacity;
        summary.total_available_spots += row.statistics.available_spots;
    }

    summary.overall_percentage = if summary.total_capacity > 0 {
        (summary.total_enrolled as f64 / summary.total_capacity as f64) * 100.0
    } else {
        0.0
    };

    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{classifier::classify, statistics::compute, Course};

    fn row(id: &str, max_students: usize, enrolled: usize) -> CourseReport {
        let course = Course::new(id, max_students)
            .with_enrolled((0..enrolled).map(|i| format!("{}-{}", id, i)));
        let statistics = compute(&course);
        CourseReport {
            id: course.id.clone(),
            title: None,
            availability: classify(&statistics),
            statistics,
        }
    }

    #[test]
    fn test_summarize_mixed_catalog() {
        let rows = vec![
            row("A", 10, 10),
            row("B", 20, 16),
            row("C", 30, 0),
            row("D", 5, 8),
        ];
        let summary = summarize(&rows);

        assert_eq!(summary.total_courses, 4);
        assert_eq!(summary.full_courses, 2);
        assert_eq!(summary.limited_courses, 1);
        assert_eq!(summary.available_courses, 1);
        assert_eq!(summary.total_enrolled, 34);
        assert_eq!(summary.total_capacity, 65);
        // 超額課程只貢獻 0 個名額
        assert_eq!(summary.total_available_spots, 4 + 30);
        assert!((summary.overall_percentage - 3400.0 / 65.0).abs() < 1e-9);
    }

    #[test]
    fn test_summarize_empty() {
        let summary = summarize(&[]);
        assert_eq!(summary, CatalogSummary::default());
        assert_eq!(summary.overall_percentage, 0.0);
    }
}
