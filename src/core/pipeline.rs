use crate::core::classifier::classify;
use crate::core::statistics::compute;
use crate::core::summary::summarize;
use crate::core::{
    CatalogSummary, ConfigProvider, Course, CourseReport, Pipeline, ReportResult, Storage,
};
use crate::utils::error::{Result, StatsError};
use crate::utils::validation::validate_unique_ids;
use chrono::{DateTime, Utc};
use serde::Serialize;

pub const JSON_REPORT_FILE: &str = "report.json";
pub const CSV_REPORT_FILE: &str = "report.csv";

const CSV_HEADER: [&str; 9] = [
    "id",
    "title",
    "enrolledCount",
    "maxCapacity",
    "availableSpots",
    "enrollmentPercentage",
    "isFull",
    "hasLimitedAvailability",
    "availability",
];

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ReportDocument<'a> {
    generated_at: DateTime<Utc>,
    summary: &'a CatalogSummary,
    courses: &'a [CourseReport],
}

pub struct ReportPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
}

impl<S: Storage, C: ConfigProvider> ReportPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }

    fn render_json(rows: &[CourseReport], summary: &CatalogSummary) -> Result<String> {
        let document = ReportDocument {
            generated_at: Utc::now(),
            summary,
            courses: rows,
        };
        Ok(serde_json::to_string_pretty(&document)?)
    }

    fn render_csv(rows: &[CourseReport]) -> Result<String> {
        let mut writer = csv::Writer::from_writer(Vec::new());
        writer.write_record(CSV_HEADER)?;

        for row in rows {
            let stats = &row.statistics;
            writer.write_record([
                row.id.clone(),
                row.title.clone().unwrap_or_default(),
                stats.enrolled_count.to_string(),
                stats.max_capacity.to_string(),
                stats.available_spots.to_string(),
                format!("{:.2}", stats.enrollment_percentage),
                stats.is_full.to_string(),
                stats.has_limited_availability.to_string(),
                row.availability.to_string(),
            ])?;
        }

        let bytes = writer
            .into_inner()
            .map_err(|e| StatsError::IoError(e.into_error()))?;
        String::from_utf8(bytes).map_err(|e| StatsError::ProcessingError {
            message: format!("CSV output is not valid UTF-8: {}", e),
        })
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for ReportPipeline<S, C> {
    async fn extract(&self) -> Result<Vec<Course>> {
        tracing::debug!("Reading course snapshots from: {}", self.config.input_path());
        let data = self.storage.read_file(self.config.input_path()).await?;

        let courses: Vec<Course> = serde_json::from_slice(&data)?;
        validate_unique_ids(courses.iter().map(|c| c.id.as_str()))?;

        if courses.is_empty() {
            tracing::warn!("No courses found in {}", self.config.input_path());
        }

        Ok(courses)
    }

    async fn transform(&self, courses: Vec<Course>) -> Result<ReportResult> {
        let filter = self.config.category_filter()?;
        let mut rows = Vec::with_capacity(courses.len());

        for course in courses {
            let statistics = compute(&course);
            let availability = classify(&statistics);

            if statistics.is_over_enrolled() {
                tracing::warn!(
                    "Course {} is over-enrolled: {}/{} ({:.1}%)",
                    course.display_name(),
                    statistics.enrolled_count,
                    statistics.max_capacity,
                    statistics.enrollment_percentage
                );
            }

            if !filter.is_empty() && !filter.contains(&availability) {
                tracing::debug!("Skipping {} ({})", course.id, availability);
                continue;
            }

            rows.push(CourseReport {
                id: course.id,
                title: course.title,
                statistics,
                availability,
            });
        }

        let summary = summarize(&rows);
        let json_output = Self::render_json(&rows, &summary)?;
        let csv_output = Self::render_csv(&rows)?;

        Ok(ReportResult {
            rows,
            summary,
            json_output,
            csv_output,
        })
    }

    async fn load(&self, result: ReportResult) -> Result<String> {
        let output_path = self.config.output_path().trim_end_matches('/').to_string();

        for format in self.config.output_formats() {
            let (file_name, content) = match format.as_str() {
                "json" => (JSON_REPORT_FILE, &result.json_output),
                "csv" => (CSV_REPORT_FILE, &result.csv_output),
                other => {
                    return Err(StatsError::InvalidConfigValueError {
                        field: "output_formats".to_string(),
                        value: other.to_string(),
                        reason: "Unsupported format".to_string(),
                    })
                }
            };

            let path = format!("{}/{}", output_path, file_name);
            tracing::debug!("Writing {} ({} bytes)", path, content.len());
            self.storage.write_file(&path, content.as_bytes()).await?;
        }

        Ok(output_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::toml_config::TomlConfig;
    use crate::core::AvailabilityCategory;
    use std::collections::HashMap;
    use std::sync::Arc;
    use tokio::sync::Mutex;

    #[derive(Clone)]
    struct MockStorage {
        files: Arc<Mutex<HashMap<String, Vec<u8>>>>,
    }

    impl MockStorage {
        fn new() -> Self {
            Self {
                files: Arc::new(Mutex::new(HashMap::new())),
            }
        }

        async fn put_file(&self, path: &str, data: &[u8]) {
            self.files.lock().await.insert(path.to_string(), data.to_vec());
        }

        async fn get_file(&self, path: &str) -> Option<Vec<u8>> {
            self.files.lock().await.get(path).cloned()
        }
    }

    impl Storage for MockStorage {
        async fn read_file(&self, path: &str) -> Result<Vec<u8>> {
            let files = self.files.lock().await;
            files.get(path).cloned().ok_or_else(|| {
                StatsError::IoError(std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    format!("File not found: {}", path),
                ))
            })
        }

        async fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
            self.files.lock().await.insert(path.to_string(), data.to_vec());
            Ok(())
        }
    }

    struct MockConfig {
        input_path: String,
        output_path: String,
        output_formats: Vec<String>,
        categories: Vec<AvailabilityCategory>,
    }

    impl MockConfig {
        fn new() -> Self {
            Self {
                input_path: "courses.json".to_string(),
                output_path: "test_output".to_string(),
                output_formats: vec!["json".to_string(), "csv".to_string()],
                categories: vec![],
            }
        }
    }

    impl ConfigProvider for MockConfig {
        fn input_path(&self) -> &str {
            &self.input_path
        }

        fn output_path(&self) -> &str {
            &self.output_path
        }

        fn output_formats(&self) -> &[String] {
            &self.output_formats
        }

        fn category_filter(&self) -> Result<Vec<AvailabilityCategory>> {
            Ok(self.categories.clone())
        }
    }

    fn sample_courses() -> Vec<Course> {
        vec![
            Course::new("CS101", 30).with_title("Intro to Programming"),
            Course::new("CS201", 10).with_enrolled((0..10).map(|i| format!("s{}", i))),
            Course::new("CS301", 20).with_enrolled((0..16).map(|i| format!("s{}", i))),
        ]
    }

    #[tokio::test]
    async fn test_extract_parses_snapshots() {
        let storage = MockStorage::new();
        let json = serde_json::to_vec(&sample_courses()).unwrap();
        storage.put_file("courses.json", &json).await;

        let pipeline = ReportPipeline::new(storage, MockConfig::new());
        let courses = pipeline.extract().await.unwrap();

        assert_eq!(courses.len(), 3);
        assert_eq!(courses[1].enrolled_students.len(), 10);
    }

    #[tokio::test]
    async fn test_extract_missing_file() {
        let pipeline = ReportPipeline::new(MockStorage::new(), MockConfig::new());
        let err = pipeline.extract().await.unwrap_err();
        assert!(matches!(err, StatsError::IoError(_)));
    }

    #[tokio::test]
    async fn test_extract_rejects_duplicate_ids() {
        let storage = MockStorage::new();
        storage
            .put_file(
                "courses.json",
                br#"[{"id": "A", "maxStudents": 1}, {"id": "A", "maxStudents": 2}]"#,
            )
            .await;

        let pipeline = ReportPipeline::new(storage, MockConfig::new());
        let err = pipeline.extract().await.unwrap_err();
        assert!(matches!(err, StatsError::ValidationError { .. }));
    }

    #[tokio::test]
    async fn test_extract_rejects_negative_capacity() {
        let storage = MockStorage::new();
        storage
            .put_file("courses.json", br#"[{"id": "A", "maxStudents": -5}]"#)
            .await;

        let pipeline = ReportPipeline::new(storage, MockConfig::new());
        let err = pipeline.extract().await.unwrap_err();
        assert!(matches!(err, StatsError::SerializationError(_)));
    }

    #[tokio::test]
    async fn test_transform_classifies_in_input_order() {
        let pipeline = ReportPipeline::new(MockStorage::new(), MockConfig::new());
        let result = pipeline.transform(sample_courses()).await.unwrap();

        let categories: Vec<_> = result.rows.iter().map(|r| r.availability).collect();
        assert_eq!(
            categories,
            vec![
                AvailabilityCategory::Available,
                AvailabilityCategory::Full,
                AvailabilityCategory::Limited
            ]
        );
        assert_eq!(result.summary.total_courses, 3);

        let lines: Vec<&str> = result.csv_output.lines().collect();
        assert_eq!(lines[0], CSV_HEADER.join(","));
        assert_eq!(
            lines[1],
            "CS101,Intro to Programming,0,30,30,0.00,false,false,available"
        );
        assert_eq!(lines[2], "CS201,,10,10,0,100.00,true,false,full");

        let json: serde_json::Value = serde_json::from_str(&result.json_output).unwrap();
        assert!(json.get("generatedAt").is_some());
        assert_eq!(json["courses"][2]["availableSpots"], 4);
        assert_eq!(json["courses"][2]["availability"], "limited");
        assert_eq!(json["summary"]["fullCourses"], 1);
    }

    #[tokio::test]
    async fn test_transform_applies_category_filter() {
        let mut config = MockConfig::new();
        config.categories = vec![AvailabilityCategory::Full, AvailabilityCategory::Limited];
        let pipeline = ReportPipeline::new(MockStorage::new(), config);

        let result = pipeline.transform(sample_courses()).await.unwrap();

        let ids: Vec<_> = result.rows.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["CS201", "CS301"]);
        assert_eq!(result.summary.total_courses, 2);
        assert_eq!(result.summary.available_courses, 0);
    }

    #[tokio::test]
    async fn test_transform_rejects_misspelled_category() {
        let config = TomlConfig::from_toml_str(
            r#"
[report]
name = "full-only"

[source]
path = "courses.json"

[load]
output_path = "test_output"
output_formats = ["json"]

[filter]
categories = ["full", "fulll"]
"#,
        )
        .unwrap();
        let pipeline = ReportPipeline::new(MockStorage::new(), config);

        let err = pipeline.transform(sample_courses()).await.unwrap_err();
        match err {
            StatsError::InvalidConfigValueError { field, value, .. } => {
                assert_eq!(field, "filter.categories");
                assert_eq!(value, "fulll");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_load_writes_configured_formats() {
        let storage = MockStorage::new();
        let mut config = MockConfig::new();
        config.output_formats = vec!["csv".to_string()];
        let pipeline = ReportPipeline::new(storage.clone(), config);

        let result = pipeline.transform(sample_courses()).await.unwrap();
        let csv_output = result.csv_output.clone();
        let output_path = pipeline.load(result).await.unwrap();

        assert_eq!(output_path, "test_output");
        assert_eq!(
            storage.get_file("test_output/report.csv").await,
            Some(csv_output.into_bytes())
        );
        assert!(storage.get_file("test_output/report.json").await.is_none());
    }
}
