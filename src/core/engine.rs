use crate::core::{Pipeline, ReportResult};
use crate::utils::error::Result;
use std::time::Instant;

pub struct ReportEngine<P: Pipeline> {
    pipeline: P,
    monitoring: bool,
}

impl<P: Pipeline> ReportEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self::new_with_monitoring(pipeline, false)
    }

    pub fn new_with_monitoring(pipeline: P, monitoring: bool) -> Self {
        Self {
            pipeline,
            monitoring,
        }
    }

    pub fn is_monitoring_enabled(&self) -> bool {
        self.monitoring
    }

    pub async fn run(&self) -> Result<String> {
        tracing::info!("Starting enrollment report...");
        let started = Instant::now();

        // Extract
        let courses = self.pipeline.extract().await?;
        tracing::info!("Loaded {} course snapshots", courses.len());
        self.log_phase("Extract", started);

        // Transform
        let result = self.pipeline.transform(courses).await?;
        tracing::info!("Computed statistics for {} courses", result.summary.total_courses);
        self.log_phase("Transform", started);
        if self.monitoring {
            Self::log_details(&result);
        }

        // Load
        let output_path = self.pipeline.load(result).await?;
        tracing::info!("Report saved to: {}", output_path);
        self.log_phase("Load", started);

        Ok(output_path)
    }

    fn log_phase(&self, phase: &str, started: Instant) {
        if self.monitoring {
            tracing::info!("📊 {} done - Time: {:?}", phase, started.elapsed());
        }
    }

    fn log_details(result: &ReportResult) {
        let summary = &result.summary;
        tracing::info!(
            "📊 Catalog full: {}, limited: {}, available: {}, enrolled {}/{} ({:.1}%), open: {}",
            summary.full_courses,
            summary.limited_courses,
            summary.available_courses,
            summary.total_enrolled,
            summary.total_capacity,
            summary.overall_percentage,
            summary.total_available_spots
        );

        for row in result.rows.iter().filter(|r| r.statistics.is_over_enrolled()) {
            tracing::info!(
                "📊 Over-enrolled {}: {} above capacity",
                row.id,
                row.statistics.enrolled_count - row.statistics.max_capacity
            );
        }
    }
}
