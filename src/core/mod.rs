pub mod classifier;
pub mod engine;
pub mod pipeline;
pub mod statistics;
pub mod summary;

pub use crate::domain::model::{
    AvailabilityCategory, CatalogSummary, Course, CourseReport, EnrollmentStatistics, ReportResult,
};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
