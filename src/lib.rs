pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::{storage::LocalStorage, toml_config::TomlConfig};

pub use crate::core::{
    classifier::classify, engine::ReportEngine, pipeline::ReportPipeline, statistics::compute,
    summary::summarize,
};
pub use domain::model::{
    AvailabilityCategory, CatalogSummary, Course, CourseReport, EnrollmentStatistics, ReportResult,
};
pub use utils::error::{Result, StatsError};
