use crate::core::{AvailabilityCategory, ConfigProvider};
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "enrollment-stats")]
#[command(about = "Enrollment capacity report for course snapshots")]
pub struct CliConfig {
    /// JSON file containing an array of course snapshots
    #[arg(long, default_value = "courses.json")]
    pub input: String,

    #[arg(long, default_value = "./output")]
    pub output_path: String,

    #[arg(long, value_delimiter = ',', default_value = "json,csv")]
    pub formats: Vec<String>,

    /// Only report courses in these categories (full, limited, available)
    #[arg(long, value_delimiter = ',')]
    pub category: Vec<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Log phase timings and catalog details")]
    pub monitor: bool,
}

impl ConfigProvider for CliConfig {
    fn input_path(&self) -> &str {
        &self.input
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }

    fn output_formats(&self) -> &[String] {
        &self.formats
    }

    fn category_filter(&self) -> Result<Vec<AvailabilityCategory>> {
        validation::parse_categories("category", &self.category)
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_path("input", &self.input)?;
        validation::validate_path("output_path", &self.output_path)?;
        validation::validate_output_formats("formats", &self.formats)?;
        validation::parse_categories("category", &self.category)?;
        Ok(())
    }
}
