use crate::domain::model::AvailabilityCategory;
use crate::utils::error::{Result, StatsError};
use crate::utils::logger::LOG_LEVELS;
use std::collections::HashSet;

pub const SUPPORTED_FORMATS: [&str; 2] = ["json", "csv"];

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.trim().is_empty() {
        return Err(StatsError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(StatsError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_output_formats(field_name: &str, formats: &[String]) -> Result<()> {
    if formats.is_empty() {
        return Err(StatsError::MissingConfigError {
            field: field_name.to_string(),
        });
    }

    let allowed: HashSet<&str> = SUPPORTED_FORMATS.iter().copied().collect();
    for format in formats {
        if !allowed.contains(format.as_str()) {
            return Err(StatsError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: format.clone(),
                reason: format!(
                    "Unsupported format. Valid formats: {}",
                    SUPPORTED_FORMATS.join(", ")
                ),
            });
        }
    }

    Ok(())
}

pub fn parse_categories(field_name: &str, values: &[String]) -> Result<Vec<AvailabilityCategory>> {
    let mut categories = Vec::new();
    for value in values {
        let category = value
            .parse::<AvailabilityCategory>()
            .map_err(|reason| StatsError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: value.clone(),
                reason,
            })?;
        if !categories.contains(&category) {
            categories.push(category);
        }
    }
    Ok(categories)
}

pub fn validate_log_level(field_name: &str, level: &str) -> Result<()> {
    if !LOG_LEVELS.contains(&level) {
        return Err(StatsError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: level.to_string(),
            reason: format!("Unknown log level. Valid levels: {}", LOG_LEVELS.join(", ")),
        });
    }
    Ok(())
}

pub fn validate_unique_ids<'a, I>(ids: I) -> Result<()>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(StatsError::ValidationError {
                message: format!("Duplicate course id: {}", id),
            });
        }
    }
    Ok(())
}
