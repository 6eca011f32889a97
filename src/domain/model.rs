use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// 課程快照：由外部系統提供，本模組只讀取
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub max_students: usize,
    #[serde(default)]
    pub enrolled_students: Vec<String>,
}

impl Course {
    pub fn new(id: impl Into<String>, max_students: usize) -> Self {
        Self {
            id: id.into(),
            title: None,
            max_students,
            enrolled_students: Vec::new(),
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_enrolled<I, T>(mut self, students: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.enrolled_students = students.into_iter().map(Into::into).collect();
        self
    }

    /// 加選後的新快照（不檢查重複）
    pub fn with_student(&self, student: impl Into<String>) -> Self {
        let mut next = self.clone();
        next.enrolled_students.push(student.into());
        next
    }

    /// 退選後的新快照：只移除第一個相符的學生，找不到時原樣複製
    pub fn without_student(&self, student: &str) -> Self {
        let mut next = self.clone();
        if let Some(pos) = next.enrolled_students.iter().position(|s| s == student) {
            next.enrolled_students.remove(pos);
        }
        next
    }

    pub fn display_name(&self) -> &str {
        self.title.as_deref().unwrap_or(&self.id)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrollmentStatistics {
    pub enrolled_count: usize,
    pub max_capacity: usize,
    pub available_spots: usize,
    pub enrollment_percentage: f64,
    pub is_full: bool,
    pub has_limited_availability: bool,
}

impl EnrollmentStatistics {
    pub fn is_over_enrolled(&self) -> bool {
        self.enrolled_count > self.max_capacity
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AvailabilityCategory {
    Full,
    Limited,
    Available,
}

impl AvailabilityCategory {
    pub const ALL: [AvailabilityCategory; 3] = [Self::Full, Self::Limited, Self::Available];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Full => "full",
            Self::Limited => "limited",
            Self::Available => "available",
        }
    }
}

impl fmt::Display for AvailabilityCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for AvailabilityCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "full" => Ok(Self::Full),
            "limited" => Ok(Self::Limited),
            "available" => Ok(Self::Available),
            other => Err(format!(
                "Unknown availability category '{}'. Valid categories: full, limited, available",
                other
            )),
        }
    }
}

/// 報表中每門課程的一列
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseReport {
    pub id: String,
    pub title: Option<String>,
    #[serde(flatten)]
    pub statistics: EnrollmentStatistics,
    pub availability: AvailabilityCategory,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogSummary {
    pub total_courses: usize,
    pub full_courses: usize,
    pub limited_courses: usize,
    pub available_courses: usize,
    pub total_enrolled: usize,
    pub total_capacity: usize,
    pub total_available_spots: usize,
    pub overall_percentage: f64,
}

#[derive(Debug, Clone)]
pub struct ReportResult {
    pub rows: Vec<CourseReport>,
    pub summary: CatalogSummary,
    pub json_output: String,
    pub csv_output: String,
}
