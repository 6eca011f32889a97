use crate::core::{AvailabilityCategory, EnrollmentStatistics};

/// 依統計結果判斷顯示用的名額狀態，額滿優先於名額有限
pub fn classify(stats: &EnrollmentStatistics) -> AvailabilityCategory {
    if stats.is_full {
        AvailabilityCategory::Full
    } else if stats.has_limited_availability {
        AvailabilityCategory::Limited
    } else {
        AvailabilityCategory::Available
    }
}
