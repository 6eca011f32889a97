use crate::core::{Course, EnrollmentStatistics};

/// 剩餘名額低於此值（且大於 0）視為名額有限
pub const LIMITED_AVAILABILITY_THRESHOLD: usize = 5;

/// 由課程快照計算選課統計。
///
/// `enrolled_students` 只取其長度，不假設已去重。超額選課時剩餘名額歸零，
/// 百分比不設上限；容量為 0 時百分比為 0。
pub fn compute(course: &Course) -> EnrollmentStatistics {
    let enrolled_count = course.enrolled_students.len();
    let max_capacity = course.max_students;
    let available_spots = max_capacity.saturating_sub(enrolled_count);

    let enrollment_percentage = if max_capacity > 0 {
        (enrolled_count as f64 / max_capacity as f64) * 100.0
    } else {
        0.0
    };

    EnrollmentStatistics {
        enrolled_count,
        max_capacity,
        available_spots,
        enrollment_percentage,
        is_full: available_spots == 0,
        has_limited_availability: available_spots > 0
            && available_spots < LIMITED_AVAILABILITY_THRESHOLD,
    }
}
