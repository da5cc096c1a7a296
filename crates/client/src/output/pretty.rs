//! Pretty output formatting.

use catalog_core::course::Course;

/// Format a course for display.
pub fn format_course(course: &Course) -> String {
    format!(
        "{} ({:.2})\n  ID: {}\n  Created: {}\n  Updated: {}",
        course.name,
        course.price,
        course.id,
        course.created_at.to_rfc3339(),
        course.updated_at.to_rfc3339()
    )
}
