//! Priority and department derivation for new reports.

use crate::features::reports::models::Priority;

const HIGH_PRIORITY_KEYWORDS: &[&str] = &["accident", "injury", "live wire", "overflowing"];

const MEDIUM_PRIORITY_KEYWORDS: &[&str] = &["blocked", "leak", "night"];

/// Department used for any category without an explicit route
pub const FALLBACK_DEPARTMENT: &str = "General Admin";

/// Infer urgency from the category and description.
///
/// Case-insensitive substring match; high keywords win over medium ones.
pub fn infer_priority(category: &str, description: &str) -> Priority {
    let text = format!("{} {}", category, description).to_lowercase();

    if HIGH_PRIORITY_KEYWORDS.iter().any(|k| text.contains(k)) {
        Priority::High
    } else if MEDIUM_PRIORITY_KEYWORDS.iter().any(|k| text.contains(k)) {
        Priority::Medium
    } else {
        Priority::Low
    }
}

/// Map a category to the responsible department (exact, case-sensitive match).
pub fn assign_department(category: &str) -> &'static str {
    match category {
        "Pothole" => "Public Works",
        "Streetlight" => "Electrical",
        "Garbage" => "Sanitation",
        "Water" => "Water Board",
        "Safety" => "Traffic Police",
        _ => FALLBACK_DEPARTMENT,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_infer_priority_tiers() {
        assert_eq!(infer_priority("Safety", "there was an accident"), Priority::High);
        assert_eq!(infer_priority("Water", "pipe leak at night"), Priority::Medium);
        assert_eq!(infer_priority("Garbage", "bin is full"), Priority::Low);
    }

    #[test]
    fn test_infer_priority_high_wins_over_medium() {
        assert_eq!(
            infer_priority("Water", "blocked drain overflowing at night"),
            Priority::High
        );
    }

    #[test]
    fn test_infer_priority_is_case_insensitive() {
        assert_eq!(infer_priority("Streetlight", "LIVE WIRE hanging"), Priority::High);
        assert_eq!(infer_priority("BLOCKED", ""), Priority::Medium);
    }

    #[test]
    fn test_infer_priority_spans_category_and_description() {
        // "live" + " " + "wire" only appears once joined
        assert_eq!(infer_priority("live", "wire"), Priority::High);
        assert_eq!(infer_priority("", ""), Priority::Low);
    }

    #[test]
    fn test_assign_department() {
        assert_eq!(assign_department("Pothole"), "Public Works");
        assert_eq!(assign_department("Streetlight"), "Electrical");
        assert_eq!(assign_department("Garbage"), "Sanitation");
        assert_eq!(assign_department("Water"), "Water Board");
        assert_eq!(assign_department("Safety"), "Traffic Police");
        assert_eq!(assign_department("Other"), "General Admin");
    }

    #[test]
    fn test_assign_department_unknown_and_case_sensitive() {
        assert_eq!(assign_department("Unknown"), "General Admin");
        assert_eq!(assign_department("pothole"), "General Admin");
        assert_eq!(assign_department(""), "General Admin");
    }
}
