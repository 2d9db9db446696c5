use crate::assessment::{AssessmentBundle, Category, Icon, Tone};

const LOW: AssessmentBundle = AssessmentBundle::new(
    Tone::Positive,
    Icon::CheckCircle,
    "Low Attrition Risk",
    "Highly engaged and committed personnel with strong retention likelihood.",
    &[
        "High job satisfaction and engagement",
        "Strong performance metrics",
        "Good career progression prospects",
        "Positive peer and commander relationships",
    ],
);

const MEDIUM: AssessmentBundle = AssessmentBundle::new(
    Tone::Caution,
    Icon::Shield,
    "Medium Attrition Risk",
    "Moderate retention risk requiring attention to engagement and development.",
    &[
        "Monitor job satisfaction levels",
        "Provide career development opportunities",
        "Address any performance concerns",
        "Enhance peer support and mentoring",
    ],
);

const HIGH: AssessmentBundle = AssessmentBundle::new(
    Tone::Critical,
    Icon::AlertTriangle,
    "High Attrition Risk",
    "Immediate attention required to address retention concerns and re-engage personnel.",
    &[
        "Conduct immediate retention interview",
        "Address performance and satisfaction issues",
        "Consider role reassignment or additional training",
        "Implement personalized retention strategies",
    ],
);

const PENDING: AssessmentBundle = AssessmentBundle::new(
    Tone::Neutral,
    Icon::Users,
    "Assessment Pending",
    "Further analysis needed to determine attrition risk.",
    &["Conduct comprehensive evaluation"],
);

/// Action items for an attrition-risk category. Note the severity runs the
/// opposite way to leadership: `High` is the critical case.
pub fn attrition_bundle(category: Category) -> AssessmentBundle {
    match category {
        Category::Low => LOW,
        Category::Medium => MEDIUM,
        Category::High => HIGH,
        Category::Unspecified => PENDING,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_high_risk_calls_for_intervention() {
        let bundle = attrition_bundle(Category::High);
        assert_eq!(bundle.title, "High Attrition Risk");
        assert_eq!(bundle.tone, Tone::Critical);
        assert_eq!(bundle.items[0], "Conduct immediate retention interview");
        assert!(bundle
            .items
            .contains(&"Consider role reassignment or additional training"));
    }

    #[test]
    fn test_low_risk_has_four_retention_factors() {
        let bundle = attrition_bundle(Category::Low);
        assert_eq!(bundle.items.len(), 4);
        assert_eq!(bundle.color, "green");
    }

    #[test]
    fn test_medium_is_monitoring_oriented() {
        let bundle = attrition_bundle(Category::Medium);
        assert_eq!(bundle.title, "Medium Attrition Risk");
        assert_eq!(bundle.items[0], "Monitor job satisfaction levels");
    }

    #[test]
    fn test_pending_message() {
        let bundle = attrition_bundle(Category::Unspecified);
        assert_eq!(bundle.title, "Assessment Pending");
        assert_eq!(bundle.items, &["Conduct comprehensive evaluation"]);
    }
}
