use crate::assessment::{AssessmentBundle, Category, Icon, Tone};

const HIGH: AssessmentBundle = AssessmentBundle::new(
    Tone::Positive,
    Icon::Star,
    "High Leadership Potential",
    "This personnel demonstrates exceptional leadership qualities and is ready for advanced responsibilities.",
    &[
        "Consider for promotion to higher ranks",
        "Assign to leadership development programs",
        "Mentor junior personnel",
        "Lead critical missions and projects",
    ],
);

const MEDIUM: AssessmentBundle = AssessmentBundle::new(
    Tone::Caution,
    Icon::TrendingUp,
    "Medium Leadership Potential",
    "Shows good leadership abilities with room for growth and development.",
    &[
        "Provide additional leadership training",
        "Assign as deputy in team projects",
        "Encourage participation in command exercises",
        "Monitor progress for future advancement",
    ],
);

const LOW: AssessmentBundle = AssessmentBundle::new(
    Tone::Developing,
    Icon::Target,
    "Developing Leadership Potential",
    "Currently focused on technical excellence with potential for leadership development.",
    &[
        "Focus on technical skill enhancement",
        "Provide foundational leadership training",
        "Assign to cross-functional teams",
        "Develop communication and interpersonal skills",
    ],
);

const PENDING: AssessmentBundle = AssessmentBundle::new(
    Tone::Neutral,
    Icon::Users,
    "Assessment Pending",
    "Further evaluation needed to determine leadership potential.",
    &["Conduct additional assessments"],
);

/// Recommendations for a leadership-potential category.
pub fn leadership_bundle(category: Category) -> AssessmentBundle {
    match category {
        Category::High => HIGH,
        Category::Medium => MEDIUM,
        Category::Low => LOW,
        Category::Unspecified => PENDING,
    }
}
