//! Result interpreter: turns the backend's categorical labels into display bundles.
//!
//! Both axes are static tables keyed by `Category`. The only work done here is
//! case normalization of the label and an exhaustive lookup.

pub mod attrition;
pub mod leadership;

use serde::Serialize;

use crate::models::prediction::PredictionResult;

pub use attrition::attrition_bundle;
pub use leadership::leadership_bundle;

/// Sentence shown under every analysis summary.
pub const DISCLAIMER: &str = "This analysis is based on AI models trained on IAF personnel data. \
Use these insights as part of a comprehensive evaluation process.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    High,
    Medium,
    Low,
    Unspecified,
}

impl Category {
    /// Case-insensitive; anything outside high/medium/low is `Unspecified`.
    pub fn from_label(label: &str) -> Self {
        match label.to_lowercase().as_str() {
            "high" => Category::High,
            "medium" => Category::Medium,
            "low" => Category::Low,
            _ => Category::Unspecified,
        }
    }
}

/// Semantic severity of a bundle. Each tone has a fixed display color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Positive,
    Caution,
    Developing,
    Critical,
    Neutral,
}

impl Tone {
    pub const fn color(&self) -> &'static str {
        match self {
            Tone::Positive => "green",
            Tone::Caution => "yellow",
            Tone::Developing => "blue",
            Tone::Critical => "red",
            Tone::Neutral => "gray",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Icon {
    Star,
    TrendingUp,
    Target,
    Users,
    CheckCircle,
    Shield,
    AlertTriangle,
}

/// Display metadata plus the ordered recommendation or action list for one axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AssessmentBundle {
    pub tone: Tone,
    pub color: &'static str,
    pub icon: Icon,
    pub title: &'static str,
    pub description: &'static str,
    pub items: &'static [&'static str],
}

impl AssessmentBundle {
    pub const fn new(
        tone: Tone,
        icon: Icon,
        title: &'static str,
        description: &'static str,
        items: &'static [&'static str],
    ) -> Self {
        Self {
            tone,
            color: tone.color(),
            icon,
            title,
            description,
            items,
        }
    }
}

/// Raw labels as the summary card shows them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AssessmentSummary {
    pub leadership: String,
    pub retention: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Assessment {
    pub leadership_category: Category,
    pub attrition_category: Category,
    pub leadership: AssessmentBundle,
    pub attrition: AssessmentBundle,
    pub summary: AssessmentSummary,
    pub disclaimer: &'static str,
}

pub fn interpret(result: &PredictionResult) -> Assessment {
    let leadership_category = Category::from_label(&result.leadership_potential);
    let attrition_category = Category::from_label(&result.attrition_risk);

    Assessment {
        leadership_category,
        attrition_category,
        leadership: leadership_bundle(leadership_category),
        attrition: attrition_bundle(attrition_category),
        summary: AssessmentSummary {
            leadership: result.leadership_potential.clone(),
            retention: format!("{} Risk", result.attrition_risk),
        },
        disclaimer: DISCLAIMER,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(leadership: &str, attrition: &str) -> PredictionResult {
        PredictionResult {
            leadership_potential: leadership.to_string(),
            attrition_risk: attrition.to_string(),
        }
    }

    #[test]
    fn test_labels_match_in_any_casing() {
        for label in ["high", "HIGH", "High", "hIgH"] {
            assert_eq!(Category::from_label(label), Category::High);
        }
        assert_eq!(Category::from_label("MEDIUM"), Category::Medium);
        assert_eq!(Category::from_label("low"), Category::Low);
    }

    #[test]
    fn test_unmatched_labels_are_unspecified() {
        for label in ["unknown", "", " high", "very high", "none"] {
            assert_eq!(Category::from_label(label), Category::Unspecified, "{label:?}");
        }
    }

    #[test]
    fn test_interpret_high_low() {
        let assessment = interpret(&result("High", "Low"));
        assert_eq!(assessment.leadership.title, "High Leadership Potential");
        assert_eq!(assessment.attrition.title, "Low Attrition Risk");
        assert_eq!(assessment.summary.leadership, "High");
        assert_eq!(assessment.summary.retention, "Low Risk");
    }

    #[test]
    fn test_interpret_unknown_labels_fall_back_to_pending() {
        let assessment = interpret(&result("unknown", ""));
        assert_eq!(assessment.leadership_category, Category::Unspecified);
        assert_eq!(assessment.leadership.title, "Assessment Pending");
        assert_eq!(assessment.attrition.title, "Assessment Pending");
        assert_eq!(assessment.leadership.tone, Tone::Neutral);
    }

    #[test]
    fn test_bundle_serializes_tone_color_and_icon() {
        let value = serde_json::to_value(leadership_bundle(Category::High)).unwrap();
        assert_eq!(value["tone"], "positive");
        assert_eq!(value["color"], "green");
        assert_eq!(value["icon"], "star");
        assert_eq!(value["items"].as_array().unwrap().len(), 4);
    }
}
