use serde::{Deserialize, Serialize};

use crate::models::personnel::PersonnelAttributes;

/// Identifier sent with every prediction; the form edits a single record.
pub const PLACEHOLDER_PERSONNEL_ID: u32 = 101;

/// Sent as-is; the backend computes attrition risk itself.
pub const PLACEHOLDER_ATTRITION_RISK: &str = "Low";

/// Body of `POST {endpoint}/predict`.
#[derive(Debug, Clone, Serialize)]
pub struct PredictionRequest<'a> {
    #[serde(rename = "PersonnelID")]
    pub personnel_id: u32,
    #[serde(flatten)]
    pub attributes: &'a PersonnelAttributes,
    #[serde(rename = "AttritionRisk")]
    pub attrition_risk: &'static str,
}

impl<'a> PredictionRequest<'a> {
    pub fn new(attributes: &'a PersonnelAttributes) -> Self {
        Self {
            personnel_id: PLACEHOLDER_PERSONNEL_ID,
            attributes,
            attrition_risk: PLACEHOLDER_ATTRITION_RISK,
        }
    }
}

/// Successful response body. Labels are categorical and case-insensitive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PredictionResult {
    pub leadership_potential: String,
    pub attrition_risk: String,
}
