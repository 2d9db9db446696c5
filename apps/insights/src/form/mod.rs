//! Form state holder: the editable personnel record behind the dashboard.
//!
//! Field updates behave like the range inputs of the form: numbers are clamped
//! into the field's domain and decimals snap to one place. Values that no widget
//! could produce (text in a numeric field, unknown ranks) are rejected.

pub mod handlers;

use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

use crate::models::personnel::{
    FieldDomain, PersonnelAttributes, PersonnelField, Rank, Specialization,
};

#[derive(Debug, Error, PartialEq)]
pub enum FormError {
    #[error("{0} expects a number")]
    NotANumber(PersonnelField),

    #[error("{0} must be a finite number")]
    NonFinite(PersonnelField),

    #[error("{0} expects one of its listed options")]
    NotText(PersonnelField),

    #[error("{field}: {reason}")]
    UnknownChoice {
        field: PersonnelField,
        reason: String,
    },
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormState {
    attributes: PersonnelAttributes,
}

impl FormState {
    pub fn attributes(&self) -> &PersonnelAttributes {
        &self.attributes
    }

    pub fn reset(&mut self) {
        self.attributes = PersonnelAttributes::default();
    }

    /// Replaces one field and leaves the others untouched.
    /// On error the state is unchanged.
    pub fn set_field(&mut self, field: PersonnelField, value: &Value) -> Result<(), FormError> {
        let attrs = &mut self.attributes;
        match field {
            PersonnelField::Age => attrs.age = clamped(field, value)? as u32,
            PersonnelField::YearsOfService => attrs.years_of_service = clamped(field, value)? as u32,
            PersonnelField::PerformanceRating => {
                attrs.performance_rating = clamped(field, value)? as u32
            }
            PersonnelField::TrainingCoursesCompleted => {
                attrs.training_courses_completed = clamped(field, value)? as u32
            }
            PersonnelField::MedicalFitnessScore => {
                attrs.medical_fitness_score = clamped(field, value)? as u32
            }
            PersonnelField::MissionSuccessRate => {
                attrs.mission_success_rate = clamped(field, value)?
            }
            PersonnelField::PeerReviewScore => attrs.peer_review_score = clamped(field, value)?,
            PersonnelField::CommandersAssessment => {
                attrs.commanders_assessment = clamped(field, value)?
            }
            PersonnelField::Rank => {
                attrs.rank = choice(field, value)?
                    .parse::<Rank>()
                    .map_err(|reason| FormError::UnknownChoice { field, reason })?
            }
            PersonnelField::Specialization => {
                attrs.specialization = choice(field, value)?
                    .parse::<Specialization>()
                    .map_err(|reason| FormError::UnknownChoice { field, reason })?
            }
        }
        Ok(())
    }
}

/// Reads a number and fits it to the field's range: integers round, decimals
/// snap to one place.
fn clamped(field: PersonnelField, value: &Value) -> Result<f64, FormError> {
    let n = finite_number(field, value)?;
    Ok(match field.domain() {
        FieldDomain::Integer(range) => n.round().clamp(*range.start() as f64, *range.end() as f64),
        FieldDomain::Decimal(range) => snap_to_tenth(n.clamp(*range.start(), *range.end())),
        FieldDomain::Choice(_) => return Err(FormError::NotText(field)),
    })
}

fn choice(field: PersonnelField, value: &Value) -> Result<&str, FormError> {
    value.as_str().ok_or(FormError::NotText(field))
}

/// Describes one input for whatever renders the form.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldSchema {
    pub field: PersonnelField,
    pub kind: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub step: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<&'static [&'static str]>,
    pub default: Value,
}

/// Input descriptions for all ten fields, in form order.
pub fn schema() -> Vec<FieldSchema> {
    let defaults = serde_json::to_value(PersonnelAttributes::default()).unwrap_or_default();
    PersonnelField::ALL
        .into_iter()
        .map(|field| {
            let default = defaults.get(field.name()).cloned().unwrap_or(Value::Null);
            match field.domain() {
                FieldDomain::Integer(range) => FieldSchema {
                    field,
                    kind: "integer",
                    min: Some(*range.start() as f64),
                    max: Some(*range.end() as f64),
                    step: Some(1.0),
                    options: None,
                    default,
                },
                FieldDomain::Decimal(range) => FieldSchema {
                    field,
                    kind: "decimal",
                    min: Some(*range.start()),
                    max: Some(*range.end()),
                    step: Some(0.1),
                    options: None,
                    default,
                },
                FieldDomain::Choice(options) => FieldSchema {
                    field,
                    kind: "choice",
                    min: None,
                    max: None,
                    step: None,
                    options: Some(options),
                    default,
                },
            }
        })
        .collect()
}

fn finite_number(field: PersonnelField, value: &Value) -> Result<f64, FormError> {
    let n = value.as_f64().ok_or(FormError::NotANumber(field))?;
    if n.is_finite() {
        Ok(n)
    } else {
        Err(FormError::NonFinite(field))
    }
}

fn snap_to_tenth(n: f64) -> f64 {
    (n * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_default_form_matches_documented_defaults() {
        let form = FormState::default();
        let a = form.attributes();
        assert_eq!(a.age, 35);
        assert_eq!(a.years_of_service, 12);
        assert_eq!(a.rank, Rank::SquadronLeader);
        assert_eq!(a.specialization, Specialization::Pilot);
        assert_eq!(a.performance_rating, 4);
        assert_eq!(a.training_courses_completed, 9);
        assert_eq!(a.mission_success_rate, 98.5);
        assert_eq!(a.medical_fitness_score, 96);
        assert_eq!(a.peer_review_score, 4.7);
        assert_eq!(a.commanders_assessment, 4.8);
    }

    #[test]
    fn test_set_field_preserves_other_fields() {
        let mut form = FormState::default();
        form.set_field(PersonnelField::Age, &json!(42)).unwrap();

        let expected = PersonnelAttributes {
            age: 42,
            ..Default::default()
        };
        assert_eq!(form.attributes(), &expected);
    }

    #[test]
    fn test_integer_fields_clamp_to_domain() {
        let mut form = FormState::default();
        form.set_field(PersonnelField::Age, &json!(75)).unwrap();
        form.set_field(PersonnelField::YearsOfService, &json!(-3)).unwrap();
        form.set_field(PersonnelField::PerformanceRating, &json!(4.6)).unwrap();

        assert_eq!(form.attributes().age, 60);
        assert_eq!(form.attributes().years_of_service, 1);
        assert_eq!(form.attributes().performance_rating, 5);
    }

    #[test]
    fn test_decimal_fields_clamp_and_snap_to_tenth() {
        let mut form = FormState::default();
        form.set_field(PersonnelField::MissionSuccessRate, &json!(101.2)).unwrap();
        form.set_field(PersonnelField::PeerReviewScore, &json!(3.14159)).unwrap();
        form.set_field(PersonnelField::CommandersAssessment, &json!(0)).unwrap();

        assert_eq!(form.attributes().mission_success_rate, 100.0);
        assert_eq!(form.attributes().peer_review_score, 3.1);
        assert_eq!(form.attributes().commanders_assessment, 1.0);
    }

    #[test]
    fn test_choice_fields_accept_listed_names() {
        let mut form = FormState::default();
        form.set_field(PersonnelField::Rank, &json!("Group Captain")).unwrap();
        form.set_field(PersonnelField::Specialization, &json!("Ground Staff")).unwrap();

        assert_eq!(form.attributes().rank, Rank::GroupCaptain);
        assert_eq!(form.attributes().specialization, Specialization::GroundStaff);
    }

    #[test]
    fn test_rejected_values_leave_state_unchanged() {
        let mut form = FormState::default();

        assert_eq!(
            form.set_field(PersonnelField::Age, &json!("forty")),
            Err(FormError::NotANumber(PersonnelField::Age))
        );
        assert_eq!(
            form.set_field(PersonnelField::Rank, &json!(3)),
            Err(FormError::NotText(PersonnelField::Rank))
        );
        assert!(matches!(
            form.set_field(PersonnelField::Specialization, &json!("Navigator")),
            Err(FormError::UnknownChoice { .. })
        ));
        assert_eq!(form, FormState::default());
    }

    #[test]
    fn test_schema_lists_every_field_with_default() {
        let schema = schema();
        assert_eq!(schema.len(), 10);

        let rank = schema.iter().find(|s| s.field == PersonnelField::Rank).unwrap();
        assert_eq!(rank.kind, "choice");
        assert_eq!(rank.options.unwrap().len(), 5);
        assert_eq!(rank.default, json!("Squadron Leader"));

        let mission = &schema[6];
        assert_eq!(mission.field, PersonnelField::MissionSuccessRate);
        assert_eq!((mission.min, mission.max, mission.step), (Some(0.0), Some(100.0), Some(0.1)));
        assert_eq!(mission.default, json!(98.5));
    }

    #[test]
    fn test_reset_restores_defaults() {
        let mut form = FormState::default();
        form.set_field(PersonnelField::MedicalFitnessScore, &json!(12)).unwrap();
        form.reset();
        assert_eq!(form, FormState::default());
    }
}
