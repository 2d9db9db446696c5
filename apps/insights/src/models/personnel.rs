use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Rank {
    #[serde(rename = "Flying Officer")]
    FlyingOfficer,
    #[serde(rename = "Flight Lieutenant")]
    FlightLieutenant,
    #[serde(rename = "Squadron Leader")]
    SquadronLeader,
    #[serde(rename = "Wing Commander")]
    WingCommander,
    #[serde(rename = "Group Captain")]
    GroupCaptain,
}

impl Rank {
    pub const ALL: [Rank; 5] = [
        Rank::FlyingOfficer,
        Rank::FlightLieutenant,
        Rank::SquadronLeader,
        Rank::WingCommander,
        Rank::GroupCaptain,
    ];

    /// Display names in `ALL` order.
    pub const NAMES: [&'static str; 5] = {
        let mut names = [""; 5];
        let mut i = 0;
        while i < names.len() {
            names[i] = Rank::ALL[i].as_str();
            i += 1;
        }
        names
    };

    pub const fn as_str(&self) -> &'static str {
        match self {
            Rank::FlyingOfficer => "Flying Officer",
            Rank::FlightLieutenant => "Flight Lieutenant",
            Rank::SquadronLeader => "Squadron Leader",
            Rank::WingCommander => "Wing Commander",
            Rank::GroupCaptain => "Group Captain",
        }
    }
}

impl FromStr for Rank {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Rank::ALL
            .into_iter()
            .find(|r| r.as_str() == s)
            .ok_or_else(|| format!("unknown rank '{s}'"))
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Specialization {
    Pilot,
    Engineer,
    Admin,
    #[serde(rename = "Ground Staff")]
    GroundStaff,
    Medical,
}

impl Specialization {
    pub const ALL: [Specialization; 5] = [
        Specialization::Pilot,
        Specialization::Engineer,
        Specialization::Admin,
        Specialization::GroundStaff,
        Specialization::Medical,
    ];

    /// Display names in `ALL` order.
    pub const NAMES: [&'static str; 5] = {
        let mut names = [""; 5];
        let mut i = 0;
        while i < names.len() {
            names[i] = Specialization::ALL[i].as_str();
            i += 1;
        }
        names
    };

    pub const fn as_str(&self) -> &'static str {
        match self {
            Specialization::Pilot => "Pilot",
            Specialization::Engineer => "Engineer",
            Specialization::Admin => "Admin",
            Specialization::GroundStaff => "Ground Staff",
            Specialization::Medical => "Medical",
        }
    }
}

impl FromStr for Specialization {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Specialization::ALL
            .into_iter()
            .find(|sp| sp.as_str() == s)
            .ok_or_else(|| format!("unknown specialization '{s}'"))
    }
}

impl fmt::Display for Specialization {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The ten attributes collected by the personnel form.
/// Serialized with the PascalCase keys the prediction backend expects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PersonnelAttributes {
    pub age: u32,
    pub years_of_service: u32,
    pub rank: Rank,
    pub specialization: Specialization,
    pub performance_rating: u32,
    pub training_courses_completed: u32,
    pub mission_success_rate: f64,
    pub medical_fitness_score: u32,
    pub peer_review_score: f64,
    pub commanders_assessment: f64,
}

impl Default for PersonnelAttributes {
    fn default() -> Self {
        Self {
            age: 35,
            years_of_service: 12,
            rank: Rank::SquadronLeader,
            specialization: Specialization::Pilot,
            performance_rating: 4,
            training_courses_completed: 9,
            mission_success_rate: 98.5,
            medical_fitness_score: 96,
            peer_review_score: 4.7,
            commanders_assessment: 4.8,
        }
    }
}

/// Names of the form fields, using the same wire spelling as `PersonnelAttributes`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PersonnelField {
    Age,
    YearsOfService,
    Rank,
    Specialization,
    PerformanceRating,
    TrainingCoursesCompleted,
    MissionSuccessRate,
    MedicalFitnessScore,
    PeerReviewScore,
    CommandersAssessment,
}

/// Allowed values for a single field.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldDomain {
    Integer(RangeInclusive<u32>),
    /// Closed range with a 0.1 step.
    Decimal(RangeInclusive<f64>),
    Choice(&'static [&'static str]),
}

impl PersonnelField {
    pub const ALL: [PersonnelField; 10] = [
        PersonnelField::Age,
        PersonnelField::YearsOfService,
        PersonnelField::Rank,
        PersonnelField::Specialization,
        PersonnelField::PerformanceRating,
        PersonnelField::TrainingCoursesCompleted,
        PersonnelField::MissionSuccessRate,
        PersonnelField::MedicalFitnessScore,
        PersonnelField::PeerReviewScore,
        PersonnelField::CommandersAssessment,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            PersonnelField::Age => "Age",
            PersonnelField::YearsOfService => "YearsOfService",
            PersonnelField::Rank => "Rank",
            PersonnelField::Specialization => "Specialization",
            PersonnelField::PerformanceRating => "PerformanceRating",
            PersonnelField::TrainingCoursesCompleted => "TrainingCoursesCompleted",
            PersonnelField::MissionSuccessRate => "MissionSuccessRate",
            PersonnelField::MedicalFitnessScore => "MedicalFitnessScore",
            PersonnelField::PeerReviewScore => "PeerReviewScore",
            PersonnelField::CommandersAssessment => "CommandersAssessment",
        }
    }

    pub fn domain(&self) -> FieldDomain {
        match self {
            PersonnelField::Age => FieldDomain::Integer(20..=60),
            PersonnelField::YearsOfService => FieldDomain::Integer(1..=40),
            PersonnelField::Rank => FieldDomain::Choice(&Rank::NAMES),
            PersonnelField::Specialization => FieldDomain::Choice(&Specialization::NAMES),
            PersonnelField::PerformanceRating => FieldDomain::Integer(1..=5),
            PersonnelField::TrainingCoursesCompleted => FieldDomain::Integer(0..=20),
            PersonnelField::MissionSuccessRate => FieldDomain::Decimal(0.0..=100.0),
            PersonnelField::MedicalFitnessScore => FieldDomain::Integer(0..=100),
            PersonnelField::PeerReviewScore => FieldDomain::Decimal(1.0..=5.0),
            PersonnelField::CommandersAssessment => FieldDomain::Decimal(1.0..=5.0),
        }
    }
}

impl fmt::Display for PersonnelField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A field whose current value falls outside its domain.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldViolation {
    pub field: PersonnelField,
    pub reason: String,
}

impl PersonnelAttributes {
    /// Checks every field against its domain. Enum fields are valid by construction.
    pub fn validate(&self) -> Result<(), Vec<FieldViolation>> {
        let mut violations = Vec::new();

        let integers = [
            (PersonnelField::Age, self.age),
            (PersonnelField::YearsOfService, self.years_of_service),
            (PersonnelField::PerformanceRating, self.performance_rating),
            (
                PersonnelField::TrainingCoursesCompleted,
                self.training_courses_completed,
            ),
            (PersonnelField::MedicalFitnessScore, self.medical_fitness_score),
        ];
        for (field, value) in integers {
            if let FieldDomain::Integer(range) = field.domain() {
                if !range.contains(&value) {
                    violations.push(FieldViolation {
                        field,
                        reason: format!(
                            "{value} is outside {}..={}",
                            range.start(),
                            range.end()
                        ),
                    });
                }
            }
        }

        let decimals = [
            (PersonnelField::MissionSuccessRate, self.mission_success_rate),
            (PersonnelField::PeerReviewScore, self.peer_review_score),
            (PersonnelField::CommandersAssessment, self.commanders_assessment),
        ];
        for (field, value) in decimals {
            if let FieldDomain::Decimal(range) = field.domain() {
                if !value.is_finite() || !range.contains(&value) {
                    violations.push(FieldViolation {
                        field,
                        reason: format!(
                            "{value} is outside {:.1}..={:.1}",
                            range.start(),
                            range.end()
                        ),
                    });
                }
            }
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}
