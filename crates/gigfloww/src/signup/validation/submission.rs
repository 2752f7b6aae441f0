use serde::{Deserialize, Serialize};

use super::super::domain::ApplicationRecord;
use super::super::error::{FieldName, FormError};
use super::rules::RequiredField;

/// First reason a record is not ready to submit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmissionFailure {
    NameTooShort,
    InvalidEmail,
    InvalidPhone,
    MissingClassification,
    InvalidPortfolio,
    BioTooShort,
}

impl SubmissionFailure {
    pub const fn code(self) -> &'static str {
        match self {
            SubmissionFailure::NameTooShort => "name_too_short",
            SubmissionFailure::InvalidEmail => "invalid_email",
            SubmissionFailure::InvalidPhone => "invalid_phone",
            SubmissionFailure::MissingClassification => "missing_classification",
            SubmissionFailure::InvalidPortfolio => "invalid_portfolio",
            SubmissionFailure::BioTooShort => "bio_too_short",
        }
    }

    pub const fn message(self) -> &'static str {
        match self {
            SubmissionFailure::NameTooShort => "Name must be at least 2 characters long",
            SubmissionFailure::InvalidEmail => "Please enter a valid email address",
            SubmissionFailure::InvalidPhone => "Please enter a valid phone number",
            SubmissionFailure::MissingClassification => "Please fill in all required fields",
            SubmissionFailure::InvalidPortfolio => "Please enter a valid portfolio URL",
            SubmissionFailure::BioTooShort => {
                "Please provide a more detailed bio (minimum 50 characters)"
            }
        }
    }
}

impl std::fmt::Display for SubmissionFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.code().replace('_', " "))
    }
}

impl From<SubmissionFailure> for FormError {
    fn from(failure: SubmissionFailure) -> Self {
        let invalid = |field: FieldName| FormError::InvalidField {
            field,
            reason: failure.message().to_string(),
        };
        match failure {
            SubmissionFailure::NameTooShort => invalid(FieldName::Name),
            SubmissionFailure::InvalidEmail => invalid(FieldName::Email),
            SubmissionFailure::InvalidPhone => invalid(FieldName::Phone),
            SubmissionFailure::MissingClassification => {
                FormError::MissingRequiredField(FieldName::Category)
            }
            SubmissionFailure::InvalidPortfolio => invalid(FieldName::Portfolio),
            SubmissionFailure::BioTooShort => invalid(FieldName::Bio),
        }
    }
}

/// Outcome of the pre-submission check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionVerdict {
    pub ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failure_reason: Option<SubmissionFailure>,
}

impl SubmissionVerdict {
    pub const fn passed() -> Self {
        Self {
            ok: true,
            failure_reason: None,
        }
    }

    pub const fn failed(reason: SubmissionFailure) -> Self {
        Self {
            ok: false,
            failure_reason: Some(reason),
        }
    }
}

/// Gate order: name, email, phone, classification (category, experience and
/// skill level together), portfolio, bio. Each step reuses the completion predicate.
const GATE: &[(&[RequiredField], SubmissionFailure)] = &[
    (&[RequiredField::Name], SubmissionFailure::NameTooShort),
    (&[RequiredField::Email], SubmissionFailure::InvalidEmail),
    (&[RequiredField::Phone], SubmissionFailure::InvalidPhone),
    (
        &[
            RequiredField::Category,
            RequiredField::Experience,
            RequiredField::SkillLevel,
        ],
        SubmissionFailure::MissingClassification,
    ),
    (&[RequiredField::Portfolio], SubmissionFailure::InvalidPortfolio),
    (&[RequiredField::Bio], SubmissionFailure::BioTooShort),
];

pub fn validate_submission(record: &ApplicationRecord) -> SubmissionVerdict {
    GATE.iter()
        .find(|(fields, _)| !fields.iter().all(|field| field.is_satisfied(record)))
        .map(|(_, failure)| SubmissionVerdict::failed(*failure))
        .unwrap_or_else(SubmissionVerdict::passed)
}
