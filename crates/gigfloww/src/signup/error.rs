use std::fmt;

use serde::{Deserialize, Serialize};

/// Form fields that can fail validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldName {
    Name,
    Email,
    Phone,
    Category,
    Experience,
    SkillLevel,
    Portfolio,
    GithubUrl,
    LinkedinUrl,
    Bio,
    TechnicalSkills,
    ProblemSolvingExample,
    Projects,
    Resume,
}

impl FieldName {
    pub const fn label(self) -> &'static str {
        match self {
            FieldName::Name => "name",
            FieldName::Email => "email",
            FieldName::Phone => "phone",
            FieldName::Category => "category",
            FieldName::Experience => "experience",
            FieldName::SkillLevel => "skill level",
            FieldName::Portfolio => "portfolio",
            FieldName::GithubUrl => "GitHub URL",
            FieldName::LinkedinUrl => "LinkedIn URL",
            FieldName::Bio => "bio",
            FieldName::TechnicalSkills => "technical skills",
            FieldName::ProblemSolvingExample => "problem-solving example",
            FieldName::Projects => "projects",
            FieldName::Resume => "resume",
        }
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Recoverable failures raised while the applicant fills in the form.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error("invalid {field}: {reason}")]
    InvalidField { field: FieldName, reason: String },
    #[error("{0} is required")]
    MissingRequiredField(FieldName),
    #[error("file is {size} bytes, limit is {max}")]
    FileTooLarge { size: u64, max: u64 },
    #[error("file type '{extension}' is not accepted")]
    FileTypeRejected { extension: String },
}

impl FormError {
    /// Text surfaced to the applicant through the notification layer.
    pub fn user_message(&self) -> String {
        match self {
            FormError::InvalidField { field, .. } => format!("Please check your {field}"),
            FormError::MissingRequiredField(_) => "Please fill in all required fields".to_string(),
            FormError::FileTooLarge { max, .. } => {
                format!("File must be less than {}", human_size(*max))
            }
            FormError::FileTypeRejected { .. } => {
                "Only PDF, DOC or DOCX files are accepted".to_string()
            }
        }
    }
}

fn human_size(bytes: u64) -> String {
    const MIB: u64 = 1024 * 1024;
    if bytes >= MIB && bytes % MIB == 0 {
        format!("{}MB", bytes / MIB)
    } else if bytes >= 1024 {
        format!("{}KB", bytes / 1024)
    } else {
        format!("{bytes} bytes")
    }
}
