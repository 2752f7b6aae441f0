use serde::{Deserialize, Serialize};

use super::super::domain::ApplicationRecord;
use super::super::error::FieldName;
use super::patterns::{validate_email, validate_phone, validate_url};

pub const MIN_NAME_CHARS: usize = 2;
pub const MIN_BIO_CHARS: usize = 50;

/// The ten predicates behind the completion score. A subset also gates submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RequiredField {
    Name,
    Email,
    Phone,
    Category,
    Experience,
    SkillLevel,
    Portfolio,
    Bio,
    TechnicalSkills,
    ProblemSolvingExample,
}

impl RequiredField {
    pub const ALL: [RequiredField; 10] = [
        RequiredField::Name,
        RequiredField::Email,
        RequiredField::Phone,
        RequiredField::Category,
        RequiredField::Experience,
        RequiredField::SkillLevel,
        RequiredField::Portfolio,
        RequiredField::Bio,
        RequiredField::TechnicalSkills,
        RequiredField::ProblemSolvingExample,
    ];

    pub fn is_satisfied(self, record: &ApplicationRecord) -> bool {
        match self {
            RequiredField::Name => name_is_long_enough(&record.name),
            RequiredField::Email => validate_email(&record.email),
            RequiredField::Phone => validate_phone(&record.phone),
            RequiredField::Category => record.category.is_some(),
            RequiredField::Experience => record.experience.is_some(),
            RequiredField::SkillLevel => record.skill_level.is_some(),
            RequiredField::Portfolio => validate_url(&record.portfolio),
            RequiredField::Bio => bio_is_detailed(&record.bio),
            RequiredField::TechnicalSkills => record.has_rated_skill(),
            RequiredField::ProblemSolvingExample => !record.problem_solving_example.is_empty(),
        }
    }

    pub const fn field(self) -> FieldName {
        match self {
            RequiredField::Name => FieldName::Name,
            RequiredField::Email => FieldName::Email,
            RequiredField::Phone => FieldName::Phone,
            RequiredField::Category => FieldName::Category,
            RequiredField::Experience => FieldName::Experience,
            RequiredField::SkillLevel => FieldName::SkillLevel,
            RequiredField::Portfolio => FieldName::Portfolio,
            RequiredField::Bio => FieldName::Bio,
            RequiredField::TechnicalSkills => FieldName::TechnicalSkills,
            RequiredField::ProblemSolvingExample => FieldName::ProblemSolvingExample,
        }
    }
}

/// Lengths are counted in characters, not bytes, and the text is not trimmed.
pub fn name_is_long_enough(name: &str) -> bool {
    name.chars().count() >= MIN_NAME_CHARS
}

pub fn bio_is_detailed(bio: &str) -> bool {
    bio.chars().count() >= MIN_BIO_CHARS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lengths_count_characters() {
        assert!(!name_is_long_enough("J"));
        assert!(name_is_long_enough("Jo"));
        assert!(name_is_long_enough("Zoë"));
        assert!(!bio_is_detailed(&"é".repeat(49)));
        assert!(bio_is_detailed(&"é".repeat(50)));
    }

    #[test]
    fn blank_record_satisfies_nothing() {
        let record = ApplicationRecord::new();
        assert!(RequiredField::ALL
            .iter()
            .all(|field| !field.is_satisfied(&record)));
    }
}
