use serde::{Deserialize, Serialize};

use super::domain::{
    ApplicationRecord, Availability, Category, CommunicationStyle, ExperienceBucket, Project,
    ProjectField, ProjectPreference, SkillLevel, SkillRating, Timezone, WorkEnvironment,
    WorkHours,
};
use super::error::{FieldName, FormError};

/// One user interaction with the form, expressed as data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum RecordEdit {
    SetName(String),
    SetEmail(String),
    SetPhone(String),
    SetCategory(Option<Category>),
    SetExperience(Option<ExperienceBucket>),
    SetSkillLevel(Option<SkillLevel>),
    SetPortfolio(String),
    SetGithubUrl(String),
    SetLinkedinUrl(String),
    SetBio(String),
    SetProblemSolvingExample(String),
    SetAdaptabilityExample(String),
    RateSkill { skill: String, rating: u8 },
    AddCertification(String),
    RemoveCertification(usize),
    AddAchievement(String),
    RemoveAchievement(usize),
    AddProject,
    UpdateProject {
        index: usize,
        field: ProjectField,
        value: String,
    },
    RemoveProject(usize),
    SetAvailability(Option<Availability>),
    SetTimezone(Option<Timezone>),
    SetWorkEnvironment(Option<WorkEnvironment>),
    SetCommunicationStyle(Option<CommunicationStyle>),
    SetWorkHours(Option<WorkHours>),
    SetProjectPreference(Option<ProjectPreference>),
    SetImmediateStart(bool),
    ClearResume,
}

impl ApplicationRecord {
    /// Returns the record with `edit` applied. `self` is left untouched.
    pub fn apply(&self, edit: RecordEdit) -> Result<ApplicationRecord, FormError> {
        let mut next = self.clone();
        match edit {
            RecordEdit::SetName(value) => next.name = value,
            RecordEdit::SetEmail(value) => next.email = value,
            RecordEdit::SetPhone(value) => next.phone = value,
            RecordEdit::SetCategory(value) => next.category = value,
            RecordEdit::SetExperience(value) => next.experience = value,
            RecordEdit::SetSkillLevel(value) => next.skill_level = value,
            RecordEdit::SetPortfolio(value) => next.portfolio = value,
            RecordEdit::SetGithubUrl(value) => next.github_url = value,
            RecordEdit::SetLinkedinUrl(value) => next.linkedin_url = value,
            RecordEdit::SetBio(value) => next.bio = value,
            RecordEdit::SetProblemSolvingExample(value) => next.problem_solving_example = value,
            RecordEdit::SetAdaptabilityExample(value) => next.adaptability_example = value,
            RecordEdit::RateSkill { skill, rating } => {
                let skill = skill.trim().to_string();
                if skill.is_empty() {
                    return Err(FormError::InvalidField {
                        field: FieldName::TechnicalSkills,
                        reason: "skill name is empty".to_string(),
                    });
                }
                let rating = SkillRating::new(rating)?;
                next.technical_skills.insert(skill, rating);
            }
            RecordEdit::AddCertification(text) => {
                next.certifications = append_trimmed(&self.certifications, &text);
            }
            RecordEdit::RemoveCertification(index) => {
                next.certifications = remove_at(&self.certifications, index);
            }
            RecordEdit::AddAchievement(text) => {
                next.achievements = append_trimmed(&self.achievements, &text);
            }
            RecordEdit::RemoveAchievement(index) => {
                next.achievements = remove_at(&self.achievements, index);
            }
            RecordEdit::AddProject => next.projects.push(Project::default()),
            RecordEdit::UpdateProject {
                index,
                field,
                value,
            } => {
                let project = next.projects.get_mut(index).ok_or_else(|| {
                    FormError::InvalidField {
                        field: FieldName::Projects,
                        reason: format!("no project at position {index}"),
                    }
                })?;
                match field {
                    ProjectField::Name => project.name = value,
                    ProjectField::Description => project.description = value,
                    ProjectField::TechStack => project.tech_stack = value,
                    ProjectField::Url => project.url = value,
                }
            }
            RecordEdit::RemoveProject(index) => {
                next.projects = remove_at(&self.projects, index);
                if next.projects.is_empty() {
                    next.projects.push(Project::default());
                }
            }
            RecordEdit::SetAvailability(value) => next.availability = value,
            RecordEdit::SetTimezone(value) => next.timezone = value,
            RecordEdit::SetWorkEnvironment(value) => next.work_style.preferred_environment = value,
            RecordEdit::SetCommunicationStyle(value) => {
                next.work_style.communication_style = value
            }
            RecordEdit::SetWorkHours(value) => next.work_style.work_hours = value,
            RecordEdit::SetProjectPreference(value) => next.work_style.project_preference = value,
            RecordEdit::SetImmediateStart(value) => next.immediate_start = value,
            RecordEdit::ClearResume => next.resume = None,
        }
        Ok(next)
    }
}

/// Appends the trimmed text; blank input leaves the list as it was.
pub fn append_trimmed(list: &[String], text: &str) -> Vec<String> {
    let mut next = list.to_vec();
    let trimmed = text.trim();
    if !trimmed.is_empty() {
        next.push(trimmed.to_string());
    }
    next
}

/// Drops the entry at `index`; an out of range index is a no-op.
pub fn remove_at<T: Clone>(list: &[T], index: usize) -> Vec<T> {
    list.iter()
        .enumerate()
        .filter(|(position, _)| *position != index)
        .map(|(_, item)| item.clone())
        .collect()
}
