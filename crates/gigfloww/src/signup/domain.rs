use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

use super::attachment::ResumeAttachment;
use super::error::{FieldName, FormError};

/// Skills every fresh form offers for rating.
pub const DEFAULT_SKILLS: &[&str] = &["react", "nodejs", "javascript", "typescript"];

/// Highest rating the skill picker offers.
pub const MAX_SKILL_RATING: u8 = 5;

/// Everything a single signup session collects from the applicant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationRecord {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub category: Option<Category>,
    pub experience: Option<ExperienceBucket>,
    pub skill_level: Option<SkillLevel>,
    pub portfolio: String,
    pub github_url: String,
    pub linkedin_url: String,
    pub bio: String,
    pub problem_solving_example: String,
    pub adaptability_example: String,
    pub technical_skills: BTreeMap<String, SkillRating>,
    pub certifications: Vec<String>,
    pub achievements: Vec<String>,
    /// Never empty; the form always shows at least one project template.
    #[serde(deserialize_with = "projects_with_template")]
    pub projects: Vec<Project>,
    pub availability: Option<Availability>,
    pub timezone: Option<Timezone>,
    pub work_style: WorkStyle,
    pub immediate_start: bool,
    pub resume: Option<ResumeAttachment>,
}

impl ApplicationRecord {
    /// Blank record as presented when the form first opens.
    pub fn new() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            phone: String::new(),
            category: None,
            experience: None,
            skill_level: None,
            portfolio: String::new(),
            github_url: String::new(),
            linkedin_url: String::new(),
            bio: String::new(),
            problem_solving_example: String::new(),
            adaptability_example: String::new(),
            technical_skills: DEFAULT_SKILLS
                .iter()
                .map(|skill| (skill.to_string(), SkillRating::UNRATED))
                .collect(),
            certifications: Vec::new(),
            achievements: Vec::new(),
            projects: vec![Project::default()],
            availability: None,
            timezone: None,
            work_style: WorkStyle::default(),
            immediate_start: false,
            resume: None,
        }
    }

    pub fn has_rated_skill(&self) -> bool {
        self.technical_skills.values().any(|rating| rating.is_rated())
    }
}

fn projects_with_template<'de, D>(deserializer: D) -> Result<Vec<Project>, D::Error>
where
    D: Deserializer<'de>,
{
    let mut projects = Vec::<Project>::deserialize(deserializer)?;
    if projects.is_empty() {
        projects.push(Project::default());
    }
    Ok(projects)
}

impl Default for ApplicationRecord {
    fn default() -> Self {
        Self::new()
    }
}

/// Self-assessed proficiency for one technical skill, always within `0..=5`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct SkillRating(u8);

impl SkillRating {
    pub const UNRATED: SkillRating = SkillRating(0);

    pub fn new(value: u8) -> Result<Self, FormError> {
        if value > MAX_SKILL_RATING {
            return Err(FormError::InvalidField {
                field: FieldName::TechnicalSkills,
                reason: format!("rating {value} is outside 0..={MAX_SKILL_RATING}"),
            });
        }
        Ok(Self(value))
    }

    pub const fn value(self) -> u8 {
        self.0
    }

    pub const fn is_rated(self) -> bool {
        self.0 > 0
    }
}

impl TryFrom<u8> for SkillRating {
    type Error = FormError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<SkillRating> for u8 {
    fn from(rating: SkillRating) -> Self {
        rating.0
    }
}

/// Portfolio project entry. `tech_stack` is free text with comma separated technologies.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub name: String,
    pub description: String,
    pub tech_stack: String,
    pub url: String,
}

impl Project {
    pub fn is_blank(&self) -> bool {
        self.name.trim().is_empty()
            && self.description.trim().is_empty()
            && self.tech_stack.trim().is_empty()
            && self.url.trim().is_empty()
    }
}

/// Editable columns of a [`Project`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectField {
    Name,
    Description,
    TechStack,
    Url,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkStyle {
    pub preferred_environment: Option<WorkEnvironment>,
    pub communication_style: Option<CommunicationStyle>,
    pub work_hours: Option<WorkHours>,
    pub project_preference: Option<ProjectPreference>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Design,
    Development,
    Writing,
    Marketing,
    Video,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Design,
        Category::Development,
        Category::Writing,
        Category::Marketing,
        Category::Video,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            Category::Design => "UI/UX Design",
            Category::Development => "Web Development",
            Category::Writing => "Content Writing",
            Category::Marketing => "Digital Marketing",
            Category::Video => "Video Production",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ExperienceBucket {
    #[serde(rename = "0-1")]
    UpToOneYear,
    #[serde(rename = "1-2")]
    OneToTwoYears,
    #[serde(rename = "2-5")]
    TwoToFiveYears,
    #[serde(rename = "5+")]
    FivePlusYears,
}

impl ExperienceBucket {
    pub const fn label(self) -> &'static str {
        match self {
            ExperienceBucket::UpToOneYear => "0-1 years",
            ExperienceBucket::OneToTwoYears => "1-2 years",
            ExperienceBucket::TwoToFiveYears => "2-5 years",
            ExperienceBucket::FivePlusYears => "5+ years",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkillLevel {
    Beginner,
    Intermediate,
    Advanced,
    Expert,
}

impl SkillLevel {
    pub const fn label(self) -> &'static str {
        match self {
            SkillLevel::Beginner => "Beginner",
            SkillLevel::Intermediate => "Intermediate",
            SkillLevel::Advanced => "Advanced",
            SkillLevel::Expert => "Expert",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Availability {
    #[serde(rename = "immediate")]
    Immediate,
    #[serde(rename = "2-weeks")]
    TwoWeeksNotice,
    #[serde(rename = "1-month")]
    OneMonthNotice,
}

impl Availability {
    pub const fn label(self) -> &'static str {
        match self {
            Availability::Immediate => "Immediate",
            Availability::TwoWeeksNotice => "2 weeks notice",
            Availability::OneMonthNotice => "1 month notice",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Timezone {
    Est,
    Pst,
    Gmt,
    Ist,
}

impl Timezone {
    pub const fn label(self) -> &'static str {
        match self {
            Timezone::Est => "Eastern (EST)",
            Timezone::Pst => "Pacific (PST)",
            Timezone::Gmt => "GMT/UTC",
            Timezone::Ist => "India (IST)",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WorkEnvironment {
    #[serde(rename = "Remote-first")]
    RemoteFirst,
    #[serde(rename = "Hybrid-flexible")]
    HybridFlexible,
    #[serde(rename = "In-office collaboration")]
    InOffice,
    #[serde(rename = "Result-oriented regardless of location")]
    ResultOriented,
}

impl WorkEnvironment {
    pub const fn label(self) -> &'static str {
        match self {
            WorkEnvironment::RemoteFirst => "Remote-first",
            WorkEnvironment::HybridFlexible => "Hybrid-flexible",
            WorkEnvironment::InOffice => "In-office collaboration",
            WorkEnvironment::ResultOriented => "Result-oriented regardless of location",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CommunicationStyle {
    #[serde(rename = "Proactive and frequent")]
    ProactiveFrequent,
    #[serde(rename = "Scheduled check-ins")]
    ScheduledCheckIns,
    #[serde(rename = "Async-first")]
    AsyncFirst,
    #[serde(rename = "Direct and concise")]
    DirectConcise,
}

impl CommunicationStyle {
    pub const fn label(self) -> &'static str {
        match self {
            CommunicationStyle::ProactiveFrequent => "Proactive and frequent",
            CommunicationStyle::ScheduledCheckIns => "Scheduled check-ins",
            CommunicationStyle::AsyncFirst => "Async-first",
            CommunicationStyle::DirectConcise => "Direct and concise",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WorkHours {
    #[serde(rename = "Standard business hours")]
    BusinessHours,
    #[serde(rename = "Flexible hours")]
    Flexible,
    #[serde(rename = "Night owl")]
    NightOwl,
    #[serde(rename = "Early bird")]
    EarlyBird,
}

impl WorkHours {
    pub const fn label(self) -> &'static str {
        match self {
            WorkHours::BusinessHours => "Standard business hours",
            WorkHours::Flexible => "Flexible hours",
            WorkHours::NightOwl => "Night owl",
            WorkHours::EarlyBird => "Early bird",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProjectPreference {
    ShortTerm,
    LongTerm,
    Either,
}

impl ProjectPreference {
    pub const fn label(self) -> &'static str {
        match self {
            ProjectPreference::ShortTerm => "Short-term gigs",
            ProjectPreference::LongTerm => "Long-term engagements",
            ProjectPreference::Either => "Open to both",
        }
    }
}

macro_rules! display_via_label {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(self.label())
                }
            }
        )+
    };
}

display_via_label!(
    Category,
    ExperienceBucket,
    SkillLevel,
    Availability,
    Timezone,
    WorkEnvironment,
    CommunicationStyle,
    WorkHours,
    ProjectPreference,
);
