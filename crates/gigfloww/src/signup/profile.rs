use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use super::domain::{ApplicationRecord, SkillRating, MAX_SKILL_RATING};

static WHITESPACE_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+").expect("whitespace pattern compiles"));

const FALLBACK_INITIAL: &str = "A";

/// Address of the profile screen for a submitted applicant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileRoute {
    pub slug: String,
}

impl ProfileRoute {
    /// Lowercases the name and replaces each whitespace run with `-`.
    pub fn for_name(name: &str) -> Self {
        let slug = WHITESPACE_RUN
            .replace_all(&name.to_lowercase(), "-")
            .into_owned();
        Self { slug }
    }

    pub fn path(&self) -> String {
        format!("/profile/{}", self.slug)
    }
}

/// Presentation-ready projection of a submitted record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileView {
    pub name: String,
    pub initial: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timezone: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub availability: Option<&'static str>,
    pub skills: Vec<SkillStars>,
    pub projects: Vec<ProjectCard>,
    pub certifications: Vec<String>,
    pub achievements: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub work_environment: Option<&'static str>,
    pub immediate_start: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkillStars {
    pub skill: String,
    pub rating: u8,
    pub stars: [bool; MAX_SKILL_RATING as usize],
}

impl SkillStars {
    fn new(skill: &str, rating: SkillRating) -> Self {
        let mut stars = [false; MAX_SKILL_RATING as usize];
        for star in stars.iter_mut().take(rating.value() as usize) {
            *star = true;
        }
        Self {
            skill: skill.to_string(),
            rating: rating.value(),
            stars,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectCard {
    pub name: String,
    pub description: String,
    pub tech_tags: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl ProfileView {
    pub fn from_record(record: &ApplicationRecord) -> Self {
        let initial = record
            .name
            .chars()
            .next()
            .map(String::from)
            .unwrap_or_else(|| FALLBACK_INITIAL.to_string());

        let skills = record
            .technical_skills
            .iter()
            .map(|(skill, rating)| SkillStars::new(skill, *rating))
            .collect();

        let projects = record
            .projects
            .iter()
            .filter(|project| !project.is_blank())
            .map(|project| ProjectCard {
                name: project.name.clone(),
                description: project.description.clone(),
                tech_tags: tech_tags(&project.tech_stack),
                url: Some(project.url.trim())
                    .filter(|url| !url.is_empty())
                    .map(str::to_string),
            })
            .collect();

        Self {
            name: record.name.clone(),
            initial,
            timezone: record.timezone.map(|tz| tz.label()),
            availability: record.availability.map(|availability| availability.label()),
            skills,
            projects,
            certifications: record.certifications.clone(),
            achievements: record.achievements.clone(),
            work_environment: record
                .work_style
                .preferred_environment
                .map(|environment| environment.label()),
            immediate_start: record.immediate_start,
        }
    }
}

/// Splits a comma separated tech stack into trimmed, non-empty tags.
pub fn tech_tags(tech_stack: &str) -> Vec<String> {
    tech_stack
        .split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(str::to_string)
        .collect()
}
