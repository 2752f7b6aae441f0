use crate::infra::ConsoleNotifier;
use chrono::SecondsFormat;
use clap::Args;
use gigfloww::config::AppConfig;
use gigfloww::error::AppError;
use gigfloww::signup::{
    Availability, Category, ExperienceBucket, InMemoryProfileSlot, ProfileView, ProjectField,
    RecordEdit, ResumeFile, SessionError, SignupSession, SkillLevel, Timezone, WorkEnvironment,
};
use serde::Serialize;
use std::sync::Arc;
use tracing::info;

const SAMPLE_BIO: &str = "Full-stack developer focused on fast, accessible React front ends \
and the Node services behind them.";

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Applicant name used for the scripted session
    #[arg(long)]
    pub(crate) name: Option<String>,
    /// Truncate the sample bio to this many characters (below 50 blocks submission)
    #[arg(long)]
    pub(crate) bio_chars: Option<usize>,
    /// Stop after filling the form and report progress only
    #[arg(long)]
    pub(crate) skip_submit: bool,
    /// Print the submitted profile as JSON instead of text
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct DemoOutput<'a> {
    route: String,
    submitted_at: String,
    profile: &'a ProfileView,
}

pub(crate) fn scripted_edits(name: &str, bio: String) -> Vec<(&'static str, RecordEdit)> {
    vec![
        ("name", RecordEdit::SetName(name.to_string())),
        (
            "email",
            RecordEdit::SetEmail(format!("{}@example.com", email_local_part(name))),
        ),
        ("phone", RecordEdit::SetPhone("+1 (234) 567-8900".to_string())),
        (
            "category",
            RecordEdit::SetCategory(Some(Category::Development)),
        ),
        (
            "experience",
            RecordEdit::SetExperience(Some(ExperienceBucket::TwoToFiveYears)),
        ),
        (
            "skill level",
            RecordEdit::SetSkillLevel(Some(SkillLevel::Advanced)),
        ),
        (
            "portfolio",
            RecordEdit::SetPortfolio("https://portfolio.example.com".to_string()),
        ),
        ("bio", RecordEdit::SetBio(bio)),
        (
            "react rating",
            RecordEdit::RateSkill {
                skill: "react".to_string(),
                rating: 4,
            },
        ),
        (
            "typescript rating",
            RecordEdit::RateSkill {
                skill: "typescript".to_string(),
                rating: 3,
            },
        ),
        (
            "problem solving",
            RecordEdit::SetProblemSolvingExample(
                "Traced a memory leak in a dashboard to an unbounded websocket buffer.".to_string(),
            ),
        ),
        (
            "project",
            RecordEdit::UpdateProject {
                index: 0,
                field: ProjectField::Name,
                value: "Inventory dashboard".to_string(),
            },
        ),
        (
            "project stack",
            RecordEdit::UpdateProject {
                index: 0,
                field: ProjectField::TechStack,
                value: "React, Node.js, PostgreSQL".to_string(),
            },
        ),
        (
            "certification",
            RecordEdit::AddCertification("AWS Certified Developer".to_string()),
        ),
        (
            "achievement",
            RecordEdit::AddAchievement("Top Rated freelancer 2023".to_string()),
        ),
        (
            "availability",
            RecordEdit::SetAvailability(Some(Availability::TwoWeeksNotice)),
        ),
        ("timezone", RecordEdit::SetTimezone(Some(Timezone::Est))),
        (
            "environment",
            RecordEdit::SetWorkEnvironment(Some(WorkEnvironment::RemoteFirst)),
        ),
    ]
}

fn email_local_part(name: &str) -> String {
    let local: String = name
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(".")
        .to_lowercase();
    if local.is_empty() {
        "applicant".to_string()
    } else {
        local
    }
}

pub(crate) async fn run_demo(args: DemoArgs, config: &AppConfig) -> Result<(), AppError> {
    let DemoArgs {
        name,
        bio_chars,
        skip_submit,
        json,
    } = args;

    let name = name.unwrap_or_else(|| "Jordan Rivera".to_string());
    let bio: String = match bio_chars {
        Some(limit) => SAMPLE_BIO.chars().cycle().take(limit).collect(),
        None => SAMPLE_BIO.to_string(),
    };

    let slot = Arc::new(InMemoryProfileSlot::default());
    let notifier = Arc::new(if json {
        ConsoleNotifier::quiet()
    } else {
        ConsoleNotifier::default()
    });
    let mut session = SignupSession::new(
        slot.clone(),
        notifier.clone(),
        config.signup.session_policy(),
    );

    if !json {
        println!("GigFloww signup demo");
    }
    for (label, edit) in scripted_edits(&name, bio) {
        session.edit(edit)?;
        if !json {
            println!("  {:<18} progress {:>3}%", label, session.progress());
        }
    }
    session.attach_resume(ResumeFile::new("resume.pdf", 180_000))?;

    if skip_submit {
        let report = session.completion();
        if json {
            println!("{}", serde_json::to_string_pretty(&report)?);
        } else {
            println!("\nStopped before submission at {}%", report.percent);
            for field in &report.missing {
                println!("  missing: {}", field.field());
            }
        }
        return Ok(());
    }

    info!(delay_ms = config.signup.submit_delay.as_millis() as u64, "submitting application");
    let submitted = match session.submit().await {
        Ok(submitted) => submitted,
        Err(SessionError::Blocked(reason)) => {
            if json {
                println!(
                    "{}",
                    serde_json::json!({ "ok": false, "failureReason": reason.code() })
                );
            } else {
                println!("\nSubmission blocked: {}", reason.message());
            }
            return Ok(());
        }
        Err(other) => return Err(other.into()),
    };

    let view = ProfileView::from_record(&submitted.record);
    let submitted_at = submitted
        .submitted_at
        .to_rfc3339_opts(SecondsFormat::Secs, true);

    if json {
        let output = DemoOutput {
            route: submitted.route.path(),
            submitted_at,
            profile: &view,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        render_profile(&view, &submitted.route.path(), &submitted_at);
        println!("\n{} notices shown", notifier.shown().len());
    }

    Ok(())
}

fn render_profile(view: &ProfileView, path: &str, submitted_at: &str) {
    println!("\nProfile {path} (submitted {submitted_at})");
    println!("  [{}] {}", view.initial, view.name);
    if let Some(timezone) = view.timezone {
        println!("  Timezone: {timezone}");
    }
    if let Some(availability) = view.availability {
        println!("  Availability: {availability}");
    }

    println!("  Skills");
    for skill in &view.skills {
        let stars: String = skill
            .stars
            .iter()
            .map(|filled| if *filled { '*' } else { '.' })
            .collect();
        println!("    {:<12} {stars}", skill.skill);
    }

    if !view.projects.is_empty() {
        println!("  Projects");
        for project in &view.projects {
            println!("    {} [{}]", project.name, project.tech_tags.join(", "));
        }
    }

    if !view.certifications.is_empty() || !view.achievements.is_empty() {
        println!("  Certifications & achievements");
        for entry in view.certifications.iter().chain(view.achievements.iter()) {
            println!("    - {entry}");
        }
    }

    if let Some(environment) = view.work_environment {
        println!("  Works best: {environment}");
    }
    if view.immediate_start {
        println!("  Available for immediate start");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gigfloww::signup::{compute_completion, validate_submission, ApplicationRecord};

    fn apply_script(name: &str, bio: String) -> ApplicationRecord {
        scripted_edits(name, bio)
            .into_iter()
            .fold(ApplicationRecord::new(), |record, (_, edit)| {
                record.apply(edit).expect("scripted edit applies")
            })
    }

    #[test]
    fn script_completes_the_form() {
        let record = apply_script("Jordan Rivera", SAMPLE_BIO.to_string());

        assert_eq!(compute_completion(&record), 100);
        assert!(validate_submission(&record).ok);
        assert_eq!(record.email, "jordan.rivera@example.com");
    }

    #[test]
    fn sample_bio_is_long_enough() {
        assert!(SAMPLE_BIO.chars().count() >= 50);
    }

    #[test]
    fn email_falls_back_for_blank_names() {
        assert_eq!(email_local_part("   "), "applicant");
        assert_eq!(email_local_part("Ana  María"), "ana.maría");
    }
}
