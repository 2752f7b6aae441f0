use std::sync::Arc;
use std::time::Duration;

use crate::signup::domain::{
    ApplicationRecord, Availability, Category, ExperienceBucket, ProjectField, SkillLevel,
    Timezone, WorkEnvironment,
};
use crate::signup::edits::RecordEdit;
use crate::signup::handoff::{
    HandoffError, InMemoryNotifier, InMemoryProfileSlot, Notice, Notifier, NotifyError,
    ProfileHandoff, SubmittedApplication,
};
use crate::signup::session::{SessionPolicy, SignupSession};

pub(super) const DETAILED_BIO: &str = "I design and ship accessible web apps for startups.";

pub(super) fn apply_all(record: &ApplicationRecord, edits: Vec<RecordEdit>) -> ApplicationRecord {
    edits.into_iter().fold(record.clone(), |current, edit| {
        current.apply(edit).expect("edit applies")
    })
}

/// Record with every required field satisfied.
pub(super) fn complete_record() -> ApplicationRecord {
    apply_all(
        &ApplicationRecord::new(),
        vec![
            RecordEdit::SetName("Ada Lovelace".to_string()),
            RecordEdit::SetEmail("ada@example.com".to_string()),
            RecordEdit::SetPhone("+1 (234) 567-8900".to_string()),
            RecordEdit::SetCategory(Some(Category::Development)),
            RecordEdit::SetExperience(Some(ExperienceBucket::TwoToFiveYears)),
            RecordEdit::SetSkillLevel(Some(SkillLevel::Advanced)),
            RecordEdit::SetPortfolio("https://ada.dev".to_string()),
            RecordEdit::SetBio(DETAILED_BIO.to_string()),
            RecordEdit::RateSkill {
                skill: "react".to_string(),
                rating: 4,
            },
            RecordEdit::SetProblemSolvingExample(
                "Cut a checkout page's load time by moving work off the main thread.".to_string(),
            ),
            RecordEdit::SetTimezone(Some(Timezone::Gmt)),
            RecordEdit::SetAvailability(Some(Availability::TwoWeeksNotice)),
            RecordEdit::SetWorkEnvironment(Some(WorkEnvironment::RemoteFirst)),
            RecordEdit::UpdateProject {
                index: 0,
                field: ProjectField::Name,
                value: "Analytical Engine UI".to_string(),
            },
            RecordEdit::UpdateProject {
                index: 0,
                field: ProjectField::TechStack,
                value: "React, TypeScript".to_string(),
            },
            RecordEdit::AddCertification("AWS Certified Developer".to_string()),
        ],
    )
}

/// Record with exactly six of the ten required fields satisfied
/// (name, email, phone, category, experience, skill level).
pub(super) fn six_of_ten_record() -> ApplicationRecord {
    apply_all(
        &ApplicationRecord::new(),
        vec![
            RecordEdit::SetName("Ada Lovelace".to_string()),
            RecordEdit::SetEmail("ada@example.com".to_string()),
            RecordEdit::SetPhone("234-567-8900".to_string()),
            RecordEdit::SetCategory(Some(Category::Design)),
            RecordEdit::SetExperience(Some(ExperienceBucket::UpToOneYear)),
            RecordEdit::SetSkillLevel(Some(SkillLevel::Beginner)),
            RecordEdit::SetPortfolio("not a url".to_string()),
            RecordEdit::SetBio("Too short.".to_string()),
        ],
    )
}

pub(super) fn instant_policy() -> SessionPolicy {
    SessionPolicy {
        submit_delay: Duration::ZERO,
        ..SessionPolicy::default()
    }
}

pub(super) type MemorySession = SignupSession<InMemoryProfileSlot, InMemoryNotifier>;

pub(super) fn session_with(
    record: ApplicationRecord,
    policy: SessionPolicy,
) -> (MemorySession, Arc<InMemoryProfileSlot>, Arc<InMemoryNotifier>) {
    let slot = Arc::new(InMemoryProfileSlot::default());
    let notifier = Arc::new(InMemoryNotifier::default());
    let session = SignupSession::with_record(record, slot.clone(), notifier.clone(), policy);
    (session, slot, notifier)
}

pub(super) struct ClosedHandoff;

impl ProfileHandoff for ClosedHandoff {
    fn deliver(&self, _submitted: SubmittedApplication) -> Result<(), HandoffError> {
        Err(HandoffError::Unavailable("navigation cancelled".to_string()))
    }
}

pub(super) struct MutedNotifier;

impl Notifier for MutedNotifier {
    fn notify(&self, _notice: Notice) -> Result<(), NotifyError> {
        Err(NotifyError::Channel("toast layer unmounted".to_string()))
    }
}
