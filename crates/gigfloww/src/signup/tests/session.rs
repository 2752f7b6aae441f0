use std::sync::Arc;
use std::time::Duration;

use super::common::*;
use crate::signup::attachment::ResumeFile;
use crate::signup::domain::ApplicationRecord;
use crate::signup::edits::RecordEdit;
use crate::signup::error::FormError;
use crate::signup::handoff::{InMemoryNotifier, InMemoryProfileSlot, NoticeLevel};
use crate::signup::session::{SessionError, SessionPhase, SessionPolicy, SignupSession};
use crate::signup::validation::SubmissionFailure;

#[test]
fn progress_tracks_each_edit() {
    let (mut session, _, _) = session_with(ApplicationRecord::new(), instant_policy());
    assert_eq!(session.progress(), 0);

    session
        .edit(RecordEdit::SetName("Ada".to_string()))
        .expect("name edit");
    session
        .edit(RecordEdit::SetEmail("ada@example.com".to_string()))
        .expect("email edit");

    assert_eq!(session.progress(), 20);
    assert_eq!(session.completion().satisfied.len(), 2);
}

#[test]
fn certification_success_is_announced_once() {
    let (mut session, _, notifier) = session_with(ApplicationRecord::new(), instant_policy());

    session
        .edit(RecordEdit::AddCertification("CKA".to_string()))
        .expect("certification edit");
    session
        .edit(RecordEdit::AddCertification("   ".to_string()))
        .expect("blank certification is ignored");

    let notices = notifier.notices();
    assert_eq!(notices.len(), 1);
    assert_eq!(notices[0].level, NoticeLevel::Success);
    assert_eq!(notices[0].title, "Certification added successfully!");
    assert_eq!(session.record().certifications, vec!["CKA".to_string()]);
}

#[test]
fn achievement_success_is_announced() {
    let (mut session, _, notifier) = session_with(ApplicationRecord::new(), instant_policy());

    session
        .edit(RecordEdit::AddAchievement("  Top Rated Plus ".to_string()))
        .expect("achievement edit");

    let notices = notifier.notices();
    assert_eq!(notices.len(), 1);
    assert_eq!(notices[0].level, NoticeLevel::Success);
    assert_eq!(notices[0].title, "Achievement added successfully!");
    assert_eq!(session.record().achievements, vec!["Top Rated Plus".to_string()]);
}

#[test]
fn invalid_edit_is_reported_and_record_kept() {
    let (mut session, _, notifier) = session_with(ApplicationRecord::new(), instant_policy());
    let before = session.record().clone();

    let result = session.edit(RecordEdit::RateSkill {
        skill: "react".to_string(),
        rating: 9,
    });

    assert!(matches!(
        result,
        Err(SessionError::Form(FormError::InvalidField { .. }))
    ));
    assert_eq!(session.record(), &before);
    assert_eq!(notifier.notices()[0].level, NoticeLevel::Error);
}

#[test]
fn oversized_resume_is_rejected_with_notice() {
    let (mut session, _, notifier) = session_with(ApplicationRecord::new(), instant_policy());

    let result = session.attach_resume(ResumeFile::new("cv.pdf", 6 * 1024 * 1024));

    assert!(matches!(
        result,
        Err(SessionError::Form(FormError::FileTooLarge { .. }))
    ));
    assert!(session.record().resume.is_none());
    assert_eq!(notifier.notices()[0].title, "File must be less than 5MB");
}

#[test]
fn unlisted_resume_type_is_rejected_with_notice() {
    let (mut session, _, notifier) = session_with(ApplicationRecord::new(), instant_policy());

    let result = session.attach_resume(ResumeFile::new("cv.png", 40_000));

    match result {
        Err(SessionError::Form(FormError::FileTypeRejected { extension })) => {
            assert_eq!(extension, "png")
        }
        other => panic!("expected type rejection, got {other:?}"),
    }
    assert!(session.record().resume.is_none());
    let notices = notifier.notices();
    assert_eq!(notices.len(), 1);
    assert_eq!(notices[0].level, NoticeLevel::Error);
    assert_eq!(notices[0].title, "Only PDF, DOC or DOCX files are accepted");
}

#[test]
fn accepted_resume_is_kept_as_reference() {
    let (mut session, _, notifier) = session_with(ApplicationRecord::new(), instant_policy());

    session
        .attach_resume(ResumeFile::new("ada-cv.doc", 48_000))
        .expect("doc accepted");

    let resume = session.record().resume.clone().expect("resume stored");
    assert_eq!(resume.file_name(), "ada-cv.doc");
    assert_eq!(resume.content_type(), "application/msword");
    assert!(notifier.notices().is_empty());
}

#[tokio::test]
async fn incomplete_record_cannot_be_submitted() {
    let (mut session, slot, notifier) = session_with(six_of_ten_record(), instant_policy());

    match session.submit().await {
        Err(SessionError::Blocked(SubmissionFailure::InvalidPortfolio)) => {}
        other => panic!("expected blocked submission, got {other:?}"),
    }

    assert_eq!(session.phase(), SessionPhase::Editing);
    assert!(slot.latest().is_none());
    let notices = notifier.notices();
    assert_eq!(notices[0].title, "Please enter a valid portfolio URL");
}

#[tokio::test(start_paused = true)]
async fn submission_waits_for_delay_then_hands_off() {
    let policy = SessionPolicy {
        submit_delay: Duration::from_secs(2),
        ..SessionPolicy::default()
    };
    let (mut session, slot, notifier) = session_with(complete_record(), policy);
    let started = tokio::time::Instant::now();

    let submitted = session.submit().await.expect("submission succeeds");

    assert!(started.elapsed() >= Duration::from_secs(2));
    assert_eq!(session.phase(), SessionPhase::Submitted);
    assert_eq!(submitted.route.path(), "/profile/ada-lovelace");
    assert_eq!(submitted.record, complete_record());

    let delivered = slot.latest().expect("profile handed off");
    assert_eq!(delivered, submitted);

    let notices = notifier.notices();
    let last = notices.last().expect("success notice");
    assert_eq!(last.level, NoticeLevel::Success);
    assert_eq!(last.title, "Application Submitted Successfully!");
    assert_eq!(
        last.description.as_deref(),
        Some(
            "Welcome Ada Lovelace! We'll review your application and get back to you within 24 hours."
        )
    );
}

#[tokio::test]
async fn submitted_session_rejects_further_changes() {
    let (mut session, _, _) = session_with(complete_record(), instant_policy());
    session.submit().await.expect("first submission");

    assert!(matches!(
        session.submit().await,
        Err(SessionError::AlreadySubmitted)
    ));
    assert!(matches!(
        session.edit(RecordEdit::SetName("Someone Else".to_string())),
        Err(SessionError::AlreadySubmitted)
    ));
}

#[tokio::test]
async fn lost_welcome_notice_keeps_the_submission() {
    let slot = Arc::new(InMemoryProfileSlot::default());
    let mut session = SignupSession::with_record(
        complete_record(),
        slot.clone(),
        Arc::new(MutedNotifier),
        instant_policy(),
    );

    let submitted = session.submit().await.expect("submission stands");

    assert_eq!(session.phase(), SessionPhase::Submitted);
    assert_eq!(slot.latest(), Some(submitted));
}

#[tokio::test]
async fn failed_hand_off_returns_to_editing() {
    let notifier = Arc::new(InMemoryNotifier::default());
    let mut session = SignupSession::with_record(
        complete_record(),
        Arc::new(ClosedHandoff),
        notifier.clone(),
        instant_policy(),
    );

    match session.submit().await {
        Err(SessionError::Handoff(_)) => {}
        other => panic!("expected hand-off failure, got {other:?}"),
    }

    assert_eq!(session.phase(), SessionPhase::Editing);
    let notices = notifier.notices();
    assert_eq!(notices.len(), 1);
    assert_eq!(notices[0].title, "Submission failed. Please try again.");
}
