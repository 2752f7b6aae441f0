//! Freelancer signup form: the applicant record, its edits, validation and
//! completion scoring, the resume gate, and the hand-off to the profile view.
//!
//! Rendering is left to the caller. A [`SignupSession`] owns the record for the
//! lifetime of one form, and [`ProfileView`] is what the display side consumes
//! after submission.

pub mod attachment;
pub mod domain;
pub mod edits;
pub mod error;
pub mod handoff;
pub mod profile;
pub mod session;
pub mod validation;

#[cfg(test)]
mod tests;

pub use attachment::{
    AttachmentPolicy, ResumeAttachment, ResumeFile, ACCEPTED_RESUME_EXTENSIONS,
    DEFAULT_MAX_RESUME_BYTES,
};
pub use domain::{
    ApplicationRecord, Availability, Category, CommunicationStyle, ExperienceBucket, Project,
    ProjectField, ProjectPreference, SkillLevel, SkillRating, Timezone, WorkEnvironment,
    WorkHours, WorkStyle, DEFAULT_SKILLS, MAX_SKILL_RATING,
};
pub use edits::RecordEdit;
pub use error::{FieldName, FormError};
pub use handoff::{
    HandoffError, InMemoryNotifier, InMemoryProfileSlot, Notice, NoticeLevel, Notifier,
    NotifyError, ProfileHandoff, SubmittedApplication,
};
pub use profile::{ProfileRoute, ProfileView, ProjectCard, SkillStars};
pub use session::{SessionError, SessionPhase, SessionPolicy, SignupSession};
pub use validation::{
    completion_report, compute_completion, validate_email, validate_phone, validate_submission,
    validate_url, CompletionReport, RequiredField, SubmissionFailure, SubmissionVerdict,
};
