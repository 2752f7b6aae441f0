use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use super::attachment::{AttachmentPolicy, ResumeFile};
use super::domain::ApplicationRecord;
use super::edits::RecordEdit;
use super::error::FormError;
use super::handoff::{
    HandoffError, Notice, Notifier, NotifyError, ProfileHandoff, SubmittedApplication,
};
use super::profile::ProfileRoute;
use super::validation::{
    completion_report, compute_completion, validate_submission, CompletionReport,
    SubmissionFailure,
};

const DEFAULT_SUBMIT_DELAY: Duration = Duration::from_secs(2);

/// Tunables for a form session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionPolicy {
    pub submit_delay: Duration,
    pub attachments: AttachmentPolicy,
}

impl Default for SessionPolicy {
    fn default() -> Self {
        Self {
            submit_delay: DEFAULT_SUBMIT_DELAY,
            attachments: AttachmentPolicy::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionPhase {
    Editing,
    Submitting,
    Submitted,
}

/// One applicant filling in the signup form. Owns the record exclusively.
pub struct SignupSession<H, N> {
    record: ApplicationRecord,
    phase: SessionPhase,
    policy: SessionPolicy,
    handoff: Arc<H>,
    notifier: Arc<N>,
}

impl<H, N> SignupSession<H, N>
where
    H: ProfileHandoff + 'static,
    N: Notifier + 'static,
{
    pub fn new(handoff: Arc<H>, notifier: Arc<N>, policy: SessionPolicy) -> Self {
        Self::with_record(ApplicationRecord::new(), handoff, notifier, policy)
    }

    pub fn with_record(
        record: ApplicationRecord,
        handoff: Arc<H>,
        notifier: Arc<N>,
        policy: SessionPolicy,
    ) -> Self {
        Self {
            record,
            phase: SessionPhase::Editing,
            policy,
            handoff,
            notifier,
        }
    }

    pub fn record(&self) -> &ApplicationRecord {
        &self.record
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn progress(&self) -> u8 {
        compute_completion(&self.record)
    }

    pub fn completion(&self) -> CompletionReport {
        completion_report(&self.record)
    }

    /// Apply one edit, replacing the record on success.
    pub fn edit(&mut self, edit: RecordEdit) -> Result<(), SessionError> {
        self.ensure_editable()?;

        let confirmation = match &edit {
            RecordEdit::AddCertification(_) => Some("Certification added successfully!"),
            RecordEdit::AddAchievement(_) => Some("Achievement added successfully!"),
            _ => None,
        };

        let next = match self.record.apply(edit) {
            Ok(next) => next,
            Err(error) => return Err(self.reject(error)),
        };

        let changed = next != self.record;
        self.record = next;
        debug!(progress = self.progress(), changed, "form record updated");

        if let (Some(title), true) = (confirmation, changed) {
            self.notifier.notify(Notice::success(title))?;
        }
        Ok(())
    }

    /// Run the attachment gate and keep the reference if it passes.
    pub fn attach_resume(&mut self, file: ResumeFile) -> Result<(), SessionError> {
        self.ensure_editable()?;

        match self.policy.attachments.accept(file) {
            Ok(attachment) => {
                debug!(
                    file_name = attachment.file_name(),
                    content_type = attachment.content_type(),
                    "resume attached"
                );
                self.record.resume = Some(attachment);
                Ok(())
            }
            Err(error) => Err(self.reject(error)),
        }
    }

    /// Gate, wait out the submission delay, then hand the record to the profile view.
    /// Once the hand-off succeeds the submission stands even if the welcome notice fails.
    pub async fn submit(&mut self) -> Result<SubmittedApplication, SessionError> {
        self.ensure_editable()?;

        let verdict = validate_submission(&self.record);
        if let Some(reason) = verdict.failure_reason {
            warn!(reason = reason.code(), "submission blocked");
            self.notifier.notify(Notice::error(reason.message()))?;
            return Err(SessionError::Blocked(reason));
        }

        self.phase = SessionPhase::Submitting;
        tokio::time::sleep(self.policy.submit_delay).await;

        let submitted = SubmittedApplication {
            record: self.record.clone(),
            route: ProfileRoute::for_name(&self.record.name),
            submitted_at: Utc::now(),
        };

        if let Err(error) = self.handoff.deliver(submitted.clone()) {
            self.phase = SessionPhase::Editing;
            warn!(%error, "profile hand-off failed");
            self.notifier
                .notify(Notice::error("Submission failed. Please try again."))?;
            return Err(SessionError::Handoff(error));
        }

        self.phase = SessionPhase::Submitted;
        info!(route = %submitted.route.path(), "application submitted");

        let welcome = Notice::success("Application Submitted Successfully!").with_description(
            format!(
                "Welcome {}! We'll review your application and get back to you within 24 hours.",
                self.record.name
            ),
        );
        if let Err(error) = self.notifier.notify(welcome) {
            warn!(%error, "welcome notice not delivered");
        }

        Ok(submitted)
    }

    fn ensure_editable(&self) -> Result<(), SessionError> {
        match self.phase {
            SessionPhase::Editing => Ok(()),
            SessionPhase::Submitting | SessionPhase::Submitted => {
                Err(SessionError::AlreadySubmitted)
            }
        }
    }

    fn reject(&self, error: FormError) -> SessionError {
        debug!(%error, "form input rejected");
        match self.notifier.notify(Notice::error(error.user_message())) {
            Ok(()) => SessionError::Form(error),
            Err(notify) => SessionError::Notify(notify),
        }
    }
}

/// Error raised by the signup session.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error(transparent)]
    Form(#[from] FormError),
    #[error("submission blocked: {0}")]
    Blocked(SubmissionFailure),
    #[error("application was already submitted")]
    AlreadySubmitted,
    #[error(transparent)]
    Handoff(#[from] HandoffError),
    #[error(transparent)]
    Notify(#[from] NotifyError),
}
