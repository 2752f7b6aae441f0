use std::sync::Mutex;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::domain::ApplicationRecord;
use super::profile::ProfileRoute;

/// What the form hands to the profile view once submission succeeds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmittedApplication {
    pub record: ApplicationRecord,
    pub route: ProfileRoute,
    pub submitted_at: DateTime<Utc>,
}

/// Receives the submitted record by value (navigation to the profile screen).
pub trait ProfileHandoff: Send + Sync {
    fn deliver(&self, submitted: SubmittedApplication) -> Result<(), HandoffError>;
}

#[derive(Debug, thiserror::Error)]
pub enum HandoffError {
    #[error("profile view unavailable: {0}")]
    Unavailable(String),
}

/// Keeps the most recent submission, the way the app shell holds profile data.
#[derive(Debug, Default)]
pub struct InMemoryProfileSlot {
    latest: Mutex<Option<SubmittedApplication>>,
}

impl InMemoryProfileSlot {
    pub fn latest(&self) -> Option<SubmittedApplication> {
        self.latest
            .lock()
            .map(|guard| guard.clone())
            .unwrap_or_else(|poisoned| poisoned.into_inner().clone())
    }
}

impl ProfileHandoff for InMemoryProfileSlot {
    fn deliver(&self, submitted: SubmittedApplication) -> Result<(), HandoffError> {
        let mut guard = self
            .latest
            .lock()
            .map_err(|_| HandoffError::Unavailable("profile slot poisoned".to_string()))?;
        *guard = Some(submitted);
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NoticeLevel {
    Success,
    Error,
}

/// Toast-style message for the applicant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    pub level: NoticeLevel,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Notice {
    pub fn success(title: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Success,
            title: title.into(),
            description: None,
        }
    }

    pub fn error(title: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            title: title.into(),
            description: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Outbound hook for the notification layer.
pub trait Notifier: Send + Sync {
    fn notify(&self, notice: Notice) -> Result<(), NotifyError>;
}

#[derive(Debug, thiserror::Error)]
pub enum NotifyError {
    #[error("notification channel unavailable: {0}")]
    Channel(String),
}

#[derive(Debug, Default)]
pub struct InMemoryNotifier {
    notices: Mutex<Vec<Notice>>,
}

impl InMemoryNotifier {
    pub fn notices(&self) -> Vec<Notice> {
        self.notices
            .lock()
            .map(|guard| guard.clone())
            .unwrap_or_else(|poisoned| poisoned.into_inner().clone())
    }
}

impl Notifier for InMemoryNotifier {
    fn notify(&self, notice: Notice) -> Result<(), NotifyError> {
        self.notices
            .lock()
            .map_err(|_| NotifyError::Channel("notice log poisoned".to_string()))?
            .push(notice);
        Ok(())
    }
}
