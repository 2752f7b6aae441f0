use gigfloww::signup::{Notice, NoticeLevel, Notifier, NotifyError};
use std::sync::{Arc, Mutex};
use tracing::{info, warn};

/// Prints notices the way the form's toasts would show them and keeps a copy
/// for the run summary.
#[derive(Default, Clone)]
pub(crate) struct ConsoleNotifier {
    shown: Arc<Mutex<Vec<Notice>>>,
    quiet: bool,
}

impl ConsoleNotifier {
    pub(crate) fn quiet() -> Self {
        Self {
            quiet: true,
            ..Self::default()
        }
    }

    pub(crate) fn shown(&self) -> Vec<Notice> {
        self.shown
            .lock()
            .map(|guard| guard.clone())
            .unwrap_or_else(|poisoned| poisoned.into_inner().clone())
    }
}

impl Notifier for ConsoleNotifier {
    fn notify(&self, notice: Notice) -> Result<(), NotifyError> {
        match notice.level {
            NoticeLevel::Success => info!(title = %notice.title, "notice"),
            NoticeLevel::Error => warn!(title = %notice.title, "notice"),
        }

        if !self.quiet {
            let marker = match notice.level {
                NoticeLevel::Success => "[ok]",
                NoticeLevel::Error => "[!!]",
            };
            match &notice.description {
                Some(description) => println!("{marker} {} {description}", notice.title),
                None => println!("{marker} {}", notice.title),
            }
        }

        self.shown
            .lock()
            .map_err(|_| NotifyError::Channel("console notice log poisoned".to_string()))?
            .push(notice);
        Ok(())
    }
}
