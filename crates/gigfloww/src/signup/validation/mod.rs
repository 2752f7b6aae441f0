//! Field predicates, the completion score and the submission gate.
//!
//! Everything here is a pure function of an [`ApplicationRecord`](super::ApplicationRecord);
//! failures are reported as values and never raised.

mod completion;
mod patterns;
mod rules;
mod submission;

pub use completion::{completion_report, compute_completion, CompletionReport};
pub use patterns::{validate_email, validate_phone, validate_url};
pub use rules::{bio_is_detailed, name_is_long_enough, RequiredField, MIN_BIO_CHARS, MIN_NAME_CHARS};
pub use submission::{validate_submission, SubmissionFailure, SubmissionVerdict};
