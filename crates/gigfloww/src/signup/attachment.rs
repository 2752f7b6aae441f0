use std::path::Path;

use serde::{Deserialize, Serialize};

use super::error::FormError;

/// 5 MiB, the upload ceiling advertised next to the resume picker.
pub const DEFAULT_MAX_RESUME_BYTES: u64 = 5 * 1024 * 1024;

pub const ACCEPTED_RESUME_EXTENSIONS: &[&str] = &["pdf", "doc", "docx"];

/// File the applicant picked, before any checks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResumeFile {
    pub file_name: String,
    pub size_bytes: u64,
}

impl ResumeFile {
    pub fn new(file_name: impl Into<String>, size_bytes: u64) -> Self {
        Self {
            file_name: file_name.into(),
            size_bytes,
        }
    }

    fn extension(&self) -> Option<String> {
        Path::new(&self.file_name)
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase())
    }
}

/// Opaque reference kept on the record once a resume passes the gate.
/// The bytes themselves are never read.
///
/// Only [`AttachmentPolicy::accept`] builds one. Deserialized references are
/// re-checked against the default policy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "StoredResume")]
pub struct ResumeAttachment {
    file_name: String,
    size_bytes: u64,
    content_type: String,
}

impl ResumeAttachment {
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn size_bytes(&self) -> u64 {
        self.size_bytes
    }

    pub fn content_type(&self) -> &str {
        &self.content_type
    }
}

/// Wire shape of a stored reference. The content type is derived again on load.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoredResume {
    file_name: String,
    size_bytes: u64,
}

impl TryFrom<StoredResume> for ResumeAttachment {
    type Error = FormError;

    fn try_from(stored: StoredResume) -> Result<Self, Self::Error> {
        AttachmentPolicy::default().accept(ResumeFile::new(stored.file_name, stored.size_bytes))
    }
}

/// Size ceiling and extension allow-list for resume uploads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttachmentPolicy {
    max_bytes: u64,
}

impl AttachmentPolicy {
    pub fn new(max_bytes: u64) -> Self {
        let sanitized = if max_bytes > 0 {
            max_bytes
        } else {
            DEFAULT_MAX_RESUME_BYTES
        };

        Self {
            max_bytes: sanitized,
        }
    }

    pub fn max_bytes(&self) -> u64 {
        self.max_bytes
    }

    /// Size is checked before type, matching the order the picker reports problems.
    pub fn accept(&self, file: ResumeFile) -> Result<ResumeAttachment, FormError> {
        if file.size_bytes > self.max_bytes {
            return Err(FormError::FileTooLarge {
                size: file.size_bytes,
                max: self.max_bytes,
            });
        }

        let extension = file.extension().unwrap_or_default();
        if !ACCEPTED_RESUME_EXTENSIONS.contains(&extension.as_str()) {
            return Err(FormError::FileTypeRejected { extension });
        }

        let content_type = mime_guess::from_ext(&extension)
            .first_or_octet_stream()
            .essence_str()
            .to_string();

        Ok(ResumeAttachment {
            file_name: file.file_name,
            size_bytes: file.size_bytes,
            content_type,
        })
    }
}

impl Default for AttachmentPolicy {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_RESUME_BYTES)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_pdf_at_the_ceiling() {
        let policy = AttachmentPolicy::default();
        let attachment = policy
            .accept(ResumeFile::new("cv.pdf", DEFAULT_MAX_RESUME_BYTES))
            .expect("exactly 5MB is allowed");
        assert_eq!(attachment.content_type(), "application/pdf");
        assert_eq!(attachment.size_bytes(), 5_242_880);
    }

    #[test]
    fn rejects_one_byte_over_the_ceiling() {
        let policy = AttachmentPolicy::default();
        match policy.accept(ResumeFile::new("cv.pdf", DEFAULT_MAX_RESUME_BYTES + 1)) {
            Err(FormError::FileTooLarge { size, max }) => {
                assert_eq!(size, 5_242_881);
                assert_eq!(max, 5_242_880);
            }
            other => panic!("expected file too large, got {other:?}"),
        }
    }

    #[test]
    fn extension_check_is_case_insensitive() {
        let policy = AttachmentPolicy::default();
        let attachment = policy
            .accept(ResumeFile::new("Resume.DOCX", 20_000))
            .expect("docx accepted");
        assert_eq!(
            attachment.content_type(),
            "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
        );
        assert_eq!(attachment.file_name(), "Resume.DOCX");
    }

    #[test]
    fn rejects_unlisted_and_missing_extensions() {
        let policy = AttachmentPolicy::default();
        match policy.accept(ResumeFile::new("portrait.png", 1_000)) {
            Err(FormError::FileTypeRejected { extension }) => assert_eq!(extension, "png"),
            other => panic!("expected type rejection, got {other:?}"),
        }
        assert!(matches!(
            policy.accept(ResumeFile::new("resume", 1_000)),
            Err(FormError::FileTypeRejected { .. })
        ));
    }

    #[test]
    fn stored_reference_is_checked_again_on_load() {
        let attachment: ResumeAttachment = serde_json::from_str(
            r#"{"fileName":"cv.docx","sizeBytes":2048,"contentType":"text/plain"}"#,
        )
        .expect("docx reference loads");
        assert_eq!(attachment.file_name(), "cv.docx");
        assert_eq!(
            attachment.content_type(),
            "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
        );

        let oversized = serde_json::from_str::<ResumeAttachment>(
            r#"{"fileName":"cv.pdf","sizeBytes":524288000,"contentType":"application/pdf"}"#,
        );
        assert!(oversized.is_err());
        let executable = serde_json::from_str::<ResumeAttachment>(
            r#"{"fileName":"malware.exe","sizeBytes":10,"contentType":"application/pdf"}"#,
        );
        assert!(executable.is_err());
    }

    #[test]
    fn zero_ceiling_falls_back_to_default() {
        assert_eq!(AttachmentPolicy::new(0).max_bytes(), DEFAULT_MAX_RESUME_BYTES);
    }
}
