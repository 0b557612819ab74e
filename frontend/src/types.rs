//! Common types used across the frontend application.
//!
//! # Categories
//!
//! - **Form Types** - What the user submitted
//! - **Progress Types** - Upload completion percentage
//! - **API Types** - Server response structures
//! - **Notice Types** - Status message shown under the form
//! - **Error Types** - Frontend error handling

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::{
    MALFORMED_RESPONSE_MESSAGE, MISSING_DOWNLOAD_LINK_MESSAGE, UNEXPECTED_ERROR_MESSAGE,
};

// =============================================================================
// Form Types
// =============================================================================

/// Plain copy of the upload form's fields, taken at submission time.
///
/// The multipart payload itself stays a browser `FormData`; this snapshot
/// is what gets validated and logged.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormSnapshot {
    /// Name of the selected file, `None` when nothing was chosen
    pub file_name: Option<String>,
    /// Raw text of the segment duration input
    pub segment_duration: String,
    /// Raw text of the removal interval input
    pub removal_interval: String,
}

/// Validated cut parameters, in seconds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CutParameters {
    pub segment_duration: i64,
    pub removal_interval: i64,
}

// =============================================================================
// Progress Types
// =============================================================================

/// Upload completion as a whole percentage in `0..=100`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct UploadProgress(u8);

impl UploadProgress {
    /// Nothing sent yet.
    pub const START: Self = Self(0);
    /// Request body fully transmitted and accepted.
    pub const COMPLETE: Self = Self(100);

    /// Build from a length-computable progress event.
    ///
    /// Returns `None` when `total` is not a positive finite number.
    pub fn from_bytes(loaded: f64, total: f64) -> Option<Self> {
        if !total.is_finite() || total <= 0.0 || !loaded.is_finite() {
            return None;
        }
        let percent = (loaded / total * 100.0).round().clamp(0.0, 100.0);
        Some(Self(percent as u8))
    }

    pub fn percent(self) -> u8 {
        self.0
    }

    /// CSS `width` value for the progress fill.
    pub fn css_width(self) -> String {
        format!("{}%", self.0)
    }
}

// =============================================================================
// API Response Types
// =============================================================================

/// JSON body returned by the upload endpoint.
///
/// Success bodies carry `message` and `download_link`, error bodies carry
/// `error`. Every field is optional so both shapes decode.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ServerResponse {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub download_link: Option<String>,
}

impl ServerResponse {
    /// The download link, ignoring an empty string.
    pub fn download_link(&self) -> Option<&str> {
        self.download_link.as_deref().filter(|link| !link.is_empty())
    }

    /// The error text, ignoring an empty string.
    pub fn error_message(&self) -> Option<&str> {
        self.error.as_deref().filter(|error| !error.is_empty())
    }
}

// =============================================================================
// Notice Types
// =============================================================================

/// Visual style of the status message.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

impl NoticeKind {
    /// Get CSS class for styling.
    pub fn css_class(&self) -> &'static str {
        match self {
            NoticeKind::Success => "message success",
            NoticeKind::Error => "message error",
        }
    }
}

/// Text shown in the message element.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
}

impl Notice {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            text: text.into(),
        }
    }

    /// Error notice for a failed submission.
    ///
    /// Falls back to a generic message when the error renders empty.
    pub fn from_error(error: &UploadError) -> Self {
        let text = error.to_string();
        if text.trim().is_empty() {
            Self::error(UNEXPECTED_ERROR_MESSAGE)
        } else {
            Self::error(text)
        }
    }
}

// =============================================================================
// Submission State
// =============================================================================

/// Whether an upload is currently in flight.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmissionState {
    #[default]
    Idle,
    Submitting,
}

// =============================================================================
// Error Types
// =============================================================================

/// Everything that can end a submission without a download.
///
/// `Display` is the exact text shown to the user.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum UploadError {
    /// The request never produced a response.
    #[error("{0}")]
    Network(String),

    /// Non-2xx response. `message` is the body's `error` field or a
    /// status-based fallback.
    #[error("{message}")]
    Server { status: u16, message: String },

    /// Response body was not the expected JSON. Holds the decoder's detail.
    #[error("{}", MALFORMED_RESPONSE_MESSAGE)]
    MalformedResponse(String),

    /// 2xx response without a `download_link`.
    #[error("{}", MISSING_DOWNLOAD_LINK_MESSAGE)]
    MissingDownloadLink,

    /// Form rejected before sending.
    #[error("{0}")]
    Validation(String),

    /// A browser API call failed. Holds the JS error rendering.
    #[error("{}", UNEXPECTED_ERROR_MESSAGE)]
    Dom(String),
}

/// Result type alias for upload operations.
pub type UploadResult<T> = Result<T, UploadError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_rounds_to_nearest_percent() {
        assert_eq!(UploadProgress::from_bytes(1.0, 3.0).map(UploadProgress::percent), Some(33));
        assert_eq!(UploadProgress::from_bytes(2.0, 3.0).map(UploadProgress::percent), Some(67));
        assert_eq!(UploadProgress::from_bytes(512.0, 1024.0).unwrap().css_width(), "50%");
    }

    #[test]
    fn test_progress_clamps_and_rejects_unknown_totals() {
        assert_eq!(UploadProgress::from_bytes(2048.0, 1024.0), Some(UploadProgress::COMPLETE));
        assert_eq!(UploadProgress::from_bytes(10.0, 0.0), None);
        assert_eq!(UploadProgress::from_bytes(10.0, f64::NAN), None);
        assert_eq!(UploadProgress::from_bytes(0.0, 100.0), Some(UploadProgress::START));
    }

    #[test]
    fn test_response_deserialization() {
        let json = r#"{
            "message": "Vídeo cortado com sucesso!",
            "download_link": "/download/clip_20240101_120000.mp4"
        }"#;

        let response: ServerResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.message.as_deref(), Some("Vídeo cortado com sucesso!"));
        assert_eq!(response.download_link(), Some("/download/clip_20240101_120000.mp4"));
        assert_eq!(response.error_message(), None);
    }

    #[test]
    fn test_empty_fields_count_as_missing() {
        let response: ServerResponse =
            serde_json::from_str(r#"{"message": "Done", "download_link": "", "error": ""}"#).unwrap();
        assert_eq!(response.download_link(), None);
        assert_eq!(response.error_message(), None);
    }

    #[test]
    fn test_error_display_is_user_text() {
        let error = UploadError::Server {
            status: 400,
            message: "Invalid format".to_string(),
        };
        assert_eq!(error.to_string(), "Invalid format");
        assert_eq!(UploadError::MissingDownloadLink.to_string(), MISSING_DOWNLOAD_LINK_MESSAGE);
        assert_eq!(
            UploadError::MalformedResponse("expected value at line 1".into()).to_string(),
            MALFORMED_RESPONSE_MESSAGE
        );
    }

    #[test]
    fn test_notice_falls_back_on_empty_error() {
        let notice = Notice::from_error(&UploadError::Network(String::new()));
        assert_eq!(notice, Notice::error(UNEXPECTED_ERROR_MESSAGE));
        assert_eq!(notice.kind.css_class(), "message error");
        assert_eq!(Notice::success("ok").kind.css_class(), "message success");
    }
}
