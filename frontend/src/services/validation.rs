//! Pre-flight checks on the upload form.
//!
//! Same rules and messages as the cutting server, applied before the
//! video is sent.

use crate::config::{
    ALLOWED_EXTENSIONS, INTERVAL_TOO_LARGE_MESSAGE, INVALID_FILE_MESSAGE,
    NON_POSITIVE_SEGMENT_MESSAGE, NOT_INTEGER_MESSAGE,
};
use crate::types::{CutParameters, FormSnapshot, UploadError, UploadResult};

/// Whether `file_name` has one of the accepted video extensions.
pub fn is_allowed_file(file_name: &str) -> bool {
    match file_name.rsplit_once('.') {
        Some((_, extension)) => ALLOWED_EXTENSIONS
            .iter()
            .any(|allowed| allowed.eq_ignore_ascii_case(extension)),
        None => false,
    }
}

/// Validate a form snapshot into cut parameters.
pub fn validate(snapshot: &FormSnapshot) -> UploadResult<CutParameters> {
    let file_ok = snapshot
        .file_name
        .as_deref()
        .is_some_and(is_allowed_file);
    if !file_ok {
        return Err(UploadError::Validation(INVALID_FILE_MESSAGE.to_string()));
    }

    let segment_duration = parse_seconds(&snapshot.segment_duration)?;
    let removal_interval = parse_seconds(&snapshot.removal_interval)?;

    if removal_interval >= segment_duration {
        return Err(UploadError::Validation(INTERVAL_TOO_LARGE_MESSAGE.to_string()));
    }
    if segment_duration <= 0 {
        return Err(UploadError::Validation(NON_POSITIVE_SEGMENT_MESSAGE.to_string()));
    }

    Ok(CutParameters {
        segment_duration,
        removal_interval,
    })
}

fn parse_seconds(raw: &str) -> UploadResult<i64> {
    raw.trim()
        .parse::<i64>()
        .map_err(|_| UploadError::Validation(NOT_INTEGER_MESSAGE.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(file: Option<&str>, segment: &str, interval: &str) -> FormSnapshot {
        FormSnapshot {
            file_name: file.map(str::to_string),
            segment_duration: segment.to_string(),
            removal_interval: interval.to_string(),
        }
    }

    fn validation_message(result: UploadResult<CutParameters>) -> String {
        match result {
            Err(UploadError::Validation(message)) => message,
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_allowed_extensions() {
        assert!(is_allowed_file("holiday.mp4"));
        assert!(is_allowed_file("HOLIDAY.MKV"));
        assert!(is_allowed_file("archive.tar.mov"));
        assert!(!is_allowed_file("notes.txt"));
        assert!(!is_allowed_file("mp4"));
        assert!(!is_allowed_file(""));
    }

    #[test]
    fn test_valid_snapshot() {
        let params = validate(&snapshot(Some("clip.mp4"), " 30 ", "5")).unwrap();
        assert_eq!(
            params,
            CutParameters {
                segment_duration: 30,
                removal_interval: 5,
            }
        );
    }

    #[test]
    fn test_missing_or_wrong_file() {
        assert_eq!(validation_message(validate(&snapshot(None, "30", "5"))), INVALID_FILE_MESSAGE);
        assert_eq!(
            validation_message(validate(&snapshot(Some("clip.gif"), "30", "5"))),
            INVALID_FILE_MESSAGE
        );
    }

    #[test]
    fn test_non_integer_fields() {
        assert_eq!(
            validation_message(validate(&snapshot(Some("clip.avi"), "2.5", "1"))),
            NOT_INTEGER_MESSAGE
        );
        assert_eq!(
            validation_message(validate(&snapshot(Some("clip.avi"), "30", ""))),
            NOT_INTEGER_MESSAGE
        );
    }

    #[test]
    fn test_interval_must_be_smaller_than_segment() {
        assert_eq!(
            validation_message(validate(&snapshot(Some("clip.mov"), "10", "10"))),
            INTERVAL_TOO_LARGE_MESSAGE
        );
        assert_eq!(
            validation_message(validate(&snapshot(Some("clip.mov"), "0", "-1"))),
            NON_POSITIVE_SEGMENT_MESSAGE
        );
    }
}
