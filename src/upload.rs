//! Firmware upload requests.

use serde::{Deserialize, Serialize};

use crate::constants::{self, messages};
use crate::selection::SelectedFile;

/// How the image is sent to the device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum UploadMode {
    /// Raw bytes as `application/octet-stream`
    #[default]
    Binary,
    /// `multipart/form-data` with the file in the `myFile` field
    Multipart,
}

impl UploadMode {
    /// Message shown when an upload in this mode fails.
    pub fn failure_message(&self) -> &'static str {
        match self {
            UploadMode::Binary => messages::BINARY_UPLOAD_ERROR,
            UploadMode::Multipart => messages::MULTIPART_UPLOAD_ERROR,
        }
    }
}

/// An upload ready to be sent.
#[derive(Debug, Clone, PartialEq)]
pub struct UploadJob<H> {
    pub mode: UploadMode,
    pub endpoint: String,
    pub file: SelectedFile<H>,
}

impl<H> UploadJob<H> {
    /// Content type of the request body, when set explicitly.
    ///
    /// Multipart bodies get their content type (with boundary) from the
    /// browser.
    pub fn content_type(&self) -> Option<&'static str> {
        match self.mode {
            UploadMode::Binary => Some(constants::OCTET_STREAM),
            UploadMode::Multipart => None,
        }
    }

    /// Form field name for multipart uploads.
    pub fn form_field(&self) -> Option<&'static str> {
        match self.mode {
            UploadMode::Binary => None,
            UploadMode::Multipart => Some(constants::MULTIPART_FIELD),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn job(mode: UploadMode) -> UploadJob<()> {
        UploadJob {
            mode,
            endpoint: "/x".to_string(),
            file: SelectedFile::new("fw.img", 4, ()),
        }
    }

    #[test]
    fn test_binary_request_shape() {
        let job = job(UploadMode::Binary);
        assert_eq!(job.content_type(), Some("application/octet-stream"));
        assert_eq!(job.form_field(), None);
    }

    #[test]
    fn test_multipart_request_shape() {
        let job = job(UploadMode::Multipart);
        assert_eq!(job.content_type(), None);
        assert_eq!(job.form_field(), Some("myFile"));
    }

    #[test]
    fn test_failure_messages_differ_by_mode() {
        assert_eq!(
            UploadMode::Binary.failure_message(),
            "Unable to upload binary! Please try again."
        );
        assert_eq!(
            UploadMode::Multipart.failure_message(),
            "An error occurred uploading file."
        );
    }
}
