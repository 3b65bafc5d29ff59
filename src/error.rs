//! Error types for page operations.

use thiserror::Error;

/// Errors raised while talking to the DOM or the device.
///
/// None of these reach the user directly; the controller maps each failure
/// to one of the fixed strings in [`crate::constants::messages`].
#[derive(Error, Debug)]
pub enum PageError {
    /// DOM lookup or mutation failed
    #[error("DOM error: {0}")]
    Dom(String),

    /// Request never produced a response
    #[error("Network error: {0}")]
    Network(String),

    /// Device answered with a status outside the accepted range
    #[error("Unexpected HTTP status {status}")]
    HttpStatus {
        /// Status code returned by the device
        status: u16,
    },

    /// Response body was not the expected JSON
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Selected file could not be read into memory
    #[error("Failed to read file '{name}': {message}")]
    FileRead {
        /// Name of the file being read
        name: String,
        /// Browser-provided reason
        message: String,
    },

    /// Submit was clicked without an accepted selection
    #[error("No uploadable file selected")]
    NoFileSelected,
}

impl PageError {
    /// Create a DOM error with a message.
    pub fn dom(message: impl Into<String>) -> Self {
        Self::Dom(message.into())
    }

    /// Create a network error with a message.
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network(message.into())
    }

    /// Create a file read error.
    pub fn file_read(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::FileRead {
            name: name.into(),
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            PageError::HttpStatus { status: 500 }.to_string(),
            "Unexpected HTTP status 500"
        );
        assert_eq!(
            PageError::file_read("fw.img", "aborted").to_string(),
            "Failed to read file 'fw.img': aborted"
        );
        assert_eq!(
            PageError::NoFileSelected.to_string(),
            "No uploadable file selected"
        );
    }

    #[test]
    fn test_json_error_converts() {
        let err: PageError = serde_json::from_str::<u32>("nope").unwrap_err().into();
        assert!(matches!(err, PageError::Json(_)));
    }
}
