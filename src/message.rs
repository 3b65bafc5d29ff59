//! Message and command types for the update page.
//!
//! Browser events and network completions are fed to the page controller as
//! messages in the Elm architecture style. The controller answers with at
//! most one command for the platform shell to run.

use crate::error::PageError;
use crate::selection::SelectedFile;
use crate::upload::UploadJob;

/// Raw HTTP reply from the device.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpReply {
    pub status: u16,
    pub body: String,
}

impl HttpReply {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}

/// Events the page controller reacts to.
#[derive(Debug)]
pub enum Message<H> {
    /// Page finished loading
    PageLoaded,
    /// File picker selection changed
    FilesSelected(Vec<SelectedFile<H>>),
    /// Submit button clicked
    SubmitClicked,
    /// Status request completed
    StatusLoaded(Result<HttpReply, PageError>),
    /// Upload request completed
    UploadFinished(Result<HttpReply, PageError>),
}

/// Work the platform shell performs on behalf of the controller.
#[derive(Debug, Clone, PartialEq)]
pub enum Command<H> {
    /// GET the status endpoint
    FetchStatus { endpoint: String },
    /// Send the selected image to the device
    Upload(UploadJob<H>),
}
