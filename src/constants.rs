//! Fixed strings and identifiers for the firmware update page.

/// DOM element ids the controller writes to.
pub mod ids {
    /// File picker input
    pub const UPLOAD_INPUT: &str = "uploadInput";
    /// Submit button
    pub const SUBMIT: &str = "submit";
    /// Human-readable size of the selected file
    pub const FILE_SIZE: &str = "fileSize";
    /// Success message line
    pub const SUCCESS: &str = "success";
    /// Failure message line
    pub const FAILURE: &str = "failure";
    /// Firmware version badge
    pub const CURRENT_VERSION: &str = "currentVersion";
    /// Scenario description paragraph
    pub const SCENARIO_DESC: &str = "scenarioDesc";
    /// Wizard step: choose a file
    pub const STEP1: &str = "step1";
    /// Wizard step: file ready to upload
    pub const STEP2: &str = "step2";
    /// Wizard step: upload
    pub const STEP3: &str = "step3";
}

/// CSS classes toggled on the submit button and the wizard steps.
pub mod classes {
    pub const DISABLED: &str = "disabled";
    pub const BTN_SUCCESS: &str = "btn-success";
    pub const BTN_IDLE: &str = "btn-outline-secondary";
    pub const STEP_DONE: &str = "list-group-item-success";
}

/// Messages shown to the user.
pub mod messages {
    pub const UNKNOWN_FILETYPE: &str = "Unknown filetype. Please upload a binary (.img) file.";
    pub const UPLOADING: &str = "Uploading file...";
    pub const UPLOADED: &str = "Uploaded. Page will reload in 5 seconds...";
    pub const SUBMIT_ERROR: &str = "An error occurred. Please try again.";
    pub const BINARY_UPLOAD_ERROR: &str = "Unable to upload binary! Please try again.";
    pub const MULTIPART_UPLOAD_ERROR: &str = "An error occurred uploading file.";
    pub const STATUS_ERROR: &str = "An error occurred fetching current version.";
    pub const VERSION_PREFIX: &str = "Current firmware version: ";
}

/// Scenario descriptions, indexed by the scenario tag reported by the device.
pub mod scenarios {
    pub const PLAIN: &str = "Current application firmware can process images generated with a simple application binary (not encrypted) and an integrity tag";
    pub const ENCRYPTED: &str = "Current application firmware can process images generated with a cipher application binary (encrypted) and an authentication tag";
    pub const SIGNED: &str = "Current application firmware can process images generated with a cipher application binary (encrypted) and a signature";
}

/// Default device endpoints.
pub const STATUS_ENDPOINT: &str = "/data.json";
pub const BINARY_UPLOAD_ENDPOINT: &str = "/upload/binary";
pub const MULTIPART_UPLOAD_ENDPOINT: &str = "/upload";

/// Form field carrying the file in multipart uploads.
pub const MULTIPART_FIELD: &str = "myFile";

/// Content type of raw binary uploads.
pub const OCTET_STREAM: &str = "application/octet-stream";

/// Substring a file name must contain to be uploadable.
pub const DEFAULT_IMAGE_MARKER: &str = ".img";

/// Delay between a successful upload and the page reload.
pub const DEFAULT_RELOAD_DELAY_MS: u32 = 5000;
