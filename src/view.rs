//! View updates for the update page.
//!
//! All DOM changes go through [`apply`], which maps a [`PageStatus`] to a
//! fixed set of text and class edits on a [`Page`].

use crate::constants::{classes, ids, messages};
use crate::status::Scenario;
use crate::upload::UploadMode;

/// Minimal DOM surface the controller writes to.
pub trait Page {
    /// Replace the text of the element with `id`.
    fn set_text(&mut self, id: &str, text: &str);

    /// Add (`on`) or remove a class on the element with `id`.
    fn set_class(&mut self, id: &str, class: &str, on: bool);

    /// Replace the inline style of the page body.
    fn set_body_style(&mut self, style: &str);

    /// Reload the whole page after `delay_ms`.
    fn schedule_reload(&mut self, delay_ms: u32);
}

/// Page states the controller can render.
#[derive(Debug, Clone, PartialEq)]
pub enum PageStatus<'a> {
    /// Before the status request returns
    Loading,
    /// Device status arrived
    StatusLoaded {
        version: &'a str,
        color: Option<&'a str>,
        scenario: Scenario,
    },
    /// Device status could not be fetched
    StatusFailed,
    /// An uploadable file was picked
    SelectionAccepted { size_label: &'a str },
    /// The picked file is not an image
    SelectionRejected,
    /// Upload in flight
    Uploading,
    /// Submit clicked with nothing to upload
    SubmitFailed,
    /// Device accepted the image
    Uploaded { reload_delay_ms: u32 },
    /// Device rejected the image, or the request failed
    UploadFailed { mode: UploadMode },
}

/// Submit button appearance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SubmitState {
    Ready,
    Blocked,
}

fn set_submit<P: Page + ?Sized>(page: &mut P, state: SubmitState) {
    let ready = state == SubmitState::Ready;
    page.set_class(ids::SUBMIT, classes::DISABLED, !ready);
    page.set_class(ids::SUBMIT, classes::BTN_IDLE, !ready);
    page.set_class(ids::SUBMIT, classes::BTN_SUCCESS, ready);
}

fn mark_step<P: Page + ?Sized>(page: &mut P, id: &str, done: bool) {
    page.set_class(id, classes::STEP_DONE, done);
}

/// Render a page status.
pub fn apply<P: Page + ?Sized>(page: &mut P, status: &PageStatus<'_>) {
    match status {
        PageStatus::Loading => {
            page.set_text(ids::SCENARIO_DESC, Scenario::Plain.description());
        }
        PageStatus::StatusLoaded {
            version,
            color,
            scenario,
        } => {
            page.set_text(ids::CURRENT_VERSION, version);
            page.set_text(
                ids::SUCCESS,
                &format!("{}{}", messages::VERSION_PREFIX, version),
            );
            if let Some(color) = color {
                page.set_body_style(&format!("background-color: {}", color));
            }
            page.set_text(ids::SCENARIO_DESC, scenario.description());
        }
        PageStatus::StatusFailed => {
            page.set_text(ids::FAILURE, messages::STATUS_ERROR);
        }
        PageStatus::SelectionAccepted { size_label } => {
            page.set_text(ids::FILE_SIZE, size_label);
            page.set_text(ids::FAILURE, "");
            set_submit(page, SubmitState::Ready);
            mark_step(page, ids::STEP1, false);
            mark_step(page, ids::STEP2, true);
            mark_step(page, ids::STEP3, false);
        }
        PageStatus::SelectionRejected => {
            page.set_text(ids::SUCCESS, "");
            page.set_text(ids::FAILURE, messages::UNKNOWN_FILETYPE);
            set_submit(page, SubmitState::Blocked);
        }
        PageStatus::Uploading => {
            page.set_text(ids::SUCCESS, messages::UPLOADING);
            set_submit(page, SubmitState::Blocked);
        }
        PageStatus::SubmitFailed => {
            page.set_text(ids::FAILURE, messages::SUBMIT_ERROR);
            set_submit(page, SubmitState::Blocked);
            mark_step(page, ids::STEP3, false);
        }
        PageStatus::Uploaded { reload_delay_ms } => {
            page.set_text(ids::SUCCESS, messages::UPLOADED);
            page.set_text(ids::FAILURE, "");
            page.schedule_reload(*reload_delay_ms);
        }
        PageStatus::UploadFailed { mode } => {
            if *mode == UploadMode::Multipart {
                mark_step(page, ids::STEP3, false);
                set_submit(page, SubmitState::Blocked);
            }
            page.set_text(ids::FAILURE, mode.failure_message());
            page.set_text(ids::SUCCESS, "");
        }
    }
}


#[cfg(test)]
mod tests {
    use super::testing::RecordingPage;
    use super::*;

    #[test]
    fn test_loading_shows_first_scenario() {
        let mut page = RecordingPage::default();
        apply(&mut page, &PageStatus::Loading);
        assert_eq!(
            page.text(ids::SCENARIO_DESC),
            Some(Scenario::Plain.description())
        );
    }

    #[test]
    fn test_status_loaded_projects_fields() {
        let mut page = RecordingPage::default();
        apply(
            &mut page,
            &PageStatus::StatusLoaded {
                version: "2.1.0",
                color: Some("#224466"),
                scenario: Scenario::Signed,
            },
        );
        assert_eq!(page.text(ids::CURRENT_VERSION), Some("2.1.0"));
        assert_eq!(
            page.text(ids::SUCCESS),
            Some("Current firmware version: 2.1.0")
        );
        assert_eq!(
            page.body_style.as_deref(),
            Some("background-color: #224466")
        );
        assert_eq!(
            page.text(ids::SCENARIO_DESC),
            Some(Scenario::Signed.description())
        );
    }

    #[test]
    fn test_status_without_color_keeps_body_style() {
        let mut page = RecordingPage::default();
        apply(
            &mut page,
            &PageStatus::StatusLoaded {
                version: "1",
                color: None,
                scenario: Scenario::Plain,
            },
        );
        assert_eq!(page.body_style, None);
    }

    #[test]
    fn test_selection_accepted_then_rejected() {
        let mut page = RecordingPage::default();
        apply(
            &mut page,
            &PageStatus::SelectionAccepted {
                size_label: "10 bytes",
            },
        );
        assert!(page.has_class(ids::SUBMIT, classes::BTN_SUCCESS));
        assert!(!page.has_class(ids::SUBMIT, classes::DISABLED));
        assert!(page.has_class(ids::STEP2, classes::STEP_DONE));
        assert!(!page.has_class(ids::STEP1, classes::STEP_DONE));

        apply(&mut page, &PageStatus::SelectionRejected);
        assert!(page.has_class(ids::SUBMIT, classes::DISABLED));
        assert!(page.has_class(ids::SUBMIT, classes::BTN_IDLE));
        assert!(!page.has_class(ids::SUBMIT, classes::BTN_SUCCESS));
        assert_eq!(page.text(ids::FAILURE), Some(messages::UNKNOWN_FILETYPE));
        assert_eq!(page.text(ids::SUCCESS), Some(""));
    }

    #[test]
    fn test_multipart_failure_resets_step_three() {
        let mut page = RecordingPage::default();
        page.set_class(ids::STEP3, classes::STEP_DONE, true);
        apply(
            &mut page,
            &PageStatus::UploadFailed {
                mode: UploadMode::Multipart,
            },
        );
        assert!(!page.has_class(ids::STEP3, classes::STEP_DONE));
        assert!(page.has_class(ids::SUBMIT, classes::DISABLED));
        assert_eq!(
            page.text(ids::FAILURE),
            Some(messages::MULTIPART_UPLOAD_ERROR)
        );
    }
}
