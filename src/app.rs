// The firmware update page controller - shared between the browser shell and native tests

use crate::color_utils::hex_to_rgba;
use crate::config::PageConfig;
use crate::error::PageError;
use crate::message::{Command, HttpReply, Message};
use crate::selection::{self, SelectedFile, SelectionVerdict};
use crate::status::{self, StatusResponse};
use crate::upload::{UploadJob, UploadMode};
use crate::view::{self, Page, PageStatus};

/// State and event handling for the update page.
///
/// `P` is the page being written to and `H` the platform file handle.
pub struct FirmwarePage<P, H> {
    config: PageConfig,
    page: P,
    /// First file of the last accepted selection
    pending: Option<SelectedFile<H>>,
}

impl<P: Page, H: Clone> FirmwarePage<P, H> {
    pub fn new(config: PageConfig, page: P) -> Self {
        Self {
            config,
            page,
            pending: None,
        }
    }

    pub fn config(&self) -> &PageConfig {
        &self.config
    }

    pub fn page(&self) -> &P {
        &self.page
    }

    /// File that the next submit would upload.
    pub fn pending_file(&self) -> Option<&SelectedFile<H>> {
        self.pending.as_ref()
    }

    /// Handle one message, returning the command to run next, if any.
    pub fn update(&mut self, message: Message<H>) -> Option<Command<H>> {
        match message {
            Message::PageLoaded => {
                self.render(&PageStatus::Loading);
                Some(Command::FetchStatus {
                    endpoint: self.config.status_endpoint.clone(),
                })
            }
            Message::StatusLoaded(result) => {
                self.handle_status(result);
                None
            }
            Message::FilesSelected(files) => {
                self.handle_selection(files);
                None
            }
            Message::SubmitClicked => self.handle_submit(),
            Message::UploadFinished(result) => {
                self.handle_upload_finished(result);
                None
            }
        }
    }

    fn render(&mut self, status: &PageStatus<'_>) {
        view::apply(&mut self.page, status);
    }

    fn handle_status(&mut self, result: Result<HttpReply, PageError>) {
        let parsed = result.and_then(|reply| {
            if !status::is_status_fetch_success(reply.status) {
                return Err(PageError::HttpStatus {
                    status: reply.status,
                });
            }
            let json: serde_json::Value = serde_json::from_str(&reply.body)?;
            log::info!("📡 Device status: {}", json);
            StatusResponse::from_value(json)
        });

        let response = match parsed {
            Ok(response) => response,
            Err(e) => {
                log::warn!("📡 Status request failed: {}", e);
                self.render(&PageStatus::StatusFailed);
                return;
            }
        };

        let data = response.data;

        if let Some(color) = data.color.as_deref() {
            match hex_to_rgba(color) {
                Ok(rgba) => log::debug!("🎨 Background color {} ({})", color, rgba),
                Err(e) => log::warn!("🎨 Applying non-hex background color as-is: {}", e),
            }
        }

        let scenario = data.scenario();
        self.render(&PageStatus::StatusLoaded {
            version: &data.version,
            color: data.color.as_deref(),
            scenario,
        });
    }

    fn handle_selection(&mut self, files: Vec<SelectedFile<H>>) {
        match selection::evaluate(&files, &self.config.image_marker) {
            SelectionVerdict::Accepted { size_label } => {
                log::info!(
                    "📂 Selected {} ({})",
                    files.first().map_or("", |f| f.name.as_str()),
                    size_label
                );
                self.pending = files.into_iter().next();
                self.render(&PageStatus::SelectionAccepted {
                    size_label: &size_label,
                });
            }
            SelectionVerdict::Rejected => {
                log::warn!("📂 Rejected selection of {} file(s)", files.len());
                self.pending = None;
                self.render(&PageStatus::SelectionRejected);
            }
        }
    }

    fn handle_submit(&mut self) -> Option<Command<H>> {
        let Some(file) = self.pending.clone() else {
            log::warn!("⬆️ Submit ignored: {}", PageError::NoFileSelected);
            self.render(&PageStatus::SubmitFailed);
            return None;
        };

        log::info!(
            "⬆️ Uploading {} ({} bytes) to {}",
            file.name,
            file.size,
            self.config.upload_endpoint()
        );
        self.render(&PageStatus::Uploading);

        Some(Command::Upload(UploadJob {
            mode: self.config.upload_mode,
            endpoint: self.config.upload_endpoint().to_string(),
            file,
        }))
    }

    fn handle_upload_finished(&mut self, result: Result<HttpReply, PageError>) {
        let mode = self.config.upload_mode;
        let outcome = result.and_then(|reply| {
            if status::is_success(reply.status) {
                Ok(reply)
            } else {
                Err(PageError::HttpStatus {
                    status: reply.status,
                })
            }
        });

        match outcome {
            Ok(reply) => {
                if mode == UploadMode::Multipart {
                    match serde_json::from_str::<serde_json::Value>(&reply.body) {
                        Ok(json) => log::info!("⬆️ Upload response: {}", json),
                        Err(e) => log::debug!("⬆️ Upload response is not JSON: {}", e),
                    }
                }
                log::info!(
                    "✅ Upload accepted, reloading in {} ms",
                    self.config.reload_delay_ms
                );
                self.render(&PageStatus::Uploaded {
                    reload_delay_ms: self.config.reload_delay_ms,
                });
            }
            Err(e) => {
                log::warn!("❌ Upload failed: {}", e);
                self.render(&PageStatus::UploadFailed { mode });
            }
        }
    }
}
