//! IAP web - firmware update page for the IAP demo boards
//!
//! Browser controller for the device-hosted update page: pick a `.img`
//! image, show its size and the running firmware's scenario, and upload it
//! to the device HTTP server. The page logic is platform independent; the
//! `wasm32` build binds it to the DOM and `fetch`.

mod app;
pub mod color_utils;
pub mod config;
pub mod constants;
pub mod error;
pub mod message;
pub mod selection;
pub mod size_format;
pub mod status;
pub mod upload;
pub mod view;

pub use app::FirmwarePage;
pub use config::PageConfig;
pub use error::PageError;
pub use message::{Command, HttpReply, Message};
pub use view::{Page, PageStatus};

// WASM entry point
#[cfg(target_arch = "wasm32")]
mod wasm;
#[cfg(target_arch = "wasm32")]
mod wasm_dom;
#[cfg(target_arch = "wasm32")]
mod wasm_http;

#[cfg(target_arch = "wasm32")]
pub use wasm::*;
