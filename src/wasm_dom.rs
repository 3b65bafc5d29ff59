//! Browser DOM implementation of [`Page`].

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, Window};

use crate::error::PageError;
use crate::view::Page;

/// The live document of the update page.
pub struct DomPage {
    window: Window,
    document: Document,
}

impl DomPage {
    pub fn new(window: Window) -> Result<Self, PageError> {
        let document = window
            .document()
            .ok_or_else(|| PageError::dom("no document"))?;
        Ok(Self { window, document })
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    fn element(&self, id: &str) -> Result<Element, PageError> {
        self.document
            .get_element_by_id(id)
            .ok_or_else(|| PageError::dom(format!("missing element #{}", id)))
    }

    fn try_set_class(&self, id: &str, class: &str, on: bool) -> Result<(), PageError> {
        let list = self.element(id)?.class_list();
        let result = if on {
            list.add_1(class)
        } else {
            list.remove_1(class)
        };
        result.map_err(|e| PageError::dom(format!("class {} on #{}: {:?}", class, id, e)))
    }

    fn try_set_body_style(&self, style: &str) -> Result<(), PageError> {
        self.document
            .body()
            .ok_or_else(|| PageError::dom("no body"))?
            .set_attribute("style", style)
            .map_err(|e| PageError::dom(format!("body style: {:?}", e)))
    }

    fn try_schedule_reload(&self, delay_ms: u32) -> Result<(), PageError> {
        let location = self.window.location();
        let reload = Closure::once_into_js(move || {
            if let Err(e) = location.reload() {
                log::error!("🔄 Page reload failed: {:?}", e);
            }
        });

        let delay = i32::try_from(delay_ms).unwrap_or(i32::MAX);
        self.window
            .set_timeout_with_callback_and_timeout_and_arguments_0(reload.unchecked_ref(), delay)
            .map_err(|e| PageError::dom(format!("setTimeout: {:?}", e)))?;
        Ok(())
    }
}

impl Page for DomPage {
    fn set_text(&mut self, id: &str, text: &str) {
        match self.element(id) {
            Ok(element) => element.set_text_content(Some(text)),
            Err(e) => log::warn!("{}", e),
        }
    }

    fn set_class(&mut self, id: &str, class: &str, on: bool) {
        if let Err(e) = self.try_set_class(id, class, on) {
            log::warn!("{}", e);
        }
    }

    fn set_body_style(&mut self, style: &str) {
        if let Err(e) = self.try_set_body_style(style) {
            log::warn!("{}", e);
        }
    }

    fn schedule_reload(&mut self, delay_ms: u32) {
        if let Err(e) = self.try_schedule_reload(delay_ms) {
            log::warn!("{}", e);
        }
    }
}
