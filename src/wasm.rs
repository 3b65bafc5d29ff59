use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Event, File, HtmlInputElement};

use crate::app::FirmwarePage;
use crate::config::PageConfig;
use crate::constants::ids;
use crate::error::PageError;
use crate::message::{Command, Message};
use crate::selection::SelectedFile;
use crate::wasm_dom::DomPage;
use crate::wasm_http;

type SharedPage = Rc<RefCell<FirmwarePage<DomPage, File>>>;

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();

    if let Err(e) = console_log::init_with_level(log::Level::Trace) {
        web_sys::console::log_1(&format!("Logger already set: {}", e).into());
    }

    if let Err(e) = run() {
        log::error!("IAP page failed to start: {}", e);
    }
}

fn run() -> Result<(), PageError> {
    let config = PageConfig::load_or_default();
    log::set_max_level(config.log_level.to_level().to_level_filter());
    log::info!("IAP update page starting...");

    let window = web_sys::window().ok_or_else(|| PageError::dom("no window"))?;
    let page = DomPage::new(window)?;
    let input = page
        .document()
        .get_element_by_id(ids::UPLOAD_INPUT)
        .ok_or_else(|| PageError::dom(format!("missing element #{}", ids::UPLOAD_INPUT)))?;
    let submit = page
        .document()
        .get_element_by_id(ids::SUBMIT)
        .ok_or_else(|| PageError::dom(format!("missing element #{}", ids::SUBMIT)))?;

    let app: SharedPage = Rc::new(RefCell::new(FirmwarePage::new(config, page)));

    let app_change = app.clone();
    let on_change = Closure::wrap(Box::new(move |event: Event| {
        let files = match selected_files(&event) {
            Ok(files) => files,
            Err(e) => {
                log::warn!("📂 {}", e);
                Vec::new()
            }
        };
        dispatch(&app_change, Message::FilesSelected(files));
    }) as Box<dyn FnMut(Event)>);
    input
        .add_event_listener_with_callback("change", on_change.as_ref().unchecked_ref())
        .map_err(|e| PageError::dom(format!("change listener: {:?}", e)))?;
    on_change.forget(); // Lives as long as the page

    let app_click = app.clone();
    let on_click = Closure::wrap(Box::new(move |event: Event| {
        event.prevent_default();
        dispatch(&app_click, Message::SubmitClicked);
    }) as Box<dyn FnMut(Event)>);
    submit
        .add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())
        .map_err(|e| PageError::dom(format!("click listener: {:?}", e)))?;
    on_click.forget();

    dispatch(&app, Message::PageLoaded);
    Ok(())
}

/// Files currently chosen in the picker that fired `event`.
fn selected_files(event: &Event) -> Result<Vec<SelectedFile<File>>, PageError> {
    let input: HtmlInputElement = event
        .target()
        .ok_or_else(|| PageError::dom("change event without target"))?
        .dyn_into()
        .map_err(|_| PageError::dom("change target is not an input"))?;

    let Some(list) = input.files() else {
        return Ok(Vec::new());
    };

    Ok((0..list.length())
        .filter_map(|i| list.get(i))
        .map(|file| SelectedFile::new(file.name(), file.size() as u64, file))
        .collect())
}

/// Feed a message to the controller and run the command it returns.
///
/// The borrow is released before any request is awaited.
fn dispatch(app: &SharedPage, message: Message<File>) {
    let command = app.borrow_mut().update(message);
    if let Some(command) = command {
        wasm_bindgen_futures::spawn_local(run_command(app.clone(), command));
    }
}

async fn run_command(app: SharedPage, command: Command<File>) {
    let message = match command {
        Command::FetchStatus { endpoint } => {
            Message::StatusLoaded(wasm_http::get(&endpoint).await)
        }
        Command::Upload(job) => Message::UploadFinished(wasm_http::upload(&job).await),
    };
    dispatch(&app, message);
}
