use crate::*;

use std::cell::RefCell;
use std::rc::Rc;

use log::{error, info, warn, LevelFilter};

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use web_sys::{
    Document,
    HtmlCanvasElement,
    WebGlRenderingContext,
    window
};

/// Starts the application on the current page with the default `PageConfig`: it draws on the
/// canvas with id "glCanvas" and listens to the buttons "color1", "color2", "color3" and
/// "resetColor".
#[wasm_bindgen]
pub fn start() {
    start_with_page_config(PageConfig::default());
}

/// Like `start`, but uses the given JSON object to override fields of the default `PageConfig`.
#[wasm_bindgen]
pub fn start_with_config(config_json: &str) {
    match PageConfig::from_json(config_json) {
        Ok(config) => start_with_page_config(config),
        Err(config_error) => {
            init_logging(LevelFilter::Info);
            AlertReporter.report_fatal_error(&InitError::from(config_error));
        }
    }
}

fn start_with_page_config(config: PageConfig) {
    // The log level was validated while parsing the config, so this only falls back for
    // configs that were constructed in code.
    init_logging(config.get_log_level().unwrap_or(LevelFilter::Info));

    let acquired = acquire_backend(&config);
    let application = match Application::launch(acquired, &mut AlertReporter) {
        Some(application) => Rc::new(RefCell::new(application)),
        None => return,
    };

    for button in &ColorButton::ALL {
        listen_to_button(&config, *button, Rc::clone(&application));
    }
}

fn init_logging(level: LevelFilter) {
    console_error_panic_hook::set_once();
    if let Some(level) = level.to_level() {
        // This fails when a logger was installed by an earlier start call, which is harmless
        let _ = console_log::init_with_level(level);
    }
}

fn get_document() -> Result<Document, InitError> {
    window()
        .and_then(|the_window| the_window.document())
        .ok_or_else(|| InitError::ContextUnavailable("There is no document".to_string()))
}

fn acquire_backend(config: &PageConfig) -> Result<GlowBackend, InitError> {
    let document = get_document()?;
    let missing_surface = || InitError::MissingSurface { id: config.canvas_id.clone() };

    let canvas: HtmlCanvasElement = document
        .get_element_by_id(&config.canvas_id)
        .ok_or_else(missing_surface)?
        .dyn_into::<HtmlCanvasElement>()
        .map_err(|_| missing_surface())?;

    let context: WebGlRenderingContext = canvas
        .get_context("webgl")
        .map_err(|_| InitError::ContextUnavailable("getContext(\"webgl\") threw".to_string()))?
        .ok_or_else(|| InitError::ContextUnavailable("The canvas has no webgl context".to_string()))?
        .dyn_into::<WebGlRenderingContext>()
        .map_err(|_| InitError::ContextUnavailable("Unexpected type of context".to_string()))?;

    info!("Acquired a WebGL context from canvas '{}'", config.canvas_id);
    Ok(GlowBackend::new(glow::Context::from_webgl1_context(context)))
}

fn listen_to_button(
    config: &PageConfig, button: ColorButton, application: Rc<RefCell<Application<GlowBackend>>>
) {
    let element_id = config.get_button_id(button);
    let element = match get_document().ok().and_then(|document| document.get_element_by_id(element_id)) {
        Some(element) => element,
        None => {
            warn!("There is no element with id '{}' for button {:?}", element_id, button);
            return;
        }
    };

    let click_closure = Closure::wrap(Box::new(move || {
        application.borrow_mut().fire_button_click(button);
    }) as Box<dyn FnMut()>);

    if element.add_event_listener_with_callback(
        "click", click_closure.as_ref().unchecked_ref()
    ).is_err() {
        warn!("Couldn't add a click listener to element '{}'", element_id);
        return;
    }

    // The listener must stay alive for as long as the page lives
    click_closure.forget();
}

/// Logs fatal errors and shows them in an alert dialog
struct AlertReporter;

impl FatalErrorReporter for AlertReporter {
    fn report_fatal_error(&mut self, init_error: &InitError) {
        error!("Failed to start: {}", init_error);
        let shown = window()
            .map(|the_window| the_window.alert_with_message(&init_error.to_string()).is_ok())
            .unwrap_or(false);
        if !shown {
            error!("Couldn't show the alert");
        }
    }
}
