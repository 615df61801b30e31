//! Page bootstrap: mounts the preset and declarative carousels once the
//! document is ready.

use std::cell::{Cell, RefCell};

use anyhow::{Context, Result};
use carousel_core::Carousel;
use gloo::console;
use gloo::events::EventListener;
use tracing::{debug, error, info};
use wasm_bindgen::JsCast;
use web_sys::{DocumentReadyState, Element};

use crate::dom::DomHost;
use crate::presets::{OPTIONS_ATTRIBUTE, PRESETS, parse_options};
use crate::telemetry::{LoggingConfig, init_logging};

thread_local! {
    static MOUNTED: RefCell<Vec<Carousel<DomHost>>> = const { RefCell::new(Vec::new()) };
    static STARTED: Cell<bool> = const { Cell::new(false) };
}

/// Install panic and logging hooks, then mount carousels when the document
/// has finished parsing.
pub fn run_app() {
    console_error_panic_hook::set_once();
    if let Err(err) = init_logging(&LoggingConfig::default()) {
        console::error!("carousel logging unavailable", err.to_string());
    }

    let host = DomHost::new();
    let document = host.document().clone();
    if document.ready_state() == DocumentReadyState::Loading {
        EventListener::once(&document, "DOMContentLoaded", move |_| {
            mount_all(&host);
        })
        .forget();
    } else {
        mount_all(&host);
    }
}

fn mount_all(host: &DomHost) {
    if STARTED.with(|started| started.replace(true)) {
        return;
    }

    for preset in PRESETS {
        let element = match host.document().query_selector(preset.selector) {
            Ok(Some(element)) => element,
            Ok(None) => {
                debug!(selector = preset.selector, "no element for carousel preset");
                continue;
            }
            Err(err) => {
                error!(selector = preset.selector, detail = ?err, "invalid carousel selector");
                continue;
            }
        };
        if element.has_attribute(OPTIONS_ATTRIBUTE) {
            continue;
        }
        keep(mount(host, &element, || Ok(preset.options)), preset.selector);
    }

    for element in declarative_elements(host) {
        let raw = element.get_attribute(OPTIONS_ATTRIBUTE).unwrap_or_default();
        keep(mount(host, &element, || parse_options(&raw)), &element.id());
    }

    MOUNTED.with(|mounted| info!(carousels = mounted.borrow().len(), "carousels mounted"));
}

fn mount(
    host: &DomHost,
    element: &Element,
    options: impl FnOnce() -> Result<carousel_core::CarouselOptions>,
) -> Result<Carousel<DomHost>> {
    let options = options()?;
    Carousel::new(host.clone(), element, options).context("failed to mount carousel")
}

fn keep(result: Result<Carousel<DomHost>>, label: &str) {
    match result {
        Ok(carousel) => MOUNTED.with(|mounted| mounted.borrow_mut().push(carousel)),
        Err(err) => {
            let detail = format!("{err:#}");
            error!(element = label, error = %detail, "carousel skipped");
        }
    }
}

fn declarative_elements(host: &DomHost) -> Vec<Element> {
    let selector = format!("[{OPTIONS_ATTRIBUTE}]");
    let Ok(nodes) = host.document().query_selector_all(&selector) else {
        return Vec::new();
    };
    (0..nodes.length())
        .filter_map(|index| nodes.item(index))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}
