//! Browser entry point and DOM event bindings.
//!
//! Everything here is glue: it builds a [`Site`] over the live document and
//! forwards DOM events to its handlers. Listeners stay registered for the
//! lifetime of the page, so their closures are leaked with `forget`. The one
//! deferred task, the contact form completion, is held as a `Timeout` that is
//! dropped (and thereby cancelled) when a newer submission replaces it or the
//! page is unloaded. A page parked in the back/forward cache keeps it.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen::prelude::*;
use web_sys::{Event, EventTarget, PageTransitionEvent};

use crate::config::SiteConfig;
use crate::consts::CONFIG_SCRIPT_ID;
use crate::dom::web::WebPage;
use crate::error::Result;
use crate::site::Site;
use crate::storage::LocalStorage;

type WebSite = Site<WebPage, LocalStorage>;

/// Module start: attach every controller found on the page.
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(err) = run() {
        log::error!("portfolio scripts disabled: {err}");
    }
}

fn run() -> Result<()> {
    let page = match WebPage::current() {
        Ok(page) => page,
        Err(err) => {
            init_logging(log::Level::Info);
            return Err(err);
        }
    };
    let config = load_config(&page);
    init_logging(config.as_ref().map_or(log::Level::Info, SiteConfig::level));
    let config = config.unwrap_or_else(|err| {
        log::warn!("{err}; using defaults");
        SiteConfig::default()
    });

    let site = Rc::new(Site::init(page, Rc::new(LocalStorage), config));
    bind_navs(&site)?;
    bind_themes(&site)?;
    bind_contact(&site)?;
    bind_ready(&site)
}

fn init_logging(level: log::Level) {
    if let Err(err) = console_log::init_with_level(level) {
        web_sys::console::warn_1(&JsValue::from_str(&format!("logger already set: {err}")));
    }
}

/// Read the optional JSON override from `<script id="siteConfig">`.
fn load_config(page: &WebPage) -> Result<SiteConfig> {
    match page.document().get_element_by_id(CONFIG_SCRIPT_ID).and_then(|el| el.text_content()) {
        Some(text) if !text.trim().is_empty() => SiteConfig::from_json(&text),
        _ => Ok(SiteConfig::default()),
    }
}

fn listen<F>(target: &EventTarget, event: &str, handler: F) -> Result<()>
where
    F: FnMut(Event) + 'static,
{
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

fn bind_navs(site: &Rc<WebSite>) -> Result<()> {
    for (index, nav) in site.navs().iter().enumerate() {
        let on_toggle = Rc::clone(site);
        listen(nav.toggle(), "click", move |_| {
            if let Some(nav) = on_toggle.navs().get(index) {
                nav.on_toggle_click();
            }
        })?;

        for link in nav.link_nodes() {
            let on_link = Rc::clone(site);
            listen(link, "click", move |_| on_link.on_nav_link_click(index))?;
        }
    }
    Ok(())
}

fn bind_themes(site: &Rc<WebSite>) -> Result<()> {
    for (index, theme) in site.themes().iter().enumerate() {
        let on_click = Rc::clone(site);
        listen(theme.button(), "click", move |_| {
            if let Some(theme) = on_click.themes().get(index) {
                theme.on_click();
            }
        })?;
    }
    Ok(())
}

fn bind_contact(site: &Rc<WebSite>) -> Result<()> {
    let Some(contact) = site.contact() else {
        return Ok(());
    };
    let pending: Rc<RefCell<Option<Timeout>>> = Rc::new(RefCell::new(None));

    let on_submit = Rc::clone(site);
    let pending_submit = Rc::clone(&pending);
    listen(contact.form(), "submit", move |event| {
        event.prevent_default();
        let Some(contact) = on_submit.contact() else {
            return;
        };
        let ticket = contact.submit();
        let on_complete = Rc::clone(&on_submit);
        let timeout = Timeout::new(on_submit.config().form_delay_ms, move || {
            if let Some(contact) = on_complete.contact() {
                contact.complete(ticket);
            }
        });
        // Replacing the handle drops the previous timer, which cancels it.
        *pending_submit.borrow_mut() = Some(timeout);
    })?;

    let on_hide = Rc::clone(site);
    let window = on_hide.page().window().clone();
    listen(&window, "pagehide", move |event| {
        let persisted = event.dyn_ref::<PageTransitionEvent>().is_some_and(PageTransitionEvent::persisted);
        if !persisted {
            drop(pending.borrow_mut().take());
        }
        on_hide.on_page_hide(persisted);
    })
}

/// Stagger the fade-up elements and start watching resizes once the document
/// has parsed. Runs immediately when the module loads after that point.
fn bind_ready(site: &Rc<WebSite>) -> Result<()> {
    let document = site.page().document().clone();
    if document.ready_state() != "loading" {
        return on_ready(site);
    }
    let on_loaded = Rc::clone(site);
    listen(&document, "DOMContentLoaded", move |_| {
        if let Err(err) = on_ready(&on_loaded) {
            log::error!("ready handler failed: {err}");
        }
    })
}

fn on_ready(site: &Rc<WebSite>) -> Result<()> {
    site.on_ready();
    let on_resize = Rc::clone(site);
    let window = site.page().window().clone();
    listen(&window, "resize", move |_| {
        on_resize.on_resize();
    })
}
