//! [`Page`] over the live browser document.

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, HtmlFormElement, NodeList, Window};

use super::{Node, Page};
use crate::error::{Result, SiteError};

/// The current window and document.
#[derive(Clone, Debug)]
pub struct WebPage {
    window: Window,
    document: Document,
}

impl WebPage {
    /// Bind to the global window.
    ///
    /// # Errors
    ///
    /// Fails outside a browsing context (no window or no document).
    pub fn current() -> Result<Self> {
        let window = web_sys::window().ok_or(SiteError::NoWindow)?;
        let document = window.document().ok_or(SiteError::NoDocument)?;
        Ok(Self { window, document })
    }

    #[must_use]
    pub fn window(&self) -> &Window {
        &self.window
    }

    #[must_use]
    pub fn document(&self) -> &Document {
        &self.document
    }
}

fn html_elements(list: std::result::Result<NodeList, wasm_bindgen::JsValue>, selector: &str) -> Vec<HtmlElement> {
    match list {
        Ok(list) => (0..list.length())
            .filter_map(|i| list.item(i))
            .filter_map(|n| n.dyn_ref::<HtmlElement>().cloned())
            .collect(),
        Err(err) => {
            log::warn!("querySelectorAll({selector}) failed: {}", SiteError::from(err));
            Vec::new()
        }
    }
}

impl Page for WebPage {
    type Node = HtmlElement;

    fn element_by_id(&self, id: &str) -> Option<HtmlElement> {
        self.document.get_element_by_id(id)?.dyn_ref::<HtmlElement>().cloned()
    }

    fn query_selector(&self, selector: &str) -> Option<HtmlElement> {
        match self.document.query_selector(selector) {
            Ok(found) => found?.dyn_ref::<HtmlElement>().cloned(),
            Err(err) => {
                log::warn!("querySelector({selector}) failed: {}", SiteError::from(err));
                None
            }
        }
    }

    fn query_selector_all(&self, selector: &str) -> Vec<HtmlElement> {
        html_elements(self.document.query_selector_all(selector), selector)
    }

    fn query_within(&self, root: &HtmlElement, selector: &str) -> Vec<HtmlElement> {
        html_elements(root.query_selector_all(selector), selector)
    }

    fn ids_with_prefix(&self, prefix: &str) -> Vec<String> {
        self.query_selector_all(&format!("[id^=\"{prefix}\"]"))
            .iter()
            .map(|el| Element::id(el))
            .collect()
    }

    fn viewport_width(&self) -> f64 {
        self.window.inner_width().map_or(0.0, |w| w.as_f64().unwrap_or(0.0))
    }
}

impl Node for HtmlElement {
    fn id(&self) -> String {
        Element::id(self)
    }

    fn style(&self, property: &str) -> String {
        HtmlElement::style(self).get_property_value(property).unwrap_or_default()
    }

    fn set_style(&self, property: &str, value: &str) {
        let style = HtmlElement::style(self);
        let result = if value.is_empty() {
            style.remove_property(property).map(|_| ())
        } else {
            style.set_property(property, value)
        };
        if let Err(err) = result {
            log::warn!("style {property}={value} failed: {}", SiteError::from(err));
        }
    }

    fn has_class(&self, class: &str) -> bool {
        self.class_list().contains(class)
    }

    fn add_class(&self, class: &str) {
        if let Err(err) = self.class_list().add_1(class) {
            log::warn!("classList.add({class}) failed: {}", SiteError::from(err));
        }
    }

    fn remove_class(&self, class: &str) {
        if let Err(err) = self.class_list().remove_1(class) {
            log::warn!("classList.remove({class}) failed: {}", SiteError::from(err));
        }
    }

    fn toggle_class(&self, class: &str) -> bool {
        match self.class_list().toggle(class) {
            Ok(present) => present,
            Err(err) => {
                log::warn!("classList.toggle({class}) failed: {}", SiteError::from(err));
                self.class_list().contains(class)
            }
        }
    }

    fn set_text(&self, text: &str) {
        self.set_text_content(Some(text));
    }

    fn reset_form(&self) {
        if let Some(form) = self.dyn_ref::<HtmlFormElement>() {
            form.reset();
        }
    }
}
