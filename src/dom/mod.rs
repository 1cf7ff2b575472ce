//! Minimal DOM surface used by the page controllers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Controllers never touch `web-sys` directly. They talk to a [`Page`] and its
//! [`Node`] handles, which the browser build implements over the live
//! document and tests implement with [`memory::MemoryPage`]. Handles are cheap
//! clones that share the underlying element, matching how DOM references
//! behave in the browser.

pub mod memory;
#[cfg(feature = "browser")]
pub mod web;

/// A handle to one element.
pub trait Node: Clone {
    /// The element id, or an empty string.
    fn id(&self) -> String;

    /// Inline style property value, empty when unset.
    fn style(&self, property: &str) -> String;

    /// Set an inline style property. An empty value removes the declaration
    /// so the stylesheet default applies again.
    fn set_style(&self, property: &str, value: &str);

    fn has_class(&self, class: &str) -> bool;

    fn add_class(&self, class: &str);

    fn remove_class(&self, class: &str);

    /// Toggle `class`, returning whether it is present afterwards.
    fn toggle_class(&self, class: &str) -> bool;

    fn set_text(&self, text: &str);

    /// Restore a form's controls to their initial (empty) values. No-op for
    /// anything that is not a form.
    fn reset_form(&self);
}

/// Element lookup on the current document.
pub trait Page {
    type Node: Node;

    fn element_by_id(&self, id: &str) -> Option<Self::Node>;

    /// First match for a simple selector (`#id` or `.class`).
    fn query_selector(&self, selector: &str) -> Option<Self::Node>;

    /// All matches for a simple selector, in document order.
    fn query_selector_all(&self, selector: &str) -> Vec<Self::Node>;

    /// All descendants of `root` matching a simple selector, in document order.
    fn query_within(&self, root: &Self::Node, selector: &str) -> Vec<Self::Node>;

    /// Ids of every element whose id starts with `prefix`, in document order.
    fn ids_with_prefix(&self, prefix: &str) -> Vec<String>;

    /// Current viewport width in CSS pixels.
    fn viewport_width(&self) -> f64;
}

/// `.name` selector for a class.
#[must_use]
pub fn class_selector(class: &str) -> String {
    format!(".{class}")
}
