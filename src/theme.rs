//! Light/dark theme toggle.
//!
//! The stylesheet switches its colour variables on a `light` class on the
//! `.site` wrapper; dark is the unmarked default. Every page may carry several
//! toggle buttons. Each attaches independently, but they all flip the same
//! wrapper, write the same storage key and redraw every `.theme-toggle` icon,
//! so whichever button is clicked the page ends up consistent.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use std::rc::Rc;

use crate::consts::{LIGHT_CLASS, MOON_ICON, SITE_WRAPPER_SELECTOR, SUN_ICON, THEME_TOGGLE_CLASS};
use crate::dom::{Node, Page, class_selector};
use crate::storage::SettingsStore;

/// Colour scheme.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    /// Stored value to theme. Anything but `"light"` is dark.
    #[must_use]
    pub fn parse(value: &str) -> Self {
        if value == "light" { Self::Light } else { Self::Dark }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Button label: sun for light, moon for dark.
    #[must_use]
    pub fn icon(self) -> &'static str {
        match self {
            Self::Light => SUN_ICON,
            Self::Dark => MOON_ICON,
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    fn from_light_class(present: bool) -> Self {
        if present { Self::Light } else { Self::Dark }
    }
}

/// Read the stored preference, defaulting to dark.
pub fn stored_theme<S: SettingsStore + ?Sized>(store: &S, key: &str) -> Theme {
    store.get(key).map_or(Theme::Dark, |value| Theme::parse(&value))
}

/// One theme button bound to the shared wrapper and store.
pub struct ThemeToggle<P: Page, S: SettingsStore> {
    page: P,
    store: Rc<S>,
    storage_key: String,
    button: P::Node,
    wrapper: P::Node,
}

impl<P: Page + Clone, S: SettingsStore> ThemeToggle<P, S> {
    /// Attach to `#toggle_id`. Returns `None` unless both the button and the
    /// `.site` wrapper exist.
    ///
    /// Applies the stored preference to the wrapper and syncs every toggle
    /// icon on the page.
    pub fn attach(page: &P, store: Rc<S>, storage_key: &str, toggle_id: &str) -> Option<Self> {
        let button = page.element_by_id(toggle_id)?;
        let wrapper = page.query_selector(SITE_WRAPPER_SELECTOR)?;

        if stored_theme(store.as_ref(), storage_key) == Theme::Light {
            wrapper.add_class(LIGHT_CLASS);
        }

        let toggle = Self { page: page.clone(), store, storage_key: storage_key.to_owned(), button, wrapper };
        toggle.sync_icons();
        log::debug!("theme toggle #{toggle_id} attached ({})", toggle.current().as_str());
        Some(toggle)
    }

    /// Theme currently applied to the wrapper.
    #[must_use]
    pub fn current(&self) -> Theme {
        Theme::from_light_class(self.wrapper.has_class(LIGHT_CLASS))
    }

    /// Flip the wrapper, persist the result and redraw every toggle icon.
    pub fn on_click(&self) -> Theme {
        let theme = Theme::from_light_class(self.wrapper.toggle_class(LIGHT_CLASS));
        self.store.set(&self.storage_key, theme.as_str());
        self.sync_icons();
        log::info!("theme switched to {}", theme.as_str());
        theme
    }

    /// Set every `.theme-toggle` element's text to the current icon.
    pub fn sync_icons(&self) {
        let icon = self.current().icon();
        for button in self.page.query_selector_all(&class_selector(THEME_TOGGLE_CLASS)) {
            button.set_text(icon);
        }
    }

    #[must_use]
    pub fn button(&self) -> &P::Node {
        &self.button
    }
}
